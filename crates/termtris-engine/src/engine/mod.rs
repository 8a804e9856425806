//! Game state machine, scoring and piece generation.
//!
//! This module drives the [`core`](crate::core) data structures to implement
//! the game:
//!
//! - [`GameState`] - board, active and next piece, phase and fall timer
//! - [`Command`] - discrete player input consumed by [`GameState::apply`]
//! - [`GameStats`] - score, level, lines and the derived fall interval
//! - [`PieceSource`] - where the next piece kind comes from
//! - [`RenderSnapshot`] - a by-value frame for the renderer
//!
//! # Game Flow
//!
//! 1. The host forwards each key as a [`Command`]
//! 2. The host reports elapsed time through [`GameState::advance`]
//! 3. Once the fall interval has elapsed the active piece falls one row
//! 4. A piece that cannot fall locks, full rows are cleared and scored
//! 5. The next piece is promoted until a lock reaches the top row
//!
//! # Example
//!
//! ```
//! use termtris_engine::{Command, CommandOutcome, GameState, Phase};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.apply(Command::TogglePause), CommandOutcome::Applied);
//! assert_eq!(game.phase(), Phase::Paused);
//! assert_eq!(game.apply(Command::MoveLeft), CommandOutcome::Ignored);
//! ```

pub use self::{command::*, game_state::*, piece_source::*, scoring::*, snapshot::*};

mod command;
mod game_state;
mod piece_source;
mod scoring;
mod snapshot;
