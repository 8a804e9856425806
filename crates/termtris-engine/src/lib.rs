//! Game-state engine for a terminal falling-block puzzle.
//!
//! The crate is split in two layers:
//!
//! - [`core`] - the static shape catalog, positioned pieces and the 20×10 board
//! - [`engine`] - the fixed-tick state machine, scoring and piece generation
//!
//! Nothing in here touches the terminal, the clock or the file system. A host
//! feeds [`Command`]s and elapsed time into a [`GameState`] and draws the
//! [`RenderSnapshot`] it gets back.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use termtris_engine::{Command, GameState, Phase};
//!
//! let mut game = GameState::new();
//! game.apply(Command::MoveLeft);
//! game.apply(Command::HardDrop);
//! game.advance(Duration::from_millis(50));
//!
//! let frame = game.snapshot();
//! assert_eq!(frame.phase, Phase::Playing);
//! assert_eq!(frame.completed_pieces, 1);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece colliding after a tentative move")]
pub struct PieceCollisionError;
