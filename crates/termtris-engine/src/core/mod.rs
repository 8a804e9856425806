pub use self::{board::*, piece::*, shape::*};

pub(crate) mod board;
pub(crate) mod piece;
pub(crate) mod shape;

/// Number of columns of the board.
pub const BOARD_WIDTH: usize = 10;
/// Number of rows of the board.
pub const BOARD_HEIGHT: usize = 20;
