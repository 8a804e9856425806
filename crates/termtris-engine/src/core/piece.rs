use super::shape::{PieceKind, PieceRotation, ShapeMatrix};

/// Column of the bounding-box origin of a freshly spawned piece (W/2 − 2).
pub const PIECE_SPAWN_X: i32 = 3;
/// Row of the bounding-box origin of a freshly spawned piece.
pub const PIECE_SPAWN_Y: i32 = 0;

/// A falling piece: kind, rotation state and bounding-box origin.
///
/// Movement and rotation never check bounds and never fail. Callers that need
/// legality copy the piece first and restore the copy when the
/// [`Board`](super::Board) reports a collision.
///
/// # Example
///
/// ```
/// use termtris_engine::{Piece, PieceKind, PiecePosition};
///
/// let mut piece = Piece::new(PieceKind::O);
/// piece.move_right();
/// piece.move_down();
/// assert_eq!(piece.position(), PiecePosition::new(4, 1));
/// assert_eq!(
///     piece.occupied_cells().collect::<Vec<_>>(),
///     vec![(4, 1), (5, 1), (4, 2), (5, 2)],
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    rotation: PieceRotation,
    position: PiecePosition,
}

impl Piece {
    /// Creates a piece of `kind` at the spawn position in the spawn orientation.
    #[must_use]
    pub const fn new(kind: PieceKind) -> Self {
        Self::at(kind, PieceRotation::SPAWN, PiecePosition::SPAWN)
    }

    #[must_use]
    pub const fn at(kind: PieceKind, rotation: PieceRotation, position: PiecePosition) -> Self {
        Self {
            kind,
            rotation,
            position,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    #[must_use]
    pub const fn position(&self) -> PiecePosition {
        self.position
    }

    pub fn move_left(&mut self) {
        self.position.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.position.x += 1;
    }

    pub fn move_down(&mut self) {
        self.position.y += 1;
    }

    pub fn move_up(&mut self) {
        self.position.y -= 1;
    }

    /// Turns the piece 90° clockwise around its bounding box.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.rotated_cw();
    }

    #[must_use]
    pub const fn current_shape(&self) -> ShapeMatrix {
        self.kind.shape(self.rotation)
    }

    /// Returns an iterator of absolute `(x, y)` grid coordinates of occupied cells.
    ///
    /// Cells are yielded row by row, top to bottom. Coordinates may lie outside
    /// the board.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let PiecePosition { x, y } = self.position;
        self.current_shape()
            .occupied_cells()
            .map(move |(dx, dy)| (x + offset(dx), y + offset(dy)))
    }
}

/// Position of the top-left corner of a piece's bounding box.
///
/// `x` grows rightward and `y` grows downward. Negative `y` is above the
/// visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PiecePosition {
    pub x: i32,
    pub y: i32,
}

impl PiecePosition {
    pub const SPAWN: Self = Self::new(PIECE_SPAWN_X, PIECE_SPAWN_Y);

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// Shape offsets are bounded by MAX_SHAPE_SIZE.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn offset(d: usize) -> i32 {
    d as i32
}
