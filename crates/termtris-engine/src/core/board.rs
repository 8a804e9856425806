use super::{BOARD_HEIGHT, BOARD_WIDTH, piece::Piece, shape::PieceKind};

/// A single grid cell: empty, or holding the kind of the piece that locked there.
pub type Cell = Option<PieceKind>;

/// A single board row, left to right.
pub type Row = [Cell; BOARD_WIDTH];

/// Result of locking a piece into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlacementOutcome {
    /// A cell of the piece lies above the visible top; nothing was written.
    SpawnBlocked,
    /// All cells were written and full rows were removed.
    Placed { lines_cleared: usize },
}

/// The 20×10 grid of locked blocks.
///
/// Row 0 is the top. The falling piece is never part of the board until it
/// is locked with [`Board::place`].
///
/// The board is open at the top: cells above row 0 never collide, so a piece
/// may rotate partly out of view. Both side walls and the floor are closed.
///
/// # Example
///
/// ```
/// use termtris_engine::{Board, Piece, PieceKind, PlacementOutcome};
///
/// let mut board = Board::EMPTY;
/// let mut piece = Piece::new(PieceKind::O);
/// while !board.collides(&piece) {
///     piece.move_down();
/// }
/// piece.move_up();
///
/// let outcome = board.place(&piece);
/// assert_eq!(outcome, PlacementOutcome::Placed { lines_cleared: 0 });
/// assert_eq!(board.cell(3, 19), Some(PieceKind::O));
/// assert_eq!(board.occupied_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        rows: [[None; BOARD_WIDTH]; BOARD_HEIGHT],
    };

    /// Returns the cell at column `x`, row `y`, or `None` if empty or off the board.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows.get(y).and_then(|row| row.get(x).copied().flatten())
    }

    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row; BOARD_HEIGHT] {
        &self.rows
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Tests whether the piece overlaps a wall, the floor or a locked block.
    ///
    /// Cells with negative `y` are in bounds and never collide.
    #[must_use]
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.occupied_cells().any(|(x, y)| {
            let Some(col) = column_index(x) else {
                return true;
            };
            if y < 0 {
                return false;
            }
            match row_index(y) {
                Some(row) => self.rows[row][col].is_some(),
                None => true,
            }
        })
    }

    /// Locks the piece's cells into the grid and clears completed rows.
    ///
    /// Cells are visited row by row from the top, so a piece reaching above
    /// the visible area is reported as [`PlacementOutcome::SpawnBlocked`]
    /// before any cell is written.
    ///
    /// The piece must lie between the side walls and above the floor, as any
    /// piece that [`collides`](Self::collides) rejected a move into does.
    pub fn place(&mut self, piece: &Piece) -> PlacementOutcome {
        debug_assert!(
            piece
                .occupied_cells()
                .all(|(x, y)| column_index(x).is_some() && (y < 0 || row_index(y).is_some())),
            "piece outside the board: {piece:?}"
        );
        let kind = piece.kind();
        for (x, y) in piece.occupied_cells() {
            if y < 0 {
                return PlacementOutcome::SpawnBlocked;
            }
            if let (Some(col), Some(row)) = (column_index(x), row_index(y)) {
                self.rows[row][col] = Some(kind);
            }
        }
        let lines_cleared = self.clear_lines();
        PlacementOutcome::Placed { lines_cleared }
    }

    /// Removes every full row, shifting the rows above it down by one.
    ///
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.rows[row].iter().all(Option::is_some) {
                self.rows.copy_within(0..row, 1);
                self.rows[0] = [None; BOARD_WIDTH];
                cleared += 1;
                // the row now holding the former row above is examined again
                continue;
            }
            y -= 1;
        }
        cleared
    }

    #[must_use]
    pub fn top_row_occupied(&self) -> bool {
        self.rows[0].iter().any(Option::is_some)
    }

    /// Builds a board from text rows aligned to the bottom edge.
    ///
    /// `.` is empty and a kind letter is a block of that kind.
    #[cfg(test)]
    pub(crate) fn from_ascii(bottom_rows: &[&str]) -> Self {
        assert!(bottom_rows.len() <= BOARD_HEIGHT);
        let mut board = Self::EMPTY;
        let offset = BOARD_HEIGHT - bottom_rows.len();
        for (i, line) in bottom_rows.iter().enumerate() {
            assert_eq!(line.len(), BOARD_WIDTH, "row {i}: {line:?}");
            for (x, c) in line.chars().enumerate() {
                board.rows[offset + i][x] = PieceKind::from_char(c);
            }
        }
        board
    }
}

fn column_index(x: i32) -> Option<usize> {
    usize::try_from(x).ok().filter(|&x| x < BOARD_WIDTH)
}

fn row_index(y: i32) -> Option<usize> {
    usize::try_from(y).ok().filter(|&y| y < BOARD_HEIGHT)
}
