use std::time::Duration;

use crate::core::{BOARD_HEIGHT, BOARD_WIDTH, Board, Cell, Piece, PieceKind, Row, ShapeMatrix};

use super::{GameStats, LINE_CLEAR_BUCKETS, Phase};

/// Everything a renderer needs to draw one frame.
///
/// `cells` holds the locked blocks with the active piece drawn over them,
/// except after game over, when only the board is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub cells: [Row; BOARD_HEIGHT],
    pub active: Piece,
    pub next_kind: PieceKind,
    pub next_shape: ShapeMatrix,
    pub score: usize,
    pub level: usize,
    pub total_cleared_lines: usize,
    pub completed_pieces: usize,
    /// Locks that cleared 0, 1, 2, 3 and 4+ lines.
    pub line_cleared_counter: [usize; LINE_CLEAR_BUCKETS],
    pub fall_interval: Duration,
    pub phase: Phase,
}

impl RenderSnapshot {
    pub(crate) fn new(
        board: &Board,
        active: Piece,
        next_kind: PieceKind,
        stats: &GameStats,
        phase: Phase,
    ) -> Self {
        let mut cells = *board.rows();
        if !phase.is_game_over() {
            for (x, y) in active.occupied_cells() {
                let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                    continue;
                };
                if x < BOARD_WIDTH && y < BOARD_HEIGHT {
                    cells[y][x] = Some(active.kind());
                }
            }
        }
        Self {
            cells,
            active,
            next_kind,
            next_shape: next_kind.base_shape(),
            score: stats.score(),
            level: stats.level(),
            total_cleared_lines: stats.total_cleared_lines(),
            completed_pieces: stats.completed_pieces(),
            line_cleared_counter: *stats.line_cleared_counter(),
            fall_interval: stats.fall_interval(),
            phase,
        }
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells.get(y).and_then(|row| row.get(x).copied().flatten())
    }
}
