use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use termtris_engine::{MAX_SHAPE_SIZE, PieceKind, ShapeMatrix};

use crate::view::BlockDisplay;

/// Preview of a piece in its spawn orientation, trimmed to its occupied cells.
#[derive(Debug, Default)]
pub struct PieceDisplay<'a> {
    piece: Option<(PieceKind, ShapeMatrix)>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new() -> Self {
        Self {
            piece: None,
            block: None,
        }
    }

    pub fn piece(self, kind: PieceKind, shape: ShapeMatrix) -> Self {
        Self {
            piece: Some((kind, shape)),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        MAX_SHAPE_SIZE as u16 * BlockDisplay::WIDTH
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * BlockDisplay::HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }
}

/// Returns `(min_x, min_y, width, height)` of the occupied part of `shape`.
fn occupied_bounds(shape: ShapeMatrix) -> Option<(usize, usize, usize, usize)> {
    let mut cells = shape.occupied_cells();
    let (x, y) = cells.next()?;
    let (min_x, min_y, max_x, max_y) =
        cells.fold((x, y, x, y), |(min_x, min_y, max_x, max_y), (x, y)| {
            (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
        });
    Some((min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some((kind, shape)) = self.piece else {
            return;
        };
        let Some((min_x, min_y, width, height)) = occupied_bounds(shape) else {
            return;
        };
        let (Ok(cols), Ok(rows)) = (u16::try_from(width), u16::try_from(height)) else {
            return;
        };

        let piece_area = area.centered(
            Constraint::Length(cols * BlockDisplay::WIDTH),
            Constraint::Length(rows * BlockDisplay::HEIGHT),
        );
        let col_constraints = (0..cols).map(|_| Constraint::Length(BlockDisplay::WIDTH));
        let row_constraints = (0..rows).map(|_| Constraint::Length(BlockDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let grid_rows = piece_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        let occupied_block = BlockDisplay::from_cell(Some(kind), false);
        let empty_block = BlockDisplay::from_cell(None, false);
        for (y, grid_row) in grid_rows.enumerate() {
            for (x, grid_cell) in grid_row.into_iter().enumerate() {
                if shape.is_occupied(min_y + y, min_x + x) {
                    Widget::render(&occupied_block, grid_cell, buf);
                } else {
                    Widget::render(&empty_block, grid_cell, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_bounds_fit_two_rows() {
        for kind in PieceKind::ALL {
            let (_, _, width, height) = occupied_bounds(kind.base_shape()).unwrap();
            assert!(width <= MAX_SHAPE_SIZE, "{kind:?}");
            assert!(height <= 2, "{kind:?}");
        }
        assert_eq!(
            occupied_bounds(PieceKind::I.base_shape()),
            Some((0, 1, 4, 1))
        );
        assert_eq!(
            occupied_bounds(PieceKind::T.base_shape()),
            Some((0, 0, 3, 2))
        );
    }
}
