use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use termtris_engine::RenderSnapshot;

use crate::view::style;

/// Score, best score, level, lines, locked pieces, fall speed and clear counts.
pub struct StatsDisplay<'a> {
    frame: &'a RenderSnapshot,
    best_score: usize,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(frame: &'a RenderSnapshot, best_score: usize) -> Self {
        Self {
            frame,
            best_score,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

type Value = fn(&StatsDisplay<'_>) -> String;

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(Value),
    LabelValue(&'static str, Value),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(|stats| stats.frame.score.to_string()),
    Row::FullLabel("BEST:"),
    Row::FullValue(|stats| stats.best_score.max(stats.frame.score).to_string()),
    Row::Empty,
    Row::LabelValue("LEVEL:", |stats| stats.frame.level.to_string()),
    Row::LabelValue("LINES:", |stats| stats.frame.total_cleared_lines.to_string()),
    Row::LabelValue("PIECES:", |stats| stats.frame.completed_pieces.to_string()),
    Row::LabelValue("SPEED:", |stats| {
        format!("{}ms", stats.frame.fall_interval.as_millis())
    }),
    Row::Empty,
    Row::LabelValue("SINGLES:", |stats| {
        stats.frame.line_cleared_counter[1].to_string()
    }),
    Row::LabelValue("DOUBLES:", |stats| {
        stats.frame.line_cleared_counter[2].to_string()
    }),
    Row::LabelValue("TRIPLES:", |stats| {
        stats.frame.line_cleared_counter[3].to_string()
    }),
    Row::LabelValue("TETRIS:", |stats| {
        stats.frame.line_cleared_counter[4].to_string()
    }),
];

impl Widget for &StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
