use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};
use termtris_engine::{Phase, RenderSnapshot};

use crate::view::{BoardDisplay, PieceDisplay, StatsDisplay, color, style};

/// The whole game screen: board, next-piece preview, statistics and the
/// pause or game-over banner.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    frame: &'a RenderSnapshot,
    best_score: usize,
}

impl<'a> GameDisplay<'a> {
    pub fn new(frame: &'a RenderSnapshot, best_score: usize) -> Self {
        Self { frame, best_score }
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = match self.frame.phase {
            Phase::Playing => color::WHITE,
            Phase::Paused => color::YELLOW,
            Phase::GameOver => color::RED,
        };
        let panel = |title: &'static str| {
            Block::bordered()
                .title(Line::from(title).centered())
                .padding(Padding::horizontal(1))
                .border_style(border_style)
                .style(style::DEFAULT)
        };

        let board = BoardDisplay::new(&self.frame.cells).block(
            Block::bordered()
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let next = PieceDisplay::new()
            .piece(self.frame.next_kind, self.frame.next_shape)
            .block(panel("NEXT"));
        let stats = StatsDisplay::new(self.frame, self.best_score).block(panel("STATS"));

        let [board_column, side_column] = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(u16::max(next.width(), stats.width())),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [board_area] =
            Layout::vertical([Constraint::Length(board.height())]).areas(board_column);
        let [next_area, stats_area] = Layout::vertical([
            Constraint::Length(next.height()),
            Constraint::Length(stats.height()),
        ])
        .spacing(1)
        .areas(side_column);
        let next_area = next_area.layout::<1>(
            &Layout::horizontal([Constraint::Length(next.width())]).flex(Flex::Start),
        )[0];

        board.render(board_area, buf);
        next.render(next_area, buf);
        stats.render(stats_area, buf);

        let banner = match self.frame.phase {
            Phase::Playing => None,
            Phase::Paused => Some(("PAUSED", style::PAUSED)),
            Phase::GameOver => Some(("GAME OVER", style::GAME_OVER)),
        };
        if let Some((text, style)) = banner {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area =
                board_area.centered(Constraint::Length(board.width()), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
