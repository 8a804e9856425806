use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    block_display::*, board_display::*, game_display::*, key_binding_display::*, piece_display::*,
    stats_display::*,
};

mod block_display;
mod board_display;
mod game_display;
mod key_binding_display;
mod piece_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    pub const BLUE: Color = Color::Blue;
    pub const YELLOW: Color = Color::Yellow;
    pub const LIGHT_MAGENTA: Color = Color::LightMagenta;
    pub const RED: Color = Color::Red;
    pub const GREEN: Color = Color::Green;
    pub const LIGHT_RED: Color = Color::LightRed;
    pub const BROWN: Color = Color::Rgb(150, 75, 0);
    pub const GRAY: Color = Color::DarkGray;
    pub const BLACK: Color = Color::Black;
    pub const WHITE: Color = Color::White;
}

mod style {
    use ratatui::style::{Color, Style};
    use termtris_engine::PieceColor;

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const PAUSED: Style = fg_bg(color::BLACK, color::YELLOW);
    pub const GAME_OVER: Style = fg_bg(color::WHITE, color::RED);

    pub const fn piece(color: PieceColor) -> Style {
        bg_only(match color {
            PieceColor::Blue => color::BLUE,
            PieceColor::Yellow => color::YELLOW,
            PieceColor::LightMagenta => color::LIGHT_MAGENTA,
            PieceColor::Red => color::RED,
            PieceColor::Green => color::GREEN,
            PieceColor::LightRed => color::LIGHT_RED,
            PieceColor::Brown => color::BROWN,
        })
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
