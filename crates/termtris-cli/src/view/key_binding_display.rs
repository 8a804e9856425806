use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Keys and what they do, e.g. `(&["←", "→"], "Move")`.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

/// A single centered line listing key bindings.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }
}

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const KEY_SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::White);
const ITEM_SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans = self
            .bindings
            .iter()
            .enumerate()
            .flat_map(|(i, &(keys, desc))| {
                let item_separator = (i > 0).then(|| Span::styled(" | ", ITEM_SEPARATOR_STYLE));
                let keys = keys.iter().enumerate().flat_map(|(j, &key)| {
                    let key_separator = (j > 0).then(|| Span::styled("/", KEY_SEPARATOR_STYLE));
                    key_separator
                        .into_iter()
                        .chain([Span::styled(key, KEY_STYLE)])
                });
                item_separator
                    .into_iter()
                    .chain(keys)
                    .chain([Span::raw(" "), Span::styled(desc, DESCRIPTION_STYLE)])
            });

        Line::from_iter(spans).centered().render(area, buf);
    }
}
