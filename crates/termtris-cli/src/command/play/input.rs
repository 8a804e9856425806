use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtris_engine::{Command, Phase};

use crate::view::KeyBinding;

/// Maps a key press to a game command.
pub(super) fn command_for_key(key: KeyEvent) -> Option<Command> {
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Up => Command::RotateCw,
        KeyCode::Down => Command::SoftDrop,
        KeyCode::Char(' ') => Command::HardDrop,
        KeyCode::Char('p' | 'P') => Command::TogglePause,
        KeyCode::Char('r' | 'R' | '2') => Command::Reset,
        KeyCode::Char('1') => Command::EndGame,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Command::Quit,
        _ => return None,
    };
    Some(command)
}

const PLAYING_KEYS: &[KeyBinding<'static>] = &[
    (&["←", "→"], "Move"),
    (&["↑"], "Rotate"),
    (&["↓"], "Soft Drop"),
    (&["Space"], "Hard Drop"),
    (&["P"], "Pause"),
    (&["R"], "Reset"),
    (&["1"], "End"),
    (&["Q"], "Quit"),
];
const PAUSED_KEYS: &[KeyBinding<'static>] = &[
    (&["P"], "Resume"),
    (&["R"], "Reset"),
    (&["1"], "End"),
    (&["Q"], "Quit"),
];
const GAME_OVER_KEYS: &[KeyBinding<'static>] = &[(&["R"], "New Game"), (&["Q"], "Quit")];

/// Key bindings shown in the help line for each phase.
pub(super) fn key_bindings(phase: Phase) -> &'static [KeyBinding<'static>] {
    match phase {
        Phase::Playing => PLAYING_KEYS,
        Phase::Paused => PAUSED_KEYS,
        Phase::GameOver => GAME_OVER_KEYS,
    }
}
