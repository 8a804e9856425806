use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Runtime;

/// Trait for TUI applications.
///
/// Applications executed by `Runtime::run()` must implement this trait.
pub trait App {
    /// Initializes the application.
    ///
    /// Called at the start of `Runtime::run()`. Use this to configure the tick rate.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) -> anyhow::Result<()>;

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);

    /// Advances application state by the time elapsed since the previous tick.
    fn update(&mut self, runtime: &mut Runtime, elapsed: Duration) -> anyhow::Result<()>;
}
