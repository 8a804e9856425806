use std::time::Duration;

use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use termtris_engine::{Command, GameState};

use crate::{
    command::play::input,
    high_score::{HighScoreRecord, HighScoreStore},
    tui::{App, Runtime},
    view::{GameDisplay, KeyBindingDisplay},
};

#[derive(Debug)]
pub(crate) struct PlayApp {
    game: GameState,
    store: HighScoreStore,
    best_score: usize,
    tick_rate: f64,
    score_recorded: bool,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(
        game: GameState,
        store: HighScoreStore,
        tick_rate: f64,
    ) -> anyhow::Result<Self> {
        let best_score = store.best_score()?;
        tracing::info!(best_score, path = %store.path().display(), "loaded high score");
        Ok(Self {
            game,
            store,
            best_score,
            tick_rate,
            score_recorded: false,
            is_exiting: false,
        })
    }

    fn apply(&mut self, command: Command) -> anyhow::Result<()> {
        if command == Command::Quit {
            tracing::info!(score = self.game.stats().score(), "quit requested");
            self.record_score()?;
            self.is_exiting = true;
            return Ok(());
        }

        let outcome = self.game.apply(command);
        tracing::debug!(%command, ?outcome, "command");
        if command == Command::Reset {
            self.score_recorded = false;
        }
        self.record_if_game_over()
    }

    fn record_if_game_over(&mut self) -> anyhow::Result<()> {
        if self.game.phase().is_game_over() {
            self.record_score()?;
        }
        Ok(())
    }

    /// Stores the current game's score if it is a new best; once per game.
    fn record_score(&mut self) -> anyhow::Result<()> {
        if self.score_recorded {
            return Ok(());
        }
        self.score_recorded = true;
        let record = HighScoreRecord::from_stats(self.game.stats());
        if self.store.save_if_higher(&record)? {
            self.best_score = record.score;
        }
        Ok(())
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(self.tick_rate);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> anyhow::Result<()> {
        if let Some(key) = event.as_key_press_event()
            && let Some(command) = input::command_for_key(key)
        {
            self.apply(command)?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let snapshot = self.game.snapshot();
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(&GameDisplay::new(&snapshot, self.best_score), main_area);
        frame.render_widget(
            KeyBindingDisplay::new(input::key_bindings(snapshot.phase)),
            help_area,
        );
    }

    fn update(&mut self, _runtime: &mut Runtime, elapsed: Duration) -> anyhow::Result<()> {
        self.game.advance(elapsed);
        self.record_if_game_over()
    }
}
