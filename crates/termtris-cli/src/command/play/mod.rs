use std::path::PathBuf;

use termtris_engine::{GameState, PieceSeed};

use crate::{high_score::HighScoreStore, logging, tui::Runtime};

use self::app::PlayApp;

mod app;
mod input;

const DEFAULT_LOG_FILE: &str = "termtris.log";
const DEFAULT_TICK_RATE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub(crate) struct PlayArg {
    /// JSON file holding the best score
    #[clap(long, default_value = super::DEFAULT_HIGH_SCORE_FILE)]
    pub(crate) high_score_file: PathBuf,
    /// Seed for a reproducible piece sequence (32 hex digits)
    #[clap(long)]
    pub(crate) seed: Option<PieceSeed>,
    /// File that receives log output
    #[clap(long, default_value = DEFAULT_LOG_FILE)]
    pub(crate) log_file: PathBuf,
    /// Game loop updates per second
    #[clap(long, default_value_t = DEFAULT_TICK_RATE, value_parser = parse_tick_rate)]
    pub(crate) tick_rate: f64,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            high_score_file: super::DEFAULT_HIGH_SCORE_FILE.into(),
            seed: None,
            log_file: DEFAULT_LOG_FILE.into(),
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

fn parse_tick_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("tick rate must be a positive number, got {s}"))
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        high_score_file,
        seed,
        log_file,
        tick_rate,
    } = arg;

    logging::init(log_file)?;

    let game = match seed {
        Some(seed) => {
            tracing::info!(%seed, "using fixed piece seed");
            GameState::with_seed(*seed)
        }
        None => GameState::new(),
    };
    let store = HighScoreStore::new(high_score_file);
    let mut app = PlayApp::new(game, store, *tick_rate)?;

    Runtime::new().run(&mut app)?;

    tracing::info!("exiting");
    Ok(())
}
