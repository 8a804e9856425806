use std::path::PathBuf;

use crate::high_score::HighScoreStore;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct HighScoreArg {
    /// JSON file holding the best score
    #[clap(long, default_value = super::DEFAULT_HIGH_SCORE_FILE)]
    pub(crate) high_score_file: PathBuf,
}

pub(crate) fn run(arg: &HighScoreArg) -> anyhow::Result<()> {
    let store = HighScoreStore::new(&arg.high_score_file);
    match store.load()? {
        Some(record) => println!(
            "High score: {} (level {}, {} lines) recorded {}",
            record.score,
            record.level,
            record.lines,
            record.recorded_at.format("%Y-%m-%d %H:%M:%S UTC"),
        ),
        None => println!("No high score recorded yet in {}", store.path().display()),
    }
    Ok(())
}
