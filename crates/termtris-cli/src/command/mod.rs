use clap::{Parser, Subcommand};

use self::{high_score::HighScoreArg, play::PlayArg};

mod high_score;
mod play;

/// Default location of the best-score file.
const DEFAULT_HIGH_SCORE_FILE: &str = "termtris_highscore.json";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a game in the terminal (default)
    Play(#[clap(flatten)] PlayArg),
    /// Print the stored high score
    HighScore(#[clap(flatten)] HighScoreArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or_else(|| Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::HighScore(arg) => high_score::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_play() {
        let args = CommandArgs::try_parse_from(["termtris"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_play_options() {
        let args = CommandArgs::try_parse_from([
            "termtris",
            "play",
            "--seed",
            "00000000000000000000000000000001",
            "--tick-rate",
            "30",
            "--high-score-file",
            "best.json",
        ])
        .unwrap();
        let Some(Mode::Play(arg)) = args.mode else {
            panic!("expected play mode");
        };
        assert_eq!(
            arg.seed.map(|seed| seed.to_string()).as_deref(),
            Some("00000000000000000000000000000001")
        );
        assert!((arg.tick_rate - 30.0).abs() < f64::EPSILON);
        assert_eq!(arg.high_score_file.to_str(), Some("best.json"));
        assert_eq!(arg.log_file.to_str(), Some("termtris.log"));
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        assert!(CommandArgs::try_parse_from(["termtris", "play", "--seed", "xyz"]).is_err());
    }

    #[test]
    fn test_high_score_default_path() {
        let args = CommandArgs::try_parse_from(["termtris", "high-score"]).unwrap();
        let Some(Mode::HighScore(arg)) = args.mode else {
            panic!("expected high-score mode");
        };
        assert_eq!(arg.high_score_file.to_str(), Some(DEFAULT_HIGH_SCORE_FILE));
    }
}
