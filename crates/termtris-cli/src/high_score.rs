use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use termtris_engine::GameStats;

/// The best finished game, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub score: usize,
    pub level: usize,
    pub lines: usize,
    pub recorded_at: DateTime<Utc>,
}

impl HighScoreRecord {
    pub fn from_stats(stats: &GameStats) -> Self {
        Self {
            score: stats.score(),
            level: stats.level(),
            lines: stats.total_cleared_lines(),
            recorded_at: Utc::now(),
        }
    }
}

/// A JSON file holding a single [`HighScoreRecord`].
///
/// A missing file is treated as "no record yet" (best score 0).
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> anyhow::Result<Option<HighScoreRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to open high score file: {}", self.path.display())
                });
            }
        };
        let record = serde_json::from_reader(BufReader::new(file)).with_context(|| {
            format!(
                "Failed to parse high score JSON file: {}",
                self.path.display()
            )
        })?;
        Ok(Some(record))
    }

    pub fn best_score(&self) -> anyhow::Result<usize> {
        Ok(self.load()?.map_or(0, |record| record.score))
    }

    /// Writes `record` if it beats the stored score.
    ///
    /// Returns whether the file was written.
    pub fn save_if_higher(&self, record: &HighScoreRecord) -> anyhow::Result<bool> {
        let best = self.best_score()?;
        if record.score <= best {
            return Ok(false);
        }
        self.save(record)?;
        tracing::info!(
            score = record.score,
            previous = best,
            path = %self.path.display(),
            "new high score"
        );
        Ok(true)
    }

    fn save(&self, record: &HighScoreRecord) -> anyhow::Result<()> {
        let file = File::create(&self.path).with_context(|| {
            format!("Failed to create high score file: {}", self.path.display())
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, record)
            .with_context(|| format!("Failed to write JSON to {}", self.path.display()))?;
        writeln!(writer)
            .and_then(|()| writer.flush())
            .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    struct TempFile(PathBuf);

    impl TempFile {
        fn new(name: &str) -> Self {
            let path = env::temp_dir().join(format!("termtris-{}-{name}.json", process::id()));
            let _ = fs::remove_file(&path);
            Self(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    fn record(score: usize) -> HighScoreRecord {
        HighScoreRecord {
            score,
            level: 1 + score / 1000,
            lines: score / 100,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_missing_file_means_zero() {
        let file = TempFile::new("missing");
        let store = HighScoreStore::new(&file.0);
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.best_score().unwrap(), 0);
    }

    #[test]
    fn test_record_round_trips() {
        let file = TempFile::new("round-trip");
        let store = HighScoreStore::new(&file.0);
        let record = record(1200);
        assert!(store.save_if_higher(&record).unwrap());
        assert_eq!(store.load().unwrap(), Some(record));
    }

    #[test]
    fn test_only_higher_scores_overwrite() {
        let file = TempFile::new("overwrite");
        let store = HighScoreStore::new(&file.0);
        assert!(store.save_if_higher(&record(500)).unwrap());
        assert!(!store.save_if_higher(&record(500)).unwrap());
        assert!(!store.save_if_higher(&record(300)).unwrap());
        assert_eq!(store.best_score().unwrap(), 500);
        assert!(store.save_if_higher(&record(800)).unwrap());
        assert_eq!(store.best_score().unwrap(), 800);
    }

    #[test]
    fn test_zero_score_is_never_written() {
        let file = TempFile::new("zero");
        let store = HighScoreStore::new(&file.0);
        assert!(!store.save_if_higher(&record(0)).unwrap());
        assert!(!file.0.exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let file = TempFile::new("corrupt");
        fs::write(&file.0, "not json").unwrap();
        let store = HighScoreStore::new(&file.0);
        let err = store.load().unwrap_err();
        assert!(format!("{err:#}").contains("high score"), "{err:#}");
    }

    #[test]
    fn test_record_from_stats() {
        let mut stats = GameStats::new();
        stats.complete_piece_drop(2);
        let record = HighScoreRecord::from_stats(&stats);
        assert_eq!(record.score, 200);
        assert_eq!(record.level, 1);
        assert_eq!(record.lines, 2);
    }
}
