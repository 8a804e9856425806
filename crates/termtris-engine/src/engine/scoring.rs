use std::time::Duration;

/// Lines needed to gain one level.
pub const LINES_PER_LEVEL: usize = 10;
/// Points per cleared line at level 1.
pub const LINE_CLEAR_POINTS: usize = 100;
/// Score needed for each fall-speed step.
pub const SCORE_PER_SPEED_STEP: usize = 500;
/// Fall interval at score 0.
pub const INITIAL_FALL_INTERVAL: Duration = Duration::from_millis(500);
/// Amount the fall interval shrinks per speed step.
pub const FALL_INTERVAL_STEP: Duration = Duration::from_millis(50);
/// Floor of the fall interval.
pub const MIN_FALL_INTERVAL: Duration = Duration::from_millis(100);

/// Number of histogram buckets; clears of four or more lines share the last.
pub const LINE_CLEAR_BUCKETS: usize = 5;

/// Points awarded for clearing `lines` rows at once at `level`.
///
/// ```
/// use termtris_engine::line_clear_points;
///
/// assert_eq!(line_clear_points(2, 3), 600);
/// assert_eq!(line_clear_points(0, 7), 0);
/// ```
#[must_use]
pub const fn line_clear_points(lines: usize, level: usize) -> usize {
    LINE_CLEAR_POINTS * lines * level
}

#[must_use]
pub const fn level_for_lines(total_lines: usize) -> usize {
    1 + total_lines / LINES_PER_LEVEL
}

/// Fall interval for an absolute score: 50 ms faster per 500 points, never
/// below 100 ms.
#[must_use]
pub fn fall_interval_for_score(score: usize) -> Duration {
    let steps = u32::try_from(score / SCORE_PER_SPEED_STEP).unwrap_or(u32::MAX);
    INITIAL_FALL_INTERVAL
        .saturating_sub(FALL_INTERVAL_STEP.saturating_mul(steps))
        .max(MIN_FALL_INTERVAL)
}

/// Score, level and line statistics of a single game.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use termtris_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// assert_eq!(stats.complete_piece_drop(4), 400);
/// assert_eq!(stats.complete_piece_drop(4), 400);
///
/// assert_eq!(stats.score(), 800);
/// assert_eq!(stats.level(), 1);
/// assert_eq!(stats.total_cleared_lines(), 8);
/// assert_eq!(stats.line_cleared_counter()[4], 2);
/// assert_eq!(stats.fall_interval(), Duration::from_millis(450));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    level: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; LINE_CLEAR_BUCKETS],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates statistics for a fresh game: score 0, level 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; LINE_CLEAR_BUCKETS],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Returns the number of pieces locked into the board.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns how many locks cleared 0, 1, 2, 3 and 4+ lines.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; LINE_CLEAR_BUCKETS] {
        &self.line_cleared_counter
    }

    /// Returns the current time between automatic falls.
    #[must_use]
    pub fn fall_interval(&self) -> Duration {
        fall_interval_for_score(self.score)
    }

    /// Records a lock that cleared `cleared_lines` rows and returns the points
    /// awarded.
    ///
    /// Points use the level before the update.
    pub fn complete_piece_drop(&mut self, cleared_lines: usize) -> usize {
        self.completed_pieces += 1;
        let bucket = cleared_lines.min(LINE_CLEAR_BUCKETS - 1);
        self.line_cleared_counter[bucket] += 1;
        if cleared_lines == 0 {
            return 0;
        }

        let points = line_clear_points(cleared_lines, self.level);
        self.score += points;
        self.total_cleared_lines += cleared_lines;
        self.level = level_for_lines(self.total_cleared_lines);
        points
    }
}
