use std::time::Duration;

use crate::{
    PieceCollisionError,
    core::{Board, Piece, PieceKind, PlacementOutcome},
};

use super::{
    Command, CommandOutcome, GameStats, PieceSeed, PieceSource, RandomPieceSource, RenderSnapshot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Phase {
    Playing,
    Paused,
    #[display("Game Over")]
    GameOver,
}

/// A single game: board, falling piece, preview, statistics and phase.
///
/// The state only moves forward through [`apply`](Self::apply) and
/// [`advance`](Self::advance); it never reads the clock itself.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use termtris_engine::{Command, GameState, PieceKind, SequencePieceSource};
///
/// let mut game = GameState::with_source(SequencePieceSource::new([PieceKind::O]));
/// game.advance(Duration::from_millis(500));
/// assert_eq!(game.active_piece().position().y, 1);
///
/// game.apply(Command::HardDrop);
/// assert_eq!(game.board().cell(3, 19), Some(PieceKind::O));
/// assert_eq!(game.stats().completed_pieces(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameState<S = RandomPieceSource> {
    board: Board,
    active: Piece,
    next: PieceKind,
    source: S,
    stats: GameStats,
    phase: Phase,
    since_last_fall: Duration,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starts a game with a randomly seeded piece source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(RandomPieceSource::new())
    }

    /// Starts a game whose piece sequence is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::with_source(RandomPieceSource::with_seed(seed))
    }
}

impl<S> GameState<S>
where
    S: PieceSource,
{
    #[must_use]
    pub fn with_source(mut source: S) -> Self {
        let active = Piece::new(source.next_kind());
        let next = source.next_kind();
        Self {
            board: Board::EMPTY,
            active,
            next,
            source,
            stats: GameStats::new(),
            phase: Phase::Playing,
            since_last_fall: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active_piece(&self) -> &Piece {
        &self.active
    }

    #[must_use]
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn fall_interval(&self) -> Duration {
        self.stats.fall_interval()
    }

    /// Captures the current frame for rendering.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::new(&self.board, self.active, self.next, &self.stats, self.phase)
    }

    /// Applies a player command.
    ///
    /// In [`Phase::Paused`] only pause and reset are accepted; in
    /// [`Phase::GameOver`] only reset. [`Command::Quit`] never changes the state
    /// and is always reported as [`CommandOutcome::Ignored`].
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        let outcome = match command {
            Command::Quit => CommandOutcome::Ignored,
            Command::Reset => {
                self.reset();
                CommandOutcome::Applied
            }
            _ if self.phase.is_game_over() => CommandOutcome::Ignored,
            Command::TogglePause => {
                self.toggle_pause();
                CommandOutcome::Applied
            }
            Command::EndGame => {
                self.set_phase(Phase::GameOver);
                CommandOutcome::Applied
            }
            _ if self.phase.is_paused() => CommandOutcome::Ignored,
            Command::MoveLeft => self.try_update_piece(Piece::move_left).into(),
            Command::MoveRight => self.try_update_piece(Piece::move_right).into(),
            Command::RotateCw => self.try_update_piece(Piece::rotate).into(),
            Command::SoftDrop => {
                let result = self.try_update_piece(Piece::move_down);
                if result.is_ok() {
                    self.since_last_fall = Duration::ZERO;
                }
                result.into()
            }
            Command::HardDrop => {
                self.hard_drop();
                CommandOutcome::Applied
            }
        };
        if !outcome.is_applied() {
            tracing::trace!(%command, phase = %self.phase, ?outcome, "command not applied");
        }
        outcome
    }

    /// Accounts for `elapsed` time of play.
    ///
    /// Once the time since the last fall reaches the fall interval, the active
    /// piece falls one row, locking if it cannot. At most one fall happens per
    /// call. Time does not accumulate while paused or after game over.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.phase.is_playing() {
            return;
        }
        self.since_last_fall = self.since_last_fall.saturating_add(elapsed);
        if self.since_last_fall < self.fall_interval() {
            return;
        }
        self.since_last_fall = Duration::ZERO;
        if self.try_update_piece(Piece::move_down).is_err() {
            self.lock_active_piece();
        }
    }

    fn toggle_pause(&mut self) {
        let phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            Phase::GameOver => Phase::GameOver,
        };
        self.set_phase(phase);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            tracing::info!(
                from = %self.phase,
                to = %phase,
                score = self.stats.score(),
                "phase changed"
            );
        }
        self.phase = phase;
    }

    fn reset(&mut self) {
        self.source.reseed();
        self.board = Board::EMPTY;
        self.active = Piece::new(self.source.next_kind());
        self.next = self.source.next_kind();
        self.stats = GameStats::new();
        self.since_last_fall = Duration::ZERO;
        self.set_phase(Phase::Playing);
        tracing::info!("game reset");
    }

    /// Applies `update` to the active piece, undoing it if the result collides.
    fn try_update_piece(
        &mut self,
        update: impl FnOnce(&mut Piece),
    ) -> Result<(), PieceCollisionError> {
        let saved = self.active;
        update(&mut self.active);
        if self.board.collides(&self.active) {
            self.active = saved;
            return Err(PieceCollisionError);
        }
        Ok(())
    }

    fn hard_drop(&mut self) {
        let mut piece = self.active;
        // an overlapping start steps above it and locks there
        while !self.board.collides(&piece) {
            piece.move_down();
        }
        piece.move_up();
        self.active = piece;
        self.since_last_fall = Duration::ZERO;
        self.lock_active_piece();
    }

    fn lock_active_piece(&mut self) {
        let lines_cleared = match self.board.place(&self.active) {
            PlacementOutcome::SpawnBlocked => {
                tracing::info!(piece = ?self.active, "piece locked above the top");
                self.set_phase(Phase::GameOver);
                return;
            }
            PlacementOutcome::Placed { lines_cleared } => lines_cleared,
        };

        let points = self.stats.complete_piece_drop(lines_cleared);
        tracing::debug!(
            kind = ?self.active.kind(),
            lines_cleared,
            points,
            score = self.stats.score(),
            level = self.stats.level(),
            "piece locked"
        );

        if self.board.top_row_occupied() {
            tracing::info!(score = self.stats.score(), "stack reached the top row");
            self.set_phase(Phase::GameOver);
            return;
        }

        self.active = Piece::new(self.next);
        self.next = self.source.next_kind();
    }

    #[cfg(test)]
    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[cfg(test)]
    pub(crate) fn set_active_piece(&mut self, piece: Piece) {
        self.active = piece;
    }
}

impl From<Result<(), PieceCollisionError>> for CommandOutcome {
    fn from(result: Result<(), PieceCollisionError>) -> Self {
        match result {
            Ok(()) => CommandOutcome::Applied,
            Err(PieceCollisionError) => CommandOutcome::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{PiecePosition, PieceRotation},
        engine::SequencePieceSource,
    };

    fn game(kinds: &[PieceKind]) -> GameState<SequencePieceSource> {
        GameState::with_source(SequencePieceSource::new(kinds.iter().copied()))
    }

    #[test]
    fn test_new_game() {
        let game = game(&[PieceKind::T, PieceKind::L]);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.active_piece(), &Piece::new(PieceKind::T));
        assert_eq!(game.next_kind(), PieceKind::L);
        assert_eq!(game.board(), &Board::EMPTY);
        assert_eq!(game.stats(), &GameStats::new());
        assert_eq!(game.fall_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_hard_drop_o_on_empty_board() {
        let mut game = game(&[PieceKind::O, PieceKind::T]);
        assert_eq!(game.apply(Command::HardDrop), CommandOutcome::Applied);
        assert_eq!(
            game.board(),
            &Board::from_ascii(&["...OO.....", "...OO....."])
        );
        assert_eq!(game.stats().score(), 0);
        assert_eq!(game.stats().completed_pieces(), 1);
        assert_eq!(game.phase(), Phase::Playing);
        // next is promoted and a new next is drawn
        assert_eq!(game.active_piece(), &Piece::new(PieceKind::T));
        assert_eq!(game.next_kind(), PieceKind::O);
    }

    #[test]
    fn test_filling_last_gap_clears_one_line() {
        let mut game = game(&[PieceKind::I]);
        game.set_board(Board::from_ascii(&["IIIII.IIII"]));
        assert_eq!(game.apply(Command::RotateCw), CommandOutcome::Applied);
        assert_eq!(game.apply(Command::HardDrop), CommandOutcome::Applied);
        assert_eq!(
            game.board(),
            &Board::from_ascii(&[".....I....", ".....I....", ".....I...."])
        );
        assert_eq!(game.stats().score(), 100);
        assert_eq!(game.stats().total_cleared_lines(), 1);
        assert_eq!(game.stats().line_cleared_counter()[1], 1);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_lock_above_top_ends_game_without_clearing() {
        let mut game = game(&[PieceKind::O]);
        let mut rows = vec!["...J......"];
        rows.extend(["SSSSSSSSSS"; 18]);
        let board = Board::from_ascii(&rows);
        game.set_board(board.clone());
        game.set_active_piece(Piece::at(
            PieceKind::O,
            PieceRotation::SPAWN,
            PiecePosition::new(3, -1),
        ));

        game.apply(Command::HardDrop);
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.board(), &board);
        assert_eq!(game.stats(), &GameStats::new());
    }

    #[test]
    fn test_hard_drop_from_overlapping_spawn_ends_game() {
        let mut game = game(&[PieceKind::I]);
        let mut rows = vec!["...SSSS..."];
        rows.extend(["S........."; 18]);
        game.set_board(Board::from_ascii(&rows));
        assert!(game.board().collides(game.active_piece()));
        assert_eq!(game.board().occupied_count(), 22);

        assert_eq!(game.apply(Command::HardDrop), CommandOutcome::Applied);
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.board().occupied_count(), 26);
        for x in 3..7 {
            assert_eq!(game.board().cell(x, 0), Some(PieceKind::I));
            assert_eq!(game.board().cell(x, 1), Some(PieceKind::S));
        }
        assert_eq!(game.stats().completed_pieces(), 1);
    }

    #[test]
    fn test_lock_into_top_row_ends_game() {
        let mut game = game(&[PieceKind::O]);
        game.set_board(Board::from_ascii(&["...LL....."; 18]));
        game.apply(Command::HardDrop);
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.board().top_row_occupied());
        assert_eq!(game.stats().completed_pieces(), 1);
    }

    #[test]
    fn test_game_over_accepts_only_reset() {
        let mut game = game(&[PieceKind::O, PieceKind::Z]);
        game.apply(Command::EndGame);
        assert_eq!(game.phase(), Phase::GameOver);

        let frame = game.snapshot();
        for command in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::RotateCw,
            Command::SoftDrop,
            Command::HardDrop,
            Command::TogglePause,
            Command::EndGame,
            Command::Quit,
        ] {
            assert_eq!(game.apply(command), CommandOutcome::Ignored, "{command}");
        }
        game.advance(Duration::from_secs(10));
        assert_eq!(game.snapshot(), frame);

        assert_eq!(game.apply(Command::Reset), CommandOutcome::Applied);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_rotation_blocked_by_wall_is_reverted() {
        let mut game = game(&[PieceKind::I]);
        game.apply(Command::RotateCw);
        for _ in 0..4 {
            assert_eq!(game.apply(Command::MoveRight), CommandOutcome::Applied);
        }
        assert_eq!(game.apply(Command::MoveRight), CommandOutcome::Rejected);

        let before = *game.active_piece();
        assert_eq!(before.position(), PiecePosition::new(7, 0));
        assert_eq!(game.apply(Command::RotateCw), CommandOutcome::Rejected);
        assert_eq!(game.active_piece(), &before);
    }

    #[test]
    fn test_left_wall_rejects_move() {
        let mut game = game(&[PieceKind::O]);
        for _ in 0..3 {
            assert_eq!(game.apply(Command::MoveLeft), CommandOutcome::Applied);
        }
        assert_eq!(game.apply(Command::MoveLeft), CommandOutcome::Rejected);
        assert_eq!(game.active_piece().position(), PiecePosition::new(0, 0));
    }

    #[test]
    fn test_fall_after_interval() {
        let mut game = game(&[PieceKind::T]);
        game.advance(Duration::from_millis(499));
        assert_eq!(game.active_piece().position().y, 0);
        game.advance(Duration::from_millis(1));
        assert_eq!(game.active_piece().position().y, 1);
    }

    #[test]
    fn test_one_fall_per_advance() {
        let mut game = game(&[PieceKind::T]);
        game.advance(Duration::from_secs(5));
        assert_eq!(game.active_piece().position().y, 1);
        // the accumulator restarted from zero
        game.advance(Duration::from_millis(499));
        assert_eq!(game.active_piece().position().y, 1);
    }

    #[test]
    fn test_pause_ignores_input_and_time() {
        let mut game = game(&[PieceKind::S]);
        game.advance(Duration::from_millis(300));
        assert_eq!(game.apply(Command::TogglePause), CommandOutcome::Applied);
        assert_eq!(game.phase(), Phase::Paused);

        let frame = game.snapshot();
        for command in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::RotateCw,
            Command::SoftDrop,
            Command::HardDrop,
        ] {
            assert_eq!(game.apply(command), CommandOutcome::Ignored, "{command}");
        }
        game.advance(Duration::from_secs(60));
        assert_eq!(game.snapshot(), frame);

        assert_eq!(game.apply(Command::TogglePause), CommandOutcome::Applied);
        assert_eq!(game.phase(), Phase::Playing);
        game.advance(Duration::from_millis(199));
        assert_eq!(game.active_piece().position().y, 0);
        game.advance(Duration::from_millis(1));
        assert_eq!(game.active_piece().position().y, 1);
    }

    #[test]
    fn test_end_game_while_paused() {
        let mut game = game(&[PieceKind::S]);
        game.apply(Command::TogglePause);
        assert_eq!(game.apply(Command::EndGame), CommandOutcome::Applied);
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn test_soft_drop_resets_fall_timer() {
        let mut game = game(&[PieceKind::J]);
        game.advance(Duration::from_millis(400));
        assert_eq!(game.apply(Command::SoftDrop), CommandOutcome::Applied);
        assert_eq!(game.active_piece().position().y, 1);
        game.advance(Duration::from_millis(400));
        assert_eq!(game.active_piece().position().y, 1);
        game.advance(Duration::from_millis(100));
        assert_eq!(game.active_piece().position().y, 2);
    }

    #[test]
    fn test_blocked_soft_drop_does_not_lock() {
        let mut game = game(&[PieceKind::O]);
        for _ in 0..18 {
            assert_eq!(game.apply(Command::SoftDrop), CommandOutcome::Applied);
        }
        assert_eq!(game.apply(Command::SoftDrop), CommandOutcome::Rejected);
        assert_eq!(game.active_piece().position().y, 18);
        assert_eq!(game.board(), &Board::EMPTY);
        assert_eq!(game.stats().completed_pieces(), 0);

        // the automatic fall locks it
        game.advance(Duration::from_millis(500));
        assert_eq!(game.board().occupied_count(), 4);
        assert_eq!(game.stats().completed_pieces(), 1);
        assert_eq!(game.active_piece(), &Piece::new(PieceKind::O));
    }

    #[test]
    fn test_quit_never_changes_state() {
        let mut game = game(&[PieceKind::L]);
        for phase_change in [None, Some(Command::TogglePause), Some(Command::EndGame)] {
            if let Some(command) = phase_change {
                game.apply(command);
            }
            let frame = game.snapshot();
            assert_eq!(game.apply(Command::Quit), CommandOutcome::Ignored);
            assert_eq!(game.snapshot(), frame);
        }
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = game(&[PieceKind::I, PieceKind::O, PieceKind::T]);
        game.set_board(Board::from_ascii(&["IIIIII.III"]));
        game.apply(Command::RotateCw);
        game.apply(Command::MoveRight);
        game.apply(Command::HardDrop);
        game.advance(Duration::from_millis(250));
        assert_eq!(game.stats().score(), 100);
        game.apply(Command::TogglePause);

        assert_eq!(game.apply(Command::Reset), CommandOutcome::Applied);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.board(), &Board::EMPTY);
        assert_eq!(game.stats(), &GameStats::new());
        assert_eq!(game.fall_interval(), Duration::from_millis(500));
        assert_eq!(game.active_piece(), &Piece::new(PieceKind::I));
        assert_eq!(game.next_kind(), PieceKind::O);
        // the fall timer restarted as well
        game.advance(Duration::from_millis(499));
        assert_eq!(game.active_piece().position().y, 0);
    }

    #[test]
    fn test_seeded_games_are_identical() {
        let seed = "fedcba9876543210fedcba9876543210".parse().unwrap();
        let mut a = GameState::with_seed(seed);
        let mut b = GameState::with_seed(seed);
        for _ in 0..10 {
            assert_eq!(a.active_piece(), b.active_piece());
            assert_eq!(a.next_kind(), b.next_kind());
            a.apply(Command::HardDrop);
            b.apply(Command::HardDrop);
        }
        assert_eq!(a.board(), b.board());
    }
}
