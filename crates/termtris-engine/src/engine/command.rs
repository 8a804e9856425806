/// A discrete player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Command {
    #[display("move left")]
    MoveLeft,
    #[display("move right")]
    MoveRight,
    #[display("rotate")]
    RotateCw,
    #[display("soft drop")]
    SoftDrop,
    #[display("hard drop")]
    HardDrop,
    #[display("pause")]
    TogglePause,
    #[display("reset")]
    Reset,
    #[display("quit")]
    Quit,
    #[display("end game")]
    EndGame,
}

/// What [`GameState::apply`](super::GameState::apply) did with a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CommandOutcome {
    /// The command changed the game state.
    Applied,
    /// The command was legal in the current phase but blocked by a collision.
    Rejected,
    /// The command has no effect in the current phase.
    Ignored,
}
