/// Simulation state machine.
///
/// `Running` is the only non-terminal state; once the seeker clears the board
/// or is caught, no further ticks are processed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Running,
    WonBySeeker,
    CapturedBySeeker,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }

    /// Banner shown by presentation layers once the game has ended.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            GameStatus::Running => None,
            GameStatus::WonBySeeker => Some("Pac-Man Won!"),
            GameStatus::CapturedBySeeker => Some("Game Over!"),
        }
    }
}
