use crate::error::{ErrorSeverity, GameError};
use crate::state::{AgentId, Position};

/// Unit step on the 4-connected grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    /// Canonical order for neighbor expansion and random step selection.
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, 1),
            CardinalDirection::South => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }
}

/// Why an agent did not move this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StayReason {
    /// Already standing on the target.
    AtTarget,
    /// The seeker has nothing left to collect.
    NoGoals,
    /// The search found no path to the target.
    Unreachable,
    /// A random step would have left the grid or entered a wall.
    Blocked { destination: Position },
}

/// Result of a single agent's move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    Moved { from: Position, to: Position },
    Stayed(StayReason),
}

impl MoveOutcome {
    pub fn destination(&self) -> Option<Position> {
        match self {
            MoveOutcome::Moved { to, .. } => Some(*to),
            MoveOutcome::Stayed(_) => None,
        }
    }

    pub fn has_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Failure inside one agent's move. The agent stays put; other agents are unaffected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("agent {agent} is outside the grid at {position}")]
    OutOfBounds { agent: AgentId, position: Position },

    #[error("agent {agent} is inside a wall at {position}")]
    InsideWall { agent: AgentId, position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Self::InsideWall { .. } => "MOVE_INSIDE_WALL",
        }
    }
}
