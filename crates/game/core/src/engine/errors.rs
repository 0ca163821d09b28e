//! Error types for world setup and the tick pipeline.

use crate::config::ConfigError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AgentId, GridError, Position, Tick};

/// Errors surfaced while constructing a new game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("no traversable cell left to spawn pursuers on")]
    NoSpawnCell,
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "SETUP_CONFIG",
            Self::Grid(_) => "SETUP_GRID",
            Self::NoSpawnCell => "SETUP_NO_SPAWN_CELL",
        }
    }
}

/// Errors surfaced by a tick as a whole.
///
/// Per-agent failures are not tick errors; they are recorded as
/// [`crate::action::MoveError`]s in the tick report and the tick carries on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickError {
    #[error("tick {tick}: agent {agent} ended on non-traversable cell {position}")]
    InvariantViolated {
        tick: Tick,
        agent: AgentId,
        position: Position,
    },
}

impl GameError for TickError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvariantViolated { .. } => "TICK_INVARIANT_VIOLATED",
        }
    }
}

