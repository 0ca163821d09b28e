use serde::{Deserialize, Serialize};

use game_core::{GameSnapshot, GameStatus, Tick, TickError, TickReport};

/// Notifications published once per processed tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tick finished and passed its audit.
    TickCompleted {
        report: TickReport,
        snapshot: Box<GameSnapshot>,
    },

    /// A tick failed its audit. Presentation should treat it as a no-op.
    TickFailed { tick: Tick, error: TickError },

    /// The game reached a terminal status during the last tick.
    GameEnded {
        status: GameStatus,
        snapshot: Box<GameSnapshot>,
    },

    /// The worker received the stop signal and is exiting.
    Stopped,
}

impl GameEvent {
    /// Snapshot carried by the event, if any.
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        match self {
            GameEvent::TickCompleted { snapshot, .. } | GameEvent::GameEnded { snapshot, .. } => {
                Some(snapshot)
            }
            GameEvent::TickFailed { .. } | GameEvent::Stopped => None,
        }
    }
}
