//! Events broadcast by the simulation worker.
//!
//! Every subscriber receives every event; slow subscribers observe
//! `RecvError::Lagged` and should resynchronize from the next snapshot.

mod game_event;

pub use game_event::GameEvent;
