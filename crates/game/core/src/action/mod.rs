//! Agent movement: directions, outcomes and the per-tick policies.
mod movement;
mod policy;

pub use movement::{CardinalDirection, MoveError, MoveOutcome, StayReason};
pub use policy::{MoveContext, MoveTargets};
