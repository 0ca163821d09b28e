//! Deterministic chase simulation shared by the runtime and clients.
//!
//! `game-core` defines the canonical rules (grid, pathfinding, agent policies,
//! tick loop) and exposes pure APIs with no I/O. All state mutation flows
//! through [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod pathfinding;
pub mod state;

pub use action::{
    CardinalDirection, MoveContext, MoveError, MoveOutcome, MoveTargets, StayReason,
};
pub use config::{ConfigError, GameConfig};
pub use engine::{
    AgentMove, GameEngine, GameSnapshot, PursuerView, SetupError, TickError, TickReport,
    build_context,
};
pub use env::{LayoutGenerator, PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use pathfinding::{manhattan, search};
pub use state::{
    Agent, AgentId, Cell, GameStatus, GridError, GridModel, MapDimensions, Policy, Position,
    Role, SimulationContext, Tick,
};
