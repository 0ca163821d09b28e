pub mod agent;
pub mod common;
pub mod grid;
pub mod status;

pub use agent::{Agent, AgentId, Policy, Role};
pub use common::{Position, Tick};
pub use grid::{Cell, GridError, GridModel, MapDimensions};
pub use status::GameStatus;
