//! Runtime orchestration for the deterministic chase simulation.
//!
//! This crate moves the synchronous [`game_core::GameEngine`] into a worker
//! task and exposes it through a cloneable [`RuntimeHandle`]. Clients step the
//! simulation, query snapshots and subscribe to [`GameEvent`]s without ever
//! touching the engine directly.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] defines what the worker broadcasts after each tick
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle, TickSummary};
pub use events::GameEvent;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
