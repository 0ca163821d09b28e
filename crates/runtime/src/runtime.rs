//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the simulation.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use game_core::{GameConfig, GameEngine};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::GameEvent;
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates the simulation worker.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Stop the worker and wait for it to exit.
    pub async fn shutdown(self) -> Result<()> {
        self.handle.stop().await?;
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    engine: Option<GameEngine>,
    seed: Option<u64>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            engine: None,
            seed: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Run a prepared engine instead of generating one from the config.
    pub fn engine(mut self, engine: GameEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Override the game seed from the config.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the runtime and spawn the simulation worker.
    pub async fn build(self) -> Result<Runtime> {
        let engine = match self.engine {
            Some(engine) => engine,
            None => {
                let mut game_config = self.config.game_config.clone();
                if let Some(seed) = self.seed {
                    game_config.seed = seed;
                }
                GameEngine::generate(&game_config)?
            }
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (event_tx, _event_rx) = broadcast::channel::<GameEvent>(self.config.event_buffer_size);

        let stopped = Arc::new(AtomicBool::new(false));
        let handle = RuntimeHandle::new(command_tx, event_tx.clone(), stopped);

        let sim_worker = SimulationWorker::new(engine, command_rx, event_tx);
        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}
