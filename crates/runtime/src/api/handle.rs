//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! stepping the simulation, querying snapshots and streaming events.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{GameSnapshot, GameStatus, Tick, TickReport};

use super::errors::{Result, RuntimeError};
use crate::events::GameEvent;
use crate::workers::Command;

/// Outcome of one `step()` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSummary {
    pub tick: Tick,
    pub status: GameStatus,
    /// `None` when the tick failed its post-tick audit.
    pub report: Option<TickReport>,
    pub snapshot: GameSnapshot,
}

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<GameEvent>,
    stopped: Arc<AtomicBool>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<GameEvent>,
        stopped: Arc<AtomicBool>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
            stopped,
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// After the game has ended this returns the terminal summary again
    /// without processing another tick.
    pub async fn step(&self) -> Result<TickSummary> {
        if self.is_stopped() {
            return Err(RuntimeError::Stopped);
        }

        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Step { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the current game snapshot (read-only)
    pub async fn snapshot(&self) -> Result<GameSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events published after each processed tick.
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.event_tx.subscribe()
    }

    /// Signal the worker to stop accepting ticks and exit.
    ///
    /// Idempotent; later calls (from any clone) return immediately.
    pub async fn stop(&self) -> Result<()> {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        // A closed channel means the worker is already gone.
        if self.command_tx.send(Command::Stop).await.is_err() {
            tracing::debug!(target: "runtime::handle", "stop sent after worker exit");
        }
        Ok(())
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
