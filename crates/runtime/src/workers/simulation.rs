//! Simulation worker that owns the authoritative [`game_core::GameEngine`].
//!
//! Receives commands from [`crate::RuntimeHandle`], advances the engine one
//! tick at a time, and publishes [`GameEvent`] notifications. This is the
//! tick-level error boundary: a [`game_core::TickError`] is logged and
//! broadcast, never propagated to the caller.

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{error, info};

use game_core::{GameEngine, GameError, GameSnapshot};

use crate::api::TickSummary;
use crate::events::GameEvent;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Advance one tick and reply with its summary.
    Step {
        reply: oneshot::Sender<TickSummary>,
    },
    /// Query the current snapshot (read-only).
    Snapshot {
        reply: oneshot::Sender<GameSnapshot>,
    },
    /// Stop accepting ticks and exit.
    Stop,
}

/// Background task that processes simulation commands.
pub struct SimulationWorker {
    engine: GameEngine,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl SimulationWorker {
    pub fn new(
        engine: GameEngine,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            engine,
            command_rx,
            event_tx,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        info!(
            target: "runtime::worker",
            seed = self.engine.context().seed,
            "simulation worker started"
        );

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                Command::Step { reply } => {
                    let summary = self.step();
                    let _ = reply.send(summary);
                }
                Command::Snapshot { reply } => {
                    let _ = reply.send(self.engine.snapshot());
                }
                Command::Stop => {
                    info!(target: "runtime::worker", tick = %self.engine.context().tick, "stop requested");
                    let _ = self.event_tx.send(GameEvent::Stopped);
                    break;
                }
            }
        }

        info!(target: "runtime::worker", "simulation worker exited");
    }

    fn step(&mut self) -> TickSummary {
        let was_terminal = self.engine.status().is_terminal();

        let result = self.engine.tick();
        let snapshot = self.engine.snapshot();

        let report = match result {
            Ok(report) => Some(report),
            Err(err) => {
                error!(
                    target: "runtime::worker",
                    tick = %snapshot.tick,
                    code = err.error_code(),
                    severity = %err.severity(),
                    "tick failed: {err}"
                );
                let _ = self.event_tx.send(GameEvent::TickFailed {
                    tick: snapshot.tick,
                    error: err,
                });
                None
            }
        };

        if !was_terminal {
            if let Some(report) = &report {
                let _ = self.event_tx.send(GameEvent::TickCompleted {
                    report: report.clone(),
                    snapshot: Box::new(snapshot.clone()),
                });
            }

            if snapshot.status.is_terminal() {
                info!(
                    target: "runtime::worker",
                    tick = %snapshot.tick,
                    status = %snapshot.status,
                    score = snapshot.score,
                    "game ended"
                );
                let _ = self.event_tx.send(GameEvent::GameEnded {
                    status: snapshot.status,
                    snapshot: Box::new(snapshot.clone()),
                });
            }
        }

        TickSummary {
            tick: snapshot.tick,
            status: snapshot.status,
            report,
            snapshot,
        }
    }
}
