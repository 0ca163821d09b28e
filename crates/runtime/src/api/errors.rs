//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from world setup and worker coordination so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::SetupError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to set up a new game")]
    Setup(#[from] SetupError),

    #[error("runtime has been stopped")]
    Stopped,

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
