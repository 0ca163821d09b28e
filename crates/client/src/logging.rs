//! Tracing setup for the client binary.
//!
//! Logs always go to `client.log` under the platform cache directory. The
//! terminal UI owns the screen, so the stderr layer is only enabled headless.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process so buffered lines are flushed on exit.
pub fn setup_logging(session_id: Option<&str>, headless: bool) -> Result<WorkerGuard> {
    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = headless.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "chase")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("chase").join("logs"))
}
