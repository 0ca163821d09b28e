//! Chase game client binary.
//!
//! Composition root that assembles:
//! 1. Configuration from `.env` and `CHASE_*` environment variables
//! 2. Logging into the session's cache directory
//! 3. The runtime (simulation worker) via [`runtime::Runtime::builder`]
//! 4. Either the terminal UI or the headless driver
//!
//! ```bash
//! CHASE_SEED=42 cargo run -p chase-client
//! CHASE_HEADLESS=1 CHASE_MAX_TICKS=500 cargo run -p chase-client
//! ```

mod app;
mod config;
mod headless;
mod logging;
mod presentation;

use anyhow::Result;
use runtime::Runtime;

use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.session_id.as_deref(), config.headless)?;

    tracing::info!(
        width = config.game.width,
        height = config.game.height,
        pursuers = config.game.pursuer_count,
        seed = config.game.seed,
        headless = config.headless,
        "starting chase client"
    );

    let runtime = Runtime::builder()
        .config(config.runtime_config())
        .build()
        .await?;
    let handle = runtime.handle();

    let result = if config.headless {
        headless::run(handle, config.max_ticks).await.map(|_| ())
    } else {
        app::run(handle, &config).await
    };

    runtime.shutdown().await?;
    tracing::info!("client shutdown complete");
    result
}
