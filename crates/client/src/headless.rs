//! Headless driver: steps as fast as the runtime allows and logs a summary.
use anyhow::Result;
use game_core::GameStatus;
use runtime::RuntimeHandle;

pub async fn run(handle: RuntimeHandle, max_ticks: Option<u64>) -> Result<GameStatus> {
    let mut snapshot = handle.snapshot().await?;
    let mut stepped = 0u64;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    while !snapshot.status.is_terminal() && max_ticks.is_none_or(|max| stepped < max) {
        tokio::select! {
            _ = &mut ctrl_c => {
                tracing::info!(tick = %snapshot.tick, "interrupted");
                break;
            }
            summary = handle.step() => {
                snapshot = summary?.snapshot;
                stepped += 1;
            }
        }
    }

    handle.stop().await?;

    let outcome = snapshot.message().unwrap_or("Stopped");
    tracing::info!(
        tick = %snapshot.tick,
        status = %snapshot.status,
        score = snapshot.score,
        goals_left = snapshot.goals.len(),
        "{outcome}"
    );
    println!(
        "{outcome} tick={} score={} goals_left={}",
        snapshot.tick,
        snapshot.score,
        snapshot.goals.len()
    );

    Ok(snapshot.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Agent, GameEngine, GridModel, Position, SimulationContext};
    use runtime::Runtime;

    #[tokio::test]
    async fn runs_until_seeker_wins() {
        let grid = GridModel::from_rows(&[".*"]).unwrap();
        let engine = GameEngine::new(SimulationContext::new(
            grid,
            Agent::seeker(Position::ORIGIN),
            Vec::new(),
        ));
        let runtime = Runtime::builder().engine(engine).build().await.unwrap();

        let status = run(runtime.handle(), None).await.unwrap();

        assert_eq!(status, GameStatus::WonBySeeker);
        assert!(runtime.handle().is_stopped());
        runtime.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn respects_tick_limit() {
        let runtime = Runtime::builder().seed(11).build().await.unwrap();
        let handle = runtime.handle();

        run(handle.clone(), Some(0)).await.unwrap();

        assert!(handle.is_stopped());
        runtime.shutdown().await.unwrap();
    }
}
