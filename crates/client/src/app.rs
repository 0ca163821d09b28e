//! Interactive loop: pace ticks, render snapshots, watch for the quit keys.
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::time::{self, Duration, MissedTickBehavior};

use runtime::{RuntimeError, RuntimeHandle};

use crate::config::ClientConfig;
use crate::presentation::{terminal, ui};

pub async fn run(handle: RuntimeHandle, config: &ClientConfig) -> Result<()> {
    let mut tui = terminal::init()?;
    let _guard = terminal::TerminalGuard;

    let mut snapshot = handle.snapshot().await?;
    let mut pacing = time::interval(config.tick_interval);
    pacing.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ui::render(&mut tui, &snapshot)?;

        if quit_requested()? {
            tracing::info!(tick = %snapshot.tick, "quit requested");
            handle.stop().await?;
            break;
        }

        pacing.tick().await;

        // The final frame stays up with its banner until the user quits.
        if snapshot.status.is_terminal() {
            continue;
        }

        match handle.step().await {
            Ok(summary) => snapshot = summary.snapshot,
            Err(RuntimeError::Stopped) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Drains pending terminal events without blocking.
fn quit_requested() -> Result<bool> {
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && is_quit_key(key)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        assert!(is_quit_key(KeyEvent::from(KeyCode::Char('q'))));
        assert!(is_quit_key(KeyEvent::from(KeyCode::Esc)));
        assert!(is_quit_key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit_key(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!is_quit_key(KeyEvent::from(KeyCode::Up)));
    }
}
