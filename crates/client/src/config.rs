//! Client configuration read from environment variables.
use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use game_core::GameConfig;
use runtime::RuntimeConfig;

const DEFAULT_TICK_MS: u64 = 100;

/// Everything the binary needs to assemble a session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub game: GameConfig,
    /// Delay between ticks in the terminal UI.
    pub tick_interval: Duration,
    pub headless: bool,
    /// Headless safety limit; `None` runs until the game ends.
    pub max_ticks: Option<u64>,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            headless: false,
            max_ticks: None,
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CHASE_WIDTH`, `CHASE_HEIGHT` - grid size in cells (default: 20)
    /// - `CHASE_GOALS` - maximum number of goals (default: 10)
    /// - `CHASE_WALL_CHANCE`, `CHASE_GOAL_CHANCE` - layout percentages (default: 10)
    /// - `CHASE_CHASE_CHANCE` - chance a random pursuer chases (default: 40)
    /// - `CHASE_PURSUERS` - pursuer count (default: 4)
    /// - `CHASE_SEED` - game seed (default: wall clock)
    /// - `CHASE_TICK_MS` - UI tick interval in milliseconds (default: 100)
    /// - `CHASE_HEADLESS` - `1`/`true`/`yes` to run without the terminal UI
    /// - `CHASE_MAX_TICKS` - headless tick limit
    /// - `CHASE_SESSION_ID` - log directory name (default: `session_<unix time>`)
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let game = &mut config.game;

        if let Some(width) = parse(lookup("CHASE_WIDTH")) {
            game.width = width;
        }
        if let Some(height) = parse(lookup("CHASE_HEIGHT")) {
            game.height = height;
        }
        if let Some(goals) = parse(lookup("CHASE_GOALS")) {
            game.goal_limit = goals;
        }
        if let Some(percent) = parse(lookup("CHASE_WALL_CHANCE")) {
            game.wall_chance_percent = percent;
        }
        if let Some(percent) = parse(lookup("CHASE_GOAL_CHANCE")) {
            game.goal_chance_percent = percent;
        }
        if let Some(percent) = parse(lookup("CHASE_CHASE_CHANCE")) {
            game.chase_chance_percent = percent;
        }
        if let Some(count) = parse(lookup("CHASE_PURSUERS")) {
            game.pursuer_count = count;
        }
        game.seed = parse(lookup("CHASE_SEED")).unwrap_or_else(clock_seed);

        if let Some(ms) = parse::<u64>(lookup("CHASE_TICK_MS")) {
            config.tick_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(flag) = lookup("CHASE_HEADLESS") {
            config.headless = parse_flag(&flag);
        }
        config.max_ticks = parse(lookup("CHASE_MAX_TICKS"));
        config.session_id = lookup("CHASE_SESSION_ID").filter(|id| !id.trim().is_empty());

        config
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            game_config: self.game.clone(),
            ..RuntimeConfig::default()
        }
    }
}

fn parse<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
    value?.trim().parse().ok()
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("CHASE_WIDTH", "12"),
            ("CHASE_HEIGHT", "8"),
            ("CHASE_PURSUERS", "2"),
            ("CHASE_SEED", "77"),
            ("CHASE_TICK_MS", "250"),
            ("CHASE_HEADLESS", "true"),
            ("CHASE_MAX_TICKS", "300"),
            ("CHASE_SESSION_ID", "replay"),
        ]);

        assert_eq!((config.game.width, config.game.height), (12, 8));
        assert_eq!(config.game.pursuer_count, 2);
        assert_eq!(config.game.seed, 77);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert!(config.headless);
        assert_eq!(config.max_ticks, Some(300));
        assert_eq!(config.session_id.as_deref(), Some("replay"));
    }

    #[test]
    fn ignores_unparsable_values() {
        let config = config_from(&[
            ("CHASE_WIDTH", "wide"),
            ("CHASE_WALL_CHANCE", "-5"),
            ("CHASE_HEADLESS", "nope"),
            ("CHASE_SESSION_ID", "  "),
        ]);

        assert_eq!(config.game.width, GameConfig::DEFAULT_WIDTH);
        assert_eq!(
            config.game.wall_chance_percent,
            GameConfig::DEFAULT_WALL_CHANCE_PERCENT
        );
        assert!(!config.headless);
        assert!(config.session_id.is_none());
        assert_eq!(config.tick_interval, Duration::from_millis(DEFAULT_TICK_MS));
    }
}
