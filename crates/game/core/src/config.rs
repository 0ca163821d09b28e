/// Game configuration constants and tunable parameters.
///
/// Probabilities are integer percentages rolled against a d100, which keeps
/// every random decision exact and reproducible from [`GameConfig::seed`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    /// Maximum number of goal tokens the layout generator places.
    pub goal_limit: usize,
    pub wall_chance_percent: u32,
    pub goal_chance_percent: u32,
    /// Roster size. Roster index 0 is always the AI-controlled pursuer.
    pub pursuer_count: usize,
    /// Chance that a non-AI pursuer attempts a search toward the seeker.
    pub chase_chance_percent: u32,
    /// Base seed for layout generation, spawning and per-tick policies.
    pub seed: u64,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WIDTH: u32 = 20;
    pub const DEFAULT_HEIGHT: u32 = 20;
    pub const DEFAULT_GOAL_LIMIT: usize = 10;
    pub const DEFAULT_WALL_CHANCE_PERCENT: u32 = 10;
    pub const DEFAULT_GOAL_CHANCE_PERCENT: u32 = 10;
    pub const DEFAULT_PURSUER_COUNT: usize = 4;
    pub const DEFAULT_CHASE_CHANCE_PERCENT: u32 = 40;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            goal_limit: Self::DEFAULT_GOAL_LIMIT,
            wall_chance_percent: Self::DEFAULT_WALL_CHANCE_PERCENT,
            goal_chance_percent: Self::DEFAULT_GOAL_CHANCE_PERCENT,
            pursuer_count: Self::DEFAULT_PURSUER_COUNT,
            chase_chance_percent: Self::DEFAULT_CHASE_CHANCE_PERCENT,
            seed: 0,
        }
    }

    #[must_use]
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_goal_limit(mut self, goal_limit: usize) -> Self {
        self.goal_limit = goal_limit;
        self
    }

    #[must_use]
    pub fn with_wall_chance(mut self, percent: u32) -> Self {
        self.wall_chance_percent = percent;
        self
    }

    #[must_use]
    pub fn with_goal_chance(mut self, percent: u32) -> Self {
        self.goal_chance_percent = percent;
        self
    }

    #[must_use]
    pub fn with_pursuer_count(mut self, count: usize) -> Self {
        self.pursuer_count = count;
        self
    }

    #[must_use]
    pub fn with_chase_chance(mut self, percent: u32) -> Self {
        self.chase_chance_percent = percent;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that the configuration describes a playable setup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        // Cell indices are u32, so the whole area must fit as well.
        let area = u64::from(self.width) * u64::from(self.height);
        if self.width > i32::MAX as u32
            || self.height > i32::MAX as u32
            || area > u64::from(u32::MAX)
        {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("wall_chance_percent", self.wall_chance_percent),
            ("goal_chance_percent", self.goal_chance_percent),
            ("chase_chance_percent", self.chase_chance_percent),
        ] {
            if value > 100 {
                return Err(ConfigError::InvalidPercent { name, value });
            }
        }
        if self.pursuer_count == 0 {
            return Err(ConfigError::NoPursuers);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must have at least one cell (got {width}x{height})")]
    EmptyGrid { width: u32, height: u32 },

    #[error("grid {width}x{height} exceeds the addressable coordinate range")]
    GridTooLarge { width: u32, height: u32 },

    #[error("{name} must be within 0..=100 (got {value})")]
    InvalidPercent { name: &'static str, value: u32 },

    #[error("at least one pursuer is required")]
    NoPursuers,
}
