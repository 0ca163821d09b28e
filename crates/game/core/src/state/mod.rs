//! Authoritative simulation state.
//!
//! [`SimulationContext`] owns the grid, the agents and the tick bookkeeping.
//! Runtime layers clone or query it but mutate it exclusively through
//! [`crate::engine::GameEngine`].
pub mod types;

pub use types::{
    Agent, AgentId, Cell, GameStatus, GridError, GridModel, MapDimensions, Policy, Position, Role,
    Tick,
};

/// Everything a running game consists of, passed explicitly instead of held
/// in process-wide globals.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationContext {
    /// Base seed; combined with the tick and agent id for per-decision rolls.
    pub seed: u64,
    /// Number of ticks processed so far.
    pub tick: Tick,
    pub status: GameStatus,
    pub grid: GridModel,
    pub seeker: Agent,
    /// Pursuers in roster order.
    pub pursuers: Vec<Agent>,
}

impl SimulationContext {
    pub fn new(grid: GridModel, seeker: Agent, pursuers: Vec<Agent>) -> Self {
        Self {
            seed: 0,
            tick: Tick::ZERO,
            status: GameStatus::Running,
            grid,
            seeker,
            pursuers,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Seeker followed by the pursuers in roster order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        std::iter::once(&self.seeker).chain(self.pursuers.iter())
    }

    pub fn score(&self) -> u32 {
        self.seeker.score
    }

    /// First pursuer, in roster order, standing on the seeker's cell.
    pub fn capturing_pursuer(&self) -> Option<AgentId> {
        self.pursuers
            .iter()
            .find(|pursuer| pursuer.position == self.seeker.position)
            .map(|pursuer| pursuer.id)
    }
}
