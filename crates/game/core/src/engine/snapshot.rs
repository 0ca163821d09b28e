use crate::state::{AgentId, Cell, GameStatus, Position, SimulationContext, Tick};

/// Frozen view of the simulation handed to presentation after each tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub tick: Tick,
    pub status: GameStatus,
    pub width: u32,
    pub height: u32,
    /// Cell classification, top row first.
    pub cells: Vec<Vec<Cell>>,
    /// Remaining goals in targeting order.
    pub goals: Vec<Position>,
    pub seeker: Position,
    pub score: u32,
    pub pursuers: Vec<PursuerView>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PursuerView {
    pub id: AgentId,
    pub position: Position,
    pub ai_controlled: bool,
}

impl GameSnapshot {
    /// Terminal banner, if the game has ended.
    pub fn message(&self) -> Option<&'static str> {
        self.status.message()
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        if position.x < 0 || position.y < 0 {
            return None;
        }
        self.cells
            .get(position.y as usize)?
            .get(position.x as usize)
            .copied()
    }

    pub fn pursuer_at(&self, position: Position) -> Option<&PursuerView> {
        self.pursuers.iter().find(|p| p.position == position)
    }
}

impl From<&SimulationContext> for GameSnapshot {
    fn from(context: &SimulationContext) -> Self {
        Self {
            tick: context.tick,
            status: context.status,
            width: context.grid.width(),
            height: context.grid.height(),
            cells: context.grid.cells().map(<[Cell]>::to_vec).collect(),
            goals: context.grid.goals().to_vec(),
            seeker: context.seeker.position,
            score: context.seeker.score,
            pursuers: context
                .pursuers
                .iter()
                .map(|pursuer| PursuerView {
                    id: pursuer.id,
                    position: pursuer.position,
                    ai_controlled: pursuer.is_ai_controlled(),
                })
                .collect(),
        }
    }
}
