//! Per-tick movement policies.
//!
//! Each agent moves at most one cell per tick. A move is only committed when
//! the destination is traversable, so agents never leave the grid or enter
//! walls, including on random steps.

use crate::env::{RngOracle, compute_seed};
use crate::pathfinding::search;
use crate::state::{Agent, Cell, GridModel, Policy, Position, Tick};

use super::{CardinalDirection, MoveError, MoveOutcome, StayReason};

const CHASE_ROLL: u32 = 0;
const DIRECTION_ROLL: u32 = 1;

/// Targets every policy may steer toward during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveTargets {
    /// First remaining goal, if any.
    pub goal: Option<Position>,
    pub seeker: Position,
}

/// Inputs shared by every agent's move within a tick.
pub struct MoveContext<'a, R: RngOracle + ?Sized> {
    pub grid: &'a GridModel,
    pub rng: &'a R,
    pub seed: u64,
    pub tick: Tick,
}

impl<R: RngOracle + ?Sized> MoveContext<'_, R> {
    /// Moves `agent` according to its policy and returns what happened.
    ///
    /// On error the agent's position is unchanged.
    pub fn advance(&self, agent: &mut Agent, targets: MoveTargets) -> Result<MoveOutcome, MoveError> {
        self.check_position(agent)?;

        let outcome = match agent.policy {
            Policy::GoalSeeking => match targets.goal {
                Some(goal) => self.follow_path(agent.position, goal),
                None => MoveOutcome::Stayed(StayReason::NoGoals),
            },
            Policy::AlwaysChase => self.follow_path(agent.position, targets.seeker),
            Policy::Probabilistic {
                chase_chance_percent,
            } => {
                let roll_seed = compute_seed(self.seed, self.tick.0, agent.id.0, CHASE_ROLL);
                let chased = if self.rng.chance(roll_seed, chase_chance_percent) {
                    Some(self.follow_path(agent.position, targets.seeker))
                        .filter(MoveOutcome::has_moved)
                } else {
                    None
                };
                chased.unwrap_or_else(|| self.random_step(agent))
            }
        };

        if let MoveOutcome::Moved { to, .. } = outcome {
            agent.position = to;
        }

        tracing::trace!(agent = %agent.id, ?outcome, "agent moved");
        Ok(outcome)
    }

    fn check_position(&self, agent: &Agent) -> Result<(), MoveError> {
        match self.grid.classify(agent.position) {
            Ok(Cell::Wall) => Err(MoveError::InsideWall {
                agent: agent.id,
                position: agent.position,
            }),
            Ok(_) => Ok(()),
            Err(_) => Err(MoveError::OutOfBounds {
                agent: agent.id,
                position: agent.position,
            }),
        }
    }

    fn follow_path(&self, from: Position, target: Position) -> MoveOutcome {
        if from == target {
            return MoveOutcome::Stayed(StayReason::AtTarget);
        }

        match search(from, target, self.grid).first() {
            Some(next) => MoveOutcome::Moved { from, to: *next },
            None => MoveOutcome::Stayed(StayReason::Unreachable),
        }
    }

    fn random_step(&self, agent: &Agent) -> MoveOutcome {
        let seed = compute_seed(self.seed, self.tick.0, agent.id.0, DIRECTION_ROLL);
        let direction = CardinalDirection::ALL[self.rng.index(seed, CardinalDirection::ALL.len())];
        let destination = agent.position.step(direction);

        if self.grid.is_traversable(destination) {
            MoveOutcome::Moved {
                from: agent.position,
                to: destination,
            }
        } else {
            MoveOutcome::Stayed(StayReason::Blocked { destination })
        }
    }
}
