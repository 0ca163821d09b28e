//! Tick pipeline driving the chase.
//!
//! [`GameEngine`] is the authoritative owner of the [`SimulationContext`].
//! Each [`GameEngine::tick`] runs, in order:
//!
//! 1. win check (no goals left → `WonBySeeker`)
//! 2. seeker move and goal collection
//! 3. pursuer moves in roster order
//! 4. capture check once all agents have moved (first pursuer in roster order wins)
//!
//! Per-agent move failures are logged here, recorded in the [`TickReport`],
//! and never abort the tick for other agents.

mod errors;
mod setup;
mod snapshot;

pub use errors::{SetupError, TickError};
pub use setup::build_context;
pub use snapshot::{GameSnapshot, PursuerView};

use crate::action::{MoveContext, MoveError, MoveOutcome, MoveTargets};
use crate::config::GameConfig;
use crate::env::{PcgRng, RngOracle};
use crate::error::GameError;
use crate::state::{AgentId, GameStatus, Position, SimulationContext, Tick};

/// One agent's result within a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentMove {
    pub agent: AgentId,
    pub result: Result<MoveOutcome, MoveError>,
}

/// Summary of a processed (or skipped) tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub tick: Tick,
    pub status: GameStatus,
    /// Seeker first, then pursuers in roster order. Empty when no agent moved
    /// because the game was already over or was won at the start of the tick.
    pub moves: Vec<AgentMove>,
    pub collected: Option<Position>,
    pub captured_by: Option<AgentId>,
}

impl TickReport {
    fn idle(tick: Tick, status: GameStatus) -> Self {
        Self {
            tick,
            status,
            moves: Vec::new(),
            collected: None,
            captured_by: None,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = (AgentId, &MoveError)> + '_ {
        self.moves
            .iter()
            .filter_map(|entry| entry.result.as_ref().err().map(|error| (entry.agent, error)))
    }
}

/// Game engine that owns the simulation state and advances it one tick at a time.
pub struct GameEngine<R: RngOracle = PcgRng> {
    context: SimulationContext,
    rng: R,
}

impl GameEngine<PcgRng> {
    /// Wraps an existing context (e.g. a hand-built test scenario).
    pub fn new(context: SimulationContext) -> Self {
        Self::with_rng(context, PcgRng)
    }

    /// Builds a randomized game from `config`.
    pub fn generate(config: &GameConfig) -> Result<Self, SetupError> {
        let rng = PcgRng;
        let context = build_context(config, &rng)?;
        Ok(Self::with_rng(context, rng))
    }
}

impl<R: RngOracle> GameEngine<R> {
    pub fn with_rng(context: SimulationContext, rng: R) -> Self {
        Self { context, rng }
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    pub fn status(&self) -> GameStatus {
        self.context.status
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.context)
    }

    /// Advances the simulation by one tick.
    ///
    /// Once the game is over this is a no-op that reports the terminal status.
    pub fn tick(&mut self) -> Result<TickReport, TickError> {
        if self.context.status.is_terminal() {
            return Ok(TickReport::idle(self.context.tick, self.context.status));
        }

        let tick = self.context.tick.next();
        self.context.tick = tick;

        if self.context.grid.is_cleared() {
            self.context.status = GameStatus::WonBySeeker;
            tracing::info!(%tick, score = self.context.seeker.score, "seeker cleared the board");
            return Ok(TickReport::idle(tick, GameStatus::WonBySeeker));
        }

        let mut moves = Vec::with_capacity(1 + self.context.pursuers.len());

        let seeker_result = {
            let mover = MoveContext {
                grid: &self.context.grid,
                rng: &self.rng,
                seed: self.context.seed,
                tick,
            };
            let targets = MoveTargets {
                goal: self.context.grid.current_goal(),
                seeker: self.context.seeker.position,
            };
            mover.advance(&mut self.context.seeker, targets)
        };

        // Collect wherever the seeker ends up, including when it stayed on a goal.
        let mut collected = None;
        if seeker_result.is_ok() {
            let at = self.context.seeker.position;
            if self.context.grid.collect_goal(at) {
                self.context.seeker.score += 1;
                collected = Some(at);
                tracing::debug!(%tick, goal = %at, score = self.context.seeker.score, "goal collected");
            }
        }
        moves.push(AgentMove {
            agent: self.context.seeker.id,
            result: seeker_result,
        });

        let mover = MoveContext {
            grid: &self.context.grid,
            rng: &self.rng,
            seed: self.context.seed,
            tick,
        };
        let targets = MoveTargets {
            goal: self.context.grid.current_goal(),
            seeker: self.context.seeker.position,
        };
        for pursuer in &mut self.context.pursuers {
            moves.push(AgentMove {
                agent: pursuer.id,
                result: mover.advance(pursuer, targets),
            });
        }

        for (agent, error) in moves
            .iter()
            .filter_map(|entry| entry.result.as_ref().err().map(|e| (entry.agent, e)))
        {
            tracing::warn!(
                %tick,
                %agent,
                code = error.error_code(),
                severity = %error.severity(),
                "agent move failed: {error}"
            );
        }

        let captured_by = self.context.capturing_pursuer();
        if let Some(pursuer) = captured_by {
            self.context.status = GameStatus::CapturedBySeeker;
            tracing::info!(%tick, %pursuer, at = %self.context.seeker.position, "seeker captured");
        }

        let report = TickReport {
            tick,
            status: self.context.status,
            moves,
            collected,
            captured_by,
        };

        self.audit(&report)?;
        Ok(report)
    }

    /// Runs until a terminal status or until `max_ticks` ticks have been attempted.
    ///
    /// Tick errors are logged and the loop continues with the next tick.
    pub fn run_until_terminal(&mut self, max_ticks: Option<u64>) -> GameStatus {
        let mut attempted = 0u64;
        while !self.status().is_terminal() && max_ticks.is_none_or(|max| attempted < max) {
            attempted += 1;
            if let Err(error) = self.tick() {
                tracing::error!(code = error.error_code(), "tick failed: {error}");
            }
        }
        self.status()
    }

    /// Agents that moved successfully must stand on traversable cells.
    fn audit(&self, report: &TickReport) -> Result<(), TickError> {
        let moved_ok = report
            .moves
            .iter()
            .filter(|entry| entry.result.is_ok())
            .map(|entry| entry.agent);

        for agent_id in moved_ok {
            let Some(agent) = self.context.agents().find(|agent| agent.id == agent_id) else {
                continue;
            };
            if !self.context.grid.is_traversable(agent.position) {
                return Err(TickError::InvariantViolated {
                    tick: report.tick,
                    agent: agent.id,
                    position: agent.position,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::StayReason;
    use crate::pathfinding::search;
    use crate::state::{Agent, GridModel};

    fn engine(rows: &[&str], seeker: Position, pursuers: Vec<Agent>) -> GameEngine {
        let grid = GridModel::from_rows(rows).unwrap();
        GameEngine::new(SimulationContext::new(grid, Agent::seeker(seeker), pursuers))
    }

    #[test]
    fn seeker_clears_single_goal_then_wins() {
        let rows = [".....", ".....", ".....", ".....", "....*"];
        let mut engine = engine(&rows, Position::ORIGIN, Vec::new());

        let goal = Position::new(4, 4);
        assert_eq!(search(Position::ORIGIN, goal, &engine.context().grid).len(), 8);

        for remaining in (0..8).rev() {
            let report = engine.tick().unwrap();
            assert_eq!(report.status, GameStatus::Running);
            assert_eq!(engine.context().seeker.position.manhattan_distance(goal), remaining);
        }
        assert_eq!(engine.context().seeker.position, goal);

        assert!(engine.context().grid.is_cleared());
        assert_eq!(engine.context().score(), 1);
        assert_eq!(engine.status(), GameStatus::Running);

        let report = engine.tick().unwrap();
        assert_eq!(report.status, GameStatus::WonBySeeker);
        assert!(report.moves.is_empty());
        assert_eq!(engine.snapshot().message(), Some("Pac-Man Won!"));
    }

    #[test]
    fn seeker_standing_on_goal_collects_it() {
        let rows = ["*.", ".."];
        let mut engine = engine(&rows, Position::ORIGIN, Vec::new());

        let report = engine.tick().unwrap();
        assert_eq!(
            report.moves[0].result,
            Ok(MoveOutcome::Stayed(StayReason::AtTarget))
        );
        assert_eq!(report.collected, Some(Position::ORIGIN));
        assert_eq!(engine.context().score(), 1);

        assert_eq!(engine.run_until_terminal(Some(20)), GameStatus::WonBySeeker);
        assert_eq!(engine.context().tick, Tick(2));
    }

    #[test]
    fn adjacent_ai_pursuer_captures_in_one_tick() {
        // The seeker's goal is walled off, so it holds still.
        let rows = ["..#*"];
        let mut engine = engine(
            &rows,
            Position::ORIGIN,
            vec![Agent::ai_pursuer(0, Position::new(1, 0))],
        );

        let report = engine.tick().unwrap();

        assert_eq!(report.status, GameStatus::CapturedBySeeker);
        assert_eq!(report.captured_by, Some(AgentId::pursuer(0)));
        assert_eq!(engine.context().pursuers[0].position, Position::ORIGIN);
        assert_eq!(engine.snapshot().message(), Some("Game Over!"));
    }

    #[test]
    fn pursuer_chases_seeker_to_its_new_cell() {
        let rows = ["..*", "..."];
        let mut engine = engine(
            &rows,
            Position::ORIGIN,
            vec![Agent::ai_pursuer(0, Position::new(1, 1))],
        );

        let report = engine.tick().unwrap();

        assert_eq!(engine.context().seeker.position, Position::new(1, 0));
        assert_eq!(engine.context().pursuers[0].position, Position::new(1, 0));
        assert_eq!(report.status, GameStatus::CapturedBySeeker);
        assert_eq!(report.collected, None);
    }

    #[test]
    fn boxed_in_seeker_never_wins_and_never_hangs() {
        let rows = [
            ".#..", //
            "#.#.", //
            ".#.*",
        ];
        let mut engine = engine(&rows, Position::new(1, 1), Vec::new());

        let status = engine.run_until_terminal(Some(50));

        assert_eq!(status, GameStatus::Running);
        assert_eq!(engine.context().tick, Tick(50));
        assert_eq!(engine.context().seeker.position, Position::new(1, 1));
        assert_eq!(engine.context().grid.remaining_goals(), 1);
    }

    #[test]
    fn capture_is_checked_after_all_moves_in_roster_order() {
        // Both pursuers reach the seeker's cell; the seeker cannot move.
        let rows = [
            "...", //
            "..#", //
            ".#*",
        ];
        let mut engine = engine(
            &rows,
            Position::new(1, 0),
            vec![
                Agent::ai_pursuer(0, Position::new(2, 0)),
                Agent::ai_pursuer(1, Position::new(0, 0)),
            ],
        );

        let report = engine.tick().unwrap();

        assert_eq!(report.moves.len(), 3);
        assert!(report.moves.iter().all(|entry| entry.result.is_ok()));
        assert_eq!(report.captured_by, Some(AgentId::pursuer(0)));
        assert!(
            engine
                .context()
                .pursuers
                .iter()
                .all(|p| p.position == Position::new(1, 0))
        );
    }

    #[test]
    fn terminal_status_stops_processing() {
        let rows = ["..#*"];
        let mut engine = engine(
            &rows,
            Position::ORIGIN,
            vec![Agent::ai_pursuer(0, Position::new(1, 0))],
        );
        engine.tick().unwrap();
        let before = engine.context().clone();

        let report = engine.tick().unwrap();

        assert_eq!(report.tick, Tick(1));
        assert!(report.moves.is_empty());
        assert_eq!(engine.context(), &before);
    }

    #[test]
    fn failing_agent_does_not_block_others() {
        let rows = [
            "#....", //
            ".....", //
            "....*",
        ];
        let mut engine = engine(
            &rows,
            Position::new(2, 1),
            vec![
                Agent::ai_pursuer(0, Position::ORIGIN),
                Agent::random_pursuer(1, Position::new(4, 0), 100),
            ],
        );

        let report = engine.tick().unwrap();

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, AgentId::pursuer(0));
        assert_eq!(engine.context().pursuers[0].position, Position::ORIGIN);
        assert!(report.moves[0].result.as_ref().unwrap().has_moved());
        assert!(report.moves[2].result.as_ref().unwrap().has_moved());
    }

    #[test]
    fn generated_games_are_reproducible() {
        let config = GameConfig::default().with_seed(2024);
        let mut a = GameEngine::generate(&config).unwrap();
        let mut b = GameEngine::generate(&config).unwrap();

        for _ in 0..40 {
            let ra = a.tick();
            let rb = b.tick();
            assert_eq!(ra, rb);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn generated_games_keep_agents_on_traversable_cells() {
        for seed in 0..10 {
            let config = GameConfig::default().with_wall_chance(25).with_seed(seed);
            let mut engine = GameEngine::generate(&config).unwrap();
            let total_goals = engine.context().grid.remaining_goals() as u32;
            for _ in 0..60 {
                engine.tick().unwrap();
                let context = engine.context();
                for agent in context.agents() {
                    assert!(context.grid.is_traversable(agent.position));
                }
                assert_eq!(
                    context.grid.remaining_goals() as u32 + context.score(),
                    total_goals
                );
            }
        }
    }
}
