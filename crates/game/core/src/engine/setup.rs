//! Builds a fresh [`SimulationContext`] from a [`GameConfig`].
//!
//! The seeker spawns at the grid center, which the layout generator keeps
//! open. Pursuers spawn on random traversable cells other than the seeker's;
//! roster index 0 is the AI-controlled pursuer.

use crate::config::GameConfig;
use crate::env::{LayoutGenerator, RngOracle, compute_seed};
use crate::state::{Agent, AgentId, MapDimensions, SimulationContext};

use super::SetupError;

const SPAWN_ROLL: u32 = 2;

pub fn build_context<R: RngOracle + ?Sized>(
    config: &GameConfig,
    rng: &R,
) -> Result<SimulationContext, SetupError> {
    config.validate()?;

    let dimensions = MapDimensions::new(config.width, config.height);
    let seeker_spawn = dimensions.center();
    let grid = LayoutGenerator::new(config, rng)
        .reserve(seeker_spawn)
        .generate()?;

    let candidates: Vec<_> = grid
        .traversable_positions()
        .filter(|position| *position != seeker_spawn)
        .collect();
    if candidates.is_empty() {
        return Err(SetupError::NoSpawnCell);
    }

    let pursuers = (0..config.pursuer_count)
        .map(|roster_index| {
            let seed = compute_seed(
                config.seed,
                0,
                AgentId::pursuer(roster_index).0,
                SPAWN_ROLL,
            );
            let position = candidates[rng.index(seed, candidates.len())];
            if roster_index == 0 {
                Agent::ai_pursuer(roster_index, position)
            } else {
                Agent::random_pursuer(roster_index, position, config.chase_chance_percent)
            }
        })
        .collect();

    let context = SimulationContext::new(grid, Agent::seeker(seeker_spawn), pursuers)
        .with_seed(config.seed);

    tracing::info!(
        seed = config.seed,
        width = config.width,
        height = config.height,
        goals = context.grid.remaining_goals(),
        pursuers = context.pursuers.len(),
        "new game"
    );

    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::{Policy, Position};

    #[test]
    fn seeker_spawns_at_center_and_roster_leads_with_ai() {
        let config = GameConfig::default().with_seed(99);
        let context = build_context(&config, &PcgRng).unwrap();

        assert_eq!(context.seeker.position, Position::new(10, 10));
        assert!(context.grid.is_traversable(context.seeker.position));
        assert_eq!(context.pursuers.len(), 4);
        assert!(context.pursuers[0].is_ai_controlled());
        for (index, pursuer) in context.pursuers.iter().enumerate().skip(1) {
            assert_eq!(pursuer.id, AgentId::pursuer(index));
            assert_eq!(
                pursuer.policy,
                Policy::Probabilistic {
                    chase_chance_percent: 40
                }
            );
        }
    }

    #[test]
    fn pursuers_spawn_on_traversable_cells_away_from_seeker() {
        for seed in 0..20 {
            let config = GameConfig::default().with_wall_chance(40).with_seed(seed);
            let context = build_context(&config, &PcgRng).unwrap();
            for pursuer in &context.pursuers {
                assert!(context.grid.is_traversable(pursuer.position));
                assert_ne!(pursuer.position, context.seeker.position);
            }
        }
    }

    #[test]
    fn fully_walled_board_has_nowhere_to_spawn() {
        let config = GameConfig::default().with_wall_chance(100);
        assert_eq!(
            build_context(&config, &PcgRng),
            Err(SetupError::NoSpawnCell)
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig::default().with_chase_chance(150);
        assert!(matches!(
            build_context(&config, &PcgRng),
            Err(SetupError::Config(_))
        ));
    }
}
