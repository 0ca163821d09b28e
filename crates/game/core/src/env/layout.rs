//! Randomized world construction.
//!
//! Cells are visited row-major. Each one independently becomes a wall with
//! `wall_chance_percent`; otherwise, while fewer than `goal_limit` goals have
//! been placed, it becomes a goal with `goal_chance_percent`, else open.
//! No solvability guarantee is made: goals or agents may end up walled off.

use crate::config::GameConfig;
use crate::state::{Cell, GridError, GridModel, MapDimensions, Position};

use super::{RngOracle, compute_seed};

const WALL_ROLL: u32 = 0;
const GOAL_ROLL: u32 = 1;

pub struct LayoutGenerator<'a, R: RngOracle + ?Sized> {
    config: &'a GameConfig,
    rng: &'a R,
    reserved: Vec<Position>,
}

impl<'a, R: RngOracle + ?Sized> LayoutGenerator<'a, R> {
    pub fn new(config: &'a GameConfig, rng: &'a R) -> Self {
        Self {
            config,
            rng,
            reserved: Vec::new(),
        }
    }

    /// Keeps `position` open regardless of the rolls (e.g. the seeker's spawn).
    #[must_use]
    pub fn reserve(mut self, position: Position) -> Self {
        self.reserved.push(position);
        self
    }

    pub fn generate(&self) -> Result<GridModel, GridError> {
        let dimensions = MapDimensions::new(self.config.width, self.config.height);
        let mut cells = Vec::with_capacity(dimensions.area());
        let mut goals_placed = 0usize;

        for y in 0..dimensions.height {
            for x in 0..dimensions.width {
                let position = Position::new(x as i32, y as i32);
                let index = y * dimensions.width + x;
                if self.reserved.contains(&position) {
                    cells.push(Cell::Open);
                    continue;
                }

                let cell = if self.roll(index, WALL_ROLL, self.config.wall_chance_percent) {
                    Cell::Wall
                } else if goals_placed < self.config.goal_limit
                    && self.roll(index, GOAL_ROLL, self.config.goal_chance_percent)
                {
                    goals_placed += 1;
                    Cell::Goal
                } else {
                    Cell::Open
                };
                cells.push(cell);
            }
        }

        tracing::debug!(
            width = dimensions.width,
            height = dimensions.height,
            goals = goals_placed,
            "generated layout"
        );

        GridModel::from_cells(dimensions, cells)
    }

    fn roll(&self, cell_index: u32, context: u32, percent: u32) -> bool {
        let seed = compute_seed(self.config.seed, 0, cell_index, context);
        self.rng.chance(seed, percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn respects_goal_limit_and_dimensions() {
        let config = GameConfig::default()
            .with_goal_chance(100)
            .with_wall_chance(0)
            .with_goal_limit(7)
            .with_seed(11);
        let grid = LayoutGenerator::new(&config, &PcgRng).generate().unwrap();

        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 20);
        assert_eq!(grid.remaining_goals(), 7);
        // With certain goal rolls the first seven cells become goals.
        assert_eq!(grid.current_goal(), Some(Position::new(0, 0)));
        assert_eq!(grid.goals()[6], Position::new(6, 0));
    }

    #[test]
    fn reserved_cells_stay_open() {
        let config = GameConfig::default().with_wall_chance(100).with_seed(3);
        let spawn = Position::new(10, 10);
        let grid = LayoutGenerator::new(&config, &PcgRng)
            .reserve(spawn)
            .generate()
            .unwrap();

        assert_eq!(grid.classify(spawn), Ok(Cell::Open));
        assert_eq!(grid.traversable_positions().collect::<Vec<_>>(), vec![spawn]);
        assert!(grid.is_cleared());
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::default().with_seed(1234);
        let a = LayoutGenerator::new(&config, &PcgRng).generate().unwrap();
        let b = LayoutGenerator::new(&config, &PcgRng).generate().unwrap();
        assert_eq!(a, b);

        let other = GameConfig::default().with_seed(4321);
        let c = LayoutGenerator::new(&other, &PcgRng).generate().unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn goal_set_matches_goal_cells() {
        let config = GameConfig::default().with_seed(77);
        let grid = LayoutGenerator::new(&config, &PcgRng).generate().unwrap();
        let goal_cells = grid
            .cells()
            .flatten()
            .filter(|cell| **cell == Cell::Goal)
            .count();
        assert_eq!(goal_cells, grid.remaining_goals());
        assert!(grid.remaining_goals() <= config.goal_limit);
        for goal in grid.goals() {
            assert_eq!(grid.classify(*goal), Ok(Cell::Goal));
        }
    }
}
