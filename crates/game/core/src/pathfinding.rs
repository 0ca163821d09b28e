//! Shortest-path search over the 4-connected grid.
//!
//! A* with unit edge costs and the Manhattan heuristic, which is admissible and
//! consistent here, so returned paths are optimal. The frontier is a min-heap
//! keyed by `(cost + heuristic, insertion sequence)`: ties resolve
//! first-in-first-out, and neighbors are pushed in [`CardinalDirection::ALL`]
//! order, which makes the chosen path fully deterministic.
//!
//! [`CardinalDirection::ALL`]: crate::action::CardinalDirection::ALL

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::state::{GridModel, Position};

/// Manhattan distance heuristic.
pub fn manhattan(a: Position, b: Position) -> u32 {
    a.manhattan_distance(b)
}

/// Frontier entry; field order defines the heap ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    priority: u32,
    sequence: u64,
    cost: u32,
    position: Position,
}

/// Finds a shortest path from `start` to `goal`.
///
/// The result excludes `start`, ends exactly at `goal`, and is empty when
/// `start == goal`, when either endpoint is not traversable, or when `goal`
/// is unreachable. A partial path is never returned.
pub fn search(start: Position, goal: Position, grid: &GridModel) -> Vec<Position> {
    if start == goal || !grid.is_traversable(start) || !grid.is_traversable(goal) {
        return Vec::new();
    }

    let mut frontier = BinaryHeap::new();
    let mut best_cost: HashMap<Position, u32> = HashMap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut sequence = 0u64;

    best_cost.insert(start, 0);
    frontier.push(Reverse(FrontierEntry {
        priority: manhattan(start, goal),
        sequence,
        cost: 0,
        position: start,
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        // Superseded by a cheaper push of the same position.
        if best_cost
            .get(&entry.position)
            .is_some_and(|best| entry.cost > *best)
        {
            continue;
        }

        if entry.position == goal {
            return reconstruct(&came_from, start, goal);
        }

        for neighbor in entry.position.neighbors() {
            if !grid.is_traversable(neighbor) {
                continue;
            }

            let new_cost = entry.cost + 1;
            if best_cost.get(&neighbor).is_none_or(|known| new_cost < *known) {
                best_cost.insert(neighbor, new_cost);
                came_from.insert(neighbor, entry.position);
                sequence += 1;
                frontier.push(Reverse(FrontierEntry {
                    priority: new_cost + manhattan(neighbor, goal),
                    sequence,
                    cost: new_cost,
                    position: neighbor,
                }));
            }
        }
    }

    tracing::trace!(%start, %goal, explored = best_cost.len(), "goal unreachable");
    Vec::new()
}

fn reconstruct(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(previous) = came_from.get(&current).copied() {
        if previous == start {
            path.reverse();
            return path;
        }
        path.push(previous);
        current = previous;
    }

    // Every reached position links back to start; a broken chain means no path.
    Vec::new()
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::config::GameConfig;
    use crate::env::{LayoutGenerator, PcgRng};

    fn open_grid(width: u32, height: u32) -> GridModel {
        GridModel::new(width, height)
    }

    /// Reference shortest distances by plain breadth-first search.
    fn bfs_distance(grid: &GridModel, start: Position, goal: Position) -> Option<usize> {
        if !grid.is_traversable(start) || !grid.is_traversable(goal) {
            return None;
        }
        let mut distances = HashMap::from([(start, 0usize)]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            let distance = distances[&current];
            if current == goal {
                return Some(distance);
            }
            for neighbor in current.neighbors() {
                if grid.is_traversable(neighbor) && !distances.contains_key(&neighbor) {
                    distances.insert(neighbor, distance + 1);
                    queue.push_back(neighbor);
                }
            }
        }
        None
    }

    fn assert_valid_path(grid: &GridModel, start: Position, goal: Position, path: &[Position]) {
        assert_eq!(path.last(), Some(&goal));
        let mut previous = start;
        for step in path {
            assert!(previous.is_adjacent(*step), "{previous} -> {step} is not a unit step");
            assert!(grid.is_traversable(*step), "{step} is not traversable");
            previous = *step;
        }
    }

    #[test]
    fn start_equals_goal_is_empty() {
        let grid = open_grid(4, 4);
        for position in grid.traversable_positions().collect::<Vec<_>>() {
            assert!(search(position, position, &grid).is_empty());
        }
    }

    #[test]
    fn open_grid_paths_have_manhattan_length() {
        let grid = open_grid(5, 4);
        let cells: Vec<_> = grid.traversable_positions().collect();
        for start in &cells {
            for goal in &cells {
                let path = search(*start, *goal, &grid);
                assert_eq!(path.len() as u32, manhattan(*start, *goal));
                if start != goal {
                    assert_valid_path(&grid, *start, *goal, &path);
                }
            }
        }
    }

    #[test]
    fn wall_or_outside_goal_is_empty() {
        let grid = GridModel::from_rows(&[
            "...", //
            ".#.", //
            "...",
        ])
        .unwrap();
        let start = Position::new(0, 0);
        assert!(search(start, Position::new(1, 1), &grid).is_empty());
        assert!(search(start, Position::new(3, 0), &grid).is_empty());
        assert!(search(start, Position::new(-1, 2), &grid).is_empty());
        assert!(search(Position::new(1, 1), start, &grid).is_empty());
    }

    #[test]
    fn unreachable_goal_is_empty() {
        let grid = GridModel::from_rows(&[
            "..#..", //
            "..#.*", //
            "..#..",
        ])
        .unwrap();
        assert!(search(Position::new(0, 0), Position::new(4, 1), &grid).is_empty());
    }

    #[test]
    fn routes_around_walls() {
        let grid = GridModel::from_rows(&[
            ".....", //
            ".###.", //
            "...#.", //
            "####.", //
            "*....",
        ])
        .unwrap();
        let start = Position::new(0, 2);
        let goal = Position::new(0, 4);
        let path = search(start, goal, &grid);

        assert_valid_path(&grid, start, goal, &path);
        assert_eq!(Some(path.len()), bfs_distance(&grid, start, goal));
        assert_eq!(path.len(), 14);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let grid = open_grid(3, 3);
        let path = search(Position::new(0, 0), Position::new(2, 2), &grid);
        assert_eq!(
            path,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 2),
                Position::new(2, 2),
            ]
        );
        assert_eq!(path, search(Position::new(0, 0), Position::new(2, 2), &grid));
    }

    #[test]
    fn matches_breadth_first_search_on_generated_grids() {
        for seed in 0..12 {
            let config = GameConfig::default()
                .with_dimensions(7, 6)
                .with_wall_chance(30)
                .with_seed(seed);
            let grid = LayoutGenerator::new(&config, &PcgRng).generate().unwrap();
            let cells: Vec<_> = grid.traversable_positions().collect();

            for start in &cells {
                for goal in &cells {
                    let path = search(*start, *goal, &grid);
                    match bfs_distance(&grid, *start, *goal) {
                        Some(0) => assert!(path.is_empty()),
                        Some(distance) => {
                            assert_eq!(path.len(), distance, "seed {seed}: {start} -> {goal}");
                            assert_valid_path(&grid, *start, *goal, &path);
                        }
                        None => assert!(path.is_empty(), "seed {seed}: {start} -> {goal}"),
                    }
                }
            }
        }
    }
}
