use std::fmt;

use arrayvec::ArrayVec;

use crate::action::CardinalDirection;

/// Discrete grid position expressed in cell coordinates (column, row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of absolute coordinate differences.
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The position one unit step away in `direction`. No bounds checking.
    pub fn step(self, direction: CardinalDirection) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// The four edge-adjacent positions in [`CardinalDirection::ALL`] order.
    pub fn neighbors(self) -> ArrayVec<Position, 4> {
        CardinalDirection::ALL
            .iter()
            .map(|direction| self.step(*direction))
            .collect()
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Discrete simulation step counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
