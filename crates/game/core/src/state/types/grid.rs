//! Static map with cell classification and the ordered goal collection.
//!
//! Wall layout and the total goal count are fixed at construction. The only
//! mutation is [`GridModel::collect_goal`], which demotes a goal cell to open
//! and removes it from the goal list in one step.

use crate::error::{ErrorSeverity, GameError};

use super::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Center cell, rounded toward the origin.
    pub const fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}

/// Canonical classification of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Cell {
    #[default]
    Open,
    Wall,
    Goal,
}

impl Cell {
    pub fn is_traversable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Cell::Open),
            '#' => Some(Cell::Wall),
            '*' => Some(Cell::Goal),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },

    #[error("expected {expected} cells, got {found}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
            Self::CellCountMismatch { .. } => "GRID_CELL_COUNT_MISMATCH",
            Self::RaggedRow { .. } => "GRID_RAGGED_ROW",
            Self::UnknownGlyph { .. } => "GRID_UNKNOWN_GLYPH",
        }
    }
}

/// Row-major 2-D grid plus the goal positions it still holds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridModel {
    dimensions: MapDimensions,
    cells: Vec<Cell>,
    /// Remaining goals in construction (row-major) order.
    goals: Vec<Position>,
}

impl GridModel {
    /// Creates an all-open grid.
    pub fn new(width: u32, height: u32) -> Self {
        let dimensions = MapDimensions::new(width, height);
        Self {
            dimensions,
            cells: vec![Cell::Open; dimensions.area()],
            goals: Vec::new(),
        }
    }

    /// Builds a grid from row-major cells. Goals are enumerated in row-major order.
    pub fn from_cells(dimensions: MapDimensions, cells: Vec<Cell>) -> Result<Self, GridError> {
        if cells.len() != dimensions.area() {
            return Err(GridError::CellCountMismatch {
                expected: dimensions.area(),
                found: cells.len(),
            });
        }

        let width = dimensions.width.max(1) as usize;
        let goals = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Goal)
            .map(|(index, _)| Position::new((index % width) as i32, (index / width) as i32))
            .collect();

        Ok(Self {
            dimensions,
            cells,
            goals,
        })
    }

    /// Parses a text fixture: `.` open, `#` wall, `*` goal. Row 0 is the first line.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or(GridError::UnknownGlyph {
                    glyph,
                    position: Position::new(x as i32, y as i32),
                })?;
                cells.push(cell);
            }
        }

        Self::from_cells(MapDimensions::new(width as u32, rows.len() as u32), cells)
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Classifies `position`, failing when it lies outside the grid.
    pub fn classify(&self, position: Position) -> Result<Cell, GridError> {
        self.dimensions
            .index(position)
            .map(|index| self.cells[index])
            .ok_or(GridError::OutOfBounds {
                position,
                width: self.dimensions.width,
                height: self.dimensions.height,
            })
    }

    /// True iff `position` is in bounds and not a wall.
    pub fn is_traversable(&self, position: Position) -> bool {
        self.classify(position).is_ok_and(Cell::is_traversable)
    }

    /// Demotes a goal cell to open and drops it from the goal list.
    ///
    /// Returns `true` if a goal was collected. Any other cell, including
    /// positions outside the grid, is left untouched.
    pub fn collect_goal(&mut self, position: Position) -> bool {
        let Some(index) = self.dimensions.index(position) else {
            return false;
        };
        if self.cells[index] != Cell::Goal {
            return false;
        }

        self.cells[index] = Cell::Open;
        if let Some(slot) = self.goals.iter().position(|goal| *goal == position) {
            self.goals.remove(slot);
        }
        true
    }

    /// Remaining goals in their stable enumeration order.
    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    /// The goal the seeker currently targets: the first remaining one.
    pub fn current_goal(&self) -> Option<Position> {
        self.goals.first().copied()
    }

    pub fn remaining_goals(&self) -> usize {
        self.goals.len()
    }

    pub fn is_cleared(&self) -> bool {
        self.goals.is_empty()
    }

    /// Row slices, top row first.
    pub fn cells(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.dimensions.width.max(1) as usize)
    }

    /// All traversable positions in row-major order.
    pub fn traversable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.dimensions.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_traversable())
            .map(move |(index, _)| Position::new((index % width) as i32, (index / width) as i32))
    }
}
