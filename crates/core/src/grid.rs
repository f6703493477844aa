//! Grid module - obstacle occupancy for the current level
//!
//! The grid is 30x20 cells stored as a flat, row-major boolean array, so the
//! whole layout is `Copy` and membership tests are a single index.
//! Coordinates: (x, y) where x ranges 0..29 (left to right), y ranges 0..19 (top to bottom).

use crate::level::WallRect;
use crate::types::{Position, GRID_CELLS};

/// Set of blocked cells, fixed for the lifetime of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleGrid {
    /// Flat array of cells, row-major order (y * GRID_WIDTH + x)
    cells: [bool; GRID_CELLS],
}

impl ObstacleGrid {
    /// Create an empty grid (no obstacles)
    pub fn new() -> Self {
        Self {
            cells: [false; GRID_CELLS],
        }
    }

    /// Expand wall rectangles into individual cells.
    ///
    /// Cells falling outside the grid are dropped.
    pub fn from_walls(walls: &[WallRect]) -> Self {
        let mut grid = Self::new();
        for wall in walls {
            grid.fill_rect(wall);
        }
        grid
    }

    /// Check if `pos` is an obstacle. Out-of-bounds positions are not obstacles.
    #[inline(always)]
    pub fn contains(&self, pos: Position) -> bool {
        pos.index().map(|idx| self.cells[idx]).unwrap_or(false)
    }

    /// Mark a cell as blocked or free.
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, blocked: bool) -> bool {
        match pos.index() {
            Some(idx) => {
                self.cells[idx] = blocked;
                true
            }
            None => false,
        }
    }

    fn fill_rect(&mut self, wall: &WallRect) {
        for y in wall.y..wall.y + wall.h {
            for x in wall.x..wall.x + wall.w {
                self.set(Position::new(x, y), true);
            }
        }
    }

    /// Number of blocked cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Blocked cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &blocked)| blocked)
            .map(|(idx, _)| Position::from_index(idx))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl Default for ObstacleGrid {
    fn default() -> Self {
        Self::new()
    }
}
