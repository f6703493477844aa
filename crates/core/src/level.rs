//! Level table - tick rate and wall layout per level
//!
//! Levels are numbered 1..=`MAX_LEVEL`. The table is a `const` array, so it can't
//! change at runtime; indices are clamped at the boundary by [`level_config`].
//!
//! | Level | Ticks/s | Walls |
//! |-------|---------|-------|
//! | 1 | 5 | none |
//! | 2 | 6 | none |
//! | 3 | 7 | 4x2 block below the start row |
//! | 4 | 8 | box outline |
//! | 5 | 10 | inner cross |

use crate::grid::ObstacleGrid;
use crate::types::MAX_LEVEL;

/// Axis-aligned wall rectangle in cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WallRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Configuration loaded on level entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    pub ticks_per_second: u32,
    pub walls: &'static [WallRect],
}

impl LevelConfig {
    /// Expand this level's walls into an obstacle grid
    pub fn obstacles(&self) -> ObstacleGrid {
        ObstacleGrid::from_walls(self.walls)
    }
}

const LEVEL_3_WALLS: [WallRect; 1] = [WallRect::new(13, 13, 4, 2)];

const LEVEL_4_WALLS: [WallRect; 4] = [
    WallRect::new(2, 2, 26, 1),
    WallRect::new(2, 17, 26, 1),
    WallRect::new(2, 3, 1, 14),
    WallRect::new(27, 3, 1, 14),
];

const LEVEL_5_WALLS: [WallRect; 4] = [
    WallRect::new(5, 5, 1, 10),
    WallRect::new(24, 5, 1, 10),
    WallRect::new(10, 2, 10, 1),
    WallRect::new(10, 17, 10, 1),
];

/// Level table, index 0 = level 1
pub const LEVELS: [LevelConfig; MAX_LEVEL as usize] = [
    LevelConfig {
        ticks_per_second: 5,
        walls: &[],
    },
    LevelConfig {
        ticks_per_second: 6,
        walls: &[],
    },
    LevelConfig {
        ticks_per_second: 7,
        walls: &LEVEL_3_WALLS,
    },
    LevelConfig {
        ticks_per_second: 8,
        walls: &LEVEL_4_WALLS,
    },
    LevelConfig {
        ticks_per_second: 10,
        walls: &LEVEL_5_WALLS,
    },
];

/// Clamp a level number into `1..=MAX_LEVEL`
pub fn clamp_level(level: u32) -> u32 {
    level.clamp(1, MAX_LEVEL)
}

/// Look up a level, clamping out-of-range numbers
pub fn level_config(level: u32) -> &'static LevelConfig {
    &LEVELS[(clamp_level(level) - 1) as usize]
}
