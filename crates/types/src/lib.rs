//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, profile storage).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed pixel area divided into square cells:
//!
//! - **Pixels**: 600 x 400
//! - **Cell size**: 20 pixels
//! - **Grid**: 30 columns (x 0-29) by 20 rows (y 0-19)
//!
//! All engine positions are in cell units. Pixel coordinates only appear at the
//! presentation boundary (see [`Position::to_pixels`]).
//!
//! # Progression Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_LEVEL` | 5 | Highest level in the level table |
//! | `LEVEL_UP_EVERY` | 5 | Cumulative score modulus that triggers a level-up |
//! | `SPEED_STEP` | 1 | Tick-rate increase per threshold once at `MAX_LEVEL` |
//! | `FOOD_LIFETIME_SECS` | 5..=10 | Food lifetime in seconds of game clock |
//! | `INITIAL_DELAY_MS` | 2000 | "Get ready" window before the first tick |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Command, Direction, Position, GRID_HEIGHT, GRID_WIDTH};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert!(dir.is_opposite(Direction::Down));
//!
//! let head = Position::new(5, 5);
//! assert_eq!(head.to_pixels(), (100, 100));
//! assert_eq!(head.moved(Direction::Right), Position::new(6, 5));
//!
//! assert_eq!(Command::from_str("pause"), Some(Command::TogglePause));
//! assert_eq!((GRID_WIDTH, GRID_HEIGHT), (30, 20));
//! ```

/// Playfield width in pixels
pub const WIDTH: i32 = 600;

/// Playfield height in pixels
pub const HEIGHT: i32 = 400;

/// Edge length of one grid cell in pixels
pub const CELL_SIZE: i32 = 20;

/// Grid width in cells (30 columns)
pub const GRID_WIDTH: i32 = WIDTH / CELL_SIZE;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: i32 = HEIGHT / CELL_SIZE;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// Highest level defined by the level table
pub const MAX_LEVEL: u32 = 5;

/// Number of segments in a freshly spawned snake
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Cumulative score modulus that triggers a level-up after eating
pub const LEVEL_UP_EVERY: u32 = 5;

/// Tick-rate increase applied per threshold once `MAX_LEVEL` is reached
pub const SPEED_STEP: u32 = 1;

/// Food lifetime range in seconds (scaled by the tick rate into ticks)
pub const FOOD_LIFETIME_SECS: (u32, u32) = (5, 10);

/// Point values a food item can carry
pub const FOOD_WEIGHTS: [u32; 3] = [1, 2, 3];

/// "Get ready" window before the first tick (caller-side)
pub const INITIAL_DELAY_MS: u32 = 2000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions_follow_pixel_area() {
        assert_eq!(GRID_WIDTH, 30);
        assert_eq!(GRID_HEIGHT, 20);
        assert_eq!(GRID_CELLS, 600);
        assert_eq!(WIDTH % CELL_SIZE, 0);
        assert_eq!(HEIGHT % CELL_SIZE, 0);
    }

    #[test]
    fn opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn pixel_round_trip_for_scenario_coordinates() {
        assert_eq!(Position::from_pixels(100, 100), Position::new(5, 5));
        assert_eq!(Position::from_pixels(-20, 100), Position::new(-1, 5));
        assert!(!Position::from_pixels(-20, 100).in_bounds());
        assert!(Position::new(29, 19).in_bounds());
        assert!(!Position::new(30, 0).in_bounds());
    }

    #[test]
    fn outcome_terminal_flag() {
        assert!(TickOutcome::GameOver(GameOverReason::Wall).is_terminal());
        assert!(!TickOutcome::LevelUp(2).is_terminal());
        assert!(!TickOutcome::SaveRequested.is_terminal());
    }
}

/// A cell coordinate on the game grid
///
/// `x` grows to the right, `y` grows downwards. Values outside the grid are
/// representable so that a prospective head can be tested with [`in_bounds`].
///
/// [`in_bounds`]: Position::in_bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a pixel coordinate into the cell containing it.
    ///
    /// Uses floor division so that `-20` maps to cell `-1`, not `0`.
    pub fn from_pixels(px: i32, py: i32) -> Self {
        Self {
            x: px.div_euclid(CELL_SIZE),
            y: py.div_euclid(CELL_SIZE),
        }
    }

    /// Top-left pixel of this cell
    pub fn to_pixels(&self) -> (i32, i32) {
        (self.x * CELL_SIZE, self.y * CELL_SIZE)
    }

    /// Check `0 <= x < GRID_WIDTH` and `0 <= y < GRID_HEIGHT`
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < GRID_WIDTH && self.y >= 0 && self.y < GRID_HEIGHT
    }

    /// Row-major index into a flat grid, `None` when out of bounds
    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        if !self.in_bounds() {
            return None;
        }
        Some((self.y * GRID_WIDTH + self.x) as usize)
    }

    /// Inverse of [`Position::index`]
    pub fn from_index(idx: usize) -> Self {
        let idx = idx as i32;
        Self {
            x: idx % GRID_WIDTH,
            y: idx / GRID_WIDTH,
        }
    }

    /// The neighbouring cell one step in `direction`
    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement direction of the snake head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(dx, dy)` in cell units
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The exact reverse of this direction
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if turning from `self` to `other` would be a 180° turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Per-tick input forwarded by the presentation layer
///
/// At most one command is applied per tick, which bounds direction changes
/// to one per movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Keep moving in the current direction
    #[default]
    None,
    /// Turn (ignored if it is the reverse of the current direction)
    SetDirection(Direction),
    /// Flip between paused and running without moving
    TogglePause,
    /// Ask the caller to persist `{score, level}`
    RequestSave,
}

impl Command {
    /// Parse a command from string
    ///
    /// Direction names map to [`Command::SetDirection`].
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "" => Some(Command::None),
            "pause" => Some(Command::TogglePause),
            "save" => Some(Command::RequestSave),
            other => Direction::from_str(other).map(Command::SetDirection),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::None => "none",
            Command::SetDirection(d) => d.as_str(),
            Command::TogglePause => "pause",
            Command::RequestSave => "save",
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// Head left the grid
    Boundary,
    /// Head entered an obstacle cell
    Wall,
    /// Head entered a snake segment
    SelfCollision,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::Boundary => "boundary",
            GameOverReason::Wall => "wall",
            GameOverReason::SelfCollision => "self",
        }
    }
}

/// Result of one engine tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Snake ate food and crossed a level threshold; carries the new level
    LevelUp(u32),
    /// Terminal. Repeated on every later tick.
    GameOver(GameOverReason),
    /// Caller should invoke the storage collaborator
    SaveRequested,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickOutcome::GameOver(_))
    }
}

/// Engine lifecycle
///
/// `Ready -> Running <-> Paused`, and `Running -> Terminated`. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Ready,
    Running,
    Paused,
    Terminated(GameOverReason),
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Terminated(_) => "terminated",
        }
    }
}
