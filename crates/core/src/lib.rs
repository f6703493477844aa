//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake engine: movement, collision resolution, food
//! lifecycle, scoring and level progression. It has no UI, storage
//! or I/O dependencies, making it:
//!
//! - **Deterministic**: Same seed and commands produce identical games
//! - **Testable**: Every rule is exercised without a terminal or a database
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`engine`]: [`GameEngine`] lifecycle and the per-tick state transition
//! - [`snake`]: Ordered body cells, head first
//! - [`grid`]: 30x20 obstacle occupancy
//! - [`level`]: Static level table (tick rate + walls)
//! - [`food`]: Food placement, lifetime and value
//! - [`scoring`]: Level-up and speed-up rules
//! - [`rng`]: Seeded LCG used for every random draw
//! - [`snapshot`]: Read-only state handed to renderers
//!
//! # Game Rules
//!
//! - **Collision order**: boundary, then wall, then own body (tail included)
//! - **Turns**: at most one per tick; reversing into the neck is ignored
//! - **Food**: one item at a time, worth 1-3 points, expires after 5-10 seconds
//! - **Levels**: landing exactly on a positive multiple of 5 points advances the
//!   level and restarts the snake; at the last level the speed rises instead
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameEngine;
//! use tui_snake_types::{Command, Direction, TickOutcome};
//!
//! let mut game = GameEngine::with_seed(1, 12345);
//! assert_eq!(game.tick(Command::None), TickOutcome::Continue);
//! game.tick(Command::SetDirection(Direction::Up));
//!
//! assert!(game.snake().len() >= 3);
//! assert_eq!(game.level(), 1);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. The caller invokes [`GameEngine::tick`] once every
//! [`GameEngine::tick_interval_ms`] and owns any "get ready" delay.

pub mod engine;
pub mod food;
pub mod grid;
pub mod level;
pub mod rng;
pub mod scoring;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use engine::{GameEngine, DEFAULT_SEED};
pub use food::{spawn_food, Food};
pub use grid::ObstacleGrid;
pub use level::{level_config, LevelConfig, WallRect, LEVELS};
pub use rng::SimpleRng;
pub use scoring::{progression_after_eat, tick_interval_ms, Progression};
pub use snake::Snake;
pub use snapshot::EngineSnapshot;
