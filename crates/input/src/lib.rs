//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and buffers them
//! so the game loop can hand the engine exactly one command per tick. Nothing
//! here knows about the engine itself.

pub mod handler;
pub mod map;

pub use tui_snake_types as types;

pub use handler::{CommandQueue, QUEUE_CAPACITY};
pub use map::{map_key, should_quit};
