//! Terminal presentation for the snake engine.
//!
//! Rendering goes through a plain framebuffer of styled character cells:
//! [`GameView`] paints an [`crate::core::EngineSnapshot`] into it without any
//! I/O, and [`TerminalRenderer`] flushes only the cells that changed since the
//! previous frame.
//!
//! One grid cell is drawn two columns wide so the 30x20 field keeps roughly
//! the proportions of the 600x400 playfield.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, PlayerStatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
