//! Terminal snake (workspace facade crate).
//!
//! Re-exports the member crates as `tui_snake::{core, input, store, term, types}`
//! and hosts the application pieces shared by the binary and integration tests.

pub mod config;
pub mod logging;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_store as store;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use config::AppConfig;
pub use session::{finish_session, open_store, SessionEnd};
