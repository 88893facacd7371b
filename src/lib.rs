//! TUI Wizardry (workspace facade crate).
//!
//! A first-person dungeon crawler drawn with characters in the terminal.
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_wizardry::{core,input,term,types}` and owns the
//! runner configuration.

pub mod config;

pub use tui_wizardry_core as core;
pub use tui_wizardry_input as input;
pub use tui_wizardry_term as term;
pub use tui_wizardry_types as types;

pub use config::Config;
