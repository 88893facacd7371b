//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and polls at
//! most one event per tick without blocking past the tick deadline.

pub mod map;
pub mod poll;

pub use tui_wizardry_types as types;

pub use map::{handle_key_event, should_quit};
pub use poll::poll_action;
