//! Terminal rendering for the dungeon.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer and the renderer flushes it to the terminal, re-emitting only
//! cells that changed since the previous frame.
//!
//! - [`view`]: pure mapping from a [`World`](core::World) to a [`FrameBuffer`]
//! - [`renderer`]: crossterm output with diff encoding
//! - [`flash`]: trigger flash timer
//! - [`throttle`]: skips redraws of an unchanged still scene

pub mod fb;
pub mod flash;
pub mod renderer;
pub mod throttle;
pub mod view;

pub use tui_wizardry_core as core;
pub use tui_wizardry_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use flash::Flash;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::RenderThrottle;
pub use view::{front_status_text, DungeonView, Layout, Viewport};
