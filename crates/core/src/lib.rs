//! Core dungeon logic module - pure, deterministic, and testable
//!
//! This crate holds the tile map, tile behaviours, the player pose and the
//! DDA raycaster. It has **no dependencies** on terminals or input devices:
//!
//! - **Deterministic**: time only enters through the `delta_time` passed to ticks
//! - **Testable**: every behaviour is reachable without a terminal
//! - **Read-only casting**: rays never mutate the grid or the pose
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size tile map with a boundary-wall sentinel for out-of-bounds
//! - [`tile`]: one tagged variant per cell (wall, door, floor, trigger)
//! - [`door`]: door swing state machine
//! - [`trigger`]: one-shot and retriggerable floor plates
//! - [`pose`]: position, view direction, camera plane, animated quarter turns
//! - [`raycast`]: DDA marcher producing [`RayHit`] records
//! - [`surface`]: glyph and column height for a hit
//! - [`effect`]: closed set of effects external systems may request
//! - [`level`]: JSON level files
//! - [`world`]: the state one frame-loop tick advances
//!
//! # Example
//!
//! ```
//! use tui_wizardry_core::World;
//! use tui_wizardry_types::GameAction;
//!
//! let mut world = World::default();
//! world.apply_action(GameAction::MoveForward);
//! world.tick(0.05);
//!
//! let hit = world.cast_column(40, 80);
//! assert!(hit.distance > 0.0);
//! ```

pub mod door;
pub mod effect;
pub mod grid;
pub mod level;
pub mod pose;
pub mod raycast;
pub mod surface;
pub mod tile;
pub mod trigger;
pub mod world;

pub use tui_wizardry_types as types;

pub use glam::DVec2;

// Re-export commonly used types for convenience
pub use door::{Door, DoorState, DoorTransition};
pub use effect::{apply_effect, EffectKind, EffectOutcome};
pub use grid::TileGrid;
pub use level::{Level, LevelDef};
pub use pose::{Pose, RotationLerp};
pub use raycast::{camera_x, cast, cast_column, classify, column_ray, RayHit};
pub use surface::{column_height, door_glyph, surface_glyph, ColumnSample, Palette};
pub use tile::Tile;
pub use trigger::{Trigger, TriggerOutcome};
pub use world::{ActionOutcome, FrontStatus, MoveOutcome, RotationPacing, World, WorldEvent};
