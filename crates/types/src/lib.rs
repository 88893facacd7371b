//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, level files).
//!
//! # Coordinates
//!
//! The world is a grid of unit cells. `x` grows east and `y` grows north, so a
//! clockwise turn maps a direction `(x, y)` to `(y, -x)`.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 50 | Default tick pacing |
//! | `DOOR_RATE` | 2.0 | Door progress units per second |
//! | `ROTATION_STEP` | 0.2 | Rotation progress per tick |
//! | `ROTATION_RATE` | 4.0 | Rotation progress per second (delta-time mode) |
//! | `FLASH_SECS` | 0.5 | Trigger flash duration |
//!
//! # Examples
//!
//! ```
//! use tui_wizardry_types::{Compass, GameAction, Side, WallTexture};
//!
//! assert_eq!(GameAction::from_str("moveForward"), Some(GameAction::MoveForward));
//! assert_eq!(Compass::North.rotate_cw(), Compass::East);
//! assert_eq!(Side::Y.index(), 1);
//! assert_eq!(WallTexture::from_str("inner_wall"), Some(WallTexture::InnerWall));
//! ```

/// Width of the built-in level in cells
pub const DEFAULT_MAP_WIDTH: usize = 10;

/// Height of the built-in level in cells
pub const DEFAULT_MAP_HEIGHT: usize = 10;

/// Default tick pacing in milliseconds
pub const FRAME_MS: u32 = 50;

/// Door animation speed in progress units per second (one swing takes 0.5s)
pub const DOOR_RATE: f64 = 2.0;

/// Rotation progress added per tick (frame-count based)
pub const ROTATION_STEP: f64 = 0.2;

/// Rotation progress per second when rotation is delta-time scaled
pub const ROTATION_RATE: f64 = 4.0;

/// Animation progress within this distance of 1.0 counts as complete, so a
/// duration split into many float steps lands on the same endpoint as one step
pub const PROGRESS_EPSILON: f64 = 1e-9;

/// Distance moved per step; the result is snapped to a cell centre anyway
pub const MOVE_DISTANCE: f64 = 1.0;

/// How far ahead of the player interact reaches
pub const INTERACT_REACH: f64 = 0.7;

/// Length of the camera plane vector (~66° field of view)
pub const CAMERA_PLANE: f64 = 0.66;

/// `|dot| > FACE_ON_THRESHOLD` selects the face-on texture variant (60° cutoff)
pub const FACE_ON_THRESHOLD: f64 = 0.5;

/// Step length used for a ray axis with a zero component
pub const SENTINEL_DELTA: f64 = 1e30;

/// Door frame band width when the door is close to the viewer
pub const DOOR_FRAME_NEAR: f64 = 0.25;

/// Door frame band width at normal range
pub const DOOR_FRAME_FAR: f64 = 0.15;

/// Distance below which the near frame width applies
pub const DOOR_FRAME_NEAR_DISTANCE: f64 = 1.5;

/// Upper bound of a projected column as a share of the view height
pub const MAX_COLUMN_FRACTION: f64 = 0.9;

/// Trigger flash duration in seconds
pub const FLASH_SECS: f64 = 0.5;

/// Trigger flash toggles on/off at this period
pub const FLASH_PERIOD_SECS: f64 = 0.1;

/// Sidebar width in terminal columns
pub const SIDEBAR_WIDTH: u16 = 30;

/// Minimap edge length in cells
pub const MINIMAP_SIZE: u16 = 15;

/// Glyph used when a texture lookup has no entry
pub const FALLBACK_GLYPH: char = '?';

/// Discrete actions produced by input and consumed once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Step one cell along the view direction
    MoveForward,
    /// Step one cell against the view direction
    MoveBackward,
    /// Turn 90° counter-clockwise
    RotateLeft,
    /// Turn 90° clockwise
    RotateRight,
    /// Toggle the door in front of the player
    Interact,
    /// End the session
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wizardry_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotateLeft"), Some(GameAction::RotateLeft));
    /// assert_eq!(GameAction::from_str("INTERACT"), Some(GameAction::Interact));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveforward" => Some(GameAction::MoveForward),
            "movebackward" => Some(GameAction::MoveBackward),
            "rotateleft" => Some(GameAction::RotateLeft),
            "rotateright" => Some(GameAction::RotateRight),
            "interact" => Some(GameAction::Interact),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveForward => "moveForward",
            GameAction::MoveBackward => "moveBackward",
            GameAction::RotateLeft => "rotateLeft",
            GameAction::RotateRight => "rotateRight",
            GameAction::Interact => "interact",
            GameAction::Quit => "quit",
        }
    }
}

/// Texture identifier carried by wall tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallTexture {
    OuterWall,
    InnerWall,
    Stone,
    Moss,
}

impl WallTexture {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "outer_wall" | "outer" => Some(WallTexture::OuterWall),
            "inner_wall" | "inner" => Some(WallTexture::InnerWall),
            "stone" => Some(WallTexture::Stone),
            "moss" => Some(WallTexture::Moss),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WallTexture::OuterWall => "outer_wall",
            WallTexture::InnerWall => "inner_wall",
            WallTexture::Stone => "stone",
            WallTexture::Moss => "moss",
        }
    }
}

/// Direction of an in-flight door animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorDirection {
    Opening,
    Closing,
}

/// Grid axis whose boundary a ray crossed last
///
/// - **X** (`0`): the ray crossed a vertical grid line (x-boundary)
/// - **Y** (`1`): the ray crossed a horizontal grid line (y-boundary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    X,
    Y,
}

impl Side {
    /// Numeric form (`0` for X, `1` for Y)
    pub fn index(&self) -> u8 {
        match self {
            Side::X => 0,
            Side::Y => 1,
        }
    }
}

/// How squarely the viewer faces a hit surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Within 60° of the surface normal; horizontal-pattern texture
    FaceOn,
    /// Beyond 60°; vertical-pattern texture
    Glancing,
}

/// Four compass buckets for the view direction
///
/// The cycle clockwise is: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    North,
    East,
    South,
    West,
}

impl Compass {
    /// Bucket an angle in degrees, measured counter-clockwise from east
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wizardry_types::Compass;
    ///
    /// assert_eq!(Compass::from_degrees(0.0), Compass::East);
    /// assert_eq!(Compass::from_degrees(90.0), Compass::North);
    /// assert_eq!(Compass::from_degrees(-90.0), Compass::South);
    /// assert_eq!(Compass::from_degrees(180.0), Compass::West);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        let a = degrees.rem_euclid(360.0);
        if (45.0..135.0).contains(&a) {
            Compass::North
        } else if (135.0..225.0).contains(&a) {
            Compass::West
        } else if (225.0..315.0).contains(&a) {
            Compass::South
        } else {
            Compass::East
        }
    }

    /// Unit vector `(x, y)` pointing in this direction (y grows north)
    pub fn unit(&self) -> (f64, f64) {
        match self {
            Compass::North => (0.0, 1.0),
            Compass::East => (1.0, 0.0),
            Compass::South => (0.0, -1.0),
            Compass::West => (-1.0, 0.0),
        }
    }

    pub fn rotate_cw(&self) -> Self {
        match self {
            Compass::North => Compass::East,
            Compass::East => Compass::South,
            Compass::South => Compass::West,
            Compass::West => Compass::North,
        }
    }

    pub fn rotate_ccw(&self) -> Self {
        match self {
            Compass::North => Compass::West,
            Compass::West => Compass::South,
            Compass::South => Compass::East,
            Compass::East => Compass::North,
        }
    }

    /// Minimap arrow glyph
    pub fn arrow(&self) -> char {
        match self {
            Compass::North => '↑',
            Compass::East => '→',
            Compass::South => '↓',
            Compass::West => '←',
        }
    }

    /// Parse from full names or single letters (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Compass::North),
            "east" | "e" => Some(Compass::East),
            "south" | "s" => Some(Compass::South),
            "west" | "w" => Some(Compass::West),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Compass::North => "north",
            Compass::East => "east",
            Compass::South => "south",
            Compass::West => "west",
        }
    }
}
