//! Effect module - gameplay effects that external systems may request
//!
//! The set of effects is closed. An item system hands the core an
//! [`EffectKind`] (it deserialises from JSON such as
//! `{"kind": "teleport", "x": 3, "y": 7}`) and gets back an [`EffectOutcome`].
//! The only core state an effect may touch is the player's [`Pose`];
//! leveling is not modelled here and is handed back as a request.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::grid::TileGrid;
use crate::pose::Pose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectKind {
    /// Move the player to the centre of cell (x, y)
    Teleport { x: i32, y: i32 },
    /// Ask the leveling subsystem for a level change (negative to drain)
    LevelUp {
        #[serde(default = "one")]
        levels: i32,
    },
}

fn one() -> i32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    Teleported { x: i32, y: i32 },
    LevelChange { levels: i32 },
    /// Target outside the grid; nothing changed
    Rejected,
}

impl EffectKind {
    /// Parse from JSON
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

/// Apply an effect to the pose.
///
/// Teleports are only checked against the grid bounds, matching how items
/// were allowed to place the player on any cell.
pub fn apply_effect(effect: EffectKind, pose: &mut Pose, grid: &TileGrid) -> EffectOutcome {
    match effect {
        EffectKind::Teleport { x, y } => {
            if !grid.is_valid(x, y) {
                warn!("teleport target ({}, {}) is outside the map", x, y);
                return EffectOutcome::Rejected;
            }
            pose.teleport((x, y));
            info!("teleported to ({}, {})", x, y);
            EffectOutcome::Teleported { x, y }
        }
        EffectKind::LevelUp { levels } => EffectOutcome::LevelChange { levels },
    }
}
