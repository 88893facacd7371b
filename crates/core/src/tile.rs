//! Tile module - one tagged variant per grid cell
//!
//! Each variant holds only the data its kind needs. Behaviour is dispatched by
//! matching on the variant; no tile refers to any other object.

use crate::door::{Door, DoorTransition};
use crate::trigger::Trigger;
use crate::types::WallTexture;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    Wall(WallTexture),
    Door(Door),
    Floor,
    Trigger(Trigger),
}

impl Tile {
    /// Sentinel returned for every out-of-bounds query
    pub const BOUNDARY: Tile = Tile::Wall(WallTexture::OuterWall);

    pub fn door() -> Self {
        Tile::Door(Door::new())
    }

    pub fn trigger(retriggerable: bool) -> Self {
        Tile::Trigger(Trigger::new(retriggerable))
    }

    /// Whether the player may stand on this tile
    pub fn is_passable(&self) -> bool {
        match self {
            Tile::Wall(_) => false,
            Tile::Door(door) => door.is_passable(),
            Tile::Floor | Tile::Trigger(_) => true,
        }
    }

    /// Whether a ray stops at this tile
    pub fn is_opaque(&self) -> bool {
        match self {
            Tile::Wall(_) => true,
            Tile::Door(door) => door.is_opaque(),
            Tile::Floor | Tile::Trigger(_) => false,
        }
    }

    pub fn as_door(&self) -> Option<&Door> {
        match self {
            Tile::Door(door) => Some(door),
            _ => None,
        }
    }

    pub fn as_trigger(&self) -> Option<&Trigger> {
        match self {
            Tile::Trigger(trigger) => Some(trigger),
            _ => None,
        }
    }

    /// Per-tick behaviour. Only doors animate; walls, floors and triggers are inert.
    pub fn update(&mut self, delta_time: f64) -> DoorTransition {
        match self {
            Tile::Door(door) => door.update(delta_time),
            _ => DoorTransition::None,
        }
    }

    /// Minimap glyph
    pub fn minimap_char(&self) -> char {
        match self {
            Tile::Wall(_) => '#',
            Tile::Door(door) => {
                if door.is_open() {
                    ' '
                } else {
                    '+'
                }
            }
            Tile::Trigger(trigger) => {
                if trigger.is_triggered() {
                    '*'
                } else {
                    '.'
                }
            }
            Tile::Floor => '.',
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Floor
    }
}
