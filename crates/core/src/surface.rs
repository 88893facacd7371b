//! Surface module - turns a ray hit into a column glyph and height
//!
//! Shading is a pure function of the hit (which carries the tile by value),
//! the viewer's direction and the texture palette.

use std::collections::HashMap;

use glam::DVec2;

use crate::door::Door;
use crate::raycast::RayHit;
use crate::tile::Tile;
use crate::types::{
    Orientation, WallTexture, DOOR_FRAME_FAR, DOOR_FRAME_NEAR, DOOR_FRAME_NEAR_DISTANCE,
    FALLBACK_GLYPH, MAX_COLUMN_FRACTION,
};

/// Door frame band glyph
pub const DOOR_FRAME_GLYPH: char = '▐';

/// Glyph for see-through surfaces and door gaps
pub const EMPTY_GLYPH: char = ' ';

/// `(texture, orientation) -> glyph` lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    glyphs: HashMap<(WallTexture, Orientation), char>,
}

impl Palette {
    /// A palette with no entries; every lookup falls back
    pub fn empty() -> Self {
        Self {
            glyphs: HashMap::new(),
        }
    }

    pub fn with_glyph(mut self, texture: WallTexture, orientation: Orientation, glyph: char) -> Self {
        self.set(texture, orientation, glyph);
        self
    }

    pub fn set(&mut self, texture: WallTexture, orientation: Orientation, glyph: char) {
        self.glyphs.insert((texture, orientation), glyph);
    }

    /// Glyph for a texture variant, or [`FALLBACK_GLYPH`] when missing
    pub fn glyph(&self, texture: WallTexture, orientation: Orientation) -> char {
        self.glyphs
            .get(&(texture, orientation))
            .copied()
            .unwrap_or(FALLBACK_GLYPH)
    }
}

impl Default for Palette {
    /// Outer and inner walls: `-` when face-on, `|` when glancing
    fn default() -> Self {
        Self::empty()
            .with_glyph(WallTexture::OuterWall, Orientation::FaceOn, '-')
            .with_glyph(WallTexture::OuterWall, Orientation::Glancing, '|')
            .with_glyph(WallTexture::InnerWall, Orientation::FaceOn, '-')
            .with_glyph(WallTexture::InnerWall, Orientation::Glancing, '|')
    }
}

/// Leaf glyph for a door seen face-on or at a glancing angle
fn door_leaf_glyph(orientation: Orientation) -> char {
    match orientation {
        Orientation::FaceOn => '-',
        Orientation::Glancing => '|',
    }
}

/// Door frame band width; wider up close to fake perspective thickness
pub fn door_frame_width(distance: f64) -> f64 {
    if distance < DOOR_FRAME_NEAR_DISTANCE {
        DOOR_FRAME_NEAR
    } else {
        DOOR_FRAME_FAR
    }
}

/// Door shading across its width.
///
/// Frame bands at both edges are always drawn. Between them the leaf covers
/// everything outside the centred gap, whose half-width follows the swing.
pub fn door_glyph(door: &Door, wall_x: f64, distance: f64, orientation: Orientation) -> char {
    let frame = door_frame_width(distance);
    if wall_x < frame || wall_x > 1.0 - frame {
        return DOOR_FRAME_GLYPH;
    }

    if door.is_animating() {
        let gap = door.gap_half_width();
        if wall_x < 0.5 - gap || wall_x > 0.5 + gap {
            return door_leaf_glyph(orientation);
        }
        return EMPTY_GLYPH;
    }

    if door.is_open() {
        EMPTY_GLYPH
    } else {
        door_leaf_glyph(orientation)
    }
}

/// Glyph for the surface a ray hit, as seen along `view_direction`
pub fn surface_glyph(hit: &RayHit, view_direction: DVec2, palette: &Palette) -> char {
    let orientation = hit.orientation(view_direction);
    match &hit.tile {
        Tile::Wall(texture) => palette.glyph(*texture, orientation),
        Tile::Door(door) => door_glyph(door, hit.wall_x, hit.distance, orientation),
        Tile::Floor | Tile::Trigger(_) => EMPTY_GLYPH,
    }
}

/// Projected column height: `min(view_h / distance, view_h * 0.9)`, floored
pub fn column_height(distance: f64, view_height: u16) -> u16 {
    let h = view_height as f64;
    let projected = if distance > 0.0 { (h / distance).floor() } else { h };
    let cap = (h * MAX_COLUMN_FRACTION).floor();
    projected.min(cap).max(0.0) as u16
}

/// One column handed to the render sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSample {
    pub column: u16,
    pub glyph: char,
    pub height: u16,
    pub distance: f64,
}

impl ColumnSample {
    pub fn from_hit(
        column: u16,
        hit: &RayHit,
        view_direction: DVec2,
        view_height: u16,
        palette: &Palette,
    ) -> Self {
        Self {
            column,
            glyph: surface_glyph(hit, view_direction, palette),
            height: column_height(hit.distance, view_height),
            distance: hit.distance,
        }
    }

    /// First and last row (inclusive) of the column, centred in the view
    /// and never starting above row 1
    pub fn span(&self, view_height: u16) -> (u16, u16) {
        let mid = view_height / 2;
        let half = self.height / 2;
        let start = mid.saturating_sub(half).max(1);
        let end = (mid + half).min(view_height);
        (start, end)
    }
}
