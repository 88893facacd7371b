//! Level module - JSON level files
//!
//! ```json
//! {
//!   "rows": ["#####", "#@.+#", "#####"],
//!   "spawn": { "x": 1, "y": 1, "facing": "east" },
//!   "glyphs": [{ "texture": "stone", "orientation": "face_on", "glyph": "=" }]
//! }
//! ```
//!
//! | Char | Tile |
//! |------|------|
//! | `#` | outer wall |
//! | `%` | inner wall |
//! | `S` | stone wall |
//! | `M` | moss wall |
//! | `+` | closed door |
//! | `*` | retriggerable trigger |
//! | `!` | one-shot trigger |
//! | `.` or space | floor |
//! | `@` | floor, player spawn |
//!
//! The first row is the top (northmost) row of the map.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;
use serde::Deserialize;

use crate::grid::TileGrid;
use crate::pose::Pose;
use crate::surface::Palette;
use crate::tile::Tile;
use crate::types::{Compass, Orientation, WallTexture};

#[derive(Debug, Clone, Deserialize)]
pub struct LevelDef {
    pub rows: Vec<String>,
    #[serde(default)]
    pub spawn: Option<SpawnDef>,
    #[serde(default)]
    pub glyphs: Vec<GlyphOverride>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpawnDef {
    pub x: i32,
    pub y: i32,
    #[serde(default = "default_facing")]
    pub facing: String,
}

fn default_facing() -> String {
    "east".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlyphOverride {
    pub texture: String,
    pub orientation: String,
    pub glyph: char,
}

/// A built level: tiles, starting pose and texture palette
#[derive(Debug, Clone)]
pub struct Level {
    pub grid: TileGrid,
    pub spawn: Pose,
    pub palette: Palette,
}

impl Level {
    /// The built-in map, starting at (1.5, 1.5) facing east
    pub fn builtin() -> Self {
        Self {
            grid: TileGrid::default_map(),
            spawn: Pose::default(),
            palette: Palette::default(),
        }
    }
}

fn tile_for(ch: char) -> Option<Tile> {
    let tile = match ch {
        '#' => Tile::Wall(WallTexture::OuterWall),
        '%' => Tile::Wall(WallTexture::InnerWall),
        'S' => Tile::Wall(WallTexture::Stone),
        'M' => Tile::Wall(WallTexture::Moss),
        '+' => Tile::door(),
        '*' => Tile::trigger(true),
        '!' => Tile::trigger(false),
        '.' | ' ' | '@' => Tile::Floor,
        _ => return None,
    };
    Some(tile)
}

fn orientation_from_str(s: &str) -> Option<Orientation> {
    match s.to_lowercase().as_str() {
        "face_on" | "faceon" | "horizontal" => Some(Orientation::FaceOn),
        "glancing" | "vertical" => Some(Orientation::Glancing),
        _ => None,
    }
}

impl LevelDef {
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("invalid level JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read level file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in level file {}", path.display()))
    }

    /// Validate the definition and build the level
    pub fn build(&self) -> Result<Level> {
        let height = self.rows.len();
        if height == 0 {
            bail!("level has no rows");
        }
        let width = self.rows[0].chars().count();
        if width == 0 {
            bail!("level rows are empty");
        }

        let mut grid = TileGrid::new(width, height);
        let mut marker = None;

        for (r, row) in self.rows.iter().enumerate() {
            if row.chars().count() != width {
                bail!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.chars().count(),
                    width
                );
            }
            let y = (height - 1 - r) as i32;
            for (x, ch) in row.chars().enumerate() {
                let Some(tile) = tile_for(ch) else {
                    bail!("unknown tile '{}' at row {}, column {}", ch, r, x);
                };
                if ch == '@' {
                    if marker.is_some() {
                        bail!("more than one '@' spawn marker");
                    }
                    marker = Some((x as i32, y));
                }
                grid.set(x as i32, y, tile);
            }
        }

        let spawn = match (&self.spawn, marker) {
            (Some(def), _) => {
                let Some(facing) = Compass::from_str(&def.facing) else {
                    bail!("unknown spawn facing '{}'", def.facing);
                };
                Pose::new((def.x, def.y), facing)
            }
            (None, Some(cell)) => Pose::new(cell, Compass::East),
            (None, None) => Pose::default(),
        };

        let (sx, sy) = spawn.cell();
        if !grid.is_valid(sx, sy) {
            bail!("spawn ({}, {}) is outside the {}x{} map", sx, sy, width, height);
        }
        if !grid.is_passable(sx, sy) {
            bail!("spawn ({}, {}) is not on a passable tile", sx, sy);
        }

        let mut palette = Palette::default();
        for g in &self.glyphs {
            let Some(texture) = WallTexture::from_str(&g.texture) else {
                bail!("unknown texture '{}'", g.texture);
            };
            let Some(orientation) = orientation_from_str(&g.orientation) else {
                bail!("unknown orientation '{}'", g.orientation);
            };
            palette.set(texture, orientation, g.glyph);
        }

        info!("built {}x{} level, spawn at ({}, {})", width, height, sx, sy);
        Ok(Level {
            grid,
            spawn,
            palette,
        })
    }
}
