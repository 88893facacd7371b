//! Grid module - the level's tile map
//!
//! Tiles live in a flat row-major `Vec` (`y * width + x`). Coordinates are
//! signed so that rays and lookups can step past the edge; every out-of-bounds
//! query resolves to [`Tile::BOUNDARY`] instead of failing.

use arrayvec::ArrayVec;
use log::debug;

use crate::door::DoorTransition;
use crate::tile::Tile;
use crate::types::{WallTexture, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};

/// Cardinal offsets in the order east, north, west, south
const CARDINALS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid filled with floor tiles
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Floor; width * height],
        }
    }

    /// The built-in 10x10 level.
    ///
    /// Outer walls ring the map, an inner wall runs along x=5 from y=3 to y=7
    /// with a door in the middle, and two trigger plates sit on either side.
    pub fn default_map() -> Self {
        let mut grid = Self::new(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT);
        let (w, h) = (grid.width as i32, grid.height as i32);

        for y in 0..h {
            grid.set(0, y, Tile::Wall(WallTexture::OuterWall));
            grid.set(w - 1, y, Tile::Wall(WallTexture::OuterWall));
        }
        for x in 0..w {
            grid.set(x, 0, Tile::Wall(WallTexture::OuterWall));
            grid.set(x, h - 1, Tile::Wall(WallTexture::OuterWall));
        }

        let wall_x = w / 2;
        for y in 3..8 {
            let tile = if y == 5 {
                Tile::door()
            } else {
                Tile::Wall(WallTexture::InnerWall)
            };
            grid.set(wall_x, y, tile);
        }

        grid.set(3, 3, Tile::trigger(true));
        grid.set(7, 7, Tile::trigger(false));
        grid
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.is_valid(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if (x, y) is inside the grid
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Tile at (x, y), or the boundary wall sentinel when out of bounds
    pub fn get(&self, x: i32, y: i32) -> &Tile {
        match self.index(x, y) {
            Some(idx) => &self.tiles[idx],
            None => &Tile::BOUNDARY,
        }
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        let idx = self.index(x, y)?;
        Some(&mut self.tiles[idx])
    }

    /// Replace the tile at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// False for out-of-bounds cells, walls and any door that is not fully open
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_passable()
    }

    /// In-bounds cardinal neighbours of (x, y), east first, counter-clockwise
    pub fn neighbors(&self, x: i32, y: i32) -> ArrayVec<((i32, i32), &Tile), 4> {
        let mut out = ArrayVec::new();
        for (dx, dy) in CARDINALS {
            let (nx, ny) = (x + dx, y + dy);
            if self.is_valid(nx, ny) {
                out.push(((nx, ny), self.get(nx, ny)));
            }
        }
        out
    }

    /// Iterate all tiles with their coordinates, row by row from y=0
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), &Tile)> {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (((i % width) as i32, (i / width) as i32), tile))
    }

    /// Advance every tile's behaviour by `delta_time` seconds.
    ///
    /// Each tile's update reads only its own state, so visiting order does not
    /// matter. Returns the number of doors that finished a swing this tick.
    pub fn update(&mut self, delta_time: f64) -> usize {
        let width = self.width;
        let mut finished = 0;
        for (i, tile) in self.tiles.iter_mut().enumerate() {
            match tile.update(delta_time) {
                DoorTransition::None => {}
                transition => {
                    debug!(
                        "door at ({}, {}) finished swing: {:?}",
                        i % width,
                        i / width,
                        transition
                    );
                    finished += 1;
                }
            }
        }
        finished
    }

    /// Minimap glyph for (x, y); out-of-bounds cells render blank
    pub fn minimap_char(&self, x: i32, y: i32) -> char {
        if self.is_valid(x, y) {
            self.get(x, y).minimap_char()
        } else {
            ' '
        }
    }

    /// Whether any door is mid-swing (used to decide if a frame is static)
    pub fn has_animation(&self) -> bool {
        self.tiles
            .iter()
            .any(|t| t.as_door().is_some_and(|d| d.is_animating()))
    }

    /// Cheap 64-bit fingerprint of all dynamic tile state (FNV-1a)
    pub fn state_fingerprint(&self) -> u64 {
        const OFFSET: u64 = 0xcbf29ce484222325;
        const PRIME: u64 = 0x100000001b3;

        let mut hash = OFFSET;
        let mut write = |v: u64| {
            for b in v.to_le_bytes() {
                hash ^= b as u64;
                hash = hash.wrapping_mul(PRIME);
            }
        };
        for tile in &self.tiles {
            match tile {
                Tile::Door(door) => {
                    write(door.is_open() as u64 | (door.is_animating() as u64) << 1);
                    write(door.progress().to_bits());
                }
                Tile::Trigger(trigger) => write(trigger.is_triggered() as u64),
                Tile::Wall(_) | Tile::Floor => write(0),
            }
        }
        hash
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::default_map()
    }
}
