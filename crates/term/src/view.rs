//! DungeonView: maps a [`World`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout:
//!
//! ```text
//! row 0        control hint                          | sidebar
//! rows 1..h-2  first-person scene                    | (title, clock,
//! row h-2      position and facing                   |  minimap)
//! row h-1      what is ahead / underfoot             |
//! ```
//!
//! The sidebar is dropped when the terminal is too narrow for it.

use std::fmt::Write;

use crate::core::surface::{DOOR_FRAME_GLYPH, EMPTY_GLYPH};
use crate::core::{ColumnSample, FrontStatus, World};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::flash::Flash;
use crate::types::{MINIMAP_SIZE, SIDEBAR_WIDTH};

/// Scene columns required before the sidebar is shown
const MIN_SCENE_WIDTH: u16 = 20;

/// Distance at which walls reach their darkest shade
const FOG_DISTANCE: f64 = 12.0;

const HINT: &str = "W/S move  A/D turn  Space open/close  Q quit";

const TEXT: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const WALL: Rgb = Rgb::new(210, 205, 190);
const DOOR_FRAME: Rgb = Rgb::new(150, 100, 50);
const FLASH: Rgb = Rgb::new(255, 240, 120);
const MAP_PLAYER: Rgb = Rgb::new(120, 220, 120);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where each screen region goes for a viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Number of raycast columns
    pub scene_width: u16,
    /// View height handed to column projection (rows above the status lines)
    pub scene_height: u16,
    /// First column of the sidebar, if shown
    pub sidebar_x: Option<u16>,
}

impl Layout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let sidebar = viewport.width >= SIDEBAR_WIDTH + MIN_SCENE_WIDTH;
        let scene_width = if sidebar {
            viewport.width - SIDEBAR_WIDTH
        } else {
            viewport.width
        };
        Self {
            scene_width,
            scene_height: viewport.height.saturating_sub(2),
            sidebar_x: sidebar.then_some(scene_width),
        }
    }
}

/// Status line text for what the player faces
pub fn front_status_text(status: FrontStatus) -> &'static str {
    match status {
        FrontStatus::DoorClosed => "A closed door. Press Space to open it.",
        FrontStatus::DoorOpen => "An open door. Press Space to close it.",
        FrontStatus::DoorOpening => "The door is opening...",
        FrontStatus::DoorClosing => "The door is closing...",
        FrontStatus::TriggerFloor { triggered: false } => "You stand on a pressure plate.",
        FrontStatus::TriggerFloor { triggered: true } => "The pressure plate is spent.",
        FrontStatus::Nothing => "",
    }
}

/// Renders the dungeon; keeps its column and text buffers between frames
#[derive(Debug)]
pub struct DungeonView {
    columns: Vec<ColumnSample>,
    text: String,
}

impl Default for DungeonView {
    fn default() -> Self {
        Self::new()
    }
}

impl DungeonView {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            text: String::with_capacity(64),
        }
    }

    /// Render a whole frame into an existing framebuffer
    pub fn render_into(&mut self, world: &World, flash: &Flash, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TEXT.cell(' '));
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        let layout = Layout::for_viewport(viewport);
        fb.put_str_until(0, 0, layout.scene_width, HINT, CellStyle { dim: true, ..TEXT });

        self.draw_scene(world, flash, layout, fb);
        self.draw_status(world, layout, viewport, fb);
        if let Some(x) = layout.sidebar_x {
            self.draw_sidebar(world, x, viewport, fb);
        }
    }

    /// Convenience: allocate a framebuffer and render into it
    pub fn render(&mut self, world: &World, flash: &Flash, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, flash, viewport, &mut fb);
        fb
    }

    fn draw_scene(&mut self, world: &World, flash: &Flash, layout: Layout, fb: &mut FrameBuffer) {
        let h = layout.scene_height;
        if h < 2 {
            return;
        }

        if flash.is_lit() {
            fb.fill_rect(0, 1, layout.scene_width, h - 1, '#', CellStyle::fg(FLASH));
            return;
        }

        world.render_columns(layout.scene_width, h, &mut self.columns);
        for sample in &self.columns {
            if sample.glyph == EMPTY_GLYPH || sample.height == 0 {
                continue;
            }
            let (start, end) = sample.span(h);
            // Status rows start at `h`
            let end = end.min(h - 1);
            if start > end {
                continue;
            }
            fb.fill_column(sample.column, start, end, sample.glyph, column_style(sample));
        }
    }

    fn draw_status(&mut self, world: &World, layout: Layout, viewport: Viewport, fb: &mut FrameBuffer) {
        let pose = world.pose();
        let compass = pose.compass();
        let max_x = layout.scene_width;
        if viewport.height >= 2 {
            self.text.clear();
            // Writing into a String cannot fail
            let _ = write!(
                self.text,
                "Pos ({:.1}, {:.1})  Facing {} {}",
                pose.position.x,
                pose.position.y,
                compass.as_str(),
                compass.arrow()
            );
            fb.put_str_until(0, viewport.height - 2, max_x, &self.text, TEXT);
        }
        let ahead = front_status_text(world.front_status());
        fb.put_str_until(0, viewport.height - 1, max_x, ahead, CellStyle { bold: true, ..TEXT });
    }

    fn draw_sidebar(&mut self, world: &World, x0: u16, viewport: Viewport, fb: &mut FrameBuffer) {
        let border = CellStyle::fg(Rgb::new(90, 90, 100));
        fb.fill_column(x0, 0, viewport.height.saturating_sub(1), '│', border);

        let x = x0 + 2;
        fb.put_str(x, 0, "DUNGEON", CellStyle { bold: true, ..TEXT });
        self.text.clear();
        let _ = write!(self.text, "Tick  {}", world.ticks());
        fb.put_str(x, 2, &self.text, TEXT);
        self.text.clear();
        let _ = write!(self.text, "Time  {:.1}s", world.clock());
        fb.put_str(x, 3, &self.text, TEXT);
        fb.put_str(x, 5, "Map", CellStyle { dim: true, ..TEXT });
        draw_minimap(world, x, 6, fb);
    }
}

/// Draw a `MINIMAP_SIZE` square of the map with its top-left at (x0, y0).
///
/// The window follows the player on larger maps. North is up, so screen
/// rows run from the highest map `y` down.
fn draw_minimap(world: &World, x0: u16, y0: u16, fb: &mut FrameBuffer) {
    let grid = world.grid();
    let size = MINIMAP_SIZE as i32;
    let (px, py) = world.pose().cell();
    let origin = |p: i32, extent: usize| (p - size / 2).clamp(0, (extent as i32 - size).max(0));
    let (ox, oy) = (origin(px, grid.width()), origin(py, grid.height()));

    let wall = CellStyle::fg(Rgb::new(160, 160, 170));
    let player = CellStyle {
        bold: true,
        ..CellStyle::fg(MAP_PLAYER)
    };
    for row in 0..size {
        let my = oy + size - 1 - row;
        for col in 0..size {
            let mx = ox + col;
            let (sx, sy) = (x0 + col as u16, y0 + row as u16);
            if (mx, my) == (px, py) {
                fb.put_char(sx, sy, world.pose().compass().arrow(), player);
            } else {
                fb.put_char(sx, sy, grid.minimap_char(mx, my), wall);
            }
        }
    }
}

fn column_style(sample: &ColumnSample) -> CellStyle {
    if sample.glyph == DOOR_FRAME_GLYPH {
        return CellStyle::fg(DOOR_FRAME);
    }
    let light = 1.0 - (sample.distance / FOG_DISTANCE).min(0.7);
    CellStyle::fg(WALL.scaled(light))
}
