//! Raycast module - DDA ray/grid intersection
//!
//! A ray starts at the player's position and walks the grid one boundary
//! crossing at a time, always advancing along the axis whose next crossing is
//! nearer. It stops at the first opaque tile or at the first cell outside the
//! grid. Distances are measured perpendicular to the camera plane, which
//! removes the fisheye bulge a Euclidean distance would produce.
//!
//! [`cast`] only reads the grid, so a frame's columns can be cast in any order.

use glam::DVec2;

use crate::grid::TileGrid;
use crate::pose::Pose;
use crate::tile::Tile;
use crate::types::{Orientation, Side, FACE_ON_THRESHOLD, SENTINEL_DELTA};

/// Smallest distance a hit may report (player standing exactly on a grid line)
const MIN_HIT_DISTANCE: f64 = 1e-6;

/// Structured result of one cast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Axis of the boundary crossed last
    pub side: Side,
    /// Perpendicular (camera-plane corrected) distance, always > 0
    pub distance: f64,
    /// Fractional offset along the hit surface, in [0, 1)
    pub wall_x: f64,
    /// Cell the ray stopped in; outside the grid for boundary hits
    pub cell: (i32, i32),
    /// Tile that produced the visible surface
    pub tile: Tile,
    /// The ray left the grid without meeting an opaque tile
    pub boundary: bool,
    /// Ray direction the hit was cast with
    pub ray: DVec2,
    /// Number of DDA steps taken
    pub steps: u32,
}

impl RayHit {
    /// Door that stopped the ray while swinging
    pub fn is_door_in_transition(&self) -> bool {
        self.tile.as_door().is_some_and(|d| d.is_animating())
    }

    /// Outward normal of the hit surface: unit length on the crossed axis
    pub fn normal(&self) -> DVec2 {
        match self.side {
            Side::X => DVec2::new(if self.ray.x >= 0.0 { 1.0 } else { -1.0 }, 0.0),
            Side::Y => DVec2::new(0.0, if self.ray.y >= 0.0 { 1.0 } else { -1.0 }),
        }
    }

    /// Classify how squarely `view_direction` faces the hit surface.
    ///
    /// `|dot(view, normal)| > 0.5` (within 60° of the normal) is face-on.
    pub fn orientation(&self, view_direction: DVec2) -> Orientation {
        classify(view_direction, self.normal())
    }
}

/// Face-on / glancing split for a view direction against a surface normal
pub fn classify(view_direction: DVec2, normal: DVec2) -> Orientation {
    if view_direction.dot(normal).abs() > FACE_ON_THRESHOLD {
        Orientation::FaceOn
    } else {
        Orientation::Glancing
    }
}

/// Horizontal camera coordinate for a screen column, sweeping -1..1
pub fn camera_x(column: u16, width: u16) -> f64 {
    if width == 0 {
        return 0.0;
    }
    2.0 * column as f64 / width as f64 - 1.0
}

/// Ray direction for a screen column: `direction + plane * camera_x`
pub fn column_ray(pose: &Pose, column: u16, width: u16) -> DVec2 {
    pose.direction + pose.plane * camera_x(column, width)
}

/// Upper bound on DDA steps for a grid; a ray starting anywhere inside the
/// grid leaves it in at most `width + height` steps.
pub fn max_steps(grid: &TileGrid) -> u32 {
    2 * (grid.width() + grid.height()) as u32 + 2
}

#[inline]
fn delta_for(component: f64) -> f64 {
    if component == 0.0 {
        SENTINEL_DELTA
    } else {
        (1.0 / component).abs()
    }
}

/// Cast one ray from `origin` along `ray` through `grid`.
///
/// Walls stop the ray. Doors stop it whenever they are not fully open, even
/// if the swing has left a gap. Floors, triggers and open doors let it pass.
/// Leaving the grid yields a hit on the boundary wall sentinel.
pub fn cast(origin: DVec2, ray: DVec2, grid: &TileGrid) -> RayHit {
    let mut map_x = origin.x.floor() as i32;
    let mut map_y = origin.y.floor() as i32;

    let delta_x = delta_for(ray.x);
    let delta_y = delta_for(ray.y);

    let (step_x, mut side_dist_x) = if ray.x < 0.0 {
        (-1, (origin.x - map_x as f64) * delta_x)
    } else {
        (1, (map_x as f64 + 1.0 - origin.x) * delta_x)
    };
    let (step_y, mut side_dist_y) = if ray.y < 0.0 {
        (-1, (origin.y - map_y as f64) * delta_y)
    } else {
        (1, (map_y as f64 + 1.0 - origin.y) * delta_y)
    };

    let limit = max_steps(grid);
    let mut side = Side::X;
    let mut steps = 0;
    let mut boundary = true;

    while steps < limit {
        // Ties go to the y-axis.
        if side_dist_x < side_dist_y {
            side_dist_x += delta_x;
            map_x += step_x;
            side = Side::X;
        } else {
            side_dist_y += delta_y;
            map_y += step_y;
            side = Side::Y;
        }
        steps += 1;

        if !grid.is_valid(map_x, map_y) {
            break;
        }
        if grid.get(map_x, map_y).is_opaque() {
            boundary = false;
            break;
        }
    }

    let perp = match side {
        Side::X => (map_x as f64 - origin.x + (1 - step_x) as f64 / 2.0) / ray.x,
        Side::Y => (map_y as f64 - origin.y + (1 - step_y) as f64 / 2.0) / ray.y,
    };
    let distance = if perp.is_nan() || perp < MIN_HIT_DISTANCE {
        MIN_HIT_DISTANCE
    } else {
        perp
    };

    let along = match side {
        Side::X => origin.y + distance * ray.y,
        Side::Y => origin.x + distance * ray.x,
    };
    let mut wall_x = along - along.floor();
    if !wall_x.is_finite() || wall_x >= 1.0 {
        wall_x = 0.0;
    }

    RayHit {
        side,
        distance,
        wall_x,
        cell: (map_x, map_y),
        tile: *grid.get(map_x, map_y),
        boundary,
        ray,
        steps,
    }
}

/// Cast the ray for one screen column from the pose
pub fn cast_column(pose: &Pose, grid: &TileGrid, column: u16, width: u16) -> RayHit {
    cast(pose.position, column_ray(pose, column, width), grid)
}
