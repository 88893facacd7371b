//! Pose module - player position, view direction and camera plane
//!
//! Turning is animated: [`Pose::rotate`] computes an exact 90° target and the
//! direction and plane vectors are blended toward it over several ticks. The
//! blend is component-wise linear, so intermediate vectors are shorter than
//! unit length. That is accepted as a visual approximation; the vectors are
//! snapped exactly onto the target when the blend completes.

use glam::DVec2;
use log::debug;

use crate::grid::TileGrid;
use crate::types::{
    Compass, CAMERA_PLANE, INTERACT_REACH, MOVE_DISTANCE, PROGRESS_EPSILON, ROTATION_RATE,
    ROTATION_STEP,
};

/// In-flight rotation blend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationLerp {
    pub from_direction: DVec2,
    pub from_plane: DVec2,
    pub target_direction: DVec2,
    pub target_plane: DVec2,
    pub progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: DVec2,
    pub direction: DVec2,
    pub plane: DVec2,
    rotation: Option<RotationLerp>,
}

/// Exact quarter turn; clockwise maps (x, y) to (y, -x) with y growing north
#[inline]
fn quarter_turn(v: DVec2, clockwise: bool) -> DVec2 {
    if clockwise {
        DVec2::new(v.y, -v.x)
    } else {
        DVec2::new(-v.y, v.x)
    }
}

impl Pose {
    /// Stand at the centre of `cell` looking toward `facing`
    pub fn new(cell: (i32, i32), facing: Compass) -> Self {
        let (dx, dy) = facing.unit();
        let direction = DVec2::new(dx, dy);
        Self {
            position: DVec2::new(cell.0 as f64 + 0.5, cell.1 as f64 + 0.5),
            direction,
            plane: quarter_turn(direction, true) * CAMERA_PLANE,
            rotation: None,
        }
    }

    /// Grid cell containing the position
    pub fn cell(&self) -> (i32, i32) {
        (self.position.x.floor() as i32, self.position.y.floor() as i32)
    }

    pub fn rotation(&self) -> Option<&RotationLerp> {
        self.rotation.as_ref()
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }

    /// True if either view vector collapsed to zero
    pub fn is_degenerate(&self) -> bool {
        self.direction == DVec2::ZERO || self.plane == DVec2::ZERO
    }

    /// Start a 90° turn from the current (possibly mid-blend) vectors.
    ///
    /// Any blend already running is replaced.
    pub fn rotate(&mut self, clockwise: bool) {
        self.rotation = Some(RotationLerp {
            from_direction: self.direction,
            from_plane: self.plane,
            target_direction: quarter_turn(self.direction, clockwise),
            target_plane: quarter_turn(self.plane, clockwise),
            progress: 0.0,
        });
    }

    /// Advance the turn by one fixed step per tick.
    ///
    /// Frame-count based: turn speed follows the tick rate, unlike door swings.
    pub fn update_rotation(&mut self) {
        self.advance_rotation(ROTATION_STEP);
    }

    /// Advance the turn by `delta_time` seconds at [`ROTATION_RATE`]
    pub fn update_rotation_scaled(&mut self, delta_time: f64) {
        self.advance_rotation(delta_time * ROTATION_RATE);
    }

    fn advance_rotation(&mut self, amount: f64) {
        let Some(lerp) = self.rotation.as_mut() else {
            return;
        };

        lerp.progress += amount;
        if lerp.progress >= 1.0 - PROGRESS_EPSILON {
            self.direction = lerp.target_direction;
            self.plane = lerp.target_plane;
            self.rotation = None;
            return;
        }

        let t = lerp.progress;
        self.direction = lerp.from_direction.lerp(lerp.target_direction, t);
        self.plane = lerp.from_plane.lerp(lerp.target_plane, t);
    }

    /// Try to step one cell forward or backward.
    ///
    /// The candidate cell is `floor(position ± direction)`. If it is passable
    /// the position snaps to its centre and the cell is returned; otherwise
    /// nothing changes.
    pub fn step(&mut self, forward: bool, grid: &TileGrid) -> Option<(i32, i32)> {
        let sign = if forward { 1.0 } else { -1.0 };
        let candidate = self.position + self.direction * (MOVE_DISTANCE * sign);
        let cell = (candidate.x.floor() as i32, candidate.y.floor() as i32);

        if !grid.is_passable(cell.0, cell.1) {
            return None;
        }
        self.position = DVec2::new(cell.0 as f64 + 0.5, cell.1 as f64 + 0.5);
        Some(cell)
    }

    /// Cell targeted by interact, slightly ahead of the player
    pub fn front_cell(&self) -> (i32, i32) {
        let ahead = self.position + self.direction * INTERACT_REACH;
        (ahead.x.floor() as i32, ahead.y.floor() as i32)
    }

    /// Move straight to the centre of `cell` (effect callbacks)
    pub fn teleport(&mut self, cell: (i32, i32)) {
        debug!("teleport to ({}, {})", cell.0, cell.1);
        self.position = DVec2::new(cell.0 as f64 + 0.5, cell.1 as f64 + 0.5);
    }

    /// View direction in degrees counter-clockwise from east
    pub fn heading_degrees(&self) -> f64 {
        self.direction.y.atan2(self.direction.x).to_degrees()
    }

    pub fn compass(&self) -> Compass {
        Compass::from_degrees(self.heading_degrees())
    }
}

impl Default for Pose {
    /// Cell (1, 1) facing east: position (1.5, 1.5), plane (0, -0.66)
    fn default() -> Self {
        Self::new((1, 1), Compass::East)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_matches_start_position() {
        let pose = Pose::default();
        assert_eq!(pose.position, DVec2::new(1.5, 1.5));
        assert_eq!(pose.direction, DVec2::new(1.0, 0.0));
        assert_eq!(pose.plane, DVec2::new(0.0, -0.66));
    }

    #[test]
    fn quarter_turns_compose_to_identity() {
        let v = DVec2::new(0.3, -0.8);
        let mut w = v;
        for _ in 0..4 {
            w = quarter_turn(w, true);
        }
        assert_eq!(v, w);
        assert_eq!(quarter_turn(quarter_turn(v, true), false), v);
    }

    #[test]
    fn midway_blend_is_shorter_than_unit() {
        let mut pose = Pose::default();
        pose.rotate(true);
        pose.update_rotation();
        pose.update_rotation();
        // progress 0.4 between (1,0) and (0,-1)
        assert!(pose.direction.length() < 1.0);
        assert!(!pose.is_degenerate());
    }
}
