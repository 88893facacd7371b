//! World module - everything one tick of the frame loop touches
//!
//! A tick is:
//!
//! 1. [`World::tick`] with the measured delta-time (rotation blend, door swings)
//! 2. at most one [`World::apply_action`] from polled input
//! 3. one [`World::render_columns`] call, which casts every column from a
//!    read-only view of the grid and pose
//!
//! The world owns the grid and the pose outright; nothing else holds a
//! reference into them between ticks.

use glam::DVec2;
use log::{debug, info};

use crate::door::DoorState;
use crate::effect::{apply_effect, EffectKind, EffectOutcome};
use crate::grid::TileGrid;
use crate::level::Level;
use crate::pose::Pose;
use crate::raycast::{cast_column, RayHit};
use crate::surface::{ColumnSample, Palette};
use crate::tile::Tile;
use crate::trigger::TriggerOutcome;
use crate::types::GameAction;

/// How the rotation blend advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPacing {
    /// Fixed step per tick; turn speed depends on the tick rate
    #[default]
    PerTick,
    /// Scaled by delta-time like door swings
    DeltaTime,
}

/// Event for observers (the view uses it to start a flash)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldEvent {
    TriggerFired { x: i32, y: i32, at: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Destination impassable; position unchanged
    Blocked,
    Moved { cell: (i32, i32) },
    /// Moved onto a trigger and it fired
    Triggered { cell: (i32, i32), at: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionOutcome {
    Move(MoveOutcome),
    Rotated,
    /// Whether a door started swinging
    Interacted(bool),
    Quit,
}

/// What the player is facing or standing on, for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontStatus {
    DoorClosed,
    DoorOpen,
    DoorOpening,
    DoorClosing,
    TriggerFloor { triggered: bool },
    Nothing,
}

#[derive(Debug, Clone)]
pub struct World {
    grid: TileGrid,
    pose: Pose,
    palette: Palette,
    pacing: RotationPacing,
    /// Session time in seconds (sum of tick delta-times)
    clock: f64,
    ticks: u64,
    last_event: Option<WorldEvent>,
    quit: bool,
}

impl World {
    pub fn new(level: Level) -> Self {
        Self {
            grid: level.grid,
            pose: level.spawn,
            palette: level.palette,
            pacing: RotationPacing::default(),
            clock: 0.0,
            ticks: 0,
            last_event: None,
            quit: false,
        }
    }

    pub fn with_rotation_pacing(mut self, pacing: RotationPacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Mutable pose for effect callbacks; the only mutation surface they get
    pub fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Consume the last event, if any
    pub fn take_last_event(&mut self) -> Option<WorldEvent> {
        self.last_event.take()
    }

    /// Advance all animations by `delta_time` seconds
    pub fn tick(&mut self, delta_time: f64) {
        let dt = delta_time.max(0.0);
        self.clock += dt;
        self.ticks += 1;

        match self.pacing {
            RotationPacing::PerTick => self.pose.update_rotation(),
            RotationPacing::DeltaTime => self.pose.update_rotation_scaled(dt),
        }
        self.grid.update(dt);
    }

    /// Apply one discrete action. Failed preconditions are silent no-ops.
    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        match action {
            GameAction::MoveForward => ActionOutcome::Move(self.move_player(true)),
            GameAction::MoveBackward => ActionOutcome::Move(self.move_player(false)),
            GameAction::RotateLeft => {
                self.pose.rotate(false);
                ActionOutcome::Rotated
            }
            GameAction::RotateRight => {
                self.pose.rotate(true);
                ActionOutcome::Rotated
            }
            GameAction::Interact => ActionOutcome::Interacted(self.interact()),
            GameAction::Quit => {
                info!("quit requested after {} ticks", self.ticks);
                self.quit = true;
                ActionOutcome::Quit
            }
        }
    }

    /// Step one cell; stepping onto a trigger fires it
    pub fn move_player(&mut self, forward: bool) -> MoveOutcome {
        let Some(cell) = self.pose.step(forward, &self.grid) else {
            return MoveOutcome::Blocked;
        };

        if let Some(Tile::Trigger(trigger)) = self.grid.get_mut(cell.0, cell.1) {
            if let TriggerOutcome::Fired { at } = trigger.on_player_step(self.clock) {
                info!("trigger at ({}, {}) fired", cell.0, cell.1);
                self.last_event = Some(WorldEvent::TriggerFired {
                    x: cell.0,
                    y: cell.1,
                    at,
                });
                return MoveOutcome::Triggered { cell, at };
            }
        }
        MoveOutcome::Moved { cell }
    }

    /// Toggle the door in the front cell.
    ///
    /// Returns false when there is no door or it is already swinging.
    pub fn interact(&mut self) -> bool {
        let (x, y) = self.pose.front_cell();
        // Mid-turn the front cell can be the player's own cell
        if (x, y) == self.pose.cell() {
            return false;
        }
        match self.grid.get_mut(x, y) {
            Some(Tile::Door(door)) => {
                let started = door.interact();
                if started {
                    debug!("door at ({}, {}) now {:?}", x, y, door.state());
                }
                started
            }
            _ => false,
        }
    }

    pub fn apply_effect(&mut self, effect: EffectKind) -> EffectOutcome {
        apply_effect(effect, &mut self.pose, &self.grid)
    }

    /// Door ahead takes precedence over the plate underfoot
    pub fn front_status(&self) -> FrontStatus {
        let (fx, fy) = self.pose.front_cell();
        if let Some(door) = self.grid.get(fx, fy).as_door() {
            return match door.state() {
                DoorState::Closed => FrontStatus::DoorClosed,
                DoorState::Open => FrontStatus::DoorOpen,
                DoorState::Opening => FrontStatus::DoorOpening,
                DoorState::Closing => FrontStatus::DoorClosing,
            };
        }

        let (px, py) = self.pose.cell();
        match self.grid.get(px, py).as_trigger() {
            Some(trigger) => FrontStatus::TriggerFloor {
                triggered: trigger.is_triggered(),
            },
            None => FrontStatus::Nothing,
        }
    }

    pub fn cast_column(&self, column: u16, width: u16) -> RayHit {
        cast_column(&self.pose, &self.grid, column, width)
    }

    /// Cast and shade every column of a `width` x `view_height` view into `out`.
    ///
    /// `out` is cleared first; callers can keep one buffer across frames.
    pub fn render_columns(&self, width: u16, view_height: u16, out: &mut Vec<ColumnSample>) {
        out.clear();
        let view: DVec2 = self.pose.direction;
        for column in 0..width {
            let hit = self.cast_column(column, width);
            out.push(ColumnSample::from_hit(
                column,
                &hit,
                view,
                view_height,
                &self.palette,
            ));
        }
    }

    /// Whether anything is moving on its own (rotation blend or door swing)
    pub fn is_animating(&self) -> bool {
        self.pose.is_rotating() || self.grid.has_animation()
    }

    /// Fingerprint of everything a frame depends on
    pub fn fingerprint(&self) -> u64 {
        let mut h = self.grid.state_fingerprint();
        for v in [
            self.pose.position.x,
            self.pose.position.y,
            self.pose.direction.x,
            self.pose.direction.y,
        ] {
            h = (h ^ v.to_bits()).wrapping_mul(0x100000001b3);
        }
        h
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Level::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_sets_flag() {
        let mut world = World::default();
        assert!(!world.is_quit());
        assert_eq!(world.apply_action(GameAction::Quit), ActionOutcome::Quit);
        assert!(world.is_quit());
    }

    #[test]
    fn clock_ignores_negative_delta() {
        let mut world = World::default();
        world.tick(0.25);
        world.tick(-1.0);
        assert_eq!(world.clock(), 0.25);
        assert_eq!(world.ticks(), 2);
    }

    #[test]
    fn interact_without_door_is_noop() {
        let mut world = World::default();
        world.apply_action(GameAction::RotateLeft);
        for _ in 0..5 {
            world.tick(0.05);
        }
        // Facing north at (1,1): front cell (1,2) is floor.
        assert_eq!(world.apply_action(GameAction::Interact), ActionOutcome::Interacted(false));
    }
}
