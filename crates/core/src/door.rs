//! Door module - the per-tile door state machine
//!
//! ```text
//! Closed --interact--> Opening --progress>=1--> Open
//! Open   --interact--> Closing --progress>=1--> Closed
//! ```
//!
//! Interact while a swing is in flight is ignored. Progress advances by
//! `delta_time * DOOR_RATE`, so the swing length does not depend on frame rate.

use crate::types::{DoorDirection, DOOR_RATE, PROGRESS_EPSILON};

/// Observable door state, derived from the raw fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Result of advancing a door by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorTransition {
    /// Still swinging, or idle
    None,
    /// Reached the fully open terminal state this tick
    Opened,
    /// Reached the fully closed terminal state this tick
    Closed,
}

/// Door tile data
///
/// Invariant: `animating` implies `progress` is in `[0, 1)`. Progress reaching
/// 1.0 is the transition event; it is reset to 0 when the swing completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Door {
    open: bool,
    animating: bool,
    direction: DoorDirection,
    progress: f64,
}

impl Door {
    /// A closed, idle door
    pub fn new() -> Self {
        Self {
            open: false,
            animating: false,
            direction: DoorDirection::Opening,
            progress: 0.0,
        }
    }

    /// A door that starts fully open
    pub fn new_open() -> Self {
        Self {
            open: true,
            ..Self::new()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn direction(&self) -> DoorDirection {
        self.direction
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Only the fully open terminal state lets the player through
    pub fn is_passable(&self) -> bool {
        self.open && !self.animating
    }

    /// Doors block rays whenever they are not fully open
    pub fn is_opaque(&self) -> bool {
        !self.open || self.animating
    }

    pub fn state(&self) -> DoorState {
        match (self.animating, self.direction, self.open) {
            (true, DoorDirection::Opening, _) => DoorState::Opening,
            (true, DoorDirection::Closing, _) => DoorState::Closing,
            (false, _, true) => DoorState::Open,
            (false, _, false) => DoorState::Closed,
        }
    }

    /// Start a swing toward the opposite terminal state.
    ///
    /// Returns false (and changes nothing) while a swing is already running.
    pub fn interact(&mut self) -> bool {
        if self.animating {
            return false;
        }
        self.animating = true;
        self.progress = 0.0;
        self.direction = if self.open {
            DoorDirection::Closing
        } else {
            DoorDirection::Opening
        };
        true
    }

    /// Advance the swing by `delta_time` seconds
    pub fn update(&mut self, delta_time: f64) -> DoorTransition {
        if !self.animating {
            return DoorTransition::None;
        }

        self.progress += delta_time * DOOR_RATE;
        if self.progress < 1.0 - PROGRESS_EPSILON {
            return DoorTransition::None;
        }

        self.animating = false;
        self.progress = 0.0;
        match self.direction {
            DoorDirection::Opening => {
                self.open = true;
                DoorTransition::Opened
            }
            DoorDirection::Closing => {
                self.open = false;
                DoorTransition::Closed
            }
        }
    }

    /// Half-width of the centred gap while the door swings.
    ///
    /// `0.5 * progress` while opening, `0.5 * (1 - progress)` while closing.
    /// The leaf stays visible outside the gap, so the visible leaf shrinks from
    /// full width (closed) to nothing (open). Idle doors report 0.0 when closed
    /// and 0.5 when open.
    pub fn gap_half_width(&self) -> f64 {
        if !self.animating {
            return if self.open { 0.5 } else { 0.0 };
        }
        match self.direction {
            DoorDirection::Opening => 0.5 * self.progress,
            DoorDirection::Closing => 0.5 * (1.0 - self.progress),
        }
    }
}

impl Default for Door {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interact_is_ignored_mid_swing() {
        let mut door = Door::new();
        assert!(door.interact());
        door.update(0.2);
        let progress = door.progress();

        assert!(!door.interact());
        assert_eq!(door.progress(), progress);
        assert_eq!(door.state(), DoorState::Opening);
    }

    #[test]
    fn progress_stays_below_one_while_animating() {
        let mut door = Door::new();
        door.interact();
        for _ in 0..7 {
            door.update(0.0625);
            assert!(door.is_animating());
            assert!((0.0..1.0).contains(&door.progress()));
        }
        assert_eq!(door.update(0.0625), DoorTransition::Opened);
        assert_eq!(door.progress(), 0.0);
    }

    #[test]
    fn gap_grows_while_opening_and_shrinks_while_closing() {
        let mut door = Door::new();
        door.interact();
        door.update(0.25);
        assert!((door.gap_half_width() - 0.25).abs() < 1e-12);

        door.update(0.25);
        assert_eq!(door.state(), DoorState::Open);
        door.interact();
        door.update(0.1);
        assert!((door.gap_half_width() - 0.4).abs() < 1e-12);
    }
}
