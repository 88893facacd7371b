//! Trigger module - floor plates that fire when the player steps on them

/// Result of stepping onto a trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerOutcome {
    /// The trigger fired at the given session time (seconds)
    Fired { at: f64 },
    /// One-shot trigger that already fired
    NoOp,
}

/// Trigger tile data. Triggers never block movement or rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    triggered: bool,
    retriggerable: bool,
    fired_at: Option<f64>,
}

impl Trigger {
    pub fn new(retriggerable: bool) -> Self {
        Self {
            triggered: false,
            retriggerable,
            fired_at: None,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn is_retriggerable(&self) -> bool {
        self.retriggerable
    }

    /// Session time of the most recent fire
    pub fn fired_at(&self) -> Option<f64> {
        self.fired_at
    }

    /// Fire unless this is a one-shot trigger that already fired
    pub fn on_player_step(&mut self, now: f64) -> TriggerOutcome {
        if self.triggered && !self.retriggerable {
            return TriggerOutcome::NoOp;
        }
        self.triggered = true;
        self.fired_at = Some(now);
        TriggerOutcome::Fired { at: now }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrigger_updates_timestamp() {
        let mut t = Trigger::new(true);
        assert_eq!(t.on_player_step(1.0), TriggerOutcome::Fired { at: 1.0 });
        assert_eq!(t.on_player_step(2.5), TriggerOutcome::Fired { at: 2.5 });
        assert_eq!(t.fired_at(), Some(2.5));
    }

    #[test]
    fn one_shot_keeps_first_timestamp() {
        let mut t = Trigger::new(false);
        t.on_player_step(1.0);
        assert_eq!(t.on_player_step(2.0), TriggerOutcome::NoOp);
        assert_eq!(t.fired_at(), Some(1.0));
    }
}
