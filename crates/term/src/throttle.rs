//! Redraw pacing.
//!
//! While something animates every tick is drawn. A still scene is redrawn
//! as soon as its fingerprint changes, otherwise at most once per interval
//! so terminal resizes and clock text still catch up.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last: None,
        }
    }

    /// Whether to draw at `now_ms` for a scene with `fingerprint`
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let draw = match self.last {
            None => true,
            Some(_) if animating => true,
            Some((_, seen)) if seen != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.idle_interval_ms,
        };
        if draw {
            self.last = Some((now_ms, fingerprint));
        }
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_scene_is_rate_limited() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 7, false));
        assert!(!t.should_render(100, 7, false));
        assert!(t.should_render(250, 7, false));
        assert!(!t.should_render(300, 7, false));
    }

    #[test]
    fn change_or_animation_draws_immediately() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1, false));
        assert!(t.should_render(10, 2, false));
        assert!(t.should_render(20, 2, true));
        assert!(t.should_render(30, 2, true));
    }
}
