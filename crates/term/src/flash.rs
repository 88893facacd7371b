//! Screen flash shown when a trigger plate fires.

use crate::types::{FLASH_PERIOD_SECS, FLASH_SECS};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Flash {
    /// Seconds since the flash started; `None` when idle
    elapsed: Option<f64>,
}

impl Flash {
    pub fn start(&mut self) {
        self.elapsed = Some(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn update(&mut self, delta_time: f64) {
        if let Some(t) = self.elapsed {
            let t = t + delta_time.max(0.0);
            self.elapsed = (t < FLASH_SECS).then_some(t);
        }
    }

    /// Lit on even periods, dark on odd ones
    pub fn is_lit(&self) -> bool {
        match self.elapsed {
            Some(t) => ((t / FLASH_PERIOD_SECS).floor() as u64) % 2 == 0,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinks_then_expires() {
        let mut flash = Flash::default();
        assert!(!flash.is_lit());

        flash.start();
        assert!(flash.is_lit());
        flash.update(0.125);
        assert!(!flash.is_lit());
        flash.update(0.1);
        assert!(flash.is_lit());
        flash.update(0.3);
        assert!(!flash.is_active());
        assert!(!flash.is_lit());
    }

    #[test]
    fn restart_resets_timer() {
        let mut flash = Flash::default();
        flash.start();
        flash.update(0.45);
        flash.start();
        flash.update(0.1);
        assert!(flash.is_active());
    }
}
