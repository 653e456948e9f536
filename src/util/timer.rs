//! One-shot countdown timers checked once per frame tick.
//!
//! The only deferred-execution construct in the crate. Calibration
//! settling and weapon laser visibility both run on these; there is no
//! background thread and nothing fires between ticks.

/// A one-shot countdown advanced by the host's per-frame `dt`.
///
/// Idle by default; [`start`](Self::start) arms it, [`tick`](Self::tick)
/// returns `true` exactly once when the countdown crosses zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownTimer {
    remaining: f32,
}

impl CountdownTimer {
    /// An idle timer that never fires until started.
    #[must_use]
    pub const fn idle() -> Self {
        Self { remaining: 0.0 }
    }

    /// Arm the timer for `seconds`. Restarting while running resets the
    /// countdown.
    pub fn start(&mut self, seconds: f32) {
        self.remaining = seconds.max(0.0);
    }

    /// Cancel without firing.
    pub fn cancel(&mut self) {
        self.remaining = 0.0;
    }

    /// Whether the countdown is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    /// Advance by `dt` seconds. Returns `true` on the tick where the
    /// countdown expires, and `false` on every other tick (including all
    /// ticks while idle).
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining -= dt.max(0.0);
        self.remaining <= 0.0
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = CountdownTimer::idle();
        assert!(!timer.is_running());
        for _ in 0..10 {
            assert!(!timer.tick(1.0));
        }
    }

    #[test]
    fn fires_exactly_once() {
        let mut timer = CountdownTimer::idle();
        timer.start(0.05);
        assert!(timer.is_running());
        assert!(!timer.tick(0.016));
        assert!(!timer.tick(0.016));
        assert!(!timer.tick(0.016));
        // Crosses zero here
        assert!(timer.tick(0.016));
        // Stays quiet afterwards
        assert!(!timer.tick(0.016));
        assert!(!timer.is_running());
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut timer = CountdownTimer::idle();
        timer.start(1.0);
        timer.cancel();
        assert!(!timer.tick(2.0));
    }

    #[test]
    fn restart_resets_countdown() {
        let mut timer = CountdownTimer::idle();
        timer.start(0.1);
        assert!(!timer.tick(0.09));
        timer.start(0.1);
        assert!(!timer.tick(0.05));
        assert!(timer.tick(0.06));
    }
}
