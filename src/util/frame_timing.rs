//! Frame clock with FPS smoothing for hosts without their own timer.
//!
//! The tracker itself never reads the wall clock; the frame-stepping
//! driver owns timing and passes `dt` in. This clock is a convenience for
//! drivers that do not already have one.

use web_time::Instant;

/// Wall-clock frame timer producing per-frame `dt` and a smoothed FPS.
pub struct FrameClock {
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // reasonable starting estimate
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Call once per frame. Returns the elapsed time since the previous
    /// call in seconds and folds it into the FPS average.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt
    }

    /// Get the current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_returns_nonnegative_dt() {
        let mut clock = FrameClock::new();
        let dt = clock.tick();
        assert!(dt >= 0.0);
    }

    #[test]
    fn fps_stays_finite() {
        let mut clock = FrameClock::new();
        for _ in 0..5 {
            let _dt = clock.tick();
        }
        assert!(clock.fps().is_finite());
        assert!(clock.fps() > 0.0);
    }
}
