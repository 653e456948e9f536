use glam::Quat;

/// Seam between a platform rotation sensor and the tracker.
///
/// [`is_available`](Self::is_available) is a reported capability check,
/// consulted exactly once at
/// [`initialize`](crate::tracker::OrientationTracker::initialize); it is
/// not re-evaluated per frame and it never raises an error. A source that
/// reports available may still return `None` from
/// [`attitude`](Self::attitude) while the sensor warms up.
pub trait AttitudeSource {
    /// Whether the platform reports a usable rotation sensor.
    fn is_available(&self) -> bool;

    /// The most recent attitude sample, if one has been delivered yet.
    fn attitude(&mut self) -> Option<Quat>;
}

/// A canned attitude sequence for tests and the demo driver.
///
/// Plays back its frames one per [`attitude`](AttitudeSource::attitude)
/// call, then holds the last frame.
pub struct ScriptedSource {
    frames: Vec<Quat>,
    cursor: usize,
    available: bool,
}

impl ScriptedSource {
    /// A source that reports available and replays `frames` in order.
    #[must_use]
    pub fn new(frames: Vec<Quat>) -> Self {
        Self {
            frames,
            cursor: 0,
            available: true,
        }
    }

    /// A source whose capability check reports no sensor.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            frames: Vec::new(),
            cursor: 0,
            available: false,
        }
    }
}

impl AttitudeSource for ScriptedSource {
    fn is_available(&self) -> bool {
        self.available
    }

    fn attitude(&mut self) -> Option<Quat> {
        if !self.available || self.frames.is_empty() {
            return None;
        }
        let index = self.cursor.min(self.frames.len() - 1);
        self.cursor += 1;
        self.frames.get(index).copied()
    }
}
