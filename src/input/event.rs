use glam::{Quat, Vec2, Vec3};

/// Platform-agnostic look input events.
///
/// These are fed into
/// [`OrientationTracker::handle_event`](crate::tracker::OrientationTracker::handle_event)
/// once per frame. Which variant actually moves the camera depends on the
/// tracking mode selected at initialization: attitude samples drive sensor
/// mode, pointer deltas drive the fallback, and each is ignored by the
/// other mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookEvent {
    /// A raw device attitude sample in the sensor's native convention.
    Attitude {
        /// Unit quaternion reported by the rotation sensor.
        raw: Quat,
    },
    /// An angular-rate sample for sensors that report rotation rate
    /// instead of attitude.
    RotationRate {
        /// Rotation rate in radians per second about the render-space
        /// x (pitch), y (yaw), and z (roll, ignored) axes.
        rate: Vec3,
    },
    /// Pointer or touch movement in screen pixels (y grows downward).
    PointerDelta {
        /// Cursor/finger movement since the previous frame.
        delta: Vec2,
    },
    /// Re-capture the calibration baseline so the current physical
    /// orientation maps to the current visual forward direction.
    Recenter,
}
