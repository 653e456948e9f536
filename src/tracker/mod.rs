//! The orientation tracker core.
//!
//! Converts raw device attitude samples into a stable, axis-corrected,
//! optionally pitch-clamped camera rotation, independent of the device's
//! native coordinate convention. When no rotation sensor is present the
//! tracker degrades to pointer/touch look; the mode is selected once at
//! [`initialize`](OrientationTracker::initialize) and never re-evaluated
//! per frame.
//!
//! The tracker is strictly frame-synchronous: the host calls
//! [`update`](OrientationTracker::update) (or
//! [`pointer_look`](OrientationTracker::pointer_look)) exactly once per
//! rendered frame with the elapsed frame time, and applies the returned
//! rotation to its camera transform. The tracker moves nothing itself.

mod convention;
mod pitch;

pub use convention::AxisConvention;
pub use pitch::{clamp_pitch, pitch_degrees};

use glam::{Quat, Vec2, Vec3};

use crate::input::{AttitudeSource, LookEvent, PointerLook};
use crate::options::{PointerOptions, TrackerOptions};
use crate::util::timer::CountdownTimer;

/// Which input path drives the orientation, chosen at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingMode {
    /// Attitude samples from a rotation sensor drive the camera.
    Sensor,
    /// Pointer/touch deltas drive the camera (sensor absent or disabled).
    Pointer,
}

/// Derive a frame-rate-compensated interpolation factor from the
/// configured smoothing constant.
///
/// `smoothing = 0` yields `t = 1` (the output snaps to the target with no
/// lag); `smoothing = 1` yields `t = 0` (frozen). In between, the factor
/// is normalized against a 60 Hz frame so a given smoothing value
/// converges at the same wall-clock rate regardless of frame rate.
#[must_use]
fn smoothing_factor(smoothing: f32, dt: f32) -> f32 {
    let s = smoothing.clamp(0.0, 1.0);
    if s <= 0.0 {
        return 1.0;
    }
    if s >= 1.0 {
        return 0.0;
    }
    1.0 - s.powf(dt * 60.0)
}

/// Scale a rotation's angle by `factor`, keeping its axis.
fn scale_rotation(q: Quat, factor: f32) -> Quat {
    if (factor - 1.0).abs() < f32::EPSILON {
        return q;
    }
    // q and -q encode the same orientation; take the w >= 0
    // representative so the extracted angle is the short-way one rather
    // than its near-2-pi complement.
    let q = if q.w < 0.0 { -q } else { q };
    let (axis, angle) = q.to_axis_angle();
    if angle.abs() < 1e-6 {
        return Quat::IDENTITY;
    }
    Quat::from_axis_angle(axis, angle * factor)
}

/// Sensor-to-camera orientation tracker with pointer fallback.
///
/// Lifecycle is explicit and caller-owned: construct, `initialize` with a
/// capability-reporting [`AttitudeSource`], feed one input per frame, and
/// `dispose` when the owning camera goes away. Before initialization and
/// after disposal every per-frame call is a no-op that returns the stored
/// orientation unchanged.
pub struct OrientationTracker {
    options: TrackerOptions,
    pointer_options: PointerOptions,
    mode: Option<TrackingMode>,
    /// Camera rotation as rendered last frame. Always unit length.
    smoothed: Quat,
    /// Calibration baseline, already axis-corrected. `None` until the
    /// first sample arrives.
    baseline: Option<Quat>,
    /// Most recent corrected sample, kept so `recenter` can re-capture.
    last_corrected: Option<Quat>,
    /// Set when a recenter was requested before any sample existed; the
    /// next sample becomes the baseline.
    recenter_pending: bool,
    /// Calibration settle countdown; on expiry the baseline is
    /// re-captured once, discarding whatever the sensor reported while
    /// warming up.
    settle: CountdownTimer,
    pointer: PointerLook,
}

impl OrientationTracker {
    /// Create an uninitialized tracker.
    #[must_use]
    pub fn new(options: TrackerOptions, pointer_options: PointerOptions) -> Self {
        Self {
            options,
            pointer_options,
            mode: None,
            smoothed: Quat::IDENTITY,
            baseline: None,
            last_corrected: None,
            recenter_pending: false,
            settle: CountdownTimer::idle(),
            pointer: PointerLook::new(),
        }
    }

    /// Select the tracking mode and capture the calibration baseline.
    ///
    /// Consults the source's capability report once. A missing sensor (or
    /// `use_sensor_if_available = false`) logs a warning and selects
    /// pointer mode; it is never an error. `current_rotation` seeds the
    /// smoothed state so the camera does not snap on the first frame.
    pub fn initialize(
        &mut self,
        source: &mut dyn AttitudeSource,
        current_rotation: Quat,
    ) -> TrackingMode {
        self.smoothed = current_rotation.normalize();
        self.baseline = None;
        self.last_corrected = None;
        self.recenter_pending = false;
        self.settle.cancel();

        let sensor_driven =
            self.options.use_sensor_if_available && source.is_available();
        if sensor_driven {
            match source.attitude() {
                Some(raw) => {
                    let corrected = self.options.convention.correct(raw);
                    self.baseline = Some(corrected);
                    self.last_corrected = Some(corrected);
                }
                // Sensor present but no sample yet; first update captures
                None => self.recenter_pending = true,
            }
            if self.options.calibration_settle > 0.0 {
                self.settle.start(self.options.calibration_settle);
            }
            self.mode = Some(TrackingMode::Sensor);
            log::info!("orientation tracker initialized in sensor mode");
        } else {
            self.pointer.seed(self.smoothed);
            self.mode = Some(TrackingMode::Pointer);
            if self.options.use_sensor_if_available {
                log::warn!(
                    "rotation sensor unavailable, falling back to pointer look"
                );
            } else {
                log::info!(
                    "orientation tracker initialized in pointer mode (sensor disabled)"
                );
            }
        }
        // mode was just assigned above
        self.mode.unwrap_or(TrackingMode::Pointer)
    }

    /// Return the tracker to the uninitialized state.
    ///
    /// Subsequent [`update`](Self::update) and
    /// [`pointer_look`](Self::pointer_look) calls are no-ops until the
    /// next [`initialize`](Self::initialize).
    pub fn dispose(&mut self) {
        self.mode = None;
        self.baseline = None;
        self.last_corrected = None;
        self.recenter_pending = false;
        self.settle.cancel();
    }

    /// The mode selected at initialization, if any.
    #[must_use]
    pub fn mode(&self) -> Option<TrackingMode> {
        self.mode
    }

    /// The current rendered orientation. Always a unit quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.smoothed
    }

    /// Re-capture the calibration baseline from the most recent sample so
    /// the user's present physical orientation maps to the current visual
    /// forward direction.
    ///
    /// Valid at any time and idempotent. In pointer mode, or before any
    /// sample has arrived, the capture is deferred to the next sample.
    pub fn recenter(&mut self) {
        if self.mode != Some(TrackingMode::Sensor) {
            return;
        }
        match self.last_corrected {
            Some(corrected) => self.baseline = Some(corrected),
            None => self.recenter_pending = true,
        }
    }

    /// Advance the calibration settle countdown.
    ///
    /// Call once per frame before [`update`](Self::update). When the
    /// settle delay expires the baseline is re-captured once, so samples
    /// produced while the sensor warmed up do not freeze into the
    /// calibration.
    pub fn tick(&mut self, dt: f32) {
        if self.settle.tick(dt) {
            log::debug!("calibration settle elapsed, re-capturing baseline");
            self.recenter();
        }
    }

    /// Process one raw attitude sample and return the new orientation.
    ///
    /// No-op (returns the stored orientation unchanged) in pointer mode,
    /// before initialization, and after disposal. The pipeline is:
    /// axis-correct, subtract the baseline, scale by sensitivity, clamp
    /// pitch, then slerp from the previous smoothed state.
    pub fn update(&mut self, raw: Quat, dt: f32) -> Quat {
        if self.mode != Some(TrackingMode::Sensor) {
            return self.smoothed;
        }

        let corrected = self.options.convention.correct(raw.normalize());
        self.last_corrected = Some(corrected);
        if self.recenter_pending || self.baseline.is_none() {
            self.baseline = Some(corrected);
            self.recenter_pending = false;
        }
        let Some(baseline) = self.baseline else {
            // Unreachable: the baseline was just captured above. Treated
            // as a missing-reference no-op rather than a panic.
            return self.smoothed;
        };

        let relative = corrected * baseline.inverse();
        let scaled = scale_rotation(relative, self.options.sensitivity);
        let mut target = self.options.convention.frame_rotation() * scaled;
        if self.options.clamp_pitch {
            target = pitch::clamp_pitch(
                target,
                self.options.min_pitch,
                self.options.max_pitch,
            );
        }

        let t = smoothing_factor(self.options.smoothing, dt);
        self.smoothed = self.smoothed.slerp(target, t).normalize();
        self.smoothed
    }

    /// Integrate one angular-rate sample (radians per second, render-
    /// space axes) into the orientation.
    ///
    /// Covers sensors that report rotation rate instead of attitude: the
    /// yaw rate turns the camera about the world vertical and the pitch
    /// rate about its lateral axis; roll rate is ignored. Sensitivity
    /// scales the integrated step and the pitch clamp applies as in
    /// [`update`](Self::update). Rate samples are incremental, so they
    /// bypass the baseline/smoothing pipeline and apply directly. No-op
    /// outside sensor mode.
    pub fn update_rate(&mut self, rate: Vec3, dt: f32) -> Quat {
        if self.mode != Some(TrackingMode::Sensor) {
            return self.smoothed;
        }

        let step = self.options.sensitivity * dt.max(0.0);
        let yaw = Quat::from_rotation_y(rate.y * step);
        let pitch_turn = Quat::from_rotation_x(rate.x * step);
        let mut target = yaw * self.smoothed * pitch_turn;
        if self.options.clamp_pitch {
            target = pitch::clamp_pitch(
                target,
                self.options.min_pitch,
                self.options.max_pitch,
            );
        }
        self.smoothed = target.normalize();
        self.smoothed
    }

    /// Process one pointer/touch delta (screen pixels, y down) and return
    /// the new orientation.
    ///
    /// No-op in sensor mode and while uninitialized.
    pub fn pointer_look(&mut self, delta: Vec2, dt: f32) -> Quat {
        if self.mode != Some(TrackingMode::Pointer) {
            return self.smoothed;
        }

        self.pointer.apply_delta(
            delta,
            self.pointer_options.sensitivity,
            self.pointer_options.invert_y,
        );
        if self.options.clamp_pitch {
            self.pointer
                .clamp_pitch(self.options.min_pitch, self.options.max_pitch);
        }
        let t = smoothing_factor(self.options.smoothing, dt);
        self.smoothed = self.pointer.converge(t).normalize();
        self.smoothed
    }

    /// Dispatch a [`LookEvent`] to the appropriate per-frame operation.
    ///
    /// Events for the inactive mode fall through as no-ops, so hosts can
    /// forward their whole input stream without filtering by mode.
    pub fn handle_event(&mut self, event: LookEvent, dt: f32) -> Quat {
        match event {
            LookEvent::Attitude { raw } => self.update(raw, dt),
            LookEvent::RotationRate { rate } => self.update_rate(rate, dt),
            LookEvent::PointerDelta { delta } => self.pointer_look(delta, dt),
            LookEvent::Recenter => {
                self.recenter();
                self.smoothed
            }
        }
    }
}
