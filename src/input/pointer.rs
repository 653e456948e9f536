use glam::{EulerRot, Quat, Vec2};

use crate::util::angles::{lerp_degrees, normalize_degrees};

/// Accumulated pointer/touch look state for the non-sensor fallback.
///
/// Deltas arrive in screen pixels with y growing downward. Yaw and pitch
/// accumulate in degrees; the rendered angles chase the accumulated
/// targets with whatever interpolation factor the tracker derives from
/// its smoothing constant, so sensor and pointer modes share one
/// convergence law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerLook {
    /// Accumulated yaw target in degrees.
    target_yaw: f32,
    /// Accumulated pitch target in degrees (positive looks up).
    target_pitch: f32,
    /// Rendered yaw in degrees.
    current_yaw: f32,
    /// Rendered pitch in degrees.
    current_pitch: f32,
}

impl PointerLook {
    /// Fresh state at the identity orientation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target_yaw: 0.0,
            target_pitch: 0.0,
            current_yaw: 0.0,
            current_pitch: 0.0,
        }
    }

    /// Seed both the accumulated and rendered angles from an existing
    /// camera rotation, so switching into fallback mode does not snap.
    pub fn seed(&mut self, rotation: Quat) {
        let (yaw, pitch, _roll) = rotation.to_euler(EulerRot::YXZ);
        self.target_yaw = normalize_degrees(yaw.to_degrees());
        self.target_pitch = normalize_degrees(pitch.to_degrees());
        self.current_yaw = self.target_yaw;
        self.current_pitch = self.target_pitch;
    }

    /// Apply a screen-space pointer delta scaled by `sensitivity`.
    ///
    /// Dragging right turns the view right; dragging up looks up.
    /// `invert_y` flips the vertical response.
    pub fn apply_delta(&mut self, delta: Vec2, sensitivity: f32, invert_y: bool) {
        let vertical = if invert_y { delta.y } else { -delta.y };
        self.target_yaw -= delta.x * sensitivity;
        self.target_pitch += vertical * sensitivity;
    }

    /// Clamp the accumulated pitch target to `[min_deg, max_deg]`.
    pub fn clamp_pitch(&mut self, min_deg: f32, max_deg: f32) {
        self.target_pitch = self.target_pitch.clamp(min_deg, max_deg);
    }

    /// Advance the rendered angles toward the accumulated targets with
    /// interpolation factor `t` and return the resulting rotation.
    pub fn converge(&mut self, t: f32) -> Quat {
        self.current_yaw = lerp_degrees(self.current_yaw, self.target_yaw, t);
        self.current_pitch =
            lerp_degrees(self.current_pitch, self.target_pitch, t);
        self.rotation()
    }

    /// The currently rendered rotation (yaw about Y, then pitch about X).
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.current_yaw.to_radians(),
            self.current_pitch.to_radians(),
            0.0,
        )
    }

    /// Rendered pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.current_pitch
    }

    /// Rendered yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.current_yaw
    }
}

impl Default for PointerLook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec2;

    use super::*;

    #[test]
    fn upward_drag_looks_up() {
        let mut look = PointerLook::new();
        // Screen y grows downward, so an upward drag is negative y
        look.apply_delta(Vec2::new(0.0, -10.0), 1.0, false);
        let _rot = look.converge(1.0);
        assert!(look.pitch() > 0.0);
    }

    #[test]
    fn invert_y_flips_pitch_response() {
        let mut look = PointerLook::new();
        look.apply_delta(Vec2::new(0.0, -10.0), 1.0, true);
        let _rot = look.converge(1.0);
        assert!(look.pitch() < 0.0);
    }

    #[test]
    fn pitch_clamp_bounds_target() {
        let mut look = PointerLook::new();
        look.apply_delta(Vec2::new(0.0, -1000.0), 1.0, false);
        look.clamp_pitch(-85.0, 85.0);
        let _rot = look.converge(1.0);
        assert_relative_eq!(look.pitch(), 85.0, epsilon = 1e-4);
    }

    #[test]
    fn seed_matches_existing_rotation() {
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            30.0_f32.to_radians(),
            -10.0_f32.to_radians(),
            0.0,
        );
        let mut look = PointerLook::new();
        look.seed(rotation);
        assert_relative_eq!(look.yaw(), 30.0, epsilon = 1e-3);
        assert_relative_eq!(look.pitch(), -10.0, epsilon = 1e-3);
    }

    #[test]
    fn converge_with_partial_factor_lags_target() {
        let mut look = PointerLook::new();
        look.apply_delta(Vec2::new(-100.0, 0.0), 1.0, false);
        let _rot = look.converge(0.5);
        assert_relative_eq!(look.yaw(), 50.0, epsilon = 1e-3);
        let _rot = look.converge(0.5);
        assert_relative_eq!(look.yaw(), 75.0, epsilon = 1e-3);
    }
}
