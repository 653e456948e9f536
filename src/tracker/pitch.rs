//! Pitch clamping via Euler round-trip.
//!
//! Clamping a quaternion's pitch is done by decomposing into yaw/pitch/
//! roll (YXZ order), clamping the pitch axis, and rebuilding. Near gimbal
//! lock (pitch approaching +/-90 degrees) the decomposition can place
//! discontinuous values in yaw and roll, so the rebuilt quaternion may
//! pick up small yaw/roll coupling. This is an accepted approximation
//! carried over from the behavior being modeled, not something the
//! tracker attempts to correct.

use glam::{EulerRot, Quat};

/// Clamp the pitch component of `q` to `[min_deg, max_deg]`.
///
/// Yaw and roll pass through the Euler round-trip unchanged away from the
/// poles. Returns `q` untouched when its pitch is already inside the
/// interval.
#[must_use]
pub fn clamp_pitch(q: Quat, min_deg: f32, max_deg: f32) -> Quat {
    let (yaw, pitch, roll) = q.to_euler(EulerRot::YXZ);
    let pitch_deg = pitch.to_degrees();
    if pitch_deg >= min_deg && pitch_deg <= max_deg {
        return q;
    }
    let clamped = pitch_deg.clamp(min_deg, max_deg).to_radians();
    Quat::from_euler(EulerRot::YXZ, yaw, clamped, roll)
}

/// Pitch component of `q` in degrees (positive looks up).
#[must_use]
pub fn pitch_degrees(q: Quat) -> f32 {
    let (_yaw, pitch, _roll) = q.to_euler(EulerRot::YXZ);
    pitch.to_degrees()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn inside_range_is_untouched() {
        let q = Quat::from_rotation_x(10.0_f32.to_radians());
        assert_eq!(clamp_pitch(q, -85.0, 85.0), q);
    }

    #[test]
    fn excess_pitch_lands_on_bound() {
        let q = Quat::from_rotation_x(30.0_f32.to_radians());
        let clamped = clamp_pitch(q, -20.0, 20.0);
        assert_relative_eq!(pitch_degrees(clamped), 20.0, epsilon = 1e-4);
    }

    #[test]
    fn negative_excess_lands_on_lower_bound() {
        let q = Quat::from_rotation_x(-60.0_f32.to_radians());
        let clamped = clamp_pitch(q, -45.0, 45.0);
        assert_relative_eq!(pitch_degrees(clamped), -45.0, epsilon = 1e-4);
    }

    #[test]
    fn yaw_survives_the_round_trip() {
        let q = Quat::from_euler(
            EulerRot::YXZ,
            40.0_f32.to_radians(),
            50.0_f32.to_radians(),
            0.0,
        );
        let clamped = clamp_pitch(q, -30.0, 30.0);
        let (yaw, pitch, roll) = clamped.to_euler(EulerRot::YXZ);
        assert_relative_eq!(yaw.to_degrees(), 40.0, epsilon = 1e-3);
        assert_relative_eq!(pitch.to_degrees(), 30.0, epsilon = 1e-4);
        assert_relative_eq!(roll.to_degrees(), 0.0, epsilon = 1e-3);
    }
}
