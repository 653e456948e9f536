use glam::Quat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// +90 degrees about X as a unit quaternion: (sin 45, 0, 0, cos 45).
const FRAME_ROTATION_X90: Quat =
    Quat::from_xyzw(std::f32::consts::FRAC_1_SQRT_2, 0.0, 0.0, std::f32::consts::FRAC_1_SQRT_2);

/// Fixed axis-correction mapping from a sensor's native quaternion
/// convention into render space (right-handed, +Y up, -Z forward).
///
/// Selected once in the options and applied to every raw sample and to
/// the calibration baseline; the tracker never re-derives it per frame.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum AxisConvention {
    /// Samples already arrive in render space; no correction applied.
    /// Useful for replay feeds and tests.
    RenderSpace,
    /// Mobile attitude convention: negate z and w to flip handedness,
    /// then rotate the resulting frame +90 degrees about X so the
    /// device's screen-up maps to the camera's forward.
    #[default]
    MobileAttitude,
}

impl AxisConvention {
    /// Map a raw sensor quaternion into render space.
    #[must_use]
    pub fn correct(self, raw: Quat) -> Quat {
        match self {
            Self::RenderSpace => raw,
            Self::MobileAttitude => {
                Quat::from_xyzw(raw.x, raw.y, -raw.z, -raw.w)
            }
        }
    }

    /// Constant frame rotation applied to the relative rotation after
    /// baseline subtraction (the "mount" correction).
    #[must_use]
    pub fn frame_rotation(self) -> Quat {
        match self {
            Self::RenderSpace => Quat::IDENTITY,
            Self::MobileAttitude => FRAME_ROTATION_X90,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn render_space_is_identity_passthrough() {
        let q = Quat::from_rotation_y(0.7);
        assert_eq!(AxisConvention::RenderSpace.correct(q), q);
        assert_eq!(AxisConvention::RenderSpace.frame_rotation(), Quat::IDENTITY);
    }

    #[test]
    fn mobile_attitude_negates_z_and_w() {
        let q = Quat::from_xyzw(0.1, 0.2, 0.3, 0.927);
        let corrected = AxisConvention::MobileAttitude.correct(q);
        assert_eq!(corrected.x, 0.1);
        assert_eq!(corrected.y, 0.2);
        assert_eq!(corrected.z, -0.3);
        assert_eq!(corrected.w, -0.927);
    }

    #[test]
    fn correction_preserves_unit_length() {
        let q = Quat::from_euler(glam::EulerRot::YXZ, 0.4, -0.2, 0.1);
        let corrected = AxisConvention::MobileAttitude.correct(q);
        assert_relative_eq!(corrected.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn frame_rotation_is_quarter_turn_about_x() {
        let frame = AxisConvention::MobileAttitude.frame_rotation();
        let expected = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(frame.angle_between(expected), 0.0, epsilon = 1e-6);
    }
}
