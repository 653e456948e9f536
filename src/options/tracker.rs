use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tracker::AxisConvention;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tracker", inline)]
#[serde(default)]
/// Orientation tracker parameters.
pub struct TrackerOptions {
    /// Smoothing constant in `[0, 1]`; higher converges more slowly,
    /// zero snaps to the target with no lag.
    #[schemars(title = "Smoothing", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub smoothing: f32,
    /// Scales the relative rotation before smoothing.
    #[schemars(title = "Sensitivity", range(min = 0.1, max = 4.0), extend("step" = 0.1))]
    pub sensitivity: f32,
    /// Whether to clamp the pitch component of the output.
    #[schemars(title = "Clamp Pitch")]
    pub clamp_pitch: bool,
    /// Lower pitch bound in degrees (negative looks down).
    #[schemars(title = "Min Pitch", range(min = -89.0, max = 0.0), extend("step" = 1.0))]
    pub min_pitch: f32,
    /// Upper pitch bound in degrees.
    #[schemars(title = "Max Pitch", range(min = 0.0, max = 89.0), extend("step" = 1.0))]
    pub max_pitch: f32,
    /// Use the rotation sensor when the platform reports one; otherwise
    /// (or when false) the tracker runs in pointer mode.
    #[schemars(title = "Use Sensor")]
    pub use_sensor_if_available: bool,
    /// Axis-correction convention for raw samples.
    #[schemars(skip)]
    pub convention: AxisConvention,
    /// Seconds to let the sensor settle after initialization before the
    /// baseline is re-captured once. Zero disables settling.
    #[schemars(skip)]
    pub calibration_settle: f32,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            smoothing: 0.85,
            sensitivity: 1.0,
            clamp_pitch: true,
            min_pitch: -85.0,
            max_pitch: 85.0,
            use_sensor_if_available: true,
            convention: AxisConvention::default(),
            calibration_settle: 0.0,
        }
    }
}
