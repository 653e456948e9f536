use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pointer", inline)]
#[serde(default)]
/// Pointer/touch fallback look parameters.
pub struct PointerOptions {
    /// Degrees of rotation per pixel of pointer movement.
    #[schemars(title = "Pointer Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub sensitivity: f32,
    /// Flip the vertical look response.
    #[schemars(title = "Invert Y")]
    pub invert_y: bool,
}

impl Default for PointerOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.15,
            invert_y: false,
        }
    }
}
