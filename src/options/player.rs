use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Player", inline)]
#[serde(default)]
/// Player movement, health, and win-condition parameters.
pub struct PlayerOptions {
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub move_speed: f32,
    /// Maximum (and starting) health.
    #[schemars(title = "Max Health", range(min = 1, max = 1000), extend("step" = 10))]
    pub max_health: i32,
    /// Score threshold that ends the session as a win.
    #[schemars(title = "Win Score", range(min = 1, max = 100), extend("step" = 1))]
    pub win_score: u32,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            max_health: 100,
            win_score: 10,
        }
    }
}
