use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Weapon", inline)]
#[serde(default)]
/// Hitscan weapon parameters.
pub struct WeaponOptions {
    /// Maximum hit distance in world units.
    #[schemars(title = "Range", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub range: f32,
    /// Minimum seconds between shots.
    #[schemars(title = "Fire Rate", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub fire_rate: f32,
    /// Seconds the laser line stays visible after a shot.
    #[schemars(skip)]
    pub laser_duration: f32,
    /// Points awarded per destroyed target.
    #[schemars(skip)]
    pub score_per_hit: u32,
}

impl Default for WeaponOptions {
    fn default() -> Self {
        Self {
            range: 50.0,
            fire_rate: 0.5,
            laser_duration: 0.05,
            score_per_hit: 1,
        }
    }
}
