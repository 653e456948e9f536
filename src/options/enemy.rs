use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Enemy", inline)]
#[serde(default)]
/// Pursuit behavior parameters.
pub struct EnemyOptions {
    /// Chase speed in world units per second.
    #[schemars(title = "Speed", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub speed: f32,
    /// Damage dealt on contact with the player.
    #[schemars(title = "Attack Damage", range(min = 1, max = 100), extend("step" = 1))]
    pub attack_damage: i32,
    /// Distance at which the pursuer counts as touching the player.
    #[schemars(skip)]
    pub contact_radius: f32,
}

impl Default for EnemyOptions {
    fn default() -> Self {
        Self {
            speed: 5.0,
            attack_damage: 10,
            contact_radius: 1.0,
        }
    }
}
