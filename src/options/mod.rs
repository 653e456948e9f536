//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (tracker, pointer fallback, weapon, enemy,
//! player) are consolidated here. Options serialize to/from TOML for
//! presets; partial files work because every section uses
//! `#[serde(default)]`.

mod enemy;
mod player;
mod pointer;
mod tracker;
mod weapon;

use std::path::Path;

pub use enemy::EnemyOptions;
pub use player::PlayerOptions;
pub use pointer::PointerOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use tracker::TrackerOptions;
pub use weapon::WeaponOptions;

use crate::error::GyrolookError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[tracker]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orientation tracker parameters.
    pub tracker: TrackerOptions,
    /// Pointer/touch fallback parameters.
    pub pointer: PointerOptions,
    /// Hitscan weapon parameters.
    pub weapon: WeaponOptions,
    /// Enemy pursuit parameters.
    pub enemy: EnemyOptions,
    /// Player movement/health/win parameters.
    pub player: PlayerOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GyrolookError> {
        let content = std::fs::read_to_string(path).map_err(GyrolookError::Io)?;
        toml::from_str(&content)
            .map_err(|e| GyrolookError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GyrolookError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GyrolookError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GyrolookError::Io)?;
        }
        std::fs::write(path, content).map_err(GyrolookError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
