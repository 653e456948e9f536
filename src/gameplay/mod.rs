//! Engine-free gameplay helpers built around the tracked orientation.
//!
//! Health, scoring, the hitscan weapon, enemy pursuit, and camera-
//! relative movement as plain math plus explicit wiring: the weapon
//! scores through an injected [`ScoreBoard`], pursuit damage lands on an
//! injected [`Health`]. Outcomes come back as returned events; nothing
//! here touches UI, audio, or scene state.

mod chase;
mod health;
mod movement;
mod score;
mod weapon;

pub use chase::{ChasePursuit, PursuitStep};
pub use health::{Health, HealthEvent};
pub use movement::camera_relative_step;
pub use score::{ScoreBoard, ScoreEvent};
pub use weapon::{FireOutcome, HitscanWeapon, Target};
