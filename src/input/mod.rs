//! Platform-agnostic input seam.
//!
//! The tracker never talks to a platform sensor API directly. Hosts
//! implement [`AttitudeSource`] over whatever the platform provides
//! (CoreMotion, Android sensor manager, a replay file) and feed
//! [`LookEvent`]s into the tracker once per frame.

mod event;
mod pointer;
mod source;

pub use event::LookEvent;
pub use pointer::PointerLook;
pub use source::{AttitudeSource, ScriptedSource};
