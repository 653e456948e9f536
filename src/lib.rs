// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]

//! Device-orientation look controller for first-person cameras.
//!
//! Gyrolook converts raw device attitude samples (unit quaternions from a
//! rotation sensor) into a stable, axis-corrected, optionally
//! pitch-clamped camera rotation, with a pointer/touch fallback when no
//! sensor is present. The host application owns the frame loop and feeds
//! the tracker one sample per rendered frame; the tracker holds no timing
//! or scheduling logic of its own.
//!
//! # Key entry points
//!
//! - [`tracker::OrientationTracker`] - the core sensor-to-camera tracker
//! - [`input::AttitudeSource`] - the seam between platform sensors and
//!   the tracker
//! - [`options::Options`] - runtime configuration (tracker, pointer,
//!   gameplay tunables) with TOML preset support
//! - [`gameplay`] - engine-free health/score/weapon/pursuit helpers that
//!   consume the tracked orientation
//!
//! # Architecture
//!
//! Everything is single-threaded and frame-synchronous. The only temporal
//! construct is [`util::timer::CountdownTimer`], a one-shot countdown
//! checked once per tick (calibration settling, weapon laser visibility).
//! Cross-component wiring is explicit: the weapon scores through an
//! injected [`gameplay::ScoreBoard`], pursuit damage lands on an injected
//! [`gameplay::Health`]. There are no global lookups.

pub mod error;
pub mod gameplay;
pub mod input;
pub mod options;
pub mod tracker;
pub mod util;
