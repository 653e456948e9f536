//! Shared utilities for the look controller.
//!
//! Helpers for angle normalization, one-shot countdown timers, and frame
//! timing for hosts that want a ready-made clock.

pub mod angles;
pub mod frame_timing;
pub mod timer;
