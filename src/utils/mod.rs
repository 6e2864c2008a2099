//! Utility functions shared across the crate

pub mod logging;
pub mod math;

pub use math::{mean, round_half_up};
