//! Logging utilities
//!
//! This module provides logger setup for binaries and tests plus standardized
//! messages for scoring operations.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{init_logging, log_assessment_complete, log_fallback};
