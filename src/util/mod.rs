//! Utility functions module
//!
//! Contains helper functions for clock and duration formatting.

pub mod units;

// Re-export commonly used functions
pub use units::{format_average, format_clock};
