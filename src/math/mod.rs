//! Numerical helpers for streaming statistics

/// Incrementally updated arithmetic mean
pub mod average;

pub use average::RunningAverage;
