//! Per-line similarity scoring against a running baseline
//!
//! Each scored row is compared pixel by pixel with the row directly below it.
//! Rows whose match rate falls well under the running average of all rows seen
//! on the same axis are counted as split candidates.

use crate::io::configuration::{ConfigParams, MINIMUM_AMOUNT_OF_SAMPLES};
use crate::io::error::Result;
use crate::math::average::RunningAverage;
use crate::spatial::frame::{Dimension, Frame};

/// Split candidate counts and match rate baseline for one axis
#[derive(Debug, Clone, Default)]
pub struct AxisScores {
    occurrences: Vec<u32>,
    comparisons: RunningAverage,
}

impl AxisScores {
    /// Create empty scores
    pub const fn new() -> Self {
        Self {
            occurrences: Vec::new(),
            comparisons: RunningAverage::new(),
        }
    }

    /// Score every eligible row of the frame and update the candidate counts
    ///
    /// Rows in `[skip_front_lines, height - max(skip_back_lines, 1))` are scored.
    /// A row is marked once the baseline holds more than
    /// `MINIMUM_AMOUNT_OF_SAMPLES` samples and its match rate is below
    /// `baseline / minimum_pixel_match_ratio`. Every scored row feeds the baseline.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the frame rejects a pixel read
    pub fn process_frame(&mut self, frame: &Frame, params: &ConfigParams) -> Result<()> {
        let height = frame.height();
        self.occurrences.resize(height as usize, 0);

        if frame.width() == 0 {
            return Ok(());
        }

        let end = height.saturating_sub(params.skip_back_lines.max(1));
        for row in params.skip_front_lines..end {
            let match_rate = line_match_rate(frame, row, params.minimum_color_match_diff)?;
            let threshold =
                self.comparisons.total_average() / params.minimum_pixel_match_ratio;

            if self.comparisons.sample_count() > MINIMUM_AMOUNT_OF_SAMPLES && match_rate < threshold
            {
                if let Some(count) = self.occurrences.get_mut(row as usize) {
                    *count = count.saturating_add(1);
                }
            }

            self.comparisons.add_sample(match_rate);
        }

        Ok(())
    }

    /// Candidate count per row index
    pub fn occurrences(&self) -> &[u32] {
        &self.occurrences
    }

    /// Running match rate baseline
    pub const fn comparisons(&self) -> &RunningAverage {
        &self.comparisons
    }

    /// Consume the scores and return the candidate counts
    pub fn into_occurrences(self) -> Vec<u32> {
        self.occurrences
    }
}

/// Percentage of pixels in `row` that coarse-match the pixel below them
///
/// # Errors
///
/// Returns `OutOfBounds` if `row + 1` is not a valid row of the frame
pub fn line_match_rate(frame: &Frame, row: Dimension, tolerance: u16) -> Result<f64> {
    let width = frame.width();
    let next_row = row.saturating_add(1);
    let mut matched_pixels = 0_u32;

    for column in 0..width {
        let current = frame.get(column, row)?;
        let next = frame.get(column, next_row)?;

        if current.coarse_compare(&next, tolerance) {
            matched_pixels += 1;
        }
    }

    Ok(f64::from(matched_pixels) / f64::from(width) * 100.0)
}
