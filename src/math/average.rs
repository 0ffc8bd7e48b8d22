//! Running mean that keeps no sample history

/// Arithmetic mean accumulated one sample at a time
///
/// The mean is rescaled by the previous count on every update instead of
/// keeping a running sum, so the stored value stays in the range of the samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningAverage {
    average: f64,
    samples: u64,
}

impl RunningAverage {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            average: 0.0,
            samples: 0,
        }
    }

    /// Fold a new sample into the mean
    pub fn add_sample(&mut self, sample: f64) {
        let previous_sum = self.average * self.samples as f64;
        self.samples += 1;
        self.average = (previous_sum + sample) / self.samples as f64;
    }

    /// Mean of every sample seen so far, zero when empty
    pub const fn total_average(&self) -> f64 {
        self.average
    }

    /// Number of samples seen so far
    pub const fn sample_count(&self) -> u64 {
        self.samples
    }
}
