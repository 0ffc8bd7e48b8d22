//! Tests for the incrementally updated running average

#[cfg(test)]
mod tests {
    use mosaic_decomposer::math::RunningAverage;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Tests empty accumulator state
    #[test]
    fn test_empty_average() {
        let average = RunningAverage::new();

        assert_eq!(average.sample_count(), 0);
        assert!(average.total_average().abs() < f64::EPSILON);
        assert_eq!(average, RunningAverage::default());
    }

    // Tests mean tracks the arithmetic mean with interleaved count queries
    // Verified by dividing by the previous count
    #[test]
    fn test_matches_arithmetic_mean() {
        let samples = [100.0, 50.0, 75.0, 0.0, 25.0];
        let mut average = RunningAverage::new();
        let mut sum = 0.0;

        for (index, &sample) in samples.iter().enumerate() {
            average.add_sample(sample);
            sum += sample;

            assert_eq!(average.sample_count(), index as u64 + 1);
            let expected = sum / (index + 1) as f64;
            assert!(
                (average.total_average() - expected).abs() < 1e-12,
                "after {} samples expected {expected}, got {}",
                index + 1,
                average.total_average()
            );
        }
    }

    // Tests drift stays bounded over many random samples
    // Verified by accumulating in f32
    #[test]
    fn test_long_run_stays_accurate() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut average = RunningAverage::new();
        let mut sum = 0.0;
        let count: u32 = 100_000;

        for _ in 0..count {
            let sample: f64 = rng.random_range(0.0..=100.0);
            average.add_sample(sample);
            sum += sample;
        }

        let expected = sum / f64::from(count);
        assert_eq!(average.sample_count(), u64::from(count));
        assert!(
            (average.total_average() - expected).abs() < 1e-6,
            "expected {expected}, got {}",
            average.total_average()
        );
    }

    // Tests constant input keeps the mean exact
    #[test]
    fn test_constant_samples() {
        let mut average = RunningAverage::new();
        for _ in 0..1000 {
            average.add_sample(42.5);
        }

        assert!((average.total_average() - 42.5).abs() < 1e-9);
    }
}
