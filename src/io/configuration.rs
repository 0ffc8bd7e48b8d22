//! Detection parameters and their defaults

use log::info;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::frame::Dimension;

// Defaults for configurable parameters
/// Analyze every frame the source delivers
pub const DEFAULT_FRAMES_TO_ANALYZE: u32 = 0;
/// Lines skipped at the front of each frame
pub const DEFAULT_SKIP_FRONT_LINES: Dimension = 5;
/// Lines skipped at the back of each frame
pub const DEFAULT_SKIP_BACK_LINES: Dimension = 5;
/// Divisor applied to the running line match average
pub const DEFAULT_MINIMUM_PIXEL_MATCH_RATIO: f64 = 1.4;
/// Color deviation under which two pixels still match
pub const DEFAULT_MINIMUM_COLOR_MATCH_DIFF: u16 = 100;
/// Divisor applied to the average split occurrence count
pub const DEFAULT_MINIMUM_LINE_MATCH_RATIO: f64 = 1.5;

// Algorithm constants
/// Samples the running average needs before lines can be marked as splits
pub const MINIMUM_AMOUNT_OF_SAMPLES: u64 = 10;
/// Largest possible color deviation between two RGB pixels
pub const MAX_COLOR_DEVIATION: u16 = 3 * u8::MAX as u16;

/// Parameters of a single decomposition run
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigParams {
    /// Number of frames to analyze, 0 analyzes every frame
    pub frames_to_analyze: u32,
    /// Lines excluded from scoring at the front of the frame
    pub skip_front_lines: Dimension,
    /// Lines excluded from scoring at the back of the frame
    pub skip_back_lines: Dimension,
    /// Lines matching worse than `average / ratio` become split candidates
    ///
    /// With a ratio of 1.5 and a running match rate of 80%, lines matching
    /// below 53.3% are marked.
    pub minimum_pixel_match_ratio: f64,
    /// Color deviation up to which a pixel matches its neighbour
    ///
    /// rgb(255, 255, 255) and rgb(250, 250, 255) deviate by 10.
    pub minimum_color_match_diff: u16,
    /// Candidates occurring less than `average / ratio` times are dropped
    pub minimum_line_match_ratio: f64,
}

impl Default for ConfigParams {
    fn default() -> Self {
        Self {
            frames_to_analyze: DEFAULT_FRAMES_TO_ANALYZE,
            skip_front_lines: DEFAULT_SKIP_FRONT_LINES,
            skip_back_lines: DEFAULT_SKIP_BACK_LINES,
            minimum_pixel_match_ratio: DEFAULT_MINIMUM_PIXEL_MATCH_RATIO,
            minimum_color_match_diff: DEFAULT_MINIMUM_COLOR_MATCH_DIFF,
            minimum_line_match_ratio: DEFAULT_MINIMUM_LINE_MATCH_RATIO,
        }
    }
}

impl ConfigParams {
    /// Check every parameter against its accepted range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - Either ratio is not a finite number greater than 1.0
    /// - The color match difference exceeds the maximum RGB deviation
    pub fn validate(&self) -> Result<()> {
        validate_ratio("minimum_pixel_match_ratio", self.minimum_pixel_match_ratio)?;
        validate_ratio("minimum_line_match_ratio", self.minimum_line_match_ratio)?;

        if self.minimum_color_match_diff > MAX_COLOR_DEVIATION {
            return Err(invalid_parameter(
                "minimum_color_match_diff",
                &self.minimum_color_match_diff,
                &format!("must not exceed {MAX_COLOR_DEVIATION}"),
            ));
        }

        Ok(())
    }

    /// Write every parameter to the log
    pub fn log(&self) {
        info!("starting printing configuration parameters");
        info!("{:<20} = {}", "frames_to_analyze", self.frames_to_analyze);
        info!("{:<20} = {}", "skip_front_lines", self.skip_front_lines);
        info!("{:<20} = {}", "skip_back_lines", self.skip_back_lines);
        info!("{:<20} = {}", "pixel_match_ratio", self.minimum_pixel_match_ratio);
        info!("{:<20} = {}", "color_match_diff", self.minimum_color_match_diff);
        info!("{:<20} = {}", "line_match_ratio", self.minimum_line_match_ratio);
        info!("finished printing configuration parameters");
    }
}

fn validate_ratio(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 1.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a finite number greater than 1.0",
        ))
    }
}
