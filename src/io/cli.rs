//! Command-line interface for decomposing a video or image into mosaic tiles

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::algorithm::decomposer::MosaicDecomposer;
use crate::algorithm::translation::SplitDimensions;
use crate::io::configuration::{
    ConfigParams, DEFAULT_FRAMES_TO_ANALYZE, DEFAULT_MINIMUM_COLOR_MATCH_DIFF,
    DEFAULT_MINIMUM_LINE_MATCH_RATIO, DEFAULT_MINIMUM_PIXEL_MATCH_RATIO, DEFAULT_SKIP_BACK_LINES,
    DEFAULT_SKIP_FRONT_LINES,
};
use crate::io::error::{DecomposeError, Result};
use crate::io::progress::ProgressSource;
use crate::io::source::{AcquisitionMode, open_source};
use crate::spatial::frame::Dimension;

#[derive(Parser, Debug)]
#[command(name = "mosaic_decomposer")]
#[command(
    author,
    version,
    about = "Detect the tiles of a mosaic video or image"
)]
/// Command-line arguments for the mosaic decomposition tool
pub struct Cli {
    /// Video (animated GIF or directory of frames) or image to analyze
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// How frames are acquired from PATH
    #[arg(short, long, value_enum, default_value_t = AcquisitionMode::Video)]
    pub mode: AcquisitionMode,

    /// Number of frames to analyze, 0 analyzes all frames
    #[arg(short, long, default_value_t = DEFAULT_FRAMES_TO_ANALYZE)]
    pub frames: u32,

    /// Lines skipped at the front of each frame
    #[arg(long, default_value_t = DEFAULT_SKIP_FRONT_LINES)]
    pub skip_front: Dimension,

    /// Lines skipped at the back of each frame
    #[arg(long, default_value_t = DEFAULT_SKIP_BACK_LINES)]
    pub skip_back: Dimension,

    /// Divisor of the running match rate below which a line is a split candidate
    #[arg(long, default_value_t = DEFAULT_MINIMUM_PIXEL_MATCH_RATIO)]
    pub pixel_match_ratio: f64,

    /// Color deviation (0-765) up to which neighbouring pixels match
    #[arg(long, default_value_t = DEFAULT_MINIMUM_COLOR_MATCH_DIFF)]
    pub color_match_diff: u16,

    /// Divisor of the average candidate count below which a split is dropped
    #[arg(long, default_value_t = DEFAULT_MINIMUM_LINE_MATCH_RATIO)]
    pub line_match_ratio: f64,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Log specification, for example `debug` or `mosaic_decomposer=trace`
    #[arg(long, value_name = "SPEC")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Map the command-line flags onto decomposition parameters
    pub const fn config_params(&self) -> ConfigParams {
        ConfigParams {
            frames_to_analyze: self.frames,
            skip_front_lines: self.skip_front,
            skip_back_lines: self.skip_back,
            minimum_pixel_match_ratio: self.pixel_match_ratio,
            minimum_color_match_diff: self.color_match_diff,
            minimum_line_match_ratio: self.line_match_ratio,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Decompose the input selected on the command line
///
/// # Errors
///
/// Returns an error if the source cannot be read or the decomposition fails
pub fn run(cli: &Cli) -> Result<Vec<SplitDimensions>> {
    let params = cli.config_params();
    let source = open_source(cli.mode, &cli.path);

    let source = if cli.should_show_progress() {
        ProgressSource::new(source, params.frames_to_analyze)
    } else {
        ProgressSource::hidden(source)
    };

    MosaicDecomposer::with_params(source, params).calculate_mosaics_dimensions()
}

/// Write one line per tile in the form `(x; y), widthxheight`
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_tiles(out: &mut impl Write, tiles: &[SplitDimensions]) -> Result<()> {
    for tile in tiles {
        writeln!(out, "{tile}").map_err(|e| DecomposeError::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write tiles",
            source: e,
        })?;
    }

    Ok(())
}
