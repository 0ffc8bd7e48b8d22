//! Orchestration of a single decomposition run over a frame sequence

use log::{error, info};

use crate::algorithm::collation::{collate_adjacent_splits, drop_false_positive_splits};
use crate::algorithm::scoring::AxisScores;
use crate::algorithm::translation::{SplitDimensions, insert_boundaries, translate};
use crate::io::configuration::ConfigParams;
use crate::io::error::{Axis, DecomposeError, Result};
use crate::io::source::FrameSource;
use crate::spatial::frame::{Dimension, Frame};

/// Detects mosaic tiles across every frame of a source
///
/// Each frame is scored as delivered for horizontal splits and through a
/// rotated view for vertical splits. Candidates from all frames are collated,
/// filtered and cross-joined into tile rectangles once the source is drained.
pub struct MosaicDecomposer<S> {
    frame_source: S,
    params: ConfigParams,
}

impl<S: FrameSource> MosaicDecomposer<S> {
    /// Create a decomposer with default parameters
    pub fn new(frame_source: S) -> Self {
        Self::with_params(frame_source, ConfigParams::default())
    }

    /// Create a decomposer with explicit parameters
    pub const fn with_params(frame_source: S, params: ConfigParams) -> Self {
        Self {
            frame_source,
            params,
        }
    }

    /// Parameters used by this decomposer
    pub const fn params(&self) -> &ConfigParams {
        &self.params
    }

    /// Release the frame source
    pub fn into_source(self) -> S {
        self.frame_source
    }

    /// Consume frames from the source and compute the tile rectangles
    ///
    /// Tiles are returned in row-major order. No partial result is ever
    /// produced: any failure discards everything gathered so far.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parameters are invalid
    /// - The frame source is not ready
    /// - The source delivers no frames
    /// - A frame's dimensions differ from the first frame
    /// - Collated split positions are not strictly ascending
    pub fn calculate_mosaics_dimensions(&mut self) -> Result<Vec<SplitDimensions>> {
        self.run().inspect_err(|err| error!("decomposition aborted: {err}"))
    }

    fn run(&mut self) -> Result<Vec<SplitDimensions>> {
        self.params.validate()?;

        if !self.frame_source.is_ready() {
            error!("frame provider is not ready");
            return Err(DecomposeError::SourceNotReady);
        }

        self.params.log();

        let mut horizontal = AxisScores::new();
        let mut vertical = AxisScores::new();
        let mut dimensions: Option<(Dimension, Dimension)> = None;
        let mut processed_frames: u32 = 0;

        info!("starting frame analysis");

        while let Some(frame) = self.frame_source.next_frame() {
            let found = (frame.width(), frame.height());
            match dimensions {
                None => dimensions = Some(found),
                Some(expected) if expected != found => {
                    error!("frames dimensions are not consistent");
                    return Err(DecomposeError::DimensionMismatch {
                        frame_index: processed_frames,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }

            self.process_frame(&frame, &mut horizontal, &mut vertical)?;

            processed_frames += 1;
            if processed_frames == self.params.frames_to_analyze {
                info!("reached requested amount of frames to analyze, stopping");
                break;
            }
        }

        info!("finished analyzing frames, total amount: {processed_frames}");

        let (width, height) = dimensions.ok_or_else(|| DecomposeError::InvalidSourceData {
            reason: "frame source delivered no frames".to_string(),
        })?;
        let horizontal_positions = self.filter_axis(Axis::Horizontal, horizontal, height);
        let vertical_positions = self.filter_axis(Axis::Vertical, vertical, width);

        translate(&horizontal_positions, &vertical_positions)
    }

    fn process_frame(
        &self,
        frame: &Frame,
        horizontal: &mut AxisScores,
        vertical: &mut AxisScores,
    ) -> Result<()> {
        horizontal.process_frame(frame, &self.params)?;

        let rotated = frame.rotate90()?;
        vertical.process_frame(&rotated, &self.params)
    }

    fn filter_axis(&self, axis: Axis, scores: AxisScores, extent: Dimension) -> Vec<Dimension> {
        info!("starting processing potential {axis} splits");

        let collated = collate_adjacent_splits(scores.into_occurrences());
        let filtered =
            drop_false_positive_splits(&collated, self.params.minimum_line_match_ratio);

        insert_boundaries(filtered, extent)
    }
}
