//! Detection of mosaic tile boundaries in video frames and still images
//!
//! Every frame is scanned line by line; lines whose pixels stop resembling the
//! next line, compared to a running baseline, are split candidates. Candidates
//! gathered over all frames are merged, filtered and turned into tile rectangles.

#![forbid(unsafe_code)]

/// Line scoring, candidate collation and tile translation
pub mod algorithm;
/// Configuration, errors, frame sources and the command line
pub mod io;
/// Streaming statistics
pub mod math;
/// Pixels and frames with shared storage
pub mod spatial;

pub use algorithm::{MosaicDecomposer, SplitDimensions};
pub use io::configuration::ConfigParams;
pub use io::error::{DecomposeError, Result};
pub use io::source::FrameSource;
pub use spatial::{Frame, Pixel};
