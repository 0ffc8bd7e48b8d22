//! Error types for frame access, acquisition and decomposition runs

use std::fmt;
use std::path::PathBuf;

use crate::spatial::frame::Dimension;

/// Orientation of a split line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Rows of the frame, splits run left to right
    Horizontal,
    /// Columns of the frame, splits run top to bottom
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Main error type for all decomposition operations
#[derive(Debug)]
pub enum DecomposeError {
    /// Frame source could not deliver frames
    SourceNotReady,

    /// A frame's extents disagree with the first frame of the run
    DimensionMismatch {
        /// Zero-based index of the offending frame
        frame_index: u32,
        /// Extents of the first frame (width, height)
        expected: (Dimension, Dimension),
        /// Extents of the offending frame (width, height)
        found: (Dimension, Dimension),
    },

    /// Rotation requested on a frame that is already rotated
    UnsupportedRotation,

    /// Pixel coordinates outside the frame
    OutOfBounds {
        /// Requested logical column
        x: Dimension,
        /// Requested logical row
        y: Dimension,
        /// Logical frame width
        width: Dimension,
        /// Logical frame height
        height: Dimension,
    },

    /// Split positions handed to translation are not strictly ascending
    NonMonotonicPositions {
        /// Axis of the offending position list
        axis: Axis,
        /// Position preceding the violation
        previous: Dimension,
        /// Position that failed to exceed its predecessor
        next: Dimension,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to decode an image or animation
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Decoded input cannot be represented as a frame
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotReady => write!(f, "Frame source is not ready"),
            Self::DimensionMismatch {
                frame_index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Frame {frame_index} is {}x{}, expected {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::UnsupportedRotation => {
                write!(f, "Consecutive rotations of a frame are not supported")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Pixel ({x}; {y}) is out of bounds for a {width}x{height} frame"
                )
            }
            Self::NonMonotonicPositions {
                axis,
                previous,
                next,
            } => {
                write!(
                    f,
                    "{axis} positions are not ascending: {next} follows {previous}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for DecomposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for decomposition results
pub type Result<T> = std::result::Result<T, DecomposeError>;

impl From<image::ImageError> for DecomposeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for DecomposeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DecomposeError {
    DecomposeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
