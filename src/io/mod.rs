//! Input/output: configuration, errors, frame acquisition and the command line

/// Command-line parsing and the top-level run
pub mod cli;
/// Detection parameters and default values
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Logger installation
pub mod logging;
/// Progress reporting around frame sources
pub mod progress;
/// Frame source trait and file-backed sources
pub mod source;
