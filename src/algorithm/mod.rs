//! Mosaic decomposition algorithm
//!
//! Components:
//! - Line scoring against a running match rate baseline
//! - Collation of adjacent candidates and false positive filtering
//! - Translation of split positions into tile rectangles
//! - The decomposer driving a run over a frame source

pub mod collation;
pub mod decomposer;
pub mod scoring;
pub mod translation;

pub use decomposer::MosaicDecomposer;
pub use translation::SplitDimensions;
