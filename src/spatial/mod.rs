//! Pixel and frame storage
//!
//! This module contains the image-side data structures:
//! - RGB pixels with coarse color comparison
//! - Frames with shared storage and logical rotation

/// Shared pixel grid with rotation-aware accessors
pub mod frame;
/// RGB pixel value and color deviation
pub mod pixel;

pub use frame::{Dimension, Frame, Rotation};
pub use pixel::Pixel;
