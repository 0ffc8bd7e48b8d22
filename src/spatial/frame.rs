//! Pixel grid with copy-on-write sharing and logical rotation
//!
//! Frames share their pixel storage through a reference-counted handle. Cloning or
//! rotating a frame never copies pixels; the first write on a frame whose storage
//! is still shared detaches it into a private buffer.

use std::sync::Arc;

use ndarray::Array2;

use crate::io::error::{DecomposeError, Result};
use crate::spatial::pixel::Pixel;

/// Frame extent type, both logical and physical extents fit in it
pub type Dimension = u16;

/// Coordinate mapping applied between logical and buffer coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rotation {
    /// Logical coordinates equal buffer coordinates
    #[default]
    None,
    /// Logical view rotated by 90 degrees over the buffer
    Rotated90,
}

/// Two-dimensional grid of pixels addressed by `(x, y)`
///
/// Storage is indexed `[column, row]`, so the buffer holds `width` columns of
/// `height` pixels each.
#[derive(Debug, Clone)]
pub struct Frame {
    pixels: Arc<Array2<Pixel>>,
    rotation: Rotation,
}

impl Frame {
    /// Create an exclusively owned frame filled with default pixels
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self {
            pixels: Arc::new(Array2::default((width as usize, height as usize))),
            rotation: Rotation::None,
        }
    }

    /// Create a view of the same storage rotated by 90 degrees
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedRotation` if this frame is already rotated
    pub fn rotate90(&self) -> Result<Self> {
        if self.rotation != Rotation::None {
            return Err(DecomposeError::UnsupportedRotation);
        }

        Ok(Self {
            pixels: Arc::clone(&self.pixels),
            rotation: Rotation::Rotated90,
        })
    }

    /// Read the pixel at logical coordinates
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinates fall outside the frame
    pub fn get(&self, x: Dimension, y: Dimension) -> Result<Pixel> {
        let index = self.buffer_index(x, y)?;
        self.pixels
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Write the pixel at logical coordinates, detaching shared storage first
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinates fall outside the frame
    pub fn set(&mut self, x: Dimension, y: Dimension, pixel: Pixel) -> Result<()> {
        let index = self.buffer_index(x, y)?;
        let error = self.out_of_bounds(x, y);

        let slot = Arc::make_mut(&mut self.pixels)
            .get_mut(index)
            .ok_or(error)?;
        *slot = pixel;

        Ok(())
    }

    /// Logical width, swapped with the buffer height when rotated
    pub fn width(&self) -> Dimension {
        match self.rotation {
            Rotation::None => self.actual_width(),
            Rotation::Rotated90 => self.actual_height(),
        }
    }

    /// Logical height, swapped with the buffer width when rotated
    pub fn height(&self) -> Dimension {
        match self.rotation {
            Rotation::None => self.actual_height(),
            Rotation::Rotated90 => self.actual_width(),
        }
    }

    /// Current rotation of this view
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Check whether another frame instance still references this storage
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.pixels) > 1
    }

    fn actual_width(&self) -> Dimension {
        self.pixels.dim().0 as Dimension
    }

    fn actual_height(&self) -> Dimension {
        self.pixels.dim().1 as Dimension
    }

    // Rotated90 maps logical (x, y) to buffer (y, H - x - 1)
    fn buffer_index(&self, x: Dimension, y: Dimension) -> Result<(usize, usize)> {
        let (bx, by) = match self.rotation {
            Rotation::None => (x, y),
            Rotation::Rotated90 => {
                let by = self
                    .actual_height()
                    .checked_sub(x)
                    .and_then(|remaining| remaining.checked_sub(1))
                    .ok_or_else(|| self.out_of_bounds(x, y))?;
                (y, by)
            }
        };

        if bx >= self.actual_width() || by >= self.actual_height() {
            return Err(self.out_of_bounds(x, y));
        }

        Ok((bx as usize, by as usize))
    }

    fn out_of_bounds(&self, x: Dimension, y: Dimension) -> DecomposeError {
        DecomposeError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }
}
