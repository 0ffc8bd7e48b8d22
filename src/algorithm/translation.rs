//! Conversion of split positions into tile rectangles

use std::fmt;

use log::error;

use crate::io::error::{Axis, DecomposeError, Result};
use crate::spatial::frame::Dimension;

/// Rectangle of one detected tile in un-rotated frame coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitDimensions {
    /// Left edge
    pub x: Dimension,
    /// Top edge
    pub y: Dimension,
    /// Extent along x
    pub width: Dimension,
    /// Extent along y
    pub height: Dimension,
}

impl fmt::Display for SplitDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}; {}), {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Surround detected splits with the frame's outer edges
///
/// The leading 0 and trailing `extent` are always tile boundaries.
pub fn insert_boundaries(mut positions: Vec<Dimension>, extent: Dimension) -> Vec<Dimension> {
    positions.insert(0, 0);
    positions.push(extent);
    positions
}

/// Cross-join adjacent position pairs into tiles in row-major order
///
/// Emits `(horizontal.len() - 1) * (vertical.len() - 1)` rectangles, iterating
/// horizontal pairs in the outer loop.
///
/// # Errors
///
/// Returns `NonMonotonicPositions` if either list is not strictly ascending
pub fn translate(
    horizontal_positions: &[Dimension],
    vertical_positions: &[Dimension],
) -> Result<Vec<SplitDimensions>> {
    ensure_ascending(Axis::Horizontal, horizontal_positions)?;
    ensure_ascending(Axis::Vertical, vertical_positions)?;

    let mut splits = Vec::with_capacity(
        horizontal_positions.len().saturating_sub(1) * vertical_positions.len().saturating_sub(1),
    );

    for rows in horizontal_positions.windows(2) {
        let &[top, bottom] = rows else { continue };
        for columns in vertical_positions.windows(2) {
            let &[left, right] = columns else { continue };

            splits.push(SplitDimensions {
                x: left,
                y: top,
                width: right - left,
                height: bottom - top,
            });
        }
    }

    Ok(splits)
}

fn ensure_ascending(axis: Axis, positions: &[Dimension]) -> Result<()> {
    for pair in positions.windows(2) {
        if let [previous, next] = *pair {
            if previous >= next {
                error!("{axis} positions were supplied not in an ascending order");
                return Err(DecomposeError::NonMonotonicPositions {
                    axis,
                    previous,
                    next,
                });
            }
        }
    }

    Ok(())
}
