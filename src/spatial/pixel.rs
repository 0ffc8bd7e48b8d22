//! RGB pixel value with tolerance-based comparison

/// Single 8-bit RGB color sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Pixel {
    /// Create a pixel from its three channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Check whether two pixels match within a color tolerance
    ///
    /// The deviation is the sum of absolute per-channel differences, so it ranges
    /// from 0 to 765. Pixels match when the deviation does not exceed `tolerance`.
    pub const fn coarse_compare(&self, other: &Self, tolerance: u16) -> bool {
        self.color_deviation(other) <= tolerance
    }

    /// Sum of absolute per-channel differences
    pub const fn color_deviation(&self, other: &Self) -> u16 {
        self.red.abs_diff(other.red) as u16
            + self.green.abs_diff(other.green) as u16
            + self.blue.abs_diff(other.blue) as u16
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(channels: [u8; 3]) -> Self {
        let [red, green, blue] = channels;
        Self { red, green, blue }
    }
}

impl From<image::Rgb<u8>> for Pixel {
    fn from(rgb: image::Rgb<u8>) -> Self {
        Self::from(rgb.0)
    }
}
