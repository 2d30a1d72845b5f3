//! Core type definitions for placeholder encoding.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Largest width or height a PNG header may carry (2^31 - 1).
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Validated image dimensions.
///
/// Both sides are positive and within [`MAX_DIMENSION`], and the raw
/// scanline buffer for the widest color type fits in memory addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Validate and create dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(Error::invalid_dimension(width, height, "width must be positive"));
        }
        if height == 0 {
            return Err(Error::invalid_dimension(width, height, "height must be positive"));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Error::invalid_dimension(
                width,
                height,
                "dimension exceeds 2^31 - 1",
            ));
        }

        let dims = Dimensions { width, height };
        if dims.raw_len(ColorType::Rgba).is_none() {
            return Err(Error::invalid_dimension(
                width,
                height,
                "pixel buffer size overflows",
            ));
        }
        Ok(dims)
    }

    /// Image width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }

    /// Bytes per scanline including the leading filter byte.
    pub fn stride(self, color: ColorType) -> Option<usize> {
        (self.width as usize)
            .checked_mul(color.channels())?
            .checked_add(1)
    }

    /// Total raw scanline bytes for the given color type.
    pub fn raw_len(self, color: ColorType) -> Option<usize> {
        self.stride(color)?.checked_mul(self.height as usize)
    }
}

/// Pixel layout written into the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorType {
    /// Truecolor, 3 samples per pixel.
    #[default]
    Rgb,
    /// Truecolor with alpha, 4 samples per pixel.
    Rgba,
}

impl ColorType {
    /// Samples per pixel.
    pub fn channels(self) -> usize {
        match self {
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
        }
    }

    /// Numeric color type code stored in the header.
    pub fn code(self) -> u8 {
        match self {
            ColorType::Rgb => 2,
            ColorType::Rgba => 6,
        }
    }

    /// Get color type name as string.
    pub fn name(self) -> &'static str {
        match self {
            ColorType::Rgb => "rgb",
            ColorType::Rgba => "rgba",
        }
    }
}

/// Compression level presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressionLevel {
    /// Stored blocks only.
    None,

    /// Optimized for speed over ratio (level 1).
    Fast,

    /// Balanced speed and ratio (level 6, default).
    #[default]
    Default,

    /// Optimized for ratio over speed (level 9).
    Best,

    /// Explicit zlib level.
    Custom(i32),
}

impl CompressionLevel {
    /// Lowest zlib level.
    pub const MIN: i32 = 0;

    /// Highest zlib level.
    pub const MAX: i32 = 9;

    /// Convert to numeric zlib level.
    pub fn to_level(self) -> i32 {
        match self {
            CompressionLevel::None => 0,
            CompressionLevel::Fast => 1,
            CompressionLevel::Default => 6,
            CompressionLevel::Best => 9,
            CompressionLevel::Custom(level) => level,
        }
    }

    /// Create from numeric level.
    pub fn from_level(level: i32) -> Self {
        match level {
            0 => CompressionLevel::None,
            1 => CompressionLevel::Fast,
            6 => CompressionLevel::Default,
            9 => CompressionLevel::Best,
            _ => CompressionLevel::Custom(level),
        }
    }

    /// Check the level is one zlib accepts.
    pub fn validate(self) -> Result<u32> {
        let level = self.to_level();
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(level as u32)
        } else {
            Err(Error::InvalidLevel {
                level,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }
}
