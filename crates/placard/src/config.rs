//! Encoder configuration.

use serde::Deserialize;
use std::path::Path;

use placard_core::{ColorType, CompressionLevel, Dimensions, Error, Result};

/// Encoder configuration
///
/// Every default reproduces the canonical placeholder: 1920x1080 RGB,
/// zlib level 6, with the `tEXt` traceability chunk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncoderConfig {
    /// Default width when the caller does not give one
    #[serde(default = "default_width")]
    pub width: u32,

    /// Default height when the caller does not give one
    #[serde(default = "default_height")]
    pub height: u32,

    /// zlib level, 0-9
    #[serde(default = "default_compression_level")]
    pub compression_level: i32,

    /// Pixel layout
    #[serde(default)]
    pub color_type: ColorType,

    /// Emit the `tEXt` chunk with page/image numbers
    #[serde(default = "default_embed_metadata")]
    pub embed_metadata: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            compression_level: default_compression_level(),
            color_type: ColorType::default(),
            embed_metadata: default_embed_metadata(),
        }
    }
}

impl EncoderConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EncoderConfig =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Compression level as the core enum.
    pub fn level(&self) -> CompressionLevel {
        CompressionLevel::from_level(self.compression_level)
    }

    /// Default dimensions, validated.
    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::new(self.width, self.height)
    }

    /// Check every field is usable.
    pub fn validate(&self) -> Result<()> {
        self.dimensions()?;
        self.level().validate()?;
        Ok(())
    }
}

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

fn default_compression_level() -> i32 {
    6
}

fn default_embed_metadata() -> bool {
    true
}
