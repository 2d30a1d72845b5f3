//! Zlib compressor backed by `flate2`.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use placard_core::{CompressionLevel, Compressor, Error, Result};
use tracing::trace;

/// Zlib (RFC 1950) compressor.
#[derive(Debug, Clone)]
pub struct ZlibCompressor {
    level: CompressionLevel,
}

impl ZlibCompressor {
    /// Create a new zlib compressor at the default level (6).
    pub fn new() -> Self {
        Self {
            level: CompressionLevel::Default,
        }
    }

    /// Create with compression level.
    ///
    /// The level is checked when compressing so that a bad level surfaces
    /// as an error on the call that uses it.
    pub fn with_level(level: CompressionLevel) -> Self {
        Self { level }
    }

    /// Create with a validated compression level.
    pub fn try_with_level(level: CompressionLevel) -> Result<Self> {
        level.validate()?;
        Ok(Self { level })
    }
}

impl Default for ZlibCompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for ZlibCompressor {
    fn level(&self) -> CompressionLevel {
        self.level
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let level = self.level.validate()?;

        // Placeholder scanlines are highly repetitive; start small and let the Vec grow.
        let capacity = input.len() / 4 + 64;
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(capacity), Compression::new(level));
        encoder
            .write_all(input)
            .map_err(|e| Error::compression("failed to feed zlib stream", e))?;
        let compressed = encoder
            .finish()
            .map_err(|e| Error::compression("failed to finish zlib stream", e))?;

        trace!(
            level,
            input = input.len(),
            output = compressed.len(),
            "zlib compressed"
        );
        Ok(compressed)
    }
}
