//! Capability traits injected into the encoder.
//!
//! The encoder never implements DEFLATE or CRC-32 itself. Any backend that
//! satisfies these contracts produces files third-party decoders accept.

use crate::error::Result;
use crate::types::CompressionLevel;

/// One-shot compression of a raw scanline payload.
///
/// Output must be a complete zlib stream (RFC 1950), the framing PNG
/// requires inside `IDAT`.
pub trait Compressor {
    /// Get the configured compression level.
    fn level(&self) -> CompressionLevel;

    /// Compress data in one shot.
    ///
    /// # Arguments
    /// * `input` - Data to compress
    ///
    /// # Returns
    /// Compressed data as a vector.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// CRC-32 using the IEEE / ISO-3309 polynomial (the one zlib and PNG use).
pub trait Crc32 {
    /// Checksum the concatenation of `parts` without copying them together.
    fn crc32(&self, parts: &[&[u8]]) -> u32;
}

impl<T: Compressor + ?Sized> Compressor for &T {
    fn level(&self) -> CompressionLevel {
        (**self).level()
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).compress(input)
    }
}

impl<T: Crc32 + ?Sized> Crc32 for &T {
    fn crc32(&self, parts: &[&[u8]]) -> u32 {
        (**self).crc32(parts)
    }
}
