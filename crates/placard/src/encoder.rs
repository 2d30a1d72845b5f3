//! Placeholder PNG encoder.
//!
//! ## Output Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Signature  89 50 4E 47 0D 0A 1A 0A                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │ IHDR  width u32 | height u32 | depth 8 | color 2/6 | 0 | 0 | 0│
//! ├──────────────────────────────────────────────────────────────┤
//! │ IDAT  zlib(scanlines)                                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │ tEXt  "Placeholder" 0x00 "Page {page} Image {image}"         │
//! │       (optional)                                             │
//! ├──────────────────────────────────────────────────────────────┤
//! │ IEND  (empty)                                                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Encoding is a pure function of its inputs: no I/O, no shared state.

use placard_core::{ColorType, CompressionLevel, Compressor, Crc32, Dimensions, Error, Result};
use placard_deflate::{Crc32Fast, ZlibCompressor};
use tracing::{debug, debug_span};

use crate::chunk::{
    write_chunk, CHUNK_OVERHEAD, IDAT, IEND, IHDR, MAX_CHUNK_LEN, PNG_SIGNATURE, TEXT,
};
use crate::config::EncoderConfig;
use crate::pattern::generate_with;

/// Bit depth of every sample.
pub const BIT_DEPTH: u8 = 8;

/// Keyword of the traceability `tEXt` chunk.
pub const METADATA_KEYWORD: &str = "Placeholder";

/// Size of the fixed fallback image in bytes.
pub const MINIMAL_PLACEHOLDER_LEN: usize = 67;

/// 1x1, 8-bit RGBA, fully transparent PNG.
///
/// IDAT holds `zlib([0, 0, 0, 0, 0])`: one filter byte and one pixel of
/// zeros. Both chunk CRCs are correct for their contents.
#[rustfmt::skip]
const MINIMAL_PLACEHOLDER: [u8; MINIMAL_PLACEHOLDER_LEN] = [
    // signature
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A,
    // IHDR: 1x1, depth 8, color 6, deflate, filter 0, no interlace
    0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x06, 0x00, 0x00, 0x00,
    0x1F, 0x15, 0xC4, 0x89,
    // IDAT
    0x00, 0x00, 0x00, 0x0A, b'I', b'D', b'A', b'T',
    0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01,
    0x0D, 0x0A, 0x2D, 0xB4,
    // IEND
    0x00, 0x00, 0x00, 0x00, b'I', b'E', b'N', b'D',
    0xAE, 0x42, 0x60, 0x82,
];

/// Return the fixed 1x1 transparent placeholder.
///
/// Use this where generating the test pattern is unwanted. It needs no
/// inputs and cannot fail.
pub fn encode_minimal_placeholder() -> &'static [u8] {
    &MINIMAL_PLACEHOLDER
}

/// Encode the default placeholder with the stock zlib and CRC backends.
///
/// `page` and `image` only appear in the `tEXt` chunk; `annotation` is
/// recorded in the tracing span and never changes the output.
pub fn encode_placeholder(
    width: u32,
    height: u32,
    page: u32,
    image: u32,
    annotation: &str,
) -> Result<Vec<u8>> {
    PlaceholderEncoder::new().encode(width, height, page, image, annotation)
}

/// IHDR payload for the given dimensions and color type.
pub fn header_data(dims: Dimensions, color: ColorType) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&dims.width().to_be_bytes());
    data[4..8].copy_from_slice(&dims.height().to_be_bytes());
    data[8] = BIT_DEPTH;
    data[9] = color.code();
    // compression, filter, and interlace methods stay 0
    data
}

/// `tEXt` payload: keyword, NUL separator, text.
pub fn metadata_text(page: u32, image: u32) -> Vec<u8> {
    let text = format!("Page {} Image {}", page, image);
    let mut data = Vec::with_capacity(METADATA_KEYWORD.len() + 1 + text.len());
    data.extend_from_slice(METADATA_KEYWORD.as_bytes());
    data.push(0);
    data.extend_from_slice(text.as_bytes());
    data
}

/// Placeholder encoder with injected compression and checksum backends.
#[derive(Debug, Clone)]
pub struct PlaceholderEncoder<C = ZlibCompressor, K = Crc32Fast> {
    compressor: C,
    crc: K,
    color: ColorType,
    embed_metadata: bool,
}

impl PlaceholderEncoder {
    /// Create an encoder with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&EncoderConfig::default())
    }

    /// Create an encoder from a configuration.
    ///
    /// The compression level is checked on first use.
    pub fn from_config(config: &EncoderConfig) -> Self {
        PlaceholderEncoder {
            compressor: ZlibCompressor::with_level(config.level()),
            crc: Crc32Fast,
            color: config.color_type,
            embed_metadata: config.embed_metadata,
        }
    }
}

impl Default for PlaceholderEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Compressor, K: Crc32> PlaceholderEncoder<C, K> {
    /// Create an encoder over custom backends.
    pub fn with_backends(compressor: C, crc: K) -> Self {
        PlaceholderEncoder {
            compressor,
            crc,
            color: ColorType::Rgb,
            embed_metadata: true,
        }
    }

    /// Set the pixel layout.
    pub fn with_color_type(mut self, color: ColorType) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable the `tEXt` chunk.
    pub fn with_metadata(mut self, embed: bool) -> Self {
        self.embed_metadata = embed;
        self
    }

    /// Configured pixel layout.
    pub fn color_type(&self) -> ColorType {
        self.color
    }

    /// Level of the compression backend.
    pub fn compression_level(&self) -> CompressionLevel {
        self.compressor.level()
    }

    /// Encode one placeholder image.
    ///
    /// Fails with `InvalidDimension` before any work if a side is zero, with
    /// the compressor's error if compression fails, and with `ChunkTooLarge`
    /// if the compressed data does not fit a single `IDAT` chunk.
    pub fn encode(
        &self,
        width: u32,
        height: u32,
        page: u32,
        image: u32,
        annotation: &str,
    ) -> Result<Vec<u8>> {
        let _span = debug_span!("encode_placeholder", width, height, page, image, annotation)
            .entered();

        let dims = Dimensions::new(width, height)?;
        let pixels = generate_with(dims, self.color)?;
        let payload = self.compressor.compress(pixels.as_bytes())?;
        if payload.len() > MAX_CHUNK_LEN {
            return Err(Error::chunk_too_large(payload.len(), MAX_CHUNK_LEN));
        }

        let header = header_data(dims, self.color);
        let text = self.embed_metadata.then(|| metadata_text(page, image));
        let text_len = text.as_ref().map_or(0, |t| CHUNK_OVERHEAD + t.len());

        let mut out = Vec::with_capacity(
            PNG_SIGNATURE.len() + 3 * CHUNK_OVERHEAD + header.len() + payload.len() + text_len,
        );
        out.extend_from_slice(&PNG_SIGNATURE);
        write_chunk(&mut out, &self.crc, &IHDR, &header);
        write_chunk(&mut out, &self.crc, &IDAT, &payload);
        if let Some(text) = &text {
            write_chunk(&mut out, &self.crc, &TEXT, text);
        }
        write_chunk(&mut out, &self.crc, &IEND, &[]);

        debug!(
            raw = pixels.as_bytes().len(),
            compressed = payload.len(),
            total = out.len(),
            color = self.color.name(),
            level = self.compressor.level().to_level(),
            "encoded placeholder"
        );
        Ok(out)
    }
}
