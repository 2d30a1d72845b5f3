//! # Placard
//!
//! Deterministic placeholder PNG encoder.
//!
//! When real artwork for a slide cannot be generated, Placard produces a
//! stand-in image: a gray test card with a grid, a framed center panel,
//! and corner markers, plus a `tEXt` chunk recording which page and image
//! slot it fills. Identical inputs always give byte-identical files.
//!
//! ## Quick Start
//!
//! ```ignore
//! use placard::{encode_placeholder, encode_minimal_placeholder};
//!
//! // 1920x1080 test card for page 3, image 1
//! let png = encode_placeholder(1920, 1080, 3, 1, "revenue chart")?;
//!
//! // Fixed 1x1 transparent image, no computation
//! let tiny = encode_minimal_placeholder();
//! ```
//!
//! ## Modules
//!
//! | Module | Role |
//! |--------|------|
//! | [`pattern`] | Ordered override rules rendered into a scanline buffer |
//! | [`chunk`] | Chunk framing and a verifying chunk reader |
//! | [`encoder`] | Signature, IHDR, IDAT, tEXt, IEND assembly |
//! | [`config`] | JSON-loadable encoder settings |
//! | [`persist`] | Caller-side file writing that logs and continues |

pub mod chunk;
pub mod config;
pub mod encoder;
pub mod pattern;
pub mod persist;

pub use chunk::{build_chunk, write_chunk, ChunkReader, ChunkRef, PNG_SIGNATURE};
pub use config::EncoderConfig;
pub use encoder::{
    encode_minimal_placeholder, encode_placeholder, PlaceholderEncoder, MINIMAL_PLACEHOLDER_LEN,
};
pub use pattern::{generate, generate_with, Canvas, Pattern, PixelBuffer, Rule};
pub use persist::{write_placeholder, write_slots, BatchReport, Fill, Slot};

// Re-export core types
pub use placard_core::{ColorType, CompressionLevel, Compressor, Crc32, Dimensions, Error, Result};
pub use placard_deflate::{Crc32Fast, ZlibCompressor};
