//! # Placard Deflate
//!
//! Compression and checksum backends for the Placard encoder.
//!
//! PNG stores its scanlines as a zlib stream (RFC 1950) and protects every
//! chunk with CRC-32. Both come from the ecosystem here rather than being
//! reimplemented:
//!
//! - **Zlib**: [`ZlibCompressor`] over `flate2`
//! - **CRC-32**: [`Crc32Fast`] over `crc32fast` (IEEE polynomial)
//!
//! ## Example
//!
//! ```ignore
//! use placard_core::{Compressor, Crc32};
//! use placard_deflate::{Crc32Fast, ZlibCompressor};
//!
//! let payload = ZlibCompressor::new().compress(&scanlines)?;
//! let crc = Crc32Fast.crc32(&[b"IDAT", &payload]);
//! ```

pub mod codec;
pub mod crc;

pub use codec::ZlibCompressor;
pub use crc::Crc32Fast;
