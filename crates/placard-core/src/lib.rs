//! # Placard Core
//!
//! Core traits, types, and errors for the Placard placeholder image encoder.
//!
//! Placard emits small, deterministic PNG files that stand in for artwork
//! that could not be generated. This crate holds the pieces shared by the
//! encoder and its compression backends.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot zlib/DEFLATE compression of a scanline payload
//! - [`Crc32`] - CRC-32 (IEEE) over a sequence of byte slices
//!
//! ## Example
//!
//! ```ignore
//! use placard_core::{Compressor, CompressionLevel, Dimensions};
//! use placard_deflate::ZlibCompressor;
//!
//! let dims = Dimensions::new(1920, 1080)?;
//! let compressor = ZlibCompressor::with_level(CompressionLevel::Default);
//! let payload = compressor.compress(&raw_scanlines)?;
//! ```

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{Compressor, Crc32};
pub use types::{ColorType, CompressionLevel, Dimensions, MAX_DIMENSION};
