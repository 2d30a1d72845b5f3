//! Error types for placeholder encoding.

use thiserror::Error;

/// Result type alias for encoding operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Encoding error types.
///
/// None of these are retried by the encoder. `Io` only ever comes from the
/// caller-side persistence helpers and configuration loading; the encoder
/// itself performs no I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height is zero, too large, or the pixel buffer would overflow.
    #[error("invalid dimension {width}x{height}: {reason}")]
    InvalidDimension {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    /// The underlying compressor reported an error.
    #[error("compression failed: {message}")]
    CompressionFailure {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chunk data is longer than a PNG length field can declare.
    #[error("chunk data too long: {len} bytes exceeds {max}")]
    ChunkTooLarge { len: usize, max: usize },

    /// Invalid compression level specified.
    #[error("invalid compression level {level}: must be in range [{min}, {max}]")]
    InvalidLevel { level: i32, min: i32, max: i32 },

    /// I/O error while persisting output or reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Input is not a well-formed chunk sequence.
    #[error("corrupted data: {message}")]
    CorruptedData { message: String },

    /// Unexpected end of input while reading chunks.
    #[error("unexpected EOF after {bytes_read} bytes")]
    UnexpectedEof { bytes_read: usize },

    /// Stored chunk CRC does not match the recomputed one.
    #[error("checksum mismatch: expected 0x{expected:08x}, got 0x{actual:08x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
}

impl Error {
    /// Create an invalid dimension error.
    pub fn invalid_dimension(width: u32, height: u32, reason: &'static str) -> Self {
        Error::InvalidDimension {
            width,
            height,
            reason,
        }
    }

    /// Create a compression failure carrying the backend error.
    pub fn compression<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::CompressionFailure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a chunk-too-large error.
    pub fn chunk_too_large(len: usize, max: usize) -> Self {
        Error::ChunkTooLarge { len, max }
    }

    /// Create a corrupted data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::CorruptedData {
            message: message.into(),
        }
    }

    /// Create a corrupted data error with offset context.
    pub fn corrupted_at(message: impl Into<String>, offset: usize) -> Self {
        Error::CorruptedData {
            message: format!("{} at offset {}", message.into(), offset),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bytes_read: usize) -> Self {
        Error::UnexpectedEof { bytes_read }
    }

    /// Create a checksum mismatch error.
    pub fn checksum_mismatch(expected: u32, actual: u32) -> Self {
        Error::ChecksumMismatch { expected, actual }
    }

    /// Get error category for logs.
    pub fn category(&self) -> &'static str {
        match self {
            Error::InvalidDimension { .. } => "invalid_dimension",
            Error::CompressionFailure { .. } => "compression_failure",
            Error::ChunkTooLarge { .. } => "chunk_too_large",
            Error::InvalidLevel { .. } => "invalid_level",
            Error::Io(_) => "io_failure",
            Error::Config(_) => "config",
            Error::CorruptedData { .. } => "corrupted_data",
            Error::UnexpectedEof { .. } => "unexpected_eof",
            Error::ChecksumMismatch { .. } => "checksum_mismatch",
        }
    }
}
