//! PNG chunk framing.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────────┬─────────────────────┐
//! │ length: u32  │ type: [u8;4] │ data: length B   │ crc: u32            │
//! │ (big-endian) │ ASCII letters│                  │ CRC-32(type || data)│
//! └──────────────┴──────────────┴──────────────────┴─────────────────────┘
//! ```
//!
//! [`ChunkReader`] walks the same framing back for verification. It checks
//! lengths and checksums only and never reconstructs pixels.

use placard_core::{Crc32, Error, Result};

/// The 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Image header chunk.
pub const IHDR: [u8; 4] = *b"IHDR";

/// Compressed pixel data chunk.
pub const IDAT: [u8; 4] = *b"IDAT";

/// Latin-1 keyword/text metadata chunk.
pub const TEXT: [u8; 4] = *b"tEXt";

/// Terminator chunk.
pub const IEND: [u8; 4] = *b"IEND";

/// Length, type, and CRC fields around the data.
pub const CHUNK_OVERHEAD: usize = 12;

/// Largest data length a chunk may declare (2^31 - 1).
pub const MAX_CHUNK_LEN: usize = i32::MAX as usize;

/// Append one serialized chunk to `out`.
///
/// # Panics
///
/// If `kind` is not four ASCII letters or `data` is longer than
/// [`MAX_CHUNK_LEN`]. Callers holding data of unchecked size must compare it
/// against [`MAX_CHUNK_LEN`] first.
pub fn write_chunk<K: Crc32 + ?Sized>(out: &mut Vec<u8>, crc: &K, kind: &[u8; 4], data: &[u8]) {
    assert!(
        kind.iter().all(u8::is_ascii_alphabetic),
        "chunk type must be four ASCII letters, got {:?}",
        kind
    );
    assert!(data.len() <= MAX_CHUNK_LEN, "chunk data too long: {} bytes", data.len());

    out.reserve(CHUNK_OVERHEAD + data.len());
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.crc32(&[kind, data]).to_be_bytes());
}

/// Serialize one chunk into a fresh buffer.
pub fn build_chunk<K: Crc32 + ?Sized>(crc: &K, kind: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(CHUNK_OVERHEAD + data.len());
    write_chunk(&mut out, crc, kind, data);
    out
}

/// A chunk borrowed from a byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRef<'a> {
    /// Chunk type tag.
    pub kind: [u8; 4],
    /// Chunk data.
    pub data: &'a [u8],
    /// Stored CRC (already verified).
    pub crc: u32,
    /// Offset of the length field from the start of the input.
    pub offset: usize,
}

impl ChunkRef<'_> {
    /// Type tag as text.
    pub fn kind_str(&self) -> &str {
        std::str::from_utf8(&self.kind).unwrap_or("????")
    }

    /// Total serialized size.
    pub fn encoded_len(&self) -> usize {
        CHUNK_OVERHEAD + self.data.len()
    }
}

/// Iterator over the chunks of a PNG byte sequence.
///
/// The signature is checked on construction. Each item is either a chunk
/// whose CRC matched or the first error found; iteration stops after an
/// error or after `IEND`.
pub struct ChunkReader<'a, K> {
    input: &'a [u8],
    pos: usize,
    crc: K,
    done: bool,
}

impl<'a, K: Crc32> ChunkReader<'a, K> {
    /// Start reading after the PNG signature.
    pub fn new(input: &'a [u8], crc: K) -> Result<Self> {
        if input.len() < PNG_SIGNATURE.len() {
            return Err(Error::unexpected_eof(input.len()));
        }
        if input[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
            return Err(Error::corrupted("missing PNG signature"));
        }
        Ok(Self {
            input,
            pos: PNG_SIGNATURE.len(),
            crc,
            done: false,
        })
    }

    /// Read every chunk, failing on the first bad one or on missing `IEND`.
    pub fn read_all(self) -> Result<Vec<ChunkRef<'a>>> {
        let chunks = self.collect::<Result<Vec<_>>>()?;
        match chunks.last() {
            Some(last) if last.kind == IEND => Ok(chunks),
            _ => Err(Error::corrupted("missing IEND chunk")),
        }
    }

    fn read_next(&mut self) -> Result<ChunkRef<'a>> {
        let offset = self.pos;
        let rest = &self.input[offset..];
        if rest.len() < 8 {
            return Err(Error::unexpected_eof(self.input.len()));
        }

        let len = u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]) as usize;
        if len > MAX_CHUNK_LEN {
            return Err(Error::corrupted_at("chunk length exceeds 2^31 - 1", offset));
        }
        let kind = [rest[4], rest[5], rest[6], rest[7]];
        if !kind.iter().all(u8::is_ascii_alphabetic) {
            return Err(Error::corrupted_at("invalid chunk type", offset));
        }
        if rest.len() < CHUNK_OVERHEAD + len {
            return Err(Error::unexpected_eof(self.input.len()));
        }

        let data = &rest[8..8 + len];
        let stored = u32::from_be_bytes([
            rest[8 + len],
            rest[9 + len],
            rest[10 + len],
            rest[11 + len],
        ]);
        let actual = self.crc.crc32(&[&kind, data]);
        if stored != actual {
            return Err(Error::checksum_mismatch(stored, actual));
        }

        self.pos += CHUNK_OVERHEAD + len;
        Ok(ChunkRef {
            kind,
            data,
            crc: stored,
            offset,
        })
    }
}

impl<'a, K: Crc32> Iterator for ChunkReader<'a, K> {
    type Item = Result<ChunkRef<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.pos == self.input.len() {
            return None;
        }
        let item = self.read_next();
        self.done = match &item {
            Ok(chunk) => chunk.kind == IEND,
            Err(_) => true,
        };
        Some(item)
    }
}
