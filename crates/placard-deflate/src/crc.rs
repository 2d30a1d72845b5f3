//! CRC-32 (IEEE) backed by `crc32fast`.

use placard_core::Crc32;

/// CRC-32 with the IEEE polynomial, as used by zlib and PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc32Fast;

impl Crc32 for Crc32Fast {
    fn crc32(&self, parts: &[&[u8]]) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize()
    }
}
