//! PNG format compatibility tests.
//!
//! Every file is read back with the `png` crate and with a hand-rolled
//! chunk walk, so a framing mistake cannot hide behind our own reader.

use std::io::{Cursor, Read};

use placard::chunk::{IDAT, IEND, IHDR, TEXT};
use placard::{
    encode_minimal_placeholder, encode_placeholder, generate, ChunkReader, ColorType, Crc32,
    Crc32Fast, PlaceholderEncoder, PNG_SIGNATURE,
};

/// Decode with the reference decoder, returning (info, pixels).
fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder.read_info().expect("header should parse");
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("frame should decode");
    buf.truncate(info.buffer_size());
    (info, buf)
}

/// Split a PNG into (type, data, stored crc) without using the library reader.
fn raw_chunks(bytes: &[u8]) -> Vec<([u8; 4], Vec<u8>, u32)> {
    let mut chunks = Vec::new();
    let mut pos = 8;
    while pos < bytes.len() {
        let len = u32::from_be_bytes(bytes[pos..pos + 4].try_into().unwrap()) as usize;
        let kind: [u8; 4] = bytes[pos + 4..pos + 8].try_into().unwrap();
        let data = bytes[pos + 8..pos + 8 + len].to_vec();
        let crc = u32::from_be_bytes(bytes[pos + 8 + len..pos + 12 + len].try_into().unwrap());
        chunks.push((kind, data, crc));
        pos += 12 + len;
    }
    assert_eq!(pos, bytes.len(), "chunks should end exactly at end of file");
    chunks
}

#[test]
fn test_signature_and_chunk_order() {
    let bytes = encode_placeholder(1920, 1080, 3, 1, "x").unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);

    let kinds: Vec<[u8; 4]> = raw_chunks(&bytes).into_iter().map(|c| c.0).collect();
    assert_eq!(kinds, vec![IHDR, IDAT, TEXT, IEND]);
}

#[test]
fn test_every_crc_recomputes() {
    let bytes = encode_placeholder(640, 360, 7, 2, "chart").unwrap();
    for (kind, data, stored) in raw_chunks(&bytes) {
        let actual = crc32fast::hash(&[&kind[..], &data[..]].concat());
        assert_eq!(
            stored,
            actual,
            "chunk {} CRC",
            String::from_utf8_lossy(&kind)
        );
        assert_eq!(stored, Crc32Fast.crc32(&[&kind[..], &data[..]]));
    }
}

#[test]
fn test_header_fields() {
    let bytes = encode_placeholder(1920, 1080, 1, 1, "").unwrap();
    let chunks = ChunkReader::new(&bytes, Crc32Fast).unwrap().read_all().unwrap();
    let ihdr = chunks[0].data;

    assert_eq!(ihdr.len(), 13);
    assert_eq!(u32::from_be_bytes(ihdr[0..4].try_into().unwrap()), 1920);
    assert_eq!(u32::from_be_bytes(ihdr[4..8].try_into().unwrap()), 1080);
    assert_eq!(ihdr[8], 8, "bit depth");
    assert_eq!(ihdr[9], 2, "color type RGB");
    assert_eq!(&ihdr[10..], &[0, 0, 0]);
}

#[test]
fn test_metadata_scenario() {
    let bytes = encode_placeholder(1920, 1080, 3, 1, "x").unwrap();
    let chunks = ChunkReader::new(&bytes, Crc32Fast).unwrap().read_all().unwrap();
    let text = chunks.iter().find(|c| c.kind == TEXT).expect("tEXt chunk");
    assert_eq!(text.data, b"Placeholder\x00Page 3 Image 1");
}

#[test]
fn test_reference_decoder_matches_pattern() {
    let (width, height) = (500, 300);
    let bytes = encode_placeholder(width, height, 1, 1, "").unwrap();
    let (info, pixels) = decode(&bytes);

    assert_eq!(info.width, width);
    assert_eq!(info.height, height);
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);

    // Strip filter bytes from our scanlines and compare samples.
    let expected = generate(width, height).unwrap();
    let samples: Vec<u8> = (0..height)
        .flat_map(|y| expected.row(y)[1..].to_vec())
        .collect();
    assert_eq!(pixels, samples);
}

#[test]
fn test_reference_decoder_rgba() {
    let encoder = PlaceholderEncoder::new().with_color_type(ColorType::Rgba);
    let bytes = encoder.encode(48, 32, 1, 1, "").unwrap();
    let (info, pixels) = decode(&bytes);

    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(pixels.len(), 48 * 32 * 4);
    assert!(pixels.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn test_idat_is_zlib_of_scanlines() {
    let bytes = encode_placeholder(256, 128, 1, 1, "").unwrap();
    let chunks = ChunkReader::new(&bytes, Crc32Fast).unwrap().read_all().unwrap();
    let idat = chunks.iter().find(|c| c.kind == IDAT).unwrap();

    let mut inflated = Vec::new();
    flate2::read::ZlibDecoder::new(idat.data)
        .read_to_end(&mut inflated)
        .unwrap();
    assert_eq!(inflated, generate(256, 128).unwrap().into_bytes());
}

#[test]
fn test_minimal_placeholder_decodes() {
    let bytes = encode_minimal_placeholder();
    assert_eq!(bytes.len(), 67);

    let (info, pixels) = decode(bytes);
    assert_eq!((info.width, info.height), (1, 1));
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    assert_eq!(pixels, vec![0, 0, 0, 0]);

    for (kind, data, stored) in raw_chunks(bytes) {
        assert_eq!(stored, Crc32Fast.crc32(&[&kind[..], &data[..]]));
    }
}

#[test]
fn test_minimal_placeholder_is_constant() {
    assert_eq!(encode_minimal_placeholder(), encode_minimal_placeholder());
    assert!(std::ptr::eq(
        encode_minimal_placeholder().as_ptr(),
        encode_minimal_placeholder().as_ptr()
    ));
}

#[test]
fn test_invalid_input_scenario() {
    let err = encode_placeholder(0, 100, 1, 1, "").unwrap_err();
    assert!(matches!(err, placard::Error::InvalidDimension { .. }));
    assert_eq!(err.category(), "invalid_dimension");
}
