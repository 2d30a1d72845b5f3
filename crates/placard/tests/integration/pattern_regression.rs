//! Pattern regression tests.
//!
//! Checksums of the raw scanline buffer pin the test card bit-for-bit, so
//! any change to rule order, geometry, or rounding of the center shows up
//! here first.

use placard::{generate, Canvas, Dimensions, Pattern, Rule};

/// CRC-32 of `generate(w, h).as_bytes()` for known-good output.
const GOLDEN: &[(u32, u32, u32)] = &[
    (1920, 1080, 0x7995_b771),
    (1001, 777, 0x9f8f_cac6),
    (2000, 1400, 0xd9ca_49b1),
];

fn shade(buf: &placard::PixelBuffer, x: u32, y: u32) -> u8 {
    let px = buf.pixel(x, y);
    assert!(px[0] == px[1] && px[1] == px[2], "({}, {}) is not gray", x, y);
    px[0]
}

#[test]
fn test_golden_checksums() {
    for &(w, h, crc) in GOLDEN {
        let buf = generate(w, h).unwrap();
        assert_eq!(buf.as_bytes().len(), (h * (1 + w * 3)) as usize);
        assert_eq!(
            crc32fast::hash(buf.as_bytes()),
            crc,
            "{}x{} pattern drifted",
            w,
            h
        );
    }
}

#[test]
fn test_default_canvas_landmarks() {
    let buf = generate(1920, 1080).unwrap();

    // Corner marker
    assert_eq!(shade(&buf, 0, 0), 120);
    assert_eq!(shade(&buf, 1919, 1079), 120);

    // Canvas center sits on the interior grid
    let center = shade(&buf, 960, 540);
    assert!(center == 255 || center == 245);
    assert_eq!(center, 245);
    assert_eq!(shade(&buf, 961, 541), 255);

    // Ring, band, and outer grid
    assert_eq!(shade(&buf, 180, 541), 100);
    assert_eq!(shade(&buf, 1710, 301), 240);
    assert_eq!(shade(&buf, 1710, 300), 150);
    assert_eq!(shade(&buf, 160, 540), 240);
    assert_eq!(shade(&buf, 200, 540), 150);
    assert_eq!(shade(&buf, 220, 540), 240);

    // Top row inside the panel but outside the interior keeps the grid
    assert_eq!(shade(&buf, 960, 0), 150);
    assert_eq!(shade(&buf, 960, 1079), 245);
    assert_eq!(shade(&buf, 300, 151), 255);
}

#[test]
fn test_no_hue_anywhere() {
    let buf = generate(1920, 1080).unwrap();
    for row in buf.as_bytes().chunks_exact(buf.stride()) {
        assert_eq!(row[0], 0);
        for px in row[1..].chunks_exact(3) {
            assert!(px[0] == px[1] && px[1] == px[2]);
        }
    }
}

#[test]
fn test_only_rule_shades_appear() {
    let shades: Vec<u8> = Rule::ORDER.iter().map(|r| r.shade()).collect();
    let buf = generate(1920, 1080).unwrap();
    for row in buf.as_bytes().chunks_exact(buf.stride()) {
        for px in row[1..].chunks_exact(3) {
            assert!(shades.contains(&px[0]), "unexpected shade {}", px[0]);
        }
    }
}

#[test]
fn test_render_matches_rule_evaluation() {
    let dims = Dimensions::new(777, 555).unwrap();
    let pattern = Pattern::default();
    let canvas = Canvas::new(dims);
    let buf = generate(777, 555).unwrap();

    for y in (0..555).step_by(7) {
        for x in (0..777).step_by(5) {
            assert_eq!(
                shade(&buf, x, y),
                pattern.shade_at(&canvas, x as i64, y as i64),
                "({}, {})",
                x,
                y
            );
        }
    }
}
