//! Integration tests for the placeholder encoder.
//!
//! These tests check the encoded bytes against the PNG format itself:
//! chunk framing, checksums, header fields, and an independent decoder.

mod format_compatibility;
mod pattern_regression;
