//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Assert the file exists and starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(PNG_SIGNATURE),
        "Expected PNG signature, got {:?}",
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert every output pixel follows the recolor rule for its source pixel
pub fn assert_recolored(source: &[(u8, u8, u8, u8)], output: &[(u8, u8, u8, u8)]) {
    assert_eq!(source.len(), output.len(), "pixel count");
    for (i, (&(r, g, b, a), &out)) in source.iter().zip(output).enumerate() {
        let expected = if r > 200 && g > 200 && b > 200 {
            (255, 255, 255, a)
        } else {
            (255, 255, 255, 0)
        };
        assert_eq!(out, expected, "pixel {i} from source {:?}", (r, g, b, a));
    }
}
