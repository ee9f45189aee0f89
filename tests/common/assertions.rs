//! Assertion helpers for tests.

use bw_dither::PixelGrid;
use pretty_assertions::assert_eq;

/// Assert every pixel is pure black or pure white
pub fn assert_binary(grid: &PixelGrid) {
    for (i, pixel) in grid.pixels().iter().enumerate() {
        assert!(
            pixel.r == pixel.g && pixel.g == pixel.b && (pixel.r == 0 || pixel.r == 255),
            "Pixel {i} is not black or white: {pixel:?}"
        );
    }
}

/// Assert `output` has the dimensions and alpha channel of `input`
pub fn assert_same_shape_and_alpha(input: &PixelGrid, output: &PixelGrid) {
    assert_eq!(
        (output.width(), output.height()),
        (input.width(), input.height()),
        "Output dimensions differ from input"
    );
    let input_alpha: Vec<u8> = input.pixels().iter().map(|p| p.a).collect();
    let output_alpha: Vec<u8> = output.pixels().iter().map(|p| p.a).collect();
    assert_eq!(output_alpha, input_alpha, "Alpha channel was not preserved");
}

/// Assert the bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG data, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..bytes.len().min(8)]
    );
}
