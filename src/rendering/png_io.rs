use crate::error::RenderError;
use bw_dither::PixelGrid;
use std::io::Cursor;
use std::path::Path;

/// Decode PNG data into an RGBA pixel grid.
///
/// Palette, low-bit-depth and 16-bit images are normalized to 8 bits per
/// channel. Images without an alpha channel get `a = 255`. Rows are read
/// through the decoder's line size, so row padding is never mistaken for
/// pixel data.
pub fn decode_png(data: &[u8]) -> Result<PixelGrid, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;

    if frame.bit_depth != png::BitDepth::Eight {
        return Err(RenderError::UnsupportedFormat(format!(
            "{:?} at {:?} bits",
            frame.color_type, frame.bit_depth
        )));
    }

    let width = frame.width as usize;
    let height = frame.height as usize;
    let stride = frame.line_size;

    tracing::debug!(
        width,
        height,
        stride,
        color_type = ?frame.color_type,
        "Decoded PNG"
    );

    let channels = match frame.color_type {
        png::ColorType::Rgba => {
            return Ok(PixelGrid::from_rgba_bytes(width, height, stride, &buf)?);
        }
        png::ColorType::Rgb => 3,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Grayscale => 1,
        png::ColorType::Indexed => {
            return Err(RenderError::UnsupportedFormat(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    let row_bytes = width * channels;
    let mut rgba = Vec::with_capacity(width * height * 4);
    for row in buf.chunks(stride).take(height) {
        let row = row.get(..row_bytes).ok_or_else(|| {
            RenderError::PngDecode(format!("short row: {} of {row_bytes} bytes", row.len()))
        })?;
        for px in row.chunks_exact(channels) {
            let pixel = match *px {
                [r, g, b] => [r, g, b, 255],
                [l, a] => [l, l, l, a],
                [l] => [l, l, l, 255],
                _ => unreachable!("chunks_exact yields {channels}-byte pixels"),
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    Ok(PixelGrid::from_rgba_bytes(width, height, width * 4, &rgba)?)
}

/// Read and decode a PNG file.
pub fn load_png(path: impl AsRef<Path>) -> Result<PixelGrid, RenderError> {
    let data = std::fs::read(path.as_ref())?;
    decode_png(&data)
}

/// Encode a pixel grid as an 8-bit RGBA PNG.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, RenderError> {
    let (width, height) = (grid.width(), grid.height());
    if grid.is_empty() {
        return Err(RenderError::EmptyImage { width, height });
    }
    let (png_width, png_height) = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(RenderError::UnsupportedDimensions { width, height }),
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, png_width, png_height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&grid.to_rgba_bytes())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Losslessly recompress PNG data with oxipng.
///
/// Returns the input unchanged if recompression fails.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    let before = png_bytes.len();
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(before, after = optimized.len(), "Optimized PNG");
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            png_bytes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_dither::Rgba;

    /// Encode raw sample data with an arbitrary PNG color type.
    fn raw_png(
        width: u32,
        height: u32,
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
        palette: Option<&[u8]>,
        data: &[u8],
    ) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color_type);
            encoder.set_depth(bit_depth);
            if let Some(palette) = palette {
                encoder.set_palette(palette);
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_encode_then_decode_keeps_pixels() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| {
            Rgba::new((x * 80) as u8, (y * 120) as u8, 7, (x * 50 + y) as u8)
        });

        let bytes = encode_png(&grid).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!(decode_png(&bytes).unwrap(), grid);
    }

    #[test]
    fn test_decode_rgb_gets_opaque_alpha() {
        let data = raw_png(
            2,
            1,
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            None,
            &[10, 20, 30, 40, 50, 60],
        );
        let grid = decode_png(&data).unwrap();
        assert_eq!(
            grid.pixels(),
            &[Rgba::new(10, 20, 30, 255), Rgba::new(40, 50, 60, 255)]
        );
    }

    #[test]
    fn test_decode_grayscale_alpha() {
        let data = raw_png(
            1,
            2,
            png::ColorType::GrayscaleAlpha,
            png::BitDepth::Eight,
            None,
            &[10, 20, 200, 0],
        );
        let grid = decode_png(&data).unwrap();
        assert_eq!(grid.get(0, 0), Some(Rgba::new(10, 10, 10, 20)));
        assert_eq!(grid.get(0, 1), Some(Rgba::new(200, 200, 200, 0)));
    }

    #[test]
    fn test_decode_16_bit_strips_to_8() {
        let data = raw_png(
            1,
            1,
            png::ColorType::Grayscale,
            png::BitDepth::Sixteen,
            None,
            &[0xAB, 0xCD],
        );
        let grid = decode_png(&data).unwrap();
        assert_eq!(grid.get(0, 0), Some(Rgba::new(0xAB, 0xAB, 0xAB, 255)));
    }

    #[test]
    fn test_decode_indexed_expands_palette() {
        // 1-bit indices 0, 1
        let palette = [255, 0, 0, 0, 0, 255];
        let data = raw_png(
            2,
            1,
            png::ColorType::Indexed,
            png::BitDepth::One,
            Some(&palette),
            &[0b0100_0000],
        );
        let grid = decode_png(&data).unwrap();
        assert_eq!(
            grid.pixels(),
            &[Rgba::new(255, 0, 0, 255), Rgba::new(0, 0, 255, 255)]
        );
    }

    #[test]
    fn test_decode_low_bit_grayscale_rows() {
        // 1-bit grayscale, 3 pixels per row padded to a full byte
        let data = raw_png(
            3,
            2,
            png::ColorType::Grayscale,
            png::BitDepth::One,
            None,
            &[0b1010_0000, 0b0100_0000],
        );
        let grid = decode_png(&data).unwrap();
        let values: Vec<u8> = grid.pixels().iter().map(|p| p.r).collect();
        assert_eq!(values, vec![255, 0, 255, 0, 255, 0]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_png(b"definitely not a png");
        assert!(matches!(result, Err(RenderError::PngDecode(_))));
    }

    #[test]
    fn test_encode_empty_grid_fails() {
        let result = encode_png(&PixelGrid::empty());
        assert!(matches!(
            result,
            Err(RenderError::EmptyImage {
                width: 0,
                height: 0
            })
        ));
    }

    #[test]
    fn test_load_png_missing_file() {
        let result = load_png("/nonexistent/input.png");
        assert!(matches!(result, Err(RenderError::Io(_))));
    }

    #[test]
    fn test_optimize_png_keeps_pixels() {
        let grid = PixelGrid::from_fn(16, 16, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba::WHITE
            } else {
                Rgba::BLACK
            }
        });
        let plain = encode_png(&grid).unwrap();
        let optimized = optimize_png(plain.clone());

        assert!(optimized.len() <= plain.len());
        assert_eq!(decode_png(&optimized).unwrap(), grid);
    }

    #[test]
    fn test_optimize_png_falls_back_on_invalid_input() {
        let junk = b"not a png".to_vec();
        assert_eq!(optimize_png(junk.clone()), junk);
    }
}
