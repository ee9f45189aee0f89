//! PixelGrid: a validated, row-major RGBA image.

use crate::color::Rgba;

use super::GridError;

/// Bytes per RGBA pixel in packed bitmap data.
pub const BYTES_PER_PIXEL: usize = 4;

/// A rectangular grid of RGBA pixels in row-major order.
///
/// Every row has exactly `width` pixels; the constructors reject anything
/// else. A grid with zero width or zero height is valid and empty.
///
/// # Example
///
/// ```
/// use bw_dither::{PixelGrid, Rgba};
///
/// let grid = PixelGrid::from_rows(vec![
///     vec![Rgba::WHITE, Rgba::WHITE],
///     vec![Rgba::BLACK, Rgba::BLACK],
/// ])
/// .unwrap();
///
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get(0, 1), Some(Rgba::BLACK));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Pixels, row-major order.
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Create a grid from a flat row-major pixel buffer.
    ///
    /// Fails with [`GridError::LengthMismatch`] unless
    /// `pixels.len() == width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self, GridError> {
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::DimensionOverflow { width, height })?;
        if pixels.len() != expected {
            return Err(GridError::LengthMismatch {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// The empty 0x0 grid.
    pub fn empty() -> Self {
        Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Create a grid from nested rows.
    ///
    /// The first row fixes the width; any row with a different length is
    /// rejected with [`GridError::JaggedRow`]. An empty outer vector
    /// yields the empty 0x0 grid.
    pub fn from_rows(rows: Vec<Vec<Rgba>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut pixels = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::JaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            pixels.extend(values);
        }

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Create a grid from raw RGBA bytes with an explicit row stride.
    ///
    /// `stride` is the distance in bytes between the starts of consecutive
    /// rows and may exceed `width * 4`; padding bytes at the end of each row
    /// are ignored. The final row only needs `width * 4` bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use bw_dither::{PixelGrid, Rgba};
    ///
    /// // 1x2 image, each row padded to 8 bytes
    /// let bytes = [10, 20, 30, 255, 0, 0, 0, 0, 40, 50, 60, 128];
    /// let grid = PixelGrid::from_rgba_bytes(1, 2, 8, &bytes).unwrap();
    ///
    /// assert_eq!(grid.get(0, 1), Some(Rgba::new(40, 50, 60, 128)));
    /// ```
    pub fn from_rgba_bytes(
        width: usize,
        height: usize,
        stride: usize,
        bytes: &[u8],
    ) -> Result<Self, GridError> {
        let overflow = GridError::DimensionOverflow { width, height };
        let row_bytes = width
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(|| overflow.clone())?;
        if stride < row_bytes {
            return Err(GridError::StrideTooSmall { stride, width });
        }

        let required = match height {
            0 => 0,
            h => (h - 1)
                .checked_mul(stride)
                .and_then(|n| n.checked_add(row_bytes))
                .ok_or_else(|| overflow.clone())?,
        };
        if bytes.len() < required {
            return Err(GridError::BufferTooShort {
                required,
                actual: bytes.len(),
            });
        }

        let mut pixels = Vec::with_capacity(width.checked_mul(height).ok_or(overflow)?);
        for y in 0..height {
            let start = y * stride;
            let row = &bytes[start..start + row_bytes];
            pixels.extend(
                row.chunks_exact(BYTES_PER_PIXEL)
                    .map(|p| Rgba::new(p[0], p[1], p[2], p[3])),
            );
        }

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Create a grid by evaluating `f(x, y)` for every position in raster order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Returns the grid width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid has no pixels (zero width or zero height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// All pixels as a flat row-major slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> + '_ {
        let width = self.width;
        (0..self.height).map(move |y| &self.pixels[y * width..(y + 1) * width])
    }

    /// Copy into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Rgba>> {
        self.rows().map(<[Rgba]>::to_vec).collect()
    }

    /// Pack into RGBA bytes with no row padding (stride = `width * 4`).
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * BYTES_PER_PIXEL);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_bytes());
        }
        bytes
    }

    /// Build a same-sized grid by transforming each pixel independently.
    pub fn map(&self, f: impl FnMut(Rgba) -> Rgba) -> Self {
        Self {
            pixels: self.pixels.iter().copied().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }
}
