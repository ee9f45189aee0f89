//! Single-channel working buffer for the diffusion pass.

use crate::color::Rgba;
use crate::grid::{GridError, PixelGrid};

/// Row-major 8-bit luminance values for one dither call.
///
/// # Usage Pattern
///
/// 1. Create from the input grid with [`from_grid`](Self::from_grid)
/// 2. For each pixel in raster order:
///    a. Read its (error-adjusted) value with `get(x, y)`
///    b. Push error into later neighbors with `diffuse(x, y, amount)`
///    c. Overwrite it with the quantized value via `set(x, y, value)`
/// 3. Rebuild an RGBA grid with [`into_grid`](Self::into_grid)
///
/// Values stay in 0..=255 at all times: every diffusion step rounds and
/// clamps before storing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceBuffer {
    values: Vec<u8>,
    width: usize,
    height: usize,
}

impl LuminanceBuffer {
    /// Create a zero-filled buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            values: vec![0; width * height],
            width,
            height,
        }
    }

    /// Grayscale pass: fill the buffer with the luminance of every pixel.
    pub fn from_grid(grid: &PixelGrid) -> Self {
        Self {
            values: grid.pixels().iter().map(|p| p.luminance()).collect(),
            width: grid.width(),
            height: grid.height(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw values in row-major order.
    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Value at `(x, y)`. Panics outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.values[y * self.width + x]
    }

    /// Overwrite the value at `(x, y)`. Panics outside the buffer.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.values[y * self.width + x] = value;
    }

    /// Add a signed error share to the pixel at `(x, y)`.
    ///
    /// The new value is `clamp(round(current + amount), 0, 255)`.
    /// Coordinates outside the buffer are skipped, never wrapped or clamped
    /// to an edge.
    ///
    /// # Returns
    ///
    /// `true` if the target was inside the buffer and was updated.
    #[inline]
    pub fn diffuse(&mut self, x: isize, y: isize, amount: f64) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        let idx = y as usize * self.width + x as usize;
        let updated = (self.values[idx] as f64 + amount).round().clamp(0.0, 255.0);
        self.values[idx] = updated as u8;
        true
    }

    /// Assembly pass: gray output pixels with alpha taken from `source`.
    ///
    /// Fails with [`GridError::DimensionMismatch`] unless `source` has the
    /// same dimensions as the buffer.
    pub fn into_grid(self, source: &PixelGrid) -> Result<PixelGrid, GridError> {
        if (self.width, self.height) != (source.width(), source.height()) {
            return Err(GridError::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (source.width(), source.height()),
            });
        }
        Ok(self.assemble(source))
    }

    /// [`into_grid`](Self::into_grid) for a `source` already known to match.
    pub(super) fn assemble(self, source: &PixelGrid) -> PixelGrid {
        let Self { values, width, height } = self;
        let pixels = source.pixels();
        PixelGrid::from_fn(width, height, |x, y| {
            let idx = y * width + x;
            Rgba::gray(values[idx], pixels[idx].a)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buf = LuminanceBuffer::new(10, 3);
        assert_eq!(buf.values().len(), 30);
        assert!(buf.values().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_from_grid_uses_luminance() {
        let grid = PixelGrid::from_rows(vec![vec![
            Rgba::new(255, 0, 0, 255),
            Rgba::new(0, 255, 0, 10),
        ]])
        .unwrap();
        let buf = LuminanceBuffer::from_grid(&grid);
        assert_eq!(buf.values(), &[54, 182]);
    }

    #[test]
    fn test_diffuse_rounds_and_accumulates() {
        let mut buf = LuminanceBuffer::new(3, 1);
        buf.set(1, 0, 100);

        assert!(buf.diffuse(1, 0, 10.4));
        assert_eq!(buf.get(1, 0), 110);

        assert!(buf.diffuse(1, 0, -20.6));
        assert_eq!(buf.get(1, 0), 89);
    }

    #[test]
    fn test_diffuse_clamps() {
        let mut buf = LuminanceBuffer::new(2, 1);
        buf.set(0, 0, 250);
        buf.diffuse(0, 0, 40.0);
        assert_eq!(buf.get(0, 0), 255);

        buf.set(1, 0, 5);
        buf.diffuse(1, 0, -40.0);
        assert_eq!(buf.get(1, 0), 0);
    }

    #[test]
    fn test_diffuse_bounds_checking() {
        let mut buf = LuminanceBuffer::new(2, 2);

        // Out of bounds in every direction - silently skipped
        assert!(!buf.diffuse(-1, 0, 50.0));
        assert!(!buf.diffuse(2, 0, 50.0));
        assert!(!buf.diffuse(0, -1, 50.0));
        assert!(!buf.diffuse(0, 2, 50.0));
        assert!(buf.values().iter().all(|&v| v == 0), "nothing wraps");

        assert!(buf.diffuse(1, 1, 50.0));
        assert_eq!(buf.get(1, 1), 50);
    }

    #[test]
    fn test_into_grid_preserves_alpha() {
        let source = PixelGrid::from_rows(vec![vec![
            Rgba::new(1, 2, 3, 0),
            Rgba::new(4, 5, 6, 128),
        ]])
        .unwrap();
        let mut buf = LuminanceBuffer::new(2, 1);
        buf.set(0, 0, 255);
        buf.set(1, 0, 0);

        let grid = buf.into_grid(&source).unwrap();
        assert_eq!(
            grid.pixels(),
            &[Rgba::new(255, 255, 255, 0), Rgba::new(0, 0, 0, 128)]
        );
    }

    #[test]
    fn test_into_grid_rejects_mismatched_source() {
        let source = PixelGrid::from_fn(3, 1, |x, _| Rgba::gray(0, x as u8 * 10 + 1));

        assert_eq!(
            LuminanceBuffer::new(2, 2).into_grid(&source),
            Err(GridError::DimensionMismatch {
                expected: (2, 2),
                actual: (3, 1)
            })
        );

        // Same pixel count, different shape
        let tall = PixelGrid::from_fn(1, 4, |_, _| Rgba::WHITE);
        assert!(LuminanceBuffer::new(2, 2).into_grid(&tall).is_err());
    }
}
