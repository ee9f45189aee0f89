//! Transforms that reuse the luminance conversion without error diffusion.

use crate::color::Rgba;
use crate::grid::PixelGrid;

use super::threshold;

/// Identity transform.
pub fn copy(grid: &PixelGrid) -> PixelGrid {
    grid.clone()
}

/// Replace every pixel by `(L, L, L, a)`.
pub fn grayscale(grid: &PixelGrid) -> PixelGrid {
    grid.map(|p| Rgba::gray(p.luminance(), p.a))
}

/// Replace every pixel by `(T, T, T, a)` where `T` is the thresholded
/// luminance. Quantization error is discarded, so each output pixel
/// depends only on the input pixel at the same position.
pub fn thresholding(grid: &PixelGrid) -> PixelGrid {
    grid.map(|p| Rgba::gray(threshold(p.luminance()), p.a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelGrid {
        PixelGrid::from_rows(vec![
            vec![Rgba::new(255, 0, 0, 255), Rgba::new(0, 255, 0, 200)],
            vec![Rgba::new(0, 0, 255, 100), Rgba::new(128, 128, 128, 0)],
        ])
        .unwrap()
    }

    #[test]
    fn test_copy_is_identity() {
        let grid = sample();
        assert_eq!(copy(&grid), grid);
    }

    #[test]
    fn test_grayscale_values() {
        let out = grayscale(&sample());
        assert_eq!(
            out.pixels(),
            &[
                Rgba::gray(54, 255),
                Rgba::gray(182, 200),
                Rgba::gray(18, 100),
                Rgba::gray(128, 0),
            ]
        );
    }

    #[test]
    fn test_thresholding_values() {
        let out = thresholding(&sample());
        assert_eq!(
            out.pixels(),
            &[
                Rgba::gray(0, 255),
                Rgba::gray(255, 200),
                Rgba::gray(0, 100),
                Rgba::gray(255, 0),
            ]
        );
    }

    #[test]
    fn test_empty_grid() {
        let empty = PixelGrid::empty();
        assert!(copy(&empty).is_empty());
        assert!(grayscale(&empty).is_empty());
        assert!(thresholding(&empty).is_empty());
    }
}
