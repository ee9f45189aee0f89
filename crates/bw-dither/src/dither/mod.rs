//! Black-and-white error diffusion dithering.
//!
//! # Algorithms
//!
//! Six diffusion kernels are available (see [`kernel`]):
//!
//! - **Atkinson**: 75% error propagation, high contrast
//! - **Aman**: Atkinson footprint, 87.5% propagation
//! - **Floyd-Steinberg**: Classic 4-neighbor kernel, 100% propagation
//! - **Jarvis-Judice-Ninke**, **Stucki**: 3-row kernels, smoother gradients
//! - **Burkes**: 2-row variant of Stucki
//!
//! Plus three pass-through modes (Copy, Grayscale, Thresholding) that never
//! diffuse.
//!
//! # Architecture
//!
//! [`Algorithm::mode()`] maps each selector to a table entry. The diffusion
//! loop in [`dither_with_kernel`] is shared by all kernels and knows nothing
//! about which algorithm it is running.
//!
//! # Example
//!
//! ```
//! use bw_dither::{dither, Algorithm, PixelGrid, Rgba};
//!
//! let grid = PixelGrid::from_fn(4, 4, |x, y| Rgba::gray((x * 16 + y * 64) as u8, 255));
//! let out = dither(&grid, Algorithm::FloydSteinberg);
//!
//! assert!(out.pixels().iter().all(|p| p.r == 0 || p.r == 255));
//! ```

mod algorithm;
mod buffer;
pub mod kernel;
mod passthrough;

pub use algorithm::{Algorithm, Mode, ParseAlgorithmError};
pub use buffer::LuminanceBuffer;
pub use kernel::{Kernel, Tap};

use crate::grid::PixelGrid;

/// Luminance values strictly above this quantize to white.
pub const THRESHOLD: u8 = 127;

/// Quantize a luminance value to black (0) or white (255).
#[inline]
pub fn threshold(luminance: u8) -> u8 {
    if luminance > THRESHOLD {
        255
    } else {
        0
    }
}

/// Apply `algorithm` to `grid`, returning a new grid of the same size.
///
/// The input is never modified and no state survives the call, so the
/// result is a pure function of its arguments. Empty grids produce empty
/// output.
pub fn dither(grid: &PixelGrid, algorithm: Algorithm) -> PixelGrid {
    match algorithm.mode() {
        Mode::Copy => passthrough::copy(grid),
        Mode::Grayscale => passthrough::grayscale(grid),
        Mode::Threshold => passthrough::thresholding(grid),
        Mode::Diffuse(kernel) => dither_with_kernel(grid, kernel),
    }
}

/// Core error diffusion algorithm parameterized by kernel.
///
/// 1. Grayscale pass into a [`LuminanceBuffer`]
/// 2. Threshold-and-diffuse pass in raster order ([`diffuse_in_place`])
/// 3. Assembly of `(T, T, T, a)` pixels with alpha from the input
pub fn dither_with_kernel(grid: &PixelGrid, kernel: &Kernel) -> PixelGrid {
    if grid.is_empty() {
        return grid.clone();
    }

    let mut buffer = LuminanceBuffer::from_grid(grid);
    diffuse_in_place(&mut buffer, kernel);
    buffer.assemble(grid)
}

/// Threshold every value of `buffer` while diffusing quantization error.
///
/// Pixels are visited in strict raster order. Each value read already
/// includes the error pushed into it by earlier pixels. Its error
/// `L - T` is spread over the kernel's taps, then `T` overwrites it.
/// Taps only point forward, so a quantized value is never touched again.
pub fn diffuse_in_place(buffer: &mut LuminanceBuffer, kernel: &Kernel) {
    let (width, height) = (buffer.width(), buffer.height());

    for y in 0..height {
        for x in 0..width {
            let luminance = buffer.get(x, y);
            let quantized = threshold(luminance);
            let error = luminance as f64 - quantized as f64;

            for tap in kernel.taps {
                buffer.diffuse(
                    x as isize + tap.dx,
                    (y + tap.dy) as isize,
                    error * kernel.weight(tap),
                );
            }

            buffer.set(x, y, quantized);
        }
    }
}
