//! bw-dither: Black-and-white error diffusion dithering
//!
//! This library turns an RGBA pixel grid into a strictly two-tone image
//! (every color channel 0 or 255) while carrying the input alpha through
//! unchanged.
//!
//! # Quick Start
//!
//! ```
//! use bw_dither::{dither, Algorithm, PixelGrid, Rgba};
//!
//! let grid = PixelGrid::from_rows(vec![
//!     vec![Rgba::new(200, 120, 40, 255), Rgba::new(10, 10, 10, 255)],
//!     vec![Rgba::new(90, 90, 90, 128), Rgba::WHITE],
//! ])
//! .unwrap();
//!
//! let out = dither(&grid, Algorithm::Atkinson);
//! assert_eq!(out.width(), 2);
//! assert_eq!(out.get(0, 1).unwrap().a, 128);
//! ```
//!
//! # Pipeline
//!
//! Every diffusing algorithm runs the same three passes:
//!
//! 1. **Grayscale**: each pixel becomes its Rec. 709 luminance
//!    `L = round(0.2126 R + 0.7152 G + 0.0722 B)`
//! 2. **Threshold and diffuse**: in raster order, `T = 255` if `L > 127`
//!    else `0`, and the error `L - T` is spread over not-yet-visited
//!    neighbors according to the algorithm's [`Kernel`]
//! 3. **Assembly**: output pixel `(T, T, T, a)`
//!
//! Scanning is strictly left-to-right, top-to-bottom. Error that would land
//! outside the grid is dropped.
//!
//! # Algorithms
//!
//! [`Algorithm`] selects one of nine transforms:
//!
//! | Algorithm | Kind | Propagation |
//! |-----------|------|-------------|
//! | Copy | pass-through | - |
//! | Grayscale | pass-through | - |
//! | Thresholding | pass-through | 0% |
//! | Atkinson (default) | diffusion | 75% |
//! | Aman | diffusion | 87.5% |
//! | Floyd-Steinberg | diffusion | 100% |
//! | Jarvis-Judice-Ninke | diffusion | 100% |
//! | Stucki | diffusion | 100% |
//! | Burkes | diffusion | 100% |
//!
//! # Input Validation
//!
//! [`PixelGrid`] constructors reject jagged rows, short buffers and strides
//! smaller than a row with a [`GridError`]. Once a grid exists, dithering
//! cannot fail.

pub mod color;
pub mod dither;
pub mod grid;


pub use color::{luminance, Channel, Rgba};
pub use dither::{
    dither, threshold, Algorithm, Kernel, LuminanceBuffer, Mode, ParseAlgorithmError, Tap,
    THRESHOLD,
};
pub use grid::{GridError, PixelGrid};
