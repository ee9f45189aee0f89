//! Rectangular pixel grids.
//!
//! [`PixelGrid`] is both the input and the output of the dithering
//! pipeline. Construction validates the shape, so every grid the engine
//! sees is rectangular.

mod error;
mod pixel_grid;

pub use error::GridError;
pub use pixel_grid::PixelGrid;
