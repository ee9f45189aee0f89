//! Ditherview
//!
//! Black-and-white error diffusion dithering of PNG images.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use bw_dither::Algorithm;
