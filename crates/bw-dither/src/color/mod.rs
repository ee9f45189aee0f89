//! Pixel and luminance types.
//!
//! - [`Rgba`]: one 8-bit-per-channel pixel as produced by image decoders
//! - [`Channel`]: the color channels that contribute to luminance
//! - [`luminance()`]: Rec. 709 perceptual grayscale conversion

mod luminance;
mod rgba;

pub use luminance::{luminance, weighted, Channel};
pub use rgba::Rgba;
