//! RGBA pixel type

use super::luminance::luminance;

/// A single pixel with four 8-bit channels.
///
/// Channel order matches the decoded bitmap layout: red, green, blue,
/// alpha. Alpha is never interpreted by the dithering pipeline; it is
/// carried through to the output unchanged and is not premultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A gray pixel with `r = g = b = value`.
    #[inline]
    pub const fn gray(value: u8, a: u8) -> Self {
        Self::new(value, value, value, a)
    }

    /// Create a pixel from a byte array [R, G, B, A].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array [R, G, B, A].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Perceptual luminance of this pixel, ignoring alpha.
    #[inline]
    pub fn luminance(self) -> u8 {
        luminance(self.r, self.g, self.b)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(pixel: Rgba) -> Self {
        pixel.to_bytes()
    }
}
