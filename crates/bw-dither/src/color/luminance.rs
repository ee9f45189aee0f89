//! Luminance conversion using ITU-R BT.709 coefficients.
//!
//! See <https://en.wikipedia.org/wiki/Rec._709#The_Y'C'BC'R_color_space>.
//!
//! The coefficients are applied directly to the 8-bit channel values
//! (no gamma decoding), so luminance is an 8-bit value on the same scale
//! as the input channels.

/// A color channel that contributes to luminance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Rec. 709 luminance coefficient for this channel.
    ///
    /// The three coefficients sum to 1.0, so a white pixel maps to 255.
    #[inline]
    pub const fn weight(self) -> f64 {
        match self {
            Channel::Red => 0.2126,
            Channel::Green => 0.7152,
            Channel::Blue => 0.0722,
        }
    }
}

/// Scale a raw channel value (0-255) by its luminance coefficient.
#[inline]
pub fn weighted(value: u8, channel: Channel) -> f64 {
    value as f64 * channel.weight()
}

/// Compute the 8-bit luminance of an RGB triple.
///
/// The weighted channels are summed, rounded half away from zero
/// (`f64::round`) and clamped to 255. Total over the 8-bit domain.
///
/// # Example
///
/// ```
/// use bw_dither::color::luminance;
///
/// assert_eq!(luminance(0, 0, 0), 0);
/// assert_eq!(luminance(255, 255, 255), 255);
/// assert_eq!(luminance(0, 255, 0), 182);
/// ```
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let sum = weighted(r, Channel::Red) + weighted(g, Channel::Green) + weighted(b, Channel::Blue);
    sum.round().min(255.0) as u8
}
