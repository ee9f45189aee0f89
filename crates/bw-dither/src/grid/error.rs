//! Error type for pixel grid construction

use std::fmt;

/// Error returned when input pixels do not describe a valid rectangular grid.
///
/// These are contract violations by the caller (usually the image decoder).
/// The grid never pads or truncates to paper over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Flat pixel buffer length does not equal `width * height`
    LengthMismatch {
        /// Number of pixels supplied
        len: usize,
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },
    /// A row has a different length than the first row
    JaggedRow {
        /// Index of the offending row
        row: usize,
        /// Width established by row 0
        expected: usize,
        /// Width of the offending row
        actual: usize,
    },
    /// Row stride is smaller than `width * 4` bytes
    StrideTooSmall {
        /// Declared stride in bytes
        stride: usize,
        /// Declared width in pixels
        width: usize,
    },
    /// Byte buffer ends before the last row is complete
    BufferTooShort {
        /// Bytes required by width, height and stride
        required: usize,
        /// Bytes supplied
        actual: usize,
    },
    /// `width * height` (or the byte size derived from it) overflows `usize`
    DimensionOverflow {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },
    /// Two grids that must line up pixel for pixel have different shapes
    DimensionMismatch {
        /// Width and height required
        expected: (usize, usize),
        /// Width and height supplied
        actual: (usize, usize),
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::LengthMismatch { len, width, height } => {
                write!(
                    f,
                    "pixel buffer length {} does not match dimensions {}x{}",
                    len, width, height
                )
            }
            GridError::JaggedRow {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {} has {} pixels, expected {} (grid must be rectangular)",
                    row, actual, expected
                )
            }
            GridError::StrideTooSmall { stride, width } => {
                write!(
                    f,
                    "row stride {} bytes is smaller than {} pixels * 4 bytes",
                    stride, width
                )
            }
            GridError::BufferTooShort { required, actual } => {
                write!(
                    f,
                    "pixel data has {} bytes, at least {} required",
                    actual, required
                )
            }
            GridError::DimensionOverflow { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
            GridError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "grid is {}x{}, expected {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
