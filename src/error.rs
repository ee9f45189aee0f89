use bw_dither::{GridError, ParseAlgorithmError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("Cannot encode an empty {width}x{height} image")]
    EmptyImage { width: usize, height: usize },

    #[error("Invalid pixel grid: {0}")]
    Grid(#[from] GridError),

    #[error("Unknown image '{0}'")]
    UnknownImage(String),

    #[error(transparent)]
    Algorithm(#[from] ParseAlgorithmError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
