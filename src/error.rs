use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Input file not found at {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for IconError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => IconError::Io(io),
            other => IconError::Decode(other.to_string()),
        }
    }
}

impl From<png::EncodingError> for IconError {
    fn from(e: png::EncodingError) -> Self {
        match e {
            png::EncodingError::IoError(io) => IconError::Io(io),
            other => IconError::Encode(other.to_string()),
        }
    }
}
