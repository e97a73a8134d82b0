use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode source image: {0}")]
    DecodeError(String),

    #[error("Truncated raw file: expected {expected} pixel bytes after the header, found {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("Pixel buffer size mismatch for {width}x{height}: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to open image preview: {0}")]
    PreviewError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
