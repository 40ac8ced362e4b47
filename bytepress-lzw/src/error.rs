//! LZW-specific error types.

use bytepress_core::StreamError;
use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// A code with no dictionary entry that the self-reference rule cannot
    /// supply either; the stream was not produced by this encoder.
    #[error("invalid LZW code: {0}")]
    InvalidCode(u16),

    /// The stream ended mid-code or without the end-of-stream code.
    #[error("compressed stream truncated at bit {position}")]
    Truncated {
        /// Bit position where the stream ran out.
        position: u64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StreamError> for LzwError {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::Io(e) => LzwError::Io(e),
            StreamError::UnexpectedEof { position } => LzwError::Truncated { position },
        }
    }
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
