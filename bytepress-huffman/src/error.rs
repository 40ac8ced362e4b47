//! Huffman-specific error types.

use bytepress_core::StreamError;
use thiserror::Error;

/// Huffman compression/decompression errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// The serialized code tree in the stream header is not a valid tree.
    #[error("malformed code tree: {0}")]
    MalformedTree(&'static str),

    /// The input length does not fit the 32-bit symbol count header.
    #[error("input of {len} bytes exceeds the 32-bit symbol count")]
    InputTooLarge {
        /// Length of the rejected input.
        len: usize,
    },

    /// The stream ended before the advertised symbol count was decoded.
    #[error("compressed stream truncated at bit {position}")]
    Truncated {
        /// Bit position where the stream ran out.
        position: u64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StreamError> for HuffmanError {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::Io(e) => HuffmanError::Io(e),
            StreamError::UnexpectedEof { position } => HuffmanError::Truncated { position },
        }
    }
}

/// Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
