//! Error types for bit-stream operations.

use std::io;
use thiserror::Error;

/// Errors arising while reading or writing a bit-packed stream.
#[derive(Debug, Error)]
pub enum StreamError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source ran out of bytes partway through a read.
    #[error("unexpected end of stream at bit {position}")]
    UnexpectedEof {
        /// Number of bits consumed before the failed read.
        position: u64,
    },
}

/// Result alias used across the bytepress crates.
pub type Result<T> = std::result::Result<T, StreamError>;
