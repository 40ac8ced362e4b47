//! # Bytepress Core
//!
//! Shared foundation for the bytepress compression crates.
//!
//! Every coder in this workspace (LZW, Huffman, run-length) produces and
//! consumes bit-packed streams rather than plain byte sequences. This crate
//! provides the collaborator they all share:
//!
//! - [`bitstream`]: MSB-first [`BitReader`]/[`BitWriter`] over any
//!   `Read`/`Write` implementation
//! - [`error`]: the stream-level error type
//!
//! ## Example
//!
//! ```rust
//! use bytepress_core::{BitReader, BitWriter};
//!
//! let mut packed = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut packed);
//!     writer.write_bits(297, 15).unwrap();
//!     writer.write_bit(true).unwrap();
//!     writer.flush().unwrap();
//! }
//!
//! let mut reader = BitReader::new(packed.as_slice());
//! assert_eq!(reader.read_bits(15).unwrap(), 297);
//! assert!(reader.read_bit().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{Result, StreamError};
