//! # Bytepress LZW: Fixed-Width LZW Compression
//!
//! LZW (Lempel-Ziv-Welch) compression and decompression with fixed 15-bit
//! codes over the full byte alphabet.
//!
//! ## Features
//!
//! - **Pure Rust**: no C dependencies, 100% safe Rust
//! - **Adaptive dictionary**: byte phrases are learned during the encoding
//!   pass and replaced by codes; the decoder relearns the same phrases from
//!   the code stream alone, so no dictionary travels with the data
//! - **Ternary search trie**: the encoder dictionary is an arena-backed TST
//!   with one root per leading byte
//! - **Self-terminating streams**: every stream ends with a reserved
//!   end-of-stream code
//!
//! ## Stream layout
//!
//! Codes 0-255 stand for the literal bytes, code 256 is the reserved
//! end-of-stream mark, and codes 257 and up name phrases in the order the
//! encoder learned them. Every code is written as exactly 15 bits,
//! MSB-first, and the final partial byte is zero-padded. Once the
//! 32767-code space is exhausted both sides keep the frozen dictionary;
//! the stream stays valid.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_lzw::{compress, expand};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress(original).unwrap();
//! let expanded = expand(&compressed).unwrap();
//! assert_eq!(expanded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod encoder;
mod error;
mod table;
mod trie;

pub use decoder::{expand, expand_from};
pub use encoder::{compress, compress_to};
pub use error::{LzwError, Result};

/// Number of distinct byte values; codes below this are literals.
pub const RADIX: u16 = 256;

/// Reserved code marking the end of a compressed stream.
pub const END_OF_STREAM: u16 = 256;

/// Width of every code on the wire, in bits.
pub const CODE_BITS: u8 = 15;

/// Total size of the code space. Phrase codes are assigned from 257 upward
/// and assignment freezes when the counter reaches this value.
pub const MAX_CODES: u16 = 32767;
