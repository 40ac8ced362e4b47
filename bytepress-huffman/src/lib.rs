//! # Bytepress Huffman: Two-Pass Huffman Coding
//!
//! Classic Huffman compression over the byte alphabet. The encoder makes
//! a frequency pass, builds the optimal prefix-free code, and writes the
//! code tree into the stream header, so every stream decodes on its own.
//!
//! ## Stream layout
//!
//! 1. the code tree in preorder: a `1` bit plus eight symbol bits per
//!    leaf, a `0` bit per internal node
//! 2. the number of encoded symbols, as 32 bits
//! 3. one codeword per input byte
//!
//! All fields are MSB-first and the final partial byte is zero-padded.
//! An empty input produces an empty stream.
//!
//! Tree construction breaks weight ties by first appearance, so equal
//! inputs always produce identical streams.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_huffman::{compress, expand};
//!
//! let original = b"it was the best of times it was the worst of times";
//! let compressed = compress(original).unwrap();
//! let expanded = expand(&compressed).unwrap();
//! assert_eq!(expanded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decode;
mod encode;
mod error;
mod tree;

pub use decode::{expand, expand_from};
pub use encode::{compress, compress_to};
pub use error::{HuffmanError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_text() {
        let original = b"free as in freedom";
        let compressed = compress(original).unwrap();
        let expanded = expand(&compressed).unwrap();
        assert_eq!(expanded, original);
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress(b"").unwrap();
        assert!(compressed.is_empty());
        assert!(expand(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_skewed_input_compresses() {
        let mut original = vec![b'a'; 900];
        original.extend_from_slice(&[b'b'; 90]);
        original.extend_from_slice(&[b'c'; 9]);
        original.push(b'd');

        let compressed = compress(&original).unwrap();
        assert!(compressed.len() < original.len() / 4);
        assert_eq!(expand(&compressed).unwrap(), original);
    }
}
