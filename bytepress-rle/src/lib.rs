//! # Bytepress RLE: Bit-Level Run-Length Encoding
//!
//! Run-length encoding over the bit stream rather than the byte stream.
//! The compressed form is a sequence of 8-bit run lengths; runs alternate
//! bit value and the first run is always of 0 bits, so a stream that
//! starts with a 1 bit opens with a zero-length run. A run longer than
//! 255 is split by a zero-length run of the opposite bit.
//!
//! This scheme only pays off on bit-sparse data, long stretches of 0x00
//! or 0xFF bytes. Text and mixed binary expand, often severalfold. Every
//! byte sequence parses as a valid stream, so expansion never fails on
//! slice input.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_rle::{compress, expand};
//!
//! let original = vec![0u8; 64];
//! let compressed = compress(&original).unwrap();
//! assert!(compressed.len() < 8);
//! assert_eq!(expand(&compressed).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

use bytepress_core::{BitReader, BitWriter, Result};
use std::io::{Read, Write};

/// Width of each run-length field on the wire, in bits.
pub const RUN_BITS: u8 = 8;

/// Longest run a single field can express.
pub const MAX_RUN: u8 = 255;

/// Compress `input`, returning the run-length stream.
///
/// An empty input encodes as a single zero-length run.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    compress_to(input, &mut out)?;
    Ok(out)
}

/// Compress `input` into `sink`.
pub fn compress_to<W: Write>(input: &[u8], sink: W) -> Result<()> {
    let mut reader = BitReader::new(input);
    let mut writer = BitWriter::new(sink);

    let mut current = false;
    let mut run: u8 = 0;
    while !reader.is_eof() {
        let bit = reader.read_bit()?;
        if bit != current {
            writer.write_bits(u32::from(run), RUN_BITS)?;
            current = !current;
            run = 1;
        } else {
            if run == MAX_RUN {
                writer.write_bits(u32::from(run), RUN_BITS)?;
                writer.write_bits(0, RUN_BITS)?;
                run = 0;
            }
            run += 1;
        }
    }
    writer.write_bits(u32::from(run), RUN_BITS)?;
    writer.flush()?;
    Ok(())
}

/// Expand a run-length stream back into the original bytes.
pub fn expand(data: &[u8]) -> Result<Vec<u8>> {
    expand_from(data)
}

/// Expand a run-length stream read from `source`.
pub fn expand_from<R: Read>(source: R) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(source);
    let mut writer = BitWriter::new(Vec::new());

    let mut current = false;
    while !reader.is_eof() {
        let run = reader.read_bits(RUN_BITS)?;
        for _ in 0..run {
            writer.write_bit(current)?;
        }
        current = !current;
    }
    writer.into_inner()
}
