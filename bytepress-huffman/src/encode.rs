//! Huffman encoding: frequency pass, tree build, codeword emission.

use crate::error::{HuffmanError, Result};
use crate::tree::Tree;
use bytepress_core::BitWriter;
use std::io::Write;

/// Compress `input`, returning the Huffman stream.
///
/// # Examples
///
/// ```
/// let data = b"she sells sea shells by the sea shore";
/// let packed = bytepress_huffman::compress(data).unwrap();
/// let restored = bytepress_huffman::expand(&packed).unwrap();
/// assert_eq!(restored, data);
/// ```
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    compress_to(input, &mut out)?;
    Ok(out)
}

/// Compress `input` into `sink`.
///
/// The stream carries its own code tree followed by the symbol count, so
/// it decodes without outside context. An empty input writes nothing.
pub fn compress_to<W: Write>(input: &[u8], sink: W) -> Result<()> {
    let count = u32::try_from(input.len())
        .map_err(|_| HuffmanError::InputTooLarge { len: input.len() })?;

    let mut freqs = [0u64; 256];
    for &byte in input {
        freqs[usize::from(byte)] += 1;
    }

    let Some(tree) = Tree::from_frequencies(&freqs) else {
        return Ok(());
    };
    let codes = tree.codes();

    let mut writer = BitWriter::new(sink);
    tree.write_to(&mut writer)?;
    writer.write_bits(count, 32)?;
    for &byte in input {
        for &bit in &codes[usize::from(byte)] {
            writer.write_bit(bit)?;
        }
    }
    writer.flush()?;
    Ok(())
}
