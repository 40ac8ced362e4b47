//! Huffman decoding: parse the tree header, then follow codeword bits.

use crate::error::Result;
use crate::tree::Tree;
use bytepress_core::BitReader;
use std::io::Read;

/// Expand a Huffman stream back into the original bytes.
///
/// An empty stream expands to empty output. Bits after the last decoded
/// symbol, including the pad, are ignored.
pub fn expand(data: &[u8]) -> Result<Vec<u8>> {
    expand_from(data)
}

/// Expand a Huffman stream read from `source`.
pub fn expand_from<R: Read>(source: R) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(source);
    if reader.is_eof() {
        return Ok(Vec::new());
    }

    let tree = Tree::read_from(&mut reader)?;
    let count = reader.read_bits(32)?;

    let mut output = Vec::new();
    for _ in 0..count {
        output.push(decode_symbol(&tree, &mut reader)?);
    }
    Ok(output)
}

fn decode_symbol<R: Read>(tree: &Tree, reader: &mut BitReader<R>) -> Result<u8> {
    let mut node = tree;
    loop {
        match node {
            Tree::Leaf { symbol } => return Ok(*symbol),
            Tree::Internal { left, right } => {
                node = if reader.read_bit()? { right } else { left };
            }
        }
    }
}
