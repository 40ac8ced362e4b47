//! The Huffman code tree: construction, preorder serialization, and
//! codeword extraction.

use crate::error::{HuffmanError, Result};
use bytepress_core::{BitReader, BitWriter};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::io::{Read, Write};

/// Deepest tree the decoder accepts. A tree over 256 symbols cannot place
/// a leaf below depth 255, so anything deeper is a corrupt header.
const MAX_DEPTH: u16 = 255;

/// A Huffman code tree. Left edges carry a 0 bit, right edges a 1 bit.
#[derive(Debug)]
pub(crate) enum Tree {
    /// A byte at the end of a codeword.
    Leaf {
        /// The encoded byte value.
        symbol: u8,
    },
    /// A fork; neither child is ever absent.
    Internal {
        /// Subtree for the 0 bit.
        left: Box<Tree>,
        /// Subtree for the 1 bit.
        right: Box<Tree>,
    },
}

/// Heap entry ordered by weight, with insertion order as the tie-break so
/// equal-weight merges are deterministic.
struct HeapEntry {
    freq: u64,
    seq: u16,
    tree: Tree,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        (self.freq, self.seq) == (other.freq, other.seq)
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.freq, self.seq).cmp(&(other.freq, other.seq))
    }
}

impl Tree {
    /// Build the optimal code tree for the given byte frequencies, or
    /// `None` when every frequency is zero. A lone symbol yields a single
    /// leaf, and with it a zero-length codeword.
    pub(crate) fn from_frequencies(freqs: &[u64; 256]) -> Option<Self> {
        let mut heap = BinaryHeap::new();
        let mut seq: u16 = 0;
        for (byte, &freq) in freqs.iter().enumerate() {
            if freq > 0 {
                heap.push(Reverse(HeapEntry {
                    freq,
                    seq,
                    tree: Tree::Leaf { symbol: byte as u8 },
                }));
                seq += 1;
            }
        }

        // repeatedly merge the two lightest subtrees; the first one
        // popped becomes the left child
        while heap.len() > 1 {
            let (Some(Reverse(a)), Some(Reverse(b))) = (heap.pop(), heap.pop()) else {
                break;
            };
            heap.push(Reverse(HeapEntry {
                freq: a.freq + b.freq,
                seq,
                tree: Tree::Internal {
                    left: Box::new(a.tree),
                    right: Box::new(b.tree),
                },
            }));
            seq += 1;
        }

        heap.pop().map(|Reverse(entry)| entry.tree)
    }

    /// Extract the codeword for each byte value, as the bit path from the
    /// root. Bytes without a leaf keep an empty path; the encoder never
    /// looks those up.
    pub(crate) fn codes(&self) -> Vec<Vec<bool>> {
        let mut table = vec![Vec::new(); 256];
        self.assign(&mut Vec::new(), &mut table);
        table
    }

    fn assign(&self, path: &mut Vec<bool>, table: &mut [Vec<bool>]) {
        match self {
            Tree::Leaf { symbol } => table[usize::from(*symbol)] = path.clone(),
            Tree::Internal { left, right } => {
                path.push(false);
                left.assign(path, table);
                path.pop();
                path.push(true);
                right.assign(path, table);
                path.pop();
            }
        }
    }

    /// Serialize the tree in preorder: a 1 bit plus eight symbol bits per
    /// leaf, a 0 bit per internal node.
    pub(crate) fn write_to<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        match self {
            Tree::Leaf { symbol } => {
                writer.write_bit(true)?;
                writer.write_bits(u32::from(*symbol), 8)?;
            }
            Tree::Internal { left, right } => {
                writer.write_bit(false)?;
                left.write_to(writer)?;
                right.write_to(writer)?;
            }
        }
        Ok(())
    }

    /// Parse a preorder-serialized tree from the stream header.
    pub(crate) fn read_from<R: Read>(reader: &mut BitReader<R>) -> Result<Self> {
        Self::read_node(reader, 0)
    }

    fn read_node<R: Read>(reader: &mut BitReader<R>, depth: u16) -> Result<Self> {
        if depth > MAX_DEPTH {
            return Err(HuffmanError::MalformedTree("exceeds maximum depth"));
        }
        if reader.read_bit()? {
            let symbol = reader.read_bits(8)? as u8;
            Ok(Tree::Leaf { symbol })
        } else {
            let left = Box::new(Self::read_node(reader, depth + 1)?);
            let right = Box::new(Self::read_node(reader, depth + 1)?);
            Ok(Tree::Internal { left, right })
        }
    }
}
