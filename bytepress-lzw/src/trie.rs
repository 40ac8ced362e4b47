//! Encode-side dictionary: a ternary search trie over byte phrases.
//!
//! The trie is stored as an arena: nodes live in one contiguous vector and
//! refer to each other by index, so lookup and insertion are iterative.
//! The first 256 slots are the roots, one per leading byte, carrying the
//! literal codes 0-255.

use crate::{END_OF_STREAM, MAX_CODES, RADIX};
use std::cmp::Ordering;

/// One trie node. `symbol` is the byte on the edge leading here; a phrase
/// is spelled out by the symbols along the equal-continue (`mid`) path
/// from a root.
#[derive(Debug, Clone, Copy)]
struct Node {
    symbol: u8,
    code: u16,
    len: u16,
    left: Option<u16>,
    mid: Option<u16>,
    right: Option<u16>,
}

/// Result of a longest-prefix search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PrefixMatch {
    /// Arena index of the matched node.
    pub node: u16,
    /// Code assigned to the matched phrase.
    pub code: u16,
    /// Length of the matched phrase in bytes.
    pub len: u16,
}

/// The encoder's phrase dictionary.
#[derive(Debug)]
pub(crate) struct PhraseTrie {
    nodes: Vec<Node>,
    next_code: u16,
}

impl PhraseTrie {
    /// Create the root forest: one node per byte value, length 1, codes
    /// equal to the byte. The first phrase code is 257.
    pub(crate) fn new() -> Self {
        let mut nodes = Vec::with_capacity(usize::from(RADIX));
        for byte in 0..RADIX {
            nodes.push(Node {
                symbol: byte as u8,
                code: byte,
                len: 1,
                left: None,
                mid: None,
                right: None,
            });
        }
        Self {
            nodes,
            next_code: END_OF_STREAM + 1,
        }
    }

    /// Whether codes remain for new phrases.
    pub(crate) fn has_capacity(&self) -> bool {
        self.next_code < MAX_CODES
    }

    /// Find the longest phrase starting at `pos` that the trie contains.
    /// At least the single byte `input[pos]` always matches, via its root.
    pub(crate) fn longest_prefix(&self, input: &[u8], pos: usize) -> PrefixMatch {
        let root = usize::from(input[pos]);
        let mut best = root as u16;
        let mut cursor = pos + 1;
        let mut next = self.nodes[root].mid;

        while cursor < input.len() {
            let Some(id) = next else { break };
            let node = &self.nodes[usize::from(id)];
            match input[cursor].cmp(&node.symbol) {
                Ordering::Less => next = node.left,
                Ordering::Equal => {
                    best = id;
                    cursor += 1;
                    next = node.mid;
                }
                Ordering::Greater => next = node.right,
            }
        }

        let matched = &self.nodes[usize::from(best)];
        PrefixMatch {
            node: best,
            code: matched.code,
            len: matched.len,
        }
    }

    /// Insert the phrase `matched + symbol`, assigning it the next unused
    /// code. The caller has already checked capacity and that a next byte
    /// exists. Returns the new node's arena index.
    pub(crate) fn insert(&mut self, matched: u16, symbol: u8) -> u16 {
        debug_assert!(self.has_capacity());

        let code = self.next_code;
        self.next_code += 1;

        let id = self.nodes.len() as u16;
        let len = self.nodes[usize::from(matched)].len + 1;
        self.nodes.push(Node {
            symbol,
            code,
            len,
            left: None,
            mid: None,
            right: None,
        });

        // Place the new node in the sibling tree hanging off the matched
        // node's mid link. No equal symbol can appear on this walk, or the
        // match would have been longer.
        let mut cur = match self.nodes[usize::from(matched)].mid {
            None => {
                self.nodes[usize::from(matched)].mid = Some(id);
                return id;
            }
            Some(first) => first,
        };
        loop {
            let node = self.nodes[usize::from(cur)];
            if symbol < node.symbol {
                match node.left {
                    None => {
                        self.nodes[usize::from(cur)].left = Some(id);
                        return id;
                    }
                    Some(next) => cur = next,
                }
            } else {
                match node.right {
                    None => {
                        self.nodes[usize::from(cur)].right = Some(id);
                        return id;
                    }
                    Some(next) => cur = next,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_match_single_bytes() {
        let trie = PhraseTrie::new();
        let m = trie.longest_prefix(&[7, 9], 0);
        assert_eq!(m.code, 7);
        assert_eq!(m.len, 1);
        let m = trie.longest_prefix(&[255], 0);
        assert_eq!(m.code, 255);
    }

    #[test]
    fn matches_grow_as_phrases_are_inserted() {
        let mut trie = PhraseTrie::new();
        let input = b"ABABAB";

        let m = trie.longest_prefix(input, 0);
        assert_eq!((m.code, m.len), (u16::from(b'A'), 1));
        trie.insert(m.node, b'B'); // "AB" -> 257

        let m = trie.longest_prefix(input, 2);
        assert_eq!((m.code, m.len), (257, 2));
        trie.insert(m.node, b'A'); // "ABA" -> 258

        let m = trie.longest_prefix(input, 0);
        assert_eq!((m.code, m.len), (258, 3));
    }

    #[test]
    fn sibling_order_keeps_extensions_apart() {
        let mut trie = PhraseTrie::new();
        for second in [b'M', b'A', b'Z'] {
            let m = trie.longest_prefix(&[b'D', second], 0);
            assert_eq!(m.len, 1);
            trie.insert(m.node, second);
        }
        assert_eq!(trie.longest_prefix(b"DM", 0).code, 257);
        assert_eq!(trie.longest_prefix(b"DA", 0).code, 258);
        assert_eq!(trie.longest_prefix(b"DZ", 0).code, 259);
        // an extension never inserted still falls back to the root
        assert_eq!(trie.longest_prefix(b"DD", 0).len, 1);
    }

    #[test]
    fn match_never_overruns_input() {
        let mut trie = PhraseTrie::new();
        let m = trie.longest_prefix(b"AB", 0);
        trie.insert(m.node, b'B'); // "AB" -> 257
        // only one byte left, so the two-byte phrase cannot match
        let m = trie.longest_prefix(b"XA", 1);
        assert_eq!((m.code, m.len), (u16::from(b'A'), 1));
    }

    #[test]
    fn freezes_at_code_space_limit() {
        let mut trie = PhraseTrie::new();
        let mut parent = trie.longest_prefix(&[0], 0).node;
        for _ in 0..(MAX_CODES - END_OF_STREAM - 1) {
            assert!(trie.has_capacity());
            parent = trie.insert(parent, 0);
        }
        assert!(!trie.has_capacity());

        // the chain built above is the all-zeros phrase, one byte longer
        // per insertion, ending at the last assignable code
        let zeros = vec![0u8; 40_000];
        let m = trie.longest_prefix(&zeros, 0);
        assert_eq!(m.len, 32_511);
        assert_eq!(m.code, MAX_CODES - 1);
    }
}
