//! Decode-side dictionary: a flat code-to-phrase table.
//!
//! Codes are assigned densely from 257 upward, so the table is a plain
//! vector indexed by code. Slot 256 is reserved for the end-of-stream
//! sentinel and never resolves to a phrase.

use crate::error::{LzwError, Result};
use crate::{END_OF_STREAM, MAX_CODES, RADIX};

/// The decoder's phrase table.
#[derive(Debug)]
pub(crate) struct CodeTable {
    entries: Vec<Vec<u8>>,
}

impl CodeTable {
    /// Seed the table with the 256 single-byte phrases and the reserved
    /// sentinel slot.
    pub(crate) fn new() -> Self {
        let mut entries = Vec::with_capacity(usize::from(MAX_CODES));
        for byte in 0..RADIX {
            entries.push(vec![byte as u8]);
        }
        entries.push(Vec::new()); // sentinel slot, never resolved
        Self { entries }
    }

    /// The code the encoder will assign next.
    pub(crate) fn next_code(&self) -> u16 {
        self.entries.len() as u16
    }

    /// Look up the phrase for `code`. A code exactly one ahead of the
    /// table is the self-referential case: the phrase is the previous
    /// phrase extended by its own first byte. Anything further ahead,
    /// or the sentinel, is a corrupt stream.
    pub(crate) fn resolve(&self, code: u16, previous: Option<&[u8]>) -> Result<Vec<u8>> {
        if code == END_OF_STREAM {
            return Err(LzwError::InvalidCode(code));
        }
        if usize::from(code) < self.entries.len() {
            return Ok(self.entries[usize::from(code)].clone());
        }
        match previous {
            Some(prev) if code == self.next_code() && code < MAX_CODES && !prev.is_empty() => {
                let mut phrase = Vec::with_capacity(prev.len() + 1);
                phrase.extend_from_slice(prev);
                phrase.push(prev[0]);
                Ok(phrase)
            }
            _ => Err(LzwError::InvalidCode(code)),
        }
    }

    /// Record the phrase the encoder defined one step ago: the previous
    /// phrase plus the first byte of the current one. Silently a no-op
    /// once the code space is exhausted.
    pub(crate) fn extend(&mut self, previous: &[u8], current: &[u8]) {
        debug_assert!(!current.is_empty());
        if self.entries.len() < usize::from(MAX_CODES) {
            let mut phrase = Vec::with_capacity(previous.len() + 1);
            phrase.extend_from_slice(previous);
            phrase.push(current[0]);
            self.entries.push(phrase);
        }
    }
}
