//! LZW compression: greedy longest-match over the phrase trie.

use crate::trie::PhraseTrie;
use crate::{CODE_BITS, END_OF_STREAM};
use crate::error::Result;
use bytepress_core::BitWriter;
use std::io::Write;

/// Compress `input`, returning the packed code stream.
///
/// # Examples
///
/// ```
/// let data = b"TOBEORNOTTOBEORTOBEORNOT";
/// let packed = bytepress_lzw::compress(data).unwrap();
/// let restored = bytepress_lzw::expand(&packed).unwrap();
/// assert_eq!(restored, data);
/// ```
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    compress_to(input, &mut out)?;
    Ok(out)
}

/// Compress `input` into `sink`.
///
/// Emits one 15-bit code per longest match, then the end-of-stream
/// sentinel, and flushes so the final partial byte is zero padded.
pub fn compress_to<W: Write>(input: &[u8], sink: W) -> Result<()> {
    let mut writer = BitWriter::new(sink);
    let mut trie = PhraseTrie::new();

    let mut pos = 0;
    while pos < input.len() {
        let matched = trie.longest_prefix(input, pos);
        writer.write_bits(u32::from(matched.code), CODE_BITS)?;
        pos += usize::from(matched.len);
        // define matched-phrase-plus-next-byte, one step ahead of the decoder
        if trie.has_capacity() && pos < input.len() {
            trie.insert(matched.node, input[pos]);
        }
    }

    writer.write_bits(u32::from(END_OF_STREAM), CODE_BITS)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytepress_core::BitReader;

    fn codes_of(bytes: &[u8], count: usize) -> Vec<u16> {
        let mut reader = BitReader::new(bytes);
        (0..count)
            .map(|_| reader.read_bits(CODE_BITS).unwrap() as u16)
            .collect()
    }

    #[test]
    fn empty_input_is_just_the_sentinel() {
        // 15 bits of 256, one zero pad bit
        assert_eq!(compress(b"").unwrap(), vec![0x02, 0x00]);
    }

    #[test]
    fn single_byte_wire_layout() {
        // codes 88 and 256, two zero pad bits
        assert_eq!(compress(b"X").unwrap(), vec![0x00, 0xB0, 0x04, 0x00]);
    }

    #[test]
    fn run_of_one_byte_reuses_fresh_code() {
        let packed = compress(b"AAAAA").unwrap();
        // "A", then "AA" twice via the code defined one step earlier
        assert_eq!(codes_of(&packed, 4), vec![65, 257, 257, 256]);
    }

    #[test]
    fn distinct_bytes_stay_literal() {
        let packed = compress(b"ABC").unwrap();
        assert_eq!(codes_of(&packed, 4), vec![65, 66, 67, 256]);
    }

    #[test]
    fn compress_to_accepts_any_writer() {
        let mut sink = Vec::new();
        compress_to(b"X", &mut sink).unwrap();
        assert_eq!(sink, compress(b"X").unwrap());
    }
}
