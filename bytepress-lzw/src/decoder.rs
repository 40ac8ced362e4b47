//! LZW expansion: rebuild the phrase table in lock step with the encoder.

use crate::error::Result;
use crate::table::CodeTable;
use crate::{CODE_BITS, END_OF_STREAM};
use bytepress_core::BitReader;
use std::io::Read;

/// Expand a packed code stream back into the original bytes.
///
/// Decoding stops at the end-of-stream sentinel; any bytes after it are
/// ignored.
///
/// # Examples
///
/// ```
/// let packed = bytepress_lzw::compress(b"banana band").unwrap();
/// assert_eq!(bytepress_lzw::expand(&packed).unwrap(), b"banana band");
/// ```
pub fn expand(data: &[u8]) -> Result<Vec<u8>> {
    expand_from(data)
}

/// Expand a packed code stream read from `source`.
pub fn expand_from<R: Read>(source: R) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(source);
    let mut table = CodeTable::new();
    let mut output = Vec::new();

    let first = read_code(&mut reader)?;
    if first == END_OF_STREAM {
        return Ok(output);
    }
    let mut previous = table.resolve(first, None)?;
    output.extend_from_slice(&previous);

    loop {
        let code = read_code(&mut reader)?;
        if code == END_OF_STREAM {
            break;
        }
        let current = table.resolve(code, Some(&previous))?;
        output.extend_from_slice(&current);
        // the encoder defined previous-plus-first-byte-of-current one
        // code ago; mirror it now that the first byte is known
        table.extend(&previous, &current);
        previous = current;
    }

    Ok(output)
}

fn read_code<R: Read>(reader: &mut BitReader<R>) -> Result<u16> {
    Ok(reader.read_bits(CODE_BITS)? as u16)
}
