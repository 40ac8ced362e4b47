//! Bit-level I/O for the bytepress coders.
//!
//! This module provides [`BitReader`] and [`BitWriter`] for reading and
//! writing data at the bit level, which the fixed-width LZW codes,
//! Huffman codewords, and run-length fields in this workspace all require.
//!
//! # Bit Ordering
//!
//! All bytepress stream formats are MSB-first (Most Significant Bit first):
//! the first bit written lands in the most significant position of the
//! first byte. A multi-bit field is emitted from its highest bit down.
//!
//! # Example
//!
//! ```
//! use bytepress_core::bitstream::{BitReader, BitWriter};
//!
//! // Writing bits
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3).unwrap();
//!     writer.write_bits(0b1100, 4).unwrap();
//!     writer.flush().unwrap();
//! }
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! // Reading bits
//! let mut reader = BitReader::new(output.as_slice());
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::error::{Result, StreamError};
use std::io::{self, Read, Write};

/// A bit-level reader that wraps any `Read` implementation.
///
/// `BitReader` maintains an internal buffer so that reads may cross byte
/// boundaries freely. Fields of up to 32 bits are extracted MSB-first.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer; the low `bits_in_buffer` bits are valid, oldest highest.
    buffer: u64,
    /// Number of valid bits in the buffer.
    bits_in_buffer: u8,
    /// Total bits consumed (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Consume this `BitReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Ensure at least `count` bits are available in the buffer.
    #[inline]
    fn fill(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count {
            let mut byte = [0u8; 1];
            loop {
                match self.reader.read(&mut byte) {
                    Ok(0) => {
                        return Err(StreamError::UnexpectedEof {
                            position: self.total_bits_read,
                        });
                    }
                    Ok(_) => break,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(e.into()),
                }
            }
            self.buffer = (self.buffer << 8) | u64::from(byte[0]);
            self.bits_in_buffer += 8;
        }
        Ok(())
    }

    /// Read up to 32 bits from the stream, MSB-first.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of bits to read (0-32)
    ///
    /// # Returns
    ///
    /// The bits read, right-aligned in the returned `u32`.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!(count <= 32, "cannot read more than 32 bits at once");

        if count == 0 {
            return Ok(0);
        }

        self.fill(count)?;

        let shift = self.bits_in_buffer - count;
        let mask = (1u64 << count) - 1;
        let value = ((self.buffer >> shift) & mask) as u32;

        self.bits_in_buffer -= count;
        self.total_bits_read += u64::from(count);

        Ok(value)
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Read eight bits, regardless of byte alignment.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bits(8)? as u8)
    }

    /// Check whether the reader is at end of stream.
    ///
    /// Note: this only checks whether the buffer is empty and attempts one
    /// read; a byte obtained by that read is kept for the next consumer.
    pub fn is_eof(&mut self) -> bool {
        if self.bits_in_buffer > 0 {
            return false;
        }

        let mut byte = [0u8; 1];
        match self.reader.read(&mut byte) {
            Ok(0) => true,
            Ok(_) => {
                self.buffer = (self.buffer << 8) | u64::from(byte[0]);
                self.bits_in_buffer = 8;
                false
            }
            Err(_) => true,
        }
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits in an internal buffer and emits bytes as
/// they complete. Call [`flush`](BitWriter::flush) when done: it zero-pads
/// the final partial byte, which is how every bytepress stream ends.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer; the low `bits_in_buffer` bits are pending, oldest highest.
    buffer: u64,
    /// Number of pending bits in the buffer.
    bits_in_buffer: u8,
    /// Total bits written, padding included.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Consume this `BitWriter`, flushing first, and return the underlying
    /// writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }

    /// Get the total number of bits written so far, padding included.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Emit complete bytes from the top of the buffer.
    #[inline]
    fn drain_bytes(&mut self) -> Result<()> {
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.writer.write_all(&[byte])?;
            self.bits_in_buffer -= 8;
        }
        Ok(())
    }

    /// Write up to 32 bits to the stream, MSB-first.
    ///
    /// # Arguments
    ///
    /// * `value` - The bits to write, right-aligned
    /// * `count` - Number of bits to write (0-32)
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        debug_assert!(count <= 32, "cannot write more than 32 bits at once");

        if count == 0 {
            return Ok(());
        }

        let mask = if count == 32 {
            u32::MAX
        } else {
            (1u32 << count) - 1
        };

        self.buffer = (self.buffer << count) | u64::from(value & mask);
        self.bits_in_buffer += count;
        self.total_bits_written += u64::from(count);

        self.drain_bytes()
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(u32::from(bit), 1)
    }

    /// Write eight bits, regardless of byte alignment.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bits(u32::from(byte), 8)
    }

    /// Zero-pad the final partial byte and flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        if self.bits_in_buffer % 8 != 0 {
            let padding = 8 - self.bits_in_buffer % 8;
            self.write_bits(0, padding)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
