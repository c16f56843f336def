use crate::error::{Error, Result};

/// Reader over an in-memory codec stream
///
/// Fixed-width header fields are read little-endian at byte granularity.
/// Packed code bits are read MSB-first within each byte, and the final byte
/// may carry unused low-order padding bits that are never returned.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Next bit to read, counted from the start of `data`
    bit_pos: usize,
    /// Number of readable bits (excludes trailing padding)
    bit_len: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0, bit_len: data.len() * 8 }
    }

    /// Declare that the last `padding` bits of the stream are unused.
    ///
    /// Padding only ever applies to the final byte, so at most 7 bits.
    pub fn set_padding(&mut self, padding: u8) -> Result<()> {
        if padding > 7 {
            return Err(Error::InvalidPadding(padding));
        }
        let total = self.data.len() * 8;
        self.bit_len = total.saturating_sub(padding as usize);
        Ok(())
    }

    /// Read a single bit, or `None` once the readable bits are exhausted
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.bit_pos >= self.bit_len {
            return None;
        }
        let byte = self.data[self.bit_pos / 8];
        let bit = byte & (0x80 >> (self.bit_pos % 8)) != 0;
        self.bit_pos += 1;
        Some(bit)
    }

    /// Discard remaining bits in current byte, align to next byte boundary
    pub fn align_to_byte(&mut self) {
        self.bit_pos = (self.bit_pos + 7) / 8 * 8;
    }

    /// Read a complete byte (aligns to byte boundary first)
    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    /// Read a 32-bit little-endian value (aligns to byte boundary first)
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a 64-bit little-endian value (aligns to byte boundary first)
    pub fn read_u64_le(&mut self) -> Result<u64> {
        let bytes = self.read_bytes(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(buf))
    }

    /// Borrow the next `n` bytes (aligns to byte boundary first)
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.align_to_byte();
        let start = self.bit_pos / 8;
        let end = start.checked_add(n).ok_or(Error::UnexpectedEof)?;
        if end > self.data.len() {
            return Err(Error::UnexpectedEof);
        }
        self.bit_pos = end * 8;
        Ok(&self.data[start..end])
    }

    /// Bytes not yet consumed, starting at the next byte boundary
    pub fn remaining_bytes(&self) -> &'a [u8] {
        let start = ((self.bit_pos + 7) / 8).min(self.data.len());
        &self.data[start..]
    }

    /// Readable bits left before the padding
    pub fn bits_remaining(&self) -> usize {
        self.bit_len.saturating_sub(self.bit_pos)
    }
}
