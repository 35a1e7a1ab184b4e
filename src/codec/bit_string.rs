//! Append-only bit sequence and its front-to-back reader.
//!
//! Bits are packed most-significant-first into bytes, and fields are written
//! big-endian, so the text form of a `BitString` reads exactly like the
//! concatenated binary fields. There is no length prefix or padding marker:
//! the bit length travels alongside the bytes.

use std::fmt;
use std::str::FromStr;

use crate::codec::codec_errors::{CodecError, CodecResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bytes: Vec<u8>,
    len: usize,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from packed bytes; `len` may stop short of the last byte.
    pub fn from_bytes(bytes: &[u8], len: usize) -> Result<Self, String> {
        if len > bytes.len() * 8 {
            return Err(format!(
                "bit length {len} exceeds the {} bits supplied",
                bytes.len() * 8
            ));
        }

        let mut out = Self {
            bytes: bytes[..len.div_ceil(8)].to_vec(),
            len,
        };
        out.clear_tail();
        Ok(out)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed bytes; unused low bits of the last byte are zero.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn push_bit(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Append the low `width` bits of `value`, most significant first.
    pub fn push_field(&mut self, value: u64, width: u32) {
        for shift in (0..width).rev() {
            self.push_bit((value >> shift) & 1 == 1);
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        (index < self.len).then(|| self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
            self.bytes.truncate(len.div_ceil(8));
            self.clear_tail();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).filter_map(move |index| self.get(index))
    }

    pub fn reader(&self) -> BitReader<'_> {
        BitReader {
            bits: self,
            cursor: 0,
        }
    }

    fn clear_tail(&mut self) {
        let used = self.len % 8;
        if used != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= 0xFFu8 << (8 - used);
            }
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut out = BitString::new();
        for ch in text.chars() {
            match ch {
                '0' => out.push_bit(false),
                '1' => out.push_bit(true),
                _ => return Err(format!("Invalid bit character '{ch}'")),
            }
        }
        Ok(out)
    }
}

/// Cursor over a `BitString`, consuming fields front to back.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bits: &'a BitString,
    cursor: usize,
}

impl BitReader<'_> {
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.cursor
    }

    /// Read a big-endian field of `width` bits. A zero-width field reads `0`
    /// without consuming anything.
    pub fn read_field(&mut self, width: u32) -> CodecResult<u64> {
        if (width as usize) > self.remaining() {
            return Err(CodecError::TruncatedInput {
                needed: width,
                remaining: self.remaining(),
            });
        }

        let mut value = 0u64;
        for _ in 0..width {
            let bit = self.bits.get(self.cursor).unwrap_or(false);
            value = (value << 1) | u64::from(bit);
            self.cursor += 1;
        }
        Ok(value)
    }
}
