//! Byte cursor for parsing and building binary save payloads.
//!
//! This module provides `ByteCursor`, a position-tracking reader/writer for the
//! binary record format used inside decrypted cloud saves. It consolidates the
//! varint, string, and splice conventions shared by every save payload.

use crate::error::{Error, Result};

/// Largest value a two-byte varint can carry (7 bits per byte).
pub const VARINT_MAX: u32 = 0x3FFF;

/// A position-tracking reader/writer over an owned byte buffer.
///
/// `ByteCursor` wraps a `Vec<u8>` and maintains a current position, allowing
/// sequential reads and in-place writes of the primitive types used by the
/// save format. Reads never move the position past the end of the buffer;
/// writes overwrite in place and grow the buffer when they run past the end.
///
/// # Example
///
/// ```
/// use cadenza_core::cursor::ByteCursor;
///
/// let mut cur = ByteCursor::new(vec![0x78, 0x56, 0x34, 0x12]);
///
/// let value = cur.read_u32().unwrap();
/// assert_eq!(value, 0x12345678);
/// assert_eq!(cur.position(), 4);
/// ```
pub struct ByteCursor {
    data: Vec<u8>,
    pos: usize,
}

impl ByteCursor {
    /// Creates a new `ByteCursor` owning the given bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a cursor starting at the given position.
    pub fn with_position(data: Vec<u8>, pos: usize) -> Self {
        Self { data, pos }
    }

    /// Creates a cursor from a hex dump (two hex digits per byte).
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self::new(hex::decode(s)?))
    }

    /// Returns the current position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of bytes remaining from the current position.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Consumes the cursor and returns the underlying buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Returns the underlying buffer as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Reads the specified number of bytes and advances the position.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not enough bytes remaining.
    pub fn read_bytes(&mut self, count: usize) -> Result<&[u8]> {
        let end = self.pos.checked_add(count).ok_or(Error::OutOfBounds {
            position: self.pos,
            wanted: count,
            len: self.data.len(),
        })?;

        if end > self.data.len() {
            return Err(Error::OutOfBounds {
                position: self.pos,
                wanted: count,
                len: self.data.len(),
            });
        }

        let start = self.pos;
        self.pos = end;
        Ok(&self.data[start..end])
    }

    /// Reads an unsigned 8-bit integer and advances the position.
    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    /// Reads an unsigned 16-bit integer (little-endian) and advances the position.
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Reads an unsigned 32-bit integer (little-endian) and advances the position.
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a 32-bit float (little-endian) and advances the position.
    pub fn read_f32(&mut self) -> Result<f32> {
        let bytes = self.read_bytes(4)?;
        Ok(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a varint and advances the position.
    ///
    /// The save format uses a two-byte-max varint: a first byte with the high
    /// bit set means a second byte follows, and the value is
    /// `(b0 & 0x7F) ^ (b1 << 7)`. The XOR is bit-exact with the game's
    /// decoder; it coincides with OR only while the second byte stays below
    /// 0x80.
    pub fn read_varint(&mut self) -> Result<u32> {
        let first = self.read_u8()?;
        if first > 127 {
            let second = self.read_u8()?;
            Ok((u32::from(first) & 0x7F) ^ (u32::from(second) << 7))
        } else {
            Ok(u32::from(first))
        }
    }

    /// Skips `count` varints, honoring each one's encoded width.
    pub fn skip_varint(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            let first = self.read_u8()?;
            if first > 127 {
                self.read_u8()?;
            }
        }
        Ok(())
    }

    /// Reads a varint-length-prefixed UTF-8 string and advances the position.
    ///
    /// Note the asymmetry with [`write_string`](Self::write_string): the
    /// game's reader takes a varint length, its writer emits a single length
    /// byte. Both conventions agree for strings under 128 bytes.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_varint()? as usize;
        let offset = self.pos;
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| Error::InvalidUtf8 { offset })
    }

    /// Reads a byte-length-prefixed blob and advances the position.
    pub fn read_byte_prefixed_bytes(&mut self) -> Result<Vec<u8>> {
        let len = self.read_u8()? as usize;
        Ok(self.read_bytes(len)?.to_vec())
    }

    /// Writes raw bytes at the current position, growing the buffer if the
    /// write runs past the end.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    /// Writes an unsigned 8-bit integer at the current position.
    pub fn write_u8(&mut self, value: u8) {
        self.write_bytes(&[value]);
    }

    /// Writes an unsigned 16-bit integer (little-endian) at the current position.
    pub fn write_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes an unsigned 32-bit integer (little-endian) at the current position.
    pub fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes a 32-bit float (little-endian) at the current position.
    pub fn write_f32(&mut self, value: f32) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes a varint at the current position.
    ///
    /// Values up to 127 encode in one byte, values up to [`VARINT_MAX`] in
    /// two. Larger values cannot be carried by the format.
    pub fn write_varint(&mut self, value: u32) -> Result<()> {
        if value <= 127 {
            self.write_u8(value as u8);
        } else if value <= VARINT_MAX {
            self.write_bytes(&[(value & 0x7F) as u8 | 0x80, (value >> 7) as u8]);
        } else {
            return Err(Error::VarIntOverflow { value });
        }
        Ok(())
    }

    /// Writes a UTF-8 string with a single length byte.
    ///
    /// This is the game writer's convention; see the note on
    /// [`read_string`](Self::read_string). Payloads over 255 bytes do not fit
    /// the length byte.
    pub fn write_string(&mut self, s: &str) -> Result<()> {
        let bytes = s.as_bytes();
        if bytes.len() > 255 {
            return Err(Error::PayloadTooLarge { len: bytes.len() });
        }
        self.write_u8(bytes.len() as u8);
        self.write_bytes(bytes);
        Ok(())
    }

    /// Splices bytes in at the current position, shifting the tail right.
    /// The position is unchanged.
    pub fn insert_bytes(&mut self, bytes: &[u8]) {
        self.data
            .splice(self.pos..self.pos, bytes.iter().copied());
    }

    /// Removes `len` bytes at the current position and splices in the
    /// replacement. The position is unchanged.
    pub fn replace_bytes(&mut self, len: usize, bytes: &[u8]) {
        let end = self.pos.saturating_add(len).min(self.data.len());
        self.data.splice(self.pos..end, bytes.iter().copied());
    }
}
