//! Bounds-checked sequential reader over an in-memory `Tibia.dat` buffer.

use crate::file::DatError;

/// Little-endian reader that never reads past the end of its buffer.
///
/// A failed read leaves the position untouched.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Creates a cursor positioned at the start of `data`.
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			pos: 0,
		}
	}

	/// Current offset from the start of the buffer.
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Number of unread bytes.
	pub fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	/// Returns `true` once every byte has been consumed.
	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	fn ensure(&self, requested: usize) -> Result<(), DatError> {
		if requested > self.remaining() {
			return Err(DatError::OutOfBounds {
				offset: self.pos,
				requested,
				len: self.data.len(),
			});
		}
		Ok(())
	}

	/// Returns the byte at the current offset without advancing.
	pub fn peek(&self) -> Result<u8, DatError> {
		self.ensure(1)?;
		Ok(self.data[self.pos])
	}

	/// Reads `n` bytes as a slice of the underlying buffer.
	pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DatError> {
		self.ensure(n)?;
		let bytes = &self.data[self.pos..self.pos + n];
		self.pos += n;
		Ok(bytes)
	}

	/// Advances by `n` bytes without interpreting them.
	pub fn skip(&mut self, n: usize) -> Result<(), DatError> {
		self.ensure(n)?;
		self.pos += n;
		Ok(())
	}

	/// Reads one byte.
	pub fn read_u8(&mut self) -> Result<u8, DatError> {
		let byte = self.peek()?;
		self.pos += 1;
		Ok(byte)
	}

	/// Reads a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16, DatError> {
		let bytes = self.read_bytes(2)?;
		Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
	}

	/// Reads a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32, DatError> {
		let bytes = self.read_bytes(4)?;
		Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
	}
}
