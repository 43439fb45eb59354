//! `Tibia.dat` file header.

use std::fmt::Formatter;

use serde::Serialize;

use crate::file::DatError;

use super::{constants, cursor::Cursor};

/// Fixed-size header at the start of `Tibia.dat`.
///
/// `num_items` is the highest item id rather than a record count in files shipped
/// by the client, since item ids start at 100.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Header {
	/// Format version / signature, not interpreted
	pub version: u32,
	/// Item count
	pub num_items: u16,
	/// Outfit count
	pub num_outfits: u16,
	/// Effect count
	pub num_effects: u16,
	/// Distance effect (missile) count
	pub num_distances: u16,
}

impl Header {
	/// Parses the header from the start of `data`.
	///
	/// # Errors
	///
	/// Returns [`DatError::InsufficientData`] if `data` is shorter than the header.
	pub fn from_bytes(data: &[u8]) -> Result<Self, DatError> {
		if data.len() < constants::HEADER_SIZE {
			return Err(DatError::insufficient_data(constants::HEADER_SIZE, data.len()));
		}
		Self::read(&mut Cursor::new(data))
	}

	pub(super) fn read(cursor: &mut Cursor<'_>) -> Result<Self, DatError> {
		Ok(Self {
			version: cursor.read_u32_le()?,
			num_items: cursor.read_u16_le()?,
			num_outfits: cursor.read_u16_le()?,
			num_effects: cursor.read_u16_le()?,
			num_distances: cursor.read_u16_le()?,
		})
	}

	/// Serializes the header to bytes
	pub fn to_bytes(self) -> [u8; constants::HEADER_SIZE] {
		let mut buffer = [0u8; constants::HEADER_SIZE];
		buffer[0..4].copy_from_slice(&self.version.to_le_bytes());
		buffer[4..6].copy_from_slice(&self.num_items.to_le_bytes());
		buffer[6..8].copy_from_slice(&self.num_outfits.to_le_bytes());
		buffer[8..10].copy_from_slice(&self.num_effects.to_le_bytes());
		buffer[10..12].copy_from_slice(&self.num_distances.to_le_bytes());
		buffer
	}

	/// Sum of all four category counts.
	pub fn num_objects(&self) -> u32 {
		u32::from(self.num_items)
			+ u32::from(self.num_outfits)
			+ u32::from(self.num_effects)
			+ u32::from(self.num_distances)
	}

	/// Returns the size of the header in bytes
	pub const fn size() -> usize {
		constants::HEADER_SIZE
	}
}

impl std::fmt::Display for Header {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"DAT {{ version: 0x{:08X}, items: {}, outfits: {}, effects: {}, distances: {} }}",
			self.version, self.num_items, self.num_outfits, self.num_effects, self.num_distances
		)
	}
}

impl TryFrom<&[u8]> for Header {
	type Error = DatError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}
