//! Property block handling.
//!
//! Every item, effect and distance effect starts with a run of tagged
//! attributes terminated by [`PROPERTY_BLOCK_END`]. Only the length of each
//! attribute matters for reaching the frame data, so most are skipped outright.
//!
//! ```text
//! Tag   Payload
//! ----  ---------------------------------------------------------------
//! 0x00  2 bytes
//! 0x08  2 bytes
//! 0x09  2 bytes
//! 0x16  4 bytes (two u16 fields)
//! 0x19  4 bytes
//! 0x1A  2 bytes
//! 0x1D  2 bytes
//! 0x1E  2 bytes
//! 0x21  2 bytes
//! 0x22  6 bytes, u16 name length N, N name bytes, 4 bytes (market data)
//! 0x23  2 bytes
//! 0xFF  end of block
//! ```
//!
//! Outfits carry no tags the decoder understands; their block is consumed raw up
//! to and including the first `0xFF`.

use log::trace;

use crate::file::DatError;

use super::{constants::PROPERTY_BLOCK_END, cursor::Cursor};

/// Market attribute tag
pub const TAG_MARKET: u8 = 0x22;

/// Bytes between the market tag and its name length field
const MARKET_PREFIX_SIZE: usize = 6;

/// Bytes after the market name
const MARKET_SUFFIX_SIZE: usize = 4;

/// How many bytes follow a property tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipRule {
	/// Fixed-size payload
	Fixed(usize),
	/// Market payload with an embedded length-prefixed name
	Market,
}

/// Looks up the payload rule for a property tag.
///
/// Returns `None` for tags outside the known table.
pub fn skip_rule(tag: u8) -> Option<SkipRule> {
	match tag {
		0x00 | 0x08 | 0x09 | 0x1A | 0x1D | 0x1E | 0x21 | 0x23 => Some(SkipRule::Fixed(2)),
		0x16 | 0x19 => Some(SkipRule::Fixed(4)),
		TAG_MARKET => Some(SkipRule::Market),
		_ => None,
	}
}

/// Attributes kept from a property block.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyBlock {
	/// Name stored in the market attribute, if present
	pub market_name: Option<String>,
}

/// Consumes a tagged property block, including its terminator.
///
/// # Errors
///
/// Fails with [`DatError::UnrecognizedTag`] on a tag missing from the table and
/// with [`DatError::OutOfBounds`] if the block runs past the end of the buffer.
pub fn read_property_block(
	cursor: &mut Cursor<'_>,
	object_id: u32,
) -> Result<PropertyBlock, DatError> {
	let mut block = PropertyBlock::default();

	loop {
		let offset = cursor.position();
		let tag = cursor.read_u8()?;
		if tag == PROPERTY_BLOCK_END {
			return Ok(block);
		}

		match skip_rule(tag) {
			Some(SkipRule::Fixed(n)) => cursor.skip(n)?,
			Some(SkipRule::Market) => {
				cursor.skip(MARKET_PREFIX_SIZE)?;
				let name_len = cursor.read_u16_le()? as usize;
				let name = cursor.read_bytes(name_len)?;
				cursor.skip(MARKET_SUFFIX_SIZE)?;

				let (decoded, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(name);
				block.market_name = Some(decoded.into_owned());
			}
			None => {
				return Err(DatError::UnrecognizedTag {
					tag,
					offset,
					object_id,
				});
			}
		}
		trace!("object {object_id}: tag 0x{tag:02X} at {offset}");
	}
}

/// Consumes an outfit's property block without interpreting it.
pub fn skip_outfit_block(cursor: &mut Cursor<'_>) -> Result<(), DatError> {
	while cursor.read_u8()? != PROPERTY_BLOCK_END {}
	Ok(())
}
