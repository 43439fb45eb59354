//! Frame group parsing.
//!
//! A frame group describes the sprite grid of an object and is followed by the
//! sprite ids filling that grid:
//!
//! ```text
//! Size       Field              Notes
//! ---------  -----------------  ------------------------------------------
//! 1          width
//! 1          height
//! 1          exact size         only when width or height is not 1
//! 1          blend frames       layers
//! 1          pattern x
//! 1          pattern y
//! 1          pattern z
//! 1          animation length   phases
//! 6          animation header   only when animation length > 1
//! 8 × phases phase durations    min/max u32 pairs, only when length > 1
//! 4 × count  sprite ids         count = product of the seven fields above
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use crate::file::DatError;

use super::{
	constants::{ANIMATION_HEADER_SIZE, ANIMATION_PHASE_SIZE, EMPTY_SPRITE_ID, SPRITE_ID_SIZE},
	cursor::Cursor,
};

/// Dimensions of one frame group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameGroup {
	/// Width in tiles
	pub width: u8,
	/// Height in tiles
	pub height: u8,
	/// Number of blended layers
	pub blend_frames: u8,
	/// Pattern repetitions along x
	pub div_x: u8,
	/// Pattern repetitions along y
	pub div_y: u8,
	/// Pattern repetitions along z
	pub div_z: u8,
	/// Number of animation phases
	pub animation_length: u8,
}

impl FrameGroup {
	/// Number of sprite ids stored for this group.
	pub fn frame_count(&self) -> u64 {
		[
			self.width,
			self.height,
			self.blend_frames,
			self.div_x,
			self.div_y,
			self.div_z,
			self.animation_length,
		]
		.into_iter()
		.map(u64::from)
		.product()
	}

	/// Returns `true` if the group is animated.
	pub fn is_animated(&self) -> bool {
		self.animation_length > 1
	}

	/// Reads a frame group and its sprite ids.
	///
	/// Non-zero sprite ids are inserted into `sprite_ids`.
	///
	/// # Errors
	///
	/// Returns [`DatError::OutOfBounds`] if the group or its sprite array does
	/// not fit in the remaining buffer. The sprite array length is checked before
	/// any id is read.
	pub fn read(cursor: &mut Cursor<'_>, sprite_ids: &mut BTreeSet<u32>) -> Result<Self, DatError> {
		let width = cursor.read_u8()?;
		let height = cursor.read_u8()?;
		if width != 1 || height != 1 {
			cursor.skip(1)?;
		}

		let group = Self {
			width,
			height,
			blend_frames: cursor.read_u8()?,
			div_x: cursor.read_u8()?,
			div_y: cursor.read_u8()?,
			div_z: cursor.read_u8()?,
			animation_length: cursor.read_u8()?,
		};

		if group.is_animated() {
			cursor.skip(ANIMATION_HEADER_SIZE)?;
			cursor.skip(group.animation_length as usize * ANIMATION_PHASE_SIZE)?;
		}

		let frame_count = group.frame_count();
		let needed = frame_count.saturating_mul(SPRITE_ID_SIZE as u64);
		if needed > cursor.remaining() as u64 {
			return Err(DatError::OutOfBounds {
				offset: cursor.position(),
				requested: usize::try_from(needed).unwrap_or(usize::MAX),
				len: cursor.position() + cursor.remaining(),
			});
		}

		for _ in 0..frame_count {
			let sprite_id = cursor.read_u32_le()?;
			if sprite_id != EMPTY_SPRITE_ID {
				sprite_ids.insert(sprite_id);
			}
		}

		Ok(group)
	}
}

impl std::fmt::Display for FrameGroup {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}x{} blend {} pattern {}x{}x{} phases {}",
			self.width,
			self.height,
			self.blend_frames,
			self.div_x,
			self.div_y,
			self.div_z,
			self.animation_length
		)
	}
}
