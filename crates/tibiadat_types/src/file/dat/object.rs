//! Decoded object records.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{constants::FIRST_OBJECT_ID, frames::FrameGroup, header::Header};

/// Category an object id falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectCategory {
	/// Item
	Item,
	/// Creature outfit
	Outfit,
	/// Magic effect
	Effect,
	/// Distance effect (missile)
	Distance,
}

impl ObjectCategory {
	/// Determines the category of `object_id` from the header counts.
	///
	/// Ranges are cumulative: ids up to `num_items` are items, the following
	/// `num_outfits` ids are outfits, then effects, then distance effects.
	pub fn of(object_id: u32, header: &Header) -> Self {
		let items = u32::from(header.num_items);
		let outfits = items + u32::from(header.num_outfits);
		let effects = outfits + u32::from(header.num_effects);

		if object_id <= items {
			Self::Item
		} else if object_id <= outfits {
			Self::Outfit
		} else if object_id <= effects {
			Self::Effect
		} else {
			Self::Distance
		}
	}

	/// Returns `true` for outfits, which use a different block layout.
	pub fn is_outfit(self) -> bool {
		self == Self::Outfit
	}
}

impl std::fmt::Display for ObjectCategory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Item => write!(f, "Item"),
			Self::Outfit => write!(f, "Outfit"),
			Self::Effect => write!(f, "Effect"),
			Self::Distance => write!(f, "Distance"),
		}
	}
}

/// A single object decoded from `Tibia.dat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameObject {
	/// Object id, starting at 100
	pub id: u32,
	/// Object category
	pub category: ObjectCategory,
	/// Market name, for items that carry one
	#[serde(skip_serializing_if = "Option::is_none")]
	pub market_name: Option<String>,
	/// Frame groups in file order
	pub frame_groups: Vec<FrameGroup>,
	/// Distinct non-zero sprite ids, ascending
	pub sprite_ids: BTreeSet<u32>,
}

impl GameObject {
	/// Creates an object with no frame groups and an empty sprite set.
	pub fn new(id: u32, category: ObjectCategory) -> Self {
		Self {
			id,
			category,
			market_name: None,
			frame_groups: Vec::new(),
			sprite_ids: BTreeSet::new(),
		}
	}

	/// Zero-based position of this object in the file.
	pub fn index(&self) -> u32 {
		self.id - FIRST_OBJECT_ID
	}

	/// Largest sprite id used by the object.
	pub fn max_sprite_id(&self) -> Option<u32> {
		self.sprite_ids.last().copied()
	}

	/// Returns `true` if the object references at least one sprite.
	pub fn has_sprites(&self) -> bool {
		!self.sprite_ids.is_empty()
	}
}

impl std::fmt::Display for GameObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}: {} sprites", self.category, self.id, self.sprite_ids.len())?;
		if let Some(name) = &self.market_name {
			write!(f, " ({name})")?;
		}
		Ok(())
	}
}
