//! Sprite → object binding index.
//!
//! The index inverts the object table of a `Tibia.dat` file: for every sprite id
//! it lists the objects drawing that sprite. Sprite ids are partitioned into
//! fixed-width buckets so that inserting a binding only scans the bindings
//! sharing its bucket.
//!
//! # Text Format
//!
//! One line per binding, buckets in ascending order and bindings in the order
//! they were first seen within a bucket:
//!
//! ```text
//! <spriteId> <objectId> [<objectId> ...]\n
//! ```
//!
//! Object ids on a line are ascending.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//! use tibiadat_types::file::{GameObject, ObjectCategory, SpriteIndex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut object = GameObject::new(100, ObjectCategory::Distance);
//! object.sprite_ids = BTreeSet::from([42]);
//!
//! let index = SpriteIndex::build(&[object], 1000)?;
//! assert_eq!(index.to_text(), "42 100\n");
//! # Ok(())
//! # }
//! ```

mod text;

use std::collections::BTreeSet;

use log::debug;

use crate::file::{DatError, GameObject};

/// One sprite and the objects referencing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteBinding {
	sprite_id: u32,
	object_ids: BTreeSet<u32>,
}

impl SpriteBinding {
	/// Creates a binding referenced by a single object.
	pub fn new(sprite_id: u32, object_id: u32) -> Self {
		Self {
			sprite_id,
			object_ids: BTreeSet::from([object_id]),
		}
	}

	/// Sprite id of this binding.
	pub fn sprite_id(&self) -> u32 {
		self.sprite_id
	}

	/// Object ids referencing the sprite, ascending.
	pub fn object_ids(&self) -> &BTreeSet<u32> {
		&self.object_ids
	}

	fn insert(&mut self, object_id: u32) {
		self.object_ids.insert(object_id);
	}
}

/// Sprite binding index, bucketed by sprite id range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteIndex {
	bucket_size: u32,
	buckets: Vec<Vec<SpriteBinding>>,
}

impl SpriteIndex {
	/// Creates an index with a single empty bucket.
	///
	/// # Errors
	///
	/// Returns [`DatError::InvalidConfig`] if `bucket_size` is zero.
	pub fn new(bucket_size: u32) -> Result<Self, DatError> {
		Self::with_max_sprite_id(0, bucket_size)
	}

	fn with_max_sprite_id(max_sprite_id: u32, bucket_size: u32) -> Result<Self, DatError> {
		if bucket_size == 0 {
			return Err(DatError::InvalidConfig("bucket size must be greater than zero".into()));
		}
		let bucket_count = (max_sprite_id / bucket_size) as usize + 1;
		Ok(Self {
			bucket_size,
			buckets: vec![Vec::new(); bucket_count],
		})
	}

	/// Builds the index for a decoded object table.
	///
	/// Objects are visited in slice order and their sprite ids in ascending order,
	/// which fixes the order of bindings inside each bucket.
	pub fn build(objects: &[GameObject], bucket_size: u32) -> Result<Self, DatError> {
		let max_sprite_id = objects.iter().filter_map(GameObject::max_sprite_id).max().unwrap_or(0);
		let mut index = Self::with_max_sprite_id(max_sprite_id, bucket_size)?;

		for object in objects {
			for &sprite_id in &object.sprite_ids {
				index.insert(sprite_id, object.id);
			}
		}

		debug!(
			"built {} bindings in {} buckets (max sprite id {max_sprite_id})",
			index.len(),
			index.bucket_count()
		);
		Ok(index)
	}

	/// Records that `object_id` references `sprite_id`.
	///
	/// Buckets are appended when `sprite_id` lies past the current range.
	pub fn insert(&mut self, sprite_id: u32, object_id: u32) {
		let bucket_index = self.bucket_index(sprite_id);
		if bucket_index >= self.buckets.len() {
			self.buckets.resize_with(bucket_index + 1, Vec::new);
		}

		let bucket = &mut self.buckets[bucket_index];
		match bucket.iter_mut().find(|binding| binding.sprite_id == sprite_id) {
			Some(binding) => binding.insert(object_id),
			None => bucket.push(SpriteBinding::new(sprite_id, object_id)),
		}
	}

	/// Bucket a sprite id belongs to.
	pub fn bucket_index(&self, sprite_id: u32) -> usize {
		(sprite_id / self.bucket_size) as usize
	}

	/// Width of each bucket.
	pub fn bucket_size(&self) -> u32 {
		self.bucket_size
	}

	/// Number of buckets.
	pub fn bucket_count(&self) -> usize {
		self.buckets.len()
	}

	/// Bindings stored in bucket `index`, in creation order.
	pub fn bucket(&self, index: usize) -> Option<&[SpriteBinding]> {
		self.buckets.get(index).map(Vec::as_slice)
	}

	/// Objects referencing `sprite_id`.
	pub fn objects_for(&self, sprite_id: u32) -> Option<&BTreeSet<u32>> {
		self.bucket(self.bucket_index(sprite_id))?
			.iter()
			.find(|binding| binding.sprite_id == sprite_id)
			.map(SpriteBinding::object_ids)
	}

	/// Iterates over all bindings in output order.
	pub fn iter(&self) -> impl Iterator<Item = &SpriteBinding> {
		self.buckets.iter().flatten()
	}

	/// Total number of bindings.
	pub fn len(&self) -> usize {
		self.buckets.iter().map(Vec::len).sum()
	}

	/// Returns `true` if no sprite is bound.
	pub fn is_empty(&self) -> bool {
		self.buckets.iter().all(Vec::is_empty)
	}
}

impl std::fmt::Display for SpriteIndex {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Sprite Index: {} bindings in {} buckets of {}",
			self.len(),
			self.buckets.len(),
			self.bucket_size
		)
	}
}
