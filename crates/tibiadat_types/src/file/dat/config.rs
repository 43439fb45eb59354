//! Decode configuration for `Tibia.dat` files.
//!
//! This module provides the options that control how many objects are read from
//! a file and how the sprite binding index partitions the sprite id space.

use crate::file::DatError;

/// Default width of a sprite binding bucket (sprite ids per bucket)
pub const DEFAULT_BUCKET_SIZE: u32 = 1000;

/// Rule deciding when the per-object loop stops.
///
/// Object ids start at 100, and the header's item "count" in files shipped with
/// the client is really the highest item id. Comparing the id against the summed
/// counts therefore reads exactly the records present in such files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ObjectBound {
	/// Stop once `100 + index` exceeds the summed header counts
	#[default]
	IdOffset,
	/// Stop once `index` reaches the summed header counts
	Count,
}

impl ObjectBound {
	/// Returns `true` while the object at loop index `index` should be read.
	pub fn admits(self, index: u32, num_objects: u32) -> bool {
		match self {
			Self::IdOffset => u64::from(super::constants::FIRST_OBJECT_ID) + u64::from(index)
				<= u64::from(num_objects),
			Self::Count => index < num_objects,
		}
	}
}

/// Configuration for decoding a `Tibia.dat` file and indexing its sprites.
///
/// # Presets
///
/// - `default()`: id-offset loop bound, 1000 sprites per bucket
/// - `counted()`: header counts treated as plain record counts
///
/// # Examples
///
/// ```
/// use tibiadat_types::file::dat::{DecodeConfig, ObjectBound};
///
/// let config = DecodeConfig::default();
/// assert_eq!(config.object_bound, ObjectBound::IdOffset);
///
/// let config = DecodeConfig::counted().with_bucket_size(500);
/// assert_eq!(config.bucket_size, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
	/// Loop termination rule for the object table
	pub object_bound: ObjectBound,
	/// Number of sprite ids covered by each binding bucket
	pub bucket_size: u32,
}

impl Default for DecodeConfig {
	fn default() -> Self {
		Self {
			object_bound: ObjectBound::IdOffset,
			bucket_size: DEFAULT_BUCKET_SIZE,
		}
	}
}

impl DecodeConfig {
	/// Create a new decode configuration.
	///
	/// # Arguments
	/// * `object_bound` - Loop termination rule
	/// * `bucket_size` - Sprite ids per binding bucket
	pub fn new(object_bound: ObjectBound, bucket_size: u32) -> Self {
		Self {
			object_bound,
			bucket_size,
		}
	}

	/// Create a configuration that reads exactly `num_objects` records.
	///
	/// Suitable for hand-built files whose header holds plain counts.
	pub fn counted() -> Self {
		Self {
			object_bound: ObjectBound::Count,
			..Self::default()
		}
	}

	/// Returns a copy with a different bucket size.
	pub fn with_bucket_size(self, bucket_size: u32) -> Self {
		Self {
			bucket_size,
			..self
		}
	}

	/// Checks that the configuration can be used to build an index.
	pub fn validate(&self) -> Result<(), DatError> {
		if self.bucket_size == 0 {
			return Err(DatError::InvalidConfig("bucket size must be greater than zero".into()));
		}
		Ok(())
	}
}
