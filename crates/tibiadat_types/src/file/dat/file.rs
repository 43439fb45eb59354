//! `Tibia.dat` object table and I/O operations.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::file::{DatError, SpriteIndex};

use super::{
	config::DecodeConfig,
	constants::{FIRST_OBJECT_ID, HEADER_SIZE, OUTFIT_SECONDARY_GROUP},
	cursor::Cursor,
	frames::FrameGroup,
	header::Header,
	object::{GameObject, ObjectCategory},
	properties,
};

/// Decoded `Tibia.dat` file: header plus one record per object.
///
/// # Examples
///
/// ```no_run
/// use tibiadat_types::file::dat::File;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dat = File::open("Tibia.dat")?;
///
/// println!("{}", dat.header());
/// for object in dat.iter().filter(|o| o.has_sprites()).take(5) {
///     println!("{object}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	header: Header,
	objects: Vec<GameObject>,
	config: DecodeConfig,
}

impl File {
	/// Opens and decodes a `Tibia.dat` file with the default configuration.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The file cannot be read
	/// - The header is truncated
	/// - An object runs past the end of the file
	/// - A property block contains an unknown tag
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, DatError> {
		Self::open_with_config(path, DecodeConfig::default())
	}

	/// Opens and decodes a `Tibia.dat` file.
	pub fn open_with_config(
		path: impl AsRef<std::path::Path>,
		config: DecodeConfig,
	) -> Result<Self, DatError> {
		let data = std::fs::read(path)?;
		Self::from_bytes_with_config(&data, config)
	}

	/// Decodes a `Tibia.dat` image with the default configuration.
	pub fn from_bytes(data: &[u8]) -> Result<Self, DatError> {
		Self::from_bytes_with_config(data, DecodeConfig::default())
	}

	/// Decodes a `Tibia.dat` image.
	///
	/// Bytes left over after the last object are ignored.
	///
	/// # Errors
	///
	/// See [`File::open`].
	pub fn from_bytes_with_config(data: &[u8], config: DecodeConfig) -> Result<Self, DatError> {
		config.validate()?;
		if data.len() < HEADER_SIZE {
			return Err(DatError::insufficient_data(HEADER_SIZE, data.len()));
		}

		let mut cursor = Cursor::new(data);
		let header = Header::read(&mut cursor)?;
		debug!("{header}");

		let num_objects = header.num_objects();
		let mut objects = Vec::new();
		let mut index = 0u32;
		while index < num_objects && config.object_bound.admits(index, num_objects) {
			let id = FIRST_OBJECT_ID + index;
			objects.push(read_object(&mut cursor, id, &header)?);
			index += 1;
		}

		debug!(
			"decoded {} objects, {} trailing bytes",
			objects.len(),
			cursor.remaining()
		);

		Ok(Self {
			header,
			objects,
			config,
		})
	}

	/// Returns the file header.
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns the configuration the file was decoded with.
	pub fn config(&self) -> &DecodeConfig {
		&self.config
	}

	/// Returns all objects in id order.
	pub fn objects(&self) -> &[GameObject] {
		&self.objects
	}

	/// Consumes the file, returning its object table.
	pub fn into_objects(self) -> Vec<GameObject> {
		self.objects
	}

	/// Returns the object with the given id.
	pub fn get(&self, id: u32) -> Option<&GameObject> {
		let index = id.checked_sub(FIRST_OBJECT_ID)?;
		self.objects.get(index as usize)
	}

	/// Returns an iterator over all objects.
	pub fn iter(&self) -> impl Iterator<Item = &GameObject> {
		self.objects.iter()
	}

	/// Number of decoded objects.
	pub fn len(&self) -> usize {
		self.objects.len()
	}

	/// Returns `true` if no objects were decoded.
	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}

	/// Number of objects in `category`.
	pub fn count_of(&self, category: ObjectCategory) -> usize {
		self.objects.iter().filter(|o| o.category == category).count()
	}

	/// Largest sprite id referenced by any object.
	pub fn max_sprite_id(&self) -> Option<u32> {
		self.objects.iter().filter_map(GameObject::max_sprite_id).max()
	}

	/// Builds the sprite binding index using the configured bucket size.
	pub fn sprite_index(&self) -> Result<SpriteIndex, DatError> {
		SpriteIndex::build(&self.objects, self.config.bucket_size)
	}
}

impl std::fmt::Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "DAT File: {} objects", self.objects.len())
	}
}

impl TryFrom<&[u8]> for File {
	type Error = DatError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}

impl TryFrom<Vec<u8>> for File {
	type Error = DatError;

	fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
		Self::from_bytes(&value)
	}
}

/// Reads one object record at the cursor.
fn read_object(cursor: &mut Cursor<'_>, id: u32, header: &Header) -> Result<GameObject, DatError> {
	let category = ObjectCategory::of(id, header);
	let mut object = GameObject::new(id, category);
	let start = cursor.position();

	let mut has_secondary_group = false;
	if category.is_outfit() {
		properties::skip_outfit_block(cursor)?;
		has_secondary_group = cursor.read_u16_le()? == OUTFIT_SECONDARY_GROUP;
	} else {
		object.market_name = properties::read_property_block(cursor, id)?.market_name;
	}

	let mut sprite_ids = BTreeSet::new();
	object.frame_groups.push(FrameGroup::read(cursor, &mut sprite_ids)?);
	if has_secondary_group {
		// group separator
		cursor.skip(1)?;
		object.frame_groups.push(FrameGroup::read(cursor, &mut sprite_ids)?);
	}
	object.sprite_ids = sprite_ids;

	trace!("{object} [{start}..{}]", cursor.position());
	Ok(object)
}
