//! Hand-built `Tibia.dat` images and scratch directories.

use std::path::{Path, PathBuf};

/// Builds a `Tibia.dat` image record by record.
pub struct DatBuilder {
	counts: [u16; 4],
	records: Vec<u8>,
}

impl DatBuilder {
	/// Header counts in file order: items, outfits, effects, distances.
	pub fn new(items: u16, outfits: u16, effects: u16, distances: u16) -> Self {
		Self {
			counts: [items, outfits, effects, distances],
			records: Vec::new(),
		}
	}

	/// Appends a non-outfit record with the given property bytes and sprites.
	pub fn object(mut self, properties: &[u8], sprites: &[u32]) -> Self {
		self.records.extend_from_slice(properties);
		self.records.push(0xFF);
		push_group(&mut self.records, sprites);
		self
	}

	/// Appends an outfit record, with a second frame group when `secondary` is set.
	pub fn outfit(mut self, primary: &[u32], secondary: Option<&[u32]>) -> Self {
		self.records.push(0xFF);
		let marker: u16 = if secondary.is_some() { 2 } else { 1 };
		self.records.extend_from_slice(&marker.to_le_bytes());
		push_group(&mut self.records, primary);
		if let Some(secondary) = secondary {
			self.records.push(0x01);
			push_group(&mut self.records, secondary);
		}
		self
	}

	/// Appends raw bytes.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.records.extend_from_slice(bytes);
		self
	}

	/// Finishes the image.
	pub fn build(self) -> Vec<u8> {
		let mut data = 0x4A10_5A3Cu32.to_le_bytes().to_vec();
		for count in self.counts {
			data.extend_from_slice(&count.to_le_bytes());
		}
		data.extend(self.records);
		data
	}
}

/// Single-tile group with one blend frame per sprite.
fn push_group(out: &mut Vec<u8>, sprites: &[u32]) {
	out.extend_from_slice(&[1, 1, sprites.len() as u8, 1, 1, 1, 1]);
	for sprite in sprites {
		out.extend_from_slice(&sprite.to_le_bytes());
	}
}

/// Fresh, empty directory unique to this process and `name`.
pub fn scratch_dir(name: &str) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("tibiadat-it-{name}-{}", std::process::id()));
	let _ = std::fs::remove_dir_all(&dir);
	std::fs::create_dir_all(&dir).expect("create scratch dir");
	dir
}

/// Writes `data` to `dir/name` and returns the path.
pub fn write_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
	let path = dir.join(name);
	std::fs::write(&path, data).expect("write fixture");
	path
}
