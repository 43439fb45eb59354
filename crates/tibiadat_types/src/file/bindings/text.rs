//! Text rendering and parsing of the sprite binding index.

use std::{
	fmt::Write as _,
	path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::file::DatError;

use super::SpriteIndex;

impl SpriteIndex {
	/// Renders the index in its text format.
	///
	/// # Panics
	///
	/// Panics if a binding has no object ids, which the index never produces.
	pub fn to_text(&self) -> String {
		let mut out = String::new();
		for binding in self.iter() {
			assert!(
				!binding.object_ids.is_empty(),
				"sprite {} has a binding without objects",
				binding.sprite_id
			);

			// Writing to a String cannot fail
			let _ = write!(out, "{}", binding.sprite_id);
			for object_id in &binding.object_ids {
				let _ = write!(out, " {object_id}");
			}
			out.push('\n');
		}
		out
	}

	/// Writes the text index to `path`.
	///
	/// The text is written to a temporary file next to `path` and renamed into
	/// place, so `path` is either left untouched or holds the complete index.
	pub fn write(&self, path: impl AsRef<Path>) -> Result<(), DatError> {
		let path = path.as_ref();
		let text = self.to_text();
		let tmp = temporary_path(path);

		if let Err(e) = std::fs::write(&tmp, text.as_bytes()) {
			let _ = std::fs::remove_file(&tmp);
			return Err(e.into());
		}
		if let Err(e) = std::fs::rename(&tmp, path) {
			warn!("could not move {} into place: {e}", tmp.display());
			let _ = std::fs::remove_file(&tmp);
			return Err(e.into());
		}

		debug!("wrote {} bytes to {}", text.len(), path.display());
		Ok(())
	}

	/// Reads a text index from `path`.
	pub fn open(path: impl AsRef<Path>, bucket_size: u32) -> Result<Self, DatError> {
		let text = std::fs::read_to_string(path)?;
		Self::from_text(&text, bucket_size)
	}

	/// Parses the text format back into an index.
	///
	/// Blank lines are ignored. Binding order follows the text, so rendering a
	/// parsed index reproduces its input.
	///
	/// # Errors
	///
	/// Returns [`DatError::InvalidBindingLine`] for a line with a non-numeric
	/// token or without object ids.
	pub fn from_text(text: &str, bucket_size: u32) -> Result<Self, DatError> {
		let mut index = Self::new(bucket_size)?;

		for (line_index, line) in text.lines().enumerate() {
			let line_number = line_index + 1;
			let mut tokens = line.split_ascii_whitespace().map(|token| {
				token.parse::<u32>().map_err(|e| DatError::InvalidBindingLine {
					line: line_number,
					reason: format!("'{token}': {e}"),
				})
			});

			let Some(sprite_id) = tokens.next() else {
				continue;
			};
			let sprite_id = sprite_id?;

			let mut has_objects = false;
			for object_id in tokens {
				index.insert(sprite_id, object_id?);
				has_objects = true;
			}
			if !has_objects {
				return Err(DatError::InvalidBindingLine {
					line: line_number,
					reason: format!("sprite {sprite_id} has no objects"),
				});
			}
		}

		Ok(index)
	}
}

fn temporary_path(path: &Path) -> PathBuf {
	let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
	path.with_file_name(format!(".{name}.tmp"))
}
