//! Sprite image export grouped by object.
//!
//! Given a decoded object table and a directory of sprite images named
//! `<spriteId>.png`, copies every object's sprites into its own folder:
//!
//! ```text
//! out/
//! ├── 100/
//! │   ├── 2500.png
//! │   └── 2501.png
//! └── 101/
//!     └── 2500.png
//! ```
//!
//! Images are copied byte for byte. Sprites missing from the source directory
//! are reported and skipped.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::file::{DatError, GameObject, PathKind};

/// Counters collected during an export run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
	/// Object folders written to
	pub objects: usize,
	/// Sprite files copied
	pub copied: usize,
	/// Destinations that already existed
	pub skipped: usize,
	/// Sprites with no source image
	pub missing: usize,
}

impl std::fmt::Display for ExportSummary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} objects, {} copied, {} already present, {} missing",
			self.objects, self.copied, self.skipped, self.missing
		)
	}
}

/// Path of a sprite image inside a sprite directory.
pub fn sprite_path(dir: &Path, sprite_id: u32) -> PathBuf {
	dir.join(format!("{sprite_id}.png"))
}

/// Checks that `path` exists and is a file or directory as `expected`.
pub fn require_path(path: &Path, expected: PathKind) -> Result<(), DatError> {
	let ok = match expected {
		PathKind::File => path.is_file(),
		PathKind::Directory => path.is_dir(),
	};
	if !ok {
		return Err(DatError::InvalidPath {
			path: path.to_path_buf(),
			expected,
		});
	}
	Ok(())
}

/// Copies each object's sprite images into `out_dir/<objectId>/`.
///
/// Objects without sprites get no folder. Existing destination files are kept.
///
/// # Errors
///
/// Returns [`DatError::InvalidPath`] if `sprite_dir` is not a directory and
/// [`DatError::IOError`] if a folder cannot be created or a copy fails.
pub fn export_sprites(
	objects: &[GameObject],
	sprite_dir: &Path,
	out_dir: &Path,
) -> Result<ExportSummary, DatError> {
	require_path(sprite_dir, PathKind::Directory)?;
	let mut summary = ExportSummary::default();

	for object in objects.iter().filter(|o| o.has_sprites()) {
		let folder = out_dir.join(object.id.to_string());
		std::fs::create_dir_all(&folder)?;
		summary.objects += 1;

		for &sprite_id in &object.sprite_ids {
			let source = sprite_path(sprite_dir, sprite_id);
			let dest = sprite_path(&folder, sprite_id);

			if dest.is_file() {
				summary.skipped += 1;
				continue;
			}
			if !source.is_file() {
				warn!("object {}: sprite {} not found in {}", object.id, sprite_id, sprite_dir.display());
				summary.missing += 1;
				continue;
			}

			std::fs::copy(&source, &dest)?;
			debug!("{}", dest.display());
			summary.copied += 1;
		}
	}

	info!("Exported sprites to '{}': {summary}", out_dir.display());
	Ok(summary)
}
