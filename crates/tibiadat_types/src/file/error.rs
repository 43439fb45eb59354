//! Error types for `Tibia.dat` decoding and sprite binding files.

use std::path::PathBuf;

use thiserror::Error;

/// What a user-supplied path was expected to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
	/// A regular file
	File,
	/// A directory
	Directory,
}

impl std::fmt::Display for PathKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::File => write!(f, "file"),
			Self::Directory => write!(f, "directory"),
		}
	}
}

/// Errors that can occur when decoding `Tibia.dat` or reading/writing binding files
#[derive(Debug, Error)]
pub enum DatError {
	/// Not enough data to parse a fixed-size structure
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// A read would run past the end of the buffer
	#[error("Read of {requested} bytes at offset {offset} exceeds buffer length {len}")]
	OutOfBounds {
		/// Cursor offset at the time of the read
		offset: usize,
		/// Number of bytes requested
		requested: usize,
		/// Total buffer length
		len: usize,
	},

	/// Property tag missing from the dispatch table
	#[error("Unrecognized property tag 0x{tag:02X} at offset {offset} (object {object_id})")]
	UnrecognizedTag {
		/// The tag byte
		tag: u8,
		/// Offset of the tag byte
		offset: usize,
		/// Object whose property block contained the tag
		object_id: u32,
	},

	/// A required input path is missing or of the wrong kind
	#[error("Could not find {expected} '{}'", path.display())]
	InvalidPath {
		/// The offending path
		path: PathBuf,
		/// What the path should have been
		expected: PathKind,
	},

	/// Malformed line in a sprite binding text file
	#[error("Invalid binding on line {line}: {reason}")]
	InvalidBindingLine {
		/// One-based line number
		line: usize,
		/// What was wrong with it
		reason: String,
	},

	/// Rejected decode or index configuration
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl DatError {
	/// Creates an [`DatError::InsufficientData`] error
	pub fn insufficient_data(expected: usize, actual: usize) -> Self {
		Self::InsufficientData {
			expected,
			actual,
		}
	}

	/// Returns `true` for errors caused by malformed or truncated input data
	pub fn is_format_error(&self) -> bool {
		matches!(
			self,
			Self::InsufficientData { .. } | Self::OutOfBounds { .. } | Self::UnrecognizedTag { .. }
		)
	}
}
