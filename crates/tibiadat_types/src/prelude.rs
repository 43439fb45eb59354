//! Prelude module for `tibiadat_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use tibiadat_types::prelude::*;
//!
//! let config = DecodeConfig::default();
//! let index = SpriteIndex::new(DEFAULT_BUCKET_SIZE).expect("non-zero bucket size");
//! assert!(index.is_empty());
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Constants
	DEFAULT_BUCKET_SIZE,

	// DAT types
	DatError,
	DatFile,
	DatHeader,
	DecodeConfig,
	FrameGroup,
	GameObject,
	ObjectBound,
	ObjectCategory,
	PathKind,

	// Binding types
	SpriteBinding,
	SpriteIndex,
};

// Export types
#[doc(inline)]
pub use crate::export::{ExportSummary, export_sprites, require_path};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
