//! This module is separated into its own crate so the public `tibiadat-rs` facade stays thin, and should not be used directly.

/// `use tibiadat_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export tibiadat_types for convenience
pub use tibiadat_types;

// Re-export commonly used types at crate root
pub use tibiadat_types::export::{ExportSummary, export_sprites};
pub use tibiadat_types::file::{
	DatError, DatFile, DatHeader, DecodeConfig, GameObject, ObjectBound, SpriteIndex,
};
