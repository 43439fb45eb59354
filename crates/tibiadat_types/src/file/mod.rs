//! File type support for `tibiadat-rs` project.

mod error;

pub mod bindings;
pub mod dat;

// Re-export unified error type
pub use error::{DatError, PathKind};

// Re-export main file types
pub use bindings::{SpriteBinding, SpriteIndex};
pub use dat::{
	DEFAULT_BUCKET_SIZE, DecodeConfig, File as DatFile, FrameGroup, GameObject, Header as DatHeader,
	ObjectBound, ObjectCategory,
};
