//! This crate provides the `Tibia.dat` decoder and sprite binding index for the `tibiadat-rs` project.
//!
//! # Components
//!
//! - **DAT**: Object metadata file listing items, outfits, effects and distance effects
//!   together with the sprite ids drawn for each of them
//! - **Bindings**: Reverse index from sprite id to the objects using it, with a line-based
//!   text format
//! - **Export**: Copies sprite images into one folder per object
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use tibiadat_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dat = DatFile::open("Tibia.dat")?;
//! let index = dat.sprite_index()?;
//! index.write("sprite-object-bindings.txt")?;
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use tibiadat_types::file::{SpriteIndex, dat::{DecodeConfig, File}};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dat = File::open_with_config("Tibia.dat", DecodeConfig::counted())?;
//! let index = SpriteIndex::build(dat.objects(), 1000)?;
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod file;

/// `use tibiadat_types::prelude::*;` to import commonly used items.
pub mod prelude;
