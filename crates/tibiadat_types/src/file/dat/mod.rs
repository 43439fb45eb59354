//! `Tibia.dat` file type support.
//!
//! This module decodes the object metadata file shipped with the Tibia client.
//! The file lists every item, outfit, effect and distance effect together with
//! the sprite ids drawn for it. The layout is positional and undocumented, and
//! the decoder only interprets what is needed to walk from one object to the next.
//!
//! # File Structure
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │ Version (4 bytes, LE)           │  0x00-0x03
//! ├─────────────────────────────────┤
//! │ Item count (2 bytes, LE)        │  0x04-0x05
//! │ Outfit count (2 bytes, LE)      │  0x06-0x07
//! │ Effect count (2 bytes, LE)      │  0x08-0x09
//! │ Distance count (2 bytes, LE)    │  0x0A-0x0B
//! ├─────────────────────────────────┤
//! │ Object records                  │  0x0C onwards
//! └─────────────────────────────────┘
//! ```
//!
//! Objects are numbered from 100 in file order. Each record is:
//!
//! - items, effects, distance effects: a tagged property block ending in `0xFF`
//!   (see [`properties`]), then one frame group (see [`frames`])
//! - outfits: a raw block ending in `0xFF`, a u16 group marker, one frame group,
//!   and when the marker is 2 a separator byte and a second frame group
//!
//! # Examples
//!
//! ```no_run
//! use tibiadat_types::file::dat::{DecodeConfig, File};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dat = File::open_with_config("Tibia.dat", DecodeConfig::default())?;
//! let index = dat.sprite_index()?;
//!
//! if let Some(objects) = index.objects_for(2500) {
//!     println!("sprite 2500 is used by {objects:?}");
//! }
//! index.write("sprite-object-bindings.txt")?;
//! # Ok(())
//! # }
//! ```

mod config;
mod constants;
mod cursor;
mod file;
mod header;
mod object;

/// Frame group parsing
pub mod frames;

/// Property block handling
pub mod properties;

pub use self::config::{DEFAULT_BUCKET_SIZE, DecodeConfig, ObjectBound};
pub use self::constants::*;
pub use self::cursor::Cursor;
pub use self::file::File;
pub use self::frames::FrameGroup;
pub use self::header::Header;
pub use self::object::{GameObject, ObjectCategory};
