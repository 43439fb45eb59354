//! `tibiadat-rs` decodes the Tibia client's `Tibia.dat` object metadata and maps every
//! sprite back to the items, outfits, effects and distance effects that draw it.
//!
pub use tibiadat_internal::*;
