//! Constants used in `Tibia.dat` files

/// Size of the file header in bytes (u32 version + four u16 counts)
pub const HEADER_SIZE: usize = 12;

/// Id assigned to the first object in the file
pub const FIRST_OBJECT_ID: u32 = 100;

/// Byte terminating a property block
pub const PROPERTY_BLOCK_END: u8 = 0xFF;

/// Outfit frame-group marker announcing a second frame group
pub const OUTFIT_SECONDARY_GROUP: u16 = 2;

/// Bytes of animation metadata preceding the per-phase durations
pub const ANIMATION_HEADER_SIZE: usize = 6;

/// Bytes per animation phase (minimum and maximum duration, u32 each)
pub const ANIMATION_PHASE_SIZE: usize = 8;

/// Size of a sprite id in bytes
pub const SPRITE_ID_SIZE: usize = 4;

/// Sprite id meaning "no image"
pub const EMPTY_SPRITE_ID: u32 = 0;
