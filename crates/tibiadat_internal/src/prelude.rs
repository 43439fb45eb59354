//! Prelude module for `tibiadat_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use tibiadat_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let config = DecodeConfig::counted();
//! assert_eq!(config.object_bound, ObjectBound::Count);
//!
//! let object = GameObject::new(100, ObjectCategory::Item);
//! let index = SpriteIndex::build(&[object], config.bucket_size).unwrap();
//! assert!(index.is_empty());
//! ```

// Re-export everything from tibiadat_types::prelude
#[doc(inline)]
pub use tibiadat_types::prelude::*;

// Re-export the entire tibiadat_types module for advanced usage
#[doc(inline)]
pub use tibiadat_types;
