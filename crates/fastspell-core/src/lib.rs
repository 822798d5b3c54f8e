//! Leaf utilities shared by the fastspell crates.
//!
//! - [`cache`] -- fixed-capacity cache with first-in-first-out eviction
//! - [`case`] -- letter-case detection and restoration
//! - [`character`] -- single-character case mapping and digit classes
//! - [`distance`] -- Levenshtein edit distance
//! - [`enums`] -- small shared enums

pub mod cache;
pub mod case;
pub mod character;
pub mod distance;
pub mod enums;

pub use cache::BoundedCache;
pub use distance::levenshtein;
pub use enums::AffixKind;
