//! Shared registry infrastructure.
//!
//! This crate provides the foundational types the descriptor crates build on:
//! - [`RegistryEntry`]: Trait for accessing the lookup name of an entry
//! - [`RegistryBuilder`]: Collects entries and validates names
//! - [`RegistryIndex`]: Frozen, declaration-ordered collection with O(1) lookup
//! - [`DuplicatePolicy`]: What to do when two entries share a name
//! - [`RegistryError`]: Construction failures

mod error;
mod index;

pub use error::RegistryError;
pub use index::{DuplicatePolicy, RegistryBuilder, RegistryIndex};

/// Trait for accessing the lookup name of a registry entry.
///
/// Names are the only key an index knows about; everything else on the entry
/// is opaque payload.
pub trait RegistryEntry {
	/// Returns the name this entry is indexed under.
	fn name(&self) -> &str;
}
