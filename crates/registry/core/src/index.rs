//! Centralized registry index infrastructure.
//!
//! Provides [`RegistryBuilder`] and [`RegistryIndex`]. Every ordered,
//! name-unique collection in the descriptor crates uses the same pattern:
//!
//! ```rust,ignore
//! let modules = RegistryBuilder::new("modules")
//!     .push(ModuleDescriptor::new("framebuffer_timing"))
//!     .push(ModuleDescriptor::new("framebuffer"))
//!     .build()?;
//! ```
//!
//! Unlike a sorted lookup table, an index keeps entries in the order they were
//! pushed. That order is the declaration order consumers observe.

use rustc_hash::FxHashMap as HashMap;

use crate::{RegistryEntry, RegistryError};

/// Policy for handling duplicate names during index construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Fail the build with [`RegistryError::DuplicateKey`].
	#[default]
	Reject,
	/// Keep the first entry seen for a name.
	FirstWins,
	/// Replace the first entry's value with the last one seen, keeping the
	/// first entry's position.
	LastWins,
}

/// Frozen collection of registry entries with O(1) lookup by name.
///
/// Built via [`RegistryBuilder`], provides:
/// - O(1) lookup by name via [`get`](Self::get)
/// - Declaration-ordered iteration via [`items`](Self::items)
/// - Length inspection via [`len`](Self::len) and [`is_empty`](Self::is_empty)
#[derive(Debug, Clone)]
pub struct RegistryIndex<T> {
	items: Vec<T>,
	by_name: HashMap<Box<str>, usize>,
}

impl<T> Default for RegistryIndex<T> {
	fn default() -> Self {
		Self {
			items: Vec::new(),
			by_name: HashMap::default(),
		}
	}
}

impl<T: RegistryEntry> RegistryIndex<T> {
	/// Looks up an entry by name.
	#[inline]
	pub fn get(&self, name: &str) -> Option<&T> {
		self.position(name).map(|idx| &self.items[idx])
	}

	/// Returns the declaration position of the entry with `name`.
	#[inline]
	pub fn position(&self, name: &str) -> Option<usize> {
		self.by_name.get(name).copied()
	}

	/// Returns true if an entry named `name` exists.
	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	/// Returns all entries in declaration order.
	#[inline]
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Returns the number of entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if the index contains no entries.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns an iterator over all entries in declaration order.
	#[inline]
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}

	/// Returns an iterator over entry names in declaration order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.items.iter().map(|item| item.name())
	}
}

impl<T: PartialEq> PartialEq for RegistryIndex<T> {
	fn eq(&self, other: &Self) -> bool {
		self.items == other.items
	}
}

impl<T: Eq> Eq for RegistryIndex<T> {}

impl<'a, T: RegistryEntry> IntoIterator for &'a RegistryIndex<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for RegistryIndex<T> {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(&self.items)
	}
}

/// Builder for constructing a [`RegistryIndex`].
///
/// Collects entries in push order, validates names against the configured
/// [`DuplicatePolicy`], and produces the frozen index.
#[derive(Debug, Clone)]
pub struct RegistryBuilder<T> {
	label: &'static str,
	defs: Vec<T>,
	policy: DuplicatePolicy,
}

impl<T: RegistryEntry> RegistryBuilder<T> {
	/// Creates a new builder with the given label for error messages.
	///
	/// The policy defaults to [`DuplicatePolicy::Reject`].
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			defs: Vec::new(),
			policy: DuplicatePolicy::default(),
		}
	}

	/// Sets the duplicate name handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Adds a single entry to the builder.
	pub fn push(mut self, def: T) -> Self {
		self.defs.push(def);
		self
	}

	/// Adds multiple entries to the builder, preserving iteration order.
	pub fn extend<I: IntoIterator<Item = T>>(mut self, defs: I) -> Self {
		self.defs.extend(defs);
		self
	}

	/// Adds a single entry through a mutable reference.
	pub fn push_mut(&mut self, def: T) -> &mut Self {
		self.defs.push(def);
		self
	}

	/// Returns the label used in error messages.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the number of entries pushed so far, duplicates included.
	pub fn len(&self) -> usize {
		self.defs.len()
	}

	/// Returns true if nothing has been pushed.
	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Builds the index, validating names according to policy.
	///
	/// # Errors
	///
	/// Returns [`RegistryError::DuplicateKey`] for the first repeated name when
	/// the policy is [`DuplicatePolicy::Reject`].
	pub fn build(self) -> Result<RegistryIndex<T>, RegistryError> {
		let mut items: Vec<T> = Vec::with_capacity(self.defs.len());
		let mut by_name: HashMap<Box<str>, usize> =
			HashMap::with_capacity_and_hasher(self.defs.len(), Default::default());

		for def in self.defs {
			match by_name.get(def.name()).copied() {
				None => {
					by_name.insert(def.name().into(), items.len());
					items.push(def);
				}
				Some(existing) => match self.policy {
					DuplicatePolicy::Reject => {
						return Err(RegistryError::DuplicateKey {
							label: self.label,
							key: def.name().to_owned(),
						});
					}
					DuplicatePolicy::FirstWins => {
						tracing::warn!(label = self.label, key = def.name(), "duplicate registry key; keeping first");
					}
					DuplicatePolicy::LastWins => {
						tracing::warn!(label = self.label, key = def.name(), "duplicate registry key; replacing first");
						items[existing] = def;
					}
				},
			}
		}

		Ok(RegistryIndex { items, by_name })
	}
}
