//! Named presets of default constants.
//!
//! A specialization is plain `const` data: a family tag, some documentation and
//! a list of default constants. Instantiating it produces a
//! [`ModuleDescriptor`] whose constants are the defaults overridden key-by-key
//! by whatever the instance sets explicitly.
//!
//! ```rust,ignore
//! pub static FRAMEBUFFER_TIMING: Specialization =
//!     Specialization::new("framebuffer_timing", &[("timing_width", 12)]);
//!
//! let timing = FRAMEBUFFER_TIMING.instantiate("framebuffer_timing");
//! assert_eq!(timing.constant("timing_width"), Some(12));
//! ```

use crate::{Constants, ModuleDescriptor};

/// A named family of module descriptors sharing default constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialization {
	/// Family tag.
	pub name: &'static str,
	/// Documentation for the family's constants. Empty when undocumented.
	pub description: &'static str,
	/// Default constants, in declaration order.
	pub defaults: &'static [(&'static str, i64)],
}

impl Specialization {
	/// Creates an undocumented specialization.
	pub const fn new(name: &'static str, defaults: &'static [(&'static str, i64)]) -> Self {
		Self {
			name,
			description: "",
			defaults,
		}
	}

	/// Attaches documentation text.
	pub const fn with_description(mut self, description: &'static str) -> Self {
		self.description = description;
		self
	}

	/// Returns the defaults as a [`Constants`] mapping.
	pub fn defaults(&self) -> Constants {
		self.defaults.iter().copied().collect()
	}

	/// Returns the default for `key`, if the family defines one.
	///
	/// A key repeated in `defaults` resolves to its last occurrence, as in
	/// [`defaults`](Self::defaults).
	pub fn default_for(&self, key: &str) -> Option<i64> {
		self.defaults.iter().rev().find(|(k, _)| *k == key).map(|(_, v)| *v)
	}

	/// Instantiates the family with its defaults unchanged.
	pub fn instantiate(&self, name: impl Into<String>) -> ModuleDescriptor {
		self.instantiate_with(name, std::iter::empty::<(&str, i64)>())
	}

	/// Instantiates the family, overriding defaults with `explicit`.
	///
	/// Explicit keys always win; keys outside the defaults are added as given.
	pub fn instantiate_with<K, I>(&self, name: impl Into<String>, explicit: I) -> ModuleDescriptor
	where
		K: Into<String>,
		I: IntoIterator<Item = (K, i64)>,
	{
		let constants = self.defaults().overridden_by(explicit);
		let description = (!self.description.is_empty()).then_some(self.description);
		ModuleDescriptor::specialized(name, constants, self.name, description)
	}
}
