//! Compile-time constants attached to a module instance.
//!
//! Keys are opaque here: whether `timing_width` means anything is for the
//! hardware compiler to decide.

use std::collections::BTreeMap;

/// Mapping of constant name to integer value, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Constants(BTreeMap<String, i64>);

impl Constants {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Shallow key-wise merge: every key of `explicit` with its value, plus
	/// every key of `defaults` that `explicit` leaves unset.
	pub fn merge(defaults: &Constants, explicit: &Constants) -> Constants {
		let mut merged = defaults.clone();
		merged.0.extend(explicit.0.iter().map(|(k, v)| (k.clone(), *v)));
		merged
	}

	/// Returns `self` with `explicit` applied on top.
	pub fn overridden_by<K, I>(mut self, explicit: I) -> Self
	where
		K: Into<String>,
		I: IntoIterator<Item = (K, i64)>,
	{
		self.extend(explicit);
		self
	}

	/// Returns the value of `key`, if set.
	#[inline]
	pub fn get(&self, key: &str) -> Option<i64> {
		self.0.get(key).copied()
	}

	/// Returns true if `key` is set.
	#[inline]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Sets `key`, returning the previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: i64) -> Option<i64> {
		self.0.insert(key.into(), value)
	}

	/// Returns the number of constants.
	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no constants are set.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates `(name, value)` pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
		self.0.iter().map(|(k, v)| (k.as_str(), *v))
	}

	/// Iterates constant names in key order.
	pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.0.keys().map(String::as_str)
	}
}

impl<K: Into<String>> FromIterator<(K, i64)> for Constants {
	fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
	}
}

impl<K: Into<String>> Extend<(K, i64)> for Constants {
	fn extend<I: IntoIterator<Item = (K, i64)>>(&mut self, iter: I) {
		self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
	}
}

impl<K: Into<String>, const N: usize> From<[(K, i64); N]> for Constants {
	fn from(pairs: [(K, i64); N]) -> Self {
		pairs.into_iter().collect()
	}
}
