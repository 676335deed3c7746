//! Library manifest registry.
//!
//! Any crate can declare a library with [`register_library!`](crate::register_library),
//! which submits a [`ManifestReg`] via `inventory::submit!`. On first access the
//! global registry collects every submission, orders them by declaration site,
//! builds each manifest and freezes the result. Adding a library never touches
//! this module.
//!
//! Drivers that prefer an explicit list can assemble a [`Registry`] directly
//! with [`Registry::from_manifests`].

use std::fmt;
use std::sync::LazyLock;

use cdl_registry_core::{DuplicatePolicy, RegistryBuilder, RegistryError, RegistryIndex};

use crate::{DescError, LibraryManifest, ModuleDescriptor};

/// Source location of a [`register_library!`](crate::register_library) invocation.
///
/// Ordering is by crate, then file, then line and column, so registrations in
/// one file sort in textual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeclLocation {
	/// Crate that declared the library.
	pub crate_name: &'static str,
	pub file: &'static str,
	pub line: u32,
	pub column: u32,
}

impl fmt::Display for DeclLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}:{}:{}", self.crate_name, self.file, self.line, self.column)
	}
}

/// Static registration entry collected via `inventory`.
#[derive(Debug)]
pub struct ManifestReg {
	/// Where the library was declared.
	pub location: DeclLocation,
	/// Builds the manifest. Called once, during discovery.
	pub build: fn() -> Result<LibraryManifest, DescError>,
}

inventory::collect!(ManifestReg);

/// Frozen, declaration-ordered set of library manifests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Registry {
	manifests: RegistryIndex<LibraryManifest>,
}

impl Registry {
	/// Starts an explicit registry.
	pub fn builder() -> ManifestRegistryBuilder {
		ManifestRegistryBuilder {
			inner: RegistryBuilder::new("library manifests"),
		}
	}

	/// Builds a registry from manifests in the given order.
	///
	/// # Errors
	///
	/// Returns [`DescError::DuplicateManifestName`] if two manifests share a name.
	pub fn from_manifests<I: IntoIterator<Item = LibraryManifest>>(manifests: I) -> Result<Self, DescError> {
		Self::builder().extend(manifests).build()
	}

	/// Builds a registry from registration entries, ordered by [`DeclLocation`].
	///
	/// # Errors
	///
	/// Fails with the first error raised by a build function, or with
	/// [`DescError::DuplicateManifestName`].
	pub fn discover<'a, I>(regs: I) -> Result<Self, DescError>
	where
		I: IntoIterator<Item = &'a ManifestReg>,
	{
		let mut regs: Vec<&ManifestReg> = regs.into_iter().collect();
		regs.sort_by_key(|reg| reg.location);
		tracing::debug!(count = regs.len(), "discovering library manifests");

		let mut builder = Self::builder();
		for reg in regs {
			let manifest = (reg.build)()?;
			tracing::trace!(
				manifest = manifest.name(),
				location = %reg.location,
				modules = manifest.modules().len(),
				"registered library manifest"
			);
			builder.push_mut(manifest);
		}
		builder.build()
	}

	/// Builds a registry from every `register_library!` linked into the process.
	///
	/// # Errors
	///
	/// See [`Registry::discover`].
	pub fn collect() -> Result<Self, DescError> {
		Self::discover(inventory::iter::<ManifestReg>)
	}

	/// Looks up a manifest by name.
	pub fn get(&self, name: &str) -> Option<&LibraryManifest> {
		self.manifests.get(name)
	}

	/// All manifests in declaration order.
	pub fn manifests(&self) -> &[LibraryManifest] {
		self.manifests.items()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, LibraryManifest> {
		self.manifests.iter()
	}

	/// Manifest names in declaration order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.manifests.names()
	}

	pub fn len(&self) -> usize {
		self.manifests.len()
	}

	pub fn is_empty(&self) -> bool {
		self.manifests.is_empty()
	}

	/// Every module paired with its manifest, manifest by manifest, each in
	/// declaration order.
	pub fn build_order(&self) -> impl Iterator<Item = (&LibraryManifest, &ModuleDescriptor)> + '_ {
		self.manifests
			.iter()
			.flat_map(|manifest| manifest.modules().iter().map(move |module| (manifest, module)))
	}
}

impl<'a> IntoIterator for &'a Registry {
	type Item = &'a LibraryManifest;
	type IntoIter = std::slice::Iter<'a, LibraryManifest>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Builder for an explicit [`Registry`].
#[derive(Debug, Clone)]
#[must_use]
pub struct ManifestRegistryBuilder {
	inner: RegistryBuilder<LibraryManifest>,
}

impl ManifestRegistryBuilder {
	/// Sets the duplicate manifest name policy. Defaults to [`DuplicatePolicy::Reject`].
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.inner = self.inner.duplicate_policy(policy);
		self
	}

	pub fn push(mut self, manifest: LibraryManifest) -> Self {
		self.inner = self.inner.push(manifest);
		self
	}

	pub fn extend<I: IntoIterator<Item = LibraryManifest>>(mut self, manifests: I) -> Self {
		self.inner = self.inner.extend(manifests);
		self
	}

	fn push_mut(&mut self, manifest: LibraryManifest) {
		self.inner.push_mut(manifest);
	}

	/// Freezes the registry.
	///
	/// # Errors
	///
	/// Returns [`DescError::DuplicateManifestName`] under [`DuplicatePolicy::Reject`].
	pub fn build(self) -> Result<Registry, DescError> {
		let manifests = self.inner.build().map_err(|err| match err {
			RegistryError::DuplicateKey { key, .. } => DescError::DuplicateManifestName { manifest: key },
		})?;
		Ok(Registry { manifests })
	}
}

static REGISTRY: LazyLock<Result<Registry, DescError>> = LazyLock::new(|| {
	let result = Registry::collect();
	match &result {
		Ok(registry) => tracing::debug!(
			manifests = registry.len(),
			modules = registry.build_order().count(),
			"library registry ready"
		),
		Err(err) => tracing::error!(error = %err, "library manifest discovery failed"),
	}
	result
});

/// The process-wide registry, built from all registered libraries on first call.
///
/// # Errors
///
/// Returns the construction error if any registered library failed to build.
/// The outcome is computed once; every call observes the same result.
pub fn registry() -> Result<&'static Registry, DescError> {
	REGISTRY.as_ref().map_err(Clone::clone)
}

/// Every registered library manifest, in declaration order.
///
/// # Errors
///
/// See [`registry`].
pub fn all_manifests() -> Result<&'static [LibraryManifest], DescError> {
	registry().map(Registry::manifests)
}

#[cfg(test)]
mod tests;
