//! Library manifests.
//!
//! A manifest groups the modules of one CDL library with the directories they
//! live in and the external libraries they link against. Manifests are purely
//! descriptive: nothing here checks that a directory or dependency exists.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use cdl_registry_core::{RegistryBuilder, RegistryEntry, RegistryError, RegistryIndex};

use crate::{DescError, ModuleDescriptor};

/// Directories a library's files live in, relative to the library root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LibraryDirs {
	/// CDL sources.
	pub source: PathBuf,
	/// C models.
	pub c_model: PathBuf,
	/// Test-bench CDL sources.
	pub test_bench: PathBuf,
	/// Include files.
	pub include: PathBuf,
}

impl Default for LibraryDirs {
	/// `cdl`, `cmodel`, `tb_cdl` and `cdl` for source, C model, test bench and
	/// include respectively.
	fn default() -> Self {
		Self {
			source: PathBuf::from("cdl"),
			c_model: PathBuf::from("cmodel"),
			test_bench: PathBuf::from("tb_cdl"),
			include: PathBuf::from("cdl"),
		}
	}
}

/// A named CDL library: its directories, dependencies and ordered modules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LibraryManifest {
	name: String,
	dirs: LibraryDirs,
	library_deps: BTreeSet<String>,
	modules: RegistryIndex<ModuleDescriptor>,
}

impl LibraryManifest {
	/// Starts a manifest named `name` with the default [`LibraryDirs`].
	pub fn builder(name: impl Into<String>) -> ManifestBuilder {
		ManifestBuilder {
			name: name.into(),
			dirs: LibraryDirs::default(),
			library_deps: BTreeSet::new(),
			modules: Vec::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn dirs(&self) -> &LibraryDirs {
		&self.dirs
	}

	pub fn source_dir(&self) -> &Path {
		&self.dirs.source
	}

	pub fn c_model_dir(&self) -> &Path {
		&self.dirs.c_model
	}

	pub fn test_bench_dir(&self) -> &Path {
		&self.dirs.test_bench
	}

	pub fn include_dir(&self) -> &Path {
		&self.dirs.include
	}

	/// External library names this library requires.
	pub fn library_deps(&self) -> &BTreeSet<String> {
		&self.library_deps
	}

	/// Returns true if `library` is among the declared dependencies.
	pub fn depends_on(&self, library: &str) -> bool {
		self.library_deps.contains(library)
	}

	/// Modules in declaration order.
	pub fn modules(&self) -> &[ModuleDescriptor] {
		self.modules.items()
	}

	/// Looks up a module by name.
	pub fn module(&self, name: &str) -> Option<&ModuleDescriptor> {
		self.modules.get(name)
	}

	/// Module names in declaration order.
	pub fn module_names(&self) -> impl Iterator<Item = &str> + '_ {
		self.modules.names()
	}
}

impl RegistryEntry for LibraryManifest {
	fn name(&self) -> &str {
		&self.name
	}
}

/// Builder for [`LibraryManifest`].
///
/// Modules are kept in the order they are appended; that order is what the
/// build driver sees.
#[derive(Debug, Clone)]
#[must_use]
pub struct ManifestBuilder {
	name: String,
	dirs: LibraryDirs,
	library_deps: BTreeSet<String>,
	modules: Vec<ModuleDescriptor>,
}

impl ManifestBuilder {
	pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.dirs.source = dir.into();
		self
	}

	pub fn c_model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.dirs.c_model = dir.into();
		self
	}

	pub fn test_bench_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.dirs.test_bench = dir.into();
		self
	}

	pub fn include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.dirs.include = dir.into();
		self
	}

	/// Replaces all four directories at once.
	pub fn dirs(mut self, dirs: LibraryDirs) -> Self {
		self.dirs = dirs;
		self
	}

	/// Declares a dependency on an external library. Repeats collapse.
	pub fn library(mut self, library: impl Into<String>) -> Self {
		self.library_deps.insert(library.into());
		self
	}

	/// Declares several external library dependencies.
	pub fn libraries<S, I>(mut self, libraries: I) -> Self
	where
		S: Into<String>,
		I: IntoIterator<Item = S>,
	{
		self.library_deps.extend(libraries.into_iter().map(Into::into));
		self
	}

	/// Appends a module.
	pub fn module(mut self, module: ModuleDescriptor) -> Self {
		self.modules.push(module);
		self
	}

	/// Appends several modules, in iteration order.
	pub fn modules<I: IntoIterator<Item = ModuleDescriptor>>(mut self, modules: I) -> Self {
		self.modules.extend(modules);
		self
	}

	/// Freezes the manifest.
	///
	/// # Errors
	///
	/// - [`DescError::EmptyManifestName`] if the manifest name is empty.
	/// - [`DescError::EmptyModuleName`] if any module name is empty.
	/// - [`DescError::DuplicateModuleName`] for the first module name declared twice.
	pub fn build(self) -> Result<LibraryManifest, DescError> {
		if self.name.is_empty() {
			return Err(DescError::EmptyManifestName);
		}
		if self.modules.iter().any(|m| m.name().is_empty()) {
			return Err(DescError::EmptyModuleName { manifest: self.name });
		}

		let modules = RegistryBuilder::new("modules")
			.extend(self.modules)
			.build()
			.map_err(|err| match err {
				RegistryError::DuplicateKey { key, .. } => DescError::DuplicateModuleName {
					manifest: self.name.clone(),
					module: key,
				},
			})?;

		Ok(LibraryManifest {
			name: self.name,
			dirs: self.dirs,
			library_deps: self.library_deps,
			modules,
		})
	}
}

#[cfg(test)]
mod tests;
