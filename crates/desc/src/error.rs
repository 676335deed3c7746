use thiserror::Error;

/// Errors raised while building library manifests or the library registry.
///
/// Construction is all-or-nothing: any of these aborts the manifest (or the
/// whole registry) being built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescError {
	/// Two modules in one manifest share a name.
	#[error("duplicate module name in library {manifest:?}: {module:?}")]
	DuplicateModuleName {
		/// Name of the manifest being built.
		manifest: String,
		/// The repeated module name.
		module: String,
	},
	/// Two manifests in one registry share a name.
	#[error("duplicate library manifest name: {manifest:?}")]
	DuplicateManifestName {
		/// The repeated manifest name.
		manifest: String,
	},
	/// A module was declared with an empty name.
	#[error("empty module name in library {manifest:?}")]
	EmptyModuleName {
		/// Name of the manifest being built.
		manifest: String,
	},
	/// A manifest was declared with an empty name.
	#[error("library manifest name is empty")]
	EmptyManifestName,
}
