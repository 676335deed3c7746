//! Library registration macro.

/// Registers a library manifest with the global registry.
///
/// Takes the path of a `fn() -> Result<LibraryManifest, DescError>`. The
/// function runs once, the first time [`registry`](crate::registry) is called.
///
/// ```rust,ignore
/// fn teletext() -> Result<LibraryManifest, DescError> {
///     LibraryManifest::builder("teletext")
///         .libraries(["apb", "std"])
///         .module(ModuleDescriptor::new("teletext"))
///         .build()
/// }
///
/// cdl_desc::register_library!(teletext);
/// ```
#[macro_export]
macro_rules! register_library {
	($build:path) => {
		$crate::inventory::submit! {
			$crate::ManifestReg {
				location: $crate::DeclLocation {
					crate_name: env!("CARGO_PKG_NAME"),
					file: file!(),
					line: line!(),
					column: column!(),
				},
				build: $build,
			}
		}
	};
}
