use cdl_desc::{DescError, LibraryManifest, ModuleDescriptor, all_manifests, registry};

fn healthy() -> Result<LibraryManifest, DescError> {
	LibraryManifest::builder("healthy")
		.module(ModuleDescriptor::new("healthy_core"))
		.build()
}

fn repeats_a_module() -> Result<LibraryManifest, DescError> {
	LibraryManifest::builder("repeats_a_module")
		.module(ModuleDescriptor::new("uart"))
		.module(ModuleDescriptor::new("uart"))
		.build()
}

cdl_desc::register_library!(healthy);
cdl_desc::register_library!(repeats_a_module);

fn expected() -> DescError {
	DescError::DuplicateModuleName {
		manifest: "repeats_a_module".to_owned(),
		module: "uart".to_owned(),
	}
}

#[test]
fn test_failed_discovery_fails_the_whole_registry() {
	assert_eq!(registry().unwrap_err(), expected());
	assert_eq!(all_manifests().unwrap_err(), expected());
}

#[test]
fn test_failed_discovery_is_cached() {
	for _ in 0..3 {
		assert_eq!(registry().unwrap_err(), expected());
		assert_eq!(all_manifests().unwrap_err(), expected());
	}
}
