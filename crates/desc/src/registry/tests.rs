use super::*;

fn beta() -> Result<LibraryManifest, DescError> {
	LibraryManifest::builder("registry_test_beta")
		.library("std")
		.module(ModuleDescriptor::new("beta_core"))
		.module(ModuleDescriptor::new("beta_bus"))
		.build()
}

fn alpha() -> Result<LibraryManifest, DescError> {
	LibraryManifest::builder("registry_test_alpha")
		.module(ModuleDescriptor::new("alpha_core").with_constant("width", 8))
		.build()
}

fn broken() -> Result<LibraryManifest, DescError> {
	LibraryManifest::builder("registry_test_broken")
		.module(ModuleDescriptor::new("twice"))
		.module(ModuleDescriptor::new("twice"))
		.build()
}

// Declared beta first: registry order follows declaration, not name.
crate::register_library!(beta);
crate::register_library!(alpha);

const fn at(file: &'static str, line: u32) -> DeclLocation {
	DeclLocation {
		crate_name: "cdl-desc",
		file,
		line,
		column: 1,
	}
}

static LATE: ManifestReg = ManifestReg {
	location: at("src/b.rs", 3),
	build: alpha,
};

static EARLY: ManifestReg = ManifestReg {
	location: at("src/b.rs", 1),
	build: beta,
};

static FIRST_FILE: ManifestReg = ManifestReg {
	location: at("src/a.rs", 40),
	build: alpha,
};

static BROKEN: ManifestReg = ManifestReg {
	location: at("src/c.rs", 1),
	build: broken,
};

#[test]
fn test_global_registry_follows_declaration_order() {
	let names: Vec<&str> = all_manifests().unwrap().iter().map(LibraryManifest::name).collect();
	assert_eq!(names, ["registry_test_beta", "registry_test_alpha"]);
}

#[test]
fn test_global_registry_is_idempotent() {
	let first = all_manifests().unwrap();
	let second = all_manifests().unwrap();
	assert!(std::ptr::eq(first, second));
	assert_eq!(first, second);
	assert_eq!(registry().unwrap(), &Registry::collect().unwrap());
}

#[test]
fn test_discover_sorts_by_location() {
	let registry = Registry::discover([&LATE, &EARLY]).unwrap();
	let names: Vec<&str> = registry.names().collect();
	assert_eq!(names, ["registry_test_beta", "registry_test_alpha"]);
}

#[test]
fn test_discover_rejects_duplicate_manifest_names() {
	let err = Registry::discover([&LATE, &FIRST_FILE]).unwrap_err();
	assert_eq!(
		err,
		DescError::DuplicateManifestName {
			manifest: "registry_test_alpha".to_owned()
		}
	);
}

#[test]
fn test_discover_is_all_or_nothing() {
	let err = Registry::discover([&EARLY, &BROKEN, &LATE]).unwrap_err();
	assert_eq!(
		err,
		DescError::DuplicateModuleName {
			manifest: "registry_test_broken".to_owned(),
			module: "twice".to_owned(),
		}
	);
}

#[test]
fn test_explicit_registry_keeps_given_order() {
	let registry = Registry::from_manifests([alpha().unwrap(), beta().unwrap()]).unwrap();
	let names: Vec<&str> = registry.names().collect();
	assert_eq!(names, ["registry_test_alpha", "registry_test_beta"]);
	assert_eq!(registry.len(), 2);
	assert!(registry.get("registry_test_beta").unwrap().depends_on("std"));
	assert!(registry.get("missing").is_none());
}

#[test]
fn test_explicit_registry_first_wins() {
	let shadowing_alpha = LibraryManifest::builder("registry_test_alpha").build().unwrap();
	let registry = Registry::builder()
		.duplicate_policy(DuplicatePolicy::FirstWins)
		.push(alpha().unwrap())
		.push(shadowing_alpha)
		.build()
		.unwrap();

	assert_eq!(registry.len(), 1);
	assert_eq!(registry.get("registry_test_alpha").unwrap().modules().len(), 1);
}

#[test]
fn test_build_order_walks_manifests_then_modules() {
	let registry = Registry::from_manifests([beta().unwrap(), alpha().unwrap()]).unwrap();
	let steps: Vec<(&str, &str)> = registry.build_order().map(|(lib, module)| (lib.name(), module.name())).collect();
	assert_eq!(
		steps,
		[
			("registry_test_beta", "beta_core"),
			("registry_test_beta", "beta_bus"),
			("registry_test_alpha", "alpha_core"),
		]
	);
}

#[test]
fn test_empty_registry() {
	let registry = Registry::from_manifests(Vec::new()).unwrap();
	assert!(registry.is_empty());
	assert_eq!((&registry).into_iter().count(), 0);
	assert_eq!(registry, Registry::default());
}

#[test]
fn test_location_display() {
	assert_eq!(at("src/a.rs", 40).to_string(), "cdl-desc:src/a.rs:40:1");
}
