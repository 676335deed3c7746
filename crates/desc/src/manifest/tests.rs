use std::path::Path;

use super::*;

fn audio_manifest() -> ManifestBuilder {
	LibraryManifest::builder("audio")
		.libraries(["std", "apb"])
		.module(ModuleDescriptor::new("i2s_tx").with_constant("width", 16))
		.module(ModuleDescriptor::new("i2s_rx"))
		.module(ModuleDescriptor::new("audio_mixer"))
}

#[test]
fn test_modules_keep_declaration_order() {
	let manifest = audio_manifest().build().unwrap();
	let names: Vec<&str> = manifest.module_names().collect();
	assert_eq!(names, ["i2s_tx", "i2s_rx", "audio_mixer"]);
	assert_eq!(manifest.modules()[0].constant("width"), Some(16));
	assert_eq!(manifest.module("i2s_rx").unwrap().name(), "i2s_rx");
	assert!(manifest.module("spdif").is_none());
}

#[test]
fn test_default_dirs() {
	let manifest = audio_manifest().build().unwrap();
	assert_eq!(manifest.source_dir(), Path::new("cdl"));
	assert_eq!(manifest.c_model_dir(), Path::new("cmodel"));
	assert_eq!(manifest.test_bench_dir(), Path::new("tb_cdl"));
	assert_eq!(manifest.include_dir(), Path::new("cdl"));
}

#[test]
fn test_dir_overrides() {
	let manifest = audio_manifest()
		.source_dir("rtl")
		.c_model_dir("models")
		.test_bench_dir("tb")
		.include_dir("inc")
		.build()
		.unwrap();
	assert_eq!(manifest.source_dir(), Path::new("rtl"));
	assert_eq!(manifest.c_model_dir(), Path::new("models"));
	assert_eq!(manifest.test_bench_dir(), Path::new("tb"));
	assert_eq!(manifest.include_dir(), Path::new("inc"));

	let replaced = audio_manifest().dirs(manifest.dirs().clone()).build().unwrap();
	assert_eq!(replaced.dirs(), manifest.dirs());
}

#[test]
fn test_library_deps_are_a_set() {
	let manifest = audio_manifest().library("std").library("clocking").build().unwrap();
	let deps: Vec<&str> = manifest.library_deps().iter().map(String::as_str).collect();
	assert_eq!(deps, ["apb", "clocking", "std"]);
	assert!(manifest.depends_on("apb"));
	assert!(!manifest.depends_on("axi"));
}

#[test]
fn test_duplicate_module_name_rejected() {
	let err = audio_manifest().module(ModuleDescriptor::new("i2s_rx")).build().unwrap_err();
	assert_eq!(
		err,
		DescError::DuplicateModuleName {
			manifest: "audio".to_owned(),
			module: "i2s_rx".to_owned(),
		}
	);
}

#[test]
fn test_empty_names_rejected() {
	let err = LibraryManifest::builder("").build().unwrap_err();
	assert_eq!(err, DescError::EmptyManifestName);

	let err = audio_manifest().module(ModuleDescriptor::new("")).build().unwrap_err();
	assert_eq!(
		err,
		DescError::EmptyModuleName {
			manifest: "audio".to_owned()
		}
	);
}

#[test]
fn test_manifest_without_modules() {
	let manifest = LibraryManifest::builder("empty").build().unwrap();
	assert!(manifest.modules().is_empty());
	assert!(manifest.library_deps().is_empty());
}

#[test]
#[cfg(feature = "serde")]
fn test_serialized_form_preserves_order() {
	let manifest = audio_manifest().build().unwrap();
	let value = serde_json::to_value(&manifest).unwrap();

	let names: Vec<&str> = value["modules"]
		.as_array()
		.unwrap()
		.iter()
		.map(|m| m["name"].as_str().unwrap())
		.collect();
	assert_eq!(names, ["i2s_tx", "i2s_rx", "audio_mixer"]);
	assert_eq!(value["modules"][0]["constants"]["width"], 16);
	assert_eq!(value["library_deps"], serde_json::json!(["apb", "std"]));
	assert_eq!(value["dirs"]["test_bench"], "tb_cdl");
}
