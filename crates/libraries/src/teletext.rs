//! Teletext character generator library.

use cdl_desc::{DescError, LibraryManifest, ModuleDescriptor};

pub const NAME: &str = "teletext";

/// Builds the `teletext` manifest.
pub fn manifest() -> Result<LibraryManifest, DescError> {
	LibraryManifest::builder(NAME)
		.source_dir("cdl")
		.c_model_dir("cmodel")
		.test_bench_dir("tb_cdl")
		.include_dir("cdl")
		.libraries(["apb", "std"])
		// saa5050 stays out until t_bbc_micro_sram_request is available to it.
		.module(
			ModuleDescriptor::new("teletext").with_constants([("flashing_on_count", 10), ("max_flashing_count", 40)]),
		)
		.build()
}

cdl_desc::register_library!(manifest);
