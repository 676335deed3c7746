//! Framebuffer library: display timing, teletext overlay and the framebuffer
//! itself.

use cdl_desc::{DescError, LibraryManifest, ModuleDescriptor, Specialization};

pub const NAME: &str = "framebuffer";

/// Display timing generator.
pub static FRAMEBUFFER_TIMING: Specialization = Specialization::new("framebuffer_timing", &[("timing_width", 12)])
	.with_description(
		"timing_width: log2 of the maximum clock ticks per line; 12 or more is needed for displays 2k pixels wide",
	);

/// Teletext overlay. Occupies two consecutive CSR selects, X and X|1.
///
/// A 40x25 page of 12x20 characters is 480x500 pixels, which on an interlaced
/// display only keeps a roughly square aspect ratio when every other row is
/// skipped. The defaults therefore halve the height and keep the full width.
pub static FRAMEBUFFER_TELETEXT: Specialization = Specialization::new(
	"framebuffer_teletext",
	&[("csr_select_default", 0), ("cfg_downsize_x", 0), ("cfg_downsize_y", 1)],
)
.with_description(
	"csr_select_default: CSR select used when csr_select_in is tied low; \
	 cfg_downsize_x: 1 to display characters at half width; \
	 cfg_downsize_y: 1 to display characters at half height",
);

pub(crate) static SPECIALIZATIONS: [&Specialization; 2] = [&FRAMEBUFFER_TIMING, &FRAMEBUFFER_TELETEXT];

/// Builds the `framebuffer` manifest.
pub fn manifest() -> Result<LibraryManifest, DescError> {
	LibraryManifest::builder(NAME)
		.source_dir("cdl")
		.c_model_dir("cmodel")
		.test_bench_dir("tb_cdl")
		.include_dir("cdl")
		.libraries(["apb", "std"])
		.module(FRAMEBUFFER_TIMING.instantiate("framebuffer_timing"))
		.module(FRAMEBUFFER_TELETEXT.instantiate("framebuffer_teletext"))
		.module(ModuleDescriptor::new("framebuffer"))
		.build()
}

cdl_desc::register_library!(manifest);
