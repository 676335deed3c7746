//! CDL library declarations.
//!
//! Each library module declares its manifest and registers it with
//! [`cdl_desc::register_library!`]. Linking this crate is enough for a driver
//! to see the libraries through [`cdl_desc::all_manifests`].
//!
//! # Libraries
//!
//! - [`teletext`] - Teletext character generator (feature `teletext`)
//! - [`framebuffer`] - Framebuffer timing and teletext overlay (feature `framebuffer`)

use cdl_desc::Specialization;

#[cfg(feature = "framebuffer")]
pub mod framebuffer;
#[cfg(feature = "teletext")]
pub mod teletext;

/// Specialization presets declared by the enabled libraries.
pub fn specializations() -> Vec<&'static Specialization> {
	#[allow(unused_mut, reason = "empty when no library feature is enabled")]
	let mut presets = Vec::new();
	#[cfg(feature = "framebuffer")]
	presets.extend(framebuffer::SPECIALIZATIONS);
	presets
}

/// Finds a specialization preset by family tag.
pub fn find_specialization(name: &str) -> Option<&'static Specialization> {
	specializations().into_iter().find(|s| s.name == name)
}
