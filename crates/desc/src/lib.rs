//! CDL library descriptors.
//!
//! Describes, as plain data, which hardware modules make up each CDL library,
//! where the library's files live, which external libraries it needs, and the
//! compile-time constants every module instance is built with. A build driver
//! walks [`all_manifests`] and hands each module's name and constants to the
//! hardware compiler.
//!
//! # Building blocks
//!
//! - [`Constants`] - Ordered constant name to value mapping
//! - [`ModuleDescriptor`] - A module name plus its resolved constants
//! - [`Specialization`] - A preset of default constants, overridable per instance
//! - [`LibraryManifest`] - A library's directories, dependencies and modules
//! - [`Registry`] - Every declared library, in declaration order
//!
//! # Adding a Library
//!
//! 1. Write a `fn() -> Result<LibraryManifest, DescError>` building the manifest
//! 2. Register it with [`register_library!`]
//! 3. Make sure the declaring crate is linked into the driver

mod constants;
mod error;
mod macros;
mod manifest;
mod module;
mod registry;
mod specialization;

pub use cdl_registry_core::{DuplicatePolicy, RegistryEntry};
pub use constants::Constants;
pub use error::DescError;
#[doc(hidden)]
pub use inventory;
pub use manifest::{LibraryDirs, LibraryManifest, ManifestBuilder};
pub use module::ModuleDescriptor;
pub use registry::{DeclLocation, ManifestReg, ManifestRegistryBuilder, Registry, all_manifests, registry};
pub use specialization::Specialization;
