use cdl_registry_core::RegistryEntry;

use crate::Constants;

/// A named hardware module plus the constants it is compiled with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModuleDescriptor {
	name: String,
	constants: Constants,
	#[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
	description: Option<String>,
	#[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
	specialization: Option<&'static str>,
}

impl ModuleDescriptor {
	/// Creates a descriptor with no constants.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			constants: Constants::new(),
			description: None,
			specialization: None,
		}
	}

	pub(crate) fn specialized(
		name: impl Into<String>,
		constants: Constants,
		specialization: &'static str,
		description: Option<&'static str>,
	) -> Self {
		Self {
			name: name.into(),
			constants,
			description: description.map(str::to_owned),
			specialization: Some(specialization),
		}
	}

	/// Sets a single constant, overriding any earlier value for `key`.
	pub fn with_constant(mut self, key: impl Into<String>, value: i64) -> Self {
		self.constants.insert(key, value);
		self
	}

	/// Sets several constants; later pairs override earlier ones.
	pub fn with_constants<K, I>(mut self, constants: I) -> Self
	where
		K: Into<String>,
		I: IntoIterator<Item = (K, i64)>,
	{
		self.constants.extend(constants);
		self
	}

	/// Attaches documentation text.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn constants(&self) -> &Constants {
		&self.constants
	}

	/// Shorthand for `self.constants().get(key)`.
	pub fn constant(&self, key: &str) -> Option<i64> {
		self.constants.get(key)
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	/// Name of the [`Specialization`](crate::Specialization) this module was
	/// instantiated from, if any.
	pub fn specialization(&self) -> Option<&'static str> {
		self.specialization
	}
}

impl RegistryEntry for ModuleDescriptor {
	fn name(&self) -> &str {
		&self.name
	}
}
