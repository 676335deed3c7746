use thiserror::Error;

/// Errors raised while freezing a [`RegistryBuilder`](crate::RegistryBuilder).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// Two entries share a name and the policy is [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
	#[error("duplicate registry key in {label}: {key:?}")]
	DuplicateKey {
		/// Label of the registry being built.
		label: &'static str,
		/// The colliding name.
		key: String,
	},
}
