//! Error types for provider-aware construction.

use std::any::type_name;

use custody_provider::ProviderError;
use thiserror::Error;

/// Errors raised while constructing a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
	/// The provider refused the request.
	#[error(transparent)]
	Provider(#[from] ProviderError),

	/// The type's constructor failed for its own reasons.
	#[error("failed to construct {type_name}: {message}")]
	Failed {
		/// Name of the type being constructed.
		type_name: &'static str,
		/// Constructor-specific explanation.
		message: String,
	},
}

impl ConstructError {
	/// Builds a [`ConstructError::Failed`] for `T`.
	pub fn failed<T>(message: impl Into<String>) -> Self {
		Self::Failed {
			type_name: type_name::<T>(),
			message: message.into(),
		}
	}
}

/// Result type for construction operations.
pub type Result<T> = std::result::Result<T, ConstructError>;
