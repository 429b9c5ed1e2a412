//! Error types for provider admission.

use std::alloc::Layout;

use thiserror::Error;

/// Errors raised when a provider refuses a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
	/// The provider does not serve requests of this kind.
	#[error("{provider} rejected a request of {size} bytes (align {align})")]
	Rejected {
		/// Debug name of the rejecting provider.
		provider: String,
		/// Requested size in bytes.
		size: usize,
		/// Requested alignment.
		align: usize,
	},

	/// The provider has no budget left for this request.
	#[error("{resource} exhausted: requested {requested} bytes, {remaining} remaining")]
	Exhausted {
		/// Name of the exhausted resource.
		resource: String,
		/// Requested size in bytes.
		requested: usize,
		/// Bytes still available when the request was made.
		remaining: usize,
	},
}

impl ProviderError {
	/// Builds a [`ProviderError::Rejected`] for `layout`.
	pub fn rejected(provider: impl Into<String>, layout: Layout) -> Self {
		Self::Rejected {
			provider: provider.into(),
			size: layout.size(),
			align: layout.align(),
		}
	}
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
