//! Error types for transactions.

use custody_construct::ConstructError;
use thiserror::Error;

/// Building a speculative copy failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to copy transaction value {index}")]
pub struct PrepareError {
	/// Position of the value whose copy failed.
	pub index: usize,
	#[source]
	pub source: ConstructError,
}

/// Why a transaction did not commit.
///
/// The values passed to the transaction are unchanged in every case.
#[derive(Debug, Error)]
pub enum TransactError<E> {
	/// A copy could not be built; the body never ran.
	#[error(transparent)]
	Prepare(#[from] PrepareError),

	/// The body reported an error.
	#[error("transaction body failed")]
	Body(#[source] E),
}

impl<E> TransactError<E> {
	/// Returns the body's error, if that is why the transaction aborted.
	pub fn into_body(self) -> Option<E> {
		match self {
			Self::Body(err) => Some(err),
			Self::Prepare(_) => None,
		}
	}
}
