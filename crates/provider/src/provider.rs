use std::alloc::Layout;
use std::any::{Any, TypeId};
use std::fmt;

use crate::{Erasure, Propagation, ProviderError};

/// A handle to a source of resources.
///
/// Only identity and admission matter here: two providers are interchangeable
/// when they compare equal, and [`Provider::admit`] decides whether a request
/// would be served. Actual allocation is left to the implementor.
///
/// # Compatibility
///
/// Generic code may hold a provider of some type `Q` and want to hand it to a
/// value generic over `Self`. [`Provider::rebind`] performs that conversion and
/// [`Provider::can_rebind`] answers the same question without a value. The
/// default implementations accept exactly `Self`; overrides must keep the two
/// in agreement.
pub trait Provider: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
	/// Assignment and swap propagation flags.
	const PROPAGATION: Propagation = Propagation::NEVER;

	/// How values carry this provider.
	const ERASURE: Erasure = Erasure::Direct;

	/// Provider to give a plain clone of a value that carries `self`.
	///
	/// Non-propagating providers typically return a default-constructed
	/// provider here so that clones do not silently share an arena.
	fn select_on_copy(&self) -> Self {
		self.clone()
	}

	/// Decides whether a request for `layout` would be served.
	fn admit(&self, layout: Layout) -> Result<(), ProviderError> {
		let _ = layout;
		Ok(())
	}

	/// Converts a provider of another type into `Self`, if compatible.
	fn rebind<Q: Provider>(other: &Q) -> Option<Self> {
		(other as &dyn Any).downcast_ref::<Self>().cloned()
	}

	/// Returns true if [`Provider::rebind`] accepts providers of type `Q`.
	fn can_rebind<Q: Provider>() -> bool {
		TypeId::of::<Q>() == TypeId::of::<Self>()
	}
}

/// The provider reported for values that do not carry one.
///
/// Lets plain values flow through provider-aware algorithms: asking a plain
/// value for its provider yields this sentinel, and plain values ignore
/// whatever provider they are handed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultProvider;

impl Provider for DefaultProvider {}
