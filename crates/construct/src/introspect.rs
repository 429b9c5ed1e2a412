use std::any::type_name;
use std::fmt;

use custody_provider::{Erasure, Provider};

use crate::Shape;

/// Static capability profile of a value type.
///
/// Every type that flows through provider-aware construction implements this
/// once. Plain types use the [`Plain`](crate::Plain) shape, report no accessor
/// and return [`DefaultProvider`](crate::DefaultProvider); the
/// [`plain_profile!`](crate::plain_profile) macro writes that impl.
///
/// A type picks exactly one shape, so it can never claim two provider
/// positions. Declaring [`Leading`](crate::Leading) or
/// [`Trailing`](crate::Trailing) without the matching
/// [`ConstructFrom`](crate::ConstructFrom) impl, or without an accessor, is
/// rejected at compile time.
///
/// A trailing-provider type:
///
/// ```
/// use custody_construct::{ConstructFrom, ErasedProvider, Profile, Result, Trailing, copy_with_provider};
///
/// #[derive(Clone)]
/// struct Note(ErasedProvider);
///
/// impl<'a> ConstructFrom<(&'a Note, ErasedProvider)> for Note {
///     fn construct_from((_, provider): (&'a Note, ErasedProvider)) -> Result<Self> {
///         Ok(Note(provider))
///     }
/// }
///
/// impl Profile for Note {
///     type Provider = ErasedProvider;
///     type Shape = Trailing;
///
///     fn provider(&self) -> ErasedProvider {
///         self.0.clone()
///     }
/// }
///
/// let copy = copy_with_provider(&Note(ErasedProvider::default()), &ErasedProvider::default()).unwrap();
/// assert_eq!(copy.provider(), ErasedProvider::default());
/// ```
///
/// The same type without its constructor does not compile:
///
/// ```compile_fail
/// use custody_construct::{ErasedProvider, Profile, Trailing};
///
/// #[derive(Clone)]
/// struct Note(ErasedProvider);
///
/// impl Profile for Note {
///     type Provider = ErasedProvider;
///     type Shape = Trailing;
///
///     fn provider(&self) -> ErasedProvider {
///         self.0.clone()
///     }
/// }
/// ```
///
/// Neither does a provider-accepting type that hides its provider:
///
/// ```compile_fail
/// use custody_construct::{ConstructFrom, ErasedProvider, Leading, Profile, ProviderArg, Result, copy_with_provider};
///
/// #[derive(Clone)]
/// struct Hidden(ErasedProvider);
///
/// impl<'a> ConstructFrom<(ProviderArg, ErasedProvider, &'a Hidden)> for Hidden {
///     fn construct_from((ProviderArg, provider, _): (ProviderArg, ErasedProvider, &'a Hidden)) -> Result<Self> {
///         Ok(Hidden(provider))
///     }
/// }
///
/// impl Profile for Hidden {
///     type Provider = ErasedProvider;
///     type Shape = Leading;
///
///     const HAS_ACCESSOR: bool = false;
///
///     fn provider(&self) -> ErasedProvider {
///         self.0.clone()
///     }
/// }
///
/// let _ = copy_with_provider(&Hidden(ErasedProvider::default()), &ErasedProvider::default());
/// ```
pub trait Profile: Clone + 'static {
	/// Provider type this value carries.
	type Provider: Provider;

	/// How a provider is handed to this type's constructor.
	type Shape: Shape<Self>;

	/// Whether [`Profile::provider`] reports a real provider.
	const HAS_ACCESSOR: bool = true;

	/// Returns the provider this value draws from.
	fn provider(&self) -> Self::Provider;
}

/// Where a type's constructor expects its provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderPosition {
	/// First, after a [`ProviderArg`](crate::ProviderArg) tag.
	Leading,
	/// Last.
	Trailing,
	/// Not accepted directly (plain values and composites).
	Absent,
}

impl ProviderPosition {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Leading => "leading",
			Self::Trailing => "trailing",
			Self::Absent => "absent",
		}
	}
}

/// Returns true if `T` would put a provider of type `P` to use.
///
/// For composites this is true if either element would.
pub fn uses_provider<T: Profile, P: Provider>() -> bool {
	<T::Shape as Shape<T>>::uses::<P>()
}

/// Returns where `T` expects its provider.
pub fn provider_position<T: Profile>() -> ProviderPosition {
	<T::Shape as Shape<T>>::POSITION
}

/// Returns true if `T` is constructed from `(ProviderArg, P, T)`.
pub fn accepts_leading_provider<T: Profile, P: Provider>() -> bool {
	provider_position::<T>() == ProviderPosition::Leading && uses_provider::<T, P>()
}

/// Returns true if `T` is constructed from `(T, P)`.
pub fn accepts_trailing_provider<T: Profile, P: Provider>() -> bool {
	provider_position::<T>() == ProviderPosition::Trailing && uses_provider::<T, P>()
}

pub fn has_provider_accessor<T: Profile>() -> bool {
	T::HAS_ACCESSOR
}

pub fn is_composite<T: Profile>() -> bool {
	<T::Shape as Shape<T>>::COMPOSITE
}

/// Returns how `T` carries its provider, or `None` if it carries none.
pub fn erasure_kind<T: Profile>() -> Option<Erasure> {
	T::HAS_ACCESSOR.then_some(<T::Provider as Provider>::ERASURE)
}

/// Everything introspection knows about `T` paired with a provider of type `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
	pub type_name: &'static str,
	pub provider_name: &'static str,
	pub uses_provider: bool,
	pub position: ProviderPosition,
	pub erasure: Option<Erasure>,
	pub composite: bool,
	pub has_accessor: bool,
}

/// Collects the capability report for `T` and `P`.
pub fn capabilities<T: Profile, P: Provider>() -> Capabilities {
	Capabilities {
		type_name: type_name::<T>(),
		provider_name: type_name::<P>(),
		uses_provider: uses_provider::<T, P>(),
		position: provider_position::<T>(),
		erasure: erasure_kind::<T>(),
		composite: is_composite::<T>(),
		has_accessor: has_provider_accessor::<T>(),
	}
}

impl fmt::Display for Capabilities {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let verdict = if self.uses_provider { "uses" } else { "ignores" };
		write!(
			f,
			"{} {verdict} {} (position: {}, erasure: {}",
			self.type_name,
			self.provider_name,
			self.position.as_str(),
			self.erasure.map_or("none", Erasure::as_str),
		)?;
		if self.composite {
			f.write_str(", composite")?;
		}
		if !self.has_accessor {
			f.write_str(", no accessor")?;
		}
		f.write_str(")")
	}
}
