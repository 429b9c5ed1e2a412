//! Provider conventions.
//!
//! A shape is a zero-sized marker naming how a type takes its provider. Each
//! marker implements [`Shape`] for the types that follow its convention and
//! knows how to build and consume that convention's argument list.

use custody_provider::Provider;

use crate::args::{ArgList, ConstructFrom, Forwarded, Piecewise, ProviderArg};
use crate::dispatch::{self, ForwardedOf};
use crate::introspect::{self, Profile, ProviderPosition};
use crate::{Composite, ConstructError};

/// Dispatch for one provider convention.
#[diagnostic::on_unimplemented(
	message = "`{Self}` is not a usable provider shape for `{T}`",
	note = "`Leading` needs `ConstructFrom<(ProviderArg, Provider, &T)>`",
	note = "`Trailing` needs `ConstructFrom<(&T, Provider)>`",
	note = "`Pairwise` needs `Composite`"
)]
pub trait Shape<T: 'static> {
	/// Where the provider goes in the argument list.
	const POSITION: ProviderPosition;

	/// Whether the type is built piecewise from two sub-values.
	const COMPOSITE: bool = false;

	/// Argument list passed to the constructor when the provider is used.
	type Args<'a>: ArgList
	where
		T: 'a;

	/// Returns true if a provider of type `P` would be used.
	fn uses<P: Provider>() -> bool;

	/// Builds the argument list for copying `source` with `provider`.
	fn forward<'a, P: Provider>(source: &'a T, provider: &P) -> Forwarded<'a, T, Self::Args<'a>>;

	/// Consumes a provider-aware argument list.
	fn assemble(args: Self::Args<'_>) -> Result<T, ConstructError>;

	/// Copies `source` with the provider (or providers) it already carries.
	fn duplicate(source: &T) -> Result<T, ConstructError>;
}

/// No provider: values are copied with [`Clone`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plain;

/// Provider passed first, after a [`ProviderArg`] tag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Leading;

/// Provider passed last.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trailing;

/// Pair-like composite; each element is handled with its own convention.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairwise;

pub(crate) fn require_accessor<T: Profile>() {
	const {
		assert!(
			T::HAS_ACCESSOR,
			"types that accept a provider must expose it through `Profile::provider`"
		)
	}
}

impl<T: Clone + 'static> Shape<T> for Plain {
	const POSITION: ProviderPosition = ProviderPosition::Absent;

	type Args<'a>
		= (&'a T,)
	where
		T: 'a;

	fn uses<P: Provider>() -> bool {
		false
	}

	fn forward<'a, P: Provider>(source: &'a T, _provider: &P) -> Forwarded<'a, T, Self::Args<'a>> {
		Forwarded::Ignored((source,))
	}

	fn assemble((source,): Self::Args<'_>) -> Result<T, ConstructError> {
		Ok(source.clone())
	}

	fn duplicate(source: &T) -> Result<T, ConstructError> {
		Ok(source.clone())
	}
}

impl<T> Shape<T> for Leading
where
	T: Profile + for<'a> ConstructFrom<(ProviderArg, <T as Profile>::Provider, &'a T)>,
{
	const POSITION: ProviderPosition = ProviderPosition::Leading;

	type Args<'a>
		= (ProviderArg, <T as Profile>::Provider, &'a T)
	where
		T: 'a;

	fn uses<P: Provider>() -> bool {
		<T::Provider as Provider>::can_rebind::<P>()
	}

	fn forward<'a, P: Provider>(source: &'a T, provider: &P) -> Forwarded<'a, T, Self::Args<'a>> {
		require_accessor::<T>();
		match <T::Provider as Provider>::rebind(provider) {
			Some(provider) => Forwarded::Provided((ProviderArg, provider, source)),
			None => Forwarded::Ignored((source,)),
		}
	}

	fn assemble(args: Self::Args<'_>) -> Result<T, ConstructError> {
		T::construct_from(args)
	}

	fn duplicate(source: &T) -> Result<T, ConstructError> {
		require_accessor::<T>();
		T::construct_from((ProviderArg, source.provider(), source))
	}
}

impl<T> Shape<T> for Trailing
where
	T: Profile + for<'a> ConstructFrom<(&'a T, <T as Profile>::Provider)>,
{
	const POSITION: ProviderPosition = ProviderPosition::Trailing;

	type Args<'a>
		= (&'a T, <T as Profile>::Provider)
	where
		T: 'a;

	fn uses<P: Provider>() -> bool {
		<T::Provider as Provider>::can_rebind::<P>()
	}

	fn forward<'a, P: Provider>(source: &'a T, provider: &P) -> Forwarded<'a, T, Self::Args<'a>> {
		require_accessor::<T>();
		match <T::Provider as Provider>::rebind(provider) {
			Some(provider) => Forwarded::Provided((source, provider)),
			None => Forwarded::Ignored((source,)),
		}
	}

	fn assemble(args: Self::Args<'_>) -> Result<T, ConstructError> {
		T::construct_from(args)
	}

	fn duplicate(source: &T) -> Result<T, ConstructError> {
		require_accessor::<T>();
		T::construct_from((source, source.provider()))
	}
}

impl<T> Shape<T> for Pairwise
where
	T: Composite + Clone + 'static,
{
	const POSITION: ProviderPosition = ProviderPosition::Absent;
	const COMPOSITE: bool = true;

	type Args<'a>
		= (
		Piecewise,
		ForwardedOf<'a, <T as Composite>::First>,
		ForwardedOf<'a, <T as Composite>::Second>,
	)
	where
		T: 'a;

	fn uses<P: Provider>() -> bool {
		introspect::uses_provider::<T::First, P>() || introspect::uses_provider::<T::Second, P>()
	}

	fn forward<'a, P: Provider>(source: &'a T, provider: &P) -> Forwarded<'a, T, Self::Args<'a>> {
		if !<Self as Shape<T>>::uses::<P>() {
			return Forwarded::Ignored((source,));
		}
		Forwarded::Provided((
			Piecewise,
			dispatch::forward_args(source.first(), provider),
			dispatch::forward_args(source.second(), provider),
		))
	}

	fn assemble((Piecewise, first, second): Self::Args<'_>) -> Result<T, ConstructError> {
		let first = dispatch::make_from_args(first)?;
		let second = dispatch::make_from_args(second)?;
		Ok(T::from_parts(first, second))
	}

	fn duplicate(source: &T) -> Result<T, ConstructError> {
		let first = dispatch::duplicate(source.first())?;
		let second = dispatch::duplicate(source.second())?;
		Ok(T::from_parts(first, second))
	}
}
