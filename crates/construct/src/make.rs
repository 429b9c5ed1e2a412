//! Provider-aware construction from caller-supplied constructor arguments.
//!
//! [`copy_with_provider`](crate::copy_with_provider) always builds from
//! `&T`. The operations here take any argument tuple `U` instead and splice the
//! provider into it according to the target's shape:
//!
//! ```text
//! make_with_provider(provider, (a, b))
//!   └─ prepare_args ──► Prepared::Plain((a, b))                                  plain / incompatible
//!                   ├─► Prepared::Provided((ProviderArg, p, a, b))               Leading
//!                   ├─► Prepared::Provided((a, b, p))                            Trailing
//!                   └─► Prepared::Provided((Piecewise, first, second))           Pairwise
//! ```
//!
//! Pairs accept `()`, which builds each element from `()`, or `(a, b)`, which
//! builds the first element from `(a,)` and the second from `(b,)`.

use std::any::type_name;
use std::mem::MaybeUninit;

use custody_provider::Provider;
use tracing::trace;

use crate::args::{ArgTuple, ConstructFrom, Piecewise};
use crate::introspect::Profile;
use crate::shape::{Leading, Pairwise, Plain, Shape, Trailing, require_accessor};
use crate::{Composite, ConstructError};

/// Constructor arguments `U`, with or without the provider spliced in.
#[derive(Debug)]
pub enum Prepared<U, A> {
	/// The provider was dropped; `U` goes to the constructor unchanged.
	Plain(U),
	/// Provider-aware argument list.
	Provided(A),
}

impl<U, A> Prepared<U, A> {
	/// Returns true if the provider made it into the argument list.
	pub fn is_provided(&self) -> bool {
		matches!(self, Self::Provided(_))
	}
}

/// Construction of a `T` from argument tuple `U` for one provider convention.
#[diagnostic::on_unimplemented(
	message = "`{T}` cannot be built from `{U}` with a provider",
	note = "`Plain` needs `ConstructFrom<U>`",
	note = "`Leading` needs `ConstructFrom<U>` and `ConstructFrom<(ProviderArg, Provider, U...)>`",
	note = "`Trailing` needs `ConstructFrom<U>` and `ConstructFrom<(U..., Provider)>`",
	note = "`Pairwise` takes `()` or one argument per element"
)]
pub trait ShapeArgs<T, U> {
	/// Argument list passed to the constructor when the provider is used.
	type Provided;

	fn prepare<P: Provider>(provider: &P, args: U) -> Prepared<U, Self::Provided>;

	fn make(prepared: Prepared<U, Self::Provided>) -> Result<T, ConstructError>;
}

/// Prepared arguments for building a `T` from `U`.
pub type PreparedOf<T, U> = Prepared<U, <<T as Profile>::Shape as ShapeArgs<T, U>>::Provided>;

/// Splices `provider` into `args` the way `T` expects.
///
/// The provider is dropped ([`Prepared::Plain`]) when `T` has no use for a
/// provider of type `P`.
pub fn prepare_args<T, P, U>(provider: &P, args: U) -> PreparedOf<T, U>
where
	T: Profile,
	P: Provider,
	T::Shape: ShapeArgs<T, U>,
{
	<T::Shape as ShapeArgs<T, U>>::prepare(provider, args)
}

/// Constructs a `T` from prepared arguments.
pub fn make_from_prepared<T, U>(prepared: PreparedOf<T, U>) -> Result<T, ConstructError>
where
	T: Profile,
	T::Shape: ShapeArgs<T, U>,
{
	<T::Shape as ShapeArgs<T, U>>::make(prepared)
}

/// Constructs a `T` from `args` so that it draws from `provider`.
///
/// # Parameters
/// - `provider`: Provider for the new value; ignored if `T` does not use
///   providers of this type
/// - `args`: Constructor arguments, without the provider
///
/// # Returns
/// The new value, or the error raised by `T`'s constructor.
pub fn make_with_provider<T, P, U>(provider: &P, args: U) -> Result<T, ConstructError>
where
	T: Profile,
	P: Provider,
	T::Shape: ShapeArgs<T, U>,
{
	let prepared = prepare_args::<T, P, U>(provider, args);
	trace!(
		value = type_name::<T>(),
		provider = type_name::<P>(),
		args = type_name::<U>(),
		provided = prepared.is_provided(),
		"make_with_provider"
	);
	make_from_prepared::<T, U>(prepared)
}

/// Writes a value built by [`make_with_provider`] into caller-owned storage.
///
/// On failure `slot` is left uninitialized.
pub fn construct_with_in<'s, T, P, U>(
	slot: &'s mut MaybeUninit<T>,
	provider: &P,
	args: U,
) -> Result<&'s mut T, ConstructError>
where
	T: Profile,
	P: Provider,
	T::Shape: ShapeArgs<T, U>,
{
	let value = make_with_provider::<T, P, U>(provider, args)?;
	Ok(slot.write(value))
}

impl<T, U> ShapeArgs<T, U> for Plain
where
	T: ConstructFrom<U>,
{
	type Provided = U;

	fn prepare<P: Provider>(_provider: &P, args: U) -> Prepared<U, U> {
		Prepared::Plain(args)
	}

	fn make(prepared: Prepared<U, U>) -> Result<T, ConstructError> {
		match prepared {
			Prepared::Plain(args) | Prepared::Provided(args) => T::construct_from(args),
		}
	}
}

impl<T, U> ShapeArgs<T, U> for Leading
where
	T: Profile + ConstructFrom<U> + ConstructFrom<<U as ArgTuple>::WithLeading<<T as Profile>::Provider>>,
	U: ArgTuple,
{
	type Provided = <U as ArgTuple>::WithLeading<<T as Profile>::Provider>;

	fn prepare<P: Provider>(provider: &P, args: U) -> Prepared<U, Self::Provided> {
		require_accessor::<T>();
		match <T::Provider as Provider>::rebind(provider) {
			Some(provider) => Prepared::Provided(args.with_leading(provider)),
			None => Prepared::Plain(args),
		}
	}

	fn make(prepared: Prepared<U, Self::Provided>) -> Result<T, ConstructError> {
		match prepared {
			Prepared::Plain(args) => <T as ConstructFrom<U>>::construct_from(args),
			Prepared::Provided(args) => <T as ConstructFrom<Self::Provided>>::construct_from(args),
		}
	}
}

impl<T, U> ShapeArgs<T, U> for Trailing
where
	T: Profile + ConstructFrom<U> + ConstructFrom<<U as ArgTuple>::WithTrailing<<T as Profile>::Provider>>,
	U: ArgTuple,
{
	type Provided = <U as ArgTuple>::WithTrailing<<T as Profile>::Provider>;

	fn prepare<P: Provider>(provider: &P, args: U) -> Prepared<U, Self::Provided> {
		require_accessor::<T>();
		match <T::Provider as Provider>::rebind(provider) {
			Some(provider) => Prepared::Provided(args.with_trailing(provider)),
			None => Prepared::Plain(args),
		}
	}

	fn make(prepared: Prepared<U, Self::Provided>) -> Result<T, ConstructError> {
		match prepared {
			Prepared::Plain(args) => <T as ConstructFrom<U>>::construct_from(args),
			Prepared::Provided(args) => <T as ConstructFrom<Self::Provided>>::construct_from(args),
		}
	}
}

impl<T> ShapeArgs<T, ()> for Pairwise
where
	T: Composite + Clone + 'static,
	<<T as Composite>::First as Profile>::Shape: ShapeArgs<<T as Composite>::First, ()>,
	<<T as Composite>::Second as Profile>::Shape: ShapeArgs<<T as Composite>::Second, ()>,
{
	type Provided = (
		Piecewise,
		PreparedOf<<T as Composite>::First, ()>,
		PreparedOf<<T as Composite>::Second, ()>,
	);

	fn prepare<P: Provider>(provider: &P, (): ()) -> Prepared<(), Self::Provided> {
		if !<Self as Shape<T>>::uses::<P>() {
			return Prepared::Plain(());
		}
		Prepared::Provided((
			Piecewise,
			prepare_args::<T::First, P, ()>(provider, ()),
			prepare_args::<T::Second, P, ()>(provider, ()),
		))
	}

	fn make(prepared: Prepared<(), Self::Provided>) -> Result<T, ConstructError> {
		let (first, second) = match prepared {
			Prepared::Plain(()) => (Prepared::Plain(()), Prepared::Plain(())),
			Prepared::Provided((Piecewise, first, second)) => (first, second),
		};
		let first = make_from_prepared::<T::First, ()>(first)?;
		let second = make_from_prepared::<T::Second, ()>(second)?;
		Ok(T::from_parts(first, second))
	}
}

impl<T, U1, U2> ShapeArgs<T, (U1, U2)> for Pairwise
where
	T: Composite + Clone + 'static,
	<<T as Composite>::First as Profile>::Shape: ShapeArgs<<T as Composite>::First, (U1,)>,
	<<T as Composite>::Second as Profile>::Shape: ShapeArgs<<T as Composite>::Second, (U2,)>,
{
	type Provided = (
		Piecewise,
		PreparedOf<<T as Composite>::First, (U1,)>,
		PreparedOf<<T as Composite>::Second, (U2,)>,
	);

	fn prepare<P: Provider>(provider: &P, (first, second): (U1, U2)) -> Prepared<(U1, U2), Self::Provided> {
		if !<Self as Shape<T>>::uses::<P>() {
			return Prepared::Plain((first, second));
		}
		Prepared::Provided((
			Piecewise,
			prepare_args::<T::First, P, (U1,)>(provider, (first,)),
			prepare_args::<T::Second, P, (U2,)>(provider, (second,)),
		))
	}

	fn make(prepared: Prepared<(U1, U2), Self::Provided>) -> Result<T, ConstructError> {
		let (first, second) = match prepared {
			Prepared::Plain((first, second)) => (Prepared::Plain((first,)), Prepared::Plain((second,))),
			Prepared::Provided((Piecewise, first, second)) => (first, second),
		};
		let first = make_from_prepared::<T::First, (U1,)>(first)?;
		let second = make_from_prepared::<T::Second, (U2,)>(second)?;
		Ok(T::from_parts(first, second))
	}
}
