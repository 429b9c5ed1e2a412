use crate::ConstructError;

/// Tag placed before the provider in a leading-provider argument list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderArg;

/// Tag opening a piecewise argument list for a pair-like composite.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piecewise;

/// A fixed-length, ordered, heterogeneous argument list.
///
/// Implemented for tuples; elements are read positionally through the tuple
/// fields.
pub trait ArgList {
	/// Number of arguments in the list.
	const LEN: usize;
}

macro_rules! impl_arg_list {
	($($len:literal => ($($name:ident),*)),* $(,)?) => {
		$(
			impl<$($name),*> ArgList for ($($name,)*) {
				const LEN: usize = $len;
			}
		)*
	};
}

impl_arg_list! {
	0 => (),
	1 => (A),
	2 => (A, B),
	3 => (A, B, C),
	4 => (A, B, C, D),
	5 => (A, B, C, D, E),
}

/// A constructor argument tuple a provider can be spliced into.
///
/// `(a, b)` becomes `(ProviderArg, p, a, b)` for a leading provider and
/// `(a, b, p)` for a trailing one. Implemented for tuples of up to three
/// arguments.
pub trait ArgTuple: ArgList {
	type WithLeading<P>: ArgList;
	type WithTrailing<P>: ArgList;

	fn with_leading<P>(self, provider: P) -> Self::WithLeading<P>;
	fn with_trailing<P>(self, provider: P) -> Self::WithTrailing<P>;
}

macro_rules! impl_arg_tuple {
	($(($($name:ident $arg:ident),*)),* $(,)?) => {
		$(
			impl<$($name),*> ArgTuple for ($($name,)*) {
				type WithLeading<P> = (ProviderArg, P, $($name,)*);
				type WithTrailing<P> = ($($name,)* P,);

				fn with_leading<P>(self, provider: P) -> Self::WithLeading<P> {
					let ($($arg,)*) = self;
					(ProviderArg, provider, $($arg,)*)
				}

				fn with_trailing<P>(self, provider: P) -> Self::WithTrailing<P> {
					let ($($arg,)*) = self;
					($($arg,)* provider,)
				}
			}
		)*
	};
}

impl_arg_tuple!((), (A a), (A a, B b), (A a, B b, C c));

/// Arguments prepared for constructing a `T`.
///
/// `Ignored` means the provider was dropped and the value is rebuilt as a plain
/// content copy. `Provided` carries the argument list of the type's convention.
#[derive(Debug)]
pub enum Forwarded<'a, T, A> {
	/// Plain copy of the source; the provider was not used.
	Ignored((&'a T,)),
	/// Provider-aware argument list.
	Provided(A),
}

impl<T, A: ArgList> Forwarded<'_, T, A> {
	/// Returns true if the provider made it into the argument list.
	pub fn is_provided(&self) -> bool {
		matches!(self, Self::Provided(_))
	}

	/// Number of top-level arguments.
	pub fn arity(&self) -> usize {
		match self {
			Self::Ignored(_) => 1,
			Self::Provided(_) => A::LEN,
		}
	}
}

/// Constructs `Self` from an argument list.
///
/// A provider-accepting type implements this for the argument list of its
/// convention, e.g. `(ProviderArg, A, &'a Self)` for a leading provider of type
/// `A`, or `(&'a Self, A)` for a trailing one. Construction may fail, typically
/// because the provider refused the request.
#[diagnostic::on_unimplemented(
	message = "`{Self}` has no compatible provider constructor taking `{Args}`",
	label = "no `ConstructFrom<{Args}>` impl",
	note = "types declaring a `Leading` or `Trailing` shape must be constructible from the matching argument list"
)]
pub trait ConstructFrom<Args>: Sized {
	fn construct_from(args: Args) -> Result<Self, ConstructError>;
}
