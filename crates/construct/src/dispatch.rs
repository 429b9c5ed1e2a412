use std::any::type_name;
use std::mem::MaybeUninit;

use custody_provider::Provider;
use tracing::trace;

use crate::args::Forwarded;
use crate::introspect::Profile;
use crate::{ConstructError, Shape};

/// Provider-aware argument list of `T`.
pub type ArgsOf<'a, T> = <<T as Profile>::Shape as Shape<T>>::Args<'a>;

/// Forwarded arguments for constructing a `T`.
pub type ForwardedOf<'a, T> = Forwarded<'a, T, ArgsOf<'a, T>>;

/// Builds the argument list for copying `source` with `provider`.
///
/// The provider is dropped ([`Forwarded::Ignored`]) when `T` has no use for a
/// provider of type `P`.
pub fn forward_args<'a, T: Profile, P: Provider>(source: &'a T, provider: &P) -> ForwardedOf<'a, T> {
	<T::Shape as Shape<T>>::forward(source, provider)
}

/// Constructs a `T` from a forwarded argument list.
pub fn make_from_args<T: Profile>(args: ForwardedOf<'_, T>) -> Result<T, ConstructError> {
	match args {
		Forwarded::Ignored((source,)) => Ok(source.clone()),
		Forwarded::Provided(args) => <T::Shape as Shape<T>>::assemble(args),
	}
}

/// Copies `source` so that the copy draws from `provider`.
///
/// # Parameters
/// - `source`: The value whose content is copied
/// - `provider`: Provider for the copy; ignored if `T` does not use providers
///   of this type
///
/// # Returns
/// The copy, or the error raised by `T`'s constructor (usually the provider
/// refusing the request).
pub fn copy_with_provider<T: Profile, P: Provider>(source: &T, provider: &P) -> Result<T, ConstructError> {
	let args = forward_args(source, provider);
	trace!(
		value = type_name::<T>(),
		provider = type_name::<P>(),
		provided = args.is_provided(),
		"copy_with_provider"
	);
	make_from_args(args)
}

/// Returns the provider `value` draws from.
///
/// Values without an accessor report [`DefaultProvider`](crate::DefaultProvider).
pub fn get_provider<T: Profile>(value: &T) -> T::Provider {
	value.provider()
}

/// Copies `source` using the provider carried by `donor`.
pub fn copy_with_donor<T: Profile, U: Profile>(source: &T, donor: &U) -> Result<T, ConstructError> {
	copy_with_provider(source, &get_provider(donor))
}

/// Copies `source` keeping the provider it already carries.
///
/// Composites recurse so that each element keeps its own provider, even
/// though the composite itself reports none.
pub fn duplicate<T: Profile>(source: &T) -> Result<T, ConstructError> {
	<T::Shape as Shape<T>>::duplicate(source)
}

/// Writes a provider-aware copy of `source` into caller-owned storage.
///
/// On failure `slot` is left uninitialized.
pub fn construct_in<'s, T: Profile, P: Provider>(
	slot: &'s mut MaybeUninit<T>,
	source: &T,
	provider: &P,
) -> Result<&'s mut T, ConstructError> {
	let value = copy_with_provider(source, provider)?;
	Ok(slot.write(value))
}
