use std::any::type_name;
use std::mem;

use custody_construct::{ConstructError, Profile, copy_with_provider, has_provider_accessor};
use custody_provider::Provider;
use tracing::trace;

/// How the incoming value reaches the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignMode {
	/// The incoming value is consumed.
	Move,
	/// The incoming value is borrowed and copied.
	Copy,
}

impl AssignMode {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Move => "move",
			Self::Copy => "copy",
		}
	}
}

/// The right-hand side of an assignment.
#[derive(Debug)]
pub enum Incoming<'a, T> {
	Move(T),
	Copy(&'a T),
}

impl<T> Incoming<'_, T> {
	pub fn mode(&self) -> AssignMode {
		match self {
			Self::Move(_) => AssignMode::Move,
			Self::Copy(_) => AssignMode::Copy,
		}
	}
}

/// Assigns `incoming` to `target` by swapping in a freshly built temporary.
///
/// The temporary's provider follows the target type's propagation flags:
/// - propagating: the temporary keeps the incoming value's provider;
/// - otherwise: the temporary is built with `target`'s provider. A moved-in
///   value whose provider already equals the target's is used as-is.
///
/// Values without a provider accessor are moved or cloned directly.
///
/// If the temporary cannot be built, `target` is left untouched and the error
/// is returned.
///
/// When the provider does not propagate on swap, the two providers must be
/// equal once the temporary is built. This holds for every path above and is
/// only checked in debug builds.
pub fn assign_via_swap<'t, T: Profile>(
	target: &'t mut T,
	incoming: Incoming<'_, T>,
) -> Result<&'t mut T, ConstructError> {
	let propagation = <T::Provider as Provider>::PROPAGATION;
	let mode = incoming.mode();

	let mut temp = if !has_provider_accessor::<T>() {
		match incoming {
			Incoming::Move(value) => value,
			Incoming::Copy(value) => value.clone(),
		}
	} else {
		match incoming {
			Incoming::Move(value) if propagation.on_move_assign => value,
			Incoming::Move(value) => {
				let provider = target.provider();
				if value.provider() == provider {
					value
				} else {
					copy_with_provider(&value, &provider)?
				}
			}
			Incoming::Copy(value) if propagation.on_copy_assign => copy_with_provider(value, &value.provider())?,
			Incoming::Copy(value) => copy_with_provider(value, &target.provider())?,
		}
	};

	trace!(
		value = type_name::<T>(),
		mode = mode.as_str(),
		propagate = match mode {
			AssignMode::Move => propagation.on_move_assign,
			AssignMode::Copy => propagation.on_copy_assign,
		},
		"assign_via_swap"
	);

	debug_assert!(
		propagation.on_swap || !has_provider_accessor::<T>() || temp.provider() == target.provider(),
		"swapping values with unequal, non-propagating providers"
	);

	mem::swap(target, &mut temp);
	Ok(target)
}

/// Move-assigns `value` to `target`. See [`assign_via_swap`].
pub fn move_assign<T: Profile>(target: &mut T, value: T) -> Result<&mut T, ConstructError> {
	assign_via_swap(target, Incoming::Move(value))
}

/// Copy-assigns `value` to `target`. See [`assign_via_swap`].
pub fn copy_assign<'t, T: Profile>(target: &'t mut T, value: &T) -> Result<&'t mut T, ConstructError> {
	assign_via_swap(target, Incoming::Copy(value))
}
