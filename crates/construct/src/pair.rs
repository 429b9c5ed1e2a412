use custody_provider::DefaultProvider;

use crate::{Pairwise, Profile};

/// A value made of exactly two independently constructed sub-values.
///
/// Composites are copied piecewise: each element gets its own argument list
/// according to its own profile, so the two halves may follow different
/// provider conventions.
pub trait Composite: Sized {
	type First: Profile;
	type Second: Profile;

	fn first(&self) -> &Self::First;

	fn second(&self) -> &Self::Second;

	/// Reassembles a composite from constructed parts.
	fn from_parts(first: Self::First, second: Self::Second) -> Self;
}

impl<A: Profile, B: Profile> Composite for (A, B) {
	type First = A;
	type Second = B;

	fn first(&self) -> &A {
		&self.0
	}

	fn second(&self) -> &B {
		&self.1
	}

	fn from_parts(first: A, second: B) -> Self {
		(first, second)
	}
}

impl<A: Profile, B: Profile> Profile for (A, B) {
	type Provider = DefaultProvider;
	type Shape = Pairwise;

	const HAS_ACCESSOR: bool = false;

	fn provider(&self) -> DefaultProvider {
		DefaultProvider
	}
}
