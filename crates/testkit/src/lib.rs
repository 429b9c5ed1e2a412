//! Shared fixtures for custody tests.
//!
//! Two direct providers with opposite propagation behavior, a value type that
//! can take its provider in either position, and an erased counterpart. Values
//! record only an `i32`, which keeps assertions about content and provider
//! identity independent of each other.

use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;

use custody_construct::{
	ConstructError, ConstructFrom, ErasedProvider, Leading, Profile, ProviderArg, Trailing, plain_profile,
};
use custody_provider::{Propagation, Provider, ProviderError};

/// Id reported by [`IdAlloc::select_on_copy`].
pub const UNSELECTED_ID: i32 = -1;

/// Non-propagating provider identified by an integer.
///
/// Plain clones of values carrying an `IdAlloc` get [`UNSELECTED_ID`], so a
/// test can tell a provider-aware copy from a content-only clone. The default
/// has id 0.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IdAlloc {
	id: i32,
	reject: bool,
}

impl IdAlloc {
	pub const fn new(id: i32) -> Self {
		Self { id, reject: false }
	}

	/// An `IdAlloc` that refuses every request.
	pub const fn rejecting(id: i32) -> Self {
		Self { id, reject: true }
	}

	pub const fn id(&self) -> i32 {
		self.id
	}
}

impl Provider for IdAlloc {
	fn select_on_copy(&self) -> Self {
		Self::new(UNSELECTED_ID)
	}

	fn admit(&self, layout: Layout) -> Result<(), ProviderError> {
		if self.reject {
			return Err(ProviderError::rejected(format!("IdAlloc({})", self.id), layout));
		}
		Ok(())
	}
}

/// Provider that travels with its content on copy, move and swap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PocAlloc(pub i32);

impl PocAlloc {
	pub const fn id(&self) -> i32 {
		self.0
	}
}

impl Provider for PocAlloc {
	const PROPAGATION: Propagation = Propagation::ALWAYS;
}

/// An `i32` drawn from a provider of type `A`.
///
/// `S` selects the constructor convention: [`Leading`] or [`Trailing`].
/// Equality compares the content only.
pub struct Widget<A, S> {
	value: i32,
	provider: A,
	_shape: PhantomData<fn() -> S>,
}

pub type LeadingWidget<A> = Widget<A, Leading>;
pub type TrailingWidget<A> = Widget<A, Trailing>;

impl<A: Provider, S> Widget<A, S> {
	pub fn new(value: i32, provider: A) -> Self {
		Self {
			value,
			provider,
			_shape: PhantomData,
		}
	}

	/// Like [`Widget::new`], but asks `provider` for room first.
	pub fn try_new(value: i32, provider: A) -> Result<Self, ConstructError> {
		provider.admit(Layout::new::<i32>())?;
		Ok(Self::new(value, provider))
	}

	pub fn value(&self) -> i32 {
		self.value
	}

	pub fn set(&mut self, value: i32) {
		self.value = value;
	}
}

impl<A: Provider, S> Clone for Widget<A, S> {
	fn clone(&self) -> Self {
		Self::new(self.value, self.provider.select_on_copy())
	}
}

impl<A, S> PartialEq for Widget<A, S> {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl<A: fmt::Debug, S> fmt::Debug for Widget<A, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Widget")
			.field("value", &self.value)
			.field("provider", &self.provider)
			.finish()
	}
}

impl<'a, A: Provider> ConstructFrom<(ProviderArg, A, &'a LeadingWidget<A>)> for LeadingWidget<A> {
	fn construct_from((ProviderArg, provider, source): (ProviderArg, A, &'a Self)) -> Result<Self, ConstructError> {
		Self::try_new(source.value, provider)
	}
}

// Value constructors without a provider fall back to `A::default()`.

impl<A: Provider + Default, S> ConstructFrom<()> for Widget<A, S> {
	fn construct_from((): ()) -> Result<Self, ConstructError> {
		Ok(Self::new(0, A::default()))
	}
}

impl<A: Provider + Default, S> ConstructFrom<(i32,)> for Widget<A, S> {
	fn construct_from((value,): (i32,)) -> Result<Self, ConstructError> {
		Ok(Self::new(value, A::default()))
	}
}

impl<A: Provider> ConstructFrom<(ProviderArg, A)> for LeadingWidget<A> {
	fn construct_from((ProviderArg, provider): (ProviderArg, A)) -> Result<Self, ConstructError> {
		Self::try_new(0, provider)
	}
}

impl<A: Provider> ConstructFrom<(ProviderArg, A, i32)> for LeadingWidget<A> {
	fn construct_from((ProviderArg, provider, value): (ProviderArg, A, i32)) -> Result<Self, ConstructError> {
		Self::try_new(value, provider)
	}
}

impl<A: Provider> ConstructFrom<(i32, A)> for TrailingWidget<A> {
	fn construct_from((value, provider): (i32, A)) -> Result<Self, ConstructError> {
		Self::try_new(value, provider)
	}
}

// `(A,)` would overlap `(i32,)` for a generic `A`, so the provider-only
// trailing constructor is spelled out per provider.
macro_rules! trailing_provider_only {
	($($provider:ty),+) => {
		$(
			impl ConstructFrom<($provider,)> for TrailingWidget<$provider> {
				fn construct_from((provider,): ($provider,)) -> Result<Self, ConstructError> {
					Self::try_new(0, provider)
				}
			}
		)+
	};
}

trailing_provider_only!(IdAlloc, PocAlloc, ErasedProvider);

impl<'a, A: Provider> ConstructFrom<(&'a TrailingWidget<A>, A)> for TrailingWidget<A> {
	fn construct_from((source, provider): (&'a Self, A)) -> Result<Self, ConstructError> {
		Self::try_new(source.value, provider)
	}
}

impl<A: Provider> Profile for LeadingWidget<A> {
	type Provider = A;
	type Shape = Leading;

	fn provider(&self) -> A {
		self.provider.clone()
	}
}

impl<A: Provider> Profile for TrailingWidget<A> {
	type Provider = A;
	type Shape = Trailing;

	fn provider(&self) -> A {
		self.provider.clone()
	}
}

/// A widget holding an erased provider; accepts any provider.
pub type ErasedWidget = TrailingWidget<ErasedProvider>;

/// Plain counter with no provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter(pub u32);

plain_profile!(Counter);

impl ConstructFrom<()> for Counter {
	fn construct_from((): ()) -> Result<Self, ConstructError> {
		Ok(Self::default())
	}
}

impl ConstructFrom<(u32,)> for Counter {
	fn construct_from((count,): (u32,)) -> Result<Self, ConstructError> {
		Ok(Self(count))
	}
}
