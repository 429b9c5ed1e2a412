use std::alloc::Layout;
use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock};

use tracing::debug;

use super::MemoryResource;
use crate::{Provider, ProviderError};

static DEFAULT_RESOURCE: LazyLock<Arc<dyn MemoryResource>> =
	LazyLock::new(|| Arc::new(DefaultResource));

/// Returns the process-wide default resource.
pub fn default_resource() -> Arc<dyn MemoryResource> {
	Arc::clone(&DEFAULT_RESOURCE)
}

/// The resource behind [`default_resource`]. Admits everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultResource;

impl MemoryResource for DefaultResource {
	fn name(&self) -> &str {
		"default"
	}

	fn admit(&self, _layout: Layout) -> Result<(), ProviderError> {
		Ok(())
	}

	fn is_equal(&self, other: &dyn MemoryResource) -> bool {
		let other: &dyn Any = other;
		other.is::<DefaultResource>()
	}
}

/// An unbounded resource identified by name.
#[derive(Debug, Clone)]
pub struct NamedResource {
	name: String,
}

impl NamedResource {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

impl MemoryResource for NamedResource {
	fn name(&self) -> &str {
		&self.name
	}

	fn admit(&self, _layout: Layout) -> Result<(), ProviderError> {
		Ok(())
	}

	fn is_equal(&self, other: &dyn MemoryResource) -> bool {
		let other: &dyn Any = other;
		other
			.downcast_ref::<NamedResource>()
			.is_some_and(|other| other.name == self.name)
	}
}

/// A named resource with a fixed byte budget.
///
/// Every admitted request is charged against the budget and never refunded,
/// like a monotonic arena. Requests that do not fit are rejected with
/// [`ProviderError::Exhausted`].
#[derive(Debug)]
pub struct BoundedResource {
	name: String,
	capacity: usize,
	used: AtomicUsize,
}

impl BoundedResource {
	pub fn new(name: impl Into<String>, capacity: usize) -> Self {
		Self {
			name: name.into(),
			capacity,
			used: AtomicUsize::new(0),
		}
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Bytes charged so far.
	pub fn used(&self) -> usize {
		self.used.load(Ordering::Acquire)
	}

	/// Bytes still available.
	pub fn remaining(&self) -> usize {
		self.capacity.saturating_sub(self.used())
	}
}

impl MemoryResource for BoundedResource {
	fn name(&self) -> &str {
		&self.name
	}

	fn admit(&self, layout: Layout) -> Result<(), ProviderError> {
		let requested = layout.size();
		self.used
			.fetch_update(Ordering::AcqRel, Ordering::Acquire, |used| {
				used.checked_add(requested).filter(|total| *total <= self.capacity)
			})
			.map(|_| ())
			.map_err(|used| {
				let remaining = self.capacity.saturating_sub(used);
				debug!(resource = %self.name, requested, remaining, "bounded resource exhausted");
				ProviderError::Exhausted {
					resource: self.name.clone(),
					requested,
					remaining,
				}
			})
	}

	fn is_equal(&self, other: &dyn MemoryResource) -> bool {
		let other: &dyn Any = other;
		other
			.downcast_ref::<BoundedResource>()
			.is_some_and(|other| other.name == self.name)
	}
}

/// Adapts a direct provider into a [`MemoryResource`].
///
/// Two adaptors are equal when they wrap the same provider type and the
/// wrapped providers compare equal.
#[derive(Debug)]
pub struct ProviderResource<P> {
	provider: P,
	name: String,
}

impl<P: Provider> ProviderResource<P> {
	pub fn new(provider: P) -> Self {
		let name = format!("{provider:?}");
		Self { provider, name }
	}

	/// Returns the wrapped provider.
	pub fn provider(&self) -> &P {
		&self.provider
	}
}

impl<P: Provider> MemoryResource for ProviderResource<P> {
	fn name(&self) -> &str {
		&self.name
	}

	fn admit(&self, layout: Layout) -> Result<(), ProviderError> {
		self.provider.admit(layout)
	}

	fn is_equal(&self, other: &dyn MemoryResource) -> bool {
		let other: &dyn Any = other;
		other
			.downcast_ref::<ProviderResource<P>>()
			.is_some_and(|other| other.provider == self.provider)
	}
}
