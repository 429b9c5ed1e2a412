//! Type-erased memory resources.
//!
//! Values following the erased discipline store an [`ErasedProvider`]: a
//! shared handle to some `dyn MemoryResource`. Any provider can be erased, so
//! such values accept whatever provider generic code hands them.

use std::alloc::Layout;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::{DefaultProvider, Erasure, Provider, ProviderError};

mod resources;

pub use resources::{BoundedResource, DefaultResource, NamedResource, ProviderResource, default_resource};

/// A polymorphic, equality-comparable resource.
pub trait MemoryResource: Any + fmt::Debug + Send + Sync {
	/// Human-readable name used in logs and error messages.
	fn name(&self) -> &str;

	/// Decides whether a request for `layout` would be served.
	fn admit(&self, layout: Layout) -> Result<(), ProviderError>;

	/// Returns true if memory from `self` can be released through `other` and vice versa.
	fn is_equal(&self, other: &dyn MemoryResource) -> bool;
}

/// Shared handle to a [`MemoryResource`].
///
/// Cloning the handle is a reference-count bump. Two handles compare equal when
/// they share a resource or the resources report [`MemoryResource::is_equal`].
#[derive(Clone)]
pub struct ErasedProvider {
	resource: Arc<dyn MemoryResource>,
}

impl ErasedProvider {
	/// Wraps an already shared resource.
	pub fn new(resource: Arc<dyn MemoryResource>) -> Self {
		Self { resource }
	}

	/// Takes ownership of `resource` and wraps it.
	pub fn from_resource<R: MemoryResource>(resource: R) -> Self {
		Self::new(Arc::new(resource))
	}

	/// Erases an arbitrary provider.
	///
	/// Erased handles are shared as-is and [`DefaultProvider`] maps to the
	/// process-wide [`default_resource`]. Any other provider is wrapped in a
	/// [`ProviderResource`].
	pub fn erase<P: Provider>(provider: &P) -> Self {
		let any: &dyn Any = provider;
		if let Some(erased) = any.downcast_ref::<ErasedProvider>() {
			return erased.clone();
		}
		if any.is::<DefaultProvider>() {
			return Self::default();
		}
		Self::from_resource(ProviderResource::new(provider.clone()))
	}

	/// Returns the underlying resource.
	pub fn resource(&self) -> &dyn MemoryResource {
		&*self.resource
	}

	/// Downcasts the underlying resource to a concrete type.
	pub fn resource_as<R: MemoryResource>(&self) -> Option<&R> {
		let any: &dyn Any = &*self.resource;
		any.downcast_ref::<R>()
	}

	/// Returns true if both handles point at the same resource object.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.resource, &other.resource)
	}
}

impl Default for ErasedProvider {
	fn default() -> Self {
		Self::new(default_resource())
	}
}

impl PartialEq for ErasedProvider {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other) || self.resource.is_equal(&*other.resource)
	}
}

impl fmt::Debug for ErasedProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ErasedProvider").field(&self.resource.name()).finish()
	}
}

impl Provider for ErasedProvider {
	const ERASURE: Erasure = Erasure::Erased;

	/// Plain clones of erased values fall back to the default resource.
	fn select_on_copy(&self) -> Self {
		Self::default()
	}

	fn admit(&self, layout: Layout) -> Result<(), ProviderError> {
		self.resource.admit(layout)
	}

	fn rebind<Q: Provider>(other: &Q) -> Option<Self> {
		Some(Self::erase(other))
	}

	fn can_rebind<Q: Provider>() -> bool {
		true
	}
}

#[cfg(test)]
mod tests;
