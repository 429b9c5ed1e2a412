//! Resource provider handles.
//!
//! A provider is the thing a value draws its storage from: an allocator, an
//! arena, a pooled memory resource. This crate only models what generic code
//! needs to know about one: its identity (equality), whether it accepts a
//! request, and how it behaves when the value carrying it is assigned.
//!
//! Two disciplines are supported:
//!
//! - **Direct** providers are ordinary types implementing [`Provider`]. A value
//!   generic over `A: Provider` only accepts `A` (or whatever `A::rebind` admits).
//! - **Erased** providers are [`ErasedProvider`] handles around an
//!   `Arc<dyn MemoryResource>`. They accept any provider by wrapping it.
//!
//! [`DefaultProvider`] is the sentinel reported for values that carry no
//! provider at all.

/// Type-erased memory resources and the [`ErasedProvider`] handle.
pub mod erased;
/// Provider errors.
pub mod error;
/// Propagation flags and erasure kinds.
pub mod propagation;
/// The [`Provider`] trait and the default sentinel.
pub mod provider;

pub use erased::{
	BoundedResource, DefaultResource, ErasedProvider, MemoryResource, NamedResource, ProviderResource,
	default_resource,
};
pub use error::{ProviderError, Result};
pub use propagation::{Erasure, Propagation};
pub use provider::{DefaultProvider, Provider};
