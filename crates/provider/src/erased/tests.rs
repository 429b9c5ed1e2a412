use std::alloc::Layout;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Pool(u8);

impl Provider for Pool {}

#[test]
fn default_handles_share_the_default_resource() {
	let a = ErasedProvider::default();
	let b = ErasedProvider::default();
	assert!(a.ptr_eq(&b));
	assert_eq!(a, b);
	assert_eq!(a.resource().name(), "default");
}

#[test]
fn named_resources_compare_by_name() {
	let a = ErasedProvider::from_resource(NamedResource::new("scratch"));
	let b = ErasedProvider::from_resource(NamedResource::new("scratch"));
	let c = ErasedProvider::from_resource(NamedResource::new("frame"));
	assert!(!a.ptr_eq(&b));
	assert_eq!(a, b);
	assert_ne!(a, c);
	assert_ne!(a, ErasedProvider::default());
}

#[test]
fn clones_share_the_resource() {
	let a = ErasedProvider::from_resource(NamedResource::new("scratch"));
	let b = a.clone();
	assert!(a.ptr_eq(&b));
}

#[test]
fn erase_shares_existing_handles() {
	let shared = ErasedProvider::from_resource(NamedResource::new("scratch"));
	let erased = ErasedProvider::erase(&shared);
	assert!(erased.ptr_eq(&shared));
	assert_eq!(ErasedProvider::rebind(&shared), Some(shared));
}

#[test]
fn erase_maps_default_sentinel_to_default_resource() {
	let erased = ErasedProvider::erase(&DefaultProvider);
	assert!(erased.ptr_eq(&ErasedProvider::default()));
}

#[test]
fn erase_wraps_direct_providers() {
	let erased = ErasedProvider::erase(&Pool(7));
	let wrapped = erased.resource_as::<ProviderResource<Pool>>().unwrap();
	assert_eq!(wrapped.provider(), &Pool(7));
	assert_eq!(erased.resource().name(), "Pool(7)");

	assert_eq!(erased, ErasedProvider::erase(&Pool(7)));
	assert_ne!(erased, ErasedProvider::erase(&Pool(8)));
	assert!(ErasedProvider::can_rebind::<Pool>());
}

#[test]
fn bounded_resource_charges_until_exhausted() {
	let arena = Arc::new(BoundedResource::new("arena", 16));
	let provider = ErasedProvider::new(arena.clone());

	provider.admit(Layout::new::<u64>()).unwrap();
	provider.admit(Layout::new::<u32>()).unwrap();
	assert_eq!(arena.used(), 12);
	assert_eq!(arena.remaining(), 4);

	let err = provider.admit(Layout::new::<u64>()).unwrap_err();
	assert_eq!(
		err,
		ProviderError::Exhausted {
			resource: "arena".into(),
			requested: 8,
			remaining: 4,
		}
	);
	assert_eq!(arena.used(), 12, "rejected requests are not charged");
	assert_eq!(provider.resource_as::<BoundedResource>().unwrap().capacity(), 16);
}

#[test]
fn bounded_and_named_resources_never_compare_equal() {
	let bounded = ErasedProvider::from_resource(BoundedResource::new("arena", 8));
	let named = ErasedProvider::from_resource(NamedResource::new("arena"));
	assert_ne!(bounded, named);
}

#[test]
fn plain_clones_select_the_default_resource() {
	let scratch = ErasedProvider::from_resource(NamedResource::new("scratch"));
	let selected = scratch.select_on_copy();
	assert!(selected.ptr_eq(&ErasedProvider::default()));
	assert!(!<ErasedProvider as Provider>::PROPAGATION.on_copy_assign);
}
