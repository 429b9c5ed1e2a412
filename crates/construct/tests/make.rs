use std::mem::MaybeUninit;

use custody_construct::{
	ConstructError, ErasedProvider, Prepared, Profile, construct_with_in, make_with_provider, prepare_args,
};
use custody_provider::{BoundedResource, ProviderError};
use custody_testkit::{Counter, ErasedWidget, IdAlloc, LeadingWidget, PocAlloc, TrailingWidget};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::with_value(make_with_provider::<LeadingWidget<IdAlloc>, _, _>(&IdAlloc::new(3), (7_i32,)), 7)]
#[case::empty(make_with_provider::<LeadingWidget<IdAlloc>, _, _>(&IdAlloc::new(3), ()), 0)]
fn leading_widget_gets_the_provider_first(
	#[case] made: Result<LeadingWidget<IdAlloc>, ConstructError>,
	#[case] value: i32,
) {
	let made = made.unwrap();
	assert_eq!(made.value(), value);
	assert_eq!(made.provider(), IdAlloc::new(3));
}

#[rstest]
#[case::with_value(make_with_provider::<TrailingWidget<IdAlloc>, _, _>(&IdAlloc::new(4), (5_i32,)), 5)]
#[case::empty(make_with_provider::<TrailingWidget<IdAlloc>, _, _>(&IdAlloc::new(4), ()), 0)]
fn trailing_widget_gets_the_provider_last(
	#[case] made: Result<TrailingWidget<IdAlloc>, ConstructError>,
	#[case] value: i32,
) {
	let made = made.unwrap();
	assert_eq!(made.value(), value);
	assert_eq!(made.provider(), IdAlloc::new(4));
}

#[test]
fn incompatible_provider_uses_the_plain_constructor() {
	let prepared = prepare_args::<LeadingWidget<IdAlloc>, _, _>(&PocAlloc(9), (7_i32,));
	assert!(matches!(prepared, Prepared::Plain((7,))));

	let made: LeadingWidget<IdAlloc> = make_with_provider(&PocAlloc(9), (7_i32,)).unwrap();
	assert_eq!(made.value(), 7);
	assert_eq!(made.provider(), IdAlloc::default());
}

#[test]
fn plain_values_ignore_the_provider() {
	let prepared = prepare_args::<Counter, _, _>(&IdAlloc::new(1), (5_u32,));
	assert!(!prepared.is_provided());

	let made: Counter = make_with_provider(&IdAlloc::new(1), (5_u32,)).unwrap();
	assert_eq!(made, Counter(5));
	let moved: i32 = make_with_provider(&IdAlloc::new(1), (12_i32,)).unwrap();
	assert_eq!(moved, 12);
}

#[test]
fn erased_widget_wraps_the_provider() {
	let made: ErasedWidget = make_with_provider(&PocAlloc(2), (6_i32,)).unwrap();
	assert_eq!(made.value(), 6);
	assert_eq!(made.provider().resource().name(), "PocAlloc(2)");
}

#[test]
fn rejected_request_is_reported() {
	let err = make_with_provider::<TrailingWidget<IdAlloc>, _, _>(&IdAlloc::rejecting(1), (3_i32,)).unwrap_err();
	assert!(matches!(err, ConstructError::Provider(ProviderError::Rejected { .. })));

	let arena = ErasedProvider::from_resource(BoundedResource::new("arena", 4));
	let _first: ErasedWidget = make_with_provider(&arena, ()).unwrap();
	let second = make_with_provider::<ErasedWidget, _, _>(&arena, ());
	assert!(matches!(
		second,
		Err(ConstructError::Provider(ProviderError::Exhausted { .. }))
	));
}

#[test]
fn empty_pair_is_built_piecewise() {
	type Mixed = (LeadingWidget<IdAlloc>, TrailingWidget<IdAlloc>);

	let prepared = prepare_args::<Mixed, _, _>(&IdAlloc::new(8), ());
	assert!(prepared.is_provided());

	let (first, second): Mixed = make_with_provider(&IdAlloc::new(8), ()).unwrap();
	assert_eq!((first.value(), second.value()), (0, 0));
	assert_eq!(first.provider(), IdAlloc::new(8));
	assert_eq!(second.provider(), IdAlloc::new(8));
}

#[test]
fn pair_elements_get_their_own_arguments() {
	let (first, second): (LeadingWidget<IdAlloc>, Counter) =
		make_with_provider(&IdAlloc::new(2), (10_i32, 20_u32)).unwrap();

	assert_eq!(first.value(), 10);
	assert_eq!(first.provider(), IdAlloc::new(2));
	assert_eq!(second, Counter(20));
}

#[test]
fn pair_without_a_user_falls_back_to_plain_arguments() {
	let prepared = prepare_args::<(Counter, Counter), _, _>(&IdAlloc::new(2), (1_u32, 2_u32));
	assert!(matches!(prepared, Prepared::Plain((1, 2))));

	let made: (Counter, Counter) = make_with_provider(&IdAlloc::new(2), ()).unwrap();
	assert_eq!(made, (Counter(0), Counter(0)));
}

#[test]
fn nested_empty_pair_reaches_every_widget() {
	type Nested = ((LeadingWidget<IdAlloc>, Counter), TrailingWidget<IdAlloc>);

	let ((inner, counter), outer): Nested = make_with_provider(&IdAlloc::new(6), ()).unwrap();

	assert_eq!(inner.provider(), IdAlloc::new(6));
	assert_eq!(counter, Counter(0));
	assert_eq!(outer.provider(), IdAlloc::new(6));
}

#[test]
fn construct_with_in_fills_the_slot() {
	let mut slot = MaybeUninit::<TrailingWidget<PocAlloc>>::uninit();

	let made = construct_with_in(&mut slot, &PocAlloc(5), (11_i32,)).unwrap();
	assert_eq!(made.value(), 11);
	assert_eq!(made.provider(), PocAlloc(5));
}

#[test]
fn construct_with_in_leaves_the_slot_empty_on_failure() {
	let mut slot = MaybeUninit::<LeadingWidget<IdAlloc>>::uninit();
	assert!(construct_with_in(&mut slot, &IdAlloc::rejecting(1), ()).is_err());
}
