use custody_construct::{
	ConstructError, ErasedProvider, Forwarded, Profile, ProviderPosition, capabilities, copy_with_donor,
	copy_with_provider, duplicate, forward_args, get_provider, provider_position, uses_provider,
};
use custody_provider::{BoundedResource, NamedResource, Provider, ProviderError};
use custody_testkit::{
	Counter, ErasedWidget, IdAlloc, LeadingWidget, PocAlloc, TrailingWidget, UNSELECTED_ID,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn scratch() -> ErasedProvider {
	ErasedProvider::from_resource(NamedResource::new("scratch"))
}

#[rstest]
#[case::leading(provider_position::<LeadingWidget<IdAlloc>>(), ProviderPosition::Leading)]
#[case::trailing(provider_position::<TrailingWidget<IdAlloc>>(), ProviderPosition::Trailing)]
#[case::erased(provider_position::<ErasedWidget>(), ProviderPosition::Trailing)]
#[case::counter(provider_position::<Counter>(), ProviderPosition::Absent)]
#[case::pair(provider_position::<(Counter, ErasedWidget)>(), ProviderPosition::Absent)]
fn positions(#[case] actual: ProviderPosition, #[case] expected: ProviderPosition) {
	assert_eq!(actual, expected);
}

#[test]
fn leading_and_trailing_widgets_take_the_provider() {
	let lead = LeadingWidget::new(3, IdAlloc::new(1));
	let trail = TrailingWidget::new(4, IdAlloc::new(1));

	let lead_copy = copy_with_provider(&lead, &IdAlloc::new(7)).unwrap();
	let trail_copy = copy_with_provider(&trail, &IdAlloc::new(7)).unwrap();

	assert_eq!(lead_copy.value(), 3);
	assert_eq!(get_provider(&lead_copy), IdAlloc::new(7));
	assert_eq!(trail_copy.value(), 4);
	assert_eq!(get_provider(&trail_copy), IdAlloc::new(7));
}

#[test]
fn incompatible_provider_falls_back_to_a_plain_clone() {
	let widget = LeadingWidget::new(3, IdAlloc::new(1));
	assert!(!uses_provider::<LeadingWidget<IdAlloc>, PocAlloc>());

	let copy = copy_with_provider(&widget, &PocAlloc(9)).unwrap();
	assert_eq!(copy.value(), 3);
	assert_eq!(copy.provider().id(), UNSELECTED_ID);
}

#[test]
fn pair_of_leading_and_trailing_widgets_gets_the_provider_on_both_sides() {
	let pair = (
		LeadingWidget::new(1, IdAlloc::new(1)),
		TrailingWidget::new(2, IdAlloc::new(2)),
	);
	assert!(uses_provider::<(LeadingWidget<IdAlloc>, TrailingWidget<IdAlloc>), IdAlloc>());

	let copy = copy_with_provider(&pair, &IdAlloc::new(5)).unwrap();
	assert_eq!(copy, pair);
	assert_eq!(copy.0.provider(), IdAlloc::new(5));
	assert_eq!(copy.1.provider(), IdAlloc::new(5));
}

#[test]
fn nested_pairs_recurse() {
	let nested = (
		(Counter(1), LeadingWidget::new(2, IdAlloc::new(1))),
		(ErasedWidget::new(3, ErasedProvider::default()), Counter(4)),
	);

	let copy = copy_with_provider(&nested, &IdAlloc::new(6)).unwrap();
	assert_eq!(copy, nested);
	assert_eq!(copy.0.1.provider(), IdAlloc::new(6));
	assert_eq!(copy.1.0.provider(), ErasedProvider::erase(&IdAlloc::new(6)));
	assert_eq!(copy.1.1, Counter(4));
}

#[test]
fn erased_widget_wraps_foreign_providers() {
	let widget = ErasedWidget::new(8, scratch());

	let copy = copy_with_provider(&widget, &PocAlloc(2)).unwrap();
	let wrapped = copy.provider();
	assert_eq!(wrapped.resource().name(), "PocAlloc(2)");
	assert_ne!(wrapped, scratch());

	let shared = scratch();
	let copy = copy_with_provider(&widget, &shared).unwrap();
	assert!(copy.provider().ptr_eq(&shared));
}

#[test]
fn erased_widget_clone_selects_the_default_resource() {
	let widget = ErasedWidget::new(8, scratch());
	assert_eq!(widget.clone().provider(), ErasedProvider::default());
	assert_eq!(duplicate(&widget).unwrap().provider(), scratch());
}

#[test]
fn rejection_surfaces_as_a_provider_error() {
	let widget = TrailingWidget::new(3, IdAlloc::new(1));
	let err = copy_with_provider(&widget, &IdAlloc::rejecting(4)).unwrap_err();
	assert!(matches!(err, ConstructError::Provider(ProviderError::Rejected { .. })));
	assert_eq!(err.to_string(), "IdAlloc(4) rejected a request of 4 bytes (align 4)");
}

#[test]
fn bounded_resource_runs_out() {
	let arena = ErasedProvider::from_resource(BoundedResource::new("arena", 8));
	let widget = ErasedWidget::new(1, ErasedProvider::default());

	copy_with_provider(&widget, &arena).unwrap();
	copy_with_provider(&widget, &arena).unwrap();
	let err = copy_with_provider(&widget, &arena).unwrap_err();
	assert_eq!(
		err,
		ConstructError::Provider(ProviderError::Exhausted {
			resource: "arena".into(),
			requested: 4,
			remaining: 0,
		})
	);
}

#[test]
fn donor_and_duplicate() {
	let widget = LeadingWidget::new(3, IdAlloc::new(1));
	let donor = TrailingWidget::new(0, IdAlloc::new(12));
	assert_eq!(copy_with_donor(&widget, &donor).unwrap().provider(), IdAlloc::new(12));
	assert_eq!(duplicate(&widget).unwrap().provider(), IdAlloc::new(1));

	let pair = (widget.clone(), TrailingWidget::new(5, IdAlloc::new(2)));
	let copy = duplicate(&pair).unwrap();
	assert_eq!(copy.0.provider(), widget.provider().select_on_copy());
	assert_eq!(copy.1.provider(), IdAlloc::new(2));
}

#[test]
fn forwarding_a_counter_ignores_the_provider() {
	assert!(matches!(forward_args(&Counter(2), &IdAlloc::new(1)), Forwarded::Ignored(_)));
	assert_eq!(copy_with_provider(&Counter(2), &IdAlloc::new(1)).unwrap(), Counter(2));
	assert_eq!(get_provider(&Counter(2)), custody_construct::DefaultProvider);
}

#[test]
fn capability_display() {
	let report = capabilities::<LeadingWidget<IdAlloc>, IdAlloc>();
	assert!(report.to_string().ends_with("(position: leading, erasure: direct)"));
	assert!(report.to_string().contains(" uses "));

	let report = capabilities::<LeadingWidget<IdAlloc>, PocAlloc>();
	assert!(report.to_string().contains(" ignores "));
}
