use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use custody_provider::DefaultProvider;

use crate::{Plain, Profile};

/// Implements [`Profile`] for types that carry no provider.
///
/// ```
/// #[derive(Clone)]
/// struct Celsius(f32);
///
/// custody_construct::plain_profile!(Celsius);
///
/// assert!(!custody_construct::has_provider_accessor::<Celsius>());
///
/// let provider = custody_construct::DefaultProvider;
/// let made: Celsius = custody_construct::make_with_provider(&provider, (Celsius(21.5),)).unwrap();
/// assert_eq!(made.0, 21.5);
/// ```
#[macro_export]
macro_rules! plain_profile {
	($($ty:ty),+ $(,)?) => {
		$(
			impl $crate::Profile for $ty {
				type Provider = $crate::DefaultProvider;
				type Shape = $crate::Plain;

				const HAS_ACCESSOR: bool = false;

				fn provider(&self) -> $crate::DefaultProvider {
					$crate::DefaultProvider
				}
			}

			impl $crate::ConstructFrom<($ty,)> for $ty {
				fn construct_from((value,): ($ty,)) -> $crate::Result<Self> {
					Ok(value)
				}
			}
		)+
	};
}

plain_profile!(
	(),
	bool,
	char,
	i8,
	i16,
	i32,
	i64,
	i128,
	isize,
	u8,
	u16,
	u32,
	u64,
	u128,
	usize,
	f32,
	f64,
	String,
	&'static str,
);

impl<T: Clone + 'static> Profile for Vec<T> {
	type Provider = DefaultProvider;
	type Shape = Plain;

	const HAS_ACCESSOR: bool = false;

	fn provider(&self) -> DefaultProvider {
		DefaultProvider
	}
}

impl<T: Clone + 'static> Profile for Option<T> {
	type Provider = DefaultProvider;
	type Shape = Plain;

	const HAS_ACCESSOR: bool = false;

	fn provider(&self) -> DefaultProvider {
		DefaultProvider
	}
}

impl<K, V> Profile for HashMap<K, V>
where
	K: Clone + Eq + Hash + 'static,
	V: Clone + 'static,
{
	type Provider = DefaultProvider;
	type Shape = Plain;

	const HAS_ACCESSOR: bool = false;

	fn provider(&self) -> DefaultProvider {
		DefaultProvider
	}
}

impl<K: Clone + Ord + 'static, V: Clone + 'static> Profile for BTreeMap<K, V> {
	type Provider = DefaultProvider;
	type Shape = Plain;

	const HAS_ACCESSOR: bool = false;

	fn provider(&self) -> DefaultProvider {
		DefaultProvider
	}
}
