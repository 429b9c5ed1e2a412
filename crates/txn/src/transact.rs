use std::mem;
use std::ops::{Deref, DerefMut};

use custody_construct::{Profile, duplicate};
use tracing::{debug, debug_span, trace};

use crate::error::{PrepareError, TransactError};

/// A group of values mutated together by [`transact`].
///
/// Implemented for tuples of up to eight mutable references, which may point at
/// values of different types, and for mutable slices.
pub trait TransactionSet {
	/// Speculative copies handed to the transaction body.
	type Copies;

	/// Number of values in the set.
	fn arity(&self) -> usize;

	/// Copies every value in order, each keeping its own provider.
	///
	/// Stops at the first failure; copies built so far are dropped.
	fn prepare(&self) -> Result<Self::Copies, PrepareError>;

	/// Swaps every value with its copy.
	fn commit(self, copies: &mut Self::Copies);
}

fn prepare_one<T: Profile>(index: usize, value: &T) -> Result<T, PrepareError> {
	duplicate(value).map_err(|source| PrepareError { index, source })
}

macro_rules! impl_transaction_set {
	($($len:literal => ($($idx:tt $name:ident),+)),+ $(,)?) => {
		$(
			impl<'v, $($name: Profile),+> TransactionSet for ($(&'v mut $name,)+) {
				type Copies = ($($name,)+);

				fn arity(&self) -> usize {
					$len
				}

				fn prepare(&self) -> Result<Self::Copies, PrepareError> {
					Ok(($(prepare_one($idx, &*self.$idx)?,)+))
				}

				fn commit(self, copies: &mut Self::Copies) {
					$(mem::swap(self.$idx, &mut copies.$idx);)+
				}
			}
		)+
	};
}

impl_transaction_set! {
	1 => (0 A),
	2 => (0 A, 1 B),
	3 => (0 A, 1 B, 2 C),
	4 => (0 A, 1 B, 2 C, 3 D),
	5 => (0 A, 1 B, 2 C, 3 D, 4 E),
	6 => (0 A, 1 B, 2 C, 3 D, 4 E, 5 F),
	7 => (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G),
	8 => (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H),
}

/// Copies of the elements of a slice transaction.
///
/// Derefs to a slice of the same length as the originals; elements can be
/// mutated but not added or removed.
#[derive(Debug)]
pub struct Copies<T>(Vec<T>);

impl<T> Deref for Copies<T> {
	type Target = [T];

	fn deref(&self) -> &[T] {
		&self.0
	}
}

impl<T> DerefMut for Copies<T> {
	fn deref_mut(&mut self) -> &mut [T] {
		&mut self.0
	}
}

impl<'v, T: Profile> TransactionSet for &'v mut [T] {
	type Copies = Copies<T>;

	fn arity(&self) -> usize {
		self.len()
	}

	fn prepare(&self) -> Result<Copies<T>, PrepareError> {
		self.iter()
			.enumerate()
			.map(|(index, value)| prepare_one(index, value))
			.collect::<Result<Vec<_>, _>>()
			.map(Copies)
	}

	fn commit(self, copies: &mut Copies<T>) {
		self.swap_with_slice(&mut copies.0);
	}
}

/// Mutates several values all-or-nothing.
///
/// 1. Each value is copied in order with [`duplicate`], so every copy keeps the
///    provider of its original.
/// 2. `body` runs on the copies.
/// 3. If `body` returns `Ok`, every original is swapped with its copy and the
///    body's result is returned.
///
/// If a copy cannot be built the body never runs. If the body returns `Err` or
/// panics, the copies are dropped. The originals are unchanged in all three
/// cases.
///
/// ```
/// use custody_txn::{TransactError, transact};
///
/// let (mut a, mut b) = (3_i32, String::from("x"));
/// let doubled = transact((&mut a, &mut b), |(a, b)| {
/// 	*a += 1;
/// 	b.push('y');
/// 	Ok::<_, std::fmt::Error>(*a * 2)
/// })
/// .unwrap();
/// assert_eq!((doubled, a, b.as_str()), (8, 4, "xy"));
///
/// let failed = transact((&mut a,), |(a,)| {
/// 	*a = 0;
/// 	Err::<(), _>(std::fmt::Error)
/// });
/// assert!(matches!(failed, Err(TransactError::Body(_))));
/// assert_eq!(a, 4);
/// ```
pub fn transact<S, R, E, F>(values: S, body: F) -> Result<R, TransactError<E>>
where
	S: TransactionSet,
	F: FnOnce(&mut S::Copies) -> Result<R, E>,
{
	let span = debug_span!("transact", arity = values.arity());
	let _guard = span.enter();

	trace!("building copies");
	let mut copies = values.prepare().inspect_err(|err| {
		debug!(index = err.index, error = %err.source, "aborted while copying");
	})?;

	trace!("invoking body");
	match body(&mut copies) {
		Ok(result) => {
			values.commit(&mut copies);
			trace!("committed");
			Ok(result)
		}
		Err(err) => {
			debug!("body failed, rolling back");
			Err(TransactError::Body(err))
		}
	}
}
