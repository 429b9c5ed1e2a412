//! Assignment and mutation of provider-aware values.
//!
//! [`assign_via_swap`] assigns a value by building a temporary with the right
//! provider and swapping it in, so a failed construction leaves the target
//! untouched. [`transact`] extends the same idea to several values at once:
//! every value is copied, the copies are mutated, and the originals are only
//! replaced if the mutation succeeds.

/// Propagation-aware assignment through a swap.
pub mod assign;
/// Transaction errors.
pub mod error;
/// All-or-nothing mutation of several values.
pub mod transact;

pub use assign::{AssignMode, Incoming, assign_via_swap, copy_assign, move_assign};
pub use error::{PrepareError, TransactError};
pub use transact::{Copies, TransactionSet, transact};
