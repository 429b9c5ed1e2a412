//! Provider-aware construction for values of arbitrary types.
//!
//! Generic code that copies a value often needs the copy to draw from a
//! particular provider. How a type takes its provider differs from type to type:
//! some want it first behind a [`ProviderArg`] tag, some want it last, pairs
//! want each half handled on its own, and plain values have no use for one.
//! Each type states its convention once through [`Profile`]; everything else in
//! this crate dispatches on that statement.
//!
//! ```text
//! copy_with_provider(source, provider)
//!   └─ forward_args ──► Forwarded::Ignored((source,))                      plain / incompatible
//!                   ├─► Forwarded::Provided((ProviderArg, p, source))      Leading
//!                   ├─► Forwarded::Provided((source, p))                   Trailing
//!                   └─► Forwarded::Provided((Piecewise, first, second))    Pairwise (recursive)
//!   └─ make_from_args ──► T
//! ```
//!
//! [`make_with_provider`] does the same for arbitrary constructor arguments
//! rather than a source value.

/// Argument lists, tags, and the constructor protocol.
pub mod args;
/// Construction operations.
pub mod dispatch;
/// Construction errors.
pub mod error;
/// Static capability predicates.
pub mod introspect;
/// Construction from arbitrary argument tuples.
pub mod make;
/// Pair-like composites.
pub mod pair;
/// Plain value profiles for standard types.
pub mod plain;
/// Provider conventions and their dispatch.
pub mod shape;

pub use args::{ArgList, ArgTuple, ConstructFrom, Forwarded, Piecewise, ProviderArg};
pub use custody_provider::{DefaultProvider, Erasure, ErasedProvider, Propagation, Provider};
pub use dispatch::{
	ArgsOf, ForwardedOf, construct_in, copy_with_donor, copy_with_provider, duplicate, forward_args,
	get_provider, make_from_args,
};
pub use error::{ConstructError, Result};
pub use introspect::{
	Capabilities, Profile, ProviderPosition, accepts_leading_provider, accepts_trailing_provider,
	capabilities, erasure_kind, has_provider_accessor, is_composite, provider_position, uses_provider,
};
pub use make::{
	Prepared, PreparedOf, ShapeArgs, construct_with_in, make_from_prepared, make_with_provider, prepare_args,
};
pub use pair::Composite;
pub use shape::{Leading, Pairwise, Plain, Shape, Trailing};
