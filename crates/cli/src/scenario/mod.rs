//! Scenario values and the transactional runner.

use std::alloc::Layout;
use std::error::Error as _;
use std::fmt;

use custody_construct::{ConstructError, ConstructFrom, Profile, Trailing};
use custody_provider::{ErasedProvider, Provider};
use custody_txn::{TransactError, move_assign, transact};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Content of a scenario value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Content {
	Int(i64),
	Text(String),
}

impl Content {
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Int(_) => "integer",
			Self::Text(_) => "text",
		}
	}

	/// Storage a copy of this content asks its provider for.
	pub fn layout(&self) -> Layout {
		match self {
			Self::Int(_) => Layout::new::<i64>(),
			Self::Text(text) => Layout::for_value(text.as_bytes()),
		}
	}
}

impl fmt::Display for Content {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(n) => write!(f, "{n}"),
			Self::Text(text) => write!(f, "{text:?}"),
		}
	}
}

/// A named value drawing from an erased resource.
///
/// Copies made for a resource are charged against it; plain clones fall back
/// to the default resource.
#[derive(Debug)]
pub struct Slot {
	name: String,
	content: Content,
	provider: ErasedProvider,
}

impl Slot {
	pub fn new(name: impl Into<String>, content: Content, provider: ErasedProvider) -> Self {
		Self {
			name: name.into(),
			content,
			provider,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn content(&self) -> &Content {
		&self.content
	}

	pub fn resource_name(&self) -> &str {
		self.provider.resource().name()
	}
}

impl Clone for Slot {
	fn clone(&self) -> Self {
		Self::new(self.name.clone(), self.content.clone(), self.provider.select_on_copy())
	}
}

impl<'a> ConstructFrom<(&'a Slot, ErasedProvider)> for Slot {
	fn construct_from((source, provider): (&'a Slot, ErasedProvider)) -> Result<Self, ConstructError> {
		provider.admit(source.content.layout())?;
		Ok(Self::new(source.name.clone(), source.content.clone(), provider))
	}
}

impl Profile for Slot {
	type Provider = ErasedProvider;
	type Shape = Trailing;

	fn provider(&self) -> ErasedProvider {
		self.provider.clone()
	}
}

impl fmt::Display for Slot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} = {} [{}]", self.name, self.content, self.resource_name())
	}
}

/// Replaces the content of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
	/// Index into the scenario's slots.
	pub slot: usize,
	pub set: Content,
}

/// Why a scenario's transaction body stopped.
#[derive(Debug, Error)]
pub enum StepError {
	#[error("injected failure after {0} step(s)")]
	Injected(usize),

	#[error("step {index} could not assign `{value}`")]
	Assign {
		index: usize,
		value: String,
		#[source]
		source: ConstructError,
	},
}

/// Result of [`Scenario::run`].
#[derive(Debug)]
pub enum Outcome {
	Committed { steps: usize },
	RolledBack(TransactError<StepError>),
}

impl Outcome {
	pub fn is_committed(&self) -> bool {
		matches!(self, Self::Committed { .. })
	}
}

impl fmt::Display for Outcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Committed { steps } => write!(f, "committed {steps} step(s)"),
			Self::RolledBack(err) => {
				write!(f, "rolled back: {err}")?;
				let mut source = err.source();
				while let Some(cause) = source {
					write!(f, ": {cause}")?;
					source = cause.source();
				}
				Ok(())
			}
		}
	}
}

/// A validated scenario: values, the steps to apply, and optional failure injection.
#[derive(Debug)]
pub struct Scenario {
	slots: Vec<Slot>,
	steps: Vec<Step>,
	fail_at: Option<usize>,
}

impl Scenario {
	pub fn new(slots: Vec<Slot>, steps: Vec<Step>, fail_at: Option<usize>) -> Self {
		Self { slots, steps, fail_at }
	}

	pub fn slots(&self) -> &[Slot] {
		&self.slots
	}

	pub fn steps(&self) -> &[Step] {
		&self.steps
	}

	pub fn fail_at(&self) -> Option<usize> {
		self.fail_at
	}

	/// Applies every step inside one transaction over all slots.
	///
	/// Each step move-assigns fresh content into its slot's copy, so the new
	/// content is charged against the slot's resource. With `fail_at = N` (or the
	/// scenario's own setting) the body gives up after `N` steps. Either way the
	/// slots only change if the whole body succeeds.
	pub fn run(&mut self, fail_at: Option<usize>) -> Outcome {
		let fail_at = fail_at.or(self.fail_at);
		let steps = &self.steps;

		let result = transact(self.slots.as_mut_slice(), |copies| {
			for (index, step) in steps.iter().enumerate() {
				if fail_at == Some(index) {
					return Err(StepError::Injected(index));
				}
				let slot = &mut copies[step.slot];
				let value = slot.name().to_owned();
				let incoming = Slot::new(value.clone(), step.set.clone(), ErasedProvider::default());
				move_assign(slot, incoming).map_err(|source| StepError::Assign { index, value, source })?;
				trace!(step = index, slot = %copies[step.slot], "applied");
			}
			if fail_at.is_some_and(|n| n >= steps.len()) {
				return Err(StepError::Injected(steps.len()));
			}
			Ok(steps.len())
		});

		match result {
			Ok(steps) => Outcome::Committed { steps },
			Err(err) => {
				debug!(error = %err, "scenario rolled back");
				Outcome::RolledBack(err)
			}
		}
	}

	/// One line per slot.
	pub fn report(&self) -> String {
		self.slots.iter().map(|slot| format!("  {slot}\n")).collect()
	}
}
