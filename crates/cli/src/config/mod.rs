//! Scenario file loading.
//!
//! ```toml
//! [[resource]]
//! name = "arena"
//! capacity = 64        # bytes; omit for an unbounded resource
//!
//! [[value]]
//! name = "count"
//! resource = "arena"   # omit to use the default resource
//! initial = 3
//!
//! [[step]]
//! value = "count"
//! set = 4
//!
//! [transaction]
//! fail_at = 1          # give up after this many steps
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use custody_provider::{BoundedResource, ErasedProvider, NamedResource};
use serde::Deserialize;
use tracing::debug;

use crate::scenario::{Content, Scenario, Slot, Step};

mod error;

pub use error::{ConfigError, Result};

/// Raw scenario file, before names are resolved.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
	#[serde(default, rename = "resource")]
	pub resources: Vec<ResourceDef>,
	#[serde(default, rename = "value")]
	pub values: Vec<ValueDef>,
	#[serde(default, rename = "step")]
	pub steps: Vec<StepDef>,
	#[serde(default)]
	pub transaction: TransactionDef,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDef {
	pub name: String,
	/// Byte budget; unbounded if absent.
	pub capacity: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueDef {
	pub name: String,
	pub resource: Option<String>,
	pub initial: Content,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepDef {
	pub value: String,
	pub set: Content,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionDef {
	pub fail_at: Option<usize>,
}

impl ScenarioFile {
	/// Resolves names and builds one resource per `[[resource]]` entry.
	pub fn validate(self) -> Result<Scenario> {
		let mut resources = HashMap::new();
		for def in &self.resources {
			let provider = match def.capacity {
				Some(capacity) => ErasedProvider::from_resource(BoundedResource::new(&def.name, capacity)),
				None => ErasedProvider::from_resource(NamedResource::new(&def.name)),
			};
			if resources.insert(def.name.as_str(), provider).is_some() {
				return Err(ConfigError::Duplicate {
					kind: "resource",
					name: def.name.clone(),
				});
			}
		}

		let mut slots = Vec::with_capacity(self.values.len());
		let mut index = HashMap::new();
		for def in &self.values {
			let provider = match &def.resource {
				None => ErasedProvider::default(),
				Some(name) => resources
					.get(name.as_str())
					.cloned()
					.ok_or_else(|| ConfigError::UnknownResource {
						value: def.name.clone(),
						resource: name.clone(),
					})?,
			};
			if index.insert(def.name.as_str(), slots.len()).is_some() {
				return Err(ConfigError::Duplicate {
					kind: "value",
					name: def.name.clone(),
				});
			}
			slots.push(Slot::new(def.name.clone(), def.initial.clone(), provider));
		}

		let mut steps = Vec::with_capacity(self.steps.len());
		for (i, def) in self.steps.iter().enumerate() {
			let Some(&slot) = index.get(def.value.as_str()) else {
				return Err(ConfigError::UnknownValue {
					index: i,
					value: def.value.clone(),
				});
			};
			let expected = slots[slot].content().kind();
			if def.set.kind() != expected {
				return Err(ConfigError::KindMismatch {
					index: i,
					value: def.value.clone(),
					expected,
					found: def.set.kind(),
				});
			}
			steps.push(Step {
				slot,
				set: def.set.clone(),
			});
		}

		debug!(
			resources = resources.len(),
			values = slots.len(),
			steps = steps.len(),
			"scenario validated"
		);
		Ok(Scenario::new(slots, steps, self.transaction.fail_at))
	}
}

/// Parses and validates scenario text.
pub fn parse(text: &str) -> Result<Scenario> {
	let file: ScenarioFile = toml::from_str(text)?;
	file.validate()
}

/// Reads, parses and validates a scenario file.
pub fn load(path: &Path) -> Result<Scenario> {
	let text = fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	parse(&text)
}

#[cfg(test)]
mod tests;
