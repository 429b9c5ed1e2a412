//! Error types for scenario files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a scenario file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or structure.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Two resources or two values share a name.
	#[error("duplicate {kind} name: {name}")]
	Duplicate {
		/// `"resource"` or `"value"`.
		kind: &'static str,
		name: String,
	},

	/// A value names a resource that was never declared.
	#[error("value `{value}` uses undeclared resource `{resource}`")]
	UnknownResource { value: String, resource: String },

	/// A step names a value that was never declared.
	#[error("step {index} sets undeclared value `{value}`")]
	UnknownValue { index: usize, value: String },

	/// A step would change the kind of a value.
	#[error("step {index} sets {found} content on {expected} value `{value}`")]
	KindMismatch {
		index: usize,
		value: String,
		expected: &'static str,
		found: &'static str,
	},
}

/// Result type for scenario loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
