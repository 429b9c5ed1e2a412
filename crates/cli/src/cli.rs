use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "custody")]
#[command(about = "Run provider-aware values through all-or-nothing transactions")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Validate a scenario and print what each value accepts
	Check {
		/// Scenario file
		#[arg(value_name = "SCENARIO")]
		path: PathBuf,
	},
	/// Apply a scenario's steps inside one transaction
	Run {
		/// Scenario file
		#[arg(value_name = "SCENARIO")]
		path: PathBuf,

		/// Abort after this many steps, overriding the scenario's `fail_at`
		#[arg(long, value_name = "N")]
		fail_at: Option<usize>,
	},
}
