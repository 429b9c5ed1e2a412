//! `custody` binary.
//!
//! Loads scenario files describing values and the resources they draw from,
//! then either reports what each value accepts (`check`) or applies the
//! scenario's steps inside a single transaction (`run`).

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use custody_construct::{DefaultProvider, ErasedProvider, capabilities};
use tracing::info;

use crate::cli::{Cli, Command};
use crate::scenario::Slot;

mod cli;
mod config;
mod scenario;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	match cli.command {
		Command::Check { path } => check(&path),
		Command::Run { path, fail_at } => run(&path, fail_at),
	}
}

fn check(path: &Path) -> anyhow::Result<()> {
	let scenario = config::load(path).with_context(|| format!("invalid scenario {}", path.display()))?;

	println!("{}", capabilities::<Slot, ErasedProvider>());
	println!("{}", capabilities::<Slot, DefaultProvider>());
	println!("values:");
	print!("{}", scenario.report());
	match scenario.fail_at() {
		Some(n) => println!("{} step(s), failing after {n}", scenario.steps().len()),
		None => println!("{} step(s)", scenario.steps().len()),
	}
	Ok(())
}

fn run(path: &Path, fail_at: Option<usize>) -> anyhow::Result<()> {
	let mut scenario = config::load(path).with_context(|| format!("invalid scenario {}", path.display()))?;
	info!(
		path = %path.display(),
		values = scenario.slots().len(),
		steps = scenario.steps().len(),
		"running scenario"
	);

	println!("before:");
	print!("{}", scenario.report());
	let outcome = scenario.run(fail_at);
	info!(committed = outcome.is_committed(), "scenario finished");
	println!("{outcome}");
	println!("after:");
	print!("{}", scenario.report());
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("custody=debug,custody_txn=trace,custody_construct=trace,custody_provider=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
