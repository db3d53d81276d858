use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use rs_overlap_core::DEFAULT_TUPLE_SIZE;

/// Percentage of a candidate document's word tuples found in a reference document
#[derive(Parser, Debug)]
#[command(name = "rs-overlap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(override_usage = "rs-overlap <synonym_file> <reference_file> <candidate_file> [tuple_size=3]")]
pub struct OverlapArgs {
	/// Synonym groups, one group of whitespace-separated words per line
	pub synonym_file: PathBuf,

	/// Document whose tuples are indexed
	pub reference_file: PathBuf,

	/// Document scored against the reference
	pub candidate_file: PathBuf,

	/// Number of words per tuple
	#[arg(default_value_t = DEFAULT_TUPLE_SIZE)]
	pub tuple_size: usize,

	/// Verbosity level (repeat for more detail)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Only report errors
	#[arg(short, long)]
	pub quiet: bool,

	/// Print the full report as JSON
	#[arg(long)]
	pub json: bool,
}

impl OverlapArgs {
	/// Log level selected by `-q` / `-v`. Defaults to warnings.
	pub fn log_level(&self) -> LevelFilter {
		if self.quiet {
			return LevelFilter::Error;
		}
		match self.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	}
}
