//! rs-overlap CLI binary.
//!
//! Usage: `rs-overlap <synonym_file> <reference_file> <candidate_file> [tuple_size=3]`
//!
//! Prints the percentage of candidate tuples found in the reference (e.g. `66%`).
//! Every failure exits with status 1.

mod args;

use std::io::Write;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use env_logger::Builder;

use rs_overlap_core::detect_files;

use crate::args::OverlapArgs;

/// Runs the detection and formats the output line.
fn run(args: &OverlapArgs) -> Result<String, Box<dyn std::error::Error>> {
	let report = detect_files(&args.synonym_file, &args.reference_file, &args.candidate_file, args.tuple_size)?;
	if args.json {
		Ok(serde_json::to_string(&report)?)
	} else {
		Ok(report.to_string())
	}
}

/// Reports an argument error and returns the exit status.
///
/// - Help and version requests are printed by clap as usual.
/// - A tuple size that is not a number is fatal, reported on stderr.
/// - Any other mistake (wrong argument count, unknown flag) prints the usage on stdout.
fn handle_args_error(error: clap::Error) -> i32 {
	match error.kind() {
		ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
		ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
			let _ = error.print();
		}
		_ => println!("{}", OverlapArgs::command().render_usage()),
	}
	1
}

fn main() {
	let args = match OverlapArgs::try_parse() {
		Ok(args) => args,
		Err(e) => process::exit(handle_args_error(e)),
	};

	Builder::new()
		.filter_level(args.log_level())
		.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
		.init();

	match run(&args) {
		Ok(output) => println!("{output}"),
		Err(e) => {
			eprintln!("Error: {e}");
			process::exit(1);
		}
	}
}
