//! Arguments

// Imports
use std::{num::NonZeroUsize, path::PathBuf};

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
pub struct Args {
	/// Log file
	///
	/// Specifies a file to perform verbose logging to.
	/// You can use `RUST_LOG_FILE` to set filtering options
	#[clap(long = "log-file")]
	pub log_file: Option<PathBuf>,

	/// Whether to append to the log file
	#[clap(long = "log-file-append")]
	pub log_file_append: bool,

	/// Trace files
	///
	/// If none are given, `traces/{gcc,gobmk,hmmer,mcf}.100k.trace` are used.
	pub trace_files: Vec<PathBuf>,

	/// Simulator executable
	///
	/// Defaults to `procsim` in the current directory.
	#[clap(long = "procsim")]
	pub procsim: Option<PathBuf>,

	/// Config file
	///
	/// Overrides the parameter grid.
	#[clap(long = "config")]
	pub config_file: Option<PathBuf>,

	/// Output directory
	#[clap(long = "output-dir", default_value = ".")]
	pub output_dir: PathBuf,

	/// Number of simulators to run at once
	#[clap(short = 'j', long = "jobs", default_value = "1")]
	pub jobs: NonZeroUsize,
}
