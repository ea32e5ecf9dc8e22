//! Processor simulator parameter sweep (`procsweep`)

// Modules
mod args;
mod config;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	clap::Parser,
	procsweep::{grid, sweep, Grid, ProcSim, Sweep},
	procsweep_util::logger,
	std::fs,
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Read the config file, if any
	let grid = match &args.config_file {
		Some(config_file) => {
			let config_file = fs::File::open(config_file).context("Unable to open config file")?;
			let config = serde_json::from_reader::<_, self::config::Config>(config_file)
				.context("Unable to parse config file")?;
			tracing::debug!(?config, "Parsed config");

			let grid = config.grid;
			Grid::new(
				grid.r.unwrap_or_else(|| grid::R_RANGE.collect()),
				grid.f.unwrap_or_else(|| grid::F_VALUES.to_vec()),
				grid.j.unwrap_or_else(|| grid::J_VALUES.to_vec()),
				grid.k.unwrap_or_else(|| grid::K_VALUES.to_vec()),
				grid.l.unwrap_or_else(|| grid::L_VALUES.to_vec()),
			)
			.context("Invalid grid in config file")?
		},
		None => Grid::default(),
	};

	let procsim = match args.procsim {
		Some(executable) => ProcSim::new(executable),
		None => ProcSim::in_current_dir().context("Unable to get current directory")?,
	};
	tracing::debug!(executable = ?procsim.executable(), "Using simulator");

	let traces = match args.trace_files.is_empty() {
		true => sweep::default_trace_paths(),
		false => args.trace_files,
	};

	// Then run the sweep
	let sweep = Sweep::new(procsim, grid, args.output_dir).with_jobs(args.jobs);
	let summaries = sweep.run(&traces).context("Unable to run sweep")?;
	let records = summaries.iter().map(|summary| summary.records).sum::<usize>();
	tracing::info!(traces = summaries.len(), records, "Finished sweep");

	Ok(())
}
