//! Sweep
//!
//! Runs the simulator over the whole grid for each trace, writing one record per
//! configuration to `<output-dir>/<trace-stem>.txt`, in grid order.

// Imports
use {
	crate::{
		grid::{Configuration, Grid},
		metrics::Metrics,
		procsim::ProcSim,
		record::Record,
	},
	anyhow::Context,
	std::{
		collections::BTreeMap,
		fs,
		io::{BufWriter, Write},
		num::NonZeroUsize,
		path::{Path, PathBuf},
		sync::{
			atomic::{self, AtomicBool, AtomicUsize},
			mpsc,
		},
		thread,
		time::{Duration, Instant},
	},
};

/// Default trace names
pub const DEFAULT_TRACES: [&str; 4] = ["gcc", "gobmk", "hmmer", "mcf"];

/// Directory of the default traces
pub const DEFAULT_TRACES_DIR: &str = "traces";

/// Suffix of each default trace file
pub const DEFAULT_TRACE_SUFFIX: &str = ".100k.trace";

/// Returns the paths of the default traces
pub fn default_trace_paths() -> Vec<PathBuf> {
	DEFAULT_TRACES
		.iter()
		.map(|name| Path::new(DEFAULT_TRACES_DIR).join(format!("{name}{DEFAULT_TRACE_SUFFIX}")))
		.collect()
}

/// Returns the output path for `trace` within `output_dir`.
///
/// Only the last extension of the trace's file name is replaced, so
/// `traces/gcc.100k.trace` becomes `<output_dir>/gcc.100k.txt`.
pub fn output_path(output_dir: &Path, trace: &Path) -> Result<PathBuf, anyhow::Error> {
	let stem = trace
		.file_stem()
		.with_context(|| format!("Trace path {trace:?} has no file name"))?;

	let mut file_name = stem.to_os_string();
	file_name.push(".txt");

	Ok(output_dir.join(file_name))
}

/// Sweep
#[derive(Clone, Debug)]
pub struct Sweep {
	/// Simulator
	procsim: ProcSim,

	/// Grid
	grid: Grid,

	/// Output directory
	output_dir: PathBuf,

	/// Maximum number of simulators running at once
	jobs: NonZeroUsize,
}

impl Sweep {
	/// Creates a new, sequential, sweep
	pub fn new(procsim: ProcSim, grid: Grid, output_dir: impl Into<PathBuf>) -> Self {
		Self {
			procsim,
			grid,
			output_dir: output_dir.into(),
			jobs: NonZeroUsize::MIN,
		}
	}

	/// Sets the maximum number of simulators running at once
	#[must_use]
	pub fn with_jobs(self, jobs: NonZeroUsize) -> Self {
		Self { jobs, ..self }
	}

	/// Runs the sweep over all `traces`, in order.
	///
	/// Stops at the first error.
	pub fn run<P: AsRef<Path>>(&self, traces: &[P]) -> Result<Vec<TraceSummary>, anyhow::Error> {
		traces
			.iter()
			.map(|trace| {
				let trace = trace.as_ref();
				self.run_trace(trace)
					.with_context(|| format!("Unable to sweep trace {trace:?}"))
			})
			.collect()
	}

	/// Runs the sweep over a single trace.
	///
	/// The output file is truncated, and each record is flushed as soon as
	/// it's written. On error, all previously written records are kept.
	pub fn run_trace(&self, trace: &Path) -> Result<TraceSummary, anyhow::Error> {
		let output_path = self::output_path(&self.output_dir, trace)?;
		tracing::info!(?trace, ?output_path, configurations = self.grid.len(), "Sweeping trace");

		let start_time = Instant::now();
		let output_file = fs::File::create(&output_path)
			.with_context(|| format!("Unable to create output file {output_path:?}"))?;
		let mut output = BufWriter::new(output_file);

		let mut records = 0;
		let mut write_record = |record: Record| -> Result<(), anyhow::Error> {
			writeln!(output, "{record}").context("Unable to write record")?;
			output.flush().context("Unable to flush output file")?;
			records += 1;

			Ok(())
		};

		match self.jobs.get() {
			1 => {
				for config in self.grid.configurations() {
					let record = self.run_config(trace, config)?;
					write_record(record)?;
				}
			},
			jobs => self.run_parallel(trace, jobs, &mut write_record)?,
		}

		let elapsed = start_time.elapsed();
		tracing::info!(?trace, ?output_path, records, ?elapsed, "Finished sweeping trace");

		Ok(TraceSummary {
			output_path,
			records,
			elapsed,
		})
	}

	/// Runs all configurations with up to `jobs` simulators at once.
	///
	/// `on_record` is called on the current thread with each record, in grid order.
	/// If any configuration fails, no new configurations are started, and the
	/// first error in grid order is returned after all previous records were handled.
	fn run_parallel(
		&self,
		trace: &Path,
		jobs: usize,
		mut on_record: impl FnMut(Record) -> Result<(), anyhow::Error>,
	) -> Result<(), anyhow::Error> {
		let configs = self.grid.configurations().collect::<Vec<_>>();
		let next_config_idx = AtomicUsize::new(0);
		let stop = AtomicBool::new(false);

		thread::scope(|s| {
			let (result_tx, result_rx) = mpsc::channel();
			for _ in 0..jobs.min(configs.len()) {
				let result_tx = result_tx.clone();
				let (configs, next_config_idx, stop) = (&configs, &next_config_idx, &stop);
				s.spawn(move || loop {
					if stop.load(atomic::Ordering::Acquire) {
						break;
					}

					let config_idx = next_config_idx.fetch_add(1, atomic::Ordering::AcqRel);
					let Some(&config) = configs.get(config_idx) else {
						break;
					};

					let res = self.run_config(trace, config);
					let failed = res.is_err();
					if result_tx.send((config_idx, res)).is_err() || failed {
						break;
					}
				});
			}
			drop(result_tx);

			// Note: Results arrive in completion order, so we hold them until all
			//       previous configurations are done.
			let mut pending = BTreeMap::new();
			let mut next_record_idx = 0;
			let res = result_rx.into_iter().try_for_each(|(config_idx, res)| {
				if res.is_err() {
					stop.store(true, atomic::Ordering::Release);
				}
				pending.insert(config_idx, res);

				while let Some(res) = pending.remove(&next_record_idx) {
					on_record(res?)?;
					next_record_idx += 1;
				}

				Ok::<_, anyhow::Error>(())
			});

			// Note: If we're exiting early, the remaining workers will stop once their
			//       current simulator exits.
			if res.is_err() {
				stop.store(true, atomic::Ordering::Release);
			}

			res
		})
	}

	/// Runs a single configuration.
	///
	/// The trace is read from disk again for each configuration.
	fn run_config(&self, trace: &Path, config: Configuration) -> Result<Record, anyhow::Error> {
		let input = fs::read(trace).with_context(|| format!("Unable to read trace file {trace:?}"))?;

		tracing::debug!(%config, "Running simulator");
		let output = self
			.procsim
			.run(&config, &input)
			.with_context(|| format!("Unable to run simulator with configuration {config}"))?;
		if !output.status.success() {
			tracing::warn!(%config, status = %output.status, "Simulator exited unsuccessfully");
		}
		tracing::trace!(%config, stdout = %output.stdout, "Simulator output");

		let metrics = Metrics::parse(&output.stdout)
			.with_context(|| format!("Unable to parse simulator output with configuration {config}"))?;

		Ok(Record { config, metrics })
	}
}

/// Summary of a trace's sweep
#[derive(Clone, Debug)]
pub struct TraceSummary {
	/// Output file
	pub output_path: PathBuf,

	/// Records written
	pub records: usize,

	/// Time taken
	pub elapsed: Duration,
}
