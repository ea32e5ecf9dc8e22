//! Processor simulator parameter sweep (`procsweep`)
//!
//! Runs the external `procsim` simulator over every configuration of a
//! parameter grid, for each trace, and records the metrics it reports.

// Modules
pub mod grid;
pub mod metrics;
pub mod procsim;
pub mod record;
pub mod sweep;

// Exports
pub use self::{
	grid::{Configuration, Grid},
	metrics::{Metric, Metrics, MetricsError},
	procsim::{ProcSim, RunError, RunOutput},
	record::Record,
	sweep::{Sweep, TraceSummary},
};
