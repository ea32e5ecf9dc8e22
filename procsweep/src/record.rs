//! Result records

// Imports
use {
	crate::{grid::Configuration, metrics::Metrics},
	std::fmt,
};

/// Result of a single configuration
///
/// Displayed as `r, f, j, k, l,\t<adqs>, <mdqs>, <ipc>, <rt>`.
/// Note the comma after the last configuration value, which existing
/// result files contain.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Record {
	pub config:  Configuration,
	pub metrics: Metrics,
}

impl fmt::Display for Record {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Metrics {
			avg_dispatch_queue_size,
			max_dispatch_queue_size,
			avg_inst_retired_per_cycle,
			total_run_time_cycles,
		} = &self.metrics;

		let config = self.config;
		write!(
			f,
			"{config},\t{avg_dispatch_queue_size}, {max_dispatch_queue_size}, {avg_inst_retired_per_cycle}, {total_run_time_cycles}"
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display() {
		let record = Record {
			config:  Configuration {
				r: 1,
				f: 4,
				j: 1,
				k: 1,
				l: 2,
			},
			metrics: Metrics {
				avg_dispatch_queue_size:    "3.5".to_owned(),
				max_dispatch_queue_size:    "10".to_owned(),
				avg_inst_retired_per_cycle: "0.8".to_owned(),
				total_run_time_cycles:      "100000".to_owned(),
			},
		};

		assert_eq!(record.to_string(), "1, 4, 1, 1, 2,\t3.5, 10, 0.8, 100000");
	}
}
