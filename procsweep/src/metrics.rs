//! Metrics scraped from the simulator's output

// Imports
use procsweep_util::StrLabeledValue;

/// Metric reported by the simulator
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Metric {
	AvgDispatchQueueSize,
	MaxDispatchQueueSize,
	AvgInstRetiredPerCycle,
	TotalRunTimeCycles,
}

impl Metric {
	/// All metrics, in record order
	pub const ALL: [Self; 4] = [
		Self::AvgDispatchQueueSize,
		Self::MaxDispatchQueueSize,
		Self::AvgInstRetiredPerCycle,
		Self::TotalRunTimeCycles,
	];

	/// Returns the label that precedes this metric's value in the output
	pub const fn label(self) -> &'static str {
		match self {
			Self::AvgDispatchQueueSize => "Avg Dispatch queue size: ",
			Self::MaxDispatchQueueSize => "Maximum Dispatch queue size: ",
			Self::AvgInstRetiredPerCycle => "Avg inst retired per cycle: ",
			Self::TotalRunTimeCycles => "Total run time (cycles): ",
		}
	}
}

/// Metrics of a single simulator run
///
/// Values are kept verbatim as printed by the simulator.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Metrics {
	pub avg_dispatch_queue_size:    String,
	pub max_dispatch_queue_size:    String,
	pub avg_inst_retired_per_cycle: String,
	pub total_run_time_cycles:      String,
}

impl Metrics {
	/// Parses all metrics from the simulator's output.
	///
	/// Each metric's value follows the last occurrence of its label, up to
	/// the next newline or the end of `output`.
	pub fn parse(output: &str) -> Result<Self, MetricsError> {
		let get = |metric: Metric| {
			output
				.last_labeled_value(metric.label())
				.map(str::to_owned)
				.ok_or(MetricsError::LabelNotFound { label: metric.label() })
		};

		Ok(Self {
			avg_dispatch_queue_size:    get(Metric::AvgDispatchQueueSize)?,
			max_dispatch_queue_size:    get(Metric::MaxDispatchQueueSize)?,
			avg_inst_retired_per_cycle: get(Metric::AvgInstRetiredPerCycle)?,
			total_run_time_cycles:      get(Metric::TotalRunTimeCycles)?,
		})
	}

	/// Returns the value of `metric`
	pub fn get(&self, metric: Metric) -> &str {
		match metric {
			Metric::AvgDispatchQueueSize => &self.avg_dispatch_queue_size,
			Metric::MaxDispatchQueueSize => &self.max_dispatch_queue_size,
			Metric::AvgInstRetiredPerCycle => &self.avg_inst_retired_per_cycle,
			Metric::TotalRunTimeCycles => &self.total_run_time_cycles,
		}
	}
}

/// Error for [`Metrics::parse`]
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
	/// Label wasn't present in the output
	#[error("Label {label:?} not found in simulator output")]
	LabelNotFound { label: &'static str },
}

#[cfg(test)]
mod tests {
	use super::*;

	const OUTPUT: &str = "Processor settings\n\
		Avg Dispatch queue size: 3.5\n\
		Maximum Dispatch queue size: 10\n\
		Avg inst retired per cycle: 0.8\n\
		Total run time (cycles): 100000\n";

	#[test]
	fn parse_all() {
		let metrics = Metrics::parse(OUTPUT).expect("Unable to parse metrics");

		assert_eq!(metrics, Metrics {
			avg_dispatch_queue_size:    "3.5".to_owned(),
			max_dispatch_queue_size:    "10".to_owned(),
			avg_inst_retired_per_cycle: "0.8".to_owned(),
			total_run_time_cycles:      "100000".to_owned(),
		});
		assert_eq!(Metric::ALL.map(|metric| metrics.get(metric)), ["3.5", "10", "0.8", "100000"]);
	}

	#[test]
	fn last_occurrence_wins() {
		let output = format!("Avg Dispatch queue size: 1.0\nTotal run time (cycles): 7\nprogress...\n{OUTPUT}done\n");
		let metrics = Metrics::parse(&output).expect("Unable to parse metrics");

		assert_eq!(metrics.avg_dispatch_queue_size, "3.5");
		assert_eq!(metrics.total_run_time_cycles, "100000");
	}

	#[test]
	fn order_in_output_is_irrelevant() {
		let output = "Total run time (cycles): 5\n\
			Avg inst retired per cycle: 1.5\n\
			Maximum Dispatch queue size: 4\n\
			Avg Dispatch queue size: 2";
		let metrics = Metrics::parse(output).expect("Unable to parse metrics");

		assert_eq!(metrics.total_run_time_cycles, "5");
		assert_eq!(metrics.avg_dispatch_queue_size, "2");
	}

	#[test]
	fn missing_label() {
		let output = OUTPUT.replace("Maximum", "Max");

		match Metrics::parse(&output) {
			Err(MetricsError::LabelNotFound { label }) => assert_eq!(label, Metric::MaxDispatchQueueSize.label()),
			res => panic!("Expected missing label error, found {res:?}"),
		}
	}
}
