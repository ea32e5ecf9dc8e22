//! Configuration

/// Configuration
#[derive(Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Config {
	/// Grid configuration
	#[serde(default)]
	pub grid: GridConfig,
}

/// Grid config
///
/// Each missing domain uses its default.
#[derive(Default, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct GridConfig {
	pub r: Option<Vec<u32>>,
	pub f: Option<Vec<u32>>,
	pub j: Option<Vec<u32>>,
	pub k: Option<Vec<u32>>,
	pub l: Option<Vec<u32>>,
}

#[cfg(test)]
mod tests {
	use super::Config;

	#[test]
	fn partial_grid() {
		let config = serde_json::from_str::<Config>(r#"{ "grid": { "r": [1, 2], "f": [8] } }"#)
			.expect("Unable to parse config");

		assert_eq!(config.grid.r, Some(vec![1, 2]));
		assert_eq!(config.grid.f, Some(vec![8]));
		assert_eq!(config.grid.l, None);
	}

	#[test]
	fn empty_config() {
		let config = serde_json::from_str::<Config>("{}").expect("Unable to parse config");
		assert_eq!(config.grid.j, None);
	}
}
