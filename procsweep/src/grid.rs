//! Parameter grid

// Imports
use {
	itertools::iproduct,
	std::{fmt, ops::RangeInclusive},
};

/// Default `-r` domain
pub const R_RANGE: RangeInclusive<u32> = 1..=8;

/// Default `-f` domain
pub const F_VALUES: [u32; 2] = [4, 8];

/// Default `-j` domain
pub const J_VALUES: [u32; 2] = [1, 2];

/// Default `-k` domain
pub const K_VALUES: [u32; 2] = [1, 2];

/// Default `-l` domain
pub const L_VALUES: [u32; 2] = [1, 2];

/// A single point of the parameter grid
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Configuration {
	pub r: u32,
	pub f: u32,
	pub j: u32,
	pub k: u32,
	pub l: u32,
}

impl Configuration {
	/// Returns the simulator arguments for this configuration
	pub fn args(&self) -> [String; 10] {
		[
			"-r".to_owned(),
			self.r.to_string(),
			"-f".to_owned(),
			self.f.to_string(),
			"-j".to_owned(),
			self.j.to_string(),
			"-k".to_owned(),
			self.k.to_string(),
			"-l".to_owned(),
			self.l.to_string(),
		]
	}
}

impl fmt::Display for Configuration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Self { r, f: fetch, j, k, l } = self;
		write!(f, "{r}, {fetch}, {j}, {k}, {l}")
	}
}

/// Parameter grid
///
/// Holds the domain of each parameter. Configurations are enumerated
/// over the product `r × f × j × k × l`, with `r` varying the slowest
/// and `l` the fastest.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
	r: Vec<u32>,
	f: Vec<u32>,
	j: Vec<u32>,
	k: Vec<u32>,
	l: Vec<u32>,
}

impl Grid {
	/// Creates a new grid from each parameter's domain.
	///
	/// # Errors
	/// Returns an error if any of the domains is empty.
	pub fn new(r: Vec<u32>, f: Vec<u32>, j: Vec<u32>, k: Vec<u32>, l: Vec<u32>) -> Result<Self, anyhow::Error> {
		for (name, values) in [("r", &r), ("f", &f), ("j", &j), ("k", &k), ("l", &l)] {
			anyhow::ensure!(!values.is_empty(), "Domain of `-{name}` is empty");
		}

		Ok(Self { r, f, j, k, l })
	}

	/// Returns all configurations, in enumeration order
	pub fn configurations(&self) -> impl Iterator<Item = Configuration> + '_ {
		iproduct!(
			self.r.iter().copied(),
			self.f.iter().copied(),
			self.j.iter().copied(),
			self.k.iter().copied(),
			self.l.iter().copied()
		)
		.map(|(r, f, j, k, l)| Configuration { r, f, j, k, l })
	}

	/// Returns the number of configurations
	pub fn len(&self) -> usize {
		[&self.r, &self.f, &self.j, &self.k, &self.l]
			.iter()
			.map(|values| values.len())
			.product()
	}

	/// Returns if there are no configurations
	///
	/// Always false, since domains can't be empty.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for Grid {
	fn default() -> Self {
		Self {
			r: R_RANGE.collect(),
			f: F_VALUES.to_vec(),
			j: J_VALUES.to_vec(),
			k: K_VALUES.to_vec(),
			l: L_VALUES.to_vec(),
		}
	}
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		std::collections::HashSet,
	};

	fn config(r: u32, f: u32, j: u32, k: u32, l: u32) -> Configuration {
		Configuration { r, f, j, k, l }
	}

	#[test]
	fn default_grid_is_complete() {
		let grid = Grid::default();
		let configs = grid.configurations().collect::<Vec<_>>();

		assert_eq!(grid.len(), 128);
		assert_eq!(configs.len(), 128);
		assert_eq!(configs.iter().collect::<HashSet<_>>().len(), 128);
		assert!(configs.iter().all(|config| {
			R_RANGE.contains(&config.r) &&
				F_VALUES.contains(&config.f) &&
				J_VALUES.contains(&config.j) &&
				K_VALUES.contains(&config.k) &&
				L_VALUES.contains(&config.l)
		}));
	}

	#[test]
	fn l_varies_fastest_and_r_slowest() {
		let configs = Grid::default().configurations().collect::<Vec<_>>();

		assert_eq!(configs[0], config(1, 4, 1, 1, 1));
		assert_eq!(configs[1], config(1, 4, 1, 1, 2));
		assert_eq!(configs[2], config(1, 4, 1, 2, 1));
		assert_eq!(configs[4], config(1, 4, 2, 1, 1));
		assert_eq!(configs[8], config(1, 8, 1, 1, 1));
		assert_eq!(configs[16], config(2, 4, 1, 1, 1));
		assert_eq!(configs[127], config(8, 8, 2, 2, 2));

		// With these domains, the enumeration order is also the lexicographic one
		assert!(configs.windows(2).all(|w| w[0] < w[1]));
	}

	#[test]
	fn custom_grid_order_follows_domain_order() {
		let grid = Grid::new(vec![3, 1], vec![16], vec![1], vec![2, 1], vec![1]).expect("Grid should be valid");
		let configs = grid.configurations().collect::<Vec<_>>();

		assert_eq!(grid.len(), 4);
		assert_eq!(configs, [
			config(3, 16, 1, 2, 1),
			config(3, 16, 1, 1, 1),
			config(1, 16, 1, 2, 1),
			config(1, 16, 1, 1, 1),
		]);
	}

	#[test]
	fn empty_domain_is_rejected() {
		assert!(Grid::new(vec![1], vec![], vec![1], vec![1], vec![1]).is_err());
	}

	#[test]
	fn args_and_display() {
		let configuration = config(7, 8, 1, 2, 1);

		assert_eq!(configuration.args(), ["-r", "7", "-f", "8", "-j", "1", "-k", "2", "-l", "1"]);
		assert_eq!(configuration.to_string(), "7, 8, 1, 2, 1");
	}
}
