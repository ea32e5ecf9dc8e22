//! Utilities

// Modules
pub mod logger;

/// Extension trait for `str` to scrape `<label><value>\n` lines out of text output
#[extend::ext(name = StrLabeledValue)]
pub impl str {
	/// Returns the value following the *last* occurrence of `label`.
	///
	/// The value extends up to (but excluding) the next `\n`, or to the
	/// end of the text if there is none.
	///
	/// Returns `None` if `label` doesn't occur.
	fn last_labeled_value(&self, label: &str) -> Option<&str> {
		let value_start = self.rfind(label)? + label.len();
		let rest = &self[value_start..];
		let value_len = rest.find('\n').unwrap_or(rest.len());

		Some(&rest[..value_len])
	}
}
