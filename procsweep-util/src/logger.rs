//! Logger
//!
//! Logs to stderr (filtered by `RUST_LOG`, `info` by default) and, optionally,
//! to a file (filtered by `RUST_LOG_FILE`, `debug` by default).

// Imports
use {
	std::{
		env,
		fs,
		io,
		path::Path,
		sync::Mutex,
	},
	tracing_subscriber::{prelude::*, EnvFilter},
};

/// Messages emitted before the logger was initialized
pub mod pre_init {
	// Imports
	use std::sync::{Mutex, PoisonError};

	/// Queued debug messages
	static DEBUG_MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());

	/// Queues a debug message, to be logged once the logger is initialized
	pub fn debug(msg: impl Into<String>) {
		DEBUG_MESSAGES
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push(msg.into());
	}

	/// Takes all queued debug messages
	pub(super) fn take_debug() -> Vec<String> {
		std::mem::take(&mut *DEBUG_MESSAGES.lock().unwrap_or_else(PoisonError::into_inner))
	}
}

/// Initializes the logger.
///
/// If `log_file` is specified, verbose logging is also written to it, appending if
/// `log_file_append` is set and truncating it otherwise.
///
/// # Panics
/// Panics if a global subscriber was already set.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	let stderr_layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_filter(self::env_filter("RUST_LOG", "info"));

	// Note: If we can't open the log file, we still want to log to stderr, so
	//       we report the error once the subscriber is set up.
	let mut log_file_err = None;
	let file_layer = log_file.and_then(|path| {
		let file = fs::OpenOptions::new()
			.create(true)
			.write(true)
			.append(log_file_append)
			.truncate(!log_file_append)
			.open(path);

		match file {
			Ok(file) => Some(
				tracing_subscriber::fmt::layer()
					.with_ansi(false)
					.with_writer(Mutex::new(file))
					.with_filter(self::env_filter("RUST_LOG_FILE", "debug")),
			),
			Err(err) => {
				log_file_err = Some((path.to_path_buf(), err));
				None
			},
		}
	});

	tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();

	if let Some((path, err)) = log_file_err {
		tracing::warn!(?path, ?err, "Unable to open log file");
	}

	for msg in pre_init::take_debug() {
		tracing::debug!("{msg}");
	}
}

/// Creates an env filter from `var`, falling back to `default`
fn env_filter(var: &str, default: &str) -> EnvFilter {
	match env::var(var) {
		Ok(directives) => EnvFilter::new(directives),
		Err(_) => EnvFilter::new(default),
	}
}
