//! Simulator process

// Imports
use {
	crate::grid::Configuration,
	std::{
		env,
		io::{self, Write},
		panic,
		path::{Path, PathBuf},
		process::{Command, ExitStatus, Stdio},
		string::FromUtf8Error,
		thread,
	},
};

/// Simulator executable name
pub const EXECUTABLE_NAME: &str = "procsim";

/// Simulator
///
/// Runs the external simulator executable once per configuration, feeding it
/// a trace through stdin and capturing its stdout.
#[derive(Clone, Debug)]
pub struct ProcSim {
	/// Executable path
	executable: PathBuf,
}

impl ProcSim {
	/// Creates a simulator from its executable path
	pub fn new(executable: impl Into<PathBuf>) -> Self {
		Self {
			executable: executable.into(),
		}
	}

	/// Creates a simulator using `procsim` from the current directory
	pub fn in_current_dir() -> Result<Self, io::Error> {
		let cur_dir = env::current_dir()?;
		Ok(Self::new(cur_dir.join(EXECUTABLE_NAME)))
	}

	/// Returns the executable path
	pub fn executable(&self) -> &Path {
		&self.executable
	}

	/// Runs the simulator with `config`, using `input` as its stdin.
	///
	/// Blocks until the simulator exits. Stderr is discarded and the exit
	/// status is returned, but not checked.
	pub fn run(&self, config: &Configuration, input: &[u8]) -> Result<RunOutput, RunError> {
		let mut child = Command::new(&self.executable)
			.args(config.args())
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::null())
			.spawn()
			.map_err(|source| RunError::Spawn {
				executable: self.executable.clone(),
				source,
			})?;
		let mut stdin = child.stdin.take().expect("Child stdin should be piped");

		// Note: We feed stdin from another thread, since the simulator may fill
		//       up stdout before it's done reading its input.
		let output = thread::scope(|s| {
			let writer = s.spawn(move || match stdin.write_all(input) {
				// Note: The simulator is allowed to exit without reading all of its input.
				Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
				res => res,
			});

			let output = child.wait_with_output().map_err(RunError::Wait)?;
			writer
				.join()
				.unwrap_or_else(|err| panic::resume_unwind(err))
				.map_err(RunError::WriteInput)?;

			Ok::<_, RunError>(output)
		})?;

		let stdout = String::from_utf8(output.stdout).map_err(RunError::DecodeOutput)?;

		Ok(RunOutput {
			status: output.status,
			stdout,
		})
	}
}

/// Output for [`ProcSim::run`]
#[derive(Clone, Debug)]
pub struct RunOutput {
	/// Exit status
	pub status: ExitStatus,

	/// Captured stdout
	pub stdout: String,
}

/// Error for [`ProcSim::run`]
#[derive(Debug, thiserror::Error)]
pub enum RunError {
	/// Unable to spawn the executable
	#[error("Unable to spawn simulator {executable:?}")]
	Spawn {
		executable: PathBuf,
		#[source]
		source:     io::Error,
	},

	/// Unable to write the input
	#[error("Unable to write simulator input")]
	WriteInput(#[source] io::Error),

	/// Unable to wait for the simulator
	#[error("Unable to wait for simulator")]
	Wait(#[source] io::Error),

	/// Output wasn't utf-8
	#[error("Simulator output was not valid utf-8")]
	DecodeOutput(#[source] FromUtf8Error),
}
