//! Runner dispatch: probe for nextest, pick a command, run it, map its exit status
//!
//! `FORCE_CARGO_TEST=1` short-circuits to `cargo test` with no probe. Otherwise `cargo nextest --version` is run
//! once with its output discarded; a zero exit status selects `cargo nextest run`, anything else (including a
//! launch failure) selects `cargo test`. Exactly one test command is run per dispatch.

use std::ffi::OsString;
use std::process::ExitStatus;

use tracing::debug;

use super::ExitCode;
use super::config::DispatchConfig;
use super::invocation::Invocation;
use super::runner_interfaces::{CommandRunner, DispatchError, ProcessRunner};

/// How a child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Exited with a status code
    Exited(i32),
    /// Ended without a status code, e.g. killed by a signal (number included when the platform reports it)
    Signaled(Option<i32>),
}

impl Termination {
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Termination::Exited(code),
            None => Termination::Signaled(signal_of(&status)),
        }
    }

    pub fn success(self) -> bool {
        self == Termination::Exited(0)
    }

    /// The status this process should exit with: the child's own code, or 1 when it has none.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Termination::Exited(code) => ExitCode(code),
            Termination::Signaled(_) => ExitCode::FAILURE,
        }
    }
}

#[cfg(unix)]
fn signal_of(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Chooses between the enhanced and default test commands and runs the chosen one.
#[derive(Debug, Clone)]
pub struct Dispatcher<R = ProcessRunner> {
    config: DispatchConfig,
    runner: R,
}

impl<R: CommandRunner> Dispatcher<R> {
    pub fn new(config: DispatchConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Probe the enhanced tool. A missing tool is the expected case, not an error.
    pub fn enhanced_available(&self) -> bool {
        let probe = self.config.probe_invocation();
        match self.runner.probe(&probe) {
            Ok(termination) => {
                debug!(command = %probe, ?termination, "probe finished");
                termination.success()
            }
            Err(e) => {
                debug!(command = %probe, error = %e, "probe could not launch");
                false
            }
        }
    }

    /// Resolve the command to run. Probes at most once, and not at all when the default tool is forced.
    pub fn select<I>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = OsString>,
    {
        if self.config.force_default {
            debug!("default test command forced");
            return self.config.default_invocation(args);
        }

        if self.enhanced_available() {
            self.config.enhanced_invocation(args)
        } else {
            self.config.default_invocation(args)
        }
    }

    /// Select and run one test command, returning the exit status to propagate.
    ///
    /// A child that ends without a status code maps to `ExitCode::FAILURE`. A child that cannot be launched is
    /// returned as an error; callers exit with `ExitCode::FAILURE` for it.
    pub fn dispatch<I>(&self, args: I) -> Result<ExitCode, DispatchError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let invocation = self.select(args);
        debug!(tool = %invocation.tool, command = %invocation, "running tests");

        let termination = self.runner.run(&invocation)?;
        if let Termination::Signaled(signal) = termination {
            debug!(?signal, "test command ended without an exit status");
        }
        Ok(termination.exit_code())
    }
}

// ============================================================================
// Tests
// ============================================================================
