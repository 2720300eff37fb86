//! Process spawning boundary
//!
//! The dispatcher decides what to run; a `CommandRunner` runs it. Keeping the spawn behind a trait lets the
//! decision logic be exercised with a recording runner instead of real child processes.

use std::ffi::OsString;
use std::io;
use std::process::Stdio;

use thiserror::Error;
use tracing::trace;

use super::dispatcher::Termination;
use super::invocation::Invocation;

/// Errors that occur while spawning a child process
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to launch `{}`: {source}", .program.to_string_lossy())]
    Spawn {
        program: OsString,
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// Command Runner Interface
// ============================================================================

/// Spawn an invocation and wait for it to finish.
pub trait CommandRunner {
    /// Run with stdin, stdout and stderr discarded. Used only to learn whether a tool is installed.
    fn probe(&self, invocation: &Invocation) -> Result<Termination, DispatchError>;

    /// Run with the standard streams inherited from this process.
    fn run(&self, invocation: &Invocation) -> Result<Termination, DispatchError>;
}

// ============================================================================
// Default Implementation
// ============================================================================

/// `std::process::Command` based runner.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn probe(&self, invocation: &Invocation) -> Result<Termination, DispatchError> {
        trace!(command = %invocation, "probing");
        let status = invocation
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| spawn_error(invocation, source))?;
        Ok(Termination::from_status(status))
    }

    fn run(&self, invocation: &Invocation) -> Result<Termination, DispatchError> {
        trace!(command = %invocation, "running");
        let status = invocation
            .to_command()
            .status()
            .map_err(|source| spawn_error(invocation, source))?;
        Ok(Termination::from_status(status))
    }
}

fn spawn_error(invocation: &Invocation, source: io::Error) -> DispatchError {
    DispatchError::Spawn {
        program: invocation.program.clone(),
        source,
    }
}
