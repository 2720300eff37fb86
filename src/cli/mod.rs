//! CLI module for the test dispatcher
//!
//! ## Behavior
//!
//! The dispatcher defines no flags of its own. Every argument after the program name is forwarded verbatim to
//! whichever test command is chosen:
//!
//! - `FORCE_CARGO_TEST=1` - run `cargo test <args>` without probing
//! - `cargo nextest --version` succeeds - run `cargo nextest run <args>`
//! - otherwise - run `cargo test <args>`
//!
//! ## Modules
//!
//! - `config` - Tool program, token sets and the force-default flag
//! - `invocation` - Concrete child command lines
//! - `runner_interfaces` - Process spawning boundary
//! - `dispatcher` - Probe, select, run, map exit status
//!
//! ## Design
//!
//! Arguments are read as raw `OsString`s rather than through an argument parser, since a parser would consume a
//! leading `--` that `cargo test -- --nocapture` style invocations rely on.
//! `execute` returns `CliResult<ExitCode>` instead of calling `process::exit`.
//! Only the top-level `run()` function exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod dispatcher;
pub mod invocation;
pub mod runner_interfaces;

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::process;

use config::DispatchConfig;
use dispatcher::Dispatcher;
use runner_interfaces::{DispatchError, ProcessRunner};

use crate::version::RUN_TESTS_VERSION;

/// Environment variable holding the `tracing` filter for the dispatcher's own diagnostics.
pub const LOG_ENV: &str = "RUN_TESTS_LOG";

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Carries a diagnostic message and the exit code the process ends with. The message goes to the log, never to the
/// user's streams: what the user sees comes from the child test command alone.
#[derive(Debug)]
pub struct CliError {
    /// Diagnostic message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<DispatchError> for CliError {
    fn from(err: DispatchError) -> Self {
        Self::failure(err.to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() -> ! {
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    tracing::debug!(version = RUN_TESTS_VERSION, argc = args.len(), "run-tests starting");

    match execute(args) {
        Ok(exit_code) => process::exit(exit_code.0),
        Err(e) => {
            tracing::debug!(error = %e, exit_code = e.exit_code.0, "dispatch failed");
            process::exit(e.exit_code.0);
        }
    }
}

/// Dispatch the forwarded arguments with configuration taken from the environment.
pub fn execute<I>(args: I) -> CliResult<ExitCode>
where
    I: IntoIterator<Item = OsString>,
{
    let config = DispatchConfig::from_env();
    let dispatcher = Dispatcher::new(config, ProcessRunner);
    Ok(dispatcher.dispatch(args)?)
}

// ============================================================================
// Tests
// ============================================================================
