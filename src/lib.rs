#![forbid(unsafe_code)]
//! Test suite dispatcher
//!
//! Runs a project's tests with `cargo nextest run` when nextest is installed and with `cargo test` otherwise.
//! Arguments are forwarded verbatim, the child inherits the standard streams, and the child's exit status becomes
//! the dispatcher's own. Setting `FORCE_CARGO_TEST=1` skips the nextest probe and always uses `cargo test`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod version;

pub use cli::config::DispatchConfig;
pub use cli::dispatcher::{Dispatcher, Termination};
pub use cli::invocation::{Invocation, TestTool};
pub use cli::runner_interfaces::{CommandRunner, DispatchError, ProcessRunner};
pub use cli::{CliError, CliResult, ExitCode};
