//! Concrete child command lines

use std::ffi::OsString;
use std::fmt;
use std::process::Command;

/// Which test tool an invocation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestTool {
    /// `cargo nextest`, preferred when installed
    Nextest,
    /// `cargo test`, the fallback
    CargoTest,
}

impl TestTool {
    pub fn name(self) -> &'static str {
        match self {
            TestTool::Nextest => "nextest",
            TestTool::CargoTest => "cargo-test",
        }
    }
}

impl fmt::Display for TestTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A program plus its full argument list, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub tool: TestTool,
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new<I>(tool: TestTool, program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self {
            tool,
            program: program.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Build the `Command`. Streams are left at their defaults (inherited) for the caller to adjust.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
