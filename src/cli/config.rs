//! Dispatch configuration
//!
//! Which program to run, which tokens select the enhanced and default test commands, and whether the default
//! command is forced.

use std::env;
use std::ffi::{OsStr, OsString};

use super::invocation::{Invocation, TestTool};

/// Environment variable that forces the default test command when set to exactly `"1"`.
pub const FORCE_DEFAULT_ENV: &str = "FORCE_CARGO_TEST";

/// Dispatch configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Program every command runs through
    pub program: OsString,
    /// Tokens for the availability probe of the enhanced tool
    pub probe_args: Vec<OsString>,
    /// Tokens preceding forwarded arguments when the enhanced tool runs
    pub enhanced_args: Vec<OsString>,
    /// Tokens preceding forwarded arguments when the default tool runs
    pub default_args: Vec<OsString>,
    /// Skip the probe and always run the default tool
    pub force_default: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            program: "cargo".into(),
            probe_args: tokens(&["nextest", "--version"]),
            enhanced_args: tokens(&["nextest", "run"]),
            default_args: tokens(&["test"]),
            force_default: false,
        }
    }
}

impl DispatchConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings with `force_default` read from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_lookup(|key| env::var_os(key))
    }

    /// Default settings with `force_default` read through `lookup`.
    pub fn from_env_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let value = lookup(FORCE_DEFAULT_ENV);
        Self::default().with_force_default(is_force_value(value.as_deref()))
    }

    /// Set the program every command runs through
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Set whether the default tool is forced
    pub fn with_force_default(mut self, force: bool) -> Self {
        self.force_default = force;
        self
    }

    /// `cargo nextest --version`
    pub fn probe_invocation(&self) -> Invocation {
        Invocation::new(TestTool::Nextest, self.program.clone(), self.probe_args.iter().cloned())
    }

    /// `cargo nextest run <args>`
    pub fn enhanced_invocation<I>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = OsString>,
    {
        Invocation::new(
            TestTool::Nextest,
            self.program.clone(),
            self.enhanced_args.iter().cloned().chain(args),
        )
    }

    /// `cargo test <args>`
    pub fn default_invocation<I>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = OsString>,
    {
        Invocation::new(
            TestTool::CargoTest,
            self.program.clone(),
            self.default_args.iter().cloned().chain(args),
        )
    }
}

/// Only the exact string `"1"` forces the default tool.
pub fn is_force_value(value: Option<&OsStr>) -> bool {
    value == Some(OsStr::new("1"))
}

fn tokens(words: &[&str]) -> Vec<OsString> {
    words.iter().map(OsString::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn os(words: &[&str]) -> Vec<OsString> {
        tokens(words)
    }

    #[test]
    fn test_default_config_program() {
        let config = DispatchConfig::default();
        assert_eq!(config.program, OsString::from("cargo"));
        assert!(!config.force_default);
    }

    #[test]
    fn test_default_config_tokens() {
        let config = DispatchConfig::new();
        assert_eq!(config.probe_args, os(&["nextest", "--version"]));
        assert_eq!(config.enhanced_args, os(&["nextest", "run"]));
        assert_eq!(config.default_args, os(&["test"]));
    }

    #[test]
    fn test_force_value_exact_one() {
        assert!(is_force_value(Some(OsStr::new("1"))));
    }

    #[test]
    fn test_force_value_rejects_near_misses() {
        for value in ["", "0", "true", "yes", " 1", "1 ", "01", "11"] {
            assert!(!is_force_value(Some(OsStr::new(value))), "{value:?} must not force");
        }
        assert!(!is_force_value(None));
    }

    #[cfg(unix)]
    #[test]
    fn test_force_value_rejects_non_utf8() {
        use std::os::unix::ffi::OsStrExt;
        assert!(!is_force_value(Some(OsStr::from_bytes(&[0x31, 0xff]))));
    }

    #[test]
    fn test_from_env_lookup_forced() {
        let config = DispatchConfig::from_env_lookup(|key| (key == FORCE_DEFAULT_ENV).then(|| "1".into()));
        assert!(config.force_default);
    }

    #[test]
    fn test_from_env_lookup_unset() {
        let config = DispatchConfig::from_env_lookup(|_| None);
        assert!(!config.force_default);
    }

    #[test]
    fn test_from_env_lookup_other_value() {
        let config = DispatchConfig::from_env_lookup(|_| Some("yes".into()));
        assert!(!config.force_default);
    }

    #[test]
    fn test_with_program() {
        let config = DispatchConfig::new().with_program("/opt/cargo/bin/cargo");
        let inv = config.default_invocation(Vec::new());
        assert_eq!(inv.program, OsString::from("/opt/cargo/bin/cargo"));
    }

    #[test]
    fn test_invocations_prefix_tokens() {
        let config = DispatchConfig::new();
        let args = os(&["--release"]);

        assert_eq!(config.probe_invocation().args, os(&["nextest", "--version"]));
        assert_eq!(
            config.enhanced_invocation(args.clone()).args,
            os(&["nextest", "run", "--release"])
        );
        assert_eq!(config.default_invocation(args).args, os(&["test", "--release"]));
    }

    proptest! {
        #[test]
        fn prop_only_one_forces(value in ".*") {
            prop_assert_eq!(is_force_value(Some(OsStr::new(&value))), value == "1");
        }
    }
}
