//! Debug tracing to standard error
//!
//! Enabled by a non-empty `DEBUG` environment variable. The tracer is a plain
//! value handed to whoever needs it; nothing reads the environment after
//! start-up.

use colored::Colorize;
use std::fmt;

/// Environment variable that switches tracing on
pub const DEBUG_ENV: &str = "DEBUG";

/// Writes `debug:` lines to stderr when enabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tracer {
    enabled: bool,
}

impl Tracer {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A tracer that never writes
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(false)
    }

    /// Enabled iff `DEBUG` is set to a non-empty value
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var_os(DEBUG_ENV).as_deref())
    }

    fn from_value(value: Option<&std::ffi::OsStr>) -> Self {
        Self::new(value.is_some_and(|v| !v.is_empty()))
    }

    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Emit one trace line
    pub fn trace(self, args: fmt::Arguments<'_>) {
        if self.enabled {
            eprintln!("{} {args}", "debug:".dimmed());
        }
    }
}
