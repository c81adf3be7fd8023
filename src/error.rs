//! Argument validation errors
//!
//! I/O failures are reported by the binary through `anyhow`; everything here is
//! a user mistake in the flags.

use std::fmt;

/// Conflicting or malformed command-line input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A mask-shaped value uses the wildcard of the other front-end
    ForeignWildcard {
        value: String,
        found: char,
        expected: char,
    },
    /// A mask-shaped value does not line up with the positional mask
    LengthMismatch {
        flag: &'static str,
        value: String,
        expected: usize,
    },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignWildcard {
                value,
                found,
                expected,
            } => write!(
                f,
                "'{value}' uses wildcard '{found}'; this mode only accepts '{expected}'"
            ),
            Self::LengthMismatch {
                flag,
                value,
                expected,
            } => write!(
                f,
                "--{flag} '{value}' must be {expected} letters long to match the mask"
            ),
        }
    }
}

impl std::error::Error for ArgumentError {}
