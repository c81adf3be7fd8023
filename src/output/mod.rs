//! Terminal output formatting
//!
//! Result lines, verbose diagnostics and debug tracing.

pub mod display;
pub mod formatters;
mod trace;

pub use display::{print_report, write_hits, write_verbose_header};
pub use trace::{DEBUG_ENV, Tracer};
