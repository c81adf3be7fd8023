//! Filter driver
//!
//! Composes the core predicates over a dictionary scan and routes survivors to
//! direct output or to one of the ranking stages.

mod config;
mod engine;
mod rank;

pub use config::{FilterConfig, Mode};
pub use engine::{Filter, FilterReport, Hit};
pub use rank::rank_stats;
