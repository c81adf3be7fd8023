//! Wordsift
//!
//! Dictionary filtering for Wordle-style puzzles and anagrams: positional masks,
//! letter multisets, candidate generation and heuristic ranking.
//!
//! # Quick Start
//!
//! ```rust
//! use wordsift::core::{Dictionary, Mask, Wildcard};
//! use wordsift::filter::{Filter, FilterConfig};
//!
//! let dictionary = Dictionary::from_lines(["liker", "laker", "biker"]);
//! let config = FilterConfig::new(Wildcard::Question)
//!     .with_mask(Mask::new("?i?e?", Wildcard::Question));
//!
//! let report = Filter::new(&config, &dictionary).run();
//! let words: Vec<&str> = report.hits.iter().map(|hit| hit.word()).collect();
//! assert_eq!(words, vec!["liker", "biker"]);
//! ```

// Core domain types and predicates
pub mod core;

// Candidate word generation
pub mod candidates;

// Scoring heuristics
pub mod scoring;

// Generic containers
pub mod collections;

// Filter driver
pub mod filter;

// Word lists
pub mod wordlists;

// Front-end command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Argument errors
pub mod error;
