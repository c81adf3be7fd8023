//! Command implementations
//!
//! Each front-end validates its own flags and produces a `FilterConfig`.

pub mod anagram;
pub mod wordle;

pub use anagram::{AnagramOptions, anagram_config};
pub use wordle::{WordleOptions, wordle_config};
