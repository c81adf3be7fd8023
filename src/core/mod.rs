//! Core domain types for word filtering
//!
//! Words, the dictionary, positional masks and letter multisets, plus the pure
//! predicates the filter driver composes. Predicates never fail.

mod dictionary;
mod letters;
mod mask;
mod word;

pub use dictionary::Dictionary;
pub use letters::{LetterCounts, LetterSet, excludes, letter_set, yellows_all, yellows_any};
pub use mask::{Mask, Wildcard, matches_position_mask};
pub use word::{Word, WordError};
