//! Word lists for filtering
//!
//! Provides the embedded default dictionary and loaders for custom ones.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_entries_are_lowercase_ascii() {
        // Scored modes rely on every letter having an inverted Scrabble value
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }

    #[test]
    fn dictionary_contains_common_words() {
        for word in ["crane", "slate", "stare", "liker", "lipas", "urali", "ghost"] {
            assert!(DICTIONARY.contains(&word), "missing '{word}'");
        }
    }
}
