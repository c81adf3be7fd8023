//! Positional masks
//!
//! A mask is a template the same length as the words it constrains. Each slot
//! is either a concrete (green) letter or the wildcard sentinel. An empty mask
//! means "no positional constraint".

use crate::error::ArgumentError;
use std::fmt;

/// Wildcard convention used by a front-end
///
/// Anagram mode uses `?`, Wordle mode uses `_`. A single mask only ever
/// honours one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wildcard {
    /// `?` (anagram mode)
    Question,
    /// `_` (Wordle mode)
    Underscore,
}

impl Wildcard {
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Question => '?',
            Self::Underscore => '_',
        }
    }

    /// The convention this one must not be mixed with
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Question => Self::Underscore,
            Self::Underscore => Self::Question,
        }
    }
}

/// Positional wildcard equality check over code points
///
/// - empty mask, empty word: false
/// - empty mask, non-empty word: true
/// - lengths differ: false
/// - otherwise every non-wildcard slot must equal the word's letter
///
/// # Examples
/// ```
/// use wordsift::core::matches_position_mask;
///
/// let mask: Vec<char> = "?i?e?".chars().collect();
/// let liker: Vec<char> = "liker".chars().collect();
/// let laker: Vec<char> = "laker".chars().collect();
///
/// assert!(matches_position_mask(&mask, '?', &liker));
/// assert!(!matches_position_mask(&mask, '?', &laker));
/// assert!(matches_position_mask(&[], '?', &liker));
/// assert!(!matches_position_mask(&[], '?', &[]));
/// ```
#[must_use]
pub fn matches_position_mask(mask: &[char], wildcard: char, word: &[char]) -> bool {
    if mask.is_empty() {
        return !word.is_empty();
    }
    if mask.len() != word.len() {
        return false;
    }
    mask.iter()
        .zip(word)
        .all(|(&slot, &letter)| slot == wildcard || slot == letter)
}

/// A parsed positional mask bound to one wildcard convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    slots: Vec<char>,
    wildcard: Wildcard,
}

impl Mask {
    /// Build a mask without validating its characters
    #[must_use]
    pub fn new(pattern: &str, wildcard: Wildcard) -> Self {
        Self {
            slots: pattern.chars().collect(),
            wildcard,
        }
    }

    /// The empty mask (no positional constraint)
    #[must_use]
    pub const fn none(wildcard: Wildcard) -> Self {
        Self {
            slots: Vec::new(),
            wildcard,
        }
    }

    /// A mask of `len` wildcards
    #[must_use]
    pub fn blank(len: usize, wildcard: Wildcard) -> Self {
        Self {
            slots: vec![wildcard.as_char(); len],
            wildcard,
        }
    }

    /// Parse a user-supplied mask
    ///
    /// # Errors
    /// Returns `ArgumentError::ForeignWildcard` if the pattern contains the
    /// wildcard of the other convention, which would otherwise be silently
    /// treated as a literal letter.
    pub fn parse(pattern: &str, wildcard: Wildcard) -> Result<Self, ArgumentError> {
        let foreign = wildcard.other().as_char();
        if pattern.contains(foreign) {
            return Err(ArgumentError::ForeignWildcard {
                value: pattern.to_string(),
                found: foreign,
                expected: wildcard.as_char(),
            });
        }
        Ok(Self::new(pattern, wildcard))
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[char] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub const fn wildcard(&self) -> Wildcard {
        self.wildcard
    }

    /// Length in code points (the word length this mask constrains)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for the "no mask" state
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True if the mask has no concrete letters
    #[must_use]
    pub fn is_blank(&self) -> bool {
        let wildcard = self.wildcard.as_char();
        self.slots.iter().all(|&slot| slot == wildcard)
    }

    /// Concrete letters with their positions
    pub fn greens(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        let wildcard = self.wildcard.as_char();
        self.slots
            .iter()
            .copied()
            .enumerate()
            .filter(move |&(_, slot)| slot != wildcard)
    }

    /// Concrete letters, in slot order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.greens().map(|(_, letter)| letter)
    }

    /// Check a word against this mask
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &[char]) -> bool {
        matches_position_mask(&self.slots, self.wildcard.as_char(), word)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn mask_matches_question_wildcard() {
        let mask = Mask::new("?i?e?", Wildcard::Question);
        assert!(mask.matches(&chars("liker")));
        assert!(!mask.matches(&chars("laker")));
    }

    #[test]
    fn empty_mask_matches_any_non_empty_word() {
        let mask = Mask::none(Wildcard::Question);
        assert!(mask.matches(&chars("liker")));
        assert!(!mask.matches(&[]));
    }

    #[test]
    fn mask_length_mismatch_rejects() {
        let mask = Mask::new("???", Wildcard::Question);
        assert!(!mask.matches(&chars("liker")));
        assert!(!mask.matches(&chars("ab")));
    }

    #[test]
    fn mask_compares_code_points() {
        let mask = Mask::new("_a_é", Wildcard::Underscore);
        assert!(mask.matches(&chars("café")));
        assert!(!mask.matches(&chars("cafe")));
    }

    #[test]
    fn wildcard_of_other_convention_is_a_letter() {
        // `_` is a literal under the `?` convention
        let mask = Mask::new("a_", Wildcard::Question);
        assert!(!mask.matches(&chars("ab")));
        assert!(mask.matches(&chars("a_")));
    }

    #[test]
    fn parse_rejects_foreign_wildcard() {
        let err = Mask::parse("?i_e?", Wildcard::Question).unwrap_err();
        assert!(matches!(
            err,
            ArgumentError::ForeignWildcard {
                found: '_',
                expected: '?',
                ..
            }
        ));
        assert!(Mask::parse("_i_e_", Wildcard::Underscore).is_ok());
    }

    #[test]
    fn greens_and_letters() {
        let mask = Mask::new("_r__e", Wildcard::Underscore);
        assert_eq!(mask.greens().collect::<Vec<_>>(), vec![(1, 'r'), (4, 'e')]);
        assert_eq!(mask.letters().collect::<String>(), "re");
        assert!(!mask.is_blank());
        assert!(Mask::blank(5, Wildcard::Underscore).is_blank());
    }

    #[test]
    fn mask_display_round_trips_pattern() {
        assert_eq!(Mask::new("?i?e?", Wildcard::Question).to_string(), "?i?e?");
        assert_eq!(Mask::blank(3, Wildcard::Underscore).to_string(), "___");
    }

    proptest! {
        #[test]
        fn all_wildcard_mask_matches_same_length(word in "[a-z]{1,8}") {
            let word = chars(&word);
            let mask = Mask::blank(word.len(), Wildcard::Question);
            prop_assert!(mask.matches(&word));
        }

        #[test]
        fn match_implies_equal_length_or_empty_mask(mask in "[ab?]{0,4}", word in "[ab]{0,4}") {
            let mask = Mask::new(&mask, Wildcard::Question);
            let word = chars(&word);
            if mask.matches(&word) {
                prop_assert!(mask.is_empty() || mask.len() == word.len());
            }
        }
    }
}
