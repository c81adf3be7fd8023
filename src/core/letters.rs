//! Letter multisets and the presence/exclusion predicates built on them

use super::Mask;
use rustc_hash::{FxHashMap, FxHashSet};

/// Set of letters, used for gray/excluded feedback
pub type LetterSet = FxHashSet<char>;

/// Collect the letters of a string into a set
#[must_use]
pub fn letter_set(letters: &str) -> LetterSet {
    letters.chars().collect()
}

/// Multiset of letters: each present letter maps to a positive count
///
/// Wildcard sentinels are never counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count letters from a code point stream, skipping `wildcard` if given
    #[must_use]
    pub fn from_chars(letters: impl IntoIterator<Item = char>, wildcard: Option<char>) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for letter in letters {
            if Some(letter) != wildcard {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Flatten several strings and count every non-wildcard letter
    ///
    /// # Examples
    /// ```
    /// use wordsift::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_strs(["_e___", "_ru_l"], Some('_'));
    /// assert_eq!(counts.get('e'), 1);
    /// assert_eq!(counts.get('_'), 0);
    /// assert_eq!(counts.total(), 4);
    /// ```
    #[must_use]
    pub fn from_strs<'a>(strs: impl IntoIterator<Item = &'a str>, wildcard: Option<char>) -> Self {
        Self::from_chars(strs.into_iter().flat_map(str::chars), wildcard)
    }

    /// Count the concrete letters of one or more masks
    #[must_use]
    pub fn from_masks<'a>(masks: impl IntoIterator<Item = &'a Mask>) -> Self {
        Self::from_chars(masks.into_iter().flat_map(Mask::letters), None)
    }

    /// Multiplicity of `letter` (0 when absent)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.counts.contains_key(&letter)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all multiplicities
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Multiset subset: every letter of `self` occurs in `other` at least as often
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .all(|(&letter, &count)| other.get(letter) >= count)
    }
}

/// True iff no letter of `word` is in the exclude set
#[must_use]
pub fn excludes(exclude: &LetterSet, word: &[char]) -> bool {
    !word.iter().any(|letter| exclude.contains(letter))
}

/// Every yellow constraint's letters are present in `word` with enough multiplicity
///
/// The position a yellow letter was reported at is not checked.
#[must_use]
pub fn yellows_all(yellows: &[Mask], word: &[char]) -> bool {
    if yellows.is_empty() {
        return true;
    }
    let available = LetterCounts::from_chars(word.iter().copied(), None);
    yellows
        .iter()
        .all(|yellow| LetterCounts::from_masks([yellow]).is_subset_of(&available))
}

/// At least one letter of the union of all yellows appears in `word`
#[must_use]
pub fn yellows_any(yellows: &[Mask], word: &[char]) -> bool {
    let known = LetterCounts::from_masks(yellows);
    word.iter().any(|&letter| known.contains(letter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Wildcard;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn yellows(patterns: &[&str]) -> Vec<Mask> {
        patterns
            .iter()
            .map(|p| Mask::new(p, Wildcard::Underscore))
            .collect()
    }

    #[test]
    fn counts_skip_wildcard() {
        let counts = LetterCounts::from_strs(["?a?b", "a"], Some('?'));
        assert_eq!(counts.get('a'), 2);
        assert_eq!(counts.get('b'), 1);
        assert_eq!(counts.get('?'), 0);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn subset_respects_multiplicity() {
        let aab = LetterCounts::from_strs(["aab"], None);
        let ab = LetterCounts::from_strs(["ab"], None);
        let abca = LetterCounts::from_strs(["abca"], None);

        assert!(ab.is_subset_of(&aab));
        assert!(!aab.is_subset_of(&ab));
        assert!(aab.is_subset_of(&abca));
        assert!(LetterCounts::default().is_subset_of(&ab));
    }

    #[test]
    fn excludes_rejects_any_gray_letter() {
        let gray = letter_set("xyz");
        assert!(excludes(&gray, &chars("crane")));
        assert!(!excludes(&gray, &chars("crazy")));
    }

    #[test]
    fn yellows_all_single_constraint() {
        assert!(yellows_all(&yellows(&["_i___"]), &chars("lipas")));
    }

    #[test]
    fn yellows_all_multiple_constraints() {
        let ys = yellows(&["_i___", "__p__"]);
        assert!(yellows_all(&ys, &chars("lipas")));
        assert!(!yellows_all(&ys, &chars("slate")));
    }

    #[test]
    fn yellows_all_requires_multiplicity() {
        let ys = yellows(&["e___e"]);
        assert!(yellows_all(&ys, &chars("geese")));
        assert!(!yellows_all(&ys, &chars("crane")));
    }

    #[test]
    fn yellows_all_empty_is_vacuous() {
        assert!(yellows_all(&[], &chars("crane")));
    }

    #[test]
    fn yellows_any_discovery() {
        let ys = yellows(&["_e___", "_ru_l"]);
        assert!(yellows_any(&ys, &chars("urali")));
        assert!(!yellows_any(&ys, &chars("ghost")));
        assert!(!yellows_any(&[], &chars("urali")));
    }

    proptest! {
        #[test]
        fn excludes_empty_set_accepts_everything(word in "\\PC{0,8}") {
            prop_assert!(excludes(&LetterSet::default(), &chars(&word)));
        }

        #[test]
        fn subset_is_reflexive(a in "[a-e]{0,8}") {
            let a = LetterCounts::from_strs([a.as_str()], None);
            prop_assert!(a.is_subset_of(&a));
        }

        #[test]
        fn subset_is_transitive(a in "[a-d]{0,5}", b in "[a-d]{0,7}", c in "[a-d]{0,9}") {
            let a = LetterCounts::from_strs([a.as_str()], None);
            let b = LetterCounts::from_strs([b.as_str()], None);
            let c = LetterCounts::from_strs([c.as_str()], None);
            if a.is_subset_of(&b) && b.is_subset_of(&c) {
                prop_assert!(a.is_subset_of(&c));
            }
        }
    }
}
