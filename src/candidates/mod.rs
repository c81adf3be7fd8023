//! Candidate word generation
//!
//! Enumerates every string that can be spelled from a set of required letters,
//! padded from a wildcard alphabet, and that fits a positional mask. The
//! result is used as a membership filter over the dictionary.

mod combine;
mod permute;

pub use combine::{CartesianPower, choose, choose_any};
pub use permute::permute_into;

use crate::core::{LetterCounts, Mask};
use rustc_hash::FxHashSet;

/// Finite set of generated candidate strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: FxHashSet<String>,
}

impl CandidateSet {
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Candidates in lexical order, for stable diagnostic output
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

/// Generate every word that uses all of `known`, pads from `known ∪ maybe`,
/// and satisfies `mask`
///
/// The target length is the mask length, or `known.len()` when the mask is
/// empty. Over-constrained input (more known letters than slots, or greens the
/// letters cannot supply) yields an empty set, as does a zero target length.
///
/// The caller is expected to have removed excluded letters from `maybe`.
///
/// Work grows as `L! * |alphabet|^(L - |known|)`; keep the filler count small.
///
/// # Examples
/// ```
/// use wordsift::candidates::generate_candidates;
/// use wordsift::core::{Mask, Wildcard};
///
/// let mask = Mask::new("???", Wildcard::Question);
/// let candidates = generate_candidates("ab", "c", &mask);
/// assert!(candidates.contains("abc"));
/// assert!(candidates.contains("cab"));
/// assert!(candidates.contains("aab"));
/// assert!(!candidates.contains("ddd"));
/// ```
#[must_use]
pub fn generate_candidates(known: &str, maybe: &str, mask: &Mask) -> CandidateSet {
    let known: Vec<char> = known.chars().collect();
    let target_len = if mask.is_empty() { known.len() } else { mask.len() };

    let mut words = FxHashSet::default();
    if target_len == 0 || known.len() > target_len {
        return CandidateSet { words };
    }

    let greens = LetterCounts::from_masks([mask]);

    if known.len() == target_len {
        if greens.is_subset_of(&LetterCounts::from_chars(known.iter().copied(), None)) {
            permute_into(&known, mask, &mut words);
        }
        return CandidateSet { words };
    }

    let alphabet = padding_alphabet(&known, maybe);
    let fillers = target_len - known.len();

    // Tuples that are rearrangements of each other spell the same multiset
    let mut seen: FxHashSet<Vec<char>> = FxHashSet::default();
    let mut letters = Vec::with_capacity(target_len);

    for mut tuple in CartesianPower::new(&alphabet, fillers) {
        tuple.sort_unstable();
        if !seen.insert(tuple.clone()) {
            continue;
        }

        letters.clear();
        letters.extend_from_slice(&known);
        letters.extend_from_slice(&tuple);

        if greens.is_subset_of(&LetterCounts::from_chars(letters.iter().copied(), None)) {
            permute_into(&letters, mask, &mut words);
        }
    }

    CandidateSet { words }
}

/// `maybe` followed by `known`, first occurrence of each letter only
fn padding_alphabet(known: &[char], maybe: &str) -> Vec<char> {
    let mut seen = FxHashSet::default();
    maybe
        .chars()
        .chain(known.iter().copied())
        .filter(|letter| seen.insert(*letter))
        .collect()
}
