//! Word set with stable iteration order
//!
//! Duplicates collapse on insert; iteration follows first-seen order, which
//! keeps filter-mode output deterministic for a given input.

use super::Word;
use rustc_hash::FxHashSet;

/// Set of dictionary words with O(1) membership test
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from lines, skipping blank ones and anything `Word::new` rejects
    ///
    /// # Examples
    /// ```
    /// use wordsift::core::Dictionary;
    ///
    /// let dict = Dictionary::from_lines(["crane", "", "slate  ", "crane"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("slate"));
    /// ```
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self::new();
        for line in lines {
            if let Ok(word) = Word::new(line) {
                dict.insert(word);
            }
        }
        dict
    }

    /// Insert a word; returns false if it was already present
    pub fn insert(&mut self, word: Word) -> bool {
        if !self.index.insert(word.text().to_string()) {
            return false;
        }
        self.words.push(word);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
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

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
