//! Dictionary word representation
//!
//! A Word keeps its text together with the decoded code points, so positional
//! comparisons never have to re-decode UTF-8.

use rustc_hash::FxHashSet;
use std::fmt;

/// A dictionary word of any length
///
/// Length and positions are measured in Unicode code points, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::ContainsWhitespace => write!(f, "Word must not contain whitespace"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a dictionary line
    ///
    /// Surrounding whitespace is trimmed. Case is preserved; dictionaries are
    /// lowercase by convention.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty or still contains
    /// whitespace.
    ///
    /// # Examples
    /// ```
    /// use wordsift::core::Word;
    ///
    /// let word = Word::new("crane\n").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let text = text.trim().to_string();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }

        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as code points
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of code points
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn unique_letters(&self) -> usize {
        self.chars.iter().collect::<FxHashSet<_>>().len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
