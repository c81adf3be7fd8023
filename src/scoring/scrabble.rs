//! Uniqueness-weighted inverted Scrabble score
//!
//! Ranks guesses by how many distinct letters they test and how common those
//! letters are in English. Common letters carry the lowest Scrabble values, so
//! the table is inverted.

use crate::core::Word;

/// Weight applied per distinct letter
pub const UNIQUE_LETTER_WEIGHT: u32 = 20;

/// Inverted Scrabble value of a lowercase ASCII letter
///
/// # Panics
/// Panics on any letter outside `a..=z`. Dictionaries fed to the scored modes
/// must be lowercase ASCII; anything else is a bug upstream.
#[must_use]
pub const fn inverted_scrabble(letter: char) -> u32 {
    match letter {
        'a' | 'e' | 'i' | 'o' | 'u' | 'l' | 'n' | 's' | 't' | 'r' => 10,
        'd' | 'g' => 8,
        'b' | 'c' | 'm' | 'p' => 5,
        'f' | 'h' | 'v' | 'w' | 'y' => 4,
        'k' => 3,
        'j' | 'x' => 2,
        'q' | 'z' => 1,
        _ => panic!("inverted_scrabble: letter outside the scoring table"),
    }
}

/// `20 * distinct letters + sum of inverted Scrabble values`
///
/// # Panics
/// Panics if the word contains a letter outside `a..=z`.
///
/// # Examples
/// ```
/// use wordsift::core::Word;
/// use wordsift::scoring::uniqueness_score;
///
/// let crane = Word::new("crane").unwrap();
/// // 5 distinct letters: 100, plus c(5) r(10) a(10) n(10) e(10)
/// assert_eq!(uniqueness_score(&crane), 145);
/// ```
#[must_use]
pub fn uniqueness_score(word: &Word) -> u32 {
    let unique = word.unique_letters() as u32;
    let letters: u32 = word.chars().iter().map(|&c| inverted_scrabble(c)).sum();
    UNIQUE_LETTER_WEIGHT * unique + letters
}

/// A word with its uniqueness-weighted score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

impl ScoredWord {
    #[must_use]
    pub fn new(word: &Word) -> Self {
        Self {
            word: word.text().to_string(),
            score: uniqueness_score(word),
        }
    }
}

/// Stable sort by descending score; equal scores keep collection order
pub fn sort_by_score(scored: &mut [ScoredWord]) {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
}
