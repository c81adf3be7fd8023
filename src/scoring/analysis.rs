//! Pairwise green/yellow analysis
//!
//! Scores a word by how much positional and presence overlap it has with every
//! other surviving word. High overlap means a guess is likely to light up
//! squares against whatever the answer turns out to be.

use crate::core::Word;

/// Aggregate comparison of one word against a surviving set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStats {
    pub word: String,
    pub unique_letters: usize,
    pub green: usize,
    pub yellow: usize,
    pub miss: usize,
}

impl WordStats {
    /// Greens plus yellows
    #[inline]
    #[must_use]
    pub const fn presence(&self) -> usize {
        self.green + self.yellow
    }
}

/// Compare `target` to `other` position by position
///
/// Returns `(green, yellow, miss)`. A position is green if the letters match,
/// yellow if the target's letter appears anywhere in `other`, miss otherwise.
/// Both words must have the same length; extra positions are ignored.
#[must_use]
pub fn analyze_pair(target: &[char], other: &[char]) -> (usize, usize, usize) {
    let (mut green, mut yellow, mut miss) = (0, 0, 0);
    for (letter, other_letter) in target.iter().zip(other) {
        if letter == other_letter {
            green += 1;
        } else if other.contains(letter) {
            yellow += 1;
        } else {
            miss += 1;
        }
    }
    (green, yellow, miss)
}

/// Sum `analyze_pair` of `target` against every other same-length word in `survivors`
#[must_use]
pub fn analyze(target: &Word, survivors: &[Word]) -> WordStats {
    let mut stats = WordStats {
        word: target.text().to_string(),
        unique_letters: target.unique_letters(),
        ..WordStats::default()
    };

    for other in survivors {
        if other == target || other.len() != target.len() {
            continue;
        }
        let (green, yellow, miss) = analyze_pair(target.chars(), other.chars());
        stats.green += green;
        stats.yellow += yellow;
        stats.miss += miss;
    }

    stats
}

/// Ranking used to order analysis results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisOrder {
    /// Greens, descending
    #[default]
    Greens,
    /// Greens + yellows, descending
    Presence,
    /// Unique letters descending, then greens + yellows descending
    Unique,
}

impl AnalysisOrder {
    /// Names accepted by `from_name`
    pub const NAMES: [&'static str; 3] = ["greens", "presence", "unique"];

    /// Look up an ordering by name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "greens" => Some(Self::Greens),
            "presence" => Some(Self::Presence),
            "unique" => Some(Self::Unique),
            _ => None,
        }
    }

    /// True if `a` ranks strictly ahead of `b`
    #[must_use]
    pub fn precedes(self, a: &WordStats, b: &WordStats) -> bool {
        match self {
            Self::Greens => a.green > b.green,
            Self::Presence => a.presence() > b.presence(),
            Self::Unique => (a.unique_letters, a.presence()) > (b.unique_letters, b.presence()),
        }
    }
}
