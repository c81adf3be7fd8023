//! Filter run configuration

use crate::core::{LetterSet, Mask, Wildcard};
use crate::scoring::AnalysisOrder;

/// How surviving words are selected and emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Stream survivors in dictionary order
    #[default]
    Filter,
    /// Satisfy greens, yellows and grays; rank by uniqueness score
    Match,
    /// Avoid known greens, yellows and grays; rank by uniqueness score
    Discover,
    /// Rank survivors by pairwise overlap with each other
    Analyze(AnalysisOrder),
}

impl Mode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Match => "match",
            Self::Discover => "discover",
            Self::Analyze(_) => "analyze",
        }
    }
}

/// Everything one filter pass needs besides the dictionary
///
/// Empty values mean "no constraint": an empty mask or green mask, no
/// yellows, an empty exclude set, no known letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub mask: Mask,
    pub green: Mask,
    pub yellows: Vec<Mask>,
    pub exclude: LetterSet,
    pub known: String,
    pub maybe: String,
    pub mode: Mode,
    /// 0 means unlimited
    pub limit: usize,
}

impl FilterConfig {
    /// Unconstrained configuration for the given wildcard convention
    #[must_use]
    pub fn new(wildcard: Wildcard) -> Self {
        Self {
            mask: Mask::none(wildcard),
            green: Mask::none(wildcard),
            yellows: Vec::new(),
            exclude: LetterSet::default(),
            known: String::new(),
            maybe: String::new(),
            mode: Mode::default(),
            limit: 0,
        }
    }

    #[must_use]
    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.mask = mask;
        self
    }

    #[must_use]
    pub fn with_green(mut self, green: Mask) -> Self {
        self.green = green;
        self
    }

    #[must_use]
    pub fn with_yellows(mut self, yellows: Vec<Mask>) -> Self {
        self.yellows = yellows;
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, exclude: LetterSet) -> Self {
        self.exclude = exclude;
        self
    }

    #[must_use]
    pub fn with_known(mut self, known: impl Into<String>) -> Self {
        self.known = known.into();
        self
    }

    #[must_use]
    pub fn with_maybe(mut self, maybe: impl Into<String>) -> Self {
        self.maybe = maybe.into();
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// True once `emitted` items fill the limit
    #[inline]
    #[must_use]
    pub const fn limit_reached(&self, emitted: usize) -> bool {
        self.limit > 0 && emitted >= self.limit
    }

    /// Maybe letters with excluded letters removed
    #[must_use]
    pub fn search_alphabet(&self) -> String {
        self.maybe
            .chars()
            .filter(|letter| !self.exclude.contains(letter))
            .collect()
    }
}
