//! Word scoring heuristics
//!
//! Two independent strategies: a per-word letter-quality score used by the
//! match/discover modes, and pairwise overlap analysis used by analyze mode.

mod analysis;
mod scrabble;

pub use analysis::{AnalysisOrder, WordStats, analyze, analyze_pair};
pub use scrabble::{
    ScoredWord, UNIQUE_LETTER_WEIGHT, inverted_scrabble, sort_by_score, uniqueness_score,
};
