//! Formatting utilities for result lines

use crate::filter::Hit;

/// Format one result as an output line (without newline)
///
/// - filter mode: `word`
/// - match/discover: `word (score)`
/// - analyze: `word: green/yellow`
#[must_use]
pub fn format_hit(hit: &Hit) -> String {
    match hit {
        Hit::Word(word) => word.clone(),
        Hit::Scored(scored) => format!("{} ({})", scored.word, scored.score),
        Hit::Analyzed(stats) => format!("{}: {}/{}", stats.word, stats.green, stats.yellow),
    }
}
