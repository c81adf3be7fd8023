//! Anagram front-end
//!
//! Finds dictionary words spelled from a known letter multiset, optionally
//! padded from a wildcard alphabet, under a `?`-wildcard mask.

use crate::core::{Mask, Wildcard, letter_set};
use crate::error::ArgumentError;
use crate::filter::{FilterConfig, Mode};
use crate::scoring::AnalysisOrder;

/// Default anagram mask: five open slots
pub const DEFAULT_MASK: &str = "?????";

/// Options accepted by the anagram command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramOptions {
    pub mask: String,
    pub known: String,
    pub maybe: String,
    pub exclude: String,
    pub analyze: bool,
    pub order: AnalysisOrder,
    pub limit: usize,
}

impl Default for AnagramOptions {
    fn default() -> Self {
        Self {
            mask: DEFAULT_MASK.to_string(),
            known: String::new(),
            maybe: String::new(),
            exclude: String::new(),
            analyze: false,
            order: AnalysisOrder::default(),
            limit: 0,
        }
    }
}

/// Build the filter configuration for an anagram run
///
/// # Errors
///
/// Returns `ArgumentError::ForeignWildcard` if the mask uses `_`.
pub fn anagram_config(options: &AnagramOptions) -> Result<FilterConfig, ArgumentError> {
    let mask = Mask::parse(&options.mask, Wildcard::Question)?;
    let mode = if options.analyze {
        Mode::Analyze(options.order)
    } else {
        Mode::Filter
    };

    Ok(FilterConfig::new(Wildcard::Question)
        .with_mask(mask)
        .with_known(options.known.as_str())
        .with_maybe(options.maybe.as_str())
        .with_exclude(letter_set(&options.exclude))
        .with_mode(mode)
        .with_limit(options.limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::filter::{Filter, Hit};

    fn run(options: &AnagramOptions, words: &[&str]) -> Vec<String> {
        let dictionary = Dictionary::from_lines(words.iter().copied());
        let config = anagram_config(options).unwrap();
        Filter::new(&config, &dictionary)
            .run()
            .hits
            .iter()
            .map(|hit| hit.word().to_string())
            .collect()
    }

    #[test]
    fn defaults_to_five_open_slots_in_filter_mode() {
        let config = anagram_config(&AnagramOptions::default()).unwrap();
        assert_eq!(config.mask.to_string(), "?????");
        assert_eq!(config.mode, Mode::Filter);
        assert!(config.known.is_empty());
    }

    #[test]
    fn underscore_mask_rejected() {
        let options = AnagramOptions {
            mask: "_i_e_".into(),
            ..AnagramOptions::default()
        };
        assert!(matches!(
            anagram_config(&options),
            Err(ArgumentError::ForeignWildcard { .. })
        ));
    }

    #[test]
    fn analyze_flag_selects_order() {
        let options = AnagramOptions {
            analyze: true,
            order: AnalysisOrder::Unique,
            ..AnagramOptions::default()
        };
        let config = anagram_config(&options).unwrap();
        assert_eq!(config.mode, Mode::Analyze(AnalysisOrder::Unique));
    }

    #[test]
    fn equal_length_anagram() {
        let options = AnagramOptions {
            mask: "???".into(),
            known: "abc".into(),
            ..AnagramOptions::default()
        };
        let words = ["abc", "acb", "bac", "bca", "cab", "cba", "abd", "ab"];
        let mut found = run(&options, &words);
        found.sort();
        assert_eq!(found, vec!["abc", "acb", "bac", "bca", "cab", "cba"]);
    }

    #[test]
    fn wildcard_slot_anagram() {
        let options = AnagramOptions {
            mask: "???".into(),
            known: "ab".into(),
            maybe: "c".into(),
            ..AnagramOptions::default()
        };
        let found = run(&options, &["abc", "cab", "aba", "ddd", "abd", "cca"]);
        assert_eq!(found, vec!["abc", "cab", "aba"]);
    }

    #[test]
    fn mask_only_anagram() {
        let options = AnagramOptions {
            mask: "?i?e?".into(),
            limit: 1,
            ..AnagramOptions::default()
        };
        assert_eq!(run(&options, &["laker", "liker", "biker"]), vec!["liker"]);
    }

    #[test]
    fn analyze_results_carry_stats() {
        let options = AnagramOptions {
            analyze: true,
            ..AnagramOptions::default()
        };
        let dictionary = Dictionary::from_lines(["stare", "store", "spare"]);
        let config = anagram_config(&options).unwrap();
        let report = Filter::new(&config, &dictionary).run();
        assert!(matches!(report.hits[0], Hit::Analyzed(_)));
        assert_eq!(report.hits[0].word(), "stare");
    }
}
