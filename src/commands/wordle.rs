//! Wordle front-end
//!
//! Turns green/yellow/gray feedback into a filter configuration. Masks use the
//! `_` wildcard. Without `--match` or `--analyze` the run is a discovery pass
//! that looks for words testing only unexplored letters.

use crate::core::{LetterSet, Mask, Wildcard, letter_set};
use crate::error::ArgumentError;
use crate::filter::{FilterConfig, Mode};
use crate::scoring::AnalysisOrder;

/// Default Wordle length mask
pub const DEFAULT_MASK: &str = "_____";

/// Options accepted by the wordle command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordleOptions {
    pub mask: String,
    pub green: String,
    pub yellows: Vec<String>,
    pub gray: String,
    pub known: String,
    pub maybe: String,
    pub match_mode: bool,
    pub analyze: bool,
    pub order: AnalysisOrder,
    pub limit: usize,
}

impl Default for WordleOptions {
    fn default() -> Self {
        Self {
            mask: DEFAULT_MASK.to_string(),
            green: String::new(),
            yellows: Vec::new(),
            gray: String::new(),
            known: String::new(),
            maybe: String::new(),
            match_mode: false,
            analyze: false,
            order: AnalysisOrder::default(),
            limit: 0,
        }
    }
}

impl WordleOptions {
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.analyze {
            Mode::Analyze(self.order)
        } else if self.match_mode {
            Mode::Match
        } else {
            Mode::Discover
        }
    }
}

/// Parse a mask-shaped feedback value and check it lines up with `mask`
fn parse_feedback(flag: &'static str, value: &str, mask: &Mask) -> Result<Mask, ArgumentError> {
    let parsed = Mask::parse(value, Wildcard::Underscore)?;
    if !mask.is_empty() && !parsed.is_empty() && parsed.len() != mask.len() {
        return Err(ArgumentError::LengthMismatch {
            flag,
            value: value.to_string(),
            expected: mask.len(),
        });
    }
    Ok(parsed)
}

/// Build the filter configuration for a Wordle run
///
/// An all-wildcard green string counts as "no greens".
///
/// # Errors
///
/// Returns `ArgumentError` if any mask-shaped value uses `?` or does not match
/// the mask length.
pub fn wordle_config(options: &WordleOptions) -> Result<FilterConfig, ArgumentError> {
    let mask = Mask::parse(&options.mask, Wildcard::Underscore)?;

    let mut green = parse_feedback("green", &options.green, &mask)?;
    if green.is_blank() {
        green = Mask::none(Wildcard::Underscore);
    }

    let yellows = options
        .yellows
        .iter()
        .map(|yellow| parse_feedback("yellow", yellow, &mask))
        .collect::<Result<Vec<_>, _>>()?;

    let exclude: LetterSet = letter_set(&options.gray);

    Ok(FilterConfig::new(Wildcard::Underscore)
        .with_mask(mask)
        .with_green(green)
        .with_yellows(yellows)
        .with_exclude(exclude)
        .with_known(options.known.as_str())
        .with_maybe(options.maybe.as_str())
        .with_mode(options.mode())
        .with_limit(options.limit))
}
