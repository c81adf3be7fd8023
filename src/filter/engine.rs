//! Dictionary scan
//!
//! Predicates are evaluated per word in a fixed order, stopping at the first
//! failure: candidate-set membership, positional mask, then the mode's own
//! constraints.

use super::config::{FilterConfig, Mode};
use super::rank::rank_stats;
use crate::candidates::{CandidateSet, generate_candidates};
use crate::core::{Dictionary, Word, excludes, yellows_all, yellows_any};
use crate::output::Tracer;
use crate::scoring::{ScoredWord, WordStats, analyze, sort_by_score};

/// One emitted result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// Filter mode: the bare word
    Word(String),
    /// Match/discover mode: word with its uniqueness score
    Scored(ScoredWord),
    /// Analyze mode: word with its overlap statistics
    Analyzed(WordStats),
}

impl Hit {
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::Word(word) => word,
            Self::Scored(scored) => &scored.word,
            Self::Analyzed(stats) => &stats.word,
        }
    }
}

/// Outcome of a filter run
#[derive(Debug, Clone, Default)]
pub struct FilterReport {
    /// Generated candidate set, if known letters were supplied
    pub candidates: Option<CandidateSet>,
    /// Dictionary words examined
    pub scanned: usize,
    /// Results in emission order, already limited
    pub hits: Vec<Hit>,
}

/// Single-pass dictionary filter
pub struct Filter<'a> {
    config: &'a FilterConfig,
    dictionary: &'a Dictionary,
    tracer: Tracer,
}

impl<'a> Filter<'a> {
    #[must_use]
    pub const fn new(config: &'a FilterConfig, dictionary: &'a Dictionary) -> Self {
        Self {
            config,
            dictionary,
            tracer: Tracer::disabled(),
        }
    }

    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// Build the candidate set, or `None` when no known letters were given
    #[must_use]
    pub fn candidates(&self) -> Option<CandidateSet> {
        if self.config.known.is_empty() {
            return None;
        }
        let alphabet = self.config.search_alphabet();
        let candidates = generate_candidates(&self.config.known, &alphabet, &self.config.mask);
        self.tracer.trace(format_args!(
            "generated {} candidates from known '{}' and alphabet '{}'",
            candidates.len(),
            self.config.known,
            alphabet
        ));
        Some(candidates)
    }

    /// Scan the dictionary and produce ranked, limited results
    #[must_use]
    pub fn run(&self) -> FilterReport {
        let config = self.config;
        self.tracer.trace(format_args!(
            "mode={} mask='{}' green='{}' yellows={} exclude={} limit={}",
            config.mode.name(),
            config.mask,
            config.green,
            config.yellows.len(),
            config.exclude.len(),
            config.limit
        ));

        let candidates = self.candidates();
        let mut scanned = 0;
        let mut hits = Vec::new();
        let mut scored = Vec::new();
        let mut survivors = Vec::new();

        for word in self.dictionary {
            scanned += 1;
            if !Self::passes_common(config, candidates.as_ref(), word) {
                continue;
            }
            match config.mode {
                Mode::Filter => {
                    if !excludes(&config.exclude, word.chars()) {
                        continue;
                    }
                    hits.push(Hit::Word(word.text().to_string()));
                    if config.limit_reached(hits.len()) {
                        break;
                    }
                }
                Mode::Match => {
                    if self.satisfies(word) {
                        scored.push(ScoredWord::new(word));
                    }
                }
                Mode::Discover => {
                    if self.explores(word) {
                        scored.push(ScoredWord::new(word));
                    }
                }
                Mode::Analyze(_) => {
                    if self.satisfies(word) {
                        survivors.push(word.clone());
                    }
                }
            }
        }

        match config.mode {
            Mode::Filter => {}
            Mode::Match | Mode::Discover => {
                self.tracer.trace(format_args!("{} words scored", scored.len()));
                sort_by_score(&mut scored);
                if config.limit > 0 {
                    scored.truncate(config.limit);
                }
                hits.extend(scored.into_iter().map(Hit::Scored));
            }
            Mode::Analyze(order) => {
                self.tracer.trace(format_args!("analyzing {} survivors", survivors.len()));
                let stats = survivors
                    .iter()
                    .map(|word| analyze(word, &survivors))
                    .collect();
                hits.extend(
                    rank_stats(stats, order, config.limit)
                        .into_iter()
                        .map(Hit::Analyzed),
                );
            }
        }

        self.tracer.trace(format_args!(
            "scanned {scanned} of {} words, emitting {}",
            self.dictionary.len(),
            hits.len()
        ));

        FilterReport {
            candidates,
            scanned,
            hits,
        }
    }

    fn passes_common(
        config: &FilterConfig,
        candidates: Option<&CandidateSet>,
        word: &Word,
    ) -> bool {
        if let Some(candidates) = candidates
            && !candidates.contains(word.text())
        {
            return false;
        }
        config.mask.is_empty() || config.mask.matches(word.chars())
    }

    /// Greens match, every yellow present, no gray letter
    fn satisfies(&self, word: &Word) -> bool {
        let config = self.config;
        (config.green.is_empty() || config.green.matches(word.chars()))
            && yellows_all(&config.yellows, word.chars())
            && excludes(&config.exclude, word.chars())
    }

    /// Misses the known greens, avoids yellow letters, no gray letter
    fn explores(&self, word: &Word) -> bool {
        let config = self.config;
        (config.green.is_empty() || !config.green.matches(word.chars()))
            && !yellows_any(&config.yellows, word.chars())
            && excludes(&config.exclude, word.chars())
    }
}
