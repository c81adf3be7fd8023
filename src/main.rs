//! Wordsift - CLI
//!
//! Filters a dictionary by anagram or Wordle constraints and prints the
//! survivors, optionally ranked.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wordsift::{
    commands::{AnagramOptions, WordleOptions, anagram_config, wordle_config},
    core::Dictionary,
    error::ArgumentError,
    filter::{Filter, FilterConfig},
    output::{Tracer, print_report},
    scoring::AnalysisOrder,
    wordlists::{DICTIONARY, loader},
};

#[derive(Parser)]
#[command(
    name = "wordsift",
    about = "Filter a dictionary by Wordle feedback or anagram letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one word per line (default: embedded word list)
    #[arg(long, global = true)]
    dict: Option<PathBuf>,

    /// Emit at most N results (0 for unlimited)
    #[arg(long, global = true, default_value = "0")]
    limit: usize,

    /// Print generated candidates and dictionary size before the results
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Anagram search: spell words from known letters under a `?` mask
    Anagram {
        /// Positional mask, `?` for open slots (e.g. ?i?e?)
        #[arg(long, default_value = wordsift::commands::anagram::DEFAULT_MASK)]
        mask: String,

        /// Letters every result must use (multiset)
        #[arg(long, alias = "include", default_value = "")]
        known: String,

        /// Letters that may fill slots the known letters leave open
        #[arg(long, default_value = "")]
        maybe: String,

        /// Letters that disqualify a word
        #[arg(long, default_value = "")]
        exclude: String,

        /// Rank results by pairwise green/yellow overlap
        #[arg(long)]
        analyze: bool,

        /// Analysis ordering
        #[arg(long, default_value = "greens", value_parser = AnalysisOrder::NAMES)]
        order: String,
    },

    /// Wordle helper: filter by green/yellow/gray feedback with a `_` mask
    Wordle {
        /// Length mask, `_` for open slots
        #[arg(long, default_value = wordsift::commands::wordle::DEFAULT_MASK)]
        mask: String,

        /// Letters known at their position (e.g. _r__e)
        #[arg(long, default_value = "")]
        green: String,

        /// Letters present elsewhere, shaped like the mask (repeatable)
        #[arg(long = "yellow")]
        yellows: Vec<String>,

        /// Letters known not to be in the word
        #[arg(long, alias = "exclude", default_value = "")]
        gray: String,

        /// Letters every result must use (multiset)
        #[arg(long, default_value = "")]
        known: String,

        /// Letters that may fill slots the known letters leave open
        #[arg(long, default_value = "")]
        maybe: String,

        /// Require greens, yellows and grays to be satisfied (default: discover)
        #[arg(long = "match", conflicts_with = "analyze")]
        match_mode: bool,

        /// Rank matching words by pairwise green/yellow overlap
        #[arg(long)]
        analyze: bool,

        /// Analysis ordering
        #[arg(long, default_value = "greens", value_parser = AnalysisOrder::NAMES)]
        order: String,
    },
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Anagram { .. } => "anagram",
            Self::Wordle { .. } => "wordle",
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // help and version go to stdout and are not failures
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    let subcommand = cli.command.name();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "fatal:".red().bold());
            if let Some(usage) = usage_hint(&err, subcommand) {
                eprintln!("\n{usage}");
                eprintln!("For more information, try '--help'.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let tracer = Tracer::from_env();
    let config = build_config(cli.command, cli.limit)?;

    let dictionary = load_dictionary(cli.dict.as_deref())?;
    tracer.trace(format_args!("dictionary: {} words", dictionary.len()));

    let report = Filter::new(&config, &dictionary)
        .with_tracer(tracer)
        .run();
    print_report(&report, dictionary.len(), cli.verbose).context("failed to write results")
}

fn build_config(command: Commands, limit: usize) -> Result<FilterConfig> {
    let config = match command {
        Commands::Anagram {
            mask,
            known,
            maybe,
            exclude,
            analyze,
            order,
        } => anagram_config(&AnagramOptions {
            mask,
            known,
            maybe,
            exclude,
            analyze,
            order: AnalysisOrder::from_name(&order).unwrap_or_default(),
            limit,
        })?,
        Commands::Wordle {
            mask,
            green,
            yellows,
            gray,
            known,
            maybe,
            match_mode,
            analyze,
            order,
        } => wordle_config(&WordleOptions {
            mask,
            green,
            yellows,
            gray,
            known,
            maybe,
            match_mode,
            analyze,
            order: AnalysisOrder::from_name(&order).unwrap_or_default(),
            limit,
        })?,
    };
    Ok(config)
}

/// Usage line for `subcommand` when `err` came from bad arguments
fn usage_hint(err: &anyhow::Error, subcommand: &str) -> Option<String> {
    err.downcast_ref::<ArgumentError>()?;
    let mut command = Cli::command();
    command.build();
    let usage = match command.find_subcommand_mut(subcommand) {
        Some(sub) => sub.render_usage(),
        None => command.render_usage(),
    };
    Some(usage.to_string())
}

/// Load the dictionary from `path`, or the embedded list when absent
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("cannot read dictionary {}", path.display())),
        None => Ok(loader::dictionary_from_slice(DICTIONARY)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_errors_carry_subcommand_usage() {
        let err = anyhow::Error::from(ArgumentError::ForeignWildcard {
            value: "_i_e_".into(),
            found: '_',
            expected: '?',
        });
        let usage = usage_hint(&err, "anagram").unwrap();
        assert!(usage.starts_with("Usage:"));
        assert!(usage.contains("wordsift anagram"));
    }

    #[test]
    fn io_errors_have_no_usage() {
        let err = load_dictionary(Some(Path::new("/nonexistent/wordsift/dict.txt"))).unwrap_err();
        assert!(usage_hint(&err, "wordle").is_none());
    }

    #[test]
    fn bad_wildcard_reaches_the_top_level_as_argument_error() {
        let cli = Cli::try_parse_from(["wordsift", "wordle", "--green", "?r???"]).unwrap();
        let err = build_config(cli.command, cli.limit).unwrap_err();
        assert!(err.downcast_ref::<ArgumentError>().is_some());
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
