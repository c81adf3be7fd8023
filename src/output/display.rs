//! Writing filter results to a terminal or any other sink

use super::formatters::format_hit;
use crate::candidates::CandidateSet;
use crate::filter::{FilterReport, Hit};
use std::io::{self, Write};

/// Write one line per result
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_hits<W: Write>(out: &mut W, hits: &[Hit]) -> io::Result<()> {
    for hit in hits {
        writeln!(out, "{}", format_hit(hit))?;
    }
    Ok(())
}

/// Write the `--verbose` preamble: generated candidates and dictionary size
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_verbose_header<W: Write>(
    out: &mut W,
    candidates: Option<&CandidateSet>,
    dictionary_len: usize,
) -> io::Result<()> {
    writeln!(out, "permutations")?;
    if let Some(candidates) = candidates {
        for word in candidates.sorted() {
            writeln!(out, "{word}")?;
        }
    }
    writeln!(out, "---")?;
    writeln!(out, "dictionary: {dictionary_len} words")
}

/// Print a report to standard output
///
/// # Errors
///
/// Returns an error if standard output cannot be written (e.g. a closed pipe).
pub fn print_report(report: &FilterReport, dictionary_len: usize, verbose: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if verbose {
        write_verbose_header(&mut out, report.candidates.as_ref(), dictionary_len)?;
    }
    write_hits(&mut out, &report.hits)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::generate_candidates;
    use crate::core::{Mask, Wildcard};
    use crate::scoring::ScoredWord;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn hits_one_per_line() {
        let hits = vec![
            Hit::Word("liker".into()),
            Hit::Scored(ScoredWord {
                word: "stare".into(),
                score: 150,
            }),
        ];
        let text = render(|out| write_hits(out, &hits));
        assert_eq!(text, "liker\nstare (150)\n");
    }

    #[test]
    fn no_hits_no_output() {
        assert_eq!(render(|out| write_hits(out, &[])), "");
    }

    #[test]
    fn verbose_header_lists_candidates_sorted() {
        let candidates = generate_candidates("ab", "", &Mask::new("??", Wildcard::Question));
        let text = render(|out| write_verbose_header(out, Some(&candidates), 42));
        assert_eq!(text, "permutations\nab\nba\n---\ndictionary: 42 words\n");
    }

    #[test]
    fn verbose_header_without_candidates() {
        let text = render(|out| write_verbose_header(out, None, 7));
        assert_eq!(text, "permutations\n---\ndictionary: 7 words\n");
    }
}
