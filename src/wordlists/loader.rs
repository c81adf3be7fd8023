//! Dictionary loading utilities
//!
//! Builds a `Dictionary` from a file or from the embedded word list. The file
//! handle lives only as long as the read.

use crate::core::Dictionary;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load a dictionary from a file, one word per line
///
/// Surrounding whitespace is trimmed, blank lines are ignored and duplicate
/// lines collapse.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read, or is not UTF-8.
///
/// # Examples
/// ```no_run
/// use wordsift::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let reader = BufReader::new(File::open(path)?);
    read_dictionary(reader)
}

/// Read a dictionary from any buffered reader
///
/// # Errors
///
/// Returns the first I/O error encountered while reading lines.
pub fn read_dictionary<R: BufRead>(reader: R) -> io::Result<Dictionary> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(Dictionary::from_lines(lines))
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use wordsift::wordlists::loader::dictionary_from_slice;
/// use wordsift::wordlists::DICTIONARY;
///
/// let dict = dictionary_from_slice(DICTIONARY);
/// assert!(dict.len() <= DICTIONARY.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_lines(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn dictionary_from_slice_converts_words() {
        let dict = dictionary_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(dict.len(), 3);
        let words: Vec<&str> = dict.iter().map(|w| w.text()).collect();
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn dictionary_from_slice_skips_blank() {
        let dict = dictionary_from_slice(&["crane", "", "  ", "slate"]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn dictionary_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(dictionary_from_slice(input).is_empty());
    }

    #[test]
    fn read_dictionary_trims_and_dedups() {
        let input = Cursor::new("crane \nslate\r\n\ncrane\nlipas\n");
        let dict = read_dictionary(input).unwrap();

        let words: Vec<&str> = dict.iter().map(|w| w.text()).collect();
        assert_eq!(words, vec!["crane", "slate", "lipas"]);
    }

    #[test]
    fn read_dictionary_keeps_indented_lines() {
        let input = Cursor::new("  crane\n\tslate\ncrane\n");
        let dict = read_dictionary(input).unwrap();

        let words: Vec<&str> = dict.iter().map(|w| w.text()).collect();
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn read_dictionary_rejects_invalid_utf8() {
        let input = Cursor::new(vec![b'a', 0xff, b'\n']);
        assert!(read_dictionary(input).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_from_file("/definitely/not/a/dictionary.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_from_embedded_dictionary() {
        use crate::wordlists::DICTIONARY;

        let dict = dictionary_from_slice(DICTIONARY);
        assert_eq!(dict.len(), DICTIONARY.len());
    }
}
