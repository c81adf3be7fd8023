//! Build script embedding the default dictionary
//!
//! Turns `data/dictionary.txt` into a const slice so the binary works without
//! a `--dict` path.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

const DICTIONARY_SOURCE: &str = "data/dictionary.txt";

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let content = fs::read_to_string(DICTIONARY_SOURCE)
        .unwrap_or_else(|e| panic!("Failed to read {DICTIONARY_SOURCE}: {e}"));

    let source = render_dictionary(&content);
    let target = out_dir.join("dictionary.rs");
    fs::write(&target, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", target.display()));

    println!("cargo:rerun-if-changed={DICTIONARY_SOURCE}");
}

/// Render one quoted entry per non-blank line, plus the entry count
fn render_dictionary(content: &str) -> String {
    let entries: Vec<&str> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();

    let mut source = String::from("// Generated from data/dictionary.txt\n\n");
    source.push_str("/// Default dictionary used when no --dict path is given\n");
    source.push_str("pub const DICTIONARY: &[&str] = &[\n");
    for entry in &entries {
        writeln!(source, "    {entry:?},").unwrap();
    }
    source.push_str("];\n\n");
    source.push_str("/// Number of entries in DICTIONARY\n");
    writeln!(source, "pub const DICTIONARY_COUNT: usize = {};", entries.len()).unwrap();
    source
}
