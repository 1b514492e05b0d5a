//! Build script to embed the bundled word pool
//!
//! Reads `data/words.txt`, keeps lowercase words of 4 to 8 letters and writes
//! them to `$OUT_DIR/words.rs` as a const array.

use std::collections::BTreeSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";
const LENGTHS: std::ops::RangeInclusive<usize> = 4..=8;

fn main() {
    println!("cargo:rerun-if-changed={WORD_LIST}");

    let content =
        fs::read_to_string(WORD_LIST).unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));

    let mut seen = BTreeSet::new();
    let mut words = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let word = line.to_lowercase();
        let length = word.chars().count();
        if !word.chars().all(char::is_alphabetic) || !LENGTHS.contains(&length) {
            println!(
                "cargo:warning={WORD_LIST}:{}: skipping '{line}'",
                number + 1
            );
            continue;
        }
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    let mut source = String::from("// Generated from data/words.txt\n\n");
    source.push_str("/// Bundled word pool (4 to 8 letters)\n");
    source.push_str("pub const EMBEDDED_WORDS: &[&str] = &[\n");
    for word in &words {
        // Infallible: writing to a String
        let _ = writeln!(source, "    {word:?},");
    }
    source.push_str("];\n\n");
    source.push_str("/// Number of words in EMBEDDED_WORDS\n");
    let _ = writeln!(source, "pub const EMBEDDED_WORDS_COUNT: usize = {};", words.len());

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let output = Path::new(&out_dir).join("words.rs");
    fs::write(&output, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output.display()));
}
