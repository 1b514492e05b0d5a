//! Word list loading utilities
//!
//! Parses newline-delimited word lists from files, strings or embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns every valid word, skipping blank lines, `#` comments and invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(load_from_str(&content))
}

/// Parse words from newline-delimited text
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::load_from_str;
///
/// let words = load_from_str("# comment\nCasa\n\nca5a\nporta\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "casa");
/// ```
#[must_use]
pub fn load_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::EMBEDDED_WORDS;
///
/// let words = words_from_slice(EMBEDDED_WORDS);
/// assert_eq!(words.len(), EMBEDDED_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["casa", "PORTA", "planta"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "casa");
        assert_eq!(words[1].text(), "porta");
        assert_eq!(words[2].text(), "planta");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["casa", "ca sa", "", "c4sa", "porta"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "casa");
        assert_eq!(words[1].text(), "porta");
    }

    #[test]
    fn load_from_str_trims_and_skips_comments() {
        let words = load_from_str("  amor  \n# 4 letters\n\r\nrato\r\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["amor", "rato"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join("wordle_game_loader_test.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "canto").unwrap();
            writeln!(file, "AMIGO").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "amigo");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        let path = std::env::temp_dir().join("wordle_game_definitely_missing.txt");
        assert!(load_from_file(path).is_err());
    }
}
