//! Word source: secret selection from a pool grouped by word length

use super::EMBEDDED_WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Deterministic secrets used when the pool has no word of the requested length
pub const FALLBACK_WORDS: &[&str] = &["casa", "canto", "planta", "amarelo", "montanha"];

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("no words with {length} letters available")]
    NoWordsAvailable { length: usize },
    #[error("failed to load word list from {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// In-memory word pool, grouped by letter count
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    pool: FxHashMap<usize, Vec<Word>>,
}

impl WordSource {
    /// Build a pool from words, dropping duplicates and keeping first-seen order
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let mut pool: FxHashMap<usize, Vec<Word>> = FxHashMap::default();

        for word in words {
            if seen.insert(word.clone()) {
                pool.entry(word.len()).or_default().push(word);
            }
        }

        Self { pool }
    }

    /// The pool bundled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(EMBEDDED_WORDS))
    }

    /// Load a pool from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::Load` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|source| WordSourceError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_words(words))
    }

    /// One-shot pool load that never fails
    ///
    /// Without a path the bundled pool is used. If loading `path` fails the
    /// failure is logged and the bundled pool is used instead.
    #[must_use]
    pub fn load_or_fallback(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::embedded();
        };

        match Self::load(path) {
            Ok(source) => {
                info!("Loaded {} words from {}", source.len(), path.display());
                source
            }
            Err(err) => {
                warn!("{err}; using the bundled word list");
                Self::embedded()
            }
        }
    }

    /// Pick a uniformly random word with `length` letters
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::NoWordsAvailable` if no word has that length.
    pub fn pick_word<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<Word, WordSourceError> {
        self.words_of_length(length)
            .choose(rng)
            .cloned()
            .ok_or(WordSourceError::NoWordsAvailable { length })
    }

    /// Pick a random word, or the built-in fallback word when none has `length` letters
    pub fn pick_word_or_fallback<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Word {
        self.pick_word(length, rng).unwrap_or_else(|err| {
            warn!("{err}; using the built-in fallback word");
            Self::fallback_word(length)
        })
    }

    /// Deterministic built-in word with `length` letters
    ///
    /// # Panics
    /// Will not panic - fallback words are made only of letters and the
    /// generated filler is never empty.
    #[must_use]
    pub fn fallback_word(length: usize) -> Word {
        let text = FALLBACK_WORDS
            .iter()
            .find(|w| w.chars().count() == length)
            .map_or_else(|| "a".repeat(length.max(1)), |&w| w.to_owned());
        debug!("Fallback word for length {length}: {text}");
        Word::new(text).expect("fallback words are valid")
    }

    /// Check if a word is in the pool
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words_of_length(word.len()).contains(word)
    }

    /// All words with `length` letters, in load order
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.pool.get(&length).map_or(&[][..], Vec::as_slice)
    }

    /// Non-empty lengths with their word counts, shortest first
    #[must_use]
    pub fn lengths(&self) -> Vec<(usize, usize)> {
        let mut lengths: Vec<(usize, usize)> = self
            .pool
            .iter()
            .filter(|(_, words)| !words.is_empty())
            .map(|(&len, words)| (len, words.len()))
            .collect();
        lengths.sort_unstable();
        lengths
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
