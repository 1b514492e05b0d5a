//! Word representation
//!
//! A Word stores a normalized (lowercase) sequence of letters. Any alphabetic
//! character is accepted, so accented letters such as `ç` or `é` work too.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A lowercase word made only of letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("'{0}' is not a letter")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased; surrounding whitespace is not trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains a non-alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Casa").unwrap();
    /// assert_eq!(word.text(), "casa");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("ca5a").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a Word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used by feedback calculation for duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
