//! Guess feedback calculation and representation
//!
//! Each position of a guess gets one [`CellResult`]:
//! - `Correct`: letter in the correct position
//! - `Present`: letter in the word, wrong position
//! - `Absent`: letter not in the word (or all its occurrences already credited)

use super::Word;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Evaluation outcome for one letter position
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellResult {
    Absent,
    Present,
    Correct,
}

impl CellResult {
    /// Emoji square used in shared results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for one evaluated guess, one [`CellResult`] per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    cells: Vec<CellResult>,
}

/// Error returned when parsing a feedback string fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFeedbackError {
    #[error("feedback must not be empty")]
    Empty,
    #[error("invalid feedback symbol '{0}' (use G, Y or -)")]
    InvalidSymbol(char),
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// Implements exact duplicate-letter rules: a letter that appears N times
    /// in the answer is credited (Correct or Present) at most N times.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present letters from what remains, consuming one
    ///    occurrence per mark
    ///
    /// Both words must have the same length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{CellResult, Feedback, Word};
    ///
    /// let guess = Word::new("ooooo").unwrap();
    /// let answer = Word::new("robot").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.to_string(), "⬜🟩⬜🟩⬜");
    /// assert_eq!(feedback.count_correct(), 2);
    /// assert_eq!(feedback.cells()[0], CellResult::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(
            guess.len(),
            answer.len(),
            "guess and answer must have the same length"
        );

        let mut cells = vec![CellResult::Absent; guess.len()];
        let mut answer_available = answer.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            if g == a {
                cells[i] = CellResult::Correct;
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present elsewhere, consuming from the remaining pool
        for (cell, letter) in cells.iter_mut().zip(guess.letters()) {
            if *cell == CellResult::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(letter)
                && *count > 0
            {
                *cell = CellResult::Present;
                *count -= 1;
            }
        }

        Self { cells }
    }

    /// The per-position results
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[CellResult] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(|&c| c == CellResult::Correct)
    }

    /// Count the number of correct cells
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(CellResult::Correct)
    }

    /// Count the number of present cells
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(CellResult::Present)
    }

    fn count(&self, kind: CellResult) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.cells.iter().map(|c| c.emoji()).collect()
    }

    /// Convert to a code string like "GY-GY"
    #[must_use]
    pub fn to_code(&self) -> String {
        self.cells.iter().map(|c| c.code()).collect()
    }
}

/// Evaluate `guess` against `secret`
///
/// Convenience wrapper around [`Feedback::calculate`] with the secret first.
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Feedback {
    Feedback::calculate(guess, secret)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl FromStr for Feedback {
    type Err = ParseFeedbackError;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseFeedbackError::Empty);
        }

        let cells = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Ok(CellResult::Correct),
                'Y' | 'y' | '🟨' => Ok(CellResult::Present),
                '-' | '_' | '⬜' => Ok(CellResult::Absent),
                other => Err(ParseFeedbackError::InvalidSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cells })
    }
}
