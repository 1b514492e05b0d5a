//! Check command
//!
//! Evaluates one guess against one secret.

use crate::core::{Feedback, Word, evaluate};
use anyhow::{Context, Result, bail};

/// Result of checking a guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
///
/// # Examples
/// ```
/// use wordle_game::commands::check_guess;
///
/// let result = check_guess("ROBOT", "ooooo").unwrap();
/// assert_eq!(result.feedback.to_code(), "-G-G-");
/// ```
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult> {
    let secret = Word::new(secret.trim()).context("Invalid secret word")?;
    let guess = Word::new(guess.trim()).context("Invalid guess")?;

    if secret.len() != guess.len() {
        bail!(
            "Guess has {} letters but the secret has {}",
            guess.len(),
            secret.len()
        );
    }

    let feedback = evaluate(&secret, &guess);
    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_feedback() {
        let result = check_guess("floor", "robot").unwrap();
        assert_eq!(result.feedback.to_code(), "YY-G-");
        assert_eq!(result.secret.text(), "floor");
        assert_eq!(result.guess.text(), "robot");
    }

    #[test]
    fn check_rejects_length_mismatch() {
        let err = check_guess("casa", "canto").unwrap_err();
        assert!(err.to_string().contains("5 letters"));
    }

    #[test]
    fn check_handles_long_repeated_words() {
        let long = "a".repeat(300);
        let result = check_guess(&long, &long).unwrap();
        assert!(result.feedback.is_perfect());
        assert_eq!(result.feedback.count_correct(), 300);
    }

    #[test]
    fn check_rejects_invalid_words() {
        assert!(check_guess("ca5a", "casa").is_err());
        assert!(check_guess("casa", "").is_err());
    }
}
