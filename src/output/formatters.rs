//! Formatting utilities for terminal output

use crate::core::{CellResult, Feedback, KeyboardState, Word};
use crate::game::{Game, Outcome};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout, including `ç`
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjklç", "zxcvbnm"];

/// Color one letter tile by its result
#[must_use]
pub fn colorize_tile(letter: char, result: Option<CellResult>) -> ColoredString {
    let tile = format!(" {} ", letter.to_uppercase());
    match result {
        Some(CellResult::Correct) => tile.black().on_green().bold(),
        Some(CellResult::Present) => tile.black().on_yellow().bold(),
        Some(CellResult::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Format an evaluated guess as a row of colored tiles
#[must_use]
pub fn format_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.cells())
        .map(|(&letter, &result)| colorize_tile(letter, Some(result)).to_string())
        .collect()
}

/// Format the keyboard with the best known result for each letter
#[must_use]
pub fn format_keyboard(keyboard: &KeyboardState) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| colorize_tile(letter, keyboard.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emoji summary of a game, e.g. "3/6" followed by one line per attempt
///
/// Lost games show `X` as the score.
#[must_use]
pub fn share_text(game: &Game) -> String {
    let score = match game.outcome() {
        Outcome::Won => game.attempts_used().to_string(),
        Outcome::Lost | Outcome::InProgress => "X".to_owned(),
    };

    let mut lines = vec![format!("{score}/{}", game.max_attempts())];
    lines.extend(
        game.attempts()
            .iter()
            .map(|attempt| attempt.feedback().to_emoji()),
    );
    lines.join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
