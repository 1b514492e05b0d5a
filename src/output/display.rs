//! Display functions for game state and command results
//!
//! Game printers write to any [`Write`] so the line-based front end can be
//! driven from tests; command results go straight to stdout.

use super::formatters::{
    colorize_tile, create_progress_bar, format_keyboard, format_row, share_text,
};
use crate::commands::{CheckResult, SimulationResult};
use crate::game::{Game, GameError, Outcome, Session, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the game header for a freshly started game
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_new_game<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "New game: {} letters, {} attempts",
        game.word_length().to_string().bright_yellow().bold(),
        game.max_attempts()
    )?;
    writeln!(out, "{}", "─".repeat(40).cyan())
}

/// Print every board row, with blank tiles for unused attempts
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    for (i, attempt) in game.attempts().iter().enumerate() {
        writeln!(
            out,
            "  {}  {}/{}",
            format_row(attempt.guess(), attempt.feedback()),
            i + 1,
            game.max_attempts()
        )?;
    }

    let blank: String = (0..game.word_length())
        .map(|_| colorize_tile('·', None).to_string())
        .collect();
    for _ in game.attempts_used()..game.max_attempts() {
        writeln!(out, "  {blank}")?;
    }
    Ok(())
}

/// Print the on-screen keyboard
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_keyboard<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    for line in format_keyboard(game.keyboard()).lines() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

/// Print the end-of-game message, share text and run statistics
///
/// Does nothing while the game is in progress.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_outcome<W: Write>(out: &mut W, game: &Game, stats: &Statistics) -> io::Result<()> {
    match game.outcome() {
        Outcome::InProgress => return Ok(()),
        Outcome::Won => writeln!(
            out,
            "\n{}",
            format!("🎉 Solved in {} guesses!", game.attempts_used())
                .green()
                .bold()
        )?,
        Outcome::Lost => {
            let secret = game
                .revealed_secret()
                .map(|word| word.text().to_uppercase())
                .unwrap_or_default();
            writeln!(
                out,
                "\n{} {}",
                "❌ Out of attempts. The word was:".red().bold(),
                secret.bright_yellow().bold()
            )?;
        }
    }

    writeln!(out, "\n{}", share_text(game))?;
    print_statistics(out, stats)
}

/// Print the run statistics
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "\nPlayed: {}  Won: {} ({:.0}%)  Streak: {}  Best: {}",
        stats.games_played,
        stats.games_won,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )
}

/// Print why a guess was rejected
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_rejection<W: Write>(out: &mut W, err: &GameError) -> io::Result<()> {
    writeln!(out, "{} {err}", "⚠".yellow())
}

/// Print the line-mode help text
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "Commands:".bright_cyan().bold())?;
    writeln!(out, "  <word>      Submit a guess")?;
    writeln!(out, "  new         Start a new game")?;
    writeln!(out, "  length <n>  New game with 4 to 8 letters")?;
    writeln!(out, "  stats       Show statistics")?;
    writeln!(out, "  help        Show this help")?;
    writeln!(out, "  quit        Leave")
}

/// Print the session prompt for the next guess
///
/// # Errors
///
/// Returns any error from the writer.
pub fn print_prompt<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let game = session.game();
    if game.is_over() {
        write!(out, "\n{} ", "Game over. Type 'new' or 'quit' >".bright_black())?;
    } else {
        write!(
            out,
            "\nGuess {}/{} > ",
            game.attempts_used() + 1,
            game.max_attempts()
        )?;
    }
    out.flush()
}

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase().bold()
    );
    println!("  {}", format_row(&result.guess, &result.feedback));
    println!("  {}  {}", result.feedback.to_emoji(), result.feedback.to_code());
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Won:              {} ({})",
        result.wins,
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=result.max_attempts {
        let count = result.distribution.get(&attempts).copied().unwrap_or(0);
        let pct = if result.games == 0 {
            0.0
        } else {
            count as f64 / result.games as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    let lost = result.games - result.wins;
    let bar = create_progress_bar(lost as f64, result.games.max(1) as f64, 40);
    println!("   X: {} {lost:4}", bar.red());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn board_shows_attempts_and_blank_rows() {
        let mut game = Game::new(Word::new("casa").unwrap(), 6);
        game.submit_guess("sapo").unwrap();

        let text = render(|out| print_board(out, &game));
        assert!(text.contains(" S  A  P  O   1/6"));
        assert_eq!(text.matches(" ·  ·  ·  · ").count(), 5);
    }

    #[test]
    fn loss_reveals_the_secret() {
        let mut game = Game::new(Word::new("casa").unwrap(), 1);
        game.submit_guess("rato").unwrap();

        let text = render(|out| print_outcome(out, &game, &Statistics::default()));
        assert!(text.contains("The word was: CASA"));
        assert!(text.contains("X/1"));
    }

    #[test]
    fn win_message_counts_guesses() {
        let mut game = Game::new(Word::new("casa").unwrap(), 6);
        game.submit_guess("rato").unwrap();
        game.submit_guess("casa").unwrap();

        let text = render(|out| print_outcome(out, &game, &Statistics::default()));
        assert!(text.contains("Solved in 2 guesses!"));
        assert!(text.contains("2/6"));
    }

    #[test]
    fn in_progress_prints_nothing() {
        let game = Game::new(Word::new("casa").unwrap(), 6);
        let text = render(|out| print_outcome(out, &game, &Statistics::default()));
        assert!(text.is_empty());
    }

    #[test]
    fn rejection_uses_error_message() {
        let err = GameError::NotInDictionary("abcd".to_owned());
        let text = render(|out| print_rejection(out, &err));
        assert!(text.contains("'ABCD' is not in the word list"));
    }
}
