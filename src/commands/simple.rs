//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each line is either a command or a guess.

use crate::game::Session;
use crate::output::{
    print_board, print_help, print_keyboard, print_new_game, print_outcome, print_prompt,
    print_rejection, print_statistics,
};
use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    New,
    Length(Option<usize>),
    Stats,
    Help,
    Guess(&'a str),
    Empty,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        match parts.next().map(str::to_lowercase).as_deref() {
            None => Self::Empty,
            Some("quit" | "exit" | "q") => Self::Quit,
            Some("new" | "n") => Self::New,
            Some("stats") => Self::Stats,
            Some("help" | "?") => Self::Help,
            Some("length") => Self::Length(parts.next().and_then(|n| n.parse().ok())),
            Some(_) => Self::Guess(line),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Reads lines from `input` until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║          Wordle - Simple Mode          ║")?;
    writeln!(out, "╚════════════════════════════════════════╝")?;
    print_help(&mut out)?;
    print_new_game(&mut out, session.game())?;

    let mut line = String::new();
    loop {
        print_prompt(&mut out, session)?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            writeln!(out)?;
            break;
        }

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => print_help(&mut out)?,
            Command::Stats => print_statistics(&mut out, session.stats())?,
            Command::New => {
                session.restart();
                print_new_game(&mut out, session.game())?;
            }
            Command::Length(None) => {
                writeln!(out, "{} usage: length <4-8>", "⚠".yellow())?;
            }
            Command::Length(Some(length)) => match session.new_game(length) {
                Ok(()) => print_new_game(&mut out, session.game())?,
                Err(err) => print_rejection(&mut out, &err)?,
            },
            Command::Guess(guess) => match session.submit_guess(guess) {
                Ok(evaluation) => {
                    debug!(
                        "Attempt {}: {}",
                        evaluation.attempts_used,
                        evaluation.feedback.to_code()
                    );
                    print_board(&mut out, session.game())?;
                    print_keyboard(&mut out, session.game())?;
                    print_outcome(&mut out, session.game(), session.stats())?;
                }
                Err(err) => print_rejection(&mut out, &err)?,
            },
        }
    }

    writeln!(out, "👋 Bye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Outcome};
    use crate::wordlists::WordSource;
    use crate::wordlists::loader::load_from_str;
    use std::io::Cursor;

    fn run(session: &mut Session, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_simple(session, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // "casa" is the only 4-letter word, so it is always the secret
    fn casa_session(validate_dictionary: bool) -> Session {
        let source = WordSource::from_words(load_from_str("casa"));
        let config = GameConfig::new(4)
            .unwrap()
            .with_dictionary(validate_dictionary);
        Session::new(source, config, Some(7))
    }

    #[test]
    fn commands_parse() {
        assert_eq!(Command::parse("  QUIT \n"), Command::Quit);
        assert_eq!(Command::parse("new"), Command::New);
        assert_eq!(Command::parse("length 6"), Command::Length(Some(6)));
        assert_eq!(Command::parse("length x"), Command::Length(None));
        assert_eq!(Command::parse("casa\n"), Command::Guess("casa"));
        assert_eq!(Command::parse("   "), Command::Empty);
    }

    #[test]
    fn plays_until_quit() {
        let mut session = casa_session(false);
        let text = run(&mut session, "rato\ncasa\nquit\nrato\n");

        assert!(text.contains(" R  A  T  O "));
        assert!(text.contains("Solved in 2 guesses!"));
        assert_eq!(session.game().outcome(), Outcome::Won);
        assert_eq!(session.stats().games_won, 1);
        assert!(text.ends_with("👋 Bye!\n"));
    }

    #[test]
    fn rejected_guess_reports_error() {
        let mut session = casa_session(true);
        let text = run(&mut session, "abcd\nca\n");

        assert!(text.contains("'ABCD' is not in the word list"));
        assert!(text.contains("must have 4 letters (got 2)"));
        assert_eq!(session.game().attempts_used(), 0);
    }

    #[test]
    fn length_command_starts_new_game() {
        let mut session = Session::new(WordSource::embedded(), GameConfig::default(), Some(1));
        let text = run(&mut session, "length 7\nlength 12\n");

        assert_eq!(session.word_length(), 7);
        assert!(text.contains("New game: 7 letters"));
        assert!(text.contains("between 4 and 8 letters (got 12)"));
    }

    #[test]
    fn end_of_input_stops() {
        let mut session = Session::new(WordSource::embedded(), GameConfig::default(), Some(1));
        let text = run(&mut session, "");
        assert!(text.contains("Simple Mode"));
        assert_eq!(session.stats().games_played, 0);
    }
}
