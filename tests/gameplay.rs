//! End-to-end game scenarios through the public API

use std::io::Cursor;
use wordle_game::commands::{check_guess, run_simple};
use wordle_game::core::{CellResult, Word, evaluate};
use wordle_game::game::{Game, GameConfig, GameError, MAX_ATTEMPTS, Outcome, Session};
use wordle_game::wordlists::WordSource;
use wordle_game::wordlists::loader::load_from_str;

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn win_on_first_guess_ignores_case() {
    let mut game = Game::new(word("CASA"), MAX_ATTEMPTS);
    let evaluation = game.submit_guess("casa").unwrap();

    assert!(evaluation.feedback.is_perfect());
    assert_eq!(evaluation.outcome, Outcome::Won);
    assert_eq!(evaluation.attempts_used, 1);
    assert_eq!(game.submit_guess("casa"), Err(GameError::GameOver));
}

#[test]
fn six_misses_lose_and_reveal() {
    let mut game = Game::new(word("casa"), MAX_ATTEMPTS);
    for guess in ["rato", "muro", "soma", "fato", "pulo", "amor"] {
        assert!(!game.is_over());
        game.submit_guess(guess).unwrap();
    }

    assert_eq!(game.outcome(), Outcome::Lost);
    assert_eq!(game.attempts_used(), 6);
    assert_eq!(game.revealed_secret(), Some(&word("casa")));
}

#[test]
fn repeated_letters_are_not_over_credited() {
    let feedback = evaluate(&word("robot"), &word("ooooo"));
    assert_eq!(
        feedback.cells(),
        &[
            CellResult::Absent,
            CellResult::Correct,
            CellResult::Absent,
            CellResult::Correct,
            CellResult::Absent,
        ]
    );
}

#[test]
fn keyboard_never_downgrades() {
    let mut game = Game::new(word("canto"), MAX_ATTEMPTS);
    game.submit_guess("carro").unwrap();
    game.submit_guess("tocar").unwrap();

    let keyboard = game.keyboard();
    assert_eq!(keyboard.get('c'), Some(CellResult::Correct));
    assert_eq!(keyboard.get('a'), Some(CellResult::Correct));
    assert_eq!(keyboard.get('o'), Some(CellResult::Correct));
    assert_eq!(keyboard.get('t'), Some(CellResult::Present));
    assert_eq!(keyboard.get('r'), Some(CellResult::Absent));
    assert_eq!(keyboard.get('z'), None);
}

#[test]
fn missing_word_list_falls_back_to_bundled_pool() {
    let missing = std::env::temp_dir().join("wordle_game_missing_list.txt");
    let source = WordSource::load_or_fallback(Some(missing.as_path()));
    assert!(!source.is_empty());
    assert_eq!(source.len(), WordSource::embedded().len());
}

#[test]
fn empty_bucket_falls_back_to_builtin_word() {
    let source = WordSource::from_words(load_from_str("casa"));
    let session = Session::new(source, GameConfig::new(8).unwrap(), Some(1));
    assert_eq!(session.game().word_length(), 8);
    assert_eq!(session.game().outcome(), Outcome::InProgress);
}

#[test]
fn check_command_matches_engine() {
    let result = check_guess("casa", "sapo").unwrap();
    assert_eq!(result.feedback.to_code(), "YG--");
    assert!(check_guess("casa", "canto").is_err());
}

#[test]
fn scripted_text_mode_game() {
    colored::control::set_override(false);
    let source = WordSource::from_words(load_from_str("casa"));
    let config = GameConfig::new(4).unwrap().with_dictionary(false);
    let mut session = Session::new(source, config, Some(9));

    let mut out = Vec::new();
    run_simple(&mut session, Cursor::new("sapo\ncasa\nnew\nrato\n"), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Solved in 2 guesses!"));
    assert!(text.contains("🟨🟩⬜⬜"));
    assert_eq!(session.stats().games_won, 1);
    assert_eq!(session.game().attempts_used(), 1);
}
