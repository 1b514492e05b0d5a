//! TUI application state and logic

use crate::game::{GameError, MAX_WORD_LENGTH, MIN_WORD_LENGTH, Outcome, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
        };
        app.announce_game();
        app
    }

    fn announce_game(&mut self) {
        let game = self.session.game();
        let text = format!(
            "Guess the {}-letter word in {} attempts",
            game.word_length(),
            game.max_attempts()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            _ if self.session.game().is_over() => match key.code {
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Left => self.change_length(-1),
            KeyCode::Right => self.change_length(1),
            KeyCode::Char(c) => {
                self.session.insert_letter(c);
            }
            KeyCode::Backspace => {
                self.session.delete_last_letter();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn new_game(&mut self) {
        self.session.restart();
        self.messages.clear();
        self.announce_game();
    }

    fn change_length(&mut self, delta: isize) {
        let Some(length) = self.session.word_length().checked_add_signed(delta) else {
            return;
        };
        match self.session.new_game(length) {
            Ok(()) => {
                self.messages.clear();
                self.announce_game();
            }
            Err(GameError::UnsupportedLength { .. }) => {
                let text = format!("Words have {MIN_WORD_LENGTH} to {MAX_WORD_LENGTH} letters");
                self.add_message(&text, MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn submit(&mut self) {
        match self.session.submit() {
            Ok(evaluation) => match evaluation.outcome {
                Outcome::Won => {
                    let celebration = match evaluation.attempts_used {
                        1 => "🎯 HOLE IN ONE! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Got it! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                Outcome::Lost => {
                    let secret = self
                        .session
                        .game()
                        .revealed_secret()
                        .map(|word| word.text().to_uppercase())
                        .unwrap_or_default();
                    self.add_message(
                        &format!("Out of attempts! The word was {secret}"),
                        MessageStyle::Error,
                    );
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                Outcome::InProgress => {
                    debug!("Feedback {}", evaluation.feedback.to_code());
                }
            },
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::WordSource;
    use crate::wordlists::loader::load_from_str;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    // "casa" is the only 4-letter word, so it is always the secret
    fn casa_app() -> App {
        let source = WordSource::from_words(load_from_str("casa"));
        let config = GameConfig::new(4).unwrap().with_dictionary(false);
        App::new(Session::new(source, config, Some(1)))
    }

    #[test]
    fn typing_and_submitting() {
        let mut app = casa_app();
        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.input(), "r");

        for c in "ato".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.game().attempts_used(), 1);
        assert_eq!(app.session.input(), "");
    }

    #[test]
    fn short_guess_shows_error_and_keeps_row() {
        let mut app = casa_app();
        type_word(&mut app, "ca");
        assert_eq!(app.session.input(), "ca");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("4 letters"));
    }

    #[test]
    fn win_then_new_game() {
        let mut app = casa_app();
        type_word(&mut app, "casa");
        assert_eq!(app.session.game().outcome(), Outcome::Won);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );

        // Letters are ignored once the game is over
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.session.input(), "");

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.game().attempts_used(), 0);
        assert_eq!(app.session.stats().games_won, 1);
    }

    #[test]
    fn loss_reveals_secret() {
        let mut app = casa_app();
        for _ in 0..6 {
            type_word(&mut app, "rato");
        }
        assert_eq!(app.session.game().outcome(), Outcome::Lost);
        assert!(app.messages.iter().any(|m| m.text.contains("CASA")));
    }

    #[test]
    fn arrows_change_length_within_bounds() {
        let session = Session::new(WordSource::embedded(), GameConfig::default(), Some(2));
        let mut app = App::new(session);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.word_length(), 6);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.word_length(), 4);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.word_length(), 4);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn quit_keys() {
        let mut app = casa_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.session.input(), "q");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = casa_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = casa_app();
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "5");
    }
}
