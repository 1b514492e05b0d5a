//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and status bar for the game screen.

use super::app::{App, MessageStyle};
use crate::core::CellResult;
use crate::game::{Cell, Outcome};
use crate::output::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(result: Option<CellResult>) -> Style {
    let style = match result {
        Some(CellResult::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(CellResult::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(CellResult::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    };
    style.add_modifier(Modifier::BOLD)
}

fn board_cell(cell: Cell) -> Span<'static> {
    match cell.letter {
        Some(letter) => Span::styled(
            format!(" {} ", letter.to_uppercase()),
            tile_style(cell.result),
        ),
        None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];
    for row in app.session.board() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for cell in row {
            spans.push(board_cell(cell));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match app.session.game().outcome() {
        Outcome::InProgress => " Board ".to_string(),
        Outcome::Won => " Board - Solved! ".to_string(),
        Outcome::Lost => " Board - Game Over ".to_string(),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.game().keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let result = keyboard.get(letter);
                    let style = match result {
                        Some(_) => tile_style(result),
                        None => Style::default().fg(Color::Gray),
                    };
                    Span::styled(format!(" {} ", letter.to_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let used = game.attempts_used();
    let max = game.max_attempts();
    let progress_pct = (used * 100 / max.max(1)).min(100) as u16;

    let color = match game.outcome() {
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
        Outcome::InProgress => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(progress_pct)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(35),
            Constraint::Percentage(50),
        ])
        .split(area);

    let length_text = format!("Letters: {}", app.session.word_length());
    let length = Paragraph::new(length_text).alignment(Alignment::Center);
    f.render_widget(length, chunks[0]);

    let stats = app.session.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.game().is_over() {
        "n/Enter: New Game | q: Quit"
    } else {
        "Enter: Submit | ←/→: Length | ^N: New | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Session};
    use crate::wordlists::WordSource;
    use crate::wordlists::loader::load_from_str;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn casa_app() -> App {
        let source = WordSource::from_words(load_from_str("casa"));
        let config = GameConfig::new(4).unwrap().with_dictionary(false);
        App::new(Session::new(source, config, Some(1)))
    }

    #[test]
    fn draws_board_and_keyboard() {
        let mut app = casa_app();
        app.session.submit_guess("rato").unwrap();

        let text = screen(&app);
        assert!(text.contains("WORDLE"));
        assert!(text.contains(" R   A   T   O "));
        assert!(text.contains(" Keyboard "));
        assert!(text.contains("1/6 used"));
        assert!(text.contains("Letters: 4"));
    }

    #[test]
    fn game_over_changes_help() {
        let mut app = casa_app();
        app.session.submit_guess("casa").unwrap();

        let text = screen(&app);
        assert!(text.contains("Solved!"));
        assert!(text.contains("n/Enter: New Game"));
    }

    #[test]
    fn tile_colors() {
        assert_eq!(tile_style(Some(CellResult::Correct)).bg, Some(Color::Green));
        assert_eq!(tile_style(Some(CellResult::Present)).bg, Some(Color::Yellow));
        assert_eq!(tile_style(Some(CellResult::Absent)).bg, Some(Color::DarkGray));
        assert_eq!(tile_style(None).bg, None);
    }
}
