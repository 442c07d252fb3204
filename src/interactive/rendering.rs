//! TUI rendering with ratatui
//!
//! Draws the letter grid, the colored keyboard, the message strip, and the
//! session panel from the [`App`] state. Nothing here mutates the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app::App;
use crate::core::{GameStatus, KeyStatus, KeyboardStatus, LetterScore, MAX_GUESSES, score_guess};
use crate::output::distribution_bar;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board and session panel
            Constraint::Length(3), // Message strip
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_session(f, app, main_chunks[1]);

    render_message(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = (0..MAX_GUESSES).map(|row| board_row(app, row)).collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// Build one row of the letter grid
///
/// Submitted rows are colored by their score; the row still revealing only
/// shows colors up to the reveal point. The in-progress row shows the typed
/// letters, later rows are blank.
fn board_row(app: &App, row: usize) -> Line<'static> {
    let state = app.game.state();
    let submitted = state.submitted_guesses();
    let word_length = state.word_length();

    let mut spans = Vec::with_capacity(word_length * 2);

    if let Some(guess) = submitted.get(row) {
        let revealed = if state.status() == GameStatus::Revealing && row + 1 == submitted.len() {
            app.revealed_letters()
        } else {
            word_length
        };

        let scores = score_guess(guess, state.solution());
        for (i, (letter, &score)) in guess.chars().zip(&scores).enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if i < revealed {
                score_style(score)
            } else {
                pending_style()
            };
            spans.push(Span::styled(format!(" {letter} "), style));
        }
    } else if row == submitted.len() {
        let typed: Vec<char> = state.current_guess().chars().collect();
        for i in 0..word_length {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(match typed.get(i) {
                Some(&letter) => Span::styled(format!(" {letter} "), pending_style()),
                None => empty_cell(),
            });
        }
    } else {
        for i in 0..word_length {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(empty_cell());
        }
    }

    Line::from(spans)
}

fn render_session(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!("Games played:  {}", stats.total_games)),
        Line::from(format!("Games won:     {}", stats.games_won)),
        Line::from(format!("Win rate:      {:.0}%", stats.win_rate())),
        Line::from(""),
        Line::from("Guess distribution:"),
    ];

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for count in 1..=MAX_GUESSES {
        let wins = stats.guess_distribution[count];
        lines.push(Line::from(vec![
            Span::raw(format!(" {count}: ")),
            Span::styled(
                distribution_bar(wins, max, 12),
                Style::default().fg(Color::Green),
            ),
            Span::raw(format!(" {wins}")),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();

    let (text, color) = if let Some(toast) = &app.toast {
        (toast.text.clone(), Color::Yellow)
    } else {
        match state.status() {
            GameStatus::Won => (
                "WINNER! Press Enter for the next word.".to_string(),
                Color::Green,
            ),
            GameStatus::Lost => (
                format!(
                    "SOLUTION: {} - press Enter for the next word.",
                    state.solution()
                ),
                Color::Red,
            ),
            GameStatus::Guessing | GameStatus::Revealing => (
                "Type a five-letter word and press Enter.".to_string(),
                Color::DarkGray,
            ),
        }
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(message, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.state().keyboard_status();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| keyboard_row(row, &keyboard))
        .collect();

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn keyboard_row(letters: &str, keyboard: &KeyboardStatus) -> Line<'static> {
    let mut spans = Vec::with_capacity(letters.len() * 2);
    for (i, letter) in letters.chars().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {letter} "),
            key_style(keyboard.status(letter)),
        ));
    }
    Line::from(spans)
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let state = app.game.state();

    let game_number =
        Paragraph::new(format!("Game #{}", state.play_id() + 1)).alignment(Alignment::Center);
    f.render_widget(game_number, chunks[0]);

    let guesses = Paragraph::new(format!(
        "Guess {}/{}",
        state.submitted_guesses().len(),
        state.max_guesses()
    ))
    .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let help = Paragraph::new("Enter: Submit | Backspace: Delete | Ctrl-N: New Word | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn score_style(score: LetterScore) -> Style {
    let bg = match score {
        LetterScore::Correct => Color::Green,
        LetterScore::Misplaced => Color::Yellow,
        LetterScore::Unused => Color::DarkGray,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Correct => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        KeyStatus::Misplaced => Style::default()
            .fg(Color::White)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        KeyStatus::UsedButWrong => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        KeyStatus::Unused => Style::default().fg(Color::White),
    }
}

fn pending_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn empty_cell() -> Span<'static> {
    Span::styled(" · ", Style::default().fg(Color::DarkGray))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;
    use crate::interactive::app::REVEAL_STEP_MS;
    use crate::wordlists::WordList;

    fn new_app(solution: &str) -> App {
        let words = WordList::from_words(["hello"], ["amiss", "ollie"]);
        App::new(Game::with_solution(words, solution).unwrap())
    }

    fn submit(app: &mut App, word: &str) {
        for letter in word.chars() {
            app.game.append_letter(letter);
        }
        app.game.submit_guess();
    }

    fn row_styles(line: &Line) -> Vec<Style> {
        line.spans
            .iter()
            .filter(|span| span.content != " ")
            .map(|span| span.style)
            .collect()
    }

    #[test]
    fn revealing_row_colors_only_disclosed_letters() {
        let mut app = new_app("hello");
        submit(&mut app, "ollie");
        app.tick(REVEAL_STEP_MS * 2);

        let line = board_row(&app, 0);
        let styles = row_styles(&line);
        assert_eq!(styles.len(), 5);
        // O misplaced, first L misplaced: disclosed
        assert_eq!(styles[0], score_style(LetterScore::Misplaced));
        assert_eq!(styles[1], score_style(LetterScore::Misplaced));
        // The rest still pending
        assert_eq!(styles[2], pending_style());
        assert_eq!(styles[3], pending_style());
        assert_eq!(styles[4], pending_style());
    }

    #[test]
    fn settled_row_is_fully_colored() {
        let mut app = new_app("hello");
        submit(&mut app, "ollie");
        app.game.continue_game();

        let styles = row_styles(&board_row(&app, 0));
        assert_eq!(styles[2], score_style(LetterScore::Correct));
        assert_eq!(styles[3], score_style(LetterScore::Unused));
    }

    #[test]
    fn current_row_shows_typed_letters() {
        let mut app = new_app("hello");
        app.game.append_letter('h');
        app.game.append_letter('e');

        let line = board_row(&app, 0);
        let cells: Vec<&str> = line
            .spans
            .iter()
            .filter(|span| span.content != " ")
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(cells, [" H ", " E ", " · ", " · ", " · "]);
    }

    #[test]
    fn future_rows_are_blank() {
        let app = new_app("hello");
        let line = board_row(&app, 3);
        assert!(
            line.spans
                .iter()
                .filter(|span| span.content != " ")
                .all(|span| span.content == " · ")
        );
    }

    #[test]
    fn keyboard_row_colors_revealed_letters() {
        let mut app = new_app("hello");
        submit(&mut app, "ollie");
        app.game.continue_game();

        let keyboard = app.game.state().keyboard_status();
        let line = keyboard_row("QLI", &keyboard);
        let styles = row_styles(&line);
        assert_eq!(styles[0], key_style(KeyStatus::Unused));
        assert_eq!(styles[1], key_style(KeyStatus::Correct));
        assert_eq!(styles[2], key_style(KeyStatus::UsedButWrong));
    }
}
