//! TUI application state and logic
//!
//! Owns the game engine plus everything presentation-only: the reveal timer
//! that gates [`Game::continue_game`], the toast for rejected guesses, and
//! session statistics that survive restarts. Time advances through
//! [`App::tick`], driven by the event loop; the engine itself never sees a
//! clock.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::core::{Game, GameStatus};
use crate::wordlists::WordList;

/// Tick interval of the event loop
pub const TICK_MS: u64 = 50;

/// Time between two letters of a submitted row flipping over
pub const REVEAL_STEP_MS: u64 = 250;

/// Pause after the last letter so the full row is visible before the
/// game moves on
pub const REVEAL_HOLD_MS: u64 = 400;

/// How long a rejected-guess toast stays up
pub const TOAST_MS: u64 = 2000;

/// Transient message shown when a submission is rejected
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub remaining_ms: u64,
}

/// Session statistics, kept across restarts
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by guess count; slot 0 is never used
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    /// Record a finished game won in `guesses` guesses
    pub fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(guesses) {
            *slot += 1;
        }
    }

    /// Record a finished game that ran out of guesses
    pub fn record_loss(&mut self) {
        self.total_games += 1;
    }

    /// Share of finished games won, as a percentage
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Application state
///
/// All engine mutation goes through [`handle_key`](App::handle_key) and
/// [`tick`](App::tick); rendering reads the struct and the engine's state
/// snapshot.
pub struct App {
    pub game: Game<WordList>,
    pub stats: Statistics,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    reveal_elapsed_ms: u64,
}

impl App {
    #[must_use]
    pub fn new(game: Game<WordList>) -> Self {
        Self {
            game,
            stats: Statistics::default(),
            toast: None,
            should_quit: false,
            reveal_elapsed_ms: 0,
        }
    }

    /// Letters of the revealing row whose color is already disclosed
    ///
    /// Counts up from zero while the game is `Revealing`; rendering colors
    /// exactly this many cells of the last submitted row and leaves the rest
    /// uncolored.
    #[must_use]
    pub fn revealed_letters(&self) -> usize {
        let word_length = self.game.state().word_length();
        ((self.reveal_elapsed_ms / REVEAL_STEP_MS) as usize).min(word_length)
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(letter) => {
                self.toast = None;
                self.game.append_letter(letter);
            }
            KeyCode::Backspace => {
                self.toast = None;
                self.game.remove_last_letter();
            }
            KeyCode::Enter => {
                if self.game.state().status().is_over() {
                    self.new_game();
                } else {
                    self.submit();
                }
            }
            _ => {}
        }
    }

    /// Advance the toast and reveal timers by `elapsed_ms`
    ///
    /// Once the last letter of the revealing row has shown and the hold has
    /// passed, tells the engine the reveal finished and records the outcome
    /// if the game ended.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if let Some(toast) = &mut self.toast {
            toast.remaining_ms = toast.remaining_ms.saturating_sub(elapsed_ms);
            if toast.remaining_ms == 0 {
                self.toast = None;
            }
        }

        if self.game.state().status() == GameStatus::Revealing {
            self.reveal_elapsed_ms += elapsed_ms;
            let word_length = self.game.state().word_length() as u64;
            if self.reveal_elapsed_ms >= REVEAL_STEP_MS * word_length + REVEAL_HOLD_MS {
                self.finish_reveal();
            }
        }
    }

    /// Abandon the current word and start a fresh one, keeping statistics
    pub fn new_game(&mut self) {
        self.game.restart();
        self.reveal_elapsed_ms = 0;
        self.toast = None;
    }

    fn submit(&mut self) {
        let state = self.game.submit_guess();
        if let Some(error) = state.current_guess_error() {
            self.toast = Some(Toast {
                text: error.to_string(),
                remaining_ms: TOAST_MS,
            });
        } else if state.status() == GameStatus::Revealing {
            self.reveal_elapsed_ms = 0;
        }
    }

    fn finish_reveal(&mut self) {
        self.reveal_elapsed_ms = 0;
        let state = self.game.continue_game();
        match state.status() {
            GameStatus::Won => self.stats.record_win(state.submitted_guesses().len()),
            GameStatus::Lost => self.stats.record_loss(),
            GameStatus::Guessing | GameStatus::Revealing => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Input with timeout until the next tick
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            app.tick(last_tick.elapsed().as_millis() as u64);
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
