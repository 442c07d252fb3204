//! Wordle Game
//!
//! A terminal Wordle: guess a hidden five-letter word in six tries, with
//! per-letter feedback after every guess. The game engine is a pure state
//! machine with no I/O; the TUI and line-mode front ends drive it through
//! five operations and render the state snapshots it returns.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Game, GameStatus};
//! use wordle_game::wordlists::WordList;
//!
//! let mut game = Game::with_solution(WordList::embedded(), "hello").unwrap();
//!
//! for letter in "hello".chars() {
//!     game.append_letter(letter);
//! }
//! game.submit_guess();
//! assert_eq!(game.state().status(), GameStatus::Revealing);
//!
//! // The caller signals when the reveal is done:
//! game.continue_game();
//! assert_eq!(game.state().status(), GameStatus::Won);
//! ```

// Core game engine
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
