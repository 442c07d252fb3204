//! Core game engine
//!
//! The state machine, per-letter feedback, and keyboard aggregation, all
//! free of I/O. The engine's only external need is a [`WordSource`]
//! supplying solution words and guess validation, which keeps every rule
//! testable with fixed word sets.

mod feedback;
mod game;
mod keyboard;
mod source;

pub use feedback::{LetterScore, score_guess};
pub use game::{Game, GameError, GameState, GameStatus, GuessError, MAX_GUESSES};
pub use keyboard::{KeyStatus, KeyboardStatus};
pub use source::WordSource;
