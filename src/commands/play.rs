//! Interactive TUI game
//!
//! Thin entry that hands the game to the TUI application.

use anyhow::Result;

use crate::core::Game;
use crate::interactive::{App, run_tui};
use crate::wordlists::WordList;

/// Run the game in the interactive TUI
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or restored.
pub fn run_play(game: Game<WordList>) -> Result<()> {
    run_tui(App::new(game))
}
