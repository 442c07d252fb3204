//! Plain line-mode game
//!
//! A no-TUI loop: read a whole word per line, run it through the engine and
//! print the colored feedback. The printed row is the reveal, so the game
//! continues immediately after each accepted guess.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::{Game, GameStatus, MAX_GUESSES, WordSource};
use crate::output::display;

/// Run the line-mode game loop
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_simple<S: WordSource>(mut game: Game<S>) -> Result<()> {
    display::print_simple_banner();

    loop {
        let turn = game.state().submitted_guesses().len() + 1;
        let Some(input) = read_input(&format!("Guess {turn}/{MAX_GUESSES}"))? else {
            println!();
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.restart();
                println!("\n🔄 New word drawn - good luck!\n");
                continue;
            }
            "" => continue,
            word => play_word(&mut game, word),
        }

        if game.state().status().is_over() {
            let state = game.state();
            if state.status() == GameStatus::Won {
                display::print_win(state.solution(), state.submitted_guesses());
            } else {
                display::print_loss(state.solution(), state.submitted_guesses());
            }

            let Some(again) = read_input("Play again? (yes/no)")? else {
                println!();
                return Ok(());
            };
            if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                game.restart();
                println!("\n🔄 New word drawn - good luck!\n");
            } else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Feed one line of input through the engine as a full guess
fn play_word<S: WordSource>(game: &mut Game<S>, word: &str) {
    for letter in word.chars() {
        game.append_letter(letter);
    }
    game.submit_guess();

    if let Some(error) = game.state().current_guess_error() {
        display::print_guess_error(error);
        // The next line of input is a whole new word, so drop the
        // rejected letters instead of keeping them for editing
        while !game.state().current_guess().is_empty() {
            game.remove_last_letter();
        }
        return;
    }

    let state = game.state();
    if let Some(guess) = state.submitted_guesses().last() {
        display::print_scored_row(state.submitted_guesses().len(), guess, state.solution());
    }

    // The printed row is the reveal
    game.continue_game();
}

/// Prompt for one trimmed line of input; `None` when stdin is closed
fn read_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;

    fn pinned_game() -> Game<WordList> {
        let words = WordList::from_words(["hello"], ["amiss", "ollie"]);
        Game::with_solution(words, "hello").unwrap()
    }

    #[test]
    fn play_word_submits_and_continues() {
        let mut game = pinned_game();
        play_word(&mut game, "amiss");
        assert_eq!(game.state().status(), GameStatus::Guessing);
        assert_eq!(game.state().submitted_guesses(), ["AMISS".to_string()]);
    }

    #[test]
    fn play_word_clears_rejected_input() {
        let mut game = pinned_game();
        play_word(&mut game, "zzzzz");
        assert_eq!(game.state().current_guess(), "");
        assert!(game.state().submitted_guesses().is_empty());
        // The error was consumed by the edit that cleared the letters
        assert_eq!(game.state().current_guess_error(), None);
    }

    #[test]
    fn play_word_wins_in_one_call() {
        let mut game = pinned_game();
        play_word(&mut game, "hello");
        assert_eq!(game.state().status(), GameStatus::Won);
    }

    #[test]
    fn play_word_ignores_junk_characters() {
        let mut game = pinned_game();
        play_word(&mut game, "am1ss!");
        // Only the four letters survive, so the guess is incomplete
        assert!(game.state().submitted_guesses().is_empty());
    }
}
