//! Printing for the line-mode game and the rules text

use colored::Colorize;

use super::formatters::{emoji_row, tile_row};
use crate::core::{GuessError, LetterScore, MAX_GUESSES, score_guess};

/// Print the line-mode welcome banner and input help
pub fn print_simple_banner() {
    println!("\n╔{}╗", "═".repeat(62));
    println!("║{:^62}║", "W O R D L E");
    println!("╚{}╝\n", "═".repeat(62));

    println!("Guess the hidden five-letter word in {MAX_GUESSES} tries.");
    println!("After each guess the tiles show how close you were:\n");
    println!(
        "  {} right letter, right spot",
        tile_row("W", &[LetterScore::Correct])
    );
    println!(
        "  {} right letter, wrong spot",
        tile_row("I", &[LetterScore::Misplaced])
    );
    println!(
        "  {} letter not in the word\n",
        tile_row("U", &[LetterScore::Unused])
    );
    println!("Commands: 'quit' to exit, 'new' for a fresh word\n");
}

/// Print why a submission was rejected
pub fn print_guess_error(error: GuessError) {
    println!("  {}\n", error.to_string().yellow());
}

/// Print an accepted guess as colored tiles with its guess number
pub fn print_scored_row(turn: usize, guess: &str, solution: &str) {
    let scores = score_guess(guess, solution);
    println!(
        "  {}  {}\n",
        format!("{turn}/{MAX_GUESSES}").bright_black(),
        tile_row(guess, &scores)
    );
}

/// Print the win banner with the guess history
pub fn print_win(solution: &str, guesses: &[String]) {
    let turns = guesses.len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "            🎉  W I N N E R !  🎉            "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let (label, detail) = match turns {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("😅 Phew!", "That was a close one!"),
    };

    println!("\n  {}", label.bright_yellow().bold());
    println!("  {}", detail.bright_white());
    println!(
        "\n  Solved in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    print_history(guesses, solution);

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Print the loss banner, revealing the solution, with the guess history
pub fn print_loss(solution: &str, guesses: &[String]) {
    println!("\n{}", "═".repeat(70).bright_red());
    println!(
        "{}",
        "            OUT OF GUESSES            ".bright_red().bold()
    );
    println!("{}", "═".repeat(70).bright_red());

    println!("\n  SOLUTION");
    println!("  {}", solution.bright_white().bold());

    print_history(guesses, solution);

    println!("\n{}", "═".repeat(70).bright_red());
    println!();
}

/// Print each submitted guess with its emoji feedback
fn print_history(guesses: &[String], solution: &str) {
    println!("\n  Guess history:");
    for (i, guess) in guesses.iter().enumerate() {
        let scores = score_guess(guess, solution);
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.bright_white().bold(),
            emoji_row(&scores)
        );
    }
}

/// Print the how-to-play text with example rows
pub fn print_rules() {
    println!("\n{}", "HOW TO PLAY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nGuess the WORDLE in six tries.");
    println!("Each guess must be a valid five-letter word. Hit the enter");
    println!("button to submit.");
    println!("\nAfter each guess, the color of the tiles will change to show");
    println!("how close your guess was to the word.");

    println!("\n{}", "Examples".bold());

    let correct_only = [
        LetterScore::Correct,
        LetterScore::Unused,
        LetterScore::Unused,
        LetterScore::Unused,
        LetterScore::Unused,
    ];
    println!("\n  {}", tile_row("WEARY", &correct_only));
    println!("  The letter W is in the word and in the correct spot.");

    let misplaced_only = [
        LetterScore::Unused,
        LetterScore::Misplaced,
        LetterScore::Unused,
        LetterScore::Unused,
        LetterScore::Unused,
    ];
    println!("\n  {}", tile_row("PILLS", &misplaced_only));
    println!("  The letter I is in the word but in the wrong spot.");

    println!("\n  {}", tile_row("VAGUE", &[LetterScore::Unused; 5]));
    println!("  No letters in the guess are in the word.");

    println!("\n{}", "═".repeat(60).cyan());
    println!();
}
