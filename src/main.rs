//! Wordle - CLI
//!
//! Terminal Wordle with a TUI mode, a plain line mode, and printable rules.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{run_play, run_rules, run_simple},
    core::Game,
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pin the solution word instead of drawing one at random
    #[arg(short, long, global = true)]
    solution: Option<String>,

    /// Path to a custom word list (one five-letter word per line)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain line mode (no TUI)
    Simple,

    /// Show how to play
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(new_game(cli.solution.as_deref(), cli.words.as_ref())?),
        Commands::Simple => run_simple(new_game(cli.solution.as_deref(), cli.words.as_ref())?),
        Commands::Rules => {
            run_rules();
            Ok(())
        }
    }
}

/// Build a game from the CLI flags
///
/// Uses the custom word list when `--words` is given, the embedded corpora
/// otherwise; pins the solution when `--solution` is given, draws a random
/// one otherwise.
fn new_game(solution: Option<&str>, words: Option<&PathBuf>) -> Result<Game<WordList>> {
    let words = match words {
        Some(path) => WordList::from_file(path)?,
        None => WordList::embedded(),
    };

    let game = match solution {
        Some(word) => Game::with_solution(words, word)?,
        None => Game::new(words)?,
    };
    Ok(game)
}
