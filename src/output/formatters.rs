//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::LetterScore;

/// Format a scored guess as a row of colored tiles
#[must_use]
pub fn tile_row(guess: &str, scores: &[LetterScore]) -> String {
    guess
        .chars()
        .zip(scores)
        .map(|(letter, &score)| tile(letter, score).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single letter tile, colored like the game board
fn tile(letter: char, score: LetterScore) -> ColoredString {
    let cell = format!(" {letter} ").white().bold();
    match score {
        LetterScore::Correct => cell.on_green(),
        LetterScore::Misplaced => cell.on_yellow(),
        LetterScore::Unused => cell.on_bright_black(),
    }
}

/// Format scores as emoji squares, as used in share grids
#[must_use]
pub fn emoji_row(scores: &[LetterScore]) -> String {
    scores.iter().map(|score| score.emoji()).collect()
}

/// Create a bar for the guess distribution, scaled to the largest bucket
#[must_use]
pub fn distribution_bar(count: usize, max: usize, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max == 0 {
        0
    } else {
        (((count as f64 / max as f64) * width as f64) as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_row_maps_every_score() {
        let scores = [
            LetterScore::Misplaced,
            LetterScore::Misplaced,
            LetterScore::Correct,
            LetterScore::Unused,
            LetterScore::Misplaced,
        ];
        assert_eq!(emoji_row(&scores), "🟨🟨🟩⬜🟨");
    }

    #[test]
    fn emoji_row_all_correct() {
        let scores = [LetterScore::Correct; 5];
        assert_eq!(emoji_row(&scores), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn distribution_bar_empty() {
        assert_eq!(distribution_bar(0, 4, 10), "░░░░░░░░░░");
    }

    #[test]
    fn distribution_bar_full() {
        assert_eq!(distribution_bar(4, 4, 10), "██████████");
    }

    #[test]
    fn distribution_bar_half() {
        assert_eq!(distribution_bar(2, 4, 10), "█████░░░░░");
    }

    #[test]
    fn distribution_bar_with_no_data() {
        assert_eq!(distribution_bar(0, 0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn tile_row_renders_one_tile_per_letter() {
        let scores = [
            LetterScore::Correct,
            LetterScore::Misplaced,
            LetterScore::Unused,
        ];
        let row = tile_row("CAT", &scores);
        assert!(row.contains('C'));
        assert!(row.contains('A'));
        assert!(row.contains('T'));
    }
}
