//! Per-letter guess feedback
//!
//! Classifies each position of a submitted guess against the solution:
//! - `Correct` - right letter, right position
//! - `Misplaced` - letter occurs elsewhere in the solution
//! - `Unused` - letter does not occur (or all its occurrences are spoken for)
//!
//! Duplicate letters are frequency-conserving: a solution letter is consumed
//! by exact matches first, then by misplaced marks left to right, so a guess
//! never reports more occurrences of a letter than the solution holds.

/// Outcome for a single letter of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// Right letter in the right position
    Correct,
    /// Letter occurs in the solution at a different position
    Misplaced,
    /// Letter has no remaining occurrence in the solution
    Unused,
}

impl LetterScore {
    /// Check whether this letter landed exactly
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Emoji square for this score, as used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Unused => '⬜',
        }
    }
}

/// Score a guess against a solution, one [`LetterScore`] per position
///
/// Both words must be the same length; the engine only submits guesses that
/// already satisfy this. Letters outside `A-Z` never match anything.
///
/// # Algorithm
/// 1. First pass: mark exact matches and pool the solution's unmatched letters
/// 2. Second pass: mark misplaced letters left to right while the pool lasts
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterScore, score_guess};
///
/// let scores = score_guess("OLLIE", "HELLO");
/// assert_eq!(
///     scores,
///     [
///         LetterScore::Misplaced,
///         LetterScore::Misplaced,
///         LetterScore::Correct,
///         LetterScore::Unused,
///         LetterScore::Misplaced,
///     ]
/// );
/// ```
#[must_use]
pub fn score_guess(guess: &str, solution: &str) -> Vec<LetterScore> {
    debug_assert_eq!(
        guess.len(),
        solution.len(),
        "guess and solution must be the same length"
    );

    let guess = guess.as_bytes();
    let solution = solution.as_bytes();
    let mut scores = vec![LetterScore::Unused; guess.len()];

    // Solution letters not consumed by an exact match
    let mut available = [0u8; 26];

    for (i, (&guessed, &target)) in guess.iter().zip(solution).enumerate() {
        if guessed == target {
            scores[i] = LetterScore::Correct;
        } else if target.is_ascii_uppercase() {
            available[usize::from(target - b'A')] += 1;
        }
    }

    for (i, &guessed) in guess.iter().enumerate() {
        if scores[i] == LetterScore::Correct || !guessed.is_ascii_uppercase() {
            continue;
        }
        let count = &mut available[usize::from(guessed - b'A')];
        if *count > 0 {
            *count -= 1;
            scores[i] = LetterScore::Misplaced;
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_unused_when_no_letters_shared() {
        let scores = score_guess("AMISS", "HELLO");
        assert!(scores.iter().all(|&score| score == LetterScore::Unused));
    }

    #[test]
    fn all_correct_on_exact_match() {
        let scores = score_guess("HELLO", "HELLO");
        assert!(scores.iter().all(|&score| score.is_correct()));
    }

    #[test]
    fn mixed_feedback_with_duplicates() {
        // O and first L are elsewhere in HELLO, second L matches exactly,
        // I is absent, E is elsewhere
        let scores = score_guess("OLLIE", "HELLO");
        assert_eq!(
            scores,
            [
                LetterScore::Misplaced,
                LetterScore::Misplaced,
                LetterScore::Correct,
                LetterScore::Unused,
                LetterScore::Misplaced,
            ]
        );
    }

    #[test]
    fn duplicate_guess_letters_drain_the_pool() {
        // BREAD holds one E; the first E of EAGLE claims it, the second
        // must come up empty
        let scores = score_guess("EAGLE", "BREAD");
        assert_eq!(
            scores,
            [
                LetterScore::Misplaced,
                LetterScore::Misplaced,
                LetterScore::Unused,
                LetterScore::Unused,
                LetterScore::Unused,
            ]
        );
    }

    #[test]
    fn exact_match_consumes_before_misplaced() {
        // The final E of GEESE matches exactly and consumes CRANE's only E,
        // so the earlier E's score as absent
        let scores = score_guess("GEESE", "CRANE");
        assert_eq!(
            scores,
            [
                LetterScore::Unused,
                LetterScore::Unused,
                LetterScore::Unused,
                LetterScore::Unused,
                LetterScore::Correct,
            ]
        );
    }

    #[test]
    fn repeated_letters_in_solution_allow_repeats_in_guess() {
        // ERASE holds two E's, so both E's of SPEED can be misplaced
        let scores = score_guess("SPEED", "ERASE");
        assert_eq!(
            scores,
            [
                LetterScore::Misplaced,
                LetterScore::Unused,
                LetterScore::Misplaced,
                LetterScore::Misplaced,
                LetterScore::Unused,
            ]
        );
    }

    #[test]
    fn emoji_mapping() {
        assert_eq!(LetterScore::Correct.emoji(), '🟩');
        assert_eq!(LetterScore::Misplaced.emoji(), '🟨');
        assert_eq!(LetterScore::Unused.emoji(), '⬜');
    }

    #[test]
    fn scoring_word_against_itself_is_all_correct() {
        for word in ["CRANE", "SPEED", "LLAMA", "AAAAA"] {
            let scores = score_guess(word, word);
            assert!(scores.iter().all(|&score| score.is_correct()));
        }
    }
}
