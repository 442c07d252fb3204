//! Keyboard letter aggregation
//!
//! Rolls every revealed guess into one status per letter so an on-screen
//! keyboard can color its keys. Unlike row feedback this is set-based: a
//! letter's best showing anywhere wins, with no occurrence counting.

use rustc_hash::FxHashMap;

/// Best observed status of a keyboard letter across revealed guesses
///
/// Variants are ordered by precedence, so merging two observations is
/// simply the larger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyStatus {
    /// Never part of a revealed guess
    Unused,
    /// Guessed, but the solution does not contain it
    UsedButWrong,
    /// Guessed and present in the solution, never at the right position
    Misplaced,
    /// Matched its position exactly at least once
    Correct,
}

/// Per-letter keyboard coloring derived from revealed guesses
#[derive(Debug, Clone, Default)]
pub struct KeyboardStatus {
    statuses: FxHashMap<char, KeyStatus>,
}

impl KeyboardStatus {
    /// Aggregate the statuses of every letter used in `guesses`
    ///
    /// Guesses and solution are expected uppercase, as the game engine
    /// stores them.
    #[must_use]
    pub fn from_guesses(guesses: &[String], solution: &str) -> Self {
        let mut statuses: FxHashMap<char, KeyStatus> = FxHashMap::default();

        for guess in guesses {
            for (position, letter) in guess.chars().enumerate() {
                let status = classify(letter, position, solution);
                statuses
                    .entry(letter)
                    .and_modify(|current| *current = (*current).max(status))
                    .or_insert(status);
            }
        }

        Self { statuses }
    }

    /// Status of a single letter; letters never guessed are `Unused`
    #[must_use]
    pub fn status(&self, letter: char) -> KeyStatus {
        self.statuses
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(KeyStatus::Unused)
    }
}

fn classify(letter: char, position: usize, solution: &str) -> KeyStatus {
    // Guesses and solution are uppercase ASCII, so byte indexing is exact
    let solution = solution.as_bytes();
    if solution.get(position) == Some(&(letter as u8)) {
        KeyStatus::Correct
    } else if solution.contains(&(letter as u8)) {
        KeyStatus::Misplaced
    } else {
        KeyStatus::UsedButWrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guesses(words: &[&str]) -> Vec<String> {
        words.iter().map(|&word| word.to_string()).collect()
    }

    #[test]
    fn empty_guesses_leave_every_letter_unused() {
        let keyboard = KeyboardStatus::from_guesses(&[], "HELLO");
        for letter in 'A'..='Z' {
            assert_eq!(keyboard.status(letter), KeyStatus::Unused);
        }
    }

    #[test]
    fn classifies_single_guess() {
        let keyboard = KeyboardStatus::from_guesses(&guesses(&["OLLIE"]), "HELLO");

        assert_eq!(keyboard.status('O'), KeyStatus::Misplaced);
        assert_eq!(keyboard.status('L'), KeyStatus::Correct);
        assert_eq!(keyboard.status('I'), KeyStatus::UsedButWrong);
        assert_eq!(keyboard.status('E'), KeyStatus::Misplaced);
        assert_eq!(keyboard.status('H'), KeyStatus::Unused);
    }

    #[test]
    fn classifies_first_and_last_positions() {
        let keyboard = KeyboardStatus::from_guesses(&guesses(&["HOTEL"]), "HELLO");

        assert_eq!(keyboard.status('H'), KeyStatus::Correct);
        assert_eq!(keyboard.status('T'), KeyStatus::UsedButWrong);
        // L sits at the guess's final position; present elsewhere in HELLO
        assert_eq!(keyboard.status('L'), KeyStatus::Misplaced);
    }

    #[test]
    fn correct_outranks_misplaced_across_guesses() {
        // E is misplaced in OLLIE but lands exactly in LEVER
        let keyboard = KeyboardStatus::from_guesses(&guesses(&["OLLIE", "LEVER"]), "HELLO");
        assert_eq!(keyboard.status('E'), KeyStatus::Correct);
    }

    #[test]
    fn later_worse_showing_does_not_demote() {
        let keyboard = KeyboardStatus::from_guesses(&guesses(&["LEVER", "OLLIE"]), "HELLO");
        assert_eq!(keyboard.status('E'), KeyStatus::Correct);
    }

    #[test]
    fn no_occurrence_counting() {
        // HELLO has one E, yet both E's of SPEED color the key as
        // misplaced; the keyboard tracks presence, not frequency
        let keyboard = KeyboardStatus::from_guesses(&guesses(&["SPEED"]), "HELLO");
        assert_eq!(keyboard.status('E'), KeyStatus::Misplaced);
        assert_eq!(keyboard.status('S'), KeyStatus::UsedButWrong);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let keyboard = KeyboardStatus::from_guesses(&guesses(&["OLLIE"]), "HELLO");
        assert_eq!(keyboard.status('l'), keyboard.status('L'));
    }

    #[test]
    fn precedence_ordering() {
        assert!(KeyStatus::Correct > KeyStatus::Misplaced);
        assert!(KeyStatus::Misplaced > KeyStatus::UsedButWrong);
        assert!(KeyStatus::UsedButWrong > KeyStatus::Unused);
    }
}
