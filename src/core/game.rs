//! Game state machine
//!
//! A game moves through four phases: `Guessing` accepts letter edits and a
//! submission, an accepted submission enters `Revealing` until the caller
//! reports the reveal finished, and the outcome is either another round of
//! `Guessing` or a terminal `Won`/`Lost`. Terminal states only leave via
//! [`Game::restart`].
//!
//! Operations called in the wrong phase are silent no-ops, so presentation
//! code can forward raw input without its own guard rails.

use std::fmt;

use super::keyboard::KeyboardStatus;
use super::source::WordSource;

/// Number of guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Accepting letter edits and submissions
    Guessing,
    /// A guess was accepted; waiting for the caller to finish revealing it
    Revealing,
    /// The solution was guessed; terminal until restart
    Won,
    /// All guesses are spent; terminal until restart
    Lost,
}

impl GameStatus {
    /// Check whether the game has reached a terminal state
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a submission was rejected
///
/// These are soft errors: the game stays in `Guessing`, the typed guess is
/// kept for correction, and the next edit clears the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// The guess is shorter than the solution
    Incomplete,
    /// The guess is not in the word list
    UnknownWord,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "Not enough letters."),
            Self::UnknownWord => write!(f, "Word not in word list."),
        }
    }
}

impl std::error::Error for GuessError {}

/// Error type for game construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word source has no solution words to draw from
    EmptyWordList,
    /// A pinned solution is empty or contains non-letter characters
    InvalidSolution(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Random word selection failed."),
            Self::InvalidSolution(word) => {
                write!(f, "Solution must contain only letters, got {word:?}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Observable state of a single game
///
/// Fields are private; the operations on [`Game`] are the only way to
/// mutate a state, and the accessors expose it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    play_id: u64,
    solution: String,
    submitted_guesses: Vec<String>,
    current_guess: String,
    current_guess_error: Option<GuessError>,
    status: GameStatus,
}

impl GameState {
    fn new(play_id: u64, solution: String) -> Self {
        Self {
            play_id,
            solution,
            submitted_guesses: Vec::new(),
            current_guess: String::new(),
            current_guess_error: None,
            status: GameStatus::Guessing,
        }
    }

    /// Identifier of this game instance; increments on every restart
    #[inline]
    #[must_use]
    pub const fn play_id(&self) -> u64 {
        self.play_id
    }

    /// The hidden target word, uppercase
    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Length every accepted guess must have
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.solution.len()
    }

    /// Number of guesses allowed per game
    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        MAX_GUESSES
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn submitted_guesses(&self) -> &[String] {
        &self.submitted_guesses
    }

    /// Guesses still available
    #[inline]
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.submitted_guesses.len()
    }

    /// The guess being typed
    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    /// Why the last submission was rejected, if it was
    #[inline]
    #[must_use]
    pub const fn current_guess_error(&self) -> Option<GuessError> {
        self.current_guess_error
    }

    /// Current lifecycle phase
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted guesses whose reveal has finished
    ///
    /// While a row is still revealing it is excluded, so keyboard coloring
    /// does not leak that row's feedback ahead of the animation.
    #[must_use]
    pub fn revealed_guesses(&self) -> &[String] {
        if self.status == GameStatus::Revealing {
            let revealed = self.submitted_guesses.len().saturating_sub(1);
            &self.submitted_guesses[..revealed]
        } else {
            &self.submitted_guesses
        }
    }

    /// Aggregate keyboard coloring over the revealed guesses
    #[must_use]
    pub fn keyboard_status(&self) -> KeyboardStatus {
        KeyboardStatus::from_guesses(self.revealed_guesses(), &self.solution)
    }
}

/// Wordle game engine
///
/// Owns the game state and a [`WordSource`]. Presentation code calls the
/// operations in response to input events and renders the returned
/// [`GameState`] snapshot; the engine knows nothing about observers,
/// timers, or screens.
///
/// # Examples
/// ```
/// use wordle_game::core::{Game, GameStatus};
/// use wordle_game::wordlists::WordList;
///
/// let words = WordList::from_words(["hello"], ["ollie"]);
/// let mut game = Game::with_solution(words, "hello").unwrap();
///
/// for letter in "hello".chars() {
///     game.append_letter(letter);
/// }
/// game.submit_guess();
/// assert_eq!(game.state().status(), GameStatus::Revealing);
///
/// game.continue_game();
/// assert_eq!(game.state().status(), GameStatus::Won);
/// ```
#[derive(Debug)]
pub struct Game<S> {
    source: S,
    pinned_solution: Option<String>,
    state: GameState,
}

impl<S: WordSource> Game<S> {
    /// Start a game with a random solution drawn from the source
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordList`] if the source has no solution
    /// words at all.
    pub fn new(source: S) -> Result<Self, GameError> {
        let solution = source
            .random_solution()
            .ok_or(GameError::EmptyWordList)?
            .to_ascii_uppercase();
        Ok(Self {
            source,
            pinned_solution: None,
            state: GameState::new(0, solution),
        })
    }

    /// Start a game with a fixed solution
    ///
    /// The solution stays pinned across [`restart`](Self::restart), keeping
    /// games reproducible. It does not have to be a word the source accepts
    /// as a guess; submitted guesses are still validated against the source
    /// either way.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidSolution`] if the word is empty or
    /// contains anything besides ASCII letters.
    pub fn with_solution(source: S, solution: &str) -> Result<Self, GameError> {
        if solution.is_empty() || !solution.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidSolution(solution.to_string()));
        }
        let solution = solution.to_ascii_uppercase();
        Ok(Self {
            source,
            pinned_solution: Some(solution.clone()),
            state: GameState::new(0, solution),
        })
    }

    /// Read the current state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Append a letter to the guess being typed
    ///
    /// Only valid while `Guessing`; otherwise a no-op. The letter is
    /// uppercased and non-alphabetic input is ignored. A letter arriving at
    /// full word length is dropped, though a pending submission error still
    /// clears.
    pub fn append_letter(&mut self, letter: char) -> &GameState {
        if self.state.status == GameStatus::Guessing {
            let letter = letter.to_ascii_uppercase();
            if letter.is_ascii_uppercase() {
                self.state.current_guess_error = None;
                if self.state.current_guess.len() < self.state.word_length() {
                    self.state.current_guess.push(letter);
                }
            }
        }
        &self.state
    }

    /// Remove the last letter of the guess being typed
    ///
    /// Only valid while `Guessing`; otherwise a no-op. Clears a pending
    /// submission error even when there is nothing left to remove.
    pub fn remove_last_letter(&mut self) -> &GameState {
        if self.state.status == GameStatus::Guessing {
            self.state.current_guess_error = None;
            self.state.current_guess.pop();
        }
        &self.state
    }

    /// Submit the typed guess
    ///
    /// Only valid while `Guessing`; otherwise a no-op. A guess shorter than
    /// the word length is rejected before the word list is consulted; an
    /// unknown word is rejected after. A rejection sets
    /// [`current_guess_error`](GameState::current_guess_error) and leaves
    /// everything else untouched. An accepted guess moves the game to
    /// `Revealing` until [`continue_game`](Self::continue_game).
    pub fn submit_guess(&mut self) -> &GameState {
        if self.state.status != GameStatus::Guessing {
            return &self.state;
        }
        if self.state.current_guess.len() < self.state.word_length() {
            self.state.current_guess_error = Some(GuessError::Incomplete);
            return &self.state;
        }
        if !self.source.is_valid_word(&self.state.current_guess) {
            self.state.current_guess_error = Some(GuessError::UnknownWord);
            return &self.state;
        }

        let guess = std::mem::take(&mut self.state.current_guess);
        self.state.submitted_guesses.push(guess);
        self.state.current_guess_error = None;
        self.state.status = GameStatus::Revealing;
        &self.state
    }

    /// Resolve an accepted guess once its reveal has finished
    ///
    /// Only valid while `Revealing`; otherwise a no-op. The caller decides
    /// when the reveal is over; the engine only applies the outcome. A
    /// match wins and a wrong final guess loses; anything else returns to
    /// `Guessing`.
    pub fn continue_game(&mut self) -> &GameState {
        if self.state.status != GameStatus::Revealing {
            return &self.state;
        }

        let solved = self
            .state
            .submitted_guesses
            .last()
            .is_some_and(|guess| *guess == self.state.solution);

        self.state.status = if solved {
            GameStatus::Won
        } else if self.state.submitted_guesses.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Guessing
        };
        &self.state
    }

    /// Abandon the current game and start a fresh one
    ///
    /// Valid in any state and always succeeds. A pinned solution is kept;
    /// otherwise a new word is drawn. Should the source come up empty
    /// mid-session, the previous solution is reused rather than failing.
    pub fn restart(&mut self) -> &GameState {
        let solution = match &self.pinned_solution {
            Some(pinned) => pinned.clone(),
            None => self.source.random_solution().map_or_else(
                || self.state.solution.clone(),
                |word| word.to_ascii_uppercase(),
            ),
        };
        self.state = GameState::new(self.state.play_id.wrapping_add(1), solution);
        &self.state
    }
}
