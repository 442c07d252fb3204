//! Word lists backing the game
//!
//! Embedded corpora compiled into the binary: common words eligible as
//! solutions, and uncommon words accepted as guesses only. [`WordList`]
//! implements the engine's [`WordSource`] on top of them and can also wrap
//! explicit word sets or a custom list loaded from a file.

mod embedded;
pub mod loader;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

use crate::core::WordSource;

pub use embedded::{COMMON_WORDS, COMMON_WORDS_COUNT, UNCOMMON_WORDS, UNCOMMON_WORDS_COUNT};

/// Error type for loading a custom word list
#[derive(Debug)]
pub enum WordListError {
    /// The file could not be read
    Io(PathBuf, io::Error),
    /// The file held no usable five-letter words
    NoWords(PathBuf),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, error) => {
                write!(f, "failed to read word list {}: {error}", path.display())
            }
            Self::NoWords(path) => {
                write!(f, "no five-letter words found in {}", path.display())
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, error) => Some(error),
            Self::NoWords(_) => None,
        }
    }
}

/// Word list with a solution pool and a wider guessable set
///
/// Solutions are drawn from the common corpus; guesses are checked against
/// the union of common and uncommon. Words are held uppercase, matching how
/// the engine stores guesses.
///
/// # Examples
/// ```
/// use wordle_game::core::WordSource;
/// use wordle_game::wordlists::WordList;
///
/// let words = WordList::embedded();
/// assert!(words.is_valid_word("HELLO"));
/// assert!(words.is_valid_word("OLLIE"));
/// assert!(!words.is_valid_word("ASDFG"));
/// ```
#[derive(Debug, Clone)]
pub struct WordList {
    solutions: Vec<String>,
    valid: FxHashSet<String>,
}

impl WordList {
    /// Build from the corpora embedded at compile time
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(
            COMMON_WORDS.iter().copied(),
            UNCOMMON_WORDS.iter().copied(),
        )
    }

    /// Build from explicit word sets
    ///
    /// `common` words are solution-eligible; `uncommon` words are accepted
    /// as guesses only. Words are uppercased but otherwise taken as given.
    pub fn from_words<C, U>(common: C, uncommon: U) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        U: IntoIterator,
        U::Item: AsRef<str>,
    {
        let solutions: Vec<String> = common
            .into_iter()
            .map(|word| word.as_ref().to_ascii_uppercase())
            .collect();

        let mut valid: FxHashSet<String> = solutions.iter().cloned().collect();
        valid.extend(
            uncommon
                .into_iter()
                .map(|word| word.as_ref().to_ascii_uppercase()),
        );

        Self { solutions, valid }
    }

    /// Load a custom list from a file, one five-letter word per line
    ///
    /// Every word in a custom list is solution-eligible. Lines that are not
    /// five ASCII letters are skipped.
    ///
    /// # Errors
    /// Returns [`WordListError::Io`] if the file cannot be read and
    /// [`WordListError::NoWords`] if nothing in it parses as a five-letter
    /// word.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path)
            .map_err(|error| WordListError::Io(path.to_path_buf(), error))?;
        if words.is_empty() {
            return Err(WordListError::NoWords(path.to_path_buf()));
        }
        Ok(Self::from_words(words, std::iter::empty::<&str>()))
    }

    /// Number of solution-eligible words
    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Number of accepted guess words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.valid.len()
    }

    /// Check whether the solution pool is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::embedded()
    }
}

impl WordSource for WordList {
    fn random_solution(&self) -> Option<String> {
        self.solutions.choose(&mut rand::rng()).cloned()
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        self.valid.contains(candidate)
    }
}
