//! Word source abstraction
//!
//! The engine needs exactly two things from a word list: a random solution
//! and a membership test for submitted guesses. Keeping this behind a trait
//! lets tests swap in fixed word sets and lets the binary load custom lists.

/// Supplies solution words and guess validation to the game engine
///
/// Implementations hand out uppercase ASCII words. [`random_solution`]
/// returns `None` only when the solution pool is empty, which the engine
/// treats as a fatal configuration error at construction.
///
/// [`random_solution`]: WordSource::random_solution
pub trait WordSource {
    /// Draw a word uniformly at random from the solution pool
    fn random_solution(&self) -> Option<String>;

    /// Check whether a candidate is an accepted guess
    ///
    /// The candidate arrives uppercased; the test is exact membership in
    /// the full guessable set, independent of the current solution.
    fn is_valid_word(&self, candidate: &str) -> bool;
}
