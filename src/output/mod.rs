//! Terminal output formatting
//!
//! Printing for the line-mode game and rules text, plus the shared tile and
//! bar formatters the TUI reuses.

pub mod display;
pub mod formatters;

pub use formatters::{distribution_bar, emoji_row, tile_row};
