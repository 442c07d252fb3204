//! Interactive TUI mode
//!
//! Full-screen play with an animated board, colored keyboard, and session
//! statistics.

pub mod app;
pub mod rendering;

pub use app::{App, Statistics, Toast, run_tui};
