//! How-to-play text
//!
//! Prints the rules with example rows colored like the game tiles.

use crate::output::display;

/// Print the game rules
pub fn run_rules() {
    display::print_rules();
}
