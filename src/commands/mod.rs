//! Command implementations

pub mod play;
pub mod rules;
pub mod simple;

pub use play::run_play;
pub use rules::run_rules;
pub use simple::run_simple;
