//! Schema module - Configuration and input vocabulary for the puzzle.

mod alphabet;
mod config;

pub use alphabet::*;
pub use config::*;
