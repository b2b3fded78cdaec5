/// Command-line parsing and command execution
pub mod cli;
/// Puzzle file constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Puzzle file loading and saving
pub mod image;
/// Puzzle metadata header
pub mod metadata;
/// Progress display for score matrices
pub mod progress;
