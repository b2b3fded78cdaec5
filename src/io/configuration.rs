//! Puzzle file constants and runtime configuration defaults

/// Number of comment header lines carrying puzzle metadata (after the magic number)
pub const METADATA_LINES: usize = 3;

/// Prefix marking a metadata line
pub const METADATA_PREFIX: char = '#';

// Default values for configurable parameters
/// Fixed seed for reproducible scrambling
pub const DEFAULT_SEED: u64 = 42;

/// Default anchor tile row for the `match` command
pub const DEFAULT_ANCHOR_ROW: usize = 0;

/// Default anchor tile column for the `match` command
pub const DEFAULT_ANCHOR_COL: usize = 0;

/// Default cost of one tile selection
pub const DEFAULT_SELECT_COST: i64 = 10;

/// Default cost of one tile exchange
pub const DEFAULT_CHANGE_COST: i64 = 10;

/// Default number of selections allowed
pub const DEFAULT_MAX_SELECT_TIMES: u32 = 16;

// Output settings
/// Suffix added to scrambled puzzle filenames
pub const OUTPUT_SUFFIX: &str = "_puzzle";
/// Extension used for puzzle files
pub const PUZZLE_EXTENSION: &str = "ppm";

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
