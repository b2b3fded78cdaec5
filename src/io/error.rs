//! Error types for pixel addressing, border scoring and puzzle file handling

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::adjacency::Direction;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Pixel or tile coordinate outside the declared bounds
    OutOfRange {
        /// What was being addressed (pixel grid, tile, anchor...)
        target: &'static str,
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of valid rows
        height: usize,
        /// Number of valid columns
        width: usize,
    },

    /// Compared sources differ in the dimension perpendicular to the seam
    ///
    /// Raised for every incompatible pair; scans and matrices propagate it
    /// rather than substituting a sentinel cost.
    DimensionMismatch {
        /// Requested seam direction
        direction: Direction,
        /// Perpendicular extent of the first source
        first: usize,
        /// Perpendicular extent of the second source
        second: usize,
    },

    /// Compared sources store a different number of channels per pixel
    ChannelMismatch {
        /// Channels of the first source
        first: usize,
        /// Channels of the second source
        second: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Puzzle metadata header is malformed
    InvalidMetadata {
        /// One-based header line number
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Failed to read a puzzle or image file
    LoadFailed {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File contents could not be decoded as an image
    DecodeFailed {
        /// Path to the file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode or save a puzzle image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                target,
                row,
                col,
                height,
                width,
            } => {
                write!(
                    f,
                    "Coordinate ({row}, {col}) is out of range for {target} of size {height}x{width}"
                )
            }
            Self::DimensionMismatch {
                direction,
                first,
                second,
            } => {
                write!(
                    f,
                    "Cannot join {direction}: border lengths differ ({first} vs {second})"
                )
            }
            Self::ChannelMismatch { first, second } => {
                write!(
                    f,
                    "Cannot compare pixels with {first} and {second} channels"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidMetadata { line, reason } => {
                write!(f, "Invalid puzzle metadata on line {line}: {reason}")
            }
            Self::LoadFailed { path, source } => {
                write!(f, "Failed to load '{}': {source}", path.display())
            }
            Self::DecodeFailed { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DecodeFailed { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::LoadFailed { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<output>"),
            operation: "write output",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-range error for a `height`x`width` target
pub const fn out_of_range(
    target: &'static str,
    (row, col): (usize, usize),
    (height, width): (usize, usize),
) -> PuzzleError {
    PuzzleError::OutOfRange {
        target,
        row,
        col,
        height,
        width,
    }
}
