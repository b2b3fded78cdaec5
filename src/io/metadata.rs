//! Puzzle metadata header parsing and formatting
//!
//! A puzzle file starts with a format marker line followed by three comment
//! lines:
//!
//! ```text
//! P6
//! # <div_x> <div_y>
//! # <max_select_times>
//! # <select_cost> <change_cost>
//! ```

use std::borrow::Cow;
use std::str::FromStr;

use crate::io::configuration::{METADATA_LINES, METADATA_PREFIX};
use crate::io::error::{PuzzleError, Result};

/// Grid shape and cost parameters of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleMetadata {
    /// Number of tile columns
    pub div_x: usize,
    /// Number of tile rows
    pub div_y: usize,
    /// Cost of one tile exchange
    pub change_cost: i64,
    /// Cost of one tile selection
    pub select_cost: i64,
    /// Maximum number of selections
    pub max_select_times: u32,
}

impl PuzzleMetadata {
    /// Parse the metadata from the start of a puzzle header
    ///
    /// The first line is the format marker and is not inspected. Anything
    /// after the metadata lines is ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetadata` if a line is missing, lacks the `#` prefix,
    /// has the wrong number of fields, holds a non-numeric field, or declares
    /// a zero division
    pub fn parse_header(header: &str) -> Result<Self> {
        Self::parse_lines(header.lines().map(Cow::Borrowed))
    }

    /// Parse the metadata from the raw bytes of a puzzle file
    ///
    /// Only the leading header lines need to be text; binary pixel data after
    /// them is never decoded here.
    ///
    /// # Errors
    ///
    /// See [`PuzzleMetadata::parse_header`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse_lines(
            bytes
                .split(|&byte| byte == b'\n')
                .take(METADATA_LINES + 1)
                .map(String::from_utf8_lossy),
        )
    }

    fn parse_lines<'a, I>(lines: I) -> Result<Self>
    where
        I: Iterator<Item = Cow<'a, str>>,
    {
        let mut lines = lines.skip(1);
        let mut next_fields = |line: usize, expected: usize| -> Result<Vec<String>> {
            let text = lines.next().ok_or_else(|| PuzzleError::InvalidMetadata {
                line,
                reason: "missing line".to_string(),
            })?;
            let body = text.trim_end_matches('\r').trim_start();
            let fields: Vec<String> = body
                .strip_prefix(METADATA_PREFIX)
                .ok_or_else(|| PuzzleError::InvalidMetadata {
                    line,
                    reason: format!("expected '{METADATA_PREFIX}' prefix, found '{body}'"),
                })?
                .split_whitespace()
                .map(str::to_string)
                .collect();
            if fields.len() != expected {
                return Err(PuzzleError::InvalidMetadata {
                    line,
                    reason: format!("expected {expected} fields, found {}", fields.len()),
                });
            }
            Ok(fields)
        };

        let shape = next_fields(2, 2)?;
        let selections = next_fields(3, 1)?;
        let costs = next_fields(4, 2)?;

        let metadata = Self {
            div_x: parse_field(2, &shape, 0)?,
            div_y: parse_field(2, &shape, 1)?,
            max_select_times: parse_field(3, &selections, 0)?,
            select_cost: parse_field(4, &costs, 0)?,
            change_cost: parse_field(4, &costs, 1)?,
        };

        if metadata.div_x == 0 || metadata.div_y == 0 {
            return Err(PuzzleError::InvalidMetadata {
                line: 2,
                reason: format!(
                    "divisions must be at least 1, found {}x{}",
                    metadata.div_x, metadata.div_y
                ),
            });
        }

        Ok(metadata)
    }

    /// Metadata comment lines, each terminated by a newline
    ///
    /// The format marker is not included.
    pub fn header(&self) -> String {
        format!(
            "{METADATA_PREFIX} {} {}\n{METADATA_PREFIX} {}\n{METADATA_PREFIX} {} {}\n",
            self.div_x, self.div_y, self.max_select_times, self.select_cost, self.change_cost
        )
    }
}

fn parse_field<T: FromStr>(line: usize, fields: &[String], index: usize) -> Result<T> {
    let raw = fields
        .get(index)
        .ok_or_else(|| PuzzleError::InvalidMetadata {
            line,
            reason: format!("missing field {}", index + 1),
        })?;
    raw.parse().map_err(|_parse_error| PuzzleError::InvalidMetadata {
        line,
        reason: format!("'{raw}' is not a valid number"),
    })
}
