//! Tile partitioning and border-adjacency scoring for grid reassembly puzzles
//!
//! A source image is cut into a grid of equally sized tiles and shuffled.
//! This crate addresses those tiles as lightweight views over one shared
//! pixel grid and scores how well any two tiles join along a given border,
//! the primitive consumed by reconstruction solvers.

#![forbid(unsafe_code)]

/// Border scoring, best-match scans, score matrices and scrambling
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Pixel grids, tile views and the pixel source capability
pub mod spatial;

pub use algorithm::adjacency::{BorderMetric, ChannelPolicy, Direction, score};
pub use io::error::{PuzzleError, Result};
pub use spatial::{PixelGrid, PixelSource, PuzzleView, TilePosition, TileView};
