//! Pixel storage and tile addressing
//!
//! This module contains spatial-related functionality including:
//! - The immutable pixel grid
//! - The pixel source capability shared by grids and views
//! - Tile views and the puzzle partition that creates them

/// Immutable multi-channel pixel grid
pub mod grid;
/// Capability trait for readable pixel rectangles
pub mod source;
/// Tile positions, tile views and puzzle partitions
pub mod tiles;

pub use grid::PixelGrid;
pub use source::PixelSource;
pub use tiles::{PuzzleView, TilePosition, TileView};
