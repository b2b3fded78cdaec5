//! Tile partitioning of a pixel grid into windowed views
//!
//! A puzzle cuts its grid into `div_y` rows and `div_x` columns of equally
//! sized tiles. Tile sizes use floor division, so remainder rows and columns
//! at the bottom and right edges belong to no tile. Views borrow the grid and
//! never copy pixels.

use ndarray::ArrayView1;
use std::fmt;

use crate::io::error::{Result, invalid_parameter, out_of_range};
use crate::spatial::grid::PixelGrid;
use crate::spatial::source::PixelSource;

/// Row and column of a tile within the partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePosition {
    /// Tile row, in `[0, div_y)`
    pub row: usize,
    /// Tile column, in `[0, div_x)`
    pub col: usize,
}

impl TilePosition {
    /// Create a tile position
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index of this position in a grid with `div_x` columns
    pub const fn index(self, div_x: usize) -> usize {
        self.row * div_x + self.col
    }

    /// Inverse of [`TilePosition::index`]
    pub const fn from_index(index: usize, div_x: usize) -> Self {
        Self {
            row: index / div_x,
            col: index % div_x,
        }
    }
}

impl fmt::Display for TilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Read-only window over one cell of a grid partition
#[derive(Debug, Clone, Copy)]
pub struct TileView<'a> {
    grid: &'a PixelGrid,
    row: usize,
    col: usize,
    tile_height: usize,
    tile_width: usize,
}

impl<'a> TileView<'a> {
    /// Create a view of tile (`row`, `col`) in a `div_y` x `div_x` partition
    ///
    /// The caller guarantees `row < div_y` and `col < div_x`. A view that
    /// runs past the grid reports `OutOfRange` on pixel access. Zero divisions
    /// produce an empty view.
    pub fn new(grid: &'a PixelGrid, row: usize, col: usize, div_y: usize, div_x: usize) -> Self {
        Self {
            grid,
            row,
            col,
            tile_height: grid.height().checked_div(div_y).unwrap_or(0),
            tile_width: grid.width().checked_div(div_x).unwrap_or(0),
        }
    }

    /// Tile row within the partition
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Tile column within the partition
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Position handle of this tile
    pub const fn position(&self) -> TilePosition {
        TilePosition::new(self.row, self.col)
    }

    /// Grid this view reads from
    pub const fn grid(&self) -> &'a PixelGrid {
        self.grid
    }

    /// Pixel rows in the tile (`grid.height() / div_y`)
    pub const fn height(&self) -> usize {
        self.tile_height
    }

    /// Pixel columns in the tile (`grid.width() / div_x`)
    pub const fn width(&self) -> usize {
        self.tile_width
    }

    /// Channel vector at tile-local (`row`, `col`)
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the local coordinate falls outside the tile,
    /// or if the tile itself extends beyond the grid
    pub fn get_pixel(&self, row: usize, col: usize) -> Result<ArrayView1<'a, u8>> {
        if row >= self.tile_height || col >= self.tile_width {
            return Err(out_of_range(
                "tile",
                (row, col),
                (self.tile_height, self.tile_width),
            ));
        }
        self.grid.get_pixel(
            row + self.row * self.tile_height,
            col + self.col * self.tile_width,
        )
    }
}

impl PixelSource for TileView<'_> {
    fn height(&self) -> usize {
        self.tile_height
    }

    fn width(&self) -> usize {
        self.tile_width
    }

    fn channels(&self) -> usize {
        self.grid.channels()
    }

    fn get_pixel(&self, row: usize, col: usize) -> Result<ArrayView1<'_, u8>> {
        Self::get_pixel(self, row, col).map(ArrayView1::reborrow)
    }
}

/// Partition of a grid into `div_y` rows and `div_x` columns of tiles
#[derive(Debug, Clone, Copy)]
pub struct PuzzleView<'a> {
    grid: &'a PixelGrid,
    div_x: usize,
    div_y: usize,
}

impl<'a> PuzzleView<'a> {
    /// Partition `grid` into `div_x` columns and `div_y` rows
    ///
    /// # Errors
    ///
    /// Returns an error if either division is zero or exceeds the matching
    /// grid dimension, which would leave tiles without pixels
    pub fn new(grid: &'a PixelGrid, div_x: usize, div_y: usize) -> Result<Self> {
        if div_x == 0 || div_x > grid.width() {
            return Err(invalid_parameter(
                "div_x",
                &div_x,
                &format!("must be between 1 and the grid width {}", grid.width()),
            ));
        }
        if div_y == 0 || div_y > grid.height() {
            return Err(invalid_parameter(
                "div_y",
                &div_y,
                &format!("must be between 1 and the grid height {}", grid.height()),
            ));
        }

        Ok(Self { grid, div_x, div_y })
    }

    /// Backing pixel grid
    pub const fn grid(&self) -> &'a PixelGrid {
        self.grid
    }

    /// Number of tile columns
    pub const fn div_x(&self) -> usize {
        self.div_x
    }

    /// Number of tile rows
    pub const fn div_y(&self) -> usize {
        self.div_y
    }

    /// Total number of tiles
    pub const fn tile_count(&self) -> usize {
        self.div_x * self.div_y
    }

    /// Pixel rows per tile
    pub fn tile_height(&self) -> usize {
        self.grid.height() / self.div_y
    }

    /// Pixel columns per tile
    pub fn tile_width(&self) -> usize {
        self.grid.width() / self.div_x
    }

    /// Whether (`row`, `col`) names a tile of this partition
    pub const fn contains(&self, position: TilePosition) -> bool {
        position.row < self.div_y && position.col < self.div_x
    }

    /// View of tile (`row`, `col`)
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the coordinate is not a tile of this partition
    pub fn tile(&self, row: usize, col: usize) -> Result<TileView<'a>> {
        if !self.contains(TilePosition::new(row, col)) {
            return Err(out_of_range(
                "tile partition",
                (row, col),
                (self.div_y, self.div_x),
            ));
        }
        Ok(TileView::new(self.grid, row, col, self.div_y, self.div_x))
    }

    /// View of the tile at `position`
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the position is not a tile of this partition
    pub fn tile_at(&self, position: TilePosition) -> Result<TileView<'a>> {
        self.tile(position.row, position.col)
    }

    /// All tile positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = TilePosition> {
        let div_x = self.div_x;
        (0..self.tile_count()).map(move |index| TilePosition::from_index(index, div_x))
    }
}
