//! Reproducible puzzle generation by shuffling the tiles of an image

use ndarray::{Array3, Axis, Slice};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::io::error::Result;
use crate::spatial::grid::PixelGrid;
use crate::spatial::tiles::{PuzzleView, TilePosition};

/// A shuffled puzzle grid together with its solution
#[derive(Debug, Clone)]
pub struct Scrambled {
    /// Shuffled grid, cropped to a whole number of tiles
    pub grid: PixelGrid,
    /// `origins[i]` is the source position of the tile now at row-major index `i`
    pub origins: Vec<TilePosition>,
}

impl Scrambled {
    /// Source position of the tile now at `position`
    pub fn origin_of(&self, position: TilePosition, div_x: usize) -> Option<TilePosition> {
        self.origins.get(position.index(div_x)).copied()
    }
}

/// Cut `grid` into `div_y` x `div_x` tiles and shuffle them with `seed`
///
/// Remainder rows and columns that belong to no tile are dropped, so the
/// output is exactly `div_y * tile_height` by `div_x * tile_width` pixels.
///
/// # Errors
///
/// Returns an error if the divisions are invalid for `grid`
pub fn scramble(grid: &PixelGrid, div_x: usize, div_y: usize, seed: u64) -> Result<Scrambled> {
    let puzzle = PuzzleView::new(grid, div_x, div_y)?;
    let tile_height = puzzle.tile_height();
    let tile_width = puzzle.tile_width();

    let mut origins: Vec<TilePosition> = puzzle.positions().collect();
    let mut rng = StdRng::seed_from_u64(seed);
    origins.shuffle(&mut rng);

    let source = grid.as_array();
    let mut shuffled = Array3::zeros((
        div_y * tile_height,
        div_x * tile_width,
        grid.channels(),
    ));

    for (index, origin) in origins.iter().enumerate() {
        let target = TilePosition::from_index(index, div_x);
        let (src_row, src_col) = (origin.row * tile_height, origin.col * tile_width);
        let (dst_row, dst_col) = (target.row * tile_height, target.col * tile_width);

        shuffled
            .slice_axis_mut(Axis(0), Slice::from(dst_row..dst_row + tile_height))
            .slice_axis_move(Axis(1), Slice::from(dst_col..dst_col + tile_width))
            .assign(
                &source
                    .slice_axis(Axis(0), Slice::from(src_row..src_row + tile_height))
                    .slice_axis_move(Axis(1), Slice::from(src_col..src_col + tile_width)),
            );
    }

    log::debug!("Scrambled {div_y}x{div_x} tiles with seed {seed}");

    Ok(Scrambled {
        grid: PixelGrid::from_array(shuffled)?,
        origins,
    })
}
