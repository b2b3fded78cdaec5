//! Pairwise score matrix over every ordered pair of tiles
//!
//! Only right and down seams are evaluated. Left and up scores are read from
//! the transposed entries, since `score(a, b, Left) == score(b, a, Right)`
//! and `score(a, b, Up) == score(b, a, Down)`. Anchor rows are independent
//! and run in parallel when the `parallel` feature is enabled.

use ndarray::Array2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::algorithm::adjacency::{BorderMetric, Direction};
use crate::algorithm::selection::{BestMatch, TieBreak, select_minimum};
use crate::io::error::{Result, out_of_range};
use crate::spatial::tiles::{PuzzleView, TilePosition};

/// Border scores for every ordered tile pair of a puzzle
#[derive(Debug, Clone)]
pub struct ScoreMatrix {
    div_x: usize,
    div_y: usize,
    /// `right[[a, b]]` = cost of `b` on the right of `a` (row-major indices)
    right: Array2<f64>,
    /// `down[[a, b]]` = cost of `b` below `a`
    down: Array2<f64>,
}

impl ScoreMatrix {
    /// Score every ordered pair of tiles in `puzzle`
    ///
    /// # Errors
    ///
    /// Propagates the first scoring error encountered
    pub fn compute(puzzle: &PuzzleView<'_>, metric: &BorderMetric) -> Result<Self> {
        Self::compute_with_progress(puzzle, metric, || {})
    }

    /// Score every ordered pair, calling `on_anchor` after each anchor tile
    ///
    /// `on_anchor` may be called from several threads at once.
    ///
    /// # Errors
    ///
    /// Propagates the first scoring error encountered
    pub fn compute_with_progress<F>(
        puzzle: &PuzzleView<'_>,
        metric: &BorderMetric,
        on_anchor: F,
    ) -> Result<Self>
    where
        F: Fn() + Sync,
    {
        let count = puzzle.tile_count();
        let div_x = puzzle.div_x();
        log::debug!(
            "Scoring {count} tiles ({}x{} pixels each)",
            puzzle.tile_height(),
            puzzle.tile_width()
        );

        let score_anchor = |a: usize| -> Result<(Vec<f64>, Vec<f64>)> {
            let anchor = puzzle.tile_at(TilePosition::from_index(a, div_x))?;
            let mut right = Vec::with_capacity(count);
            let mut down = Vec::with_capacity(count);
            for b in 0..count {
                if a == b {
                    right.push(f64::INFINITY);
                    down.push(f64::INFINITY);
                    continue;
                }
                let candidate = puzzle.tile_at(TilePosition::from_index(b, div_x))?;
                right.push(metric.score(&anchor, &candidate, Direction::Right)?);
                down.push(metric.score(&anchor, &candidate, Direction::Down)?);
            }
            on_anchor();
            Ok((right, down))
        };

        #[cfg(feature = "parallel")]
        let rows: Vec<(Vec<f64>, Vec<f64>)> = (0..count)
            .into_par_iter()
            .map(score_anchor)
            .collect::<Result<_>>()?;

        #[cfg(not(feature = "parallel"))]
        let rows: Vec<(Vec<f64>, Vec<f64>)> =
            (0..count).map(score_anchor).collect::<Result<_>>()?;

        let mut right = Array2::from_elem((count, count), f64::INFINITY);
        let mut down = Array2::from_elem((count, count), f64::INFINITY);
        for (a, (right_row, down_row)) in rows.into_iter().enumerate() {
            for (cell, value) in right.row_mut(a).iter_mut().zip(right_row) {
                *cell = value;
            }
            for (cell, value) in down.row_mut(a).iter_mut().zip(down_row) {
                *cell = value;
            }
        }

        Ok(Self {
            div_x,
            div_y: puzzle.div_y(),
            right,
            down,
        })
    }

    /// Number of tile columns
    pub const fn div_x(&self) -> usize {
        self.div_x
    }

    /// Number of tile rows
    pub const fn div_y(&self) -> usize {
        self.div_y
    }

    fn index_of(&self, position: TilePosition) -> Option<usize> {
        (position.row < self.div_y && position.col < self.div_x)
            .then(|| position.index(self.div_x))
    }

    /// Cost of placing `candidate` on the `direction` side of `anchor`
    ///
    /// Returns `None` when the two positions are equal or either lies
    /// outside the puzzle.
    pub fn get(
        &self,
        anchor: TilePosition,
        candidate: TilePosition,
        direction: Direction,
    ) -> Option<f64> {
        let a = self.index_of(anchor)?;
        let b = self.index_of(candidate)?;
        if a == b {
            return None;
        }
        match direction {
            Direction::Right => self.right.get([a, b]),
            Direction::Left => self.right.get([b, a]),
            Direction::Down => self.down.get([a, b]),
            Direction::Up => self.down.get([b, a]),
        }
        .copied()
    }

    /// Best candidate for `anchor` in `direction`, scanning in row-major order
    ///
    /// Agrees with [`crate::algorithm::selection::best_match`] for the same
    /// metric and tie-break.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `anchor` is not a tile of the puzzle
    pub fn best_match(
        &self,
        anchor: TilePosition,
        direction: Direction,
        tie_break: TieBreak,
    ) -> Result<Option<BestMatch>> {
        if self.index_of(anchor).is_none() {
            return Err(out_of_range(
                "anchor tile",
                (anchor.row, anchor.col),
                (self.div_y, self.div_x),
            ));
        }

        let candidates = (0..self.div_x * self.div_y)
            .map(|index| TilePosition::from_index(index, self.div_x))
            .filter_map(|position| {
                self.get(anchor, position, direction)
                    .map(|score| (position, score))
            });

        Ok(select_minimum(candidates, tie_break))
    }
}
