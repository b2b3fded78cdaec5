//! Best-match scans over candidate tiles
//!
//! For a fixed anchor and direction every other tile is scored in row-major
//! order and the minimum is kept. Ties are resolved by an explicit policy
//! because downstream solvers depend on which of several equal candidates
//! wins.

use crate::algorithm::adjacency::{BorderMetric, Direction};
use crate::io::error::{Result, out_of_range};
use crate::spatial::tiles::{PuzzleView, TilePosition};

/// Which of several equally scored candidates is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// The last candidate in scan order whose score is `<=` the running minimum
    LastMinimal,
    /// The first candidate in scan order with the minimal score
    FirstMinimal,
}

impl TieBreak {
    /// Whether `score` replaces the current `best`
    pub fn replaces(self, score: f64, best: f64) -> bool {
        match self {
            Self::LastMinimal => score <= best,
            Self::FirstMinimal => score < best,
        }
    }
}

/// Tie-break used by the reference scan
pub const REFERENCE_TIE_BREAK: TieBreak = TieBreak::LastMinimal;

/// Winning candidate of a scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch {
    /// Position of the winning tile
    pub position: TilePosition,
    /// Its border score
    pub score: f64,
}

/// Keep the minimal-score candidate from `candidates` in iteration order
///
/// Returns `None` if there are no candidates.
pub fn select_minimum<I>(candidates: I, tie_break: TieBreak) -> Option<BestMatch>
where
    I: IntoIterator<Item = (TilePosition, f64)>,
{
    let mut best: Option<BestMatch> = None;
    for (position, score) in candidates {
        let replace = best.is_none_or(|current| tie_break.replaces(score, current.score));
        if replace {
            best = Some(BestMatch { position, score });
        }
    }
    best
}

/// Best candidate to place on the `direction` side of `anchor`
///
/// Every tile except the anchor is scored in row-major order.
///
/// # Errors
///
/// Returns `OutOfRange` if `anchor` is not a tile of `puzzle`, and
/// propagates scoring errors
pub fn best_match(
    puzzle: &PuzzleView<'_>,
    anchor: TilePosition,
    direction: Direction,
    metric: &BorderMetric,
    tie_break: TieBreak,
) -> Result<Option<BestMatch>> {
    if !puzzle.contains(anchor) {
        return Err(out_of_range(
            "anchor tile",
            (anchor.row, anchor.col),
            (puzzle.div_y(), puzzle.div_x()),
        ));
    }
    let anchor_tile = puzzle.tile_at(anchor)?;

    let mut scored = Vec::with_capacity(puzzle.tile_count().saturating_sub(1));
    for position in puzzle.positions().filter(|&position| position != anchor) {
        let candidate = puzzle.tile_at(position)?;
        scored.push((position, metric.score(&anchor_tile, &candidate, direction)?));
    }

    Ok(select_minimum(scored, tie_break))
}

/// Best candidates for all four directions, in [`Direction::ALL`] order
///
/// # Errors
///
/// See [`best_match`]
pub fn best_matches(
    puzzle: &PuzzleView<'_>,
    anchor: TilePosition,
    metric: &BorderMetric,
    tie_break: TieBreak,
) -> Result<[(Direction, Option<BestMatch>); 4]> {
    let [right, up, left, down] = Direction::ALL;
    Ok([
        (right, best_match(puzzle, anchor, right, metric, tie_break)?),
        (up, best_match(puzzle, anchor, up, metric, tie_break)?),
        (left, best_match(puzzle, anchor, left, metric, tie_break)?),
        (down, best_match(puzzle, anchor, down, metric, tie_break)?),
    ])
}
