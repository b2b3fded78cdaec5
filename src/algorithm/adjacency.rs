//! Border-difference scoring between two pixel sources
//!
//! A seam joins one border line of the anchor with the facing border line of
//! the candidate. The score is the sum of absolute channel differences along
//! that seam; lower means a better fit and identical borders score zero.

use std::fmt;

use ndarray::ArrayView1;

use crate::io::error::{PuzzleError, Result};
use crate::spatial::source::PixelSource;

/// Side of the anchor at which the candidate is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Candidate sits to the right of the anchor
    Right,
    /// Candidate sits above the anchor
    Up,
    /// Candidate sits to the left of the anchor
    Left,
    /// Candidate sits below the anchor
    Down,
}

impl Direction {
    /// All directions in scan order
    pub const ALL: [Self; 4] = [Self::Right, Self::Up, Self::Left, Self::Down];

    /// Direction seen from the candidate's side of the same seam
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
        }
    }

    /// Whether the seam runs vertically (candidate beside the anchor)
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::Up => "up",
            Self::Left => "left",
            Self::Down => "down",
        };
        f.pad(name)
    }
}

/// Channels that contribute to a border difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelPolicy {
    /// Every channel except index 0
    ///
    /// Matches the reference scores, which never counted the first channel.
    #[default]
    SkipFirst,
    /// Every channel
    All,
}

impl ChannelPolicy {
    const fn first_channel(self) -> usize {
        match self {
            Self::SkipFirst => 1,
            Self::All => 0,
        }
    }
}

/// Border-difference metric configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderMetric {
    /// Which channels are summed
    pub channels: ChannelPolicy,
}

impl BorderMetric {
    /// Metric summing every channel
    pub const fn all_channels() -> Self {
        Self {
            channels: ChannelPolicy::All,
        }
    }

    /// Cost of placing `candidate` on the `direction` side of `anchor`
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` when the sources disagree on the border
    /// length (height for left/right seams, width for up/down seams),
    /// `ChannelMismatch` when they store different channel counts, and
    /// `OutOfRange` if a source cannot serve its own border pixels
    pub fn score<A, B>(&self, anchor: &A, candidate: &B, direction: Direction) -> Result<f64>
    where
        A: PixelSource + ?Sized,
        B: PixelSource + ?Sized,
    {
        let (first, second) = if direction.is_horizontal() {
            (anchor.height(), candidate.height())
        } else {
            (anchor.width(), candidate.width())
        };
        if first != second {
            return Err(PuzzleError::DimensionMismatch {
                direction,
                first,
                second,
            });
        }

        if anchor.channels() != candidate.channels() {
            return Err(PuzzleError::ChannelMismatch {
                first: anchor.channels(),
                second: candidate.channels(),
            });
        }

        let anchor_line = border_index(anchor, direction);
        let candidate_line = border_index(candidate, direction.opposite());

        let mut sum = 0.0;
        for position in 0..first {
            let (a, b) = if direction.is_horizontal() {
                (
                    anchor.get_pixel(position, anchor_line)?,
                    candidate.get_pixel(position, candidate_line)?,
                )
            } else {
                (
                    anchor.get_pixel(anchor_line, position)?,
                    candidate.get_pixel(candidate_line, position)?,
                )
            };
            sum += f64::from(self.pixel_difference(a, b));
        }

        Ok(sum)
    }

    fn pixel_difference(self, a: ArrayView1<'_, u8>, b: ArrayView1<'_, u8>) -> u32 {
        a.iter()
            .zip(b.iter())
            .skip(self.channels.first_channel())
            .map(|(&x, &y)| u32::from(x.abs_diff(y)))
            .sum()
    }
}

// Column (left/right) or row (up/down) index of the border facing `side`
fn border_index<S: PixelSource + ?Sized>(source: &S, side: Direction) -> usize {
    match side {
        Direction::Right => source.width().saturating_sub(1),
        Direction::Down => source.height().saturating_sub(1),
        Direction::Left | Direction::Up => 0,
    }
}

/// Cost of placing `candidate` on the `direction` side of `anchor` with the
/// default metric
///
/// # Errors
///
/// See [`BorderMetric::score`]
pub fn score<A, B>(anchor: &A, candidate: &B, direction: Direction) -> Result<f64>
where
    A: PixelSource + ?Sized,
    B: PixelSource + ?Sized,
{
    BorderMetric::default().score(anchor, candidate, direction)
}
