//! Capability trait shared by every readable pixel rectangle
//!
//! Border scoring only needs dimensions and per-pixel lookups, so it is
//! written against this trait instead of a concrete buffer. Whole grids,
//! tile windows and loaded puzzles all implement it.

use ndarray::ArrayView1;

use crate::io::error::Result;

/// Read-only rectangle of multi-channel pixels
pub trait PixelSource {
    /// Number of pixel rows
    fn height(&self) -> usize;

    /// Number of pixel columns
    fn width(&self) -> usize;

    /// Number of channels stored per pixel
    fn channels(&self) -> usize;

    /// Channel vector at (`row`, `col`)
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `row >= height()` or `col >= width()`
    fn get_pixel(&self, row: usize, col: usize) -> Result<ArrayView1<'_, u8>>;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn height(&self) -> usize {
        (**self).height()
    }

    fn width(&self) -> usize {
        (**self).width()
    }

    fn channels(&self) -> usize {
        (**self).channels()
    }

    fn get_pixel(&self, row: usize, col: usize) -> Result<ArrayView1<'_, u8>> {
        (**self).get_pixel(row, col)
    }
}
