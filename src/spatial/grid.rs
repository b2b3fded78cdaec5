//! Immutable pixel grid backing every tile view
//!
//! Samples live in a single `(height, width, channels)` array. Once built the
//! grid is never mutated, so any number of views may borrow it concurrently.

use image::RgbImage;
use ndarray::{Array3, ArrayView1, Axis};

use crate::io::error::{Result, invalid_parameter, out_of_range};
use crate::spatial::source::PixelSource;

/// Rectangular array of fixed-channel 8-bit samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    data: Array3<u8>,
}

impl PixelGrid {
    /// Build a grid from row-major interleaved samples
    ///
    /// # Errors
    ///
    /// Returns an error if `channels` is zero, the dimensions overflow, or
    /// `samples` does not hold exactly `height * width * channels` values
    pub fn new(height: usize, width: usize, channels: usize, samples: Vec<u8>) -> Result<Self> {
        if channels == 0 {
            return Err(invalid_parameter(
                "channels",
                &channels,
                &"a pixel needs at least one channel",
            ));
        }

        let expected = sample_count(height, width, channels)?;
        if samples.len() != expected {
            return Err(invalid_parameter(
                "samples",
                &samples.len(),
                &format!("expected {expected} samples for {height}x{width}x{channels}"),
            ));
        }

        let data = Array3::from_shape_vec((height, width, channels), samples).map_err(|e| {
            invalid_parameter("samples", &expected, &format!("shape error: {e}"))
        })?;

        Ok(Self { data })
    }

    /// Build a grid where every pixel holds the same channel values
    ///
    /// # Errors
    ///
    /// Returns an error if `pixel` is empty or the dimensions overflow
    pub fn uniform(height: usize, width: usize, pixel: &[u8]) -> Result<Self> {
        let count = sample_count(height, width, pixel.len())?;
        let samples = pixel.iter().copied().cycle().take(count).collect();
        Self::new(height, width, pixel.len(), samples)
    }

    /// Convert a decoded RGB image into a three-channel grid
    ///
    /// Channel order is kept as decoded: red, green, blue.
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let data = Array3::from_shape_fn(
            (height as usize, width as usize, 3),
            |(row, col, channel)| {
                image
                    .get_pixel(col as u32, row as u32)
                    .0
                    .get(channel)
                    .copied()
                    .unwrap_or_default()
            },
        );
        Self { data }
    }

    /// Wrap an existing `(height, width, channels)` array
    ///
    /// # Errors
    ///
    /// Returns an error if the channel axis is empty
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        if data.dim().2 == 0 {
            return Err(invalid_parameter(
                "channels",
                &0,
                &"a pixel needs at least one channel",
            ));
        }
        Ok(Self { data })
    }

    /// Read-only access to the backing sample array
    pub const fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    /// Number of pixel rows
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Number of pixel columns
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Number of channels per pixel
    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Channel vector at (`row`, `col`)
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when the coordinate lies outside the grid
    pub fn get_pixel(&self, row: usize, col: usize) -> Result<ArrayView1<'_, u8>> {
        if row >= self.height() || col >= self.width() {
            return Err(out_of_range(
                "pixel grid",
                (row, col),
                (self.height(), self.width()),
            ));
        }
        Ok(self
            .data
            .index_axis(Axis(0), row)
            .index_axis_move(Axis(0), col))
    }
}

fn sample_count(height: usize, width: usize, channels: usize) -> Result<usize> {
    height
        .checked_mul(width)
        .and_then(|pixels| pixels.checked_mul(channels))
        .ok_or_else(|| {
            invalid_parameter(
                "samples",
                &format!("{height}x{width}x{channels}"),
                &"dimensions overflow",
            )
        })
}

impl PixelSource for PixelGrid {
    fn height(&self) -> usize {
        Self::height(self)
    }

    fn width(&self) -> usize {
        Self::width(self)
    }

    fn channels(&self) -> usize {
        Self::channels(self)
    }

    fn get_pixel(&self, row: usize, col: usize) -> Result<ArrayView1<'_, u8>> {
        Self::get_pixel(self, row, col)
    }
}
