//! Puzzle file loading and saving
//!
//! Puzzles are binary PPM images whose header carries the metadata as comment
//! lines. Pixel data goes through the `image` crate's PNM codec, which skips
//! the comments on read.

use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ImageFormat, RgbImage};
use ndarray::ArrayView1;

use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::metadata::PuzzleMetadata;
use crate::spatial::grid::PixelGrid;
use crate::spatial::source::PixelSource;
use crate::spatial::tiles::{PuzzleView, TileView};

/// A loaded puzzle: metadata plus the scrambled image
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Parsed header metadata
    pub metadata: PuzzleMetadata,
    /// Decoded pixel grid
    pub grid: PixelGrid,
}

impl Puzzle {
    /// Tile partition declared by the metadata
    ///
    /// # Errors
    ///
    /// Returns an error if the declared divisions do not fit the grid
    pub fn view(&self) -> Result<PuzzleView<'_>> {
        PuzzleView::new(&self.grid, self.metadata.div_x, self.metadata.div_y)
    }

    /// View of tile (`row`, `col`)
    ///
    /// # Errors
    ///
    /// Returns an error if the partition is invalid or the tile does not exist
    pub fn tile(&self, row: usize, col: usize) -> Result<TileView<'_>> {
        self.view()?.tile(row, col)
    }
}

impl PixelSource for Puzzle {
    fn height(&self) -> usize {
        self.grid.height()
    }

    fn width(&self) -> usize {
        self.grid.width()
    }

    fn channels(&self) -> usize {
        self.grid.channels()
    }

    fn get_pixel(&self, row: usize, col: usize) -> Result<ArrayView1<'_, u8>> {
        self.grid.get_pixel(row, col)
    }
}

/// Load a puzzle file with its metadata header
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read (`LoadFailed`)
/// - The metadata header is malformed (`InvalidMetadata`)
/// - The pixel data cannot be decoded (`DecodeFailed`)
/// - The declared divisions do not fit the image
pub fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let bytes = std::fs::read(path).map_err(|e| PuzzleError::LoadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let metadata = PuzzleMetadata::from_bytes(&bytes)?;
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Pnm).map_err(|e| {
        PuzzleError::DecodeFailed {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    let puzzle = Puzzle {
        metadata,
        grid: PixelGrid::from_rgb_image(&decoded.to_rgb8()),
    };
    puzzle.view()?;

    log::info!(
        "Loaded {}: {}x{} pixels, {}x{} tiles",
        path.display(),
        puzzle.grid.width(),
        puzzle.grid.height(),
        metadata.div_x,
        metadata.div_y
    );

    Ok(puzzle)
}

/// Load any image format supported by the `image` crate as an RGB grid
///
/// # Errors
///
/// Returns `LoadFailed` if the file cannot be read and `DecodeFailed` if it
/// is not a supported image
pub fn load_image(path: &Path) -> Result<PixelGrid> {
    let decoded = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(source) => PuzzleError::LoadFailed {
            path: path.to_path_buf(),
            source,
        },
        other => PuzzleError::DecodeFailed {
            path: path.to_path_buf(),
            source: other,
        },
    })?;
    Ok(PixelGrid::from_rgb_image(&decoded.to_rgb8()))
}

/// Encode a three-channel grid as a puzzle file image with metadata comments
///
/// # Errors
///
/// Returns an error if the grid does not have three channels or encoding fails
pub fn encode_puzzle(metadata: &PuzzleMetadata, grid: &PixelGrid) -> Result<Vec<u8>> {
    if grid.channels() != 3 {
        return Err(invalid_parameter(
            "channels",
            &grid.channels(),
            &"puzzle files store RGB pixels",
        ));
    }

    let width = u32::try_from(grid.width()).map_err(|_overflow| {
        invalid_parameter("width", &grid.width(), &"exceeds the image format limit")
    })?;
    let height = u32::try_from(grid.height()).map_err(|_overflow| {
        invalid_parameter("height", &grid.height(), &"exceeds the image format limit")
    })?;
    let samples: Vec<u8> = grid.as_array().iter().copied().collect();
    let rgb = RgbImage::from_raw(width, height, samples).ok_or_else(|| {
        invalid_parameter(
            "grid",
            &format!("{width}x{height}"),
            &"sample count does not match dimensions",
        )
    })?;

    let mut encoded = Vec::new();
    rgb.write_with_encoder(
        PnmEncoder::new(&mut encoded).with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary)),
    )
    .map_err(|e| PuzzleError::ImageExport {
        path: "<memory>".into(),
        source: e,
    })?;

    // Magic number is two bytes followed by one whitespace byte; metadata
    // comments go straight after it
    let (magic, rest) = encoded
        .get(..2)
        .zip(encoded.get(3..))
        .ok_or_else(|| {
            invalid_parameter("grid", &encoded.len(), &"encoder produced no header")
        })?;
    let mut output = Vec::with_capacity(encoded.len() + 64);
    output.extend_from_slice(magic);
    output.push(b'\n');
    output.extend_from_slice(metadata.header().as_bytes());
    output.extend_from_slice(rest);
    Ok(output)
}

/// Write a puzzle file
///
/// # Errors
///
/// Returns an error if encoding fails, the parent directory cannot be
/// created, or the file cannot be written
pub fn save_puzzle(path: &Path, metadata: &PuzzleMetadata, grid: &PixelGrid) -> Result<()> {
    let bytes = encode_puzzle(metadata, grid)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, bytes).map_err(|e| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "write puzzle",
        source: e,
    })?;

    log::info!("Wrote {}", path.display());
    Ok(())
}
