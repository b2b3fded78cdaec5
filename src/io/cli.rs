//! Command-line interface for inspecting, scoring and generating puzzles

use crate::algorithm::adjacency::{BorderMetric, ChannelPolicy, Direction};
use crate::algorithm::matrix::ScoreMatrix;
use crate::algorithm::scramble::scramble;
use crate::algorithm::selection::{BestMatch, REFERENCE_TIE_BREAK, TieBreak, best_matches};
use crate::io::configuration::{
    DEFAULT_ANCHOR_COL, DEFAULT_ANCHOR_ROW, DEFAULT_CHANGE_COST, DEFAULT_MAX_SELECT_TIMES,
    DEFAULT_SEED, DEFAULT_SELECT_COST, OUTPUT_SUFFIX, PUZZLE_EXTENSION,
};
use crate::io::error::Result;
use crate::io::image::{load_image, load_puzzle, save_puzzle};
use crate::io::metadata::PuzzleMetadata;
use crate::io::progress::ScoringProgress;
use crate::spatial::tiles::TilePosition;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "seamscore")]
#[command(
    author,
    version,
    about = "Score how well puzzle tiles fit along each border"
)]
/// Command-line arguments for the puzzle tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Show puzzle metadata and tile geometry
    Inspect {
        /// Puzzle file (PPM with metadata header)
        #[arg(value_name = "PUZZLE")]
        puzzle: PathBuf,
    },

    /// Find the best neighbour of one tile in every direction
    Match {
        /// Puzzle file (PPM with metadata header)
        #[arg(value_name = "PUZZLE")]
        puzzle: PathBuf,

        /// Anchor tile row
        #[arg(short, long, default_value_t = DEFAULT_ANCHOR_ROW)]
        row: usize,

        /// Anchor tile column
        #[arg(short, long, default_value_t = DEFAULT_ANCHOR_COL)]
        col: usize,

        /// Include the first channel in border differences
        #[arg(short, long)]
        all_channels: bool,

        /// Keep the first of equally scored candidates instead of the last
        #[arg(short, long)]
        first_minimal: bool,
    },

    /// Score every tile pair and report each tile's best neighbours
    Matrix {
        /// Puzzle file (PPM with metadata header)
        #[arg(value_name = "PUZZLE")]
        puzzle: PathBuf,

        /// Include the first channel in border differences
        #[arg(short, long)]
        all_channels: bool,
    },

    /// Cut an image into tiles, shuffle them and write a puzzle file
    Scramble {
        /// Source image in any supported format
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// Number of tile columns
        #[arg(short = 'x', long)]
        div_x: usize,

        /// Number of tile rows
        #[arg(short = 'y', long)]
        div_y: usize,

        /// Random seed for reproducible shuffling
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Cost of one tile selection
        #[arg(long, default_value_t = DEFAULT_SELECT_COST)]
        select_cost: i64,

        /// Cost of one tile exchange
        #[arg(long, default_value_t = DEFAULT_CHANGE_COST)]
        change_cost: i64,

        /// Maximum number of selections
        #[arg(long, default_value_t = DEFAULT_MAX_SELECT_TIMES)]
        max_select_times: u32,

        /// Output puzzle path (defaults to `<stem>_puzzle.ppm` beside the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

const fn metric_for(all_channels: bool) -> BorderMetric {
    if all_channels {
        BorderMetric::all_channels()
    } else {
        BorderMetric {
            channels: ChannelPolicy::SkipFirst,
        }
    }
}

fn describe(best: Option<&BestMatch>) -> String {
    best.map_or_else(
        || "none".to_string(),
        |best| format!("{} (score {})", best.position, best.score),
    )
}

/// Executes a parsed command, writing its report to a caller-supplied sink
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded or written, the anchor or
    /// divisions are invalid, scoring fails, or writing the report fails
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Command::Inspect { puzzle } => Self::inspect(puzzle, out),
            Command::Match {
                puzzle,
                row,
                col,
                all_channels,
                first_minimal,
            } => {
                let tie_break = if *first_minimal {
                    TieBreak::FirstMinimal
                } else {
                    REFERENCE_TIE_BREAK
                };
                Self::best_for_anchor(
                    puzzle,
                    TilePosition::new(*row, *col),
                    metric_for(*all_channels),
                    tie_break,
                    out,
                )
            }
            Command::Matrix {
                puzzle,
                all_channels,
            } => self.matrix(puzzle, metric_for(*all_channels), out),
            Command::Scramble {
                image,
                div_x,
                div_y,
                seed,
                select_cost,
                change_cost,
                max_select_times,
                output,
            } => {
                let metadata = PuzzleMetadata {
                    div_x: *div_x,
                    div_y: *div_y,
                    change_cost: *change_cost,
                    select_cost: *select_cost,
                    max_select_times: *max_select_times,
                };
                let output = output
                    .clone()
                    .unwrap_or_else(|| Self::get_output_path(image));
                Self::scramble(image, &output, &metadata, *seed, out)
            }
        }
    }

    fn inspect<W: Write>(path: &Path, out: &mut W) -> Result<()> {
        let puzzle = load_puzzle(path)?;
        let view = puzzle.view()?;
        let metadata = &puzzle.metadata;

        writeln!(out, "columns (div_x):  {}", metadata.div_x)?;
        writeln!(out, "rows (div_y):     {}", metadata.div_y)?;
        writeln!(out, "change cost:      {}", metadata.change_cost)?;
        writeln!(out, "select cost:      {}", metadata.select_cost)?;
        writeln!(out, "max selections:   {}", metadata.max_select_times)?;
        writeln!(
            out,
            "image size:       {}x{}",
            puzzle.grid.width(),
            puzzle.grid.height()
        )?;
        writeln!(
            out,
            "tile size:        {}x{}",
            view.tile_width(),
            view.tile_height()
        )?;
        Ok(())
    }

    fn best_for_anchor<W: Write>(
        path: &Path,
        anchor: TilePosition,
        metric: BorderMetric,
        tie_break: TieBreak,
        out: &mut W,
    ) -> Result<()> {
        let puzzle = load_puzzle(path)?;
        let view = puzzle.view()?;

        for (direction, best) in best_matches(&view, anchor, &metric, tie_break)? {
            writeln!(
                out,
                "{anchor} {direction:<5} -> {}",
                describe(best.as_ref())
            )?;
        }
        Ok(())
    }

    fn matrix<W: Write>(&self, path: &Path, metric: BorderMetric, out: &mut W) -> Result<()> {
        let start_time = Instant::now();
        let puzzle = load_puzzle(path)?;
        let view = puzzle.view()?;

        let progress = if self.cli.should_show_progress() {
            ScoringProgress::new(view.tile_count())
        } else {
            ScoringProgress::hidden(view.tile_count())
        };
        let matrix =
            ScoreMatrix::compute_with_progress(&view, &metric, || progress.anchor_done())?;
        progress.finish();
        log::info!(
            "Scored {} tile pairs in {:.2?}",
            view.tile_count() * view.tile_count().saturating_sub(1),
            start_time.elapsed()
        );

        for anchor in view.positions() {
            write!(out, "{anchor}")?;
            for direction in Direction::ALL {
                let best = matrix.best_match(anchor, direction, REFERENCE_TIE_BREAK)?;
                write!(out, " {direction}={}", describe(best.as_ref()))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn scramble<W: Write>(
        image: &Path,
        output: &Path,
        metadata: &PuzzleMetadata,
        seed: u64,
        out: &mut W,
    ) -> Result<()> {
        let grid = load_image(image)?;
        let scrambled = scramble(&grid, metadata.div_x, metadata.div_y, seed)?;
        save_puzzle(output, metadata, &scrambled.grid)?;

        writeln!(out, "wrote {}", output.display())?;
        for (index, origin) in scrambled.origins.iter().enumerate() {
            let position = TilePosition::from_index(index, metadata.div_x);
            writeln!(out, "{position} <- {origin}")?;
        }
        Ok(())
    }

    /// Default output path for a scrambled puzzle made from `input_path`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            PUZZLE_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
