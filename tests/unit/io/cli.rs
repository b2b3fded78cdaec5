//! Tests for argument parsing and command execution

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use seamscore::io::cli::{Cli, Command, Runner};
    use seamscore::io::configuration::{DEFAULT_ANCHOR_COL, DEFAULT_ANCHOR_ROW, DEFAULT_SEED};
    use seamscore::io::image::{load_puzzle, save_puzzle};
    use seamscore::io::metadata::PuzzleMetadata;
    use seamscore::{PixelGrid, PuzzleError};
    use std::path::{Path, PathBuf};

    fn run(args: &[&str]) -> Result<String, PuzzleError> {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        Runner::new(cli).run(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    // Two rows of 1x2 tiles; tile (0, 1) continues tile (0, 0) exactly
    fn write_sample_puzzle(path: &Path) {
        let mut samples = Vec::new();
        for pixel in [
            [0, 10, 10],
            [0, 20, 20],
            [0, 20, 20],
            [0, 90, 90],
            [0, 200, 200],
            [0, 50, 50],
            [0, 140, 140],
            [0, 250, 250],
        ] {
            samples.extend_from_slice(&pixel);
        }
        let grid = PixelGrid::new(2, 4, 3, samples).unwrap();
        let metadata = PuzzleMetadata {
            div_x: 2,
            div_y: 2,
            change_cost: 3,
            select_cost: 7,
            max_select_times: 5,
        };
        save_puzzle(path, &metadata, &grid).unwrap();
    }

    // Tests match defaults come from the configuration constants
    // Verified by changing a default value
    #[test]
    fn test_match_defaults() {
        let cli = Cli::try_parse_from(["seamscore", "match", "p.ppm"]).unwrap();
        assert!(cli.should_show_progress());

        match cli.command {
            Command::Match {
                puzzle,
                row,
                col,
                all_channels,
                first_minimal,
            } => {
                assert_eq!(puzzle, PathBuf::from("p.ppm"));
                assert_eq!((row, col), (DEFAULT_ANCHOR_ROW, DEFAULT_ANCHOR_COL));
                assert!(!all_channels);
                assert!(!first_minimal);
            }
            _ => panic!("expected match command"),
        }
    }

    // Tests scramble flags and the global quiet switch parse
    // Verified by dropping the global attribute
    #[test]
    fn test_scramble_arguments() {
        let cli = Cli::try_parse_from([
            "seamscore", "scramble", "in.png", "-x", "4", "-y", "3", "--quiet",
        ])
        .unwrap();
        assert!(!cli.should_show_progress());

        match cli.command {
            Command::Scramble {
                div_x,
                div_y,
                seed,
                output,
                ..
            } => {
                assert_eq!((div_x, div_y), (4, 3));
                assert_eq!(seed, DEFAULT_SEED);
                assert!(output.is_none());
            }
            _ => panic!("expected scramble command"),
        }

        assert!(Cli::try_parse_from(["seamscore", "scramble", "in.png"]).is_err());
        assert!(Cli::try_parse_from(["seamscore"]).is_err());
    }

    // Tests the default puzzle path sits beside the source image
    // Verified by dropping the parent directory
    #[test]
    fn test_get_output_path() {
        assert_eq!(
            Runner::get_output_path(Path::new("images/photo.png")),
            PathBuf::from("images/photo_puzzle.ppm")
        );
        assert_eq!(
            Runner::get_output_path(Path::new("photo.jpg")),
            PathBuf::from("photo_puzzle.ppm")
        );
    }

    // Tests inspect reports metadata and tile geometry
    // Verified by swapping width and height in the tile size
    #[test]
    fn test_inspect_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.ppm");
        write_sample_puzzle(&path);

        let report = run(&["seamscore", "inspect", path.to_str().unwrap()]).unwrap();
        assert!(report.contains("columns (div_x):  2"));
        assert!(report.contains("select cost:      7"));
        assert!(report.contains("image size:       4x2"));
        assert!(report.contains("tile size:        2x1"));
    }

    // Tests match prints one line per direction with the best candidate
    // Verified by including the anchor in its own scan
    #[test]
    fn test_match_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.ppm");
        write_sample_puzzle(&path);

        let report = run(&["seamscore", "match", path.to_str().unwrap()]).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "(0, 0) right -> (0, 1) (score 0)");
        assert!(lines[1].starts_with("(0, 0) up    -> "));
        assert!(lines[2].starts_with("(0, 0) left  -> "));
        assert!(lines[3].starts_with("(0, 0) down  -> "));
    }

    // Tests an anchor outside the puzzle is reported as an error
    // Verified by clamping the anchor into range
    #[test]
    fn test_match_rejects_bad_anchor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.ppm");
        write_sample_puzzle(&path);

        let result = run(&["seamscore", "match", path.to_str().unwrap(), "-r", "5"]);
        assert!(matches!(result, Err(PuzzleError::OutOfRange { .. })));
    }

    // Tests matrix prints every tile with all four directions
    // Verified by skipping the last tile row
    #[test]
    fn test_matrix_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.ppm");
        write_sample_puzzle(&path);

        let report = run(&["seamscore", "matrix", "-q", path.to_str().unwrap()]).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("(0, 0) right=(0, 1) (score 0)"));
        for line in &lines {
            for direction in ["right=", "up=", "left=", "down="] {
                assert!(line.contains(direction), "{line}");
            }
        }
    }

    // Tests scramble writes a loadable puzzle and lists tile origins
    // Verified by saving the unshuffled grid
    #[test]
    fn test_scramble_writes_puzzle() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("gradient.png");
        RgbImage::from_fn(8, 6, |x, y| Rgb([(x * 30) as u8, (y * 40) as u8, 7]))
            .save(&source)
            .unwrap();
        let output = dir.path().join("out").join("scrambled.ppm");

        let report = run(&[
            "seamscore",
            "scramble",
            source.to_str().unwrap(),
            "-x",
            "4",
            "-y",
            "3",
            "--select-cost",
            "2",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        assert!(report.starts_with("wrote "));
        assert_eq!(report.lines().count(), 1 + 12);

        let puzzle = load_puzzle(&output).unwrap();
        assert_eq!((puzzle.metadata.div_x, puzzle.metadata.div_y), (4, 3));
        assert_eq!(puzzle.metadata.select_cost, 2);
        assert_eq!((puzzle.grid.width(), puzzle.grid.height()), (8, 6));
    }

    // Tests scramble without an output path uses the default location
    // Verified by writing into the working directory
    #[test]
    fn test_scramble_default_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("flat.png");
        RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])).save(&source).unwrap();

        run(&[
            "seamscore",
            "scramble",
            source.to_str().unwrap(),
            "-x",
            "2",
            "-y",
            "2",
        ])
        .unwrap();

        assert!(dir.path().join("flat_puzzle.ppm").exists());
    }
}
