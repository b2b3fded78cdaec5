//! Tests for best-match scans and the last-minimal tie-break policy

#[cfg(test)]
mod tests {
    use seamscore::algorithm::selection::{
        REFERENCE_TIE_BREAK, TieBreak, best_match, best_matches, select_minimum,
    };
    use seamscore::{BorderMetric, Direction, PixelGrid, PuzzleError, PuzzleView, TilePosition};

    // One row of 2x2 tiles; pixel (r, c) = [0, 10c, 10c]
    fn gradient_grid(tiles: usize) -> PixelGrid {
        let width = tiles * 2;
        let samples = (0..2)
            .flat_map(|_row| (0..width).flat_map(|col| [0, (col * 10) as u8, (col * 10) as u8]))
            .collect();
        PixelGrid::new(2, width, 3, samples).unwrap()
    }

    fn precomputed_scores() -> Vec<(TilePosition, f64)> {
        let scores = [5.0, 2.0, 7.0, 2.0, 9.0, 2.0, 8.0, 3.0, 4.0];
        scores
            .iter()
            .enumerate()
            .map(|(index, &score)| (TilePosition::from_index(index, 3), score))
            .collect()
    }

    // Tests the reference policy is last-minimal
    // Verified by switching the constant to first-minimal
    #[test]
    fn test_reference_policy() {
        assert_eq!(REFERENCE_TIE_BREAK, TieBreak::LastMinimal);
        assert!(TieBreak::LastMinimal.replaces(2.0, 2.0));
        assert!(!TieBreak::FirstMinimal.replaces(2.0, 2.0));
        assert!(TieBreak::FirstMinimal.replaces(1.0, 2.0));
        assert!(!TieBreak::LastMinimal.replaces(3.0, 2.0));
    }

    // Tests a known 3x3 score table picks the last of three tied minima
    // Verified by using strict comparison in the scan
    #[test]
    fn test_last_minimal_on_known_scores() {
        let best = select_minimum(precomputed_scores(), REFERENCE_TIE_BREAK).unwrap();
        assert_eq!(best.position, TilePosition::new(1, 2));
        assert_eq!(best.score, 2.0);

        let first = select_minimum(precomputed_scores(), TieBreak::FirstMinimal).unwrap();
        assert_eq!(first.position, TilePosition::new(0, 1));
        assert_eq!(first.score, 2.0);
    }

    // Tests an empty candidate list has no winner
    // Verified by returning a default position
    #[test]
    fn test_select_minimum_empty() {
        assert!(select_minimum(Vec::new(), REFERENCE_TIE_BREAK).is_none());
    }

    // Tests the scan excludes the anchor and honours the tie-break on a flat puzzle
    // Verified by including the anchor in the scan
    #[test]
    fn test_uniform_puzzle_tie_break() {
        let grid = PixelGrid::uniform(6, 6, &[1, 2, 3]).unwrap();
        let puzzle = PuzzleView::new(&grid, 3, 3).unwrap();
        let metric = BorderMetric::default();

        let center = TilePosition::new(1, 1);
        let last = best_match(&puzzle, center, Direction::Right, &metric, REFERENCE_TIE_BREAK)
            .unwrap()
            .unwrap();
        assert_eq!(last.position, TilePosition::new(2, 2));

        let corner = TilePosition::new(2, 2);
        let before_anchor = best_match(&puzzle, corner, Direction::Up, &metric, REFERENCE_TIE_BREAK)
            .unwrap()
            .unwrap();
        assert_eq!(before_anchor.position, TilePosition::new(2, 1));

        let first = best_match(
            &puzzle,
            TilePosition::new(0, 0),
            Direction::Down,
            &metric,
            TieBreak::FirstMinimal,
        )
        .unwrap()
        .unwrap();
        assert_eq!(first.position, TilePosition::new(0, 1));
    }

    // Tests the true neighbour wins on a horizontal gradient
    // Verified by maximising instead of minimising
    #[test]
    fn test_gradient_neighbours() {
        let grid = gradient_grid(3);
        let puzzle = PuzzleView::new(&grid, 3, 1).unwrap();
        let metric = BorderMetric::default();

        let right = best_match(
            &puzzle,
            TilePosition::new(0, 0),
            Direction::Right,
            &metric,
            REFERENCE_TIE_BREAK,
        )
        .unwrap()
        .unwrap();
        assert_eq!(right.position, TilePosition::new(0, 1));
        assert_eq!(right.score, 40.0);

        let left = best_match(
            &puzzle,
            TilePosition::new(0, 2),
            Direction::Left,
            &metric,
            REFERENCE_TIE_BREAK,
        )
        .unwrap()
        .unwrap();
        assert_eq!(left.position, TilePosition::new(0, 1));
        assert_eq!(left.score, 40.0);
    }

    // Tests anchors outside the partition are rejected
    // Verified by skipping the anchor bounds check
    #[test]
    fn test_anchor_out_of_range() {
        let grid = gradient_grid(2);
        let puzzle = PuzzleView::new(&grid, 2, 1).unwrap();

        let result = best_match(
            &puzzle,
            TilePosition::new(1, 0),
            Direction::Right,
            &BorderMetric::default(),
            REFERENCE_TIE_BREAK,
        );
        assert!(matches!(
            result,
            Err(PuzzleError::OutOfRange {
                target: "anchor tile",
                ..
            })
        ));
    }

    // Tests a single-tile puzzle has no candidates
    // Verified by allowing the anchor as its own candidate
    #[test]
    fn test_single_tile_has_no_match() {
        let grid = gradient_grid(1);
        let puzzle = PuzzleView::new(&grid, 1, 1).unwrap();

        let result = best_match(
            &puzzle,
            TilePosition::new(0, 0),
            Direction::Down,
            &BorderMetric::default(),
            REFERENCE_TIE_BREAK,
        )
        .unwrap();
        assert!(result.is_none());
    }

    // Tests all four directions are reported in scan order
    // Verified by reversing the direction list
    #[test]
    fn test_best_matches_directions() {
        let grid = gradient_grid(3);
        let puzzle = PuzzleView::new(&grid, 3, 1).unwrap();

        let matches = best_matches(
            &puzzle,
            TilePosition::new(0, 1),
            &BorderMetric::default(),
            REFERENCE_TIE_BREAK,
        )
        .unwrap();

        let directions: Vec<Direction> = matches.iter().map(|(direction, _)| *direction).collect();
        assert_eq!(directions, Direction::ALL.to_vec());
        for (direction, best) in matches {
            let expected = best_match(
                &puzzle,
                TilePosition::new(0, 1),
                direction,
                &BorderMetric::default(),
                REFERENCE_TIE_BREAK,
            )
            .unwrap();
            assert_eq!(best, expected);
        }
    }
}
