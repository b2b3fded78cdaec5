/// Border-difference scoring and seam directions
pub mod adjacency;
/// Pairwise score matrices
pub mod matrix;
/// Seeded tile shuffling for puzzle generation
pub mod scramble;
/// Best-match scans and tie-break policy
pub mod selection;
