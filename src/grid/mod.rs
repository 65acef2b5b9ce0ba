//! Grid inference from wall segments.
//!
//! - [`matching`]: greedy one-to-one pairing of left/right outer walls.
//! - [`bands`]: group mask segments into horizontal row bands.
//! - [`rows`]: row count from clustered wall midpoints.
//! - [`solver`]: integer `(cols, hex_width)` search with brute-force and
//!   fixed fallbacks, plus the vertical layout.

pub mod bands;
pub mod matching;
pub mod rows;
pub mod solver;

pub use bands::{band_wall_pitch, group_row_bands, RowBand};
pub use matching::{match_pairs, MatchedPair, MatchingOptions};
pub use rows::{count_rows, RowCluster, RowEstimate, RowOptions};
pub use solver::{
    match_pair, select_candidate, solve_brute_force, solve_matched_pairs, vertical_layout,
    width_explains_pair, width_fits_cols, BruteForceSolution, ColumnCandidate, ColumnSolution,
    ColumnSolver, FallbackGrid, SolveStrategy, SolverOptions, SolverOutcome, VerticalLayout,
};
