#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Stage building blocks; public for tools and tests.
pub mod boundary;
pub mod config;
pub mod edges;
pub mod grid;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{AnalyzerParams, HexGridAnalyzer};
pub use crate::error::AnalysisError;
pub use crate::image::BinaryImage;
pub use crate::types::{GridOverrides, GridParams, HexCell};

pub use crate::diagnostics::{AnalysisReport, AnalysisTrace, DebugSink};

/// Infer the hex grid of a binary edge raster with the given parameters.
pub fn analyze(raster: &BinaryImage, params: &AnalyzerParams) -> Result<GridParams, AnalysisError> {
    HexGridAnalyzer::new(params.clone()).analyze(raster)
}

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hex_grid_detector::prelude::*;
///
/// # fn main() -> Result<(), AnalysisError> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let analyzer = HexGridAnalyzer::new(AnalyzerParams::default());
/// let grid = analyzer.analyze_u8(&img)?;
/// println!("{} cols x {} rows, hex {}px", grid.cols, grid.rows, grid.hex_width);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{BinaryImage, ImageU8};
    pub use crate::{analyze, AnalysisError, AnalyzerParams, GridParams, HexGridAnalyzer};
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::boundary::{
        measure_spans, BoundaryBox, DirectionalProjections, DirectionalProjector, SpanMeasurements,
    };
    pub use crate::grid::{
        band_wall_pitch, count_rows, group_row_bands, match_pairs, ColumnCandidate, ColumnSolver,
        MatchedPair, RowBand, SolverOutcome,
    };
    pub use crate::segments::{
        extract_mask_segments, extract_side_segments, ColumnProfile, LineSegment, SegmentId,
    };
}
