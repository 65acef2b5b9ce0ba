//! Parameter types configuring the analysis stages.
//!
//! Every group deserializes with `#[serde(default)]`, so a JSON config only
//! needs to name the knobs it changes.

use crate::boundary::ProjectionOptions;
use crate::grid::{MatchingOptions, RowOptions, SolverOptions};
use crate::segments::SegmentOptions;
use serde::{Deserialize, Serialize};

/// Analyzer-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    /// First-hit projections and the vertical-structure mask.
    pub projection: ProjectionOptions,
    /// Continuity and length rules for wall segments.
    pub segments: SegmentOptions,
    /// Pair and row-band overlap rules.
    pub matching: MatchingOptions,
    /// Column search ranges, tolerances and the fixed fallback grid.
    pub solver: SolverOptions,
    /// Row clustering.
    pub rows: RowOptions,
    /// `hex_height = round(hex_width * height_factor)`. Renderers seen in
    /// practice use 1.0, 1.15 and `sqrt(5) * 0.75`.
    pub height_factor: f32,
    /// Optional hint feeding the square-root tile-count estimate in the
    /// trace. Never used by the column solver.
    pub expected_tile_count: Option<usize>,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            projection: ProjectionOptions::default(),
            segments: SegmentOptions::default(),
            matching: MatchingOptions::default(),
            solver: SolverOptions::default(),
            rows: RowOptions::default(),
            height_factor: 1.0,
            expected_tile_count: None,
        }
    }
}
