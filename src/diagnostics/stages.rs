use crate::boundary::{BoundaryBox, SpanMeasurements};
use crate::grid::{MatchedPair, RowBand, RowEstimate, SolverOutcome, VerticalLayout};
use crate::segments::LineSegment;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub edge_pixels: usize,
}

/// Foreground pixel count of one labelled raster.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterCount {
    pub label: String,
    pub pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionStage {
    pub boundary: BoundaryBox,
    pub spans: SpanMeasurements,
    pub rasters: Vec<RasterCount>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStage {
    pub left: Vec<LineSegment>,
    pub right: Vec<LineSegment>,
    pub mask: Vec<LineSegment>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingStage {
    pub pairs: Vec<MatchedPair>,
    pub row_bands: Vec<RowBand>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverStage {
    pub outcome: SolverOutcome,
    /// Absent when the fixed fallback grid was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<RowEstimate>,
    pub layout: VerticalLayout,
}
