use super::stages::{InputDescriptor, MatchingStage, ProjectionStage, SegmentStage, SolverStage};
use super::timing::TimingBreakdown;
use crate::types::GridParams;
use serde::Serialize;

/// Result of [`HexGridAnalyzer::analyze_with_diagnostics`](crate::HexGridAnalyzer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub grid: GridParams,
    pub trace: AnalysisTrace,
}

/// Typed record of every stage an analysis executed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub projection: ProjectionStage,
    pub segments: SegmentStage,
    pub matching: MatchingStage,
    pub solver: SolverStage,
    /// Square-root estimate from the expected tile count, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_count_estimate: Option<GridParams>,
}

impl AnalysisReport {
    /// Multi-line human readable summary used by the demo tool.
    pub fn summary(&self) -> String {
        let g = &self.grid;
        let t = &self.trace;
        let b = &t.projection.boundary;
        let mut lines = vec![
            format!(
                "input {}x{} ({} edge px), boundary l={} t={} r={} b={} ({}x{})",
                t.input.width,
                t.input.height,
                t.input.edge_pixels,
                b.left,
                b.top,
                b.right,
                b.bottom,
                b.width,
                b.height
            ),
            format!(
                "segments left={} right={} mask={}, pairs={}, row bands={}",
                t.segments.left.len(),
                t.segments.right.len(),
                t.segments.mask.len(),
                t.matching.pairs.len(),
                t.matching.row_bands.len()
            ),
            format!(
                "strategy {:?} (confidence {}), {} cols x {} rows = {} positions",
                t.solver.outcome.solution.strategy,
                t.solver.outcome.solution.confidence,
                g.cols,
                g.rows,
                g.cols * g.rows
            ),
            format!(
                "hex {}x{}, spacing {:.1}x{:.1}, start ({:.1}, {:.1}), row offset {:.1}",
                g.hex_width,
                g.hex_height,
                g.spacing_x,
                g.spacing_y,
                g.start_x,
                g.start_y,
                g.row_offset
            ),
        ];
        if let Some(est) = &t.tile_count_estimate {
            lines.push(format!(
                "tile-count estimate {} cols x {} rows, hex {}x{}",
                est.cols, est.rows, est.hex_width, est.hex_height
            ));
        }
        lines.push(format!("total {:.3} ms", t.timings.total_ms));
        lines.join("\n")
    }
}
