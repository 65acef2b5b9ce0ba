//! Analyzer pipeline driving grid inference end-to-end.
//!
//! The [`HexGridAnalyzer`] takes a binary edge raster and returns
//! [`GridParams`]. Stages run in a fixed order:
//!
//! 1. directional first-hit projections and their bounding box,
//! 2. per-side wall tracing and full-mask segment extraction,
//! 3. span measurement, pair matching and row-band grouping,
//! 4. the column solver (matched pairs, then brute force, then a fixed grid),
//! 5. row counting, vertical layout and assembly.
//!
//! Typical usage:
//! ```no_run
//! use hex_grid_detector::{AnalyzerParams, HexGridAnalyzer};
//! use hex_grid_detector::image::io::load_edge_raster;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let edges = load_edge_raster("edges.png".as_ref())?;
//! let analyzer = HexGridAnalyzer::new(AnalyzerParams::default());
//! let report = analyzer.analyze_with_diagnostics(&edges)?;
//! println!("{} cols x {} rows", report.grid.cols, report.grid.rows);
//! # Ok(())
//! # }
//! ```
use super::assemble::assemble_grid;
use super::fallback::estimate_from_tile_count;
use super::params::AnalyzerParams;
use crate::boundary::{measure_spans, BoundaryBox, DirectionalProjector};
use crate::diagnostics::{
    emit_record, AnalysisReport, AnalysisTrace, DebugSink, InputDescriptor, MatchingStage,
    NullSink, ProjectionStage, RasterCount, SegmentStage, SolverStage, TimingBreakdown,
};
use crate::error::AnalysisError;
use crate::grid::{
    band_wall_pitch, count_rows, group_row_bands, match_pairs, ColumnSolver, SolveStrategy,
};
use crate::image::{BinaryImage, ImageU8};
use crate::segments::{extract_mask_segments, extract_side_segments, SegmentIdAllocator, WallSide};
use crate::types::GridParams;
use log::{debug, info, warn};
use std::time::Instant;

/// Hex grid analyzer. Stateless between calls; the same raster always yields
/// the same grid.
#[derive(Clone, Debug, Default)]
pub struct HexGridAnalyzer {
    params: AnalyzerParams,
}

impl HexGridAnalyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Infer the grid of `raster`.
    pub fn analyze(&self, raster: &BinaryImage) -> Result<GridParams, AnalysisError> {
        self.analyze_with_sink(raster, &mut NullSink)
            .map(|report| report.grid)
    }

    /// Threshold an 8-bit edge view (nonzero = edge) and analyze it.
    pub fn analyze_u8(&self, gray: &ImageU8<'_>) -> Result<GridParams, AnalysisError> {
        self.analyze(&BinaryImage::from_u8(gray))
    }

    /// Infer the grid and return the full stage trace.
    pub fn analyze_with_diagnostics(&self, raster: &BinaryImage) -> Result<AnalysisReport, AnalysisError> {
        self.analyze_with_sink(raster, &mut NullSink)
    }

    /// Like [`Self::analyze_with_diagnostics`], additionally handing rasters
    /// and stage records to `sink`.
    pub fn analyze_with_sink(
        &self,
        raster: &BinaryImage,
        sink: &mut dyn DebugSink,
    ) -> Result<AnalysisReport, AnalysisError> {
        let p = &self.params;
        debug!(
            "HexGridAnalyzer::analyze start w={} h={} thickness={}",
            raster.w, raster.h, p.projection.edge_thickness
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let input = InputDescriptor {
            width: raster.w,
            height: raster.h,
            edge_pixels: raster.count_set(),
        };

        // Boundary.
        let projector = DirectionalProjector::new(p.projection);
        let (projections, boundary_image) = timings.time("projection", || {
            let projections = projector.project(raster);
            let combined = projections.combined();
            (projections, combined)
        });
        if sink.enabled() {
            for (label, image) in projections.labelled() {
                sink.raster(label, image);
            }
            sink.raster("boundary", &boundary_image);
        }
        let Some(boundary) = BoundaryBox::from_raster(&boundary_image) else {
            warn!(
                "HexGridAnalyzer: empty boundary ({} edge px in {}x{})",
                input.edge_pixels, input.width, input.height
            );
            return Err(AnalysisError::NoBoundaryFound);
        };
        debug!(
            "boundary l={} t={} r={} b={} w={} h={}",
            boundary.left, boundary.top, boundary.right, boundary.bottom, boundary.width, boundary.height
        );

        // Segments.
        let mut ids = SegmentIdAllocator::default();
        let (left, right, mask) = timings.time("segments", || {
            let left = extract_side_segments(&projections.left_vertical, WallSide::Left, &p.segments, &mut ids);
            let right = extract_side_segments(&projections.right_vertical, WallSide::Right, &p.segments, &mut ids);
            let mask = extract_mask_segments(&projections.vertical_mask, &p.segments, &mut ids);
            (left, right, mask)
        });
        let wall_extent = left
            .iter()
            .map(|s| s.x)
            .min()
            .zip(right.iter().map(|s| s.x).max());
        let spans = measure_spans(&boundary_image, wall_extent);

        // Pairs and bands.
        let (pairs, row_bands) = timings.time("matching", || {
            let pairs = match_pairs(&left, &right, p.matching.min_overlap);
            let bands = group_row_bands(&mask, p.matching.min_overlap, p.matching.min_band_segments);
            (pairs, bands)
        });

        // Columns, then rows.
        let solver = ColumnSolver::new(p.solver);
        let outcome = timings.time("solver", || {
            let pitch = band_wall_pitch(&row_bands, &mask, p.segments.x_tolerance);
            solver.solve(&pairs, boundary.width as f64, spans.max_horizontal_span as f64, pitch)
        });
        let rows_start = Instant::now();
        let row_estimate = match outcome.solution.strategy {
            SolveStrategy::Fallback => None,
            _ => Some(count_rows(&mask, boundary.height, &p.rows)?),
        };
        let rows = row_estimate
            .as_ref()
            .map_or(p.solver.fallback.rows, |est| est.rows);
        let layout = outcome.solution.layout(rows, boundary.height, p.height_factor);
        let grid = assemble_grid(&boundary, &outcome.solution, &layout);
        timings.push("rows", rows_start.elapsed().as_secs_f64() * 1000.0);

        let tile_count_estimate = p
            .expected_tile_count
            .and_then(|n| estimate_from_tile_count(&boundary, n));
        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        info!(
            "HexGridAnalyzer: {} cols x {} rows, hex {}x{}, spacing {:.1}x{:.1} via {:?} in {:.3} ms",
            grid.cols,
            grid.rows,
            grid.hex_width,
            grid.hex_height,
            grid.spacing_x,
            grid.spacing_y,
            outcome.solution.strategy,
            timings.total_ms
        );

        let trace = AnalysisTrace {
            input,
            timings,
            projection: ProjectionStage {
                boundary,
                spans,
                rasters: projections
                    .labelled()
                    .iter()
                    .map(|(label, image)| RasterCount {
                        label: label.to_string(),
                        pixels: image.count_set(),
                    })
                    .collect(),
            },
            segments: SegmentStage { left, right, mask },
            matching: MatchingStage { pairs, row_bands },
            solver: SolverStage {
                outcome,
                rows: row_estimate,
                layout,
            },
            tile_count_estimate,
        };

        if sink.enabled() {
            emit_record(sink, "boundary_box", &trace.projection);
            emit_record(sink, "segments", &trace.segments);
            emit_record(sink, "pairs", &trace.matching);
            emit_record(sink, "solver", &trace.solver);
            emit_record(sink, "grid", &grid);
        }

        Ok(AnalysisReport { grid, trace })
    }
}
