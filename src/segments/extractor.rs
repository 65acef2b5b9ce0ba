use super::merge::merge_runs;
use super::options::SegmentOptions;
use super::profile::{ColumnProfile, WallSide};
use super::segment::{LineSegment, SegmentIdAllocator};
use crate::image::BinaryImage;
use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Unmerged run produced by the continuity scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawRun {
    /// Column of the first row; continuity is judged against it.
    pub anchor_x: usize,
    pub start_y: usize,
    pub end_y: usize,
    /// Rows observed per column.
    pub columns: BTreeMap<usize, usize>,
}

impl RawRun {
    fn start(y: usize, x: usize) -> Self {
        Self {
            anchor_x: x,
            start_y: y,
            end_y: y,
            columns: BTreeMap::from([(x, 1)]),
        }
    }

    fn extend(&mut self, y: usize, x: usize) {
        self.end_y = y;
        *self.columns.entry(x).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.end_y - self.start_y + 1
    }

    /// Most frequently observed column, smaller x on ties.
    pub fn dominant_x(&self) -> usize {
        let mut best = (self.anchor_x, 0usize);
        for (&x, &count) in &self.columns {
            if count > best.1 {
                best = (x, count);
            }
        }
        best.0
    }
}

/// Row-ordered continuity tracker: a run continues while the new column is
/// within `x_tolerance` of its anchor and at most `gap_tolerance` rows were
/// skipped since its last row.
pub(crate) struct ContinuityScanner {
    x_tolerance: usize,
    gap_tolerance: usize,
    current: Option<RawRun>,
    closed: Vec<RawRun>,
}

impl ContinuityScanner {
    pub fn new(options: &SegmentOptions) -> Self {
        Self {
            x_tolerance: options.x_tolerance,
            gap_tolerance: options.gap_tolerance,
            current: None,
            closed: Vec::new(),
        }
    }

    /// Feed the foreground column `x` observed at row `y`. Rows must arrive in
    /// increasing order.
    pub fn push(&mut self, y: usize, x: usize) {
        if let Some(run) = self.current.as_mut() {
            let skipped = y - run.end_y - 1;
            if run.anchor_x.abs_diff(x) <= self.x_tolerance && skipped <= self.gap_tolerance {
                run.extend(y, x);
                return;
            }
        }
        if let Some(done) = self.current.take() {
            self.closed.push(done);
        }
        self.current = Some(RawRun::start(y, x));
    }

    pub fn finish(mut self) -> Vec<RawRun> {
        if let Some(done) = self.current.take() {
            self.closed.push(done);
        }
        self.closed
    }
}

/// Trace the outer wall on one side of the map.
///
/// `raster` is the side's vertical projection (`left_vertical` or
/// `right_vertical`). Each retained segment reports the column its rows
/// most often sat on.
pub fn extract_side_segments(
    raster: &BinaryImage,
    side: WallSide,
    options: &SegmentOptions,
    ids: &mut SegmentIdAllocator,
) -> Vec<LineSegment> {
    let profile = ColumnProfile::from_projection(raster, side);
    let mut scanner = ContinuityScanner::new(options);
    for &(y, x) in profile.entries() {
        scanner.push(y, x);
    }
    let runs = scanner.finish();
    let total = runs.len();
    let segments: Vec<LineSegment> = runs
        .into_iter()
        .filter(|run| run.len() >= options.min_line_length)
        .map(|run| LineSegment::new(ids.next_id(), run.dominant_x(), run.start_y, run.end_y))
        .collect();
    log::debug!(
        "extract_side_segments side={:?} rows={} runs={} kept={}",
        side,
        profile.len(),
        total,
        segments.len()
    );
    segments
}

fn scan_column(mask: &BinaryImage, x: usize, options: &SegmentOptions) -> Vec<RawRun> {
    let mut scanner = ContinuityScanner::new(options);
    for y in mask.column_hits(x) {
        scanner.push(y, x);
    }
    scanner.finish()
}

/// Scan every column of the vertical-structure mask and merge fragmented
/// runs into logical lines.
pub fn extract_mask_segments(
    mask: &BinaryImage,
    options: &SegmentOptions,
    ids: &mut SegmentIdAllocator,
) -> Vec<LineSegment> {
    #[cfg(feature = "parallel")]
    let per_column: Vec<Vec<RawRun>> = (0..mask.w)
        .into_par_iter()
        .map(|x| scan_column(mask, x, options))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let per_column: Vec<Vec<RawRun>> = (0..mask.w)
        .map(|x| scan_column(mask, x, options))
        .collect();

    let raw: Vec<RawRun> = per_column.into_iter().flatten().collect();
    let raw_count = raw.len();
    let merged = merge_runs(raw, options);
    let segments: Vec<LineSegment> = merged
        .into_iter()
        .filter(|m| m.end_y - m.start_y + 1 >= options.min_line_length)
        .map(|m| {
            let mut seg = LineSegment::new(ids.next_id(), m.x, m.start_y, m.end_y);
            seg.thickness = Some(m.max_x - m.min_x + 1);
            seg.component_count = Some(m.components);
            seg
        })
        .collect();
    log::debug!(
        "extract_mask_segments raw={} logical={}",
        raw_count,
        segments.len()
    );
    segments
}
