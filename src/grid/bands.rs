//! Grouping of wall segments into horizontal row bands.
use crate::segments::{overlap_rows, LineSegment, SegmentId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Segments occupying a common range of rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowBand {
    pub start_y: usize,
    pub end_y: usize,
    pub segments: Vec<SegmentId>,
}

impl RowBand {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn y_range(&self) -> usize {
        self.end_y - self.start_y + 1
    }
}

/// Group segments into row bands.
///
/// Segments are visited by start row. The earliest unused one seeds a band;
/// a single pass then absorbs every other unused segment sharing at least
/// `min_overlap` rows with the band, widening the band as it goes. Bands
/// with fewer than `min_segments` members are dropped, the rest are ordered
/// by `(segment_count, y_range)` descending.
pub fn group_row_bands(segments: &[LineSegment], min_overlap: usize, min_segments: usize) -> Vec<RowBand> {
    let mut order: Vec<usize> = (0..segments.len()).collect();
    order.sort_by_key(|&i| (segments[i].start_y, segments[i].x, segments[i].id));

    let mut used = vec![false; segments.len()];
    let mut bands = Vec::new();
    for (pos, &seed) in order.iter().enumerate() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let mut band = RowBand {
            start_y: segments[seed].start_y,
            end_y: segments[seed].end_y,
            segments: vec![segments[seed].id],
        };
        for &i in &order[pos + 1..] {
            if used[i] {
                continue;
            }
            let s = &segments[i];
            if overlap_rows((band.start_y, band.end_y), (s.start_y, s.end_y)) >= min_overlap as i64 {
                used[i] = true;
                band.start_y = band.start_y.min(s.start_y);
                band.end_y = band.end_y.max(s.end_y);
                band.segments.push(s.id);
            }
        }
        if band.segment_count() >= min_segments {
            bands.push(band);
        }
    }
    bands.sort_by(|a, b| {
        (b.segment_count(), b.y_range()).cmp(&(a.segment_count(), a.y_range()))
    });
    log::debug!(
        "group_row_bands segments={} bands={}",
        segments.len(),
        bands.len()
    );
    bands
}

/// Median distance between neighbouring walls within a band.
///
/// Walls closer than `min_gap` count as one. In every row the walls of
/// adjacent tiles are one tile apart, so this is the tile pitch. `None` when
/// no band holds two distinct walls.
pub fn band_wall_pitch(bands: &[RowBand], segments: &[LineSegment], min_gap: usize) -> Option<f64> {
    let x_of: BTreeMap<SegmentId, usize> = segments.iter().map(|s| (s.id, s.x)).collect();
    let mut gaps = Vec::new();
    for band in bands {
        let mut xs: Vec<usize> = band.segments.iter().filter_map(|id| x_of.get(id).copied()).collect();
        xs.sort_unstable();
        gaps.extend(xs.windows(2).map(|w| w[1] - w[0]).filter(|&g| g > min_gap));
    }
    if gaps.is_empty() {
        return None;
    }
    gaps.sort_unstable();
    Some(gaps[gaps.len() / 2] as f64)
}
