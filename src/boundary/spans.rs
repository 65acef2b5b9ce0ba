use crate::image::{BinaryImage, ImageView};
use serde::{Deserialize, Serialize};

/// Where the horizontal span came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanSource {
    /// Outermost left wall to outermost right wall.
    WallSegments,
    /// Widest single row of the boundary image.
    BoundaryRows,
}

/// Coarse extents of the boundary image, used by the brute-force column
/// search when no wall pairs are available.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanMeasurements {
    pub max_horizontal_span: usize,
    pub max_vertical_span: usize,
    pub avg_vertical_span: f32,
    pub source: SpanSource,
}

/// Measure spans of `boundary`.
///
/// `wall_extent` is `(min left wall x, max right wall x)` when both sides
/// produced segments; it takes precedence over the row scan.
pub fn measure_spans(boundary: &BinaryImage, wall_extent: Option<(usize, usize)>) -> SpanMeasurements {
    let (max_horizontal_span, source) = match wall_extent {
        Some((left, right)) if right > left => (right - left, SpanSource::WallSegments),
        _ => (widest_row(boundary), SpanSource::BoundaryRows),
    };

    let mut max_vertical_span = 0usize;
    let mut total = 0usize;
    let mut columns = 0usize;
    for x in 0..boundary.w {
        let mut hits = boundary.column_hits(x);
        let Some(first) = hits.next() else { continue };
        let Some(last) = hits.last() else { continue };
        let span = last - first;
        max_vertical_span = max_vertical_span.max(span);
        total += span;
        columns += 1;
    }
    let avg_vertical_span = if columns > 0 {
        total as f32 / columns as f32
    } else {
        0.0
    };

    SpanMeasurements {
        max_horizontal_span,
        max_vertical_span,
        avg_vertical_span,
        source,
    }
}

fn widest_row(boundary: &BinaryImage) -> usize {
    boundary
        .rows()
        .filter_map(|row| {
            let first = row.iter().position(|&v| v)?;
            let last = row.iter().rposition(|&v| v)?;
            (last > first).then_some(last - first)
        })
        .max()
        .unwrap_or(0)
}
