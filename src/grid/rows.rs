//! Row count from vertical clustering of wall midpoints.
use crate::error::AnalysisError;
use crate::segments::LineSegment;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowOptions {
    /// Only segments strictly longer than this contribute a midpoint.
    pub min_segment_length: usize,
    /// Midpoint gaps larger than `total_height / gap_divisor` separate rows.
    pub gap_divisor: f32,
    pub min_rows: usize,
    pub max_rows: usize,
    /// Row count used when no segment qualifies.
    pub rows_without_evidence: usize,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            min_segment_length: 20,
            gap_divisor: 15.0,
            min_rows: 5,
            max_rows: 20,
            rows_without_evidence: 7,
        }
    }
}

/// Consecutive midpoints no further apart than the gap threshold.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowCluster {
    pub min_y: f32,
    pub max_y: f32,
    pub members: usize,
}

impl RowCluster {
    pub fn center_y(&self) -> f32 {
        0.5 * (self.min_y + self.max_y)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowEstimate {
    pub rows: usize,
    pub gap_threshold: f32,
    /// Segments that contributed a midpoint.
    pub evidence: usize,
    pub clusters: Vec<RowCluster>,
}

fn cluster_1d(mut values: Vec<f32>, eps: f32) -> Vec<RowCluster> {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut clusters: Vec<RowCluster> = Vec::new();
    for v in values {
        match clusters.last_mut() {
            Some(cur) if v - cur.max_y <= eps => {
                cur.max_y = v;
                cur.members += 1;
            }
            _ => clusters.push(RowCluster {
                min_y: v,
                max_y: v,
                members: 1,
            }),
        }
    }
    clusters
}

/// Count rows from the midpoints of the full-mask wall segments.
///
/// `rows = max(min_rows, gaps + 1)` where a gap is a jump between sorted
/// midpoints larger than `total_height / gap_divisor`. Exceeding `max_rows`
/// is a hard error.
pub fn count_rows(
    segments: &[LineSegment],
    total_height: usize,
    options: &RowOptions,
) -> Result<RowEstimate, AnalysisError> {
    let gap_threshold = total_height as f32 / options.gap_divisor;
    let midpoints: Vec<f32> = segments
        .iter()
        .filter(|s| s.length > options.min_segment_length)
        .map(LineSegment::midpoint_y)
        .collect();
    let evidence = midpoints.len();
    if midpoints.is_empty() {
        log::warn!(
            "count_rows: no segment longer than {}px, using {} rows",
            options.min_segment_length,
            options.rows_without_evidence
        );
        return Ok(RowEstimate {
            rows: options.rows_without_evidence,
            gap_threshold,
            evidence,
            clusters: Vec::new(),
        });
    }

    let clusters = cluster_1d(midpoints, gap_threshold);
    let counted = clusters.len();
    if counted > options.max_rows {
        return Err(AnalysisError::TooManyRows {
            rows: counted,
            max_rows: options.max_rows,
        });
    }
    let rows = counted.max(options.min_rows);
    log::debug!(
        "count_rows evidence={} clusters={} threshold={:.2} rows={}",
        evidence,
        counted,
        gap_threshold,
        rows
    );
    Ok(RowEstimate {
        rows,
        gap_threshold,
        evidence,
        clusters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::SegmentId;

    /// `per_row` walls of 30 rows centred on each of `centers`.
    fn walls(centers: &[usize], per_row: usize) -> Vec<LineSegment> {
        let mut out = Vec::new();
        for &c in centers {
            for k in 0..per_row {
                let id = SegmentId(out.len() as u32);
                out.push(LineSegment::new(id, 20 + 60 * k, c - 15, c + 15));
            }
        }
        out
    }

    #[test]
    fn five_separated_clusters_give_five_rows() {
        let segs = walls(&[40, 110, 180, 250, 320], 4);
        let est = count_rows(&segs, 340, &RowOptions::default()).unwrap();
        assert_eq!(est.rows, 5);
        assert_eq!(est.clusters.len(), 5);
        assert_eq!(est.evidence, 20);
        assert!((est.clusters[2].center_y() - 180.0).abs() < 1e-3);
    }

    #[test]
    fn rows_never_drop_below_minimum() {
        let segs = walls(&[50, 150], 3);
        let est = count_rows(&segs, 200, &RowOptions::default()).unwrap();
        assert_eq!(est.clusters.len(), 2);
        assert_eq!(est.rows, 5);
    }

    #[test]
    fn short_segments_are_not_evidence() {
        let segs = vec![LineSegment::new(SegmentId(0), 10, 0, 19)];
        let est = count_rows(&segs, 100, &RowOptions::default()).unwrap();
        assert_eq!(est.evidence, 0);
        assert_eq!(est.rows, 7);
    }

    #[test]
    fn too_many_rows_is_a_structured_error() {
        let centers: Vec<usize> = (0..25).map(|r| 20 + 40 * r).collect();
        let segs = walls(&centers, 2);
        let options = RowOptions {
            gap_divisor: 60.0,
            ..RowOptions::default()
        };
        let err = count_rows(&segs, 1000, &options).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::TooManyRows {
                rows: 25,
                max_rows: 20
            }
        );
    }
}
