//! Greedy one-to-one pairing of left and right wall segments.
use crate::segments::LineSegment;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingOptions {
    /// Rows two segments must share to pair up or join a row band.
    pub min_overlap: usize,
    /// Bands with fewer segments are discarded.
    pub min_band_segments: usize,
}

impl Default for MatchingOptions {
    fn default() -> Self {
        Self {
            min_overlap: 20,
            min_band_segments: 3,
        }
    }
}

/// Left/right wall segments spanning the same rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedPair {
    pub left: LineSegment,
    pub right: LineSegment,
    pub overlap: usize,
}

impl MatchedPair {
    /// Horizontal distance between the two walls.
    pub fn span(&self) -> usize {
        self.right.x - self.left.x
    }
}

/// Pair left and right wall segments.
///
/// Candidates are all `(left, right)` combinations sharing at least
/// `min_overlap` rows with the right wall strictly right of the left one.
/// They are committed by decreasing overlap (generation order on ties),
/// skipping segments that are already paired.
pub fn match_pairs(left: &[LineSegment], right: &[LineSegment], min_overlap: usize) -> Vec<MatchedPair> {
    let mut candidates: Vec<(usize, usize, usize)> = Vec::new();
    for (li, l) in left.iter().enumerate() {
        for (ri, r) in right.iter().enumerate() {
            let overlap = l.overlap(r);
            if overlap >= min_overlap as i64 && r.x > l.x {
                candidates.push((overlap as usize, li, ri));
            }
        }
    }
    // Stable: equal overlaps keep generation order.
    candidates.sort_by(|a, b| b.0.cmp(&a.0));

    let mut left_used = vec![false; left.len()];
    let mut right_used = vec![false; right.len()];
    let mut pairs = Vec::new();
    for (overlap, li, ri) in candidates {
        if left_used[li] || right_used[ri] {
            continue;
        }
        left_used[li] = true;
        right_used[ri] = true;
        pairs.push(MatchedPair {
            left: left[li].clone(),
            right: right[ri].clone(),
            overlap,
        });
    }
    log::debug!(
        "match_pairs left={} right={} pairs={}",
        left.len(),
        right.len(),
        pairs.len()
    );
    pairs
}
