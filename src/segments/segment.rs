use serde::{Deserialize, Serialize};

/// Identifier referencing a segment recorded in the analysis trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u32);

/// Hands out increasing ids so that left, right and mask segments of one
/// analysis never collide.
#[derive(Debug, Default)]
pub struct SegmentIdAllocator {
    next: u32,
}

impl SegmentIdAllocator {
    pub fn next_id(&mut self) -> SegmentId {
        let id = SegmentId(self.next);
        self.next += 1;
        id
    }
}

/// Vertical line segment in pixel coordinates.
///
/// `start_y` and `end_y` are inclusive. Segments traced along one side of the
/// map leave `thickness` and `component_count` unset; segments merged from the
/// vertical-structure mask fill both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSegment {
    pub id: SegmentId,
    pub x: usize,
    pub start_y: usize,
    pub end_y: usize,
    pub length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_count: Option<usize>,
}

impl LineSegment {
    pub fn new(id: SegmentId, x: usize, start_y: usize, end_y: usize) -> Self {
        debug_assert!(end_y >= start_y);
        Self {
            id,
            x,
            start_y,
            end_y,
            length: end_y - start_y + 1,
            thickness: None,
            component_count: None,
        }
    }

    pub fn midpoint_y(&self) -> f32 {
        (self.start_y + self.end_y) as f32 * 0.5
    }

    /// Rows shared with `other`; zero or negative when disjoint.
    pub fn overlap(&self, other: &LineSegment) -> i64 {
        overlap_rows((self.start_y, self.end_y), (other.start_y, other.end_y))
    }
}

/// Shared row count of two inclusive ranges, `min(end) - max(start) + 1`.
/// Negative values measure the gap between disjoint ranges.
pub fn overlap_rows(a: (usize, usize), b: (usize, usize)) -> i64 {
    a.1.min(b.1) as i64 - a.0.max(b.0) as i64 + 1
}
