use serde::{Deserialize, Serialize};

/// Continuity rules shared by the per-side tracer and the full-mask scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Segments shorter than this (in rows) are discarded.
    pub min_line_length: usize,
    /// Maximum column drift from the segment anchor.
    pub x_tolerance: usize,
    /// Maximum number of consecutive empty rows bridged inside a segment.
    pub gap_tolerance: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            min_line_length: 10,
            x_tolerance: 3,
            gap_tolerance: 5,
        }
    }
}
