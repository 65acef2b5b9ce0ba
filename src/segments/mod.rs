//! Vertical line-segment extraction.
//!
//! Two modes share one continuity rule (stay within `x_tolerance` of the run's
//! anchor column, bridge at most `gap_tolerance` empty rows):
//!
//! - Per-side: the `left_vertical` / `right_vertical` projections are reduced
//!   to a [`ColumnProfile`] (one anchor column per row) and traced top to
//!   bottom into the map's outer wall segments.
//! - Full-mask: every column of the vertical-structure mask is scanned into raw
//!   runs which are then merged transitively (nearby columns, touching or
//!   overlapping rows) into logical wall lines carrying a `thickness` and a
//!   `component_count`.
//!
//! In both modes segments shorter than `min_line_length` are dropped; for the
//! full-mask mode the length filter applies after merging.

mod extractor;
mod merge;
mod options;
mod profile;
mod segment;

pub use extractor::{extract_mask_segments, extract_side_segments};
pub use options::SegmentOptions;
pub use profile::{ColumnProfile, WallSide};
pub use segment::{overlap_rows, LineSegment, SegmentId, SegmentIdAllocator};

#[cfg(test)]
mod tests;
