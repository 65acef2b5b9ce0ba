//! Boundary extraction: directional first-hit projections, the bounding box
//! of their union, and coarse span measurements.
//!
//! Scanning from each raster edge and keeping only the first edge pixel hit
//! isolates the outer hull of the tiled map from interior detail. The left and
//! right scans are repeated on edges restricted to the vertical-structure mask
//! so that the outermost hex walls can be traced as line segments.

pub mod projector;
pub mod spans;

pub use projector::{
    first_hits, DirectionalProjections, DirectionalProjector, ProjectionOptions, ScanDirection,
};
pub use spans::{measure_spans, SpanMeasurements, SpanSource};

use crate::image::BinaryImage;
use serde::{Deserialize, Serialize};

/// Bounding box of the boundary image.
///
/// `width` and `height` are edge-to-edge pixel distances (`right - left`,
/// `bottom - top`), which is what the column solver treats as the map width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryBox {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
    pub width: usize,
    pub height: usize,
}

impl BoundaryBox {
    /// `None` when `boundary` has no foreground.
    pub fn from_raster(boundary: &BinaryImage) -> Option<Self> {
        let e = boundary.foreground_extent()?;
        Some(Self {
            top: e.top,
            bottom: e.bottom,
            left: e.left,
            right: e.right,
            width: e.right - e.left,
            height: e.bottom - e.top,
        })
    }
}
