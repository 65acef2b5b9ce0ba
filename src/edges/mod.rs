//! Binary morphology on edge rasters.
//!
//! The analysis needs one derived raster from the raw edges: a mask of
//! near-vertical structure (hex walls). It is built by
//!
//! - a morphological opening with a 1×N vertical window, which keeps only
//!   vertical runs of at least N pixels, followed by
//! - a rectangular dilation (3×5 by default) that bridges jagged or
//!   anti-aliased gaps and widens each wall to a short band.
//!
//! Borders are treated as background; nothing outside the raster is read.

pub mod morphology;

pub use morphology::{dilate_rect, open_vertical, vertical_structure_mask, VerticalMaskOptions};
