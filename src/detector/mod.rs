//! Hex grid analyzer orchestrating the boundary, segment and solver stages.
//!
//! Modules
//! - [`params`]: configuration types used by the analyzer and the demo tool.
//! - `pipeline`: the [`HexGridAnalyzer`] implementation.
//! - `assemble`: maps solved values onto [`GridParams`](crate::GridParams).
//! - `fallback`: the square-root tile-count estimate.
//!
//! Failures are limited to an empty boundary and an implausible row count;
//! every other shortfall degrades to a coarser solver strategy instead.

mod assemble;
mod fallback;
pub mod params;
mod pipeline;

pub use assemble::assemble_grid;
pub use fallback::estimate_from_tile_count;
pub use params::AnalyzerParams;
pub use pipeline::HexGridAnalyzer;
