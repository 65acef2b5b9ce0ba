//! Diagnostics data model and debug sinks.
//!
//! [`AnalysisReport`] is returned by
//! [`HexGridAnalyzer::analyze_with_diagnostics`](crate::HexGridAnalyzer) and
//! bundles the final [`GridParams`](crate::GridParams) with an
//! [`AnalysisTrace`] of every stage. Raster artifacts (projections, masks) are
//! not part of the trace; attach a [`DebugSink`] to observe them.

pub mod pipeline;
pub mod sink;
pub mod stages;
pub mod timing;

pub use pipeline::{AnalysisReport, AnalysisTrace};
pub use sink::{emit_record, DebugSink, DirectorySink, NullSink, RecordingSink};
pub use stages::{
    InputDescriptor, MatchingStage, ProjectionStage, RasterCount, SegmentStage, SolverStage,
};
pub use timing::{StageTiming, TimingBreakdown};
