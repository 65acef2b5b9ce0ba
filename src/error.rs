//! Hard failures of the analysis contract.
//!
//! Degraded solver paths (no matched pairs, no constraint solution) are not
//! errors; they fall through to the brute-force search and then to the fixed
//! fallback grid. Only the two conditions below abort an analysis.

/// Error returned by [`crate::analyze`] and [`crate::HexGridAnalyzer`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The combined boundary raster has no foreground pixels, so no grid
    /// extent can be measured.
    #[error("no boundary found: the edge raster has no foreground pixels")]
    NoBoundaryFound,
    /// Row clustering produced more rows than the configured ceiling.
    #[error("too many rows detected ({rows} > {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_rows_message_carries_counts() {
        let err = AnalysisError::TooManyRows {
            rows: 23,
            max_rows: 20,
        };
        assert_eq!(err.to_string(), "too many rows detected (23 > 20)");
    }
}
