//! Integer column solver.
//!
//! Strategy A looks for a `(cols, hex_width)` combination that explains the
//! matched wall pairs: each pair's span must be a whole number of tiles and
//! the map width must be either `cols` whole tiles or `cols - 1/2` tiles (the
//! half-tile stagger). On an unstaggered map every divisor of the width
//! explains the same pairs; the wall pitch measured inside row bands breaks
//! those ties. Strategy B, used only when A finds nothing,
//! scores every combination against the measured span and total width. A
//! fixed grid is the last resort.
use super::matching::MatchedPair;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Grid used when neither strategy produces a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackGrid {
    pub hex_width: u32,
    pub cols: usize,
    pub rows: usize,
}

impl Default for FallbackGrid {
    fn default() -> Self {
        Self {
            hex_width: 60,
            cols: 7,
            rows: 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Column counts tried, `[min_cols, max_cols)`.
    pub min_cols: usize,
    pub max_cols: usize,
    /// Pixel margin around `image_width / cols` for candidate widths.
    pub error_margin: f64,
    /// Strategy A width bounds (inclusive).
    pub min_hex_width: f64,
    pub max_hex_width: f64,
    /// Allowed distance from an integer for the tiling ratios.
    pub integer_tolerance: f64,
    /// Strategy B widths tried, `[min, max)`.
    pub brute_force_min_width: u32,
    pub brute_force_max_width: u32,
    pub fallback: FallbackGrid,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            min_cols: 5,
            max_cols: 100,
            error_margin: 5.0,
            min_hex_width: 40.0,
            max_hex_width: 120.0,
            integer_tolerance: 0.01,
            brute_force_min_width: 30,
            brute_force_max_width: 100,
            fallback: FallbackGrid::default(),
        }
    }
}

/// Evidence gathered for one column count by Strategy A.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnCandidate {
    pub cols: usize,
    /// Mean of the supporting width samples.
    pub hex_width: f64,
    /// Indices into the matched pair list.
    pub supporting_pairs: Vec<usize>,
    pub confidence: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BruteForceSolution {
    pub cols: usize,
    pub hex_width: u32,
    pub expected_span: f64,
    pub score: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolveStrategy {
    MatchedPairs,
    BruteForce,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSolution {
    pub strategy: SolveStrategy,
    pub cols: usize,
    pub hex_width: f64,
    /// Supporting pairs for Strategy A, zero otherwise.
    pub confidence: usize,
}

impl ColumnSolution {
    /// Vertical layout derived from the solved (unrounded) width.
    pub fn layout(&self, rows: usize, total_height: usize, height_factor: f32) -> VerticalLayout {
        vertical_layout(self.hex_width, rows, total_height, height_factor)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverOutcome {
    pub solution: ColumnSolution,
    pub candidates: Vec<ColumnCandidate>,
    /// Tile pitch measured inside row bands, used to break ties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall_pitch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brute_force: Option<BruteForceSolution>,
}

/// Rows, tile height and vertical pitch derived from a column solution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalLayout {
    pub rows: usize,
    pub hex_height: u32,
    pub spacing_y: f32,
}

fn nearest_integer(v: f64, tolerance: f64) -> Option<i64> {
    let r = v.round();
    ((v - r).abs() <= tolerance).then_some(r as i64)
}

/// Whether `hex_width` tiles both the pair span and the map width.
///
/// The span `right_x - left_x` must be a positive whole number of tiles;
/// `image_width` must be a whole number of tiles, or an odd number of half
/// tiles (a staggered row sticking out by half a tile).
pub fn width_explains_pair(left_x: f64, right_x: f64, image_width: f64, hex_width: f64, tolerance: f64) -> bool {
    if hex_width <= 0.0 {
        return false;
    }
    let span_ok = nearest_integer((right_x - left_x) / hex_width, tolerance).is_some_and(|n| n >= 1);
    if !span_ok {
        return false;
    }
    nearest_integer(image_width / hex_width, tolerance).is_some()
        || nearest_integer(2.0 * image_width / hex_width, tolerance).is_some_and(|n| n % 2 == 1)
}

/// Integer widths within `±error_margin` of `image_width / cols` and within
/// the configured width bounds.
fn candidate_widths(image_width: f64, cols: usize, options: &SolverOptions) -> std::ops::RangeInclusive<i64> {
    let nominal = image_width / cols as f64;
    let lo = (nominal - options.error_margin).max(options.min_hex_width).ceil() as i64;
    let hi = (nominal + options.error_margin).min(options.max_hex_width).floor() as i64;
    lo.max(1)..=hi
}

/// Whether `hex_width` tiles `image_width` into exactly `cols` columns,
/// either flush (`cols` tiles) or staggered (`cols - 1/2` tiles).
pub fn width_fits_cols(image_width: f64, hex_width: f64, cols: usize, tolerance: f64) -> bool {
    if hex_width <= 0.0 || cols == 0 {
        return false;
    }
    nearest_integer(image_width / hex_width, tolerance) == Some(cols as i64)
        || nearest_integer(2.0 * image_width / hex_width, tolerance) == Some(2 * cols as i64 - 1)
}

/// Width for `cols` columns that explains the pair and tiles the map into
/// `cols` columns, closest to `image_width / cols` (smaller width on ties).
pub fn match_pair(
    left_x: f64,
    right_x: f64,
    image_width: f64,
    cols: usize,
    options: &SolverOptions,
) -> Option<f64> {
    let nominal = image_width / cols as f64;
    let mut best: Option<f64> = None;
    for hw in candidate_widths(image_width, cols, options) {
        let hw = hw as f64;
        if !width_explains_pair(left_x, right_x, image_width, hw, options.integer_tolerance)
            || !width_fits_cols(image_width, hw, cols, options.integer_tolerance)
        {
            continue;
        }
        if best.map_or(true, |b| (hw - nominal).abs() < (b - nominal).abs()) {
            best = Some(hw);
        }
    }
    best
}

/// Strategy A: one candidate per column count with at least one explained
/// pair, ordered by column count.
pub fn solve_matched_pairs(pairs: &[MatchedPair], image_width: f64, options: &SolverOptions) -> Vec<ColumnCandidate> {
    let mut evidence: BTreeMap<usize, (Vec<usize>, Vec<f64>)> = BTreeMap::new();
    for cols in options.min_cols..options.max_cols {
        for (i, pair) in pairs.iter().enumerate() {
            let Some(hw) = match_pair(pair.left.x as f64, pair.right.x as f64, image_width, cols, options) else {
                continue;
            };
            let entry = evidence.entry(cols).or_default();
            entry.0.push(i);
            entry.1.push(hw);
        }
    }
    evidence
        .into_iter()
        .map(|(cols, (supporting_pairs, samples))| ColumnCandidate {
            cols,
            hex_width: samples.iter().sum::<f64>() / samples.len() as f64,
            confidence: supporting_pairs.len(),
            supporting_pairs,
        })
        .collect()
}

/// Highest confidence wins. Ties go to the width closest to `wall_pitch`,
/// then to the larger column count.
pub fn select_candidate(candidates: &[ColumnCandidate], wall_pitch: Option<f64>) -> Option<&ColumnCandidate> {
    let pitch_distance = |c: &ColumnCandidate| wall_pitch.map(|p| (c.hex_width - p).abs());
    candidates.iter().max_by(|a, b| {
        a.confidence
            .cmp(&b.confidence)
            .then_with(|| match (pitch_distance(a), pitch_distance(b)) {
                (Some(da), Some(db)) => db.total_cmp(&da),
                _ => Ordering::Equal,
            })
            .then(a.cols.cmp(&b.cols))
    })
}

/// Strategy B: exhaustive scan keeping the first minimum in scan order.
///
/// Returns `None` when there is nothing to measure against.
pub fn solve_brute_force(measured_span: f64, image_width: f64, options: &SolverOptions) -> Option<BruteForceSolution> {
    if measured_span <= 0.0 || image_width <= 0.0 {
        return None;
    }
    let mut best: Option<BruteForceSolution> = None;
    for cols in options.min_cols..options.max_cols {
        for hw in options.brute_force_min_width..options.brute_force_max_width {
            let w = hw as f64;
            let expected_span = (cols - 1) as f64 * w;
            let flush = cols as f64 * w;
            let staggered = flush + w / 2.0;
            let score = (measured_span - expected_span).abs()
                + (image_width - flush).abs().min((image_width - staggered).abs());
            if best.as_ref().map_or(true, |b| score < b.score) {
                best = Some(BruteForceSolution {
                    cols,
                    hex_width: hw,
                    expected_span,
                    score,
                });
            }
        }
    }
    best
}

/// Vertical layout for a tile width and row count.
///
/// `spacing_y = (total_height - hex_height) / (rows - 1)`; a single row, or a
/// non-positive result, falls back to three quarters of the tile height.
pub fn vertical_layout(hex_width: f64, rows: usize, total_height: usize, height_factor: f32) -> VerticalLayout {
    let hex_height = (hex_width * height_factor as f64).round().max(1.0) as u32;
    let stacked = if rows > 1 {
        (total_height as f32 - hex_height as f32) / (rows - 1) as f32
    } else {
        0.0
    };
    let spacing_y = if stacked > 0.0 {
        stacked
    } else {
        hex_height as f32 * 0.75
    };
    VerticalLayout {
        rows,
        hex_height,
        spacing_y,
    }
}

#[derive(Clone, Debug, Default)]
pub struct ColumnSolver {
    pub options: SolverOptions,
}

impl ColumnSolver {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    /// Run Strategy A, then B, then the fixed fallback.
    ///
    /// `wall_pitch` is the tile pitch seen inside row bands, if any.
    pub fn solve(
        &self,
        pairs: &[MatchedPair],
        image_width: f64,
        measured_span: f64,
        wall_pitch: Option<f64>,
    ) -> SolverOutcome {
        let candidates = solve_matched_pairs(pairs, image_width, &self.options);
        if let Some(best) = select_candidate(&candidates, wall_pitch) {
            log::debug!(
                "ColumnSolver: matched pairs cols={} hex_width={:.2} confidence={} candidates={} pitch={:?}",
                best.cols,
                best.hex_width,
                best.confidence,
                candidates.len(),
                wall_pitch
            );
            let solution = ColumnSolution {
                strategy: SolveStrategy::MatchedPairs,
                cols: best.cols,
                hex_width: best.hex_width,
                confidence: best.confidence,
            };
            return SolverOutcome {
                solution,
                candidates,
                wall_pitch,
                brute_force: None,
            };
        }

        if let Some(bf) = solve_brute_force(measured_span, image_width, &self.options) {
            log::warn!(
                "ColumnSolver: no pair-consistent width among {} pairs, brute force cols={} hex_width={} score={:.2}",
                pairs.len(),
                bf.cols,
                bf.hex_width,
                bf.score
            );
            let solution = ColumnSolution {
                strategy: SolveStrategy::BruteForce,
                cols: bf.cols,
                hex_width: bf.hex_width as f64,
                confidence: 0,
            };
            return SolverOutcome {
                solution,
                candidates,
                wall_pitch,
                brute_force: Some(bf),
            };
        }

        let fallback = self.options.fallback;
        log::warn!(
            "ColumnSolver: no solution, using fixed grid {}x{} hex_width={}",
            fallback.cols,
            fallback.rows,
            fallback.hex_width
        );
        SolverOutcome {
            solution: ColumnSolution {
                strategy: SolveStrategy::Fallback,
                cols: fallback.cols,
                hex_width: fallback.hex_width as f64,
                confidence: 0,
            },
            candidates,
            wall_pitch,
            brute_force: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::{LineSegment, SegmentId};

    #[test]
    fn predicate_accepts_flush_and_staggered_widths() {
        // Seven tiles of 60, flush.
        assert!(width_explains_pair(20.0, 380.0, 420.0, 60.0, 0.01));
        // Six and a half tiles: staggered row.
        assert!(width_explains_pair(20.0, 380.0, 390.0, 60.0, 0.01));
        // Span is not a whole number of tiles.
        assert!(!width_explains_pair(20.0, 370.0, 420.0, 60.0, 0.01));
        // Width is an even number of half tiles but not whole.
        assert!(!width_explains_pair(20.0, 380.0, 400.0, 60.0, 0.01));
        // Zero span.
        assert!(!width_explains_pair(20.0, 20.0, 420.0, 60.0, 0.01));
    }

    #[test]
    fn width_must_agree_with_column_count() {
        assert!(width_fits_cols(420.0, 60.0, 7, 0.01));
        assert!(width_fits_cols(390.0, 60.0, 7, 0.01));
        assert!(!width_fits_cols(390.0, 60.0, 6, 0.01));
        assert!(!width_fits_cols(432.0, 48.0, 10, 0.01));
    }

    #[test]
    fn ties_prefer_more_columns() {
        let candidate = |cols, confidence| ColumnCandidate {
            cols,
            hex_width: 60.0,
            supporting_pairs: (0..confidence).collect(),
            confidence,
        };
        let candidates = vec![candidate(6, 3), candidate(7, 3), candidate(9, 2)];
        assert_eq!(select_candidate(&candidates, None).map(|c| c.cols), Some(7));
        assert!(select_candidate(&[], None).is_none());
    }

    #[test]
    fn pitch_breaks_divisor_ties() {
        // Unstaggered 420 px map: every divisor explains every pair.
        let candidate = |cols: usize| ColumnCandidate {
            cols,
            hex_width: 420.0 / cols as f64,
            supporting_pairs: vec![0, 1, 2, 3, 4],
            confidence: 5,
        };
        let candidates: Vec<_> = [5, 6, 7, 10].into_iter().map(candidate).collect();
        assert_eq!(select_candidate(&candidates, None).map(|c| c.cols), Some(10));
        assert_eq!(select_candidate(&candidates, Some(60.0)).map(|c| c.cols), Some(7));
        assert_eq!(select_candidate(&candidates, Some(71.0)).map(|c| c.cols), Some(6));
        // Confidence still comes first.
        let mut weaker = candidates.clone();
        weaker[2].confidence = 4;
        assert_eq!(select_candidate(&weaker, Some(60.0)).map(|c| c.cols), Some(6));
    }

    #[test]
    fn one_sample_per_pair_nearest_nominal_width() {
        // 225 px map, 5 columns: flush tiles of 45 and staggered tiles of 50
        // both fit, and the 450 px span is 10 and 9 tiles respectively.
        let options = SolverOptions::default();
        assert!(width_fits_cols(225.0, 45.0, 5, 0.01));
        assert!(width_fits_cols(225.0, 50.0, 5, 0.01));
        assert_eq!(match_pair(10.0, 460.0, 225.0, 5, &options), Some(45.0));

        let pair = MatchedPair {
            left: LineSegment::new(SegmentId(0), 10, 0, 30),
            right: LineSegment::new(SegmentId(1), 460, 0, 30),
            overlap: 31,
        };
        let candidates = solve_matched_pairs(&[pair], 225.0, &options);
        let five = candidates.iter().find(|c| c.cols == 5).unwrap();
        assert_eq!(five.hex_width, 45.0);
        assert_eq!(five.supporting_pairs, vec![0]);
    }

    #[test]
    fn candidate_widths_respect_bounds() {
        let options = SolverOptions::default();
        let widths: Vec<i64> = candidate_widths(390.0, 7, &options).collect();
        assert_eq!(widths.first(), Some(&51));
        assert_eq!(widths.last(), Some(&60));
        let widths: Vec<i64> = candidate_widths(390.0, 10, &options).collect();
        assert_eq!(widths, (40..=44).collect::<Vec<_>>());
        assert_eq!(candidate_widths(390.0, 99, &options).count(), 0);
    }

    #[test]
    fn brute_force_keeps_first_minimum() {
        let options = SolverOptions::default();
        // (7, 60) and (10, 40) both score zero; 7 columns is scanned first.
        let bf = solve_brute_force(360.0, 420.0, &options).unwrap();
        assert_eq!((bf.cols, bf.hex_width), (7, 60));
        assert_eq!(bf.score, 0.0);
        assert!(solve_brute_force(0.0, 420.0, &options).is_none());
    }

    #[test]
    fn layout_spacing_follows_rows() {
        let layout = vertical_layout(60.0, 5, 340, 1.0);
        assert_eq!(layout.hex_height, 60);
        assert!((layout.spacing_y - 70.0).abs() < 1e-4);
        let single = vertical_layout(60.0, 1, 340, 1.15);
        assert_eq!(single.hex_height, 69);
        assert!((single.spacing_y - 51.75).abs() < 1e-4);
    }

    #[test]
    fn layout_scales_the_unrounded_width() {
        let solution = ColumnSolution {
            strategy: SolveStrategy::MatchedPairs,
            cols: 7,
            hex_width: 52.5,
            confidence: 3,
        };
        // round(52.5 * 1.15) = 60, whereas round(53 * 1.15) = 61.
        assert_eq!(solution.layout(5, 340, 1.15).hex_height, 60);
        assert_eq!(solution.layout(5, 340, 1.0).hex_height, 53);
    }

    #[test]
    fn empty_inputs_use_fixed_grid() {
        let outcome = ColumnSolver::default().solve(&[], 0.0, 0.0, None);
        assert_eq!(outcome.solution.strategy, SolveStrategy::Fallback);
        assert_eq!(outcome.solution.cols, 7);
        assert_eq!(outcome.solution.hex_width, 60.0);
    }
}
