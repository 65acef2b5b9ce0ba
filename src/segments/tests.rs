use super::*;
use crate::image::BinaryImage;

/// Column `x` set on the given inclusive row ranges.
fn column_with_runs(w: usize, h: usize, x: usize, runs: &[(usize, usize)]) -> BinaryImage {
    BinaryImage::from_fn(w, h, |px, py| {
        px == x && runs.iter().any(|&(a, b)| (a..=b).contains(&py))
    })
}

fn side(raster: &BinaryImage, side: WallSide) -> Vec<LineSegment> {
    let mut ids = SegmentIdAllocator::default();
    extract_side_segments(raster, side, &SegmentOptions::default(), &mut ids)
}

#[test]
fn gap_of_exactly_tolerance_keeps_one_segment() {
    // 20 rows, 5 empty rows, 20 rows.
    let img = column_with_runs(12, 80, 6, &[(10, 29), (35, 54)]);
    let segs = side(&img, WallSide::Left);
    assert_eq!(segs.len(), 1, "got {segs:?}");
    assert_eq!((segs[0].start_y, segs[0].end_y), (10, 54));
    assert_eq!(segs[0].length, 45);
    assert_eq!(segs[0].x, 6);
}

#[test]
fn gap_one_above_tolerance_splits() {
    // 20 rows, 6 empty rows, 20 rows.
    let img = column_with_runs(12, 80, 6, &[(10, 29), (36, 55)]);
    let segs = side(&img, WallSide::Left);
    assert_eq!(segs.len(), 2, "got {segs:?}");
    assert_eq!((segs[0].start_y, segs[0].end_y), (10, 29));
    assert_eq!((segs[1].start_y, segs[1].end_y), (36, 55));
}

#[test]
fn short_runs_are_discarded() {
    let img = column_with_runs(12, 80, 4, &[(0, 8), (30, 39)]);
    let segs = side(&img, WallSide::Right);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].length, 10);
}

#[test]
fn anchor_jump_beyond_tolerance_starts_new_segment() {
    let img = BinaryImage::from_fn(40, 60, |x, y| {
        (x == 5 && (0..25).contains(&y)) || (x == 20 && (25..50).contains(&y))
    });
    let segs = side(&img, WallSide::Left);
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].x, 5);
    assert_eq!(segs[1].x, 20);
    assert_eq!(segs[1].start_y, 25);
}

#[test]
fn side_segment_reports_dominant_column() {
    // One jittered row at the top must not shift the reported column.
    let mut img = column_with_runs(30, 40, 10, &[(5, 30)]);
    img.set(11, 4, true);
    let segs = side(&img, WallSide::Left);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].start_y, 4);
    assert_eq!(segs[0].x, 10);
}

#[test]
fn profile_lookup_uses_side_extreme() {
    let img = BinaryImage::from_fn(20, 10, |x, y| y == 3 && (x == 4 || x == 12));
    let left = ColumnProfile::from_projection(&img, WallSide::Left);
    let right = ColumnProfile::from_projection(&img, WallSide::Right);
    assert_eq!(left.x_at(3), Some(4));
    assert_eq!(right.x_at(3), Some(12));
    assert_eq!(left.x_at(4), None);
    assert_eq!(left.len(), 1);
}

#[test]
fn nearby_columns_merge_into_one_logical_segment() {
    // x and x+3, overlapping by 21 rows.
    let img = BinaryImage::from_fn(30, 80, |x, y| {
        (x == 10 && (10..=40).contains(&y)) || (x == 13 && (20..=60).contains(&y))
    });
    let mut ids = SegmentIdAllocator::default();
    let segs = extract_mask_segments(&img, &SegmentOptions::default(), &mut ids);
    assert_eq!(segs.len(), 1, "got {segs:?}");
    let s = &segs[0];
    assert_eq!((s.start_y, s.end_y), (10, 60));
    assert_eq!(s.thickness, Some(4));
    assert_eq!(s.component_count, Some(2));
}

#[test]
fn merge_is_transitive_through_intermediate_columns() {
    // 10 and 16 are too far apart, but 13 bridges them.
    let img = BinaryImage::from_fn(30, 60, |x, y| {
        (x == 10 || x == 13 || x == 16) && (5..=30).contains(&y)
    });
    let mut ids = SegmentIdAllocator::default();
    let segs = extract_mask_segments(&img, &SegmentOptions::default(), &mut ids);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].thickness, Some(7));
    assert_eq!(segs[0].component_count, Some(3));
    assert_eq!(segs[0].x, 13);
}

#[test]
fn distant_columns_stay_separate_and_ids_are_unique() {
    let img = BinaryImage::from_fn(60, 60, |x, y| (x == 10 || x == 40) && (5..=30).contains(&y));
    let mut ids = SegmentIdAllocator::default();
    let left = extract_side_segments(&img, WallSide::Left, &SegmentOptions::default(), &mut ids);
    let segs = extract_mask_segments(&img, &SegmentOptions::default(), &mut ids);
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].x, 10);
    assert_eq!(segs[1].x, 40);
    assert_eq!(segs[0].thickness, Some(1));
    assert_eq!(left[0].id, SegmentId(0));
    assert_eq!(segs[0].id, SegmentId(1));
    assert_eq!(segs[1].id, SegmentId(2));
}

#[test]
fn merged_segment_length_filter_applies_after_merge() {
    // Two 6-row fragments in neighbouring columns form a 13-row line.
    let img = BinaryImage::from_fn(12, 40, |x, y| {
        (x == 3 && (5..=10).contains(&y)) || (x == 5 && (12..=17).contains(&y))
    });
    let mut ids = SegmentIdAllocator::default();
    let segs = extract_mask_segments(&img, &SegmentOptions::default(), &mut ids);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].length, 13);
    assert_eq!(segs[0].component_count, Some(2));
}

#[test]
fn overlap_is_negative_for_disjoint_ranges() {
    assert_eq!(overlap_rows((0, 9), (5, 20)), 5);
    assert_eq!(overlap_rows((0, 9), (12, 20)), -2);
}
