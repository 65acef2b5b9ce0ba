use crate::image::{BinaryImage, ImageView};
use serde::{Deserialize, Serialize};

/// Window sizes for the vertical-structure mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalMaskOptions {
    /// Height of the 1×N opening window; shorter vertical runs are dropped.
    pub min_run: usize,
    /// Dilation window width (columns).
    pub dilate_width: usize,
    /// Dilation window height (rows).
    pub dilate_height: usize,
}

impl Default for VerticalMaskOptions {
    fn default() -> Self {
        Self {
            min_run: 20,
            dilate_width: 3,
            dilate_height: 5,
        }
    }
}

/// Opening with a 1×`min_run` vertical window.
///
/// For a flat line-shaped structuring element the opening is exactly the set
/// of vertical runs whose length is at least the window height, so it is
/// computed per column in a single pass.
pub fn open_vertical(edges: &BinaryImage, min_run: usize) -> BinaryImage {
    if min_run <= 1 {
        return edges.clone();
    }
    let mut out = BinaryImage::new(edges.w, edges.h);
    for x in 0..edges.w {
        let mut y = 0;
        while y < edges.h {
            if !edges.get(x, y) {
                y += 1;
                continue;
            }
            let start = y;
            while y < edges.h && edges.get(x, y) {
                y += 1;
            }
            if y - start >= min_run {
                for yy in start..y {
                    out.set(x, yy, true);
                }
            }
        }
    }
    out
}

/// Dilation with a `width`×`height` rectangle anchored at its center
/// (`size / 2`, the usual convention for even sizes).
///
/// Separable: a horizontal max pass followed by a vertical one.
pub fn dilate_rect(src: &BinaryImage, width: usize, height: usize) -> BinaryImage {
    let horizontal = dilate_axis(src, width.max(1), true);
    dilate_axis(&horizontal, height.max(1), false)
}

fn dilate_axis(src: &BinaryImage, size: usize, horizontal: bool) -> BinaryImage {
    if size == 1 {
        return src.clone();
    }
    // Output pixel p is set if any source pixel in [p - before, p + after] is.
    let before = size / 2;
    let after = size - 1 - before;
    let (w, h) = (src.w, src.h);
    let mut out = BinaryImage::new(w, h);
    if horizontal {
        for y in 0..h {
            let row = src.row(y);
            for x in 0..w {
                let lo = x.saturating_sub(before);
                let hi = (x + after).min(w - 1);
                if row[lo..=hi].iter().any(|&v| v) {
                    out.set(x, y, true);
                }
            }
        }
    } else {
        for x in 0..w {
            for y in 0..h {
                let lo = y.saturating_sub(before);
                let hi = (y + after).min(h - 1);
                if (lo..=hi).any(|yy| src.get(x, yy)) {
                    out.set(x, y, true);
                }
            }
        }
    }
    out
}

/// Mask of near-vertical structure: opening, then dilation.
pub fn vertical_structure_mask(edges: &BinaryImage, options: &VerticalMaskOptions) -> BinaryImage {
    let opened = open_vertical(edges, options.min_run);
    let mask = dilate_rect(&opened, options.dilate_width, options.dilate_height);
    log::debug!(
        "vertical_structure_mask: opened={} mask={} (run>={}, dilate {}x{})",
        opened.count_set(),
        mask.count_set(),
        options.min_run,
        options.dilate_width,
        options.dilate_height
    );
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(w: usize, h: usize, x: usize, y0: usize, y1: usize) -> BinaryImage {
        BinaryImage::from_fn(w, h, |px, py| px == x && (y0..=y1).contains(&py))
    }

    #[test]
    fn opening_drops_short_runs_and_keeps_long_ones() {
        let mut img = column(8, 60, 2, 5, 30); // 26 rows
        for y in 40..50 {
            img.set(5, y, true); // 10 rows
        }
        let opened = open_vertical(&img, 20);
        assert_eq!(opened.count_set(), 26);
        assert!(opened.get(2, 5) && opened.get(2, 30));
        assert!(!opened.get(5, 45));
    }

    #[test]
    fn opening_keeps_run_of_exact_window_height() {
        let img = column(4, 30, 1, 3, 22); // 20 rows
        assert_eq!(open_vertical(&img, 20).count_set(), 20);
        assert_eq!(open_vertical(&img, 21).count_set(), 0);
    }

    #[test]
    fn dilation_grows_single_pixel_to_window() {
        let mut img = BinaryImage::new(9, 9);
        img.set(4, 4, true);
        let out = dilate_rect(&img, 3, 5);
        assert_eq!(out.count_set(), 15);
        assert!(out.get(3, 2) && out.get(5, 6));
        assert!(!out.get(2, 4) && !out.get(4, 7));
    }

    #[test]
    fn dilation_clips_at_borders() {
        let mut img = BinaryImage::new(5, 5);
        img.set(0, 0, true);
        let out = dilate_rect(&img, 3, 5);
        // x in 0..=1, y in 0..=2
        assert_eq!(out.count_set(), 6);
    }

    #[test]
    fn mask_widens_walls_and_ignores_diagonals() {
        let mut img = column(20, 60, 10, 10, 40);
        for i in 0..15 {
            img.set(2 + i % 3, 45 + i, true);
        }
        let mask = vertical_structure_mask(&img, &VerticalMaskOptions::default());
        assert!(mask.get(9, 8) && mask.get(11, 42));
        assert!(!mask.get(12, 20));
        assert!(!mask.get(3, 50));
    }
}
