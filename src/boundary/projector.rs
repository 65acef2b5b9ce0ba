use crate::edges::{vertical_structure_mask, VerticalMaskOptions};
use crate::image::{BinaryImage, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

/// Edge of the raster a scan starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanDirection {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionOptions {
    /// Number of pixels marked per scan line starting at the first hit.
    pub edge_thickness: usize,
    pub vertical_mask: VerticalMaskOptions,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            edge_thickness: 5,
            vertical_mask: VerticalMaskOptions::default(),
        }
    }
}

/// The six first-hit rasters plus the mask the vertical variants were
/// filtered with.
#[derive(Clone, Debug)]
pub struct DirectionalProjections {
    pub from_top: BinaryImage,
    pub from_bottom: BinaryImage,
    pub from_left: BinaryImage,
    pub from_right: BinaryImage,
    pub left_vertical: BinaryImage,
    pub right_vertical: BinaryImage,
    pub vertical_mask: BinaryImage,
}

impl DirectionalProjections {
    /// Union of the six projections (the boundary image).
    pub fn combined(&self) -> BinaryImage {
        let mut out = self.from_top.clone();
        for other in [
            &self.from_bottom,
            &self.from_left,
            &self.from_right,
            &self.left_vertical,
            &self.right_vertical,
        ] {
            out.or_assign(other);
        }
        out
    }

    /// Every raster with a stable artifact label.
    pub fn labelled(&self) -> [(&'static str, &BinaryImage); 7] {
        [
            ("view_from_top", &self.from_top),
            ("view_from_bottom", &self.from_bottom),
            ("view_from_left", &self.from_left),
            ("view_from_right", &self.from_right),
            ("left_vertical", &self.left_vertical),
            ("right_vertical", &self.right_vertical),
            ("vertical_mask", &self.vertical_mask),
        ]
    }
}

#[derive(Clone, Debug, Default)]
pub struct DirectionalProjector {
    pub options: ProjectionOptions,
}

impl DirectionalProjector {
    pub fn new(options: ProjectionOptions) -> Self {
        Self { options }
    }

    pub fn project(&self, edges: &BinaryImage) -> DirectionalProjections {
        let t = self.options.edge_thickness;
        let vertical_mask = vertical_structure_mask(edges, &self.options.vertical_mask);
        let vertical_edges = edges.and(&vertical_mask);
        let projections = DirectionalProjections {
            from_top: first_hits(edges, ScanDirection::Top, t),
            from_bottom: first_hits(edges, ScanDirection::Bottom, t),
            from_left: first_hits(edges, ScanDirection::Left, t),
            from_right: first_hits(edges, ScanDirection::Right, t),
            left_vertical: first_hits(&vertical_edges, ScanDirection::Left, t),
            right_vertical: first_hits(&vertical_edges, ScanDirection::Right, t),
            vertical_mask,
        };
        log::debug!(
            "DirectionalProjector::project {}x{} thickness={} left_vertical={} right_vertical={}",
            edges.w,
            edges.h,
            t,
            projections.left_vertical.count_set(),
            projections.right_vertical.count_set()
        );
        projections
    }
}

/// Mark the first foreground pixel met when scanning from `direction`, plus
/// the next `thickness - 1` pixels along the scan, on every scan line.
/// Scan lines without foreground stay blank.
pub fn first_hits(raster: &BinaryImage, direction: ScanDirection, thickness: usize) -> BinaryImage {
    let t = thickness.max(1);
    let (w, h) = (raster.w, raster.h);
    let mut out = BinaryImage::new(w, h);
    match direction {
        ScanDirection::Left => {
            for y in 0..h {
                if let Some(x) = raster.row(y).iter().position(|&v| v) {
                    out.fill_span(y, x, x + t, true);
                }
            }
        }
        ScanDirection::Right => {
            for y in 0..h {
                if let Some(x) = raster.row(y).iter().rposition(|&v| v) {
                    out.fill_span(y, (x + 1).saturating_sub(t), x + 1, true);
                }
            }
        }
        ScanDirection::Top => {
            for x in 0..w {
                if let Some(y) = (0..h).find(|&y| raster.get(x, y)) {
                    for yy in y..(y + t).min(h) {
                        out.set(x, yy, true);
                    }
                }
            }
        }
        ScanDirection::Bottom => {
            for x in 0..w {
                if let Some(y) = (0..h).rev().find(|&y| raster.get(x, y)) {
                    for yy in (y + 1).saturating_sub(t)..=y {
                        out.set(x, yy, true);
                    }
                }
            }
        }
    }
    out
}
