//! Owned binary raster, one flag per pixel in row-major order.
//!
//! Every stage of the analysis reads and produces `BinaryImage`s: the input
//! edge raster, the vertical-structure mask, the six directional projections
//! and their union.
use super::{ImageU8, ImageView, ImageViewMut};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinaryImage {
    pub w: usize,
    pub h: usize,
    pub data: Vec<bool>,
}

/// Inclusive pixel extent `(left, top, right, bottom)` of the foreground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelExtent {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl BinaryImage {
    /// Blank raster of the given size.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self { w, h, data }
    }

    /// Threshold an 8-bit view: any nonzero pixel is foreground.
    pub fn from_u8(view: &ImageU8<'_>) -> Self {
        Self::from_fn(view.w, view.h, |x, y| view.is_edge(x, y))
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: bool) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    pub fn has_foreground(&self) -> bool {
        self.data.iter().any(|&v| v)
    }

    /// Pixel-wise union. Both rasters must share dimensions.
    pub fn or_assign(&mut self, other: &BinaryImage) {
        debug_assert_eq!((self.w, self.h), (other.w, other.h));
        for (dst, &src) in self.data.iter_mut().zip(other.data.iter()) {
            *dst |= src;
        }
    }

    /// Pixel-wise intersection. Both rasters must share dimensions.
    pub fn and(&self, other: &BinaryImage) -> BinaryImage {
        debug_assert_eq!((self.w, self.h), (other.w, other.h));
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a && b)
            .collect();
        BinaryImage {
            w: self.w,
            h: self.h,
            data,
        }
    }

    /// Bounding box of the foreground, `None` for a blank raster.
    pub fn foreground_extent(&self) -> Option<PixelExtent> {
        let mut extent: Option<PixelExtent> = None;
        for y in 0..self.h {
            let row = self.row(y);
            let Some(first) = row.iter().position(|&v| v) else {
                continue;
            };
            let last = row.iter().rposition(|&v| v).unwrap_or(first);
            extent = Some(match extent {
                None => PixelExtent {
                    left: first,
                    top: y,
                    right: last,
                    bottom: y,
                },
                Some(e) => PixelExtent {
                    left: e.left.min(first),
                    top: e.top,
                    right: e.right.max(last),
                    bottom: y,
                },
            });
        }
        extent
    }

    /// Row indices of the foreground pixels in column `x`, top to bottom.
    pub fn column_hits(&self, x: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.h).filter(move |&y| self.get(x, y))
    }
}

impl ImageView for BinaryImage {
    type Pixel = bool;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for BinaryImage {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [bool] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
