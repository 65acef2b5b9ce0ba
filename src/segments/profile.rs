use crate::image::{BinaryImage, ImageView};
use serde::{Deserialize, Serialize};

/// Which outer wall a per-side projection traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallSide {
    Left,
    Right,
}

/// Sparse per-row anchor column of a side projection: the leftmost (left
/// side) or rightmost (right side) foreground pixel of every non-empty row,
/// sorted by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnProfile {
    pub side: WallSide,
    entries: Vec<(usize, usize)>,
}

impl ColumnProfile {
    pub fn from_projection(raster: &BinaryImage, side: WallSide) -> Self {
        let entries = raster
            .rows()
            .enumerate()
            .filter_map(|(y, row)| {
                let x = match side {
                    WallSide::Left => row.iter().position(|&v| v),
                    WallSide::Right => row.iter().rposition(|&v| v),
                }?;
                Some((y, x))
            })
            .collect();
        Self { side, entries }
    }

    /// Anchor column at row `y`, `None` for an empty row.
    pub fn x_at(&self, y: usize) -> Option<usize> {
        self.entries
            .binary_search_by_key(&y, |&(row, _)| row)
            .ok()
            .map(|i| self.entries[i].1)
    }

    /// `(y, x)` pairs in row order.
    pub fn entries(&self) -> &[(usize, usize)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
