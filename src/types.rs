use serde::{Deserialize, Serialize};

/// Geometry of a staggered hexagonal tile grid in image pixels.
///
/// Cell `(row, col)` is centred at
/// `(start_x + col * spacing_x + row_offset * (row % 2), start_y + row * spacing_y)`:
/// odd rows are shifted right by `row_offset`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    pub hex_width: u32,
    pub hex_height: u32,
    pub rows: usize,
    pub cols: usize,
    pub row_offset: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub spacing_x: f32,
    pub spacing_y: f32,
}

/// Center of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexCell {
    pub row: usize,
    pub col: usize,
    pub center_x: f32,
    pub center_y: f32,
}

/// Manual corrections applied on top of a solved grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub spacing_y: Option<f32>,
}

impl GridOverrides {
    pub fn is_empty(&self) -> bool {
        self.rows.is_none() && self.cols.is_none() && self.spacing_y.is_none()
    }
}

impl GridParams {
    pub fn cell_center(&self, row: usize, col: usize) -> (f32, f32) {
        let shift = if row % 2 == 1 { self.row_offset } else { 0.0 };
        (
            self.start_x + col as f32 * self.spacing_x + shift,
            self.start_y + row as f32 * self.spacing_y,
        )
    }

    /// All cell centers in row-major order, skipping centers that fall
    /// outside a `width`×`height` image.
    pub fn cell_centers(&self, width: usize, height: usize) -> Vec<HexCell> {
        let mut cells = Vec::with_capacity(self.rows * self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let (center_x, center_y) = self.cell_center(row, col);
                if center_x < 0.0
                    || center_y < 0.0
                    || center_x >= width as f32
                    || center_y >= height as f32
                {
                    continue;
                }
                cells.push(HexCell {
                    row,
                    col,
                    center_x,
                    center_y,
                });
            }
        }
        cells
    }

    pub fn with_overrides(mut self, overrides: &GridOverrides) -> Self {
        if let Some(rows) = overrides.rows {
            self.rows = rows;
        }
        if let Some(cols) = overrides.cols {
            self.cols = cols;
        }
        if let Some(spacing_y) = overrides.spacing_y {
            self.spacing_y = spacing_y;
        }
        self
    }
}
