use crate::boundary::BoundaryBox;
use crate::grid::{ColumnSolution, VerticalLayout};
use crate::types::GridParams;

/// Combine the boundary box, the column solution and the vertical layout.
///
/// The first cell sits half a tile inside the top-left corner of the
/// boundary; odd rows are offset by half the horizontal pitch.
pub fn assemble_grid(boundary: &BoundaryBox, columns: &ColumnSolution, layout: &VerticalLayout) -> GridParams {
    let hex_width = columns.hex_width.round().max(1.0) as u32;
    let spacing_x = hex_width as f32;
    GridParams {
        hex_width,
        hex_height: layout.hex_height,
        rows: layout.rows,
        cols: columns.cols,
        row_offset: spacing_x / 2.0,
        start_x: boundary.left as f32 + spacing_x / 2.0,
        start_y: boundary.top as f32 + layout.hex_height as f32 / 2.0,
        spacing_x,
        spacing_y: layout.spacing_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{vertical_layout, SolveStrategy};

    #[test]
    fn grid_starts_half_a_tile_inside_boundary() {
        let boundary = BoundaryBox {
            top: 10,
            bottom: 350,
            left: 20,
            right: 410,
            width: 390,
            height: 340,
        };
        let columns = ColumnSolution {
            strategy: SolveStrategy::MatchedPairs,
            cols: 7,
            hex_width: 60.2,
            confidence: 5,
        };
        let layout = vertical_layout(60.0, 5, boundary.height, 1.0);
        let grid = assemble_grid(&boundary, &columns, &layout);
        assert_eq!(grid.hex_width, 60);
        assert_eq!(grid.hex_height, 60);
        assert_eq!((grid.cols, grid.rows), (7, 5));
        assert_eq!(grid.start_x, 50.0);
        assert_eq!(grid.start_y, 40.0);
        assert_eq!(grid.spacing_x, 60.0);
        assert_eq!(grid.row_offset, 30.0);
        assert!((grid.spacing_y - 70.0).abs() < 1e-4);
    }
}
