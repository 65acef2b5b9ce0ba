use crate::boundary::BoundaryBox;
use crate::types::GridParams;

/// Rough grid from an expected tile count: a square `side × side` layout
/// with `side = floor(sqrt(n * 1.4))` stretched over the boundary box.
///
/// Returns `None` for a zero count or a degenerate boundary.
pub fn estimate_from_tile_count(boundary: &BoundaryBox, expected_tiles: usize) -> Option<GridParams> {
    let side = ((expected_tiles as f64) * 1.4).sqrt().floor() as usize;
    if side == 0 || boundary.width == 0 || boundary.height == 0 {
        return None;
    }
    let spacing_x = boundary.width as f32 / side as f32;
    let spacing_y = boundary.height as f32 / side as f32;
    let hex_width = spacing_x.floor() as u32;
    let hex_height = spacing_y.floor() as u32;
    Some(GridParams {
        hex_width,
        hex_height,
        rows: side,
        cols: side,
        row_offset: (spacing_x / 2.0).floor(),
        start_x: (boundary.left + hex_width as usize / 2) as f32,
        start_y: (boundary.top + hex_height as usize / 2) as f32,
        spacing_x,
        spacing_y,
    })
}
