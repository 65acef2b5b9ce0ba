use hex_grid_detector::BinaryImage;

/// Set pixels along the segment `p0 -> p1` (Bresenham), clipping to the
/// raster.
pub fn draw_line(img: &mut BinaryImage, p0: (i64, i64), p1: (i64, i64)) {
    let (mut x, mut y) = p0;
    let dx = (p1.0 - x).abs();
    let dy = -(p1.1 - y).abs();
    let sx = if x < p1.0 { 1 } else { -1 };
    let sy = if y < p1.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if x >= 0 && y >= 0 && (x as usize) < img.w && (y as usize) < img.h {
            img.set(x as usize, y as usize, true);
        }
        if x == p1.0 && y == p1.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Outline of a pointy-top hexagon: vertical walls of `2 * side_half + 1`
/// rows at `cx ± half_width`, apexes at `cy ± apex`.
pub fn draw_hex(img: &mut BinaryImage, center: (i64, i64), half_width: i64, side_half: i64, apex: i64) {
    let (cx, cy) = center;
    let v = [
        (cx - half_width, cy - side_half),
        (cx, cy - apex),
        (cx + half_width, cy - side_half),
        (cx + half_width, cy + side_half),
        (cx, cy + apex),
        (cx - half_width, cy + side_half),
    ];
    for i in 0..6 {
        draw_line(img, v[i], v[(i + 1) % 6]);
    }
}

/// Hex outline map. Even rows start at `first_center`; with `staggered` set,
/// odd rows are shifted right by half a tile.
#[derive(Clone, Copy, Debug)]
pub struct HexMap {
    pub width: usize,
    pub height: usize,
    pub hexes_per_row: usize,
    pub rows: usize,
    pub hex_width: i64,
    pub row_pitch: i64,
    pub first_center: (i64, i64),
    pub staggered: bool,
}

impl HexMap {
    /// 6 hexes of 60 px per row, 5 rows 70 px apart. Even-row walls sit at
    /// x = 20, 80, ..., 380 and odd-row walls at x = 50, ..., 410; the
    /// outline spans rows 10..=350.
    pub fn reference() -> Self {
        Self {
            width: 440,
            height: 360,
            hexes_per_row: 6,
            rows: 5,
            hex_width: 60,
            row_pitch: 70,
            first_center: (50, 40),
            staggered: true,
        }
    }

    /// 7 hexes of 60 px in each of 5 aligned rows, walls at x = 20, ..., 440.
    pub fn uniform() -> Self {
        Self {
            width: 480,
            hexes_per_row: 7,
            staggered: false,
            ..Self::reference()
        }
    }

    pub fn render(&self) -> BinaryImage {
        let mut img = BinaryImage::new(self.width, self.height);
        let half = self.hex_width / 2;
        for r in 0..self.rows as i64 {
            let shift = if self.staggered && r % 2 == 1 { half } else { 0 };
            for k in 0..self.hexes_per_row as i64 {
                let cx = self.first_center.0 + shift + k * self.hex_width;
                let cy = self.first_center.1 + r * self.row_pitch;
                draw_hex(&mut img, (cx, cy), half, half / 2, half);
            }
        }
        img
    }
}

/// 8-bit copy of a binary raster (edge = 255).
pub fn to_gray_bytes(img: &BinaryImage) -> Vec<u8> {
    img.data.iter().map(|&v| if v { 255 } else { 0 }).collect()
}
