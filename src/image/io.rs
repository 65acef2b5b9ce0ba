//! Disk I/O for edge rasters and JSON artifacts.
//!
//! - `load_edge_raster`: read a PNG/JPEG, convert to luma and threshold
//!   (nonzero = edge).
//! - `save_binary_png`: write a binary raster as a black/white PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BinaryImage, ImageU8};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and threshold it into an edge raster.
pub fn load_edge_raster(path: &Path) -> Result<BinaryImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let data = img.into_raw();
    let view = ImageU8 {
        w,
        h,
        stride: w,
        data: &data,
    };
    Ok(BinaryImage::from_u8(&view))
}

/// Save a binary raster as an 8-bit PNG (foreground = 255).
pub fn save_binary_png(raster: &BinaryImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out = GrayImage::from_fn(raster.w as u32, raster.h as u32, |x, y| {
        Luma([if raster.get(x as usize, y as usize) { 255 } else { 0 }])
    });
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {e}", parent.display())),
        _ => Ok(()),
    }
}
