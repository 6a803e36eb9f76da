//! Debug output helpers: grayscale PNG and JSON reports.

use crate::error::Result;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Save an 8-bit grayscale buffer (bottom row first) to a PNG.
pub fn save_grayscale_png(width: usize, height: usize, data: &[u8], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            // PNG rows run top-down; flip back from the bottom-left origin.
            out.put_pixel(x as u32, (height - 1 - y) as u32, Luma([data[y * width + x]]));
        }
    }
    out.save(path)
        .map_err(|e| io::Error::other(format!("failed to save {}: {e}", path.display())))?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::other(format!("failed to serialize JSON: {e}")))?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
