//! 24-bit uncompressed BMP container reading and writing.
//!
//! The rig capture tooling produces plain `BITMAPINFOHEADER` files: a
//! 54-byte header, 24 bits per pixel, no compression, rows padded to 4-byte
//! multiples and stored bottom-up in BGR order. Anything else is rejected
//! with [`ReconstructError::Format`] before any computation starts.

use super::rgb::RgbImage;
use crate::error::{ReconstructError, Result};
use std::fs;
use std::path::Path;

const HEADER_LEN: usize = 54;
const INFO_HEADER_LEN: u32 = 40;

#[inline]
fn read_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

#[inline]
fn read_u32(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

#[inline]
fn row_stride(width: usize) -> usize {
    (width * 3 + 3) & !3
}

/// Load a 24-bit uncompressed BMP into an [`RgbImage`].
pub fn load_bmp(path: &Path) -> Result<RgbImage> {
    let bytes = fs::read(path)?;
    let fail = |reason: &str| {
        ReconstructError::Format(format!("{}: {reason}", path.display()))
    };

    if bytes.len() < HEADER_LEN {
        return Err(fail("file shorter than the 54-byte header"));
    }
    if &bytes[0..2] != b"BM" {
        return Err(fail("not a bitmap"));
    }
    if read_u16(&bytes, 28) != 24 {
        return Err(fail("not a 24-bit bitmap"));
    }
    if read_u32(&bytes, 30) != 0 {
        return Err(fail("compressed bitmaps are not supported"));
    }

    let width = read_u32(&bytes, 18) as usize;
    let height = read_u32(&bytes, 22) as usize;
    if width == 0 || height == 0 {
        return Err(fail("zero-sized bitmap"));
    }

    let stride = row_stride(width);
    if bytes.len() < HEADER_LEN + stride * height {
        return Err(fail("truncated pixel data"));
    }

    // Rows arrive bottom-up, matching the bottom-left origin of RgbImage.
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        let row = &bytes[HEADER_LEN + y * stride..];
        for x in 0..width {
            let b = row[x * 3];
            let g = row[x * 3 + 1];
            let r = row[x * 3 + 2];
            img.set(x, y, [r, g, b]);
        }
    }
    Ok(img)
}

/// Write an [`RgbImage`] back into the same container. Debug-only helper,
/// not required for point-cloud correctness.
pub fn save_bmp(img: &RgbImage, path: &Path) -> Result<()> {
    let width = img.width();
    let height = img.height();
    let stride = row_stride(width);
    let data_len = stride * height;

    let mut out = Vec::with_capacity(HEADER_LEN + data_len);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&((HEADER_LEN + data_len) as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // reserved
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());
    out.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    out.extend_from_slice(&(width as u32).to_le_bytes());
    out.extend_from_slice(&(height as u32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(data_len as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // x pixels per meter
    out.extend_from_slice(&0u32.to_le_bytes()); // y pixels per meter
    out.extend_from_slice(&0u32.to_le_bytes()); // palette colors
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
    debug_assert_eq!(out.len(), HEADER_LEN);

    let pad = stride - width * 3;
    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = img.get(x, y);
            out.extend_from_slice(&[b, g, r]);
        }
        out.extend(std::iter::repeat(0u8).take(pad));
    }

    fs::write(path, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> RgbImage {
        // 3-wide rows exercise the 4-byte padding path.
        let mut img = RgbImage::new(3, 2);
        img.set(0, 0, [255, 0, 0]);
        img.set(1, 0, [0, 255, 0]);
        img.set(2, 1, [0, 0, 255]);
        img.set(1, 1, [12, 34, 56]);
        img
    }

    #[test]
    fn round_trip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rt.bmp");
        let img = sample_image();
        save_bmp(&img, &path).unwrap();

        let back = load_bmp(&path).unwrap();
        assert_eq!(back.width(), img.width());
        assert_eq!(back.height(), img.height());
        for y in 0..img.height() {
            for x in 0..img.width() {
                assert_eq!(back.get(x, y), img.get(x, y), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn rejects_wrong_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.bmp");
        std::fs::write(&path, vec![0u8; 100]).unwrap();
        let err = load_bmp(&path).unwrap_err();
        assert!(matches!(err, ReconstructError::Format(_)));
    }

    #[test]
    fn rejects_truncated_pixel_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.bmp");
        let img = sample_image();
        save_bmp(&img, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() - 4]).unwrap();
        assert!(load_bmp(&path).is_err());
    }
}
