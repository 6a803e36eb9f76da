use depthmatch::image::{RgbImage, TrinocularViews};

/// Generates a deterministic high-variation RGB texture.
pub fn textured_rgb(width: usize, height: usize) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 41 + y * 23) % 253) as u8;
            let g = ((x * 13 + y * 57 + 101) % 251) as u8;
            let b = r.wrapping_mul(3) ^ g;
            img.set(x, y, [r, g, b]);
        }
    }
    img
}

/// Builds a trinocular triple where the scene sits at a single depth: the
/// center texture appears shifted by `+shift` columns in the left view and
/// `−shift` in the right view. Columns without a source pixel clamp to the
/// nearest edge column.
pub fn shifted_triple(width: usize, height: usize, shift: i32) -> TrinocularViews {
    let center = textured_rgb(width, height);
    let mut left = RgbImage::new(width, height);
    let mut right = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let xl = (x as i32 - shift).clamp(0, width as i32 - 1) as usize;
            let xr = (x as i32 + shift).clamp(0, width as i32 - 1) as usize;
            left.set(x, y, center.get(xl, y));
            right.set(x, y, center.get(xr, y));
        }
    }
    TrinocularViews::new(center, left, right).expect("generated views share dimensions")
}
