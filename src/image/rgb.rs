//! Owned 24-bit RGB image in row-major layout.
//!
//! Row 0 is the **bottom** scanline; the origin convention is inherited from
//! the bitmap container so that pixel coordinates map directly to the
//! camera frame with Y pointing up. Buffers are immutable for the duration
//! of a reconstruction run.

use crate::error::{ReconstructError, Result};

/// Owned RGB pixel buffer, three bytes per pixel, tightly packed.
#[derive(Clone, Debug)]
pub struct RgbImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImage {
    /// Construct a black image of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * 3],
        }
    }

    /// Wrap raw interleaved RGB bytes (`width * height * 3`, bottom row first).
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height * 3 {
            return Err(ReconstructError::Format(format!(
                "pixel buffer is {} bytes, expected {} for {}x{}",
                data.len(),
                width * height * 3,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 3
    }

    /// RGB triplet at (x, y); y = 0 addresses the bottom row.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = self.idx(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = self.idx(x, y);
        self.data[i] = rgb[0];
        self.data[i + 1] = rgb[1];
        self.data[i + 2] = rgb[2];
    }

    /// Combined R+G+B intensity scalar used by the SAD and cross-difference
    /// costs.
    #[inline]
    pub fn intensity(&self, x: usize, y: usize) -> f64 {
        let i = self.idx(x, y);
        f64::from(self.data[i]) + f64::from(self.data[i + 1]) + f64::from(self.data[i + 2])
    }

    /// One packed RGB row, bottom row at y = 0.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width * 3;
        &self.data[start..start + self.width * 3]
    }
}

/// The three rectified views participating in one reconstruction run.
///
/// The matching core indexes all three with the same row coordinate, so the
/// constructor enforces identical dimensions up front.
#[derive(Clone, Debug)]
pub struct TrinocularViews {
    pub center: RgbImage,
    pub left: RgbImage,
    pub right: RgbImage,
}

impl TrinocularViews {
    pub fn new(center: RgbImage, left: RgbImage, right: RgbImage) -> Result<Self> {
        for (label, view) in [("left", &left), ("right", &right)] {
            if view.width() != center.width() || view.height() != center.height() {
                return Err(ReconstructError::DimensionMismatch {
                    center_w: center.width(),
                    center_h: center.height(),
                    label,
                    other_w: view.width(),
                    other_h: view.height(),
                });
            }
        }
        Ok(Self {
            center,
            left,
            right,
        })
    }

    pub fn width(&self) -> usize {
        self.center.width()
    }

    pub fn height(&self) -> usize {
        self.center.height()
    }
}
