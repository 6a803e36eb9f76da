//! Result types produced by the reconstruction driver.

use crate::sampler::DisparityRange;
use nalgebra::Point3;
use serde::Serialize;

/// One reconstructed scene point: position in scene units plus the color of
/// the originating center-view pixel. Records are streamed, not retained.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PointRecord {
    pub position: Point3<f64>,
    pub color: [u8; 3],
}

/// Dense per-pixel continuous displacement, bottom-left origin.
///
/// Pixels skipped by the border policy keep the sentinel `f64::NAN`.
#[derive(Clone, Debug)]
pub struct DepthMap {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl DepthMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![f64::NAN; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, value: f64) {
        self.data[y * self.width + x] = value;
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [f64] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Rescale displacements from `[range.min, range.max]` into `[0, 255]`
    /// for the grayscale debug visualization. Skipped pixels map to 0.
    pub fn to_gray(&self, range: DisparityRange) -> Vec<u8> {
        let span = f64::from(range.max - range.min).max(1.0);
        self.data
            .iter()
            .map(|&md| {
                if md.is_finite() {
                    (((md - f64::from(range.min)) * 255.0 / span).clamp(0.0, 255.0)) as u8
                } else {
                    0
                }
            })
            .collect()
    }
}

/// Summary of one reconstruction run, serializable for JSON reports.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconReport {
    pub width: usize,
    pub height: usize,
    /// Number of point records streamed to the sink.
    pub points: usize,
    pub disparity_min: i32,
    pub disparity_max: i32,
    pub latency_ms: f64,
}
