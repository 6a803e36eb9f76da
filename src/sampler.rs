//! Per-pixel displacement search over the bounded depth range.
//!
//! For one output pixel the sampler walks the integer displacement domain
//! shared by the whole run, maps each displacement to the corresponding
//! column in the left and right views, scores both patch pairs and keeps
//! the better of the two. The resulting cost array feeds the sub-pixel
//! minimizer.

use crate::cost::{self, CostKind, MatchWindow};
use crate::error::{ReconstructError, Result};
use crate::image::TrinocularViews;
use serde::{Deserialize, Serialize};

/// Rig geometry, fixed for a run: focal length in pixels, baseline
/// magnitude in scene units (equal for both side cameras), and the depth
/// bounds the search is allowed to cover.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RigParams {
    /// Focal length in pixels.
    pub focal_px: f64,
    /// Center-to-side camera separation in scene units.
    pub baseline: f64,
    /// Nearest reconstructable depth (scene units).
    pub zmin: f64,
    /// Farthest reconstructable depth (scene units).
    pub zmax: f64,
}

impl Default for RigParams {
    fn default() -> Self {
        Self {
            focal_px: 500.0,
            baseline: 0.1,
            zmin: 2.0,
            zmax: 7.5,
        }
    }
}

impl RigParams {
    /// Baseline–focal product, the constant relating displacement and depth.
    #[inline]
    pub fn bf(&self) -> f64 {
        self.baseline * self.focal_px
    }

    /// Physical depth for a (possibly fractional) displacement.
    #[inline]
    pub fn depth(&self, displacement: f64) -> f64 {
        self.bf() / displacement
    }

    /// Derive the integer displacement domain `[floor(BF/zmax), ceil(BF/zmin)]`.
    ///
    /// The domain must contain at least one strictly positive displacement;
    /// a zero displacement would map to infinite depth.
    pub fn disparity_range(&self) -> Result<DisparityRange> {
        if !(self.focal_px > 0.0 && self.baseline > 0.0) {
            return Err(ReconstructError::Config(format!(
                "focal length and baseline must be positive (got F={}, B={})",
                self.focal_px, self.baseline
            )));
        }
        if !(self.zmin > 0.0 && self.zmin < self.zmax) {
            return Err(ReconstructError::Config(format!(
                "depth bounds must satisfy 0 < zmin < zmax (got zmin={}, zmax={})",
                self.zmin, self.zmax
            )));
        }
        let bf = self.bf();
        let min = (bf / self.zmax).floor() as i32;
        let max = (bf / self.zmin).ceil() as i32;
        if min < 1 {
            return Err(ReconstructError::Config(format!(
                "zmax={} exceeds the rig range: displacement floor(BF/zmax)={min} must be >= 1",
                self.zmax
            )));
        }
        if min > max {
            return Err(ReconstructError::Config(format!(
                "empty displacement domain [{min}, {max}]"
            )));
        }
        Ok(DisparityRange { min, max })
    }
}

/// Inclusive integer displacement domain, shared by every output pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DisparityRange {
    pub min: i32,
    pub max: i32,
}

impl DisparityRange {
    /// Number of cost samples per pixel.
    #[inline]
    pub fn len(&self) -> usize {
        (self.max - self.min + 1) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        // Construction through RigParams guarantees min <= max.
        self.len() == 0
    }
}

/// Fill `costs` with one sample per displacement for output pixel `(xc, yc)`.
///
/// Each displacement d maps through depth z = BF/d to a column in the side
/// views: `xl = xc + BF/z`, `xr = xc − BF/z` (opposite baseline signs, one
/// positive magnitude). The mapped coordinates land on the pixel grid by
/// truncation toward zero. Scores against the two side views combine by
/// minimum, so a point occluded in one side view still produces a usable
/// sample from the other.
#[allow(clippy::too_many_arguments)]
pub fn sample_costs(
    views: &TrinocularViews,
    xc: i32,
    yc: i32,
    rig: &RigParams,
    range: DisparityRange,
    window: MatchWindow,
    kind: CostKind,
    costs: &mut Vec<f64>,
) {
    costs.clear();
    costs.reserve(range.len());
    let bf = rig.bf();
    for d in range.min..=range.max {
        let z = bf / f64::from(d);
        // The d -> z -> column round trip, not d directly: truncation below
        // must see the same value the depth conversion uses.
        let shift = bf / z;
        let xl = (f64::from(xc) + shift) as i32;
        let xr = (f64::from(xc) - shift) as i32;
        let ml = cost::score(kind, &views.center, &views.left, xc, xl, yc, window);
        let mr = cost::score(kind, &views.center, &views.right, xc, xr, yc, window);
        costs.push(ml.min(mr));
    }
}
