//! Windowed similarity costs between patches of two rectified views.
//!
//! All three variants share the same contract: `score(...)` quantifies the
//! dissimilarity between the (2I+1)×(2J+1) patch centered at `(x0, y)` in
//! the reference view and the patch centered at `(x1, y)` in the comparison
//! view. Lower is more similar, the function is pure over two read-only
//! images, and both patches are clipped against image bounds before
//! sampling. When either window is clipped away entirely the cost is 0.0,
//! an inherited bias that treats out-of-bounds comparisons as perfect
//! matches; the sampler relies on this being a defined value rather than an
//! error.

mod crossdiff;
mod sad;
mod ssd;

use crate::image::RgbImage;
use serde::{Deserialize, Serialize};

/// Sentinel cost substituted when the cross-difference denominator vanishes
/// (uniform patch). Large but finite so it never poisons the minimizer.
pub const DEGENERATE_COST: f64 = 1e30;

/// Matching window half-extents: the sampled patch is
/// `(2 * half_width + 1) × (2 * half_height + 1)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MatchWindow {
    pub half_width: i32,
    pub half_height: i32,
}

impl Default for MatchWindow {
    fn default() -> Self {
        Self {
            half_width: 3,
            half_height: 3,
        }
    }
}

/// Cost function selected once per run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    /// Mean absolute difference of combined R+G+B intensities.
    Sad,
    /// Mean per-channel squared difference. Channels stay separate so two
    /// patches with equal brightness but different hue score non-zero.
    #[default]
    Ssd,
    /// Squared sum-of-squared-differences over the patch variances. Despite
    /// the lineage this is *not* normalized cross-correlation; see the
    /// module docs in [`crossdiff`].
    CrossDifference,
}

/// Window offsets surviving the clip against both image bounds.
///
/// `si..=ei` are horizontal offsets applied to both `x0` and `x1`;
/// `sy..=ey` are absolute row coordinates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ClippedWindow {
    pub si: i32,
    pub ei: i32,
    pub sy: i32,
    pub ey: i32,
}

impl ClippedWindow {
    #[inline]
    pub fn samples(&self) -> usize {
        ((self.ei - self.si + 1) * (self.ey - self.sy + 1)) as usize
    }
}

/// Clip the window independently in x and y. Returns `None` when no sample
/// survives (either patch fully outside bounds).
pub(crate) fn clip_window(
    window: MatchWindow,
    width: usize,
    height: usize,
    x0: i32,
    x1: i32,
    y: i32,
) -> Option<ClippedWindow> {
    let w = width as i32;
    let h = height as i32;
    let si = -window.half_width.min(x0).min(x1);
    let ei = window.half_width.min(w - 1 - x0).min(w - 1 - x1);
    let sy = (y - window.half_height).max(0);
    let ey = (y + window.half_height).min(h - 1);
    if si > ei || sy > ey {
        return None;
    }
    Some(ClippedWindow { si, ei, sy, ey })
}

/// Score one patch pair with the selected cost variant.
pub fn score(
    kind: CostKind,
    reference: &RgbImage,
    comparison: &RgbImage,
    x0: i32,
    x1: i32,
    y: i32,
    window: MatchWindow,
) -> f64 {
    match kind {
        CostKind::Sad => sad::score(reference, comparison, x0, x1, y, window),
        CostKind::Ssd => ssd::score(reference, comparison, x0, x1, y, window),
        CostKind::CrossDifference => crossdiff::score(reference, comparison, x0, x1, y, window),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_keeps_full_window_in_interior() {
        let win = MatchWindow {
            half_width: 2,
            half_height: 1,
        };
        let clip = clip_window(win, 20, 20, 10, 12, 10).unwrap();
        assert_eq!((clip.si, clip.ei), (-2, 2));
        assert_eq!((clip.sy, clip.ey), (9, 11));
        assert_eq!(clip.samples(), 15);
    }

    #[test]
    fn clip_shrinks_at_corner() {
        let win = MatchWindow {
            half_width: 3,
            half_height: 3,
        };
        let clip = clip_window(win, 10, 10, 0, 1, 0).unwrap();
        assert_eq!((clip.si, clip.ei), (0, 3));
        assert_eq!((clip.sy, clip.ey), (0, 3));
        assert_eq!(clip.samples(), 16);
    }

    #[test]
    fn clip_is_empty_when_comparison_leaves_image() {
        let win = MatchWindow {
            half_width: 2,
            half_height: 2,
        };
        assert!(clip_window(win, 10, 10, 5, -7, 5).is_none());
        assert!(clip_window(win, 10, 10, 5, 14, 5).is_none());
    }
}
