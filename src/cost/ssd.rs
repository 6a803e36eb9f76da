//! Per-channel sum-of-squared-differences.

use super::{clip_window, MatchWindow};
use crate::image::RgbImage;

/// Mean of squared per-channel differences over the clipped window.
///
/// R, G and B contribute independently, so two patches with equal average
/// brightness but different hue do not score as identical.
pub(crate) fn score(
    reference: &RgbImage,
    comparison: &RgbImage,
    x0: i32,
    x1: i32,
    y: i32,
    window: MatchWindow,
) -> f64 {
    let Some(clip) = clip_window(window, reference.width(), reference.height(), x0, x1, y) else {
        return 0.0;
    };

    let mut acc = 0.0f64;
    for i in clip.si..=clip.ei {
        let xx0 = (x0 + i) as usize;
        let xx1 = (x1 + i) as usize;
        for yy in clip.sy..=clip.ey {
            let yy = yy as usize;
            let p0 = reference.get(xx0, yy);
            let p1 = comparison.get(xx1, yy);
            let dr = f64::from(p0[0]) - f64::from(p1[0]);
            let dg = f64::from(p0[1]) - f64::from(p1[1]);
            let db = f64::from(p0[2]) - f64::from(p1[2]);
            acc += dr * dr + dg * dg + db * db;
        }
    }
    acc / clip.samples() as f64
}
