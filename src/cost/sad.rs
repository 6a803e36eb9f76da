//! Sum-of-absolute-differences over combined channel intensities.

use super::{clip_window, MatchWindow};
use crate::image::RgbImage;

/// Mean |ΣRGB(ref) − ΣRGB(cmp)| over the clipped window.
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
            acc += (reference.intensity(xx0, yy) - comparison.intensity(xx1, yy)).abs();
        }
    }
    acc / clip.samples() as f64
}
