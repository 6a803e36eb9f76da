//! Cross-difference cost over combined-intensity patch vectors.
//!
//! Often mislabeled "normalized cross-correlation", but the formula is
//! different: with intensity vectors `a` and `b` over the clipped window
//! and their means `m_a`, `m_b`,
//!
//! ```text
//! num = Σ (a_k − b_k)²
//! d0  = Σ (a_k − m_a)²
//! d1  = Σ (b_k − m_b)²
//! cost = num² / (d0 · d1)
//! ```
//!
//! Unlike textbook NCC this stays a cost (lower = more similar), consistent
//! with the other variants, at the price of being undefined for uniform
//! patches. That case is hardened into a large finite sentinel instead of a
//! non-finite division result.

use super::{clip_window, MatchWindow, DEGENERATE_COST};
use crate::image::RgbImage;

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

    // Per-call scratch keeps the scorer safe under row-parallel execution.
    let n = clip.samples();
    let mut im0 = Vec::with_capacity(n);
    let mut im1 = Vec::with_capacity(n);
    for i in clip.si..=clip.ei {
        let xx0 = (x0 + i) as usize;
        let xx1 = (x1 + i) as usize;
        for yy in clip.sy..=clip.ey {
            let yy = yy as usize;
            im0.push(reference.intensity(xx0, yy));
            im1.push(comparison.intensity(xx1, yy));
        }
    }

    let inv_n = 1.0 / n as f64;
    let mean0 = im0.iter().sum::<f64>() * inv_n;
    let mean1 = im1.iter().sum::<f64>() * inv_n;

    let mut num = 0.0f64;
    let mut denom0 = 0.0f64;
    let mut denom1 = 0.0f64;
    for (&a, &b) in im0.iter().zip(im1.iter()) {
        let d = a - b;
        num += d * d;
        denom0 += (a - mean0) * (a - mean0);
        denom1 += (b - mean1) * (b - mean1);
    }

    let denom = denom0 * denom1;
    if denom <= 0.0 {
        return DEGENERATE_COST;
    }
    (num * num) / denom
}
