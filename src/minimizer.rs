//! Sub-pixel refinement of the discrete cost minimum.
//!
//! Given the ordered cost samples for displacements `[from, to]`, find the
//! continuous displacement minimizing the underlying cost curve: locate the
//! least discrete sample, then fit a quadratic through it and its two
//! neighbors and return the vertex. The closed form below is the
//! equally-spaced 3-point fit; downstream depth conversion is sensitive to
//! it, so the coefficients are spelled out rather than approximated.

/// Continuous-valued displacement minimizing the sampled cost curve.
///
/// `values[k]` is the cost at displacement `from + k`, with
/// `values.len() == to − from + 1`.
///
/// The scan runs right-to-left and resolves ties toward the lowest index.
/// When the minimum sits at either domain boundary there is no symmetric
/// neighbor to fit through and the integer boundary is returned unchanged.
/// The same applies when the three samples are colinear (zero curvature).
pub fn parabolic_minimum(from: i32, to: i32, values: &[f64]) -> f64 {
    debug_assert_eq!(values.len(), (to - from + 1) as usize);
    debug_assert!(!values.is_empty());

    let last = values.len() - 1;
    let mut best = last;
    let mut best_val = values[last];
    for k in (0..last).rev() {
        if values[k] <= best_val {
            best = k;
            best_val = values[k];
        }
    }

    let x = f64::from(from + best as i32);
    if best == 0 || best == last {
        return x;
    }

    let ym = values[best - 1];
    let y0 = values[best];
    let yp = values[best + 1];

    // m(d) = a·d² + b·d + c through (x−1, ym), (x, y0), (x+1, yp).
    let a = 0.5 * (ym - 2.0 * y0 + yp);
    if a == 0.0 {
        return x;
    }
    let b = 0.5 * (yp - ym) - 2.0 * a * x;

    // The minimum sits at the null of the derivative.
    -b / (2.0 * a)
}
