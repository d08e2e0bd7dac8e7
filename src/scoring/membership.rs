//! Membership functions mapping a raw measurement to a degree of fit.
//!
//! Shape parameters are not validated; the caller guarantees ordering
//! (`a <= b <= c <= d`) and a non-zero sigma.

/// Triangular membership over `[a, c]` peaking at `b`.
///
/// A zero-width right side (`b == c`) yields 0 everywhere.
pub fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if b == c {
        return 0.0;
    }
    let rising = (x - a) / (b - a);
    let falling = (c - x) / (c - b);
    rising.min(falling).max(0.0)
}

/// Trapezoidal membership: ramps up over `[a, b]`, plateaus at 1 over
/// `[b, c]`, ramps down over `[c, d]`.
pub fn trapezoidal(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    let rising = (x - a) / (b - a);
    let falling = (d - x) / (d - c);
    rising.min(1.0).min(falling).max(0.0)
}

/// Gaussian membership centred on `mean`. Sigma must be non-zero.
#[inline]
pub fn gaussian(x: f64, mean: f64, sigma: f64) -> f64 {
    (-(x - mean).powi(2) / (2.0 * sigma.powi(2))).exp()
}
