//! 1-D Bernstein polynomial evaluation.
//!
//! Values are built with the iterative de Casteljau triangle (repeated
//! linear interpolation between neighbors). The closed-form binomial
//! expression cancels badly at high order, so it is never used here.

/// Evaluate the `order + 1` Bernstein polynomials of the given order at
/// parameter `t`.
///
/// `t` is not clamped; values outside [0, 1] extrapolate. The returned
/// coefficients sum to 1 for any `t`. Order 0 yields the constant basis
/// `[1.0]`.
pub fn bernstein_values(order: usize, t: f64) -> Vec<f64> {
    let mut coeffs = vec![0.0; order + 1];
    coeffs[0] = 1.0;
    let s = 1.0 - t;
    for j in 1..=order {
        let mut saved = 0.0;
        for coeff in coeffs.iter_mut().take(j) {
            let temp = *coeff;
            *coeff = saved + s * temp;
            saved = t * temp;
        }
        coeffs[j] = saved;
    }
    coeffs
}

/// First derivatives of the Bernstein polynomials of the given order at
/// parameter `t`.
///
/// Uses d/dt B(i, n) = n * (B(i-1, n-1) - B(i, n-1)), with out-of-range
/// terms treated as zero. The order-0 basis is constant, so its derivative
/// is `[0.0]`. The entries sum to 0 for any `t`.
pub fn bernstein_derivatives(order: usize, t: f64) -> Vec<f64> {
    if order == 0 {
        return vec![0.0];
    }
    let lower = bernstein_values(order - 1, t);
    let n = order as f64;
    let mut derivs = vec![0.0; order + 1];
    for (i, d) in derivs.iter_mut().enumerate() {
        let below = if i > 0 { lower[i - 1] } else { 0.0 };
        let above = if i < order { lower[i] } else { 0.0 };
        *d = n * (below - above);
    }
    derivs
}
