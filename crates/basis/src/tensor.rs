//! Tensor-product Bezier basis for segment, quadrilateral, and hexahedral
//! cells.
//!
//! Control points are enumerated in row-major lattice order with axis 0
//! varying fastest: lattice point (k0, k1, k2) sits at flat index
//! `(k2 * (n1 + 1) + k1) * (n0 + 1) + k0` for per-axis orders (n0, n1, n2).
//! The generators in [`crate::lattice`] emit points in the same order, so
//! `shape[k]` always pairs with lattice point `k`.

use crate::bernstein::{bernstein_derivatives, bernstein_values};
use crate::error::{BasisError, check_dimension};

/// Total control points for the given per-axis orders.
pub fn num_tensor_points(order: &[usize]) -> usize {
    order.iter().map(|n| n + 1).product()
}

/// Evaluate the tensor-product basis at `pcoord`.
///
/// `order` holds one polynomial order per parametric axis and its length
/// fixes the dimensionality (1, 2, or 3). Components of `pcoord` beyond
/// that length are ignored. Returns one value per control point; the
/// values sum to 1 for any coordinate.
pub fn tensor_shape_functions(
    order: &[usize],
    pcoord: &[f64; 3],
) -> Result<Vec<f64>, BasisError> {
    check_dimension(order.len())?;
    let axes: Vec<Vec<f64>> = order
        .iter()
        .zip(pcoord)
        .map(|(&n, &t)| bernstein_values(n, t))
        .collect();

    let total = num_tensor_points(order);
    let mut shape = Vec::with_capacity(total);
    for k in 0..total {
        let mut value = 1.0;
        let mut rem = k;
        for axis in &axes {
            value *= axis[rem % axis.len()];
            rem /= axis.len();
        }
        shape.push(value);
    }
    Ok(shape)
}

/// Partial derivatives of the tensor-product basis at `pcoord`.
///
/// Output is grouped per control point: entry `D * k + a` holds the
/// derivative of basis function `k` along parametric axis `a`, where D is
/// the dimensionality. Each axis column sums to 0, since the basis is a
/// partition of unity.
pub fn tensor_shape_derivatives(
    order: &[usize],
    pcoord: &[f64; 3],
) -> Result<Vec<f64>, BasisError> {
    let dim = order.len();
    check_dimension(dim)?;
    let values: Vec<Vec<f64>> = order
        .iter()
        .zip(pcoord)
        .map(|(&n, &t)| bernstein_values(n, t))
        .collect();
    let slopes: Vec<Vec<f64>> = order
        .iter()
        .zip(pcoord)
        .map(|(&n, &t)| bernstein_derivatives(n, t))
        .collect();

    let total = num_tensor_points(order);
    let mut derivs = vec![0.0; dim * total];
    for k in 0..total {
        let mut idx = [0usize; 3];
        let mut rem = k;
        for (a, &n) in order.iter().enumerate() {
            idx[a] = rem % (n + 1);
            rem /= n + 1;
        }
        for a in 0..dim {
            let mut d = 1.0;
            for b in 0..dim {
                d *= if b == a {
                    slopes[b][idx[b]]
                } else {
                    values[b][idx[b]]
                };
            }
            derivs[dim * k + a] = d;
        }
    }
    Ok(derivs)
}
