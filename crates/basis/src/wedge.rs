//! Wedge (triangular prism) basis: a triangle simplex basis in the first
//! two parametric coordinates tensored with a 1-D Bernstein basis along
//! the third.
//!
//! Ordering: triangle index varies fastest, axial level slowest, matching
//! [`crate::lattice::wedge_lattice`].

use crate::bernstein::{bernstein_derivatives, bernstein_values};
use crate::error::BasisError;
use crate::simplex::{
    num_simplex_points, simplex_shape_derivatives, simplex_shape_functions,
};

/// Total control points: C(degree + 2, 2) * (axial_order + 1).
pub fn num_wedge_points(degree: usize, axial_order: usize) -> usize {
    num_simplex_points(2, degree) * (axial_order + 1)
}

/// Evaluate the wedge basis at `pcoord` = (r, s, t), where (r, s) lives on
/// the triangle of the given degree and t spans the axial direction.
///
/// Returns `num_wedge_points` values summing to 1.
pub fn wedge_shape_functions(
    degree: usize,
    axial_order: usize,
    pcoord: &[f64; 3],
) -> Result<Vec<f64>, BasisError> {
    let triangle = simplex_shape_functions(2, degree, pcoord)?;
    let axial = bernstein_values(axial_order, pcoord[2]);

    let mut shape = Vec::with_capacity(triangle.len() * axial.len());
    for level in &axial {
        for tri in &triangle {
            shape.push(tri * level);
        }
    }
    Ok(shape)
}

/// Partial derivatives of the wedge basis, grouped per control point:
/// entry `3 * k + a` holds the derivative of basis function `k` along
/// parametric axis `a`.
pub fn wedge_shape_derivatives(
    degree: usize,
    axial_order: usize,
    pcoord: &[f64; 3],
) -> Result<Vec<f64>, BasisError> {
    let triangle = simplex_shape_functions(2, degree, pcoord)?;
    let triangle_derivs = simplex_shape_derivatives(2, degree, pcoord)?;
    let axial = bernstein_values(axial_order, pcoord[2]);
    let axial_derivs = bernstein_derivatives(axial_order, pcoord[2]);

    let tri_count = triangle.len();
    let mut derivs = vec![0.0; 3 * tri_count * axial.len()];
    for (j, (level, level_slope)) in axial.iter().zip(&axial_derivs).enumerate() {
        for i in 0..tri_count {
            let k = j * tri_count + i;
            derivs[3 * k] = triangle_derivs[2 * i] * level;
            derivs[3 * k + 1] = triangle_derivs[2 * i + 1] * level;
            derivs[3 * k + 2] = triangle[i] * level_slope;
        }
    }
    Ok(derivs)
}
