//! Simplex Bezier basis (segment, triangle, tetrahedron) via multivariate
//! de Casteljau blending over barycentric weights.
//!
//! A basis function is identified by an exponent tuple (i0, i1, ..., i_dim)
//! summing to the degree; its value is the multinomial Bernstein polynomial
//! of the barycentric coordinates. Tuples are enumerated lexicographically
//! by (i_dim, ..., i_1) ascending, i0 implied by the remainder. A degree-2
//! triangle therefore runs (2,0,0), (1,1,0), (0,2,0), (1,0,1), (0,1,1),
//! (0,0,2), which places the vertices at flat indices 0, 2, and 5.
//!
//! The first `dim` components of `pcoord` are the independent simplex
//! coordinates; the implicit zeroth barycentric weight is one minus their
//! sum. Coordinates are not required to sum to 1, so extrapolated queries
//! are allowed.

use crate::error::{BasisError, check_dimension};

/// Number of control points for a simplex of the given dimension and
/// degree: C(degree + dim, dim).
pub fn num_simplex_points(dim: usize, degree: usize) -> usize {
    // Running-product binomial; each partial product divides exactly.
    let mut count = 1usize;
    for j in 1..=dim {
        count = count * (degree + j) / j;
    }
    count
}

/// Exponent tuples for the given dimension and degree, in canonical order.
/// Trailing entries of each tuple beyond `dim` are zero.
pub(crate) fn multi_indices(dim: usize, degree: usize) -> Vec<[usize; 4]> {
    let mut tuples = Vec::with_capacity(num_simplex_points(dim, degree));
    match dim {
        1 => {
            for i1 in 0..=degree {
                tuples.push([degree - i1, i1, 0, 0]);
            }
        }
        2 => {
            for i2 in 0..=degree {
                for i1 in 0..=(degree - i2) {
                    tuples.push([degree - i2 - i1, i1, i2, 0]);
                }
            }
        }
        3 => {
            for i3 in 0..=degree {
                for i2 in 0..=(degree - i3) {
                    for i1 in 0..=(degree - i3 - i2) {
                        tuples.push([degree - i3 - i2 - i1, i1, i2, i3]);
                    }
                }
            }
        }
        _ => unreachable!("dimension validated before enumeration"),
    }
    tuples
}

/// Flat index of an exponent tuple within the canonical enumeration.
fn flat_index(dim: usize, degree: usize, idx: [usize; 4]) -> usize {
    match dim {
        1 => idx[1],
        2 => (0..idx[2]).map(|j| degree + 1 - j).sum::<usize>() + idx[1],
        3 => {
            let layers: usize = (0..idx[3])
                .map(|m| {
                    let d = degree - m;
                    (d + 1) * (d + 2) / 2
                })
                .sum();
            let d = degree - idx[3];
            layers + (0..idx[2]).map(|j| d + 1 - j).sum::<usize>() + idx[1]
        }
        _ => unreachable!("dimension validated before enumeration"),
    }
}

fn barycentric_weights(dim: usize, pcoord: &[f64; 3]) -> [f64; 4] {
    let mut bary = [0.0; 4];
    let mut sum = 0.0;
    for j in 0..dim {
        bary[j + 1] = pcoord[j];
        sum += pcoord[j];
    }
    bary[0] = 1.0 - sum;
    bary
}

/// Evaluate the simplex basis of the given degree at `pcoord`.
///
/// Returns `num_simplex_points(dim, degree)` values in canonical order.
/// The values sum to 1 for any coordinate; degree 0 yields `[1.0]`.
///
/// The pyramid recurrence B(d, I) = sum_j bary[j] * B(d-1, I - e_j) is the
/// simplex counterpart of repeated linear interpolation, so high degrees
/// stay numerically stable.
pub fn simplex_shape_functions(
    dim: usize,
    degree: usize,
    pcoord: &[f64; 3],
) -> Result<Vec<f64>, BasisError> {
    check_dimension(dim)?;
    let bary = barycentric_weights(dim, pcoord);

    let mut current = vec![1.0];
    for d in 1..=degree {
        let tuples = multi_indices(dim, d);
        let mut next = vec![0.0; tuples.len()];
        for (k, idx) in tuples.iter().enumerate() {
            let mut value = 0.0;
            for j in 0..=dim {
                if idx[j] > 0 {
                    let mut lower = *idx;
                    lower[j] -= 1;
                    value += bary[j] * current[flat_index(dim, d - 1, lower)];
                }
            }
            next[k] = value;
        }
        current = next;
    }
    Ok(current)
}

/// Partial derivatives of the simplex basis with respect to the `dim`
/// independent parametric coordinates.
///
/// Output is grouped per control point: entry `dim * k + a` holds the
/// derivative of basis function `k` along coordinate `a`. Since the zeroth
/// barycentric weight carries the negated sum of the others, each
/// derivative is degree * (B(d-1, I - e_{a+1}) - B(d-1, I - e_0)). Axis
/// columns sum to 0.
pub fn simplex_shape_derivatives(
    dim: usize,
    degree: usize,
    pcoord: &[f64; 3],
) -> Result<Vec<f64>, BasisError> {
    check_dimension(dim)?;
    let count = num_simplex_points(dim, degree);
    let mut derivs = vec![0.0; dim * count];
    if degree == 0 {
        return Ok(derivs);
    }

    let lower = simplex_shape_functions(dim, degree - 1, pcoord)?;
    let scale = degree as f64;
    for (k, idx) in multi_indices(dim, degree).iter().enumerate() {
        let against_implicit = if idx[0] > 0 {
            let mut l = *idx;
            l[0] -= 1;
            lower[flat_index(dim, degree - 1, l)]
        } else {
            0.0
        };
        for a in 0..dim {
            let along_axis = if idx[a + 1] > 0 {
                let mut l = *idx;
                l[a + 1] -= 1;
                lower[flat_index(dim, degree - 1, l)]
            } else {
                0.0
            };
            derivs[dim * k + a] = scale * (along_axis - against_implicit);
        }
    }
    Ok(derivs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-7;

    fn assert_shape(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < TOL, "entry {}: {} vs {}", i, a, e);
        }
    }

    #[test]
    fn test_point_counts() {
        assert_eq!(num_simplex_points(1, 3), 4);
        assert_eq!(num_simplex_points(2, 1), 3);
        assert_eq!(num_simplex_points(2, 2), 6);
        assert_eq!(num_simplex_points(3, 1), 4);
        assert_eq!(num_simplex_points(3, 2), 10);
        assert_eq!(num_simplex_points(3, 0), 1);
    }

    #[test]
    fn test_enumeration_order_quadratic_triangle() {
        let tuples = multi_indices(2, 2);
        assert_eq!(
            tuples,
            vec![
                [2, 0, 0, 0],
                [1, 1, 0, 0],
                [0, 2, 0, 0],
                [1, 0, 1, 0],
                [0, 1, 1, 0],
                [0, 0, 2, 0],
            ]
        );
        for (k, idx) in tuples.iter().enumerate() {
            assert_eq!(flat_index(2, 2, *idx), k);
        }
    }

    #[test]
    fn test_flat_index_roundtrip_tetrahedron() {
        for (k, idx) in multi_indices(3, 3).iter().enumerate() {
            assert_eq!(flat_index(3, 3, *idx), k);
        }
    }

    #[test]
    fn test_degree_zero_is_constant() {
        let shape = simplex_shape_functions(2, 0, &[0.3, 0.2, 0.0]).unwrap();
        assert_shape(&shape, &[1.0]);
    }

    #[test]
    fn test_rejects_bad_dimension() {
        assert_eq!(
            simplex_shape_functions(0, 2, &[0.0; 3]),
            Err(BasisError::UnsupportedDimension { dim: 0 })
        );
        assert_eq!(
            simplex_shape_derivatives(4, 2, &[0.0; 3]),
            Err(BasisError::UnsupportedDimension { dim: 4 })
        );
    }

    #[test]
    fn test_linear_triangle_vertices() {
        let shape = simplex_shape_functions(2, 1, &[1.0, 0.0, 0.0]).unwrap();
        assert_shape(&shape, &[0.0, 1.0, 0.0]);

        let shape = simplex_shape_functions(2, 1, &[0.0, 1.0, 0.0]).unwrap();
        assert_shape(&shape, &[0.0, 0.0, 1.0]);

        // Third component is ignored for a triangle; this is the origin
        // vertex, where the implicit weight is 1.
        let shape = simplex_shape_functions(2, 1, &[0.0, 0.0, 1.0]).unwrap();
        assert_shape(&shape, &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_quadratic_triangle_vertices() {
        let shape = simplex_shape_functions(2, 2, &[1.0, 0.0, 0.0]).unwrap();
        assert_shape(&shape, &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);

        let shape = simplex_shape_functions(2, 2, &[0.0, 1.0, 0.0]).unwrap();
        assert_shape(&shape, &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

        let shape = simplex_shape_functions(2, 2, &[0.0, 0.0, 1.0]).unwrap();
        assert_shape(&shape, &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_quadratic_triangle_edge_midpoint() {
        let shape = simplex_shape_functions(2, 2, &[0.5, 0.5, 0.0]).unwrap();
        assert_shape(&shape, &[0.0, 0.0, 0.25, 0.0, 0.5, 0.25]);
    }

    #[test]
    fn test_linear_tetrahedron_vertices() {
        let shape = simplex_shape_functions(3, 1, &[0.0, 0.0, 0.0]).unwrap();
        assert_shape(&shape, &[1.0, 0.0, 0.0, 0.0]);
        let shape = simplex_shape_functions(3, 1, &[1.0, 0.0, 0.0]).unwrap();
        assert_shape(&shape, &[0.0, 1.0, 0.0, 0.0]);
        let shape = simplex_shape_functions(3, 1, &[0.0, 1.0, 0.0]).unwrap();
        assert_shape(&shape, &[0.0, 0.0, 1.0, 0.0]);
        let shape = simplex_shape_functions(3, 1, &[0.0, 0.0, 1.0]).unwrap();
        assert_shape(&shape, &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_partition_of_unity_interior_and_extrapolated() {
        for &p in &[[0.25, 0.3, 0.0], [0.7, 0.6, 0.0], [-0.1, 0.4, 0.0]] {
            let shape = simplex_shape_functions(2, 4, &p).unwrap();
            let sum: f64 = shape.iter().sum();
            assert!((sum - 1.0).abs() < TOL, "sum at {:?} was {}", p, sum);
        }
        let shape =
            simplex_shape_functions(3, 3, &[0.2, 0.3, 0.25]).unwrap();
        let sum: f64 = shape.iter().sum();
        assert!((sum - 1.0).abs() < TOL);
    }

    #[test]
    fn test_derivative_columns_sum_to_zero() {
        let derivs =
            simplex_shape_derivatives(2, 3, &[0.2, 0.5, 0.0]).unwrap();
        let n = num_simplex_points(2, 3);
        for a in 0..2 {
            let sum: f64 = (0..n).map(|k| derivs[2 * k + a]).sum();
            assert!(sum.abs() < TOL, "axis {} summed to {}", a, sum);
        }
    }

    #[test]
    fn test_degree_zero_derivatives_are_zero() {
        let derivs =
            simplex_shape_derivatives(3, 0, &[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(derivs, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_linear_triangle_derivatives() {
        // Linear basis: [1 - r - s, r, s]; the gradient is constant.
        let derivs =
            simplex_shape_derivatives(2, 1, &[0.3, 0.1, 0.0]).unwrap();
        assert_shape(&derivs, &[-1.0, -1.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_derivatives_match_finite_difference() {
        let h = 1e-6;
        let p = [0.3, 0.25, 0.0];
        let derivs = simplex_shape_derivatives(2, 3, &p).unwrap();
        for a in 0..2 {
            let mut lo = p;
            let mut hi = p;
            lo[a] -= h;
            hi[a] += h;
            let f_lo = simplex_shape_functions(2, 3, &lo).unwrap();
            let f_hi = simplex_shape_functions(2, 3, &hi).unwrap();
            for k in 0..f_lo.len() {
                let fd = (f_hi[k] - f_lo[k]) / (2.0 * h);
                assert!(
                    (derivs[2 * k + a] - fd).abs() < 1e-5,
                    "point {} axis {}: {} vs {}",
                    k,
                    a,
                    derivs[2 * k + a],
                    fd
                );
            }
        }
    }
}
