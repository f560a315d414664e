//! Caller-side combination of shape values with control-point geometry.
//!
//! The basis evaluator never touches world coordinates; interpolation is
//! a weighted sum of control points by shape values, and derivative
//! vectors are the same sum over the per-axis derivative columns.

use nalgebra::Vector3;
use tracing::debug;

use cell_basis::Cell;

use crate::error::SampleError;

fn check_control_points(
    cell: &Cell,
    control_points: &[Vector3<f64>],
) -> Result<(), SampleError> {
    let expected = cell.num_points();
    if control_points.len() != expected {
        return Err(SampleError::ControlPointCount {
            expected,
            got: control_points.len(),
        });
    }
    Ok(())
}

/// Interpolate a world-space position at each parametric sample as the
/// shape-weighted sum of the cell's control points.
pub fn interpolate_positions(
    cell: &Cell,
    samples: &[[f64; 3]],
    control_points: &[Vector3<f64>],
) -> Result<Vec<Vector3<f64>>, SampleError> {
    check_control_points(cell, control_points)?;
    let mut positions = Vec::with_capacity(samples.len());
    for pcoord in samples {
        let shape = cell.shape_functions(pcoord)?;
        let mut p = Vector3::zeros();
        for (w, cp) in shape.iter().zip(control_points) {
            p += cp * *w;
        }
        positions.push(p);
    }
    debug!(samples = samples.len(), "interpolated positions");
    Ok(positions)
}

/// Interpolate world-space partial derivative vectors at each sample.
///
/// Each entry of the result holds one vector per parametric axis:
/// `result[r][a]` is the derivative of the interpolated position along
/// axis `a` at sample `r`.
pub fn interpolate_derivatives(
    cell: &Cell,
    samples: &[[f64; 3]],
    control_points: &[Vector3<f64>],
) -> Result<Vec<Vec<Vector3<f64>>>, SampleError> {
    check_control_points(cell, control_points)?;
    let dim = cell.dimension();
    let mut out = Vec::with_capacity(samples.len());
    for pcoord in samples {
        let derivs = cell.shape_derivatives(pcoord)?;
        let mut vectors = vec![Vector3::zeros(); dim];
        for (k, cp) in control_points.iter().enumerate() {
            for (a, v) in vectors.iter_mut().enumerate() {
                *v += cp * derivs[dim * k + a];
            }
        }
        out.push(vectors);
    }
    debug!(samples = samples.len(), axes = dim, "interpolated derivatives");
    Ok(out)
}
