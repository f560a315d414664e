use serde::{Deserialize, Serialize};

use crate::error::BasisError;
use crate::{lattice, simplex, tensor, wedge};

/// A parametric cell shape together with its polynomial order(s).
///
/// Dispatches to the per-family evaluators so callers can hold a single
/// value describing which basis to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Segment { order: usize },
    Quadrilateral { order: [usize; 2] },
    Hexahedron { order: [usize; 3] },
    Triangle { degree: usize },
    Tetrahedron { degree: usize },
    Wedge { degree: usize, axial_order: usize },
}

impl Cell {
    /// Number of parametric axes.
    pub fn dimension(&self) -> usize {
        match self {
            Cell::Segment { .. } => 1,
            Cell::Quadrilateral { .. } | Cell::Triangle { .. } => 2,
            Cell::Hexahedron { .. }
            | Cell::Tetrahedron { .. }
            | Cell::Wedge { .. } => 3,
        }
    }

    /// Number of control points (= basis functions).
    pub fn num_points(&self) -> usize {
        match self {
            Cell::Segment { order } => order + 1,
            Cell::Quadrilateral { order } => tensor::num_tensor_points(order),
            Cell::Hexahedron { order } => tensor::num_tensor_points(order),
            Cell::Triangle { degree } => simplex::num_simplex_points(2, *degree),
            Cell::Tetrahedron { degree } => {
                simplex::num_simplex_points(3, *degree)
            }
            Cell::Wedge {
                degree,
                axial_order,
            } => wedge::num_wedge_points(*degree, *axial_order),
        }
    }

    /// Basis values at `pcoord`, one per control point, summing to 1.
    pub fn shape_functions(
        &self,
        pcoord: &[f64; 3],
    ) -> Result<Vec<f64>, BasisError> {
        match self {
            Cell::Segment { order } => {
                tensor::tensor_shape_functions(&[*order], pcoord)
            }
            Cell::Quadrilateral { order } => {
                tensor::tensor_shape_functions(order, pcoord)
            }
            Cell::Hexahedron { order } => {
                tensor::tensor_shape_functions(order, pcoord)
            }
            Cell::Triangle { degree } => {
                simplex::simplex_shape_functions(2, *degree, pcoord)
            }
            Cell::Tetrahedron { degree } => {
                simplex::simplex_shape_functions(3, *degree, pcoord)
            }
            Cell::Wedge {
                degree,
                axial_order,
            } => wedge::wedge_shape_functions(*degree, *axial_order, pcoord),
        }
    }

    /// Basis partial derivatives at `pcoord`, grouped per control point:
    /// entry `dimension() * k + a` is the derivative of basis function `k`
    /// along parametric axis `a`.
    pub fn shape_derivatives(
        &self,
        pcoord: &[f64; 3],
    ) -> Result<Vec<f64>, BasisError> {
        match self {
            Cell::Segment { order } => {
                tensor::tensor_shape_derivatives(&[*order], pcoord)
            }
            Cell::Quadrilateral { order } => {
                tensor::tensor_shape_derivatives(order, pcoord)
            }
            Cell::Hexahedron { order } => {
                tensor::tensor_shape_derivatives(order, pcoord)
            }
            Cell::Triangle { degree } => {
                simplex::simplex_shape_derivatives(2, *degree, pcoord)
            }
            Cell::Tetrahedron { degree } => {
                simplex::simplex_shape_derivatives(3, *degree, pcoord)
            }
            Cell::Wedge {
                degree,
                axial_order,
            } => wedge::wedge_shape_derivatives(*degree, *axial_order, pcoord),
        }
    }

    /// Collocation lattice in basis enumeration order.
    pub fn lattice_points(&self) -> Vec<[f64; 3]> {
        match self {
            Cell::Segment { order } => lattice::segment_lattice(*order),
            Cell::Quadrilateral { order } => {
                lattice::quadrilateral_lattice(*order)
            }
            Cell::Hexahedron { order } => lattice::hexahedron_lattice(*order),
            Cell::Triangle { degree } => lattice::triangle_lattice(*degree),
            Cell::Tetrahedron { degree } => {
                lattice::tetrahedron_lattice(*degree)
            }
            Cell::Wedge {
                degree,
                axial_order,
            } => lattice::wedge_lattice(*degree, *axial_order),
        }
    }
}
