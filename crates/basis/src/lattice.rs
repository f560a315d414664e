//! Collocation-point lattices, one generator per cell shape.
//!
//! Points come out in exactly the basis enumeration order, so the shape
//! vector entry `k` of any evaluator in this crate belongs to lattice
//! point `k`. Bezier bases only interpolate at cell vertices: evaluating
//! at a vertex node yields that node's indicator vector, while interior
//! nodes blend several basis functions (for linear cells every node is a
//! vertex, so the whole lattice is interpolatory).

use crate::simplex::multi_indices;

/// Position of node `i` on an axis of the given order. An order-0 axis
/// has a single node, placed at 0.
fn axis_coord(i: usize, order: usize) -> f64 {
    if order == 0 {
        0.0
    } else {
        i as f64 / order as f64
    }
}

/// Nodes of a 1-D cell of the given order: order + 1 points along axis 0.
pub fn segment_lattice(order: usize) -> Vec<[f64; 3]> {
    (0..=order)
        .map(|i| [axis_coord(i, order), 0.0, 0.0])
        .collect()
}

/// Nodes of a quadrilateral, row-major with axis 0 varying fastest.
pub fn quadrilateral_lattice(order: [usize; 2]) -> Vec<[f64; 3]> {
    let mut points = Vec::with_capacity((order[0] + 1) * (order[1] + 1));
    for j in 0..=order[1] {
        for i in 0..=order[0] {
            points.push([axis_coord(i, order[0]), axis_coord(j, order[1]), 0.0]);
        }
    }
    points
}

/// Nodes of a hexahedron, row-major with axis 0 varying fastest, then
/// axis 1, then axis 2.
pub fn hexahedron_lattice(order: [usize; 3]) -> Vec<[f64; 3]> {
    let mut points =
        Vec::with_capacity((order[0] + 1) * (order[1] + 1) * (order[2] + 1));
    for k in 0..=order[2] {
        for j in 0..=order[1] {
            for i in 0..=order[0] {
                points.push([
                    axis_coord(i, order[0]),
                    axis_coord(j, order[1]),
                    axis_coord(k, order[2]),
                ]);
            }
        }
    }
    points
}

/// Nodes of a triangle of the given degree, in canonical multi-index
/// order. The node of exponent tuple (i0, i1, i2) sits at (i1, i2) / deg.
pub fn triangle_lattice(degree: usize) -> Vec<[f64; 3]> {
    multi_indices(2, degree)
        .iter()
        .map(|idx| {
            [
                axis_coord(idx[1], degree),
                axis_coord(idx[2], degree),
                0.0,
            ]
        })
        .collect()
}

/// Nodes of a tetrahedron of the given degree, in canonical multi-index
/// order.
pub fn tetrahedron_lattice(degree: usize) -> Vec<[f64; 3]> {
    multi_indices(3, degree)
        .iter()
        .map(|idx| {
            [
                axis_coord(idx[1], degree),
                axis_coord(idx[2], degree),
                axis_coord(idx[3], degree),
            ]
        })
        .collect()
}

/// Nodes of a wedge: triangle lattice per axial level, bottom level first.
pub fn wedge_lattice(degree: usize, axial_order: usize) -> Vec<[f64; 3]> {
    let triangle = triangle_lattice(degree);
    let mut points = Vec::with_capacity(triangle.len() * (axial_order + 1));
    for level in 0..=axial_order {
        let t = axis_coord(level, axial_order);
        for node in &triangle {
            points.push([node[0], node[1], t]);
        }
    }
    points
}
