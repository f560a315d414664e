//! Dense shape-function tables sampled along parametric paths.
//!
//! This is the numeric half of a shape-function study: walk a path of
//! waypoints through the cell's parametric domain, evaluate the full
//! basis at each blended sample, and keep the rows for downstream
//! charting or regression tooling. Nothing here renders.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use cell_basis::Cell;

use crate::error::SampleError;

/// Default number of blend steps between consecutive waypoints.
pub const DEFAULT_SUBDIVISIONS: usize = 16;

/// Blend a waypoint path into a dense list of parametric samples.
///
/// Each consecutive pair contributes its first waypoint followed by
/// `subdivisions - 1` evenly spaced blends toward the next; the final
/// waypoint closes the list. For `n` waypoints the result holds
/// `subdivisions * (n - 1) + 1` samples.
pub fn densify_path(
    waypoints: &[[f64; 3]],
    subdivisions: usize,
) -> Vec<[f64; 3]> {
    let mut samples = Vec::new();
    for (i, p) in waypoints.iter().enumerate() {
        samples.push(*p);
        if i + 1 < waypoints.len() {
            let q = waypoints[i + 1];
            for step in 1..subdivisions {
                let x = step as f64 / subdivisions as f64;
                samples.push([
                    p[0] + (q[0] - p[0]) * x,
                    p[1] + (q[1] - p[1]) * x,
                    p[2] + (q[2] - p[2]) * x,
                ]);
            }
        }
    }
    samples
}

/// A table of shape-function values sampled along a parametric path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeTable {
    /// Cell the table was sampled from.
    pub cell: Cell,
    /// Parametric coordinate of each row.
    pub pcoords: Vec<[f64; 3]>,
    /// One shape vector per row, `cell.num_points()` entries each.
    pub rows: Vec<Vec<f64>>,
}

impl ShapeTable {
    /// Evaluate the cell's basis at every sample.
    #[instrument(skip(samples), fields(samples = samples.len()))]
    pub fn build(
        cell: Cell,
        samples: &[[f64; 3]],
    ) -> Result<Self, SampleError> {
        if samples.is_empty() {
            return Err(SampleError::EmptyPath);
        }
        let mut rows = Vec::with_capacity(samples.len());
        for pcoord in samples {
            rows.push(cell.shape_functions(pcoord)?);
        }
        info!(
            rows = rows.len(),
            points = cell.num_points(),
            "built shape function table"
        );
        Ok(Self {
            cell,
            pcoords: samples.to_vec(),
            rows,
        })
    }

    /// Densify a waypoint path, then build the table over it.
    pub fn from_waypoints(
        cell: Cell,
        waypoints: &[[f64; 3]],
        subdivisions: usize,
    ) -> Result<Self, SampleError> {
        Self::build(cell, &densify_path(waypoints, subdivisions))
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Serialize the table as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SampleError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SampleError::Serialize(e.to_string()))
    }
}
