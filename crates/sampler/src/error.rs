use cell_basis::BasisError;

/// Errors from the sampling driver.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SampleError {
    #[error("control point count {got} does not match cell ({expected} expected)")]
    ControlPointCount { expected: usize, got: usize },

    #[error("sample path is empty")]
    EmptyPath,

    #[error("basis evaluation failed: {0}")]
    Basis(#[from] BasisError),

    #[error("failed to serialize table: {0}")]
    Serialize(String),
}
