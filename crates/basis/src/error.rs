/// Errors from malformed basis-evaluation arguments.
///
/// Evaluation itself cannot fail once arguments are validated; every
/// variant here is a caller programming error, detected before any output
/// is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BasisError {
    #[error("unsupported parametric dimension {dim}, expected 1, 2, or 3")]
    UnsupportedDimension { dim: usize },
}

/// Validate a parametric dimension before evaluating.
pub(crate) fn check_dimension(dim: usize) -> Result<(), BasisError> {
    if (1..=3).contains(&dim) {
        Ok(())
    } else {
        Err(BasisError::UnsupportedDimension { dim })
    }
}
