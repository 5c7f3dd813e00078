use thiserror::Error;

/// Input length does not match the model's weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} input dimensions, got {actual}")]
pub struct DimensionMismatch {
    pub expected: usize,
    pub actual: usize,
}
