//! Curve error types and results.

use thiserror::Error;

/// Curve result type.
pub type Result<T> = std::result::Result<T, AwsmCurveError>;

/// Errors related to building and indexing curves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AwsmCurveError {
    #[error("[curve] key index {index} out of range (len {len})")]
    KeyIndexOutOfRange { index: usize, len: usize },

    #[error("[curve] curve index {index} out of range (len {len})")]
    CurveIndexOutOfRange { index: usize, len: usize },

    #[error("[curve] non-finite keyframe data {value} at position {index}")]
    NonFiniteKey { index: usize, value: f64 },
}
