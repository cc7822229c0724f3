//! Error types for einsum operations.

use thiserror::Error;

/// Errors that can occur during einsum parsing, planning, and execution.
///
/// All variants are caller programming errors detected before any numeric
/// work begins; none are transient or retriable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EinsumError {
    /// The subscript expression itself is invalid (bad character, wrong
    /// number of comma-separated groups, repeated output index, ...).
    #[error("malformed subscript expression: {message}")]
    MalformedSpec { message: String },

    /// A subscript names a different number of axes than its tensor has.
    #[error("subscript '{subscript}' names {expected} axes, tensor has rank {got}")]
    RankMismatch {
        subscript: String,
        expected: usize,
        got: usize,
    },

    /// An output index never appears in any input subscript.
    #[error("output index '{index}' not found in any input")]
    UnknownOutputIndex { index: char },

    /// An index repeats within a single input subscript. Diagonal
    /// extraction is out of scope and rejected rather than computed.
    #[error("index '{index}' repeats within one input subscript; diagonal extraction is not supported")]
    RepeatedIndexUnsupported { index: char },

    /// Two tensors disagree on the extent bound to a shared index.
    #[error("size mismatch for index '{index}': expected {expected}, got {got}")]
    DimensionMismatch {
        index: char,
        expected: usize,
        got: usize,
    },

    /// No input tensors were provided.
    #[error("at least one input tensor is required")]
    EmptyInputList,

    /// Tensor construction received data inconsistent with its shape.
    #[error("shape error: {message}")]
    ShapeError { message: String },
}

impl EinsumError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSpec {
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::ShapeError {
            message: message.into(),
        }
    }
}

/// Result type for einsum operations.
pub type EinsumResult<T> = core::result::Result<T, EinsumError>;
