//! Error types for minitensor

use thiserror::Error;

/// Result type alias using minitensor's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tensor operations
///
/// Every operation validates its inputs before touching any buffer, so an
/// error always leaves the operands exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Element access with the wrong number of indices
    #[error("Invalid number of indices: expected {expected}, got {got}")]
    InvalidIndexArity {
        /// Rank of the tensor
        expected: usize,
        /// Number of indices supplied
        got: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension {dim} of size {size}")]
    IndexOutOfBounds {
        /// Dimension the index was applied to
        dim: usize,
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Shapes cannot be broadcast together
    #[error("Cannot broadcast shapes {lhs:?} and {rhs:?}")]
    BroadcastError {
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
    },

    /// Scalar division by an exact zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Reshape to a shape with a different element count
    #[error("Cannot reshape {from:?} into {to:?}: element counts differ")]
    ReshapeMismatch {
        /// Current shape
        from: Vec<usize>,
        /// Requested shape
        to: Vec<usize>,
    },

    /// Dot product on tensors that are not equal-length vectors
    #[error("Dot product requires 1-D tensors of the same size, got {lhs:?} and {rhs:?}")]
    DotMismatch {
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
    },

    /// Buffer length does not match the element count of its shape
    #[error("Buffer of {got} elements does not fit shape {shape:?} ({expected} elements)")]
    BufferLengthMismatch {
        /// Requested shape
        shape: Vec<usize>,
        /// Element count of the shape
        expected: usize,
        /// Length of the supplied buffer
        got: usize,
    },

    /// Shape whose element count does not fit in `usize`
    #[error("Element count of shape {shape:?} overflows usize")]
    ShapeOverflow {
        /// The offending shape
        shape: Vec<usize>,
    },
}

impl Error {
    /// Create a shape overflow error
    pub fn shape_overflow(shape: &[usize]) -> Self {
        Self::ShapeOverflow {
            shape: shape.to_vec(),
        }
    }

    /// Create a broadcast error
    pub fn broadcast(lhs: &[usize], rhs: &[usize]) -> Self {
        Self::BroadcastError {
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Create a reshape error
    pub fn reshape(from: &[usize], to: &[usize]) -> Self {
        Self::ReshapeMismatch {
            from: from.to_vec(),
            to: to.to_vec(),
        }
    }

    /// Create a dot product error
    pub fn dot(lhs: &[usize], rhs: &[usize]) -> Self {
        Self::DotMismatch {
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }
}
