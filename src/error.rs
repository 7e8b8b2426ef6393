use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrustError {
    #[error("Index {index} out of bounds for axis {axis} of size {bound}")]
    IndexOutOfBounds {
        index: usize,
        axis: usize,
        bound: usize,
    },
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    #[error("Cannot concatenate: part {index} has {actual} {axis}, expected {expected}")]
    ConcatMismatch {
        axis: &'static str,
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
    #[error("Cannot concatenate an empty list of matrices")]
    EmptyConcat,
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument { arg: &'static str, reason: String },
    #[error("Non-zero matrix required")]
    ZeroMatrix,
}

impl MatrustError {
    /// Create an index-out-of-bounds error for the given axis.
    pub fn index_out_of_bounds(index: usize, axis: usize, bound: usize) -> Self {
        Self::IndexOutOfBounds { index, axis, bound }
    }

    /// Create a shape mismatch error.
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    /// Create a concatenation mismatch error naming the offending part.
    pub fn concat_mismatch(
        axis: &'static str,
        index: usize,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::ConcatMismatch {
            axis,
            index,
            expected,
            actual,
        }
    }

    /// Create a non-square shape error.
    pub fn not_square(rows: usize, cols: usize) -> Self {
        Self::NotSquare { rows, cols }
    }

    /// Create an invalid shape error.
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape(reason.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrustError>;
