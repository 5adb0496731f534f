use thiserror::Error;

/// Core error type for all lineal operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LinalgError {
    #[error("Empty matrix: operation requires at least one row and one column")]
    EmptyMatrix,

    #[error("Empty vector")]
    EmptyVector,

    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Index out of bounds: index {index} for axis {axis} with size {size}")]
    IndexOutOfBounds {
        index: usize,
        axis: usize,
        size: usize,
    },

    #[error("Unsupported dimension {rows}x{cols}: only 2x2 and 3x3 are supported")]
    UnsupportedDimension { rows: usize, cols: usize },

    #[error("The matrix has non-real eigenvalues; only real eigenvalues are supported")]
    NonRealEigenvalues,

    #[error("The matrix is not diagonalizable")]
    NotDiagonalizable,

    #[error("Singular matrix: cannot invert")]
    SingularMatrix,

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type LinalgResult<T> = Result<T, LinalgError>;
