use thiserror::Error;

/// Errors raised by matrix construction, access and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A dimension was zero
    #[error("Invalid dimension: {rows}x{cols}, both must be positive")]
    InvalidDimension { rows: usize, cols: usize },

    /// Operands have incompatible shapes
    #[error("Dimension mismatch in {}: {}x{} and {}x{}", .op, .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Access outside of the matrix bounds
    #[error("Index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: i128,
        col: i128,
        rows: usize,
        cols: usize,
    },

    /// Operation only defined on square matrices
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Nested rows of different lengths
    #[error("Row {row} has {found} elements, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
