use std::error::Error;
use std::fmt;

/// Operand shapes are incompatible for the requested algebraic operation.
///
/// Raised before any element of the result is computed.
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionMismatch {
    /// Vectors of different length.
    Length { left: usize, right: usize },
    /// Matrices of different `(rows, cols)`.
    Shape {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Left operand column count differs from the right operand's row count.
    Product { left_cols: usize, right_rows: usize },
    /// A column whose length differs from the first column.
    RaggedColumns {
        column: usize,
        expected: usize,
        found: usize,
    },
    /// A matrix needs at least one row and one column.
    Empty,
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DimensionMismatch::Length { left, right } => write!(
                f,
                "can not combine vectors of different length ({} and {})",
                left, right
            ),
            DimensionMismatch::Shape { left, right } => write!(
                f,
                "matrices of different sizes are not supported in this context ({}x{} and {}x{})",
                left.0, left.1, right.0, right.1
            ),
            DimensionMismatch::Product {
                left_cols,
                right_rows,
            } => write!(
                f,
                "number of columns in left operand of multiplication ({}) must be equal to number of rows in right operand ({})",
                left_cols, right_rows
            ),
            DimensionMismatch::RaggedColumns {
                column,
                expected,
                found,
            } => write!(
                f,
                "column {} has {} rows, expected {}",
                column, found, expected
            ),
            DimensionMismatch::Empty => write!(f, "matrix must have at least one row and one column"),
        }
    }
}

impl Error for DimensionMismatch {}
