use std::fmt;
use std::ops::Index;

use crate::error::DimensionMismatch;
use crate::math::vector::{dot_unchecked, Vector};

/// Column-major matrix: an ordered, non-empty list of equal-length columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    columns: Vec<Vector>,
}

/// Result of a multiplication that collapses single-column products.
#[derive(Clone, Debug, PartialEq)]
pub enum Product {
    Matrix(Matrix),
    Vector(Vector),
}

impl Product {
    pub fn is_vector(&self) -> bool {
        matches!(self, Product::Vector(_))
    }

    pub fn into_vector(self) -> Option<Vector> {
        match self {
            Product::Vector(v) => Some(v),
            Product::Matrix(_) => None,
        }
    }

    pub fn into_matrix(self) -> Option<Matrix> {
        match self {
            Product::Matrix(m) => Some(m),
            Product::Vector(_) => None,
        }
    }
}

impl Matrix {
    /// Build a matrix from its columns.
    ///
    /// Every column must have the length of the first one, and that length
    /// must be non-zero.
    pub fn from_columns(columns: Vec<Vector>) -> Result<Self, DimensionMismatch> {
        let expected = match columns.first() {
            Some(first) if !first.is_empty() => first.size(),
            _ => return Err(DimensionMismatch::Empty),
        };
        if let Some((column, found)) = columns
            .iter()
            .map(Vector::size)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(DimensionMismatch::RaggedColumns {
                column,
                expected,
                found,
            });
        }
        Ok(Self { columns })
    }

    /// Build from fixed-size column arrays, whose shape the type already checks.
    pub fn from_column_arrays<const R: usize, const C: usize>(columns: [[f64; R]; C]) -> Self {
        assert!(R > 0 && C > 0, "matrix must have at least one row and one column");
        Self {
            columns: columns.iter().map(|c| Vector::from(*c)).collect(),
        }
    }

    /// Build a matrix from its rows.
    pub fn from_rows(rows: Vec<Vector>) -> Result<Self, DimensionMismatch> {
        Ok(Self::from_columns(rows)?.transpose())
    }

    /// 1xN matrix holding `v` as its only row.
    pub fn row_vector(v: &Vector) -> Result<Self, DimensionMismatch> {
        Self::from_columns(v.iter().map(|&x| Vector::from([x])).collect())
    }

    /// `n`x`n` matrix with ones on the diagonal.
    pub fn identity(n: usize) -> Self {
        assert!(n > 0, "identity matrix needs at least one column");
        let columns = (0..n)
            .map(|j| (0..n).map(|i| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Self { columns }
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.columns[0].size()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn column(&self, col: usize) -> &Vector {
        &self.columns[col]
    }

    pub fn columns(&self) -> &[Vector] {
        &self.columns
    }

    /// Row `row`, assembled by reading that element from every column.
    pub fn row(&self, row: usize) -> Vector {
        assert!(row < self.rows(), "row index out of bounds");
        self.columns.iter().map(|c| c[row]).collect()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.columns[col][row]
    }

    pub fn transpose(&self) -> Matrix {
        Self {
            columns: (0..self.rows()).map(|i| self.row(i)).collect(),
        }
    }

    fn ensure_same_size(&self, other: &Matrix) -> Result<(), DimensionMismatch> {
        if self.shape() != other.shape() {
            return Err(DimensionMismatch::Shape {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn ensure_multiplicable(&self, right_rows: usize) -> Result<(), DimensionMismatch> {
        if self.cols() != right_rows {
            return Err(DimensionMismatch::Product {
                left_cols: self.cols(),
                right_rows,
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, DimensionMismatch> {
        self.ensure_same_size(other)?;
        let columns = self
            .columns
            .iter()
            .zip(other.columns.iter())
            .map(|(a, b)| a.add(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { columns })
    }

    pub fn sub(&self, other: &Matrix) -> Result<Matrix, DimensionMismatch> {
        self.ensure_same_size(other)?;
        let columns = self
            .columns
            .iter()
            .zip(other.columns.iter())
            .map(|(a, b)| a.sub(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { columns })
    }

    pub fn add_assign(&mut self, other: &Matrix) -> Result<&mut Self, DimensionMismatch> {
        self.ensure_same_size(other)?;
        for (a, b) in self.columns.iter_mut().zip(other.columns.iter()) {
            a.add_assign(b)?;
        }
        Ok(self)
    }

    pub fn sub_assign(&mut self, other: &Matrix) -> Result<&mut Self, DimensionMismatch> {
        self.ensure_same_size(other)?;
        for (a, b) in self.columns.iter_mut().zip(other.columns.iter()) {
            a.sub_assign(b)?;
        }
        Ok(self)
    }

    /// Matrix times column vector; the result has `self.rows()` elements.
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector, DimensionMismatch> {
        self.ensure_multiplicable(v.size())?;
        Ok((0..self.rows())
            .map(|i| dot_unchecked(self.row(i).as_slice(), v.as_slice()))
            .collect())
    }

    /// Matrix times matrix. Always returns a matrix, even with one column.
    pub fn mul_matrix(&self, other: &Matrix) -> Result<Matrix, DimensionMismatch> {
        self.ensure_multiplicable(other.rows())?;
        let rows: Vec<Vector> = (0..self.rows()).map(|i| self.row(i)).collect();
        let columns = other
            .columns
            .iter()
            .map(|col| {
                rows.iter()
                    .map(|row| dot_unchecked(row.as_slice(), col.as_slice()))
                    .collect()
            })
            .collect();
        Ok(Self { columns })
    }

    /// Matrix times matrix, returning a bare vector when the product has a
    /// single column.
    pub fn mul_collapsed(&self, other: &Matrix) -> Result<Product, DimensionMismatch> {
        let mut product = self.mul_matrix(other)?;
        if product.cols() == 1 {
            Ok(Product::Vector(product.columns.remove(0)))
        } else {
            Ok(Product::Matrix(product))
        }
    }

    /// `self^k` for a square matrix; `k == 0` gives the identity.
    pub fn pow(&self, k: u32) -> Result<Matrix, DimensionMismatch> {
        self.ensure_multiplicable(self.rows())?;
        let mut result = Matrix::identity(self.rows());
        for _ in 0..k {
            result = result.mul_matrix(self)?;
        }
        Ok(result)
    }

    /// One line per row. Transposes the column storage for display.
    pub fn pretty_str(&self) -> String {
        (0..self.rows())
            .map(|i| self.row(i).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.columns[index.1][index.0]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty_str())
    }
}
