use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

use crate::error::DimensionMismatch;
use crate::math::matrix::{Matrix, Product};

/// Fixed-length sequence of `f64` values.
///
/// The length is set at construction; elements can be updated in place by
/// the `*_assign` operations but the buffer never grows or shrinks.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self::new(data)
    }

    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// First coordinate of a 2-D position.
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Second coordinate of a 2-D position.
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    fn ensure_compatible(&self, other: &Vector) -> Result<(), DimensionMismatch> {
        if self.size() != other.size() {
            return Err(DimensionMismatch::Length {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Vector) -> Result<Vector, DimensionMismatch> {
        self.ensure_compatible(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a + b).collect())
    }

    pub fn sub(&self, other: &Vector) -> Result<Vector, DimensionMismatch> {
        self.ensure_compatible(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a - b).collect())
    }

    /// Elementwise `self += other`, returning `self` for chaining.
    pub fn add_assign(&mut self, other: &Vector) -> Result<&mut Self, DimensionMismatch> {
        self.ensure_compatible(other)?;
        for (a, b) in self.data.iter_mut().zip(other.iter()) {
            *a += b;
        }
        Ok(self)
    }

    /// Elementwise `self -= other`, returning `self` for chaining.
    pub fn sub_assign(&mut self, other: &Vector) -> Result<&mut Self, DimensionMismatch> {
        self.ensure_compatible(other)?;
        for (a, b) in self.data.iter_mut().zip(other.iter()) {
            *a -= b;
        }
        Ok(self)
    }

    pub fn dot(&self, other: &Vector) -> Result<f64, DimensionMismatch> {
        self.ensure_compatible(other)?;
        Ok(dot_unchecked(self.as_slice(), other.as_slice()))
    }

    /// Row-vector times matrix.
    ///
    /// `self` is treated as a 1xN matrix and multiplied through
    /// [`Matrix::mul_collapsed`], so a single-column product comes back as a
    /// one-element [`Product::Vector`].
    pub fn mul_matrix(&self, matrix: &Matrix) -> Result<Product, DimensionMismatch> {
        Matrix::row_vector(self)?.mul_collapsed(matrix)
    }

    /// One element per line.
    pub fn pretty_str(&self) -> String {
        self.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub(crate) fn dot_unchecked(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::from_vec(value)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(value: [f64; N]) -> Self {
        Vector::from_vec(value.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
