//! Affine transform construction and the starting geometry of the demo.
use rand::Rng;

use crate::error::DimensionMismatch;
use crate::math::{Matrix, Vector};

/// Counter-clockwise rotation by `angle` radians.
///
/// Columns are `(cos, sin)` and `(-sin, cos)`.
pub fn rotation(angle: f64) -> Matrix {
    let (sin, cos) = angle.sin_cos();
    Matrix::from_column_arrays([[cos, sin], [-sin, cos]])
}

/// Axis-aligned scale.
pub fn scale(sx: f64, sy: f64) -> Matrix {
    Matrix::from_column_arrays([[sx, 0.0], [0.0, sy]])
}

/// `scale * rotation`: rotate first, then scale.
pub fn compose(scale: &Matrix, rotation: &Matrix) -> Result<Matrix, DimensionMismatch> {
    scale.mul_matrix(rotation)
}

/// One step of the iterated map: `m * v + d`.
pub fn apply_affine(v: &Vector, m: &Matrix, d: &Vector) -> Result<Vector, DimensionMismatch> {
    m.mul_vector(v)?.add(d)
}

/// The map `v -> M * v + d` with a square `M` matching `d`.
#[derive(Clone, Debug, PartialEq)]
pub struct AffineMap {
    matrix: Matrix,
    translation: Vector,
}

impl AffineMap {
    pub fn new(matrix: Matrix, translation: Vector) -> Result<Self, DimensionMismatch> {
        if !matrix.is_square() {
            return Err(DimensionMismatch::Product {
                left_cols: matrix.cols(),
                right_rows: matrix.rows(),
            });
        }
        if translation.size() != matrix.rows() {
            return Err(DimensionMismatch::Length {
                left: matrix.rows(),
                right: translation.size(),
            });
        }
        Ok(Self {
            matrix,
            translation,
        })
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn translation(&self) -> &Vector {
        &self.translation
    }

    pub fn dim(&self) -> usize {
        self.matrix.rows()
    }

    pub fn apply(&self, v: &Vector) -> Result<Vector, DimensionMismatch> {
        apply_affine(v, &self.matrix, &self.translation)
    }

    pub fn apply_in_place(&self, v: &mut Vector) -> Result<(), DimensionMismatch> {
        *v = self.apply(v)?;
        Ok(())
    }

    /// `M^k * v + (I + M + ... + M^(k-1)) * d`, the k-fold iterate of `v`.
    pub fn iterate_closed_form(&self, v: &Vector, k: u32) -> Result<Vector, DimensionMismatch> {
        let mut power = Matrix::identity(self.dim());
        let mut offset = Vector::zeros(self.dim());
        for _ in 0..k {
            offset.add_assign(&power.mul_vector(&self.translation)?)?;
            power = power.mul_matrix(&self.matrix)?;
        }
        power.mul_vector(v)?.add(&offset)
    }

    /// The point `p` with `M * p + d == p`, if `I - M` is invertible.
    pub fn fixed_point(&self) -> Option<Vector> {
        let system = Matrix::identity(self.dim()).sub(&self.matrix).ok()?;
        solve(&system, &self.translation)
    }
}

/// Gaussian elimination with partial pivoting. `None` for singular systems.
fn solve(a: &Matrix, b: &Vector) -> Option<Vector> {
    let n = a.rows();
    let mut rows: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            let mut row = a.row(i).to_vec();
            row.push(b[i]);
            row
        })
        .collect();

    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| rows[i][col].abs().total_cmp(&rows[j][col].abs()))?;
        if rows[pivot][col].abs() < f64::EPSILON {
            return None;
        }
        rows.swap(col, pivot);
        for i in (col + 1)..n {
            let factor = rows[i][col] / rows[col][col];
            for k in col..=n {
                let delta = factor * rows[col][k];
                rows[i][k] -= delta;
            }
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let tail: f64 = ((i + 1)..n).map(|k| rows[i][k] * x[k]).sum();
        x[i] = (rows[i][n] - tail) / rows[i][i];
    }
    Some(Vector::from_vec(x))
}

/// Rectangle centred on the origin, vertices in counter-clockwise order
/// starting from the upper-right corner.
pub fn rectangle(xsize: u32, ysize: u32) -> Vec<Vector> {
    let (xs, ys) = ((xsize >> 1) as f64, (ysize >> 1) as f64);
    vec![
        Vector::from([xs, ys]),
        Vector::from([-xs, ys]),
        Vector::from([-xs, -ys]),
        Vector::from([xs, -ys]),
    ]
}

/// `n` integer-valued points drawn uniformly from the box
/// `[-xsize/2, xsize/2] x [-ysize/2, ysize/2]`.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, n: usize, xsize: u32, ysize: u32) -> Vec<Vector> {
    let (xs, ys) = ((xsize >> 1) as i64, (ysize >> 1) as i64);
    (0..n)
        .map(|_| {
            Vector::from([
                rng.gen_range(-xs..=xs) as f64,
                rng.gen_range(-ys..=ys) as f64,
            ])
        })
        .collect()
}
