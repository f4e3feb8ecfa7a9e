//! Minimal dense vector and matrix types.
//!
//! `Vector` owns a fixed-length `f64` buffer and `Matrix` owns an ordered
//! list of column vectors. Every binary operation checks operand shapes
//! before computing and reports [`DimensionMismatch`](crate::error::DimensionMismatch)
//! instead of truncating or broadcasting.
pub mod matrix;
pub mod vector;

pub use matrix::{Matrix, Product};
pub use vector::Vector;
