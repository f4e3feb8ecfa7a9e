//! linmap: small 2-D linear algebra and an iterated affine map demo.
//!
//! The crate provides dense `Vector`/`Matrix` types with checked shapes, the
//! scale/rotation/translation map `v -> M v + d`, a staggered iteration of
//! that map over a square and a point set, and a write-only rendering
//! boundary with SVG, plotly/HTML and CSV outputs.
//!
//! Computation never touches a drawing surface directly: a run is computed
//! to completion and then handed to a [`render::DrawSink`] as an ordered
//! stream of commands.
pub mod config;
pub mod demo;
pub mod error;
pub mod export;
pub mod iteration;
pub mod math;
pub mod render;
pub mod report;
pub mod transform;

pub use error::DimensionMismatch;
