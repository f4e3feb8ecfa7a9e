//! Repeated application of an [`AffineMap`] to a figure and a point set.
//!
//! `total_steps` counts frames: the starting figure plus `total_steps - 1`
//! applications of the map. Every figure vertex moves on every application.
//! Points are staggered: application `s` (1-based) moves only the suffix of
//! points with index `>= s`, so point `i` is transformed
//! `min(i, total_steps - 1)` times. Point 0 never moves and the last point
//! follows the figure all the way.
use crate::error::DimensionMismatch;
use crate::math::Vector;
use crate::transform::AffineMap;

/// Positions visited by one point, starting position included.
///
/// `positions()[k]` is where the point sits in frame `k`; the point stays
/// at its last position for the remaining frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    positions: Vec<Vector>,
}

impl Trajectory {
    pub fn positions(&self) -> &[Vector] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of times the map was applied to this point.
    pub fn transforms(&self) -> usize {
        self.positions.len() - 1
    }

    pub fn last(&self) -> &Vector {
        &self.positions[self.positions.len() - 1]
    }
}

/// Geometry produced by [`iterate`].
#[derive(Clone, Debug, PartialEq)]
pub struct IterationRun {
    frames: Vec<Vec<Vector>>,
    trajectories: Vec<Trajectory>,
}

impl IterationRun {
    /// Figure after each application; `frames()[0]` is the starting figure.
    pub fn frames(&self) -> &[Vec<Vector>] {
        &self.frames
    }

    pub fn final_figure(&self) -> &[Vector] {
        &self.frames[self.frames.len() - 1]
    }

    pub fn applications(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    pub fn final_points(&self) -> Vec<Vector> {
        self.trajectories.iter().map(|t| t.last().clone()).collect()
    }
}

/// Run the staggered iteration to completion.
///
/// Any dimension mismatch aborts the whole run; no partial result is
/// returned.
pub fn iterate(
    map: &AffineMap,
    figure: Vec<Vector>,
    points: Vec<Vector>,
    total_steps: usize,
) -> Result<IterationRun, DimensionMismatch> {
    let applications = total_steps.saturating_sub(1);
    let mut figure = figure;
    let mut frames = Vec::with_capacity(applications + 1);
    frames.push(figure.clone());

    let mut trajectories: Vec<Trajectory> = points
        .into_iter()
        .map(|p| Trajectory { positions: vec![p] })
        .collect();

    for step in 1..=applications {
        for vertex in figure.iter_mut() {
            map.apply_in_place(vertex)?;
        }
        for trajectory in trajectories.iter_mut().skip(step) {
            let next = map.apply(trajectory.last())?;
            trajectory.positions.push(next);
        }
        log::debug!(
            "step {}: [{}]",
            step,
            figure
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        frames.push(figure.clone());
    }

    log::trace!(
        "Iterated {} vertices and {} points over {} applications",
        frames[0].len(),
        trajectories.len(),
        applications
    );

    Ok(IterationRun {
        frames,
        trajectories,
    })
}
