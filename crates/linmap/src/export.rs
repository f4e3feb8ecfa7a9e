//! CSV export of the iterated geometry.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::iteration::IterationRun;

/// One position in the export: a figure vertex at a frame, or a point at a
/// position along its trajectory.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionRecord {
    pub kind: &'static str,
    pub index: usize,
    pub step: usize,
    pub x: f64,
    pub y: f64,
}

/// Flatten a run into records: figure vertices first, frame by frame, then
/// each point's trajectory. A point's `step` is the frame it reached that
/// position in; points stop being recorded once they stop moving.
pub fn records(run: &IterationRun) -> Vec<PositionRecord> {
    let mut out = Vec::new();
    for (step, figure) in run.frames().iter().enumerate() {
        for (index, v) in figure.iter().enumerate() {
            out.push(PositionRecord {
                kind: "figure",
                index,
                step,
                x: v.x(),
                y: v.y(),
            });
        }
    }
    for (index, trajectory) in run.trajectories().iter().enumerate() {
        for (step, v) in trajectory.positions().iter().enumerate() {
            out.push(PositionRecord {
                kind: "point",
                index,
                step,
                x: v.x(),
                y: v.y(),
            });
        }
    }
    out
}

pub fn write_csv<W: Write>(run: &IterationRun, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records(run) {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(run: &IterationRun, path: P) -> Result<()> {
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create CSV file: {}", path.as_ref().display()))?;
    write_csv(run, file)
        .with_context(|| format!("Failed to write CSV file: {}", path.as_ref().display()))
}
