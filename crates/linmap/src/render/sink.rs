//! The write-only boundary between the iteration and whatever paints it.
//!
//! The driver only ever emits an ordered, finite stream of commands in
//! logical coordinates; sinks decide how (and whether) they end up on a
//! surface.
use crate::math::Vector;
use crate::render::color::Color;

/// One drawing primitive, in logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Closed polygon through `points`.
    Polygon {
        points: Vec<Vector>,
        outline: Color,
        fill: Color,
    },
    /// Small filled circle.
    Dot {
        center: Vector,
        radius: f64,
        color: Color,
    },
    /// Straight segment.
    Line { from: Vector, to: Vector, color: Color },
}

/// Receiver of drawing commands.
pub trait DrawSink {
    /// Draw a closed polygon with the given stroke and fill.
    fn polygon(&mut self, points: &[Vector], outline: Color, fill: Color);

    /// Draw a filled circle of `radius` around `center`.
    fn dot(&mut self, center: &Vector, radius: f64, color: Color);

    /// Draw a segment from `from` to `to`.
    fn line(&mut self, from: &Vector, to: &Vector, color: Color);
}

/// Dispatch recorded commands to `sink`, in order.
pub fn replay<S: DrawSink + ?Sized>(commands: &[DrawCommand], sink: &mut S) {
    for command in commands {
        match command {
            DrawCommand::Polygon {
                points,
                outline,
                fill,
            } => sink.polygon(points, *outline, *fill),
            DrawCommand::Dot {
                center,
                radius,
                color,
            } => sink.dot(center, *radius, *color),
            DrawCommand::Line { from, to, color } => sink.line(from, to, *color),
        }
    }
}

/// Sink that records every command it receives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSink for CommandList {
    fn polygon(&mut self, points: &[Vector], outline: Color, fill: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            outline,
            fill,
        });
    }

    fn dot(&mut self, center: &Vector, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Dot {
            center: center.clone(),
            radius,
            color,
        });
    }

    fn line(&mut self, from: &Vector, to: &Vector, color: Color) {
        self.commands.push(DrawCommand::Line {
            from: from.clone(),
            to: to.clone(),
            color,
        });
    }
}
