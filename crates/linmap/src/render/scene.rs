//! Turns an [`IterationRun`] into an ordered stream of draw commands.
use crate::iteration::IterationRun;
use crate::math::Vector;
use crate::render::color::{Color, Palette};
use crate::render::sink::DrawSink;
use crate::render::surface::Surface;

/// How a run is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub surface: Surface,
    pub palette: Palette,
    pub background: Color,
    pub dot_radius: f64,
    pub draw_axes: bool,
    pub draw_trajectories: bool,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            surface: Surface::new(500, 500),
            palette: Palette::default(),
            background: Color::WHITE,
            dot_radius: 1.0,
            draw_axes: false,
            draw_trajectories: false,
        }
    }
}

/// Emit the whole run to `sink`.
///
/// Order: axes (optional), one polygon per frame outlined in the frame's
/// palette color and filled with the background, point trajectories
/// (optional), then the final points joined in index order.
pub fn draw_run<S: DrawSink + ?Sized>(run: &IterationRun, style: &SceneStyle, sink: &mut S) {
    if style.draw_axes {
        draw_axes(style, sink);
    }

    for (step, figure) in run.frames().iter().enumerate() {
        sink.polygon(figure, style.palette.color(step), style.background);
    }

    if style.draw_trajectories {
        for (i, trajectory) in run.trajectories().iter().enumerate() {
            for segment in trajectory.positions().windows(2) {
                sink.line(&segment[0], &segment[1], style.palette.color(i));
            }
        }
    }

    draw_points(&run.final_points(), style, sink);
}

fn draw_axes<S: DrawSink + ?Sized>(style: &SceneStyle, sink: &mut S) {
    let (hw, hh) = style.surface.half_extent();
    sink.line(
        &Vector::from([0.0, hh]),
        &Vector::from([0.0, -hh]),
        Color::BLACK,
    );
    sink.line(
        &Vector::from([-hw, 0.0]),
        &Vector::from([hw, 0.0]),
        Color::BLACK,
    );
}

/// Dot 0 first, then for each later point a segment from its predecessor
/// (in the predecessor's color) followed by its own dot.
fn draw_points<S: DrawSink + ?Sized>(points: &[Vector], style: &SceneStyle, sink: &mut S) {
    let Some(first) = points.first() else {
        return;
    };
    sink.dot(first, style.dot_radius, style.palette.color(0));
    for i in 1..points.len() {
        sink.line(&points[i - 1], &points[i], style.palette.color(i - 1));
        sink.dot(&points[i], style.dot_radius, style.palette.color(i));
    }
}
