use plotly::common::{Fill, Line, Marker, Mode};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

use crate::render::{DrawCommand, Surface};

/// Plot a recorded command stream in logical coordinates.
///
/// Polygons become closed filled traces named by frame, segments and dots
/// are unlabeled. Axes span the surface so the view matches the SVG.
pub fn plot_commands(commands: &[DrawCommand], surface: Surface, title: &str) -> Plot {
    let mut plot = Plot::new();
    let mut frame = 0usize;

    for command in commands {
        match command {
            DrawCommand::Polygon {
                points,
                outline,
                fill,
            } => {
                let mut xs: Vec<f64> = points.iter().map(|p| p.x()).collect();
                let mut ys: Vec<f64> = points.iter().map(|p| p.y()).collect();
                if let (Some(&x0), Some(&y0)) = (xs.first(), ys.first()) {
                    xs.push(x0);
                    ys.push(y0);
                }
                plot.add_trace(
                    Scatter::new(xs, ys)
                        .name(&format!("Frame {}", frame))
                        .mode(Mode::Lines)
                        .fill(Fill::ToSelf)
                        .fill_color(fill.to_css())
                        .line(Line::new().color(outline.to_css())),
                );
                frame += 1;
            }
            DrawCommand::Dot {
                center,
                radius,
                color,
            } => {
                plot.add_trace(
                    Scatter::new(vec![center.x()], vec![center.y()])
                        .mode(Mode::Markers)
                        .show_legend(false)
                        .marker(
                            Marker::new()
                                .color(color.to_css())
                                .size(((radius * 2.0).round() as usize).max(1) + 4),
                        ),
                );
            }
            DrawCommand::Line { from, to, color } => {
                plot.add_trace(
                    Scatter::new(vec![from.x(), to.x()], vec![from.y(), to.y()])
                        .mode(Mode::Lines)
                        .show_legend(false)
                        .line(Line::new().color(color.to_css())),
                );
            }
        }
    }

    let (hw, hh) = surface.half_extent();
    plot.set_layout(
        Layout::new()
            .title(title)
            .width(surface.width as usize + 200)
            .height(surface.height as usize + 100)
            .x_axis(Axis::new().title("x").range(vec![-hw, hw]))
            .y_axis(Axis::new().title("y").range(vec![-hh, hh])),
    );

    plot
}
