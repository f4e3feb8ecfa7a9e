use std::path::Path;

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::DemoConfig;
use crate::demo::DemoOutput;
use crate::report::plots::plot_commands;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Self-contained HTML report of one run.
pub fn render_report(config: &DemoConfig, output: &DemoOutput) -> Markup {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let plot = plot_commands(&output.commands, config.surface(), "Iterated affine map");
    let svg = output.to_svg(config);
    let fixed_point = output
        .map
        .fixed_point()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "none (I - M is singular)".to_string());

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "linmap report" }
                script src=(PLOTLY_CDN) {}
                style { "body { font-family: sans-serif; margin: 2em; } td, th { padding: 0 1em; text-align: right; }" }
            }
            body {
                h1 { "Iterated affine map" }
                p { "Generated " (generated) }

                h2 { "Transform" }
                p { "M (scale * rotation)" }
                pre { (output.map.matrix().pretty_str()) }
                p { "d = " (output.map.translation().to_string()) }
                p { "Fixed point of v -> M v + d: " (fixed_point) }

                h2 { "Scene" }
                (svg.to_markup())

                h2 { "Interactive plot" }
                (PreEscaped(plot.to_inline_html(Some("linmap-plot"))))

                h2 { "Frames" }
                table {
                    tr { th { "Frame" } th { "Vertices" } }
                    @for (step, figure) in output.run.frames().iter().enumerate() {
                        tr {
                            td { (step) }
                            td {
                                @for v in figure {
                                    (v.to_string()) " "
                                }
                            }
                        }
                    }
                }

                h2 { "Points" }
                table {
                    tr { th { "Point" } th { "Transforms" } th { "Final position" } }
                    @for (i, trajectory) in output.run.trajectories().iter().enumerate() {
                        tr {
                            td { (i) }
                            td { (trajectory.transforms()) }
                            td { (trajectory.last().to_string()) }
                        }
                    }
                }
            }
        }
    }
}

pub fn write_report<P: AsRef<Path>>(path: P, config: &DemoConfig, output: &DemoOutput) -> Result<()> {
    let html = render_report(config, output).into_string();
    std::fs::write(&path, html)
        .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))
}
