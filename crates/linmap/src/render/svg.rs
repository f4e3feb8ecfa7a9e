//! SVG rendering of draw commands.
use maud::{html, Markup, PreEscaped};

use crate::math::Vector;
use crate::render::color::Color;
use crate::render::sink::DrawSink;
use crate::render::surface::Surface;

/// Sink that paints into an SVG document of the surface size.
///
/// Elements are emitted in the order commands arrive, so later shapes cover
/// earlier ones.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    surface: Surface,
    background: Color,
    body: String,
}

impl SvgCanvas {
    pub fn new(surface: Surface, background: Color) -> Self {
        Self {
            surface,
            background,
            body: String::new(),
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    fn push(&mut self, markup: Markup) {
        self.body.push_str(&markup.into_string());
    }

    /// The `<svg>` element on its own, for embedding in HTML.
    pub fn to_markup(&self) -> Markup {
        let (w, h) = (self.surface.width, self.surface.height);
        html! {
            svg xmlns="http://www.w3.org/2000/svg" width=(w) height=(h) viewBox=(format!("0 0 {} {}", w, h)) {
                rect x="0" y="0" width=(w) height=(h) fill=(self.background.to_css()) {}
                (PreEscaped(self.body.as_str()))
            }
        }
    }

    /// Standalone SVG document.
    pub fn into_svg(self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n",
            self.to_markup().into_string()
        )
    }
}

impl DrawSink for SvgCanvas {
    fn polygon(&mut self, points: &[Vector], outline: Color, fill: Color) {
        let coords = points
            .iter()
            .map(|p| {
                let (x, y) = self.surface.map(p);
                format!("{},{}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.push(html! {
            polygon points=(coords) stroke=(outline.to_css()) fill=(fill.to_css()) {}
        });
    }

    fn dot(&mut self, center: &Vector, radius: f64, color: Color) {
        let (cx, cy) = self.surface.map(center);
        let css = color.to_css();
        self.push(html! {
            circle cx=(cx.to_string()) cy=(cy.to_string()) r=(radius.to_string()) stroke=(css) fill=(css) {}
        });
    }

    fn line(&mut self, from: &Vector, to: &Vector, color: Color) {
        let (x1, y1) = self.surface.map(from);
        let (x2, y2) = self.surface.map(to);
        self.push(html! {
            line x1=(x1.to_string()) y1=(y1.to_string()) x2=(x2.to_string()) y2=(y2.to_string()) stroke=(color.to_css()) {}
        });
    }
}
