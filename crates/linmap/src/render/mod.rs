//! Rendering boundary: colors, the draw-command sink, and concrete sinks.
pub mod color;
pub mod scene;
pub mod sink;
pub mod surface;
pub mod svg;

pub use color::{Color, Palette};
pub use scene::{draw_run, SceneStyle};
pub use sink::{replay, CommandList, DrawCommand, DrawSink};
pub use surface::Surface;
pub use svg::SvgCanvas;
