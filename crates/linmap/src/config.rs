use std::f64::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::DimensionMismatch;
use crate::math::Vector;
use crate::render::{Color, Palette, SceneStyle, Surface};
use crate::transform::{self, AffineMap};

/// Central configuration for a demo run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub canvas: CanvasConfig,
    /// Side of the starting square, also the box random points are drawn from.
    pub init_size: u32,
    /// Frames drawn, the starting one included.
    pub total_steps: usize,
    pub transform: TransformConfig,
    /// Point 0 of the point set.
    pub fixed_point: [f64; 2],
    /// Seed for the random points; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub draw_axes: bool,
    pub draw_trajectories: bool,
}

/// Drawing surface and styling.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub palette: Palette,
    pub dot_radius: f64,
}

/// Parameters of `v -> S * R * v + d`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TransformConfig {
    /// Diagonal of the scale matrix `S`.
    pub scale: [f64; 2],
    /// Rotation angle of `R`, in radians.
    pub rotation: f64,
    /// Translation `d`; defaults to `(init_size / 5, 0)`.
    pub translation: Option<[f64; 2]>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            background: Color::WHITE,
            palette: Palette::default(),
            dot_radius: 1.0,
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            scale: [0.5, 0.8],
            rotation: 9.0 * PI / 16.0,
            translation: None,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            init_size: 490,
            total_steps: 8,
            transform: TransformConfig::default(),
            fixed_point: [68.51347837188396, 46.50021529631321],
            seed: None,
            draw_axes: false,
            draw_trajectories: false,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.total_steps == 0 {
            anyhow::bail!("total_steps must be at least 1");
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            anyhow::bail!(
                "canvas must have a non-zero size, got {}x{}",
                self.canvas.width,
                self.canvas.height
            );
        }
        if !(self.canvas.dot_radius.is_finite() && self.canvas.dot_radius >= 0.0) {
            anyhow::bail!("dot_radius must be a non-negative number");
        }
        Ok(())
    }

    pub fn translation(&self) -> Vector {
        match self.transform.translation {
            Some(d) => Vector::from(d),
            None => Vector::from([self.init_size as f64 / 5.0, 0.0]),
        }
    }

    /// `S * R` and `d` as an [`AffineMap`].
    pub fn affine_map(&self) -> Result<AffineMap, DimensionMismatch> {
        let [sx, sy] = self.transform.scale;
        let m_scale = transform::scale(sx, sy);
        let m_rotate = transform::rotation(self.transform.rotation);
        let m = transform::compose(&m_scale, &m_rotate)?;
        log::info!("m_scale\n{}", m_scale.pretty_str());
        log::info!("m_rotate\n{}", m_rotate.pretty_str());
        log::info!("m\n{}", m.pretty_str());
        AffineMap::new(m, self.translation())
    }

    pub fn surface(&self) -> Surface {
        Surface::new(self.canvas.width, self.canvas.height)
    }

    pub fn scene_style(&self) -> SceneStyle {
        SceneStyle {
            surface: self.surface(),
            palette: self.canvas.palette.clone(),
            background: self.canvas.background,
            dot_radius: self.canvas.dot_radius,
            draw_axes: self.draw_axes,
            draw_trajectories: self.draw_trajectories,
        }
    }
}

/// Load a demo configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.as_ref().display()))?;
    Ok(config)
}
