//! RGBA colours and the cyclic palette used for successive frames.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
///
/// Serialized as a CSS-style string (`"red"`, `"#a52a2a"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const OLIVE: Color = Color::rgb(128, 128, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    const NAMED: [(&'static str, Color); 11] = [
        ("white", Color::WHITE),
        ("black", Color::BLACK),
        ("red", Color::RED),
        ("green", Color::GREEN),
        ("blue", Color::BLUE),
        ("orange", Color::ORANGE),
        ("magenta", Color::MAGENTA),
        ("cyan", Color::CYAN),
        ("brown", Color::BROWN),
        ("olive", Color::OLIVE),
        ("yellow", Color::YELLOW),
    ];

    /// `#rrggbb` for opaque colors, `rgba(...)` otherwise.
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Some((_, color)) = Color::NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(*color);
        }
        let hex = lower
            .strip_prefix('#')
            .ok_or_else(|| format!("Unknown color: {}", s))?;
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .ok_or_else(|| format!("Invalid hex color: {}", s))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(format!("Invalid hex color: {}", s)),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        Color::NAMED
            .iter()
            .find(|(_, c)| *c == color)
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| color.to_css())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from(*self))
    }
}

/// Non-empty list of colors, indexed cyclically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette(Vec<Color>);

impl Palette {
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self(colors))
        }
    }

    /// `colors[index % len]`.
    pub fn color(&self, index: usize) -> Color {
        self.0[index % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = String;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Palette::new(colors).ok_or_else(|| "palette must contain at least one color".to_string())
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            Color::RED,
            Color::GREEN,
            Color::BLUE,
            Color::ORANGE,
            Color::MAGENTA,
            Color::CYAN,
            Color::BROWN,
            Color::OLIVE,
            Color::YELLOW,
        ])
    }
}
