use crate::math::Vector;

/// Drawing surface dimensions and the logical-to-surface coordinate map.
///
/// Logical coordinates have the origin at the centre with y pointing up;
/// surface coordinates have the origin at the top-left with y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `(x + W/2, -y + H/2)` using integer halves of the surface size.
    pub fn to_surface(&self, x: f64, y: f64) -> (f64, f64) {
        (x + (self.width >> 1) as f64, -y + (self.height >> 1) as f64)
    }

    pub fn map(&self, pos: &Vector) -> (f64, f64) {
        self.to_surface(pos.x(), pos.y())
    }

    /// Half extents in logical units.
    pub fn half_extent(&self) -> (f64, f64) {
        ((self.width >> 1) as f64, (self.height >> 1) as f64)
    }
}
