use crate::coords::Vec2;

use super::Rgba;

/// A single gradient stop.
///
/// `offset` is a fraction of the gradient extent, expected in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Radial gradient definition in logical pixel space.
///
/// Semantics:
/// - `center` is in the same coordinate space as geometry.
/// - `radius` is the distance at which offset `1.0` is reached.
/// - Stops use straight-alpha colors; distances beyond the last stop take the
///   last stop's color (pad spread).
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self { center, radius, stops }
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// A zero radius is allowed: it describes an empty gradient, not a broken one.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius >= 0.0
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.offset.is_finite())
            && self.stops.windows(2).all(|w| w[0].offset <= w[1].offset)
    }

    /// Same gradient moved so its center sits at `center`.
    #[inline]
    pub fn recentered(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }
}
