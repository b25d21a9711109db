//! Soft-edged dots.
//!
//! A dot is a filled, unstroked circle whose fill is a radial gradient. The
//! alpha falloff approximates a raised-cosine (Hann) window with a fixed
//! seven-stop table: only the alpha values scale with the requested peak,
//! the offsets never move.

use crate::brush::BrushConfiguration;
use crate::coords::Vec2;
use crate::paint::{adjust_transparency, ColorStop, Paint, RadialGradient, Rgb};
use crate::scene::CircleCmd;

/// `(offset, alpha multiplier)` pairs of the raised-cosine approximation.
pub const FALLOFF_STOPS: [(f32, f64); 7] = [
    (0.00, 1.00),
    (0.10, 0.96),
    (0.26, 0.84),
    (0.50, 0.50),
    (0.75, 0.16),
    (0.87, 0.04),
    (1.00, 0.00),
];

/// Peak alpha used when stamping with the default renderer.
pub const DEFAULT_PEAK_ALPHA: f64 = 0.2;

/// Gradient stops for a dot of `color` whose center alpha is `peak_alpha`.
///
/// Each stop keeps the RGB of `color`; alpha is
/// `round(peak_alpha * multiplier * 255)`. `peak_alpha` is clamped to `[0, 1]`.
pub fn dot_stops(color: Rgb, peak_alpha: f64) -> Vec<ColorStop> {
    let peak = if peak_alpha.is_nan() { 0.0 } else { peak_alpha.clamp(0.0, 1.0) };
    FALLOFF_STOPS
        .iter()
        .map(|&(offset, multiplier)| {
            ColorStop::new(offset, adjust_transparency(color, peak * multiplier))
        })
        .collect()
}

/// Builds the drawable for one dot.
///
/// The circle has diameter `2 * radius` and the gradient shares its center and
/// extends exactly to its edge. `radius == 0` produces a valid zero-size
/// drawable; nothing here divides by the radius.
pub fn render_dot(center: Vec2, color: Rgb, radius: u32, peak_alpha: f64) -> CircleCmd {
    let radius = radius as f32;
    let gradient = RadialGradient::new(center, radius, dot_stops(color, peak_alpha));
    CircleCmd::new(center, radius, Paint::RadialGradient(gradient), None)
}

/// Renders dots from brush snapshots at a fixed peak alpha.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientDotRenderer {
    peak_alpha: f64,
}

impl GradientDotRenderer {
    #[inline]
    pub const fn new(peak_alpha: f64) -> Self {
        Self { peak_alpha }
    }

    #[inline]
    pub fn peak_alpha(&self) -> f64 {
        self.peak_alpha
    }

    pub fn render(&self, center: Vec2, brush: &BrushConfiguration) -> CircleCmd {
        render_dot(center, brush.color(), brush.radius(), self.peak_alpha)
    }
}

impl Default for GradientDotRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PEAK_ALPHA)
    }
}
