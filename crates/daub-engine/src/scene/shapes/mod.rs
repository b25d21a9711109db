pub(crate) mod circle;
pub(crate) mod rect;

pub use circle::CircleCmd;
pub use rect::RectCmd;

use crate::paint::Rgba;

/// Stroke drawn along the inner edge of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Rgba,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Rgba) -> Self {
        Self { width, color }
    }
}
