use crate::coords::{Rect, Vec2};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Circle draw payload.
///
/// A gradient paint is positioned in the same space as `center`; moving the
/// circle with [`recentered`](Self::recentered) moves the gradient with it.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, paint: Paint, border: Option<Border>) -> Self {
        Self { center, radius, paint, border }
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    #[inline]
    pub fn is_stroked(&self) -> bool {
        self.border.is_some()
    }

    /// Bounding square of the circle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, Vec2::new(self.diameter(), self.diameter()))
    }

    /// Same circle moved so its center sits at `center`.
    pub fn recentered(self, center: Vec2) -> Self {
        let offset = center - self.center;
        let paint = match self.paint {
            Paint::RadialGradient(g) => {
                let moved = g.center + offset;
                Paint::RadialGradient(g.recentered(moved))
            }
            solid => solid,
        };
        Self { center, paint, ..self }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        paint: Paint,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, paint, border)));
    }
}
