use crate::coords::{Rect, Vec2};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint, border: Option<Border>) -> Self {
        Self { rect, paint, border }
    }

    /// Same rectangle moved so its center sits at `center`.
    #[inline]
    pub fn recentered(mut self, center: Vec2) -> Self {
        self.rect = Rect::from_center_size(center, self.rect.size);
        self
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: Paint, border: Option<Border>) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, paint, border)));
    }
}
