use daub_engine::coords::{Rect, Vec2};
use daub_engine::paint::Paint;
use daub_engine::scene::{Border, DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`. Geometry is given in the owner's local
/// space and translated by `origin`; every call lands one z step above the
/// previous one.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    origin: Vec2,
    z: ZIndex,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, origin: Vec2, base_z: ZIndex) -> Self {
        Self { draw_list, origin, z: base_z }
    }

    /// Rectangle with a paint source and optional border.
    pub fn fill_rect_bordered(&mut self, rect: Rect, paint: impl Into<Paint>, border: Option<Border>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect.translate(self.origin), paint.into(), border);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = self.z;
        self.z = self.z.offset(1);
        z
    }
}
