use crate::coords::Vec2;

use super::{DrawCmd, DrawList, ZIndex};

/// Something a drawable can be stamped onto by center point.
pub trait Canvas {
    /// Places `drawable` so its center sits at `center`.
    fn add(&mut self, drawable: DrawCmd, center: Vec2);
}

impl Canvas for DrawList {
    fn add(&mut self, drawable: DrawCmd, center: Vec2) {
        log::debug!("canvas: add at ({}, {})", center.x, center.y);
        self.push(ZIndex::CANVAS, drawable.recentered(center));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::{Paint, Rgba};
    use crate::scene::shapes::{CircleCmd, RectCmd};

    #[test]
    fn add_centers_circle() {
        let mut list = DrawList::new();
        let dot = CircleCmd::new(Vec2::zero(), 4.0, Paint::solid(Rgba::transparent()), None);
        list.add(dot.into(), Vec2::new(450.0, 400.0));

        let DrawCmd::Circle(c) = &list.items()[0].cmd else { panic!("expected circle") };
        assert_eq!(c.center, Vec2::new(450.0, 400.0));
        assert_eq!(list.items()[0].key.z, ZIndex::CANVAS);
    }

    #[test]
    fn add_centers_rect() {
        let mut list = DrawList::new();
        let r = RectCmd::new(Rect::new(0.0, 0.0, 10.0, 20.0), Paint::solid(Rgba::transparent()), None);
        list.add(r.into(), Vec2::new(5.0, 5.0));

        let DrawCmd::Rect(r) = &list.items()[0].cmd else { panic!("expected rect") };
        assert_eq!(r.rect, Rect::new(0.0, -5.0, 10.0, 20.0));
    }
}
