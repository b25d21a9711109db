use daub_engine::brush::SharedBrush;
use daub_engine::coords::{Rect, Vec2};
use daub_engine::paint::Paint;
use daub_engine::scene::Border;

use crate::painter::Painter;
use crate::theme;
use crate::widget::Widget;

/// Square preview of the current brush color.
///
/// Reads the shared brush at paint time, so it always shows the last accepted
/// color without being notified.
pub struct ColorSwatch {
    brush: SharedBrush,
    size: Vec2,
}

impl ColorSwatch {
    pub fn new(brush: SharedBrush) -> Self {
        Self { brush, size: theme::SWATCH_SIZE }
    }
}

impl Widget for ColorSwatch {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rect_bordered(
            rect,
            Paint::solid(self.brush.color()),
            Some(Border::new(1.0, theme::SWATCH_BORDER)),
        );
    }
}
