use daub_engine::coords::{Rect, Vec2};

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// The trait every panel child implements.
///
/// Layout is fixed by the owner, so a widget only reports its preferred size
/// and draws into whatever rect it is handed.
pub trait Widget {
    /// Preferred size in logical pixels.
    fn size(&self) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route an input event. `rect` is the widget's bounds in the same space
    /// as the event positions.
    ///
    /// The default implementation does nothing and returns `Ignored`.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }
}
