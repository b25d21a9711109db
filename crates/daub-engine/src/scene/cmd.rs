use crate::coords::Vec2;
use crate::scene::shapes::{CircleCmd, RectCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - teach `raster` how to composite it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
}

impl DrawCmd {
    /// Same command moved so its center sits at `center`.
    pub fn recentered(self, center: Vec2) -> Self {
        match self {
            DrawCmd::Rect(r) => DrawCmd::Rect(r.recentered(center)),
            DrawCmd::Circle(c) => DrawCmd::Circle(c.recentered(center)),
        }
    }
}

impl From<CircleCmd> for DrawCmd {
    #[inline]
    fn from(c: CircleCmd) -> Self {
        DrawCmd::Circle(c)
    }
}

impl From<RectCmd> for DrawCmd {
    #[inline]
    fn from(r: RectCmd) -> Self {
        DrawCmd::Rect(r)
    }
}
