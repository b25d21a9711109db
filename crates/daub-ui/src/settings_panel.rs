use daub_engine::brush::{BrushConfiguration, SharedBrush};
use daub_engine::coords::{Rect, Vec2};
use daub_engine::paint::Rgb;
use daub_engine::scene::{DrawList, ZIndex};

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::sync::{FieldId, FieldSynchronizer};
use crate::theme;
use crate::widget::Widget;
use crate::widgets::swatch::ColorSwatch;
use crate::widgets::textbox::TextBox;

/// Vertical gap above each field, in `FieldId::ALL` order.
const FIELD_MARGINS: [f32; 4] = [8.0, 4.0, 4.0, 16.0];

/// What a positioned child of the panel is.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ChildKind {
    Swatch,
    Field(FieldId),
    /// Caption for a field. Carries layout only; text rendering is up to the host.
    Label(FieldId),
}

/// A child and its rect in panel-local space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanelChild {
    pub rect: Rect,
    pub kind: ChildKind,
}

/// Brush settings panel: a color swatch above four labelled numeric fields.
///
/// Owns its children rather than extending a container type. The swatch sits
/// at the local origin; fields stack below it and labels hang to the left, so
/// [`bounds`](Self::bounds) has a negative `min.x`.
///
/// # Example
/// ```rust,ignore
/// let mut panel = SettingsPanel::new(Rgb::BLUE, 60);
/// panel.place(Vec2::new(10.0 - panel.bounds().min().x, 10.0));
/// panel.on_event(&UiEvent::Click { pos });
/// panel.paint(&mut canvas);
/// let brush = panel.brush_options();
/// ```
pub struct SettingsPanel {
    origin: Vec2,
    swatch: ColorSwatch,
    sync: FieldSynchronizer<TextBox>,
    children: Vec<PanelChild>,
}

impl SettingsPanel {
    pub fn new(initial_color: Rgb, initial_radius: u32) -> Self {
        let brush = SharedBrush::new(BrushConfiguration::new(initial_color, initial_radius));
        let swatch = ColorSwatch::new(brush.clone());
        let sync = FieldSynchronizer::new(
            brush,
            TextBox::new(),
            TextBox::new(),
            TextBox::new(),
            TextBox::new(),
        );
        let children = layout(swatch.size(), sync.field(FieldId::Red).size());

        Self { origin: Vec2::zero(), swatch, sync, children }
    }

    // ── placement ─────────────────────────────────────────────────────────

    /// Moves the panel's local origin to `origin` in canvas space.
    pub fn place(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Extent of all children in panel-local space.
    pub fn bounds(&self) -> Rect {
        self.children
            .iter()
            .map(|c| c.rect)
            .reduce(Rect::union)
            .unwrap_or_default()
    }

    pub fn children(&self) -> &[PanelChild] {
        &self.children
    }

    /// Label captions with their rects in canvas space.
    pub fn labels(&self) -> impl Iterator<Item = (&'static str, Rect)> + '_ {
        self.children.iter().filter_map(|c| match c.kind {
            ChildKind::Label(id) => Some((id.label(), c.rect.translate(self.origin))),
            _ => None,
        })
    }

    /// Rect of a field in canvas space.
    pub fn field_rect(&self, id: FieldId) -> Option<Rect> {
        self.children
            .iter()
            .find(|c| c.kind == ChildKind::Field(id))
            .map(|c| c.rect.translate(self.origin))
    }

    // ── brush ─────────────────────────────────────────────────────────────

    /// Snapshot of the brush used for painting.
    pub fn brush_options(&self) -> BrushConfiguration {
        self.sync.brush_options()
    }

    /// Sets the color programmatically, refreshing the color fields.
    pub fn set_color(&mut self, color: Rgb) {
        self.sync.apply_color(color);
    }

    pub fn synchronizer(&self) -> &FieldSynchronizer<TextBox> {
        &self.sync
    }

    pub fn synchronizer_mut(&mut self) -> &mut FieldSynchronizer<TextBox> {
        &mut self.sync
    }

    // ── events / paint ────────────────────────────────────────────────────

    /// Routes a canvas-space event to every field.
    ///
    /// Every field sees clicks so the ones outside the click drop focus.
    pub fn on_event(&mut self, event: &UiEvent) -> EventResult {
        let local = event.localized(self.origin);
        let mut result = EventResult::Ignored;
        for child in &self.children {
            if let ChildKind::Field(id) = child.kind {
                let r = self.sync.field_mut(id).on_event(&local, child.rect);
                result = result.or(r);
            }
        }
        result
    }

    /// Records the panel above the paint layer.
    pub fn paint(&self, draw_list: &mut DrawList) {
        let mut painter = Painter::new(draw_list, self.origin, ZIndex::OVERLAY);
        for child in &self.children {
            match child.kind {
                ChildKind::Swatch => self.swatch.paint(&mut painter, child.rect),
                ChildKind::Field(id) => self.sync.field(id).paint(&mut painter, child.rect),
                ChildKind::Label(_) => {}
            }
        }
    }
}

/// Swatch at the origin, then each field `margin` below the previous bottom
/// edge with its label right-aligned in the column to its left.
fn layout(swatch: Vec2, field: Vec2) -> Vec<PanelChild> {
    let mut children = vec![PanelChild {
        rect: Rect::from_origin_size(Vec2::zero(), swatch),
        kind: ChildKind::Swatch,
    }];

    let mut bottom = swatch.y;
    for (id, margin) in FieldId::ALL.into_iter().zip(FIELD_MARGINS) {
        let y = bottom + margin;
        children.push(PanelChild {
            rect: Rect::new(-theme::LABEL_GAP - theme::LABEL_WIDTH, y, theme::LABEL_WIDTH, field.y),
            kind: ChildKind::Label(id),
        });
        let rect = Rect::from_origin_size(Vec2::new(0.0, y), field);
        children.push(PanelChild { rect, kind: ChildKind::Field(id) });
        bottom = rect.max().y;
    }

    children
}
