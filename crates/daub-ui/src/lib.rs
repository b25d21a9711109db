//! Daub UI: brush settings widgets on top of `daub-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use daub_ui::prelude::*;
//!
//! let mut panel = SettingsPanel::new(Rgb::BLUE, 60);
//! panel.place(Vec2::new(10.0 - panel.bounds().min().x, 10.0));
//!
//! // Route host input in canvas coordinates:
//! panel.on_event(&UiEvent::Click { pos });
//! panel.on_event(&UiEvent::TextInput { text: "7".into() });
//!
//! // Each frame:
//! let brush = panel.brush_options();
//! panel.paint(&mut draw_list);
//! ```
//!
//! # Custom fields
//!
//! [`FieldSynchronizer`](sync::FieldSynchronizer) works with any [`TextInput`]:
//!
//! ```rust,ignore
//! use daub_ui::prelude::*;
//!
//! struct HeadlessField { text: String, bg: Rgba, handler: Option<ChangeHandler> }
//!
//! impl TextInput for HeadlessField {
//!     fn text(&self) -> &str { &self.text }
//!     fn set_text(&mut self, text: &str) { self.text = text.to_string(); }
//!     fn background(&self) -> Rgba { self.bg }
//!     fn set_background(&mut self, color: Rgba) { self.bg = color; }
//!     fn on_change(&mut self, handler: ChangeHandler) { self.handler = Some(handler); }
//! }
//! ```

pub mod event;
pub mod painter;
pub mod settings_panel;
pub mod sync;
pub mod text_input;
pub mod theme;
pub mod widget;
pub mod widgets;

pub use settings_panel::SettingsPanel;
pub use text_input::TextInput;

/// Everything a host needs to embed the settings panel.
pub mod prelude {
    pub use crate::event::{EventResult, Key, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::settings_panel::{ChildKind, PanelChild, SettingsPanel};
    pub use crate::sync::{Channel, FieldError, FieldId, FieldState, FieldStatus, FieldSynchronizer};
    pub use crate::text_input::{ChangeHandler, TextInput};
    pub use crate::widget::Widget;
    pub use crate::widgets::{swatch::ColorSwatch, textbox::TextBox};

    // Re-export the engine primitives everyone needs.
    pub use daub_engine::brush::{BrushConfiguration, SharedBrush};
    pub use daub_engine::coords::{Rect, Vec2};
    pub use daub_engine::paint::{Paint, Rgb, Rgba};
    pub use daub_engine::scene::{Border, DrawList};
}
