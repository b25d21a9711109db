use daub_engine::coords::{Rect, Vec2};
use daub_engine::paint::{Paint, Rgba};
use daub_engine::scene::Border;

use crate::event::{EventResult, Key, UiEvent};
use crate::painter::Painter;
use crate::text_input::{ChangeHandler, TextInput};
use crate::theme;
use crate::widget::Widget;

/// A single-line text input field.
///
/// Click to focus, then type to edit. Backspace deletes, Enter re-commits the
/// current text, Escape drops focus. Every user edit fires the change handler
/// registered through [`TextInput::on_change`]; [`TextInput::set_text`] does not.
///
/// # Example
/// ```rust,ignore
/// let mut field = TextBox::new().initial_text("60");
/// field.on_change(Box::new(|f: &mut dyn TextInput| println!("text: {}", f.text())));
/// field.commit("61");
/// ```
pub struct TextBox {
    text: String,
    focused: bool,
    size: Vec2,
    bg: Rgba,
    border_color: Rgba,
    focused_border_color: Rgba,
    on_change: Option<ChangeHandler>,
}

impl TextBox {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            focused: false,
            size: theme::FIELD_SIZE,
            bg: theme::FIELD_VALID_BG,
            border_color: theme::FIELD_BORDER,
            focused_border_color: theme::FIELD_FOCUSED_BORDER,
            on_change: None,
        }
    }

    pub fn initial_text(mut self, v: impl Into<String>) -> Self { self.text = v.into(); self }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Replaces the text as a user edit and fires the change handler.
    pub fn commit(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.notify_change();
    }

    fn notify_change(&mut self) {
        // The handler is out of its slot while it runs so it can take `&mut self`.
        let Some(mut handler) = self.on_change.take() else { return };
        handler(self);
        if self.on_change.is_none() {
            self.on_change = Some(handler);
        }
    }
}

impl Default for TextBox { fn default() -> Self { Self::new() } }

impl TextInput for TextBox {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn background(&self) -> Rgba {
        self.bg
    }

    fn set_background(&mut self, color: Rgba) {
        self.bg = color;
    }

    fn on_change(&mut self, handler: ChangeHandler) {
        self.on_change = Some(handler);
    }
}

impl Widget for TextBox {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let (border_color, border_width) = if self.focused {
            (self.focused_border_color, 2.0)
        } else {
            (self.border_color, 1.0)
        };
        painter.fill_rect_bordered(rect, Paint::Solid(self.bg), Some(Border::new(border_width, border_color)));
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::Click { pos } => {
                if rect.contains(*pos) {
                    self.focused = true;
                    EventResult::Consumed
                } else {
                    // Click outside drops focus
                    self.focused = false;
                    EventResult::Ignored
                }
            }
            UiEvent::TextInput { text } => {
                if !self.focused { return EventResult::Ignored; }
                let mut next = self.text.clone();
                next.push_str(text);
                self.commit(next);
                EventResult::Consumed
            }
            UiEvent::KeyPress { key } => {
                if !self.focused { return EventResult::Ignored; }
                match key {
                    Key::Backspace => {
                        let mut chars = self.text.chars();
                        chars.next_back();
                        let next = chars.as_str().to_string();
                        self.commit(next);
                    }
                    Key::Enter => self.notify_change(),
                    Key::Escape => self.focused = false,
                }
                EventResult::Consumed
            }
        }
    }
}
