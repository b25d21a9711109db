use daub_engine::coords::Vec2;

/// Named keys the text fields react to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Backspace,
    Enter,
    Escape,
}

/// Input events routed through the settings panel.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary mouse button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Committed text input (one or more characters).
    TextInput { text: String },
    /// Named key pressed.
    KeyPress { key: Key },
}

impl UiEvent {
    /// Same event with positions shifted by `-offset` (parent → child space).
    pub fn localized(&self, offset: Vec2) -> UiEvent {
        match self {
            UiEvent::Click { pos } => UiEvent::Click { pos: *pos - offset },
            other => other.clone(),
        }
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled.
    Consumed,
    /// Event was not handled.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }

    /// `Consumed` if either side consumed.
    #[inline]
    pub fn or(self, other: EventResult) -> EventResult {
        if self.is_consumed() { self } else { other }
    }
}
