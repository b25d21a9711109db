//! Contract a text-input widget must satisfy to be driven by the
//! [`FieldSynchronizer`](crate::sync::FieldSynchronizer).

use daub_engine::paint::Rgba;

/// Change notification. Receives the field whose text was committed, so the
/// handler can read the new text and restyle the field in place.
pub type ChangeHandler = Box<dyn FnMut(&mut dyn TextInput)>;

/// A single-line text field as seen by the synchronizer.
pub trait TextInput {
    fn text(&self) -> &str;

    /// Replaces the text without firing the change notification.
    fn set_text(&mut self, text: &str);

    fn background(&self) -> Rgba;

    fn set_background(&mut self, color: Rgba);

    /// Registers the single change handler, replacing any previous one.
    ///
    /// Implementations invoke it synchronously after every user text commit,
    /// never from [`set_text`](Self::set_text).
    fn on_change(&mut self, handler: ChangeHandler);
}
