//! Two-way synchronization between the brush text fields and the shared
//! [`BrushConfiguration`].
//!
//! The brush is the source of truth. A field is authoritative only for its
//! own value, at the moment it is edited: a color edit reads the *other*
//! two channels from the brush, not from their fields, so a field left
//! showing rejected text does not leak into the color.

use std::cell::RefCell;
use std::fmt;
use std::num::ParseIntError;
use std::rc::Rc;

use daub_engine::brush::{BrushConfiguration, SharedBrush};
use daub_engine::paint::{Rgb, Rgba};

use crate::text_input::{ChangeHandler, TextInput};
use crate::theme;

// ── identifiers ───────────────────────────────────────────────────────────

/// The four inputs of the settings panel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FieldId {
    Red,
    Green,
    Blue,
    Radius,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [FieldId::Red, FieldId::Green, FieldId::Blue, FieldId::Radius];

    /// Color channel edited by this field, if any.
    #[inline]
    pub fn channel(self) -> Option<Channel> {
        match self {
            FieldId::Red => Some(Channel::Red),
            FieldId::Green => Some(Channel::Green),
            FieldId::Blue => Some(Channel::Blue),
            FieldId::Radius => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Red => "Red",
            FieldId::Green => "Green",
            FieldId::Blue => "Blue",
            FieldId::Radius => "Size",
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

/// One of the three color channels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position in `[r, g, b]`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn field(self) -> FieldId {
        match self {
            Channel::Red => FieldId::Red,
            Channel::Green => FieldId::Green,
            Channel::Blue => FieldId::Blue,
        }
    }
}

// ── field state ───────────────────────────────────────────────────────────

/// Outcome of the most recent edit of a field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FieldStatus {
    #[default]
    Valid,
    Invalid,
}

impl FieldStatus {
    #[inline]
    pub fn is_valid(self) -> bool {
        self == FieldStatus::Valid
    }

    /// Background the field shows in this state.
    #[inline]
    pub fn background(self) -> Rgba {
        match self {
            FieldStatus::Valid => theme::FIELD_VALID_BG,
            FieldStatus::Invalid => theme::FIELD_INVALID_BG,
        }
    }
}

/// Last committed text of a field and whether it parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub raw_text: String,
    pub status: FieldStatus,
}

impl FieldState {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }
}

// ── errors ────────────────────────────────────────────────────────────────

/// Why a field edit was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The text does not denote an `i32`.
    Parse { text: String, source: ParseIntError },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Parse { text, source } => write!(f, "not an integer: {text:?} ({source})"),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FieldError::Parse { source, .. } => Some(source),
        }
    }
}

/// Parses field text as a base-10 `i32`.
///
/// Only ASCII digits count; surrounding whitespace is not accepted.
pub fn parse_int_field(text: &str) -> Result<i32, FieldError> {
    text.parse::<i32>().map_err(|source| FieldError::Parse { text: text.to_string(), source })
}

// ── edit handling ─────────────────────────────────────────────────────────

/// State shared by the synchronizer and the change handlers it registers.
#[derive(Clone)]
struct Edits {
    brush: SharedBrush,
    states: Rc<RefCell<[FieldState; 4]>>,
}

impl Edits {
    fn field_edited(&self, id: FieldId, field: &mut dyn TextInput) -> FieldStatus {
        match id.channel() {
            Some(channel) => self.color_channel_edited(channel, field),
            None => self.radius_edited(field),
        }
    }

    fn color_channel_edited(&self, channel: Channel, field: &mut dyn TextInput) -> FieldStatus {
        let result = parse_int_field(field.text()).map(|value| {
            let mut components = self.brush.color().components();
            components[channel.index()] = (value as f32 / 255.0).clamp(0.0, 1.0);
            let color = Rgb::from_components(components);
            self.brush.set_color_value(color);
            color
        });

        match &result {
            Ok(color) => log::debug!("{} accepted: brush color now {color:?}", channel.field().label()),
            Err(e) => log::debug!("{} rejected: {e}", channel.field().label()),
        }
        self.settle(channel.field(), field, result.is_ok())
    }

    fn radius_edited(&self, field: &mut dyn TextInput) -> FieldStatus {
        let result = parse_int_field(field.text()).map(|value| {
            self.brush.set_radius(value);
            self.brush.radius()
        });

        match &result {
            Ok(radius) => log::debug!("Size accepted: brush radius now {radius}"),
            Err(e) => log::debug!("Size rejected: {e}"),
        }
        self.settle(FieldId::Radius, field, result.is_ok())
    }

    /// Records the outcome and mirrors it on the field's background.
    fn settle(&self, id: FieldId, field: &mut dyn TextInput, accepted: bool) -> FieldStatus {
        let status = if accepted { FieldStatus::Valid } else { FieldStatus::Invalid };
        field.set_background(status.background());
        self.states.borrow_mut()[id.slot()] = FieldState { raw_text: field.text().to_string(), status };
        status
    }

    fn handler(&self, id: FieldId) -> ChangeHandler {
        let edits = self.clone();
        Box::new(move |field: &mut dyn TextInput| {
            edits.field_edited(id, field);
        })
    }
}

// ── FieldSynchronizer ─────────────────────────────────────────────────────

/// Owns the four brush fields and keeps them and the brush consistent.
///
/// User edits arrive through the change handler registered on each field at
/// construction. Parse failures never escape: the brush keeps its last valid
/// value and the field turns [`FieldStatus::Invalid`]. Out-of-range numbers
/// are clamped, not rejected.
pub struct FieldSynchronizer<F> {
    edits: Edits,
    fields: [F; 4],
}

impl<F: TextInput> FieldSynchronizer<F> {
    /// Wires the fields to `brush` and writes the brush's current values into them.
    pub fn new(brush: SharedBrush, red: F, green: F, blue: F, radius: F) -> Self {
        let edits = Edits { brush, states: Rc::new(RefCell::new(Default::default())) };

        let mut fields = [red, green, blue, radius];
        for id in FieldId::ALL {
            fields[id.slot()].on_change(edits.handler(id));
        }

        let mut sync = Self { edits, fields };
        let initial = sync.edits.brush.snapshot();
        sync.write_silently(FieldId::Radius, &initial.radius().to_string());
        sync.apply_color(initial.color());
        sync
    }

    /// Re-reads a color field and folds it into the brush color.
    ///
    /// Only the edited channel changes; the other two come from the brush.
    pub fn on_color_channel_edited(&mut self, channel: Channel) -> FieldStatus {
        let field = &mut self.fields[channel.field().slot()];
        self.edits.color_channel_edited(channel, field)
    }

    /// Re-reads the radius field and stores `max(0, value)`.
    pub fn on_radius_edited(&mut self) -> FieldStatus {
        let field = &mut self.fields[FieldId::Radius.slot()];
        self.edits.radius_edited(field)
    }

    /// Sets the brush color programmatically.
    ///
    /// Writes the three channel values into the color fields without running
    /// the parse path and marks them valid, clearing any stale error state.
    pub fn apply_color(&mut self, color: Rgb) {
        self.edits.brush.set_color_value(color);
        for (channel, value) in Channel::ALL.into_iter().zip(color.channels()) {
            self.write_silently(channel.field(), &value.to_string());
        }
        log::debug!("brush color applied: {color:?}");
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn field(&self, id: FieldId) -> &F {
        &self.fields[id.slot()]
    }

    /// Mutable access for event routing. Edits made through the field's own
    /// commit path still go through its change handler.
    pub fn field_mut(&mut self, id: FieldId) -> &mut F {
        &mut self.fields[id.slot()]
    }

    pub fn field_state(&self, id: FieldId) -> FieldState {
        self.edits.states.borrow()[id.slot()].clone()
    }

    pub fn brush(&self) -> &SharedBrush {
        &self.edits.brush
    }

    /// Snapshot of the brush used for painting.
    pub fn brush_options(&self) -> BrushConfiguration {
        self.edits.brush.snapshot()
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn write_silently(&mut self, id: FieldId, text: &str) {
        let field = &mut self.fields[id.slot()];
        field.set_text(text);
        self.edits.settle(id, field, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::textbox::TextBox;

    fn sync_with(color: Rgb, radius: u32) -> FieldSynchronizer<TextBox> {
        FieldSynchronizer::new(
            SharedBrush::new(BrushConfiguration::new(color, radius)),
            TextBox::new(),
            TextBox::new(),
            TextBox::new(),
            TextBox::new(),
        )
    }

    fn sync() -> FieldSynchronizer<TextBox> {
        sync_with(Rgb::BLUE, 60)
    }

    fn edit(sync: &mut FieldSynchronizer<TextBox>, id: FieldId, text: &str) {
        sync.field_mut(id).commit(text);
    }

    fn assert_valid(sync: &FieldSynchronizer<TextBox>, id: FieldId) {
        assert!(sync.field_state(id).is_valid(), "{id:?} should be valid");
        assert_eq!(sync.field(id).background(), theme::FIELD_VALID_BG);
    }

    fn assert_invalid(sync: &FieldSynchronizer<TextBox>, id: FieldId) {
        assert!(!sync.field_state(id).is_valid(), "{id:?} should be invalid");
        assert_eq!(sync.field(id).background(), theme::FIELD_INVALID_BG);
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn construction_writes_initial_values() {
        let s = sync();
        assert_eq!(s.field(FieldId::Red).text(), "0");
        assert_eq!(s.field(FieldId::Green).text(), "0");
        assert_eq!(s.field(FieldId::Blue).text(), "255");
        assert_eq!(s.field(FieldId::Radius).text(), "60");
        for id in FieldId::ALL {
            assert_valid(&s, id);
        }
    }

    // ── color fields ──────────────────────────────────────────────────────

    #[test]
    fn in_range_values_land_exactly() {
        let mut s = sync();
        for channel in Channel::ALL {
            for v in [0, 1, 17, 128, 200, 254, 255] {
                edit(&mut s, channel.field(), &v.to_string());
                assert_eq!(s.brush_options().color().channels()[channel.index()], v as u8);
                assert_valid(&s, channel.field());
            }
        }
    }

    #[test]
    fn out_of_range_values_clamp() {
        let mut s = sync();
        edit(&mut s, FieldId::Red, "256");
        edit(&mut s, FieldId::Green, "100000");
        edit(&mut s, FieldId::Blue, "-1");
        assert_eq!(s.brush_options().color(), Rgb::new(255, 255, 0));
        for id in [FieldId::Red, FieldId::Green, FieldId::Blue] {
            assert_valid(&s, id);
        }
        // The field keeps what the user typed.
        assert_eq!(s.field(FieldId::Red).text(), "256");
    }

    #[test]
    fn explicit_plus_sign_parses() {
        let mut s = sync();
        edit(&mut s, FieldId::Green, "+40");
        assert_eq!(s.brush_options().color().g, 40);
    }

    #[test]
    fn non_integers_leave_brush_unchanged() {
        for text in ["", "abc", "12.5", " 7", "7 ", "0x10", "99999999999"] {
            let mut s = sync();
            let before = s.brush_options();
            edit(&mut s, FieldId::Red, text);
            assert_eq!(s.brush_options(), before, "text {text:?}");
            assert_invalid(&s, FieldId::Red);
            assert_eq!(s.field_state(FieldId::Red).raw_text, text);
        }
    }

    #[test]
    fn rejection_only_marks_the_edited_field() {
        let mut s = sync();
        edit(&mut s, FieldId::Green, "x");
        assert_invalid(&s, FieldId::Green);
        assert_valid(&s, FieldId::Red);
        assert_valid(&s, FieldId::Blue);
        assert_valid(&s, FieldId::Radius);
    }

    #[test]
    fn recovery_after_rejection() {
        let mut s = sync();
        edit(&mut s, FieldId::Blue, "oops");
        edit(&mut s, FieldId::Blue, "9");
        assert_eq!(s.brush_options().color().b, 9);
        assert_valid(&s, FieldId::Blue);
    }

    #[test]
    fn other_channels_come_from_brush_not_field_text() {
        let mut s = sync();
        // Green shows text that was rejected; the brush still holds 0.
        edit(&mut s, FieldId::Green, "12x");
        // Silent write: displayed text disagrees with the brush.
        s.field_mut(FieldId::Blue).set_text("3");

        edit(&mut s, FieldId::Red, "77");
        assert_eq!(s.brush_options().color(), Rgb::new(77, 0, 255));
        assert_eq!(s.field(FieldId::Green).text(), "12x");
    }

    #[test]
    fn silent_text_changes_do_not_edit() {
        let mut s = sync();
        s.field_mut(FieldId::Red).set_text("200");
        assert_eq!(s.brush_options().color().r, 0);

        // Re-reading the field explicitly applies it.
        assert_eq!(s.on_color_channel_edited(Channel::Red), FieldStatus::Valid);
        assert_eq!(s.brush_options().color().r, 200);
    }

    // ── radius field ──────────────────────────────────────────────────────

    #[test]
    fn radius_accepts_non_negative_and_floors_negative() {
        let mut s = sync();
        for (text, expected) in [("0", 0), ("1", 1), ("60", 60), ("5000", 5000), ("-1", 0), ("-300", 0)] {
            edit(&mut s, FieldId::Radius, text);
            assert_eq!(s.brush_options().radius(), expected, "text {text:?}");
            assert_valid(&s, FieldId::Radius);
        }
    }

    #[test]
    fn radius_rejects_non_integers() {
        let mut s = sync();
        edit(&mut s, FieldId::Radius, "big");
        assert_eq!(s.brush_options().radius(), 60);
        assert_invalid(&s, FieldId::Radius);

        s.field_mut(FieldId::Radius).set_text("12");
        assert_eq!(s.on_radius_edited(), FieldStatus::Valid);
        assert_eq!(s.brush_options().radius(), 12);
    }

    // ── apply_color ───────────────────────────────────────────────────────

    #[test]
    fn apply_color_rewrites_fields_and_clears_errors() {
        let mut s = sync();
        edit(&mut s, FieldId::Red, "nope");
        edit(&mut s, FieldId::Blue, "also nope");

        s.apply_color(Rgb::new(12, 34, 56));

        assert_eq!(s.brush_options().color(), Rgb::new(12, 34, 56));
        assert_eq!(s.field(FieldId::Red).text(), "12");
        assert_eq!(s.field(FieldId::Green).text(), "34");
        assert_eq!(s.field(FieldId::Blue).text(), "56");
        for id in [FieldId::Red, FieldId::Green, FieldId::Blue] {
            assert_valid(&s, id);
        }
    }

    #[test]
    fn apply_color_leaves_radius_field_alone() {
        let mut s = sync();
        edit(&mut s, FieldId::Radius, "?");
        s.apply_color(Rgb::WHITE);
        assert_invalid(&s, FieldId::Radius);
        assert_eq!(s.brush_options().radius(), 60);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn parse_error_mentions_text() {
        let err = parse_int_field("4.2").unwrap_err();
        assert!(err.to_string().contains("\"4.2\""));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn only_ascii_digits_parse() {
        assert_eq!(parse_int_field("-0"), Ok(0));
        assert!(parse_int_field("\u{661}\u{662}").is_err());
        assert!(parse_int_field("\u{FF11}").is_err());

        let mut s = sync();
        edit(&mut s, FieldId::Red, "\u{661}\u{662}");
        assert_invalid(&s, FieldId::Red);
        assert_eq!(s.brush_options().color(), Rgb::BLUE);
    }
}
