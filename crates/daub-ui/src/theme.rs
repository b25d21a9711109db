//! Fixed colors and sizes of the settings panel.

use daub_engine::coords::Vec2;
use daub_engine::paint::Rgba;

/// Background of a field whose last edit parsed.
pub const FIELD_VALID_BG: Rgba = Rgba::from_hex(0xFFFFFF);
/// Background of a field whose last edit did not parse.
pub const FIELD_INVALID_BG: Rgba = Rgba::from_hex(0xFFCCCC);

pub const FIELD_BORDER: Rgba = Rgba::from_hex(0x8A8A8A);
pub const FIELD_FOCUSED_BORDER: Rgba = Rgba::from_hex(0x2F7BEF);
pub const FIELD_SIZE: Vec2 = Vec2::new(80.0, 24.0);

pub const SWATCH_BORDER: Rgba = Rgba::from_hex(0x000000);
pub const SWATCH_SIZE: Vec2 = Vec2::new(100.0, 100.0);

/// Width reserved for field labels, left of the field column.
pub const LABEL_WIDTH: f32 = 48.0;
/// Gap between a label and its field.
pub const LABEL_GAP: f32 = 5.0;
