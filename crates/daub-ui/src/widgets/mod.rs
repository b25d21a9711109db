pub mod swatch;
pub mod textbox;
