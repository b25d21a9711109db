//! Daub engine crate.
//!
//! Owns the brush model, the soft-dot gradient builder, the draw stream that
//! doubles as the canvas, and a CPU compositor for it.

pub mod brush;
pub mod coords;
pub mod dot;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;
