//! Paint model shared between UI and the compositor.
//!
//! Scope:
//! - 8-bit sRGB colors (opaque and straight alpha)
//! - paint sources (solid, radial gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
mod paint;

pub use color::{adjust_transparency, Rgb, Rgba};
pub use gradient::{ColorStop, RadialGradient};
pub use paint::Paint;
