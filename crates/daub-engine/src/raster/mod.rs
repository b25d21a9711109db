//! CPU compositor.
//!
//! Turns a recorded [`DrawList`](crate::scene::DrawList) into pixels so the
//! canvas can be inspected and written to disk without a GPU or window.
//!
//! Blending is premultiplied source-over throughout; the stored buffer is
//! converted back to straight-alpha RGBA only when an image is requested.

mod sample;
mod surface;

pub use sample::sample_paint;
pub use surface::Surface;
