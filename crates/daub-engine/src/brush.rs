//! Brush configuration: the validated (color, radius) pair used to paint.

use std::cell::RefCell;
use std::rc::Rc;

use crate::paint::Rgb;

/// Current brush settings.
///
/// Invariants (hold after every mutation):
/// - each color channel lies in `[0, 255]`
/// - `radius >= 0`
///
/// Both are carried by the field types; the setters accept unchecked `i32`
/// and clamp.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BrushConfiguration {
    color: Rgb,
    radius: u32,
}

impl BrushConfiguration {
    pub const DEFAULT_COLOR: Rgb = Rgb::BLUE;
    pub const DEFAULT_RADIUS: u32 = 60;

    #[inline]
    pub const fn new(color: Rgb, radius: u32) -> Self {
        Self { color, radius }
    }

    /// Stores the three channels, each clamped to `[0, 255]`.
    #[inline]
    pub fn set_color(&mut self, r: i32, g: i32, b: i32) {
        self.color = Rgb::from_channels(r, g, b);
    }

    /// Replaces the whole color value.
    #[inline]
    pub fn set_color_value(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Stores `max(0, radius)`.
    #[inline]
    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius.max(0) as u32;
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Immutable copy of the current settings.
    #[inline]
    pub fn snapshot(&self) -> BrushConfiguration {
        *self
    }
}

impl Default for BrushConfiguration {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLOR, Self::DEFAULT_RADIUS)
    }
}

/// Shared handle to the single brush configuration.
///
/// Single-threaded by construction (`Rc<RefCell<_>>`). Every method borrows
/// for the duration of the call only, so handles can be freely cloned into
/// change handlers.
#[derive(Debug, Clone, Default)]
pub struct SharedBrush(Rc<RefCell<BrushConfiguration>>);

impl SharedBrush {
    pub fn new(config: BrushConfiguration) -> Self {
        Self(Rc::new(RefCell::new(config)))
    }

    pub fn snapshot(&self) -> BrushConfiguration {
        self.0.borrow().snapshot()
    }

    pub fn color(&self) -> Rgb {
        self.0.borrow().color()
    }

    pub fn radius(&self) -> u32 {
        self.0.borrow().radius()
    }

    pub fn set_color(&self, r: i32, g: i32, b: i32) {
        self.0.borrow_mut().set_color(r, g, b);
    }

    pub fn set_color_value(&self, color: Rgb) {
        self.0.borrow_mut().set_color_value(color);
    }

    pub fn set_radius(&self, radius: i32) {
        self.0.borrow_mut().set_radius(radius);
    }
}
