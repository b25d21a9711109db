/// Opaque 8-bit sRGB color.
///
/// Invariant:
/// - every channel lies in `0..=255` (enforced by the `u8` storage).
///
/// Conversions to and from fractional components go through
/// [`components`](Self::components) / [`from_components`](Self::from_components),
/// which round to the nearest byte.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from unchecked integer channels, clamping each into `[0, 255]`.
    #[inline]
    pub fn from_channels(r: i32, g: i32, b: i32) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Channels as fractions in `[0, 1]`.
    #[inline]
    pub fn components(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Inverse of [`components`](Self::components).
    ///
    /// Each component is clamped to `[0, 1]`, scaled by 255 and rounded.
    /// NaN maps to 0.
    #[inline]
    pub fn from_components([r, g, b]: [f32; 3]) -> Self {
        Self::new(component_to_u8(r), component_to_u8(g), component_to_u8(b))
    }

    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Same RGB with an explicit straight alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba { r: self.r, g: self.g, b: self.b, a }
    }

    #[inline]
    pub const fn opaque(self) -> Rgba {
        self.with_alpha(255)
    }
}

/// 8-bit sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn from_hex(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
    }

    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Premultiplied `[r, g, b, a]` in `[0, 1]`, as consumed by the compositor.
    #[inline]
    pub fn to_premul(self) -> [f32; 4] {
        let a = self.a as f32 / 255.0;
        [
            self.r as f32 / 255.0 * a,
            self.g as f32 / 255.0 * a,
            self.b as f32 / 255.0 * a,
            a,
        ]
    }
}

impl From<Rgb> for Rgba {
    #[inline]
    fn from(c: Rgb) -> Self {
        c.opaque()
    }
}

/// Returns `color` with its RGB untouched and alpha set to `round(alpha * 255)`.
///
/// `alpha` is clamped to `[0, 1]`; NaN is treated as fully transparent.
#[inline]
pub fn adjust_transparency(color: Rgb, alpha: f64) -> Rgba {
    let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    color.with_alpha((a * 255.0).round() as u8)
}

#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[inline]
fn component_to_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
