use crate::paint::Rgba;
use crate::paint::gradient::RadialGradient;

/// Paint source for filling geometry.
///
/// Kept as a small enum so renderers can dispatch on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    RadialGradient(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: impl Into<Rgba>) -> Self {
        Paint::Solid(color.into())
    }
}

impl From<Rgba> for Paint {
    #[inline]
    fn from(c: Rgba) -> Self {
        Paint::Solid(c)
    }
}

impl From<RadialGradient> for Paint {
    #[inline]
    fn from(g: RadialGradient) -> Self {
        Paint::RadialGradient(g)
    }
}
