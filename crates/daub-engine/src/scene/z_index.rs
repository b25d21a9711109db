/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Layer that painted dots land on.
    pub const CANVAS: ZIndex = ZIndex(0);
    /// First layer used by UI overlays; always above painted content.
    pub const OVERLAY: ZIndex = ZIndex(1 << 16);

    #[inline]
    pub const fn offset(self, by: i32) -> Self {
        Self(self.0 + by)
    }
}
