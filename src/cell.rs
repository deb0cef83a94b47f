use bitflags::bitflags;

bitflags! {
    /// Per-cell properties stored by the grid.
    ///
    /// `TRANSPARENT` and `WALKABLE` describe the terrain and are independent:
    /// a secret passage is walkable but opaque, deep water is transparent but
    /// not walkable. `VISIBLE` and `EXPLORED` are written by field of vision
    /// computations.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CellFlags: u8 {
        const TRANSPARENT = 1 << 0;
        const WALKABLE    = 1 << 1;
        const VISIBLE     = 1 << 2;
        const EXPLORED    = 1 << 3;

        /// Open floor: both transparent and walkable.
        const FLOOR = Self::TRANSPARENT.bits() | Self::WALKABLE.bits();
    }
}

impl CellFlags {
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.contains(Self::TRANSPARENT)
    }

    #[inline]
    pub const fn is_walkable(self) -> bool {
        self.contains(Self::WALKABLE)
    }

    #[inline]
    pub const fn is_visible(self) -> bool {
        self.contains(Self::VISIBLE)
    }

    #[inline]
    pub const fn is_explored(self) -> bool {
        self.contains(Self::EXPLORED)
    }
}
