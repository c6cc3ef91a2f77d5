//! Working pixel and the 64-slot index table.

/// One decoded pixel, channels in stream order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Pixel in effect before the first chunk.
    pub const START: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Index table slot: `(r * 3 + g * 5 + b * 7 + a * 11) % 64`.
    #[inline]
    pub fn slot(self) -> usize {
        let sum = usize::from(self.r) * 3
            + usize::from(self.g) * 5
            + usize::from(self.b) * 7
            + usize::from(self.a) * 11;
        sum % PixelCache::SLOTS
    }
}

/// Fixed table of recently seen pixels. Collisions overwrite.
#[derive(Clone, Debug)]
pub(crate) struct PixelCache {
    slots: [Rgba; Self::SLOTS],
}

impl PixelCache {
    pub const SLOTS: usize = 64;

    pub fn new() -> Self {
        Self {
            slots: [Rgba::default(); Self::SLOTS],
        }
    }

    #[inline]
    pub fn store(&mut self, px: Rgba) {
        self.slots[px.slot()] = px;
    }

    /// Slot lookup; `index` is masked to the table size.
    #[inline]
    pub fn get(&self, index: u8) -> Rgba {
        self.slots[usize::from(index) % Self::SLOTS]
    }
}
