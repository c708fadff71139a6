//! Legacy console cell record.
//!
//! The classic console API exchanges cells as a fixed 4-byte record: one
//! UTF-16 code unit followed by a 16-bit attribute word. External code builds
//! and reads these directly, so the layout and bit positions are fixed.
//!
//! # Layout (4 bytes)
//!
//! ```text
//! LegacyCellRecord {
//!     unicode_char: u16,  // one UTF-16 code unit
//!     attributes: u16,    // LegacyAttributes bits
//! }
//! ```
//!
//! # Attribute word
//!
//! ```text
//! bit 15  UNDERSCORE         bit 7  BACKGROUND_INTENSITY
//! bit 14  REVERSE_VIDEO      bit 6  BACKGROUND_RED
//! bit 13  (unused)           bit 5  BACKGROUND_GREEN
//! bit 12  GRID_RVERTICAL     bit 4  BACKGROUND_BLUE
//! bit 11  GRID_LVERTICAL     bit 3  FOREGROUND_INTENSITY
//! bit 10  GRID_HORIZONTAL    bit 2  FOREGROUND_RED
//! bit  9  TRAILING_BYTE      bit 1  FOREGROUND_GREEN
//! bit  8  LEADING_BYTE       bit 0  FOREGROUND_BLUE
//! ```

use bitflags::bitflags;

bitflags! {
    /// Bits of the legacy attribute word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LegacyAttributes: u16 {
        const FOREGROUND_BLUE      = 0x0001;
        const FOREGROUND_GREEN     = 0x0002;
        const FOREGROUND_RED       = 0x0004;
        const FOREGROUND_INTENSITY = 0x0008;
        const BACKGROUND_BLUE      = 0x0010;
        const BACKGROUND_GREEN     = 0x0020;
        const BACKGROUND_RED       = 0x0040;
        const BACKGROUND_INTENSITY = 0x0080;
        /// Cell is the leading half of a double-width glyph.
        const LEADING_BYTE         = 0x0100;
        /// Cell is the trailing half of a double-width glyph.
        const TRAILING_BYTE        = 0x0200;
        const GRID_HORIZONTAL      = 0x0400;
        const GRID_LVERTICAL       = 0x0800;
        const GRID_RVERTICAL       = 0x1000;
        const REVERSE_VIDEO        = 0x4000;
        const UNDERSCORE           = 0x8000;
    }
}

impl LegacyAttributes {
    /// Foreground color nibble.
    pub const FOREGROUND_MASK: u16 = 0x000F;
    /// Background color nibble.
    pub const BACKGROUND_MASK: u16 = 0x00F0;
    /// Both double-width flags.
    pub const DBCS_MASK: Self = Self::LEADING_BYTE.union(Self::TRAILING_BYTE);
    /// Grid-line, reverse-video and underscore bits.
    pub const META_MASK: Self = Self::GRID_HORIZONTAL
        .union(Self::GRID_LVERTICAL)
        .union(Self::GRID_RVERTICAL)
        .union(Self::REVERSE_VIDEO)
        .union(Self::UNDERSCORE);

    /// Legacy default: light gray on black.
    pub const DEFAULT_COLORS: u16 = 0x0007;

    /// Foreground palette index (0-15).
    #[inline]
    pub const fn foreground_index(self) -> u8 {
        (self.bits() & Self::FOREGROUND_MASK) as u8
    }

    /// Background palette index (0-15).
    #[inline]
    pub const fn background_index(self) -> u8 {
        ((self.bits() & Self::BACKGROUND_MASK) >> 4) as u8
    }
}

/// One cell as exchanged with the legacy console API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct LegacyCellRecord {
    /// A single UTF-16 code unit.
    pub unicode_char: u16,
    /// Raw attribute word, see [`LegacyAttributes`].
    pub attributes: u16,
}

// Compile-time layout check
const _: () = assert!(core::mem::size_of::<LegacyCellRecord>() == 4);

impl LegacyCellRecord {
    #[inline]
    pub const fn new(unicode_char: u16, attributes: u16) -> Self {
        Self {
            unicode_char,
            attributes,
        }
    }

    /// Attribute word as flags. Unknown bits are retained.
    #[inline]
    pub const fn flags(self) -> LegacyAttributes {
        LegacyAttributes::from_bits_retain(self.attributes)
    }

    #[inline]
    pub const fn is_leading(self) -> bool {
        self.flags().contains(LegacyAttributes::LEADING_BYTE)
    }

    #[inline]
    pub const fn is_trailing(self) -> bool {
        self.flags().contains(LegacyAttributes::TRAILING_BYTE)
    }
}
