//! Text attributes: colors plus style flags.
//!
//! [`TextAttribute`] is the modern representation used by cells. Legacy
//! attribute words decode into it losslessly via [`TextAttribute::from_legacy`];
//! the reverse direction only exists while the colors stay inside the
//! 16-color legacy palette.

use bitflags::bitflags;

use crate::legacy::LegacyAttributes;

bitflags! {
    /// Style flags carried by a [`TextAttribute`].
    ///
    /// The first five bits mirror the legacy meta attributes; the rest are
    /// modern SGR-style flags that have no legacy encoding.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttrFlags: u16 {
        const GRID_HORIZONTAL = 1 << 0;
        const GRID_LVERTICAL  = 1 << 1;
        const GRID_RVERTICAL  = 1 << 2;
        const REVERSE_VIDEO   = 1 << 3;
        const UNDERSCORE      = 1 << 4;
        const BOLD            = 1 << 5;
        const ITALIC          = 1 << 6;
        const BLINK           = 1 << 7;
        const INVISIBLE       = 1 << 8;
        const CROSSED_OUT     = 1 << 9;
        const FAINT           = 1 << 10;
    }
}

impl AttrFlags {
    /// Flags that round-trip through the legacy attribute word.
    pub const LEGACY: Self = Self::GRID_HORIZONTAL
        .union(Self::GRID_LVERTICAL)
        .union(Self::GRID_RVERTICAL)
        .union(Self::REVERSE_VIDEO)
        .union(Self::UNDERSCORE);

    const LEGACY_MAP: [(LegacyAttributes, AttrFlags); 5] = [
        (LegacyAttributes::GRID_HORIZONTAL, Self::GRID_HORIZONTAL),
        (LegacyAttributes::GRID_LVERTICAL, Self::GRID_LVERTICAL),
        (LegacyAttributes::GRID_RVERTICAL, Self::GRID_RVERTICAL),
        (LegacyAttributes::REVERSE_VIDEO, Self::REVERSE_VIDEO),
        (LegacyAttributes::UNDERSCORE, Self::UNDERSCORE),
    ];

    fn from_legacy(legacy: LegacyAttributes) -> Self {
        Self::LEGACY_MAP
            .iter()
            .filter(|(bit, _)| legacy.contains(*bit))
            .fold(Self::empty(), |acc, (_, flag)| acc | *flag)
    }

    fn to_legacy(self) -> LegacyAttributes {
        Self::LEGACY_MAP
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .fold(LegacyAttributes::empty(), |acc, (bit, _)| acc | *bit)
    }
}

/// Color of a glyph or its background.
///
/// Hierarchy: default -> 16-color legacy palette -> 256 indexed -> 24-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Whatever the buffer's default color is.
    #[default]
    Default,
    /// Legacy console palette index (0-15, BGR bit order). Larger values
    /// have no legacy encoding.
    Legacy(u8),
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit true color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Index into the 16-color legacy palette, if this color has one.
    ///
    /// `Default` has no index of its own; callers pick the legacy default.
    /// The low 16 `Indexed` colors are in ANSI order and get their red and
    /// blue bits swapped.
    #[inline]
    pub const fn legacy_index(self) -> Option<u8> {
        match self {
            Self::Legacy(index) if index < 16 => Some(index),
            Self::Indexed(index) if index < 16 => Some(ansi_to_legacy_index(index)),
            Self::Default | Self::Legacy(_) | Self::Indexed(_) | Self::Rgb(..) => None,
        }
    }
}

/// ANSI palette order is RGB (1 = red, 4 = blue), the legacy console word is
/// BGR (1 = blue, 4 = red). Green and intensity keep their bits.
#[inline]
const fn ansi_to_legacy_index(index: u8) -> u8 {
    (index & 0b1010) | ((index & 0b0001) << 2) | ((index & 0b0100) >> 2)
}

/// The visual attribute painting a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextAttribute {
    pub fg: Color,
    pub bg: Color,
    pub flags: AttrFlags,
}

impl TextAttribute {
    #[inline]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            flags: AttrFlags::empty(),
        }
    }

    #[inline]
    pub const fn with_flags(mut self, flags: AttrFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Decode a legacy attribute word.
    ///
    /// Color nibbles become [`Color::Legacy`]; grid, reverse-video and
    /// underscore bits become flags. The double-width bits are not part of
    /// an attribute and are ignored.
    #[must_use]
    pub fn from_legacy(attributes: u16) -> Self {
        let legacy = LegacyAttributes::from_bits_retain(attributes);
        Self {
            fg: Color::Legacy(legacy.foreground_index()),
            bg: Color::Legacy(legacy.background_index()),
            flags: AttrFlags::from_legacy(legacy),
        }
    }

    /// Encode into a legacy attribute word (without double-width bits).
    ///
    /// Returns `None` when either color lies outside the legacy palette.
    /// `Color::Default` maps to the legacy default nibble. Modern-only flags
    /// are dropped.
    #[must_use]
    pub fn to_legacy(&self) -> Option<u16> {
        let default = LegacyAttributes::from_bits_retain(LegacyAttributes::DEFAULT_COLORS);
        let fg = match self.fg {
            Color::Default => default.foreground_index(),
            color => color.legacy_index()?,
        };
        let bg = match self.bg {
            Color::Default => default.background_index(),
            color => color.legacy_index()?,
        };
        let colors = u16::from(fg) | (u16::from(bg) << 4);
        Some(colors | self.flags.to_legacy().bits())
    }

    /// Whether [`to_legacy`](Self::to_legacy) would succeed.
    #[inline]
    pub fn is_legacy(&self) -> bool {
        self.to_legacy().is_some()
    }
}
