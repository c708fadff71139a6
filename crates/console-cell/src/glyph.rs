//! Glyph content storage.
//!
//! A glyph is one or more UTF-16 code units. The single-unit case covers
//! nearly every cell and is stored inline; anything longer (surrogate pairs,
//! combining sequences, ZWJ emoji) goes into an owned sequence.
//!
//! The storage form is canonical: one unit is always inline, two or more are
//! always a cluster, and empty content is unrepresentable. Equality and
//! hashing can therefore compare the representation directly.

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{CellError, Result};
use crate::logging::debug;

/// Inline capacity for clusters. Covers a surrogate pair plus a couple of
/// combining marks without touching the heap.
const CLUSTER_INLINE: usize = 4;

#[derive(Clone, PartialEq, Eq, Hash)]
enum Repr {
    Single(u16),
    Cluster(SmallVec<[u16; CLUSTER_INLINE]>),
}

/// The glyph stored in a cell. Never empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GlyphContent(Repr);

impl GlyphContent {
    /// Content holding exactly one code unit.
    #[inline]
    pub const fn single(unit: u16) -> Self {
        Self(Repr::Single(unit))
    }

    /// Build content from code units, picking the storage form by length.
    ///
    /// # Errors
    ///
    /// [`CellError::EmptyGlyph`] if `units` is empty.
    pub fn from_units(units: &[u16]) -> Result<Self> {
        match units {
            [] => {
                debug!("rejected empty glyph content");
                Err(CellError::EmptyGlyph)
            }
            [unit] => Ok(Self::single(*unit)),
            _ => Ok(Self(Repr::Cluster(SmallVec::from_slice(units)))),
        }
    }

    /// Content for a unit sequence whose first unit is already known.
    ///
    /// `head` must be `units[0]`; it alone makes the result non-empty, so
    /// this cannot fail. Used when copying out of a
    /// [`CellView`](crate::CellView), which captures its head on creation.
    pub(crate) fn from_head(head: u16, units: &[u16]) -> Self {
        debug_assert_eq!(units.first(), Some(&head));
        if units.len() > 1 {
            Self(Repr::Cluster(SmallVec::from_slice(units)))
        } else {
            Self::single(head)
        }
    }

    /// First code unit.
    #[inline]
    pub fn head(&self) -> u16 {
        match &self.0 {
            Repr::Single(unit) => *unit,
            // Clusters always hold at least two units.
            Repr::Cluster(units) => units.first().copied().unwrap_or_default(),
        }
    }

    /// Read-only view of the code units.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        match &self.0 {
            Repr::Single(unit) => core::slice::from_ref(unit),
            Repr::Cluster(units) => units,
        }
    }

    /// The code unit, when stored inline.
    #[inline]
    pub const fn as_single(&self) -> Option<u16> {
        match self.0 {
            Repr::Single(unit) => Some(unit),
            Repr::Cluster(_) => None,
        }
    }

    #[inline]
    pub const fn is_single(&self) -> bool {
        matches!(self.0, Repr::Single(_))
    }

    #[inline]
    pub fn len(&self) -> usize {
        match &self.0 {
            Repr::Single(_) => 1,
            Repr::Cluster(units) => units.len(),
        }
    }

    /// Always `false`: content is never empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Decode to a `String`, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.as_slice())
    }
}

impl core::fmt::Debug for GlyphContent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.0 {
            Repr::Single(unit) => {
                write!(f, "GlyphContent::Single({:?}, {unit:#06x})", self.to_string_lossy())
            }
            Repr::Cluster(units) => write!(
                f,
                "GlyphContent::Cluster({:?}, {} units)",
                self.to_string_lossy(),
                units.len()
            ),
        }
    }
}

impl AsRef<[u16]> for GlyphContent {
    fn as_ref(&self) -> &[u16] {
        self.as_slice()
    }
}

/// Split text into extended grapheme clusters, each encoded as UTF-16.
///
/// The result feeds [`Cell::from_glyphs`](crate::Cell::from_glyphs).
pub fn glyphs_from_str(text: &str) -> Vec<Vec<u16>> {
    text.graphemes(true)
        .map(|grapheme| grapheme.encode_utf16().collect())
        .collect()
}
