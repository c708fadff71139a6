//! Cell types and invariants.
//!
//! A [`Cell`] is one addressable position in a screen buffer row:
//!
//! ```text
//! Cell {
//!     content: GlyphContent,     // inline u16 or multi-unit cluster, never empty
//!     dbcs: DoubleWidthMarker,   // Single | Leading | Trailing
//!     attribute: AttributeMode,  // Stored(TextAttribute) | Current
//! }
//! ```
//!
//! # Invariants
//!
//! - Content is never empty.
//! - A `Current` cell owns no attribute; reading or mutating one fails.
//! - Leading/Trailing halves produced from one glyph carry identical content.
//! - Equality compares content, marker and attribute mode (with its value).
//!
//! # Construction paths
//!
//! | Path                         | Attribute mode         | Fails on            |
//! |------------------------------|------------------------|---------------------|
//! | [`Cell::with_behavior`]      | `Current`              | empty, `Stored` tag |
//! | [`Cell::with_attribute`]     | `Stored(attr)`         | empty               |
//! | [`Cell::from_legacy`]        | `Stored(from_legacy)`  | never               |
//! | [`Cell::from_view`]          | copied                 | never               |
//!
//! Content is only ever a [`GlyphContent`] (never empty by construction) and
//! the attribute only ever an [`AttributeMode`] (the `Stored` tag without a
//! value is rejected in one place). All four paths assemble the cell from
//! those two validated parts.

use crate::attr::TextAttribute;
use crate::error::{CellError, Result};
use crate::glyph::GlyphContent;
use crate::legacy::{LegacyAttributes, LegacyCellRecord};
use crate::logging::{debug, trace, trace_span};
use crate::width::{GlyphWidthClassifier, UnicodeWidthClassifier};

/// Double-width (DBCS) marker of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DoubleWidthMarker {
    /// A standalone glyph.
    #[default]
    Single,
    /// Left half of a two-column glyph.
    Leading,
    /// Right half of a two-column glyph.
    Trailing,
}

impl DoubleWidthMarker {
    #[inline]
    pub const fn is_single(self) -> bool {
        matches!(self, Self::Single)
    }

    #[inline]
    pub const fn is_leading(self) -> bool {
        matches!(self, Self::Leading)
    }

    #[inline]
    pub const fn is_trailing(self) -> bool {
        matches!(self, Self::Trailing)
    }

    /// Either half of a two-column glyph.
    #[inline]
    pub const fn is_double_width(self) -> bool {
        !self.is_single()
    }

    #[inline]
    pub fn set_leading(&mut self) {
        *self = Self::Leading;
    }

    #[inline]
    pub fn set_trailing(&mut self) {
        *self = Self::Trailing;
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::Single;
    }

    /// Marker encoded in a legacy attribute word. Leading wins if both bits
    /// are set.
    #[inline]
    pub const fn from_legacy(attributes: LegacyAttributes) -> Self {
        if attributes.contains(LegacyAttributes::LEADING_BYTE) {
            Self::Leading
        } else if attributes.contains(LegacyAttributes::TRAILING_BYTE) {
            Self::Trailing
        } else {
            Self::Single
        }
    }

    /// Legacy attribute bits for this marker.
    #[inline]
    pub const fn to_legacy(self) -> LegacyAttributes {
        match self {
            Self::Single => LegacyAttributes::empty(),
            Self::Leading => LegacyAttributes::LEADING_BYTE,
            Self::Trailing => LegacyAttributes::TRAILING_BYTE,
        }
    }
}

/// How a cell's paint attribute is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeMode {
    /// The cell carries its own attribute.
    Stored(TextAttribute),
    /// The owning buffer supplies its active attribute at paint time.
    Current,
}

impl AttributeMode {
    /// The tag of this mode, without its value.
    #[inline]
    pub const fn behavior(&self) -> AttributeBehavior {
        match self {
            Self::Stored(_) => AttributeBehavior::Stored,
            Self::Current => AttributeBehavior::Current,
        }
    }

    #[inline]
    pub const fn stored(&self) -> Option<&TextAttribute> {
        match self {
            Self::Stored(attr) => Some(attr),
            Self::Current => None,
        }
    }
}

impl From<TextAttribute> for AttributeMode {
    fn from(attr: TextAttribute) -> Self {
        Self::Stored(attr)
    }
}

/// Tag-only form of [`AttributeMode`], accepted by [`Cell::with_behavior`].
///
/// Only `Current` is valid there; `Stored` needs a value and must go through
/// [`Cell::with_attribute`]. New context-dependent behaviors belong here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AttributeBehavior {
    Stored,
    Current,
}

/// Read-only projection of a cell, used when copying ranges.
///
/// A view always holds non-empty content, so converting it back into a
/// [`Cell`] cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView<'a> {
    head: u16,
    chars: &'a [u16],
    dbcs: DoubleWidthMarker,
    attribute: AttributeMode,
}

impl<'a> CellView<'a> {
    /// Build a view over borrowed code units.
    ///
    /// # Errors
    ///
    /// [`CellError::EmptyGlyph`] if `chars` is empty.
    pub fn new(
        chars: &'a [u16],
        dbcs: DoubleWidthMarker,
        attribute: AttributeMode,
    ) -> Result<Self> {
        let Some(&head) = chars.first() else {
            return Err(CellError::EmptyGlyph);
        };
        Ok(Self {
            head,
            chars,
            dbcs,
            attribute,
        })
    }

    #[inline]
    pub const fn chars(&self) -> &'a [u16] {
        self.chars
    }

    #[inline]
    pub const fn dbcs_attr(&self) -> DoubleWidthMarker {
        self.dbcs
    }

    #[inline]
    pub const fn attribute_mode(&self) -> AttributeMode {
        self.attribute
    }

    #[inline]
    pub const fn behavior(&self) -> AttributeBehavior {
        self.attribute.behavior()
    }

    /// The stored attribute.
    ///
    /// # Errors
    ///
    /// [`CellError::NoStoredAttribute`] for `Current` views.
    pub fn text_attr(&self) -> Result<TextAttribute> {
        self.attribute
            .stored()
            .copied()
            .ok_or(CellError::NoStoredAttribute)
    }
}

/// One character position of a screen buffer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    content: GlyphContent,
    dbcs: DoubleWidthMarker,
    attribute: AttributeMode,
}

impl Cell {
    /// Build a cell whose attribute is resolved by the buffer.
    ///
    /// # Errors
    ///
    /// - [`CellError::EmptyGlyph`] if `glyph` is empty.
    /// - [`CellError::StoredBehavior`] if `behavior` is `Stored`; explicit
    ///   values go through [`Cell::with_attribute`].
    pub fn with_behavior(
        glyph: &[u16],
        dbcs: DoubleWidthMarker,
        behavior: AttributeBehavior,
    ) -> Result<Self> {
        let content = GlyphContent::from_units(glyph)?;
        let attribute = Self::mode_for_behavior(behavior)?;
        Ok(Self::assemble(content, dbcs, attribute))
    }

    /// Build a cell carrying an explicit attribute.
    ///
    /// # Errors
    ///
    /// [`CellError::EmptyGlyph`] if `glyph` is empty.
    pub fn with_attribute(
        glyph: &[u16],
        dbcs: DoubleWidthMarker,
        attr: TextAttribute,
    ) -> Result<Self> {
        let content = GlyphContent::from_units(glyph)?;
        Ok(Self::assemble(content, dbcs, AttributeMode::Stored(attr)))
    }

    /// Build a cell from a legacy console record.
    pub fn from_legacy(record: LegacyCellRecord) -> Self {
        Self::assemble(
            GlyphContent::single(record.unicode_char),
            DoubleWidthMarker::from_legacy(record.flags()),
            AttributeMode::Stored(TextAttribute::from_legacy(record.attributes)),
        )
    }

    /// Copy a cell out of a view: the canonical copy used for range copies.
    pub fn from_view(view: CellView<'_>) -> Self {
        Self::assemble(
            GlyphContent::from_head(view.head, view.chars),
            view.dbcs,
            view.attribute,
        )
    }

    /// Expand glyphs into cells, one attribute mode for all of them.
    ///
    /// Full-width glyphs (per `classifier`) become a `Leading` cell followed
    /// by a `Trailing` cell with the same content; others become one `Single`
    /// cell. `Stored(attr)` builds through [`Cell::with_attribute`],
    /// `Current` through [`Cell::with_behavior`].
    ///
    /// # Errors
    ///
    /// [`CellError::EmptyGlyph`] if any glyph is empty. No partial output is
    /// returned.
    pub fn from_glyphs<I, C>(
        glyphs: I,
        attribute: AttributeMode,
        classifier: &C,
    ) -> Result<Vec<Self>>
    where
        I: IntoIterator,
        I::Item: AsRef<[u16]>,
        C: GlyphWidthClassifier + ?Sized,
    {
        let glyphs = glyphs.into_iter();
        let span = trace_span!("cell.from_glyphs", behavior = ?attribute.behavior());
        let _guard = span.enter();

        let build = |glyph: &[u16], dbcs: DoubleWidthMarker| match attribute {
            AttributeMode::Stored(attr) => Self::with_attribute(glyph, dbcs, attr),
            AttributeMode::Current => Self::with_behavior(glyph, dbcs, AttributeBehavior::Current),
        };

        let mut cells = Vec::with_capacity(glyphs.size_hint().0);
        for glyph in glyphs {
            let glyph = glyph.as_ref();
            if classifier.is_full_width(glyph) {
                cells.push(build(glyph, DoubleWidthMarker::Leading)?);
                cells.push(build(glyph, DoubleWidthMarker::Trailing)?);
            } else {
                cells.push(build(glyph, DoubleWidthMarker::Single)?);
            }
        }
        trace!(cells = cells.len(), "glyphs expanded");
        Ok(cells)
    }

    /// [`from_glyphs`](Self::from_glyphs) with `Current` attributes and the
    /// environment-configured Unicode width classifier.
    ///
    /// # Errors
    ///
    /// [`CellError::EmptyGlyph`] if any glyph is empty.
    pub fn from_utf16<I>(glyphs: I) -> Result<Vec<Self>>
    where
        I: IntoIterator,
        I::Item: AsRef<[u16]>,
    {
        Self::from_glyphs(
            glyphs,
            AttributeMode::Current,
            &UnicodeWidthClassifier::from_env(),
        )
    }

    /// Borrow this cell as a view.
    #[inline]
    pub fn view(&self) -> CellView<'_> {
        CellView {
            head: self.content.head(),
            chars: self.content.as_slice(),
            dbcs: self.dbcs,
            attribute: self.attribute,
        }
    }

    /// Glyph code units, regardless of storage form.
    #[inline]
    pub fn chars(&self) -> &[u16] {
        self.content.as_slice()
    }

    #[inline]
    pub fn content(&self) -> &GlyphContent {
        &self.content
    }

    /// Replace the glyph.
    ///
    /// # Errors
    ///
    /// [`CellError::EmptyGlyph`] if `chars` is empty; the cell is left as is.
    pub fn set_chars(&mut self, chars: &[u16]) -> Result<()> {
        self.content = GlyphContent::from_units(chars)?;
        Ok(())
    }

    #[inline]
    pub fn dbcs_attr(&self) -> &DoubleWidthMarker {
        &self.dbcs
    }

    #[inline]
    pub fn dbcs_attr_mut(&mut self) -> &mut DoubleWidthMarker {
        &mut self.dbcs
    }

    #[inline]
    pub fn attribute_mode(&self) -> &AttributeMode {
        &self.attribute
    }

    #[inline]
    pub fn behavior(&self) -> AttributeBehavior {
        self.attribute.behavior()
    }

    /// The stored attribute.
    ///
    /// # Errors
    ///
    /// [`CellError::NoStoredAttribute`] if the mode is `Current`.
    pub fn text_attr(&self) -> Result<&TextAttribute> {
        match &self.attribute {
            AttributeMode::Stored(attr) => Ok(attr),
            AttributeMode::Current => Err(CellError::NoStoredAttribute),
        }
    }

    /// Mutable access to the stored attribute.
    ///
    /// # Errors
    ///
    /// [`CellError::NoStoredAttribute`] if the mode is `Current`.
    pub fn text_attr_mut(&mut self) -> Result<&mut TextAttribute> {
        match &mut self.attribute {
            AttributeMode::Stored(attr) => Ok(attr),
            AttributeMode::Current => Err(CellError::NoStoredAttribute),
        }
    }

    /// Give the cell its own attribute, leaving `Current` mode if needed.
    #[inline]
    pub fn set_attribute(&mut self, attr: TextAttribute) {
        self.attribute = AttributeMode::Stored(attr);
    }

    /// Encode as a legacy console record.
    ///
    /// # Errors
    ///
    /// - [`CellError::NoStoredAttribute`] for `Current` cells.
    /// - [`CellError::NotLegacyRepresentable`] when the glyph spans several
    ///   code units or a color is outside the 16-color palette.
    pub fn to_legacy_record(&self) -> Result<LegacyCellRecord> {
        let attr = self.text_attr()?;
        let unit = self
            .content
            .as_single()
            .ok_or(CellError::unrepresentable("glyph spans multiple code units"))?;
        let colors = attr
            .to_legacy()
            .ok_or(CellError::unrepresentable("color outside the legacy palette"))?;
        Ok(LegacyCellRecord::new(unit, colors | self.dbcs.to_legacy().bits()))
    }

    /// Decode the glyph for display or diagnostics.
    pub fn to_string_lossy(&self) -> String {
        self.content.to_string_lossy()
    }

    #[inline]
    fn assemble(content: GlyphContent, dbcs: DoubleWidthMarker, attribute: AttributeMode) -> Self {
        Self {
            content,
            dbcs,
            attribute,
        }
    }

    fn mode_for_behavior(behavior: AttributeBehavior) -> Result<AttributeMode> {
        match behavior {
            AttributeBehavior::Current => Ok(AttributeMode::Current),
            AttributeBehavior::Stored => {
                debug!("rejected stored behavior without an attribute value");
                Err(CellError::StoredBehavior)
            }
        }
    }
}

impl From<LegacyCellRecord> for Cell {
    fn from(record: LegacyCellRecord) -> Self {
        Self::from_legacy(record)
    }
}

impl From<CellView<'_>> for Cell {
    fn from(view: CellView<'_>) -> Self {
        Self::from_view(view)
    }
}

impl TryFrom<&Cell> for LegacyCellRecord {
    type Error = CellError;

    fn try_from(cell: &Cell) -> Result<Self> {
        cell.to_legacy_record()
    }
}

impl core::fmt::Debug for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cell")
            .field("content", &self.content)
            .field("dbcs", &self.dbcs)
            .field("attribute", &self.attribute)
            .finish()
    }
}


/// Property tests for cell construction and conversion.
///
/// Top-level `#[cfg(test)]` scope: the `proptest!` macro has edition-2024
/// compatibility issues when nested inside another test module.
#[cfg(test)]
mod cell_proptests {
    use super::{AttributeBehavior, AttributeMode, Cell, DoubleWidthMarker};
    use crate::attr::{Color, TextAttribute};
    use crate::legacy::LegacyCellRecord;
    use proptest::prelude::*;

    fn arb_marker() -> impl Strategy<Value = DoubleWidthMarker> {
        prop_oneof![
            Just(DoubleWidthMarker::Single),
            Just(DoubleWidthMarker::Leading),
            Just(DoubleWidthMarker::Trailing),
        ]
    }

    fn arb_attr() -> impl Strategy<Value = TextAttribute> {
        (0u8..16, 0u8..16)
            .prop_map(|(fg, bg)| TextAttribute::new(Color::Legacy(fg), Color::Legacy(bg)))
    }

    fn arb_units() -> impl Strategy<Value = Vec<u16>> {
        proptest::collection::vec(any::<u16>(), 1..8)
    }

    proptest! {
        #[test]
        fn chars_returns_constructed_units(
            units in arb_units(),
            marker in arb_marker(),
            attr in arb_attr(),
        ) {
            let cell = Cell::with_attribute(&units, marker, attr).unwrap();
            prop_assert_eq!(cell.chars(), units.as_slice());
            prop_assert_eq!(cell.content().is_single(), units.len() == 1);
        }

        #[test]
        fn view_copy_is_identity(
            units in arb_units(),
            marker in arb_marker(),
            attr in arb_attr(),
            current in any::<bool>(),
        ) {
            let cell = if current {
                Cell::with_behavior(&units, marker, AttributeBehavior::Current).unwrap()
            } else {
                Cell::with_attribute(&units, marker, attr).unwrap()
            };
            prop_assert_eq!(Cell::from_view(cell.view()), cell);
        }

        #[test]
        fn legacy_round_trip_without_both_flags(unit in any::<u16>(), bits in any::<u16>()) {
            // Bit 13 is unused and both-flags collapses to leading.
            let bits = bits & !0x2000;
            prop_assume!(bits & 0x0300 != 0x0300);
            let record = LegacyCellRecord::new(unit, bits);
            prop_assert_eq!(Cell::from_legacy(record).to_legacy_record(), Ok(record));
        }

        #[test]
        fn different_units_never_equal(a in arb_units(), b in arb_units(), attr in arb_attr()) {
            prop_assume!(a != b);
            let ca = Cell::with_attribute(&a, DoubleWidthMarker::Single, attr).unwrap();
            let cb = Cell::with_attribute(&b, DoubleWidthMarker::Single, attr).unwrap();
            prop_assert_ne!(ca, cb);
        }

        #[test]
        fn current_mode_always_guards_attribute(units in arb_units(), marker in arb_marker()) {
            let mut cell = Cell::with_behavior(&units, marker, AttributeBehavior::Current).unwrap();
            prop_assert!(cell.text_attr_mut().is_err());
            prop_assert_eq!(*cell.attribute_mode(), AttributeMode::Current);
        }
    }
}
