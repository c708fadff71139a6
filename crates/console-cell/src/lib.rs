#![forbid(unsafe_code)]

//! Console output cell: the unit of a text screen buffer.
//!
//! A [`Cell`] holds one glyph (as UTF-16 code units), a [`DoubleWidthMarker`]
//! saying whether it is half of a two-column glyph, and an [`AttributeMode`]
//! saying how it is painted.
//!
//! # Representations
//!
//! The same logical cell shows up in four shapes:
//!
//! - **Inline**: a single code unit stored directly in the cell (no heap).
//! - **Cluster**: a multi-unit grapheme (surrogate pairs, combining marks,
//!   ZWJ sequences) stored in an owned sequence.
//! - **Legacy record**: the fixed 4-byte [`LegacyCellRecord`] used by the
//!   classic console API (one code unit + attribute word with DBCS flags).
//! - **View**: a borrowed [`CellView`] used when copying ranges of cells.
//!
//! Every conversion assembles the cell from the same two validated parts, a
//! never-empty [`GlyphContent`] and an [`AttributeMode`], so the invariants
//! hold no matter which path built the cell.
//!
//! # Collaborators
//!
//! Width classification is behind the [`GlyphWidthClassifier`] trait. The
//! owning buffer is responsible for resolving [`AttributeMode::Current`]
//! cells at paint time.
//!
//! # Example
//!
//! ```
//! use console_cell::{AttributeMode, Cell, DoubleWidthMarker, UnicodeWidthClassifier};
//! use console_cell::glyphs_from_str;
//!
//! let glyphs = glyphs_from_str("a中");
//! let classifier = UnicodeWidthClassifier::default();
//! let cells = Cell::from_glyphs(&glyphs, AttributeMode::Current, &classifier).unwrap();
//!
//! assert_eq!(cells.len(), 3);
//! assert_eq!(*cells[1].dbcs_attr(), DoubleWidthMarker::Leading);
//! assert_eq!(*cells[2].dbcs_attr(), DoubleWidthMarker::Trailing);
//! assert_eq!(cells[1].chars(), cells[2].chars());
//! ```

pub mod attr;
pub mod cell;
pub mod error;
pub mod glyph;
pub mod legacy;
pub mod logging;
pub mod width;

pub use attr::{AttrFlags, Color, TextAttribute};
pub use cell::{AttributeBehavior, AttributeMode, Cell, CellView, DoubleWidthMarker};
pub use error::{CellError, Result};
pub use glyph::{GlyphContent, glyphs_from_str};
pub use legacy::{LegacyAttributes, LegacyCellRecord};
pub use width::{GlyphWidthClassifier, UnicodeWidthClassifier, WidthPolicy};
