#![no_main]

use console_cell::{AttributeMode, Cell, GlyphWidthClassifier, TextAttribute, UnicodeWidthClassifier};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Pair bytes into code units, split glyphs on 0xFFFF.
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let glyphs: Vec<&[u16]> = units
        .split(|unit| *unit == 0xFFFF)
        .filter(|glyph| !glyph.is_empty())
        .collect();

    let classifier = UnicodeWidthClassifier::default();
    let mode = match data.first() {
        Some(byte) if byte % 2 == 0 => AttributeMode::Current,
        _ => AttributeMode::Stored(TextAttribute::from_legacy(u16::from(data.len() as u8))),
    };

    let cells = Cell::from_glyphs(&glyphs, mode, &classifier).expect("non-empty glyphs");
    let wide = glyphs.iter().filter(|g| classifier.is_full_width(g)).count();
    assert_eq!(cells.len(), glyphs.len() + wide);

    let mut i = 0;
    for glyph in &glyphs {
        assert_eq!(cells[i].chars(), *glyph);
        assert_eq!(*cells[i].attribute_mode(), mode);
        if cells[i].dbcs_attr().is_leading() {
            assert!(cells[i + 1].dbcs_attr().is_trailing());
            assert_eq!(cells[i + 1].chars(), *glyph);
            i += 2;
        } else {
            assert!(cells[i].dbcs_attr().is_single());
            i += 1;
        }
    }

    for cell in &cells {
        assert_eq!(&Cell::from_view(cell.view()), cell);
    }
});
