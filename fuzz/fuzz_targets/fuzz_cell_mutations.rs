#![no_main]

use arbitrary::Arbitrary;
use console_cell::{
    AttributeBehavior, Cell, CellError, LegacyCellRecord, TextAttribute,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    SetChars(Vec<u16>),
    SetLeading,
    SetTrailing,
    ResetMarker,
    SetLegacyAttribute(u16),
    MakeCurrent,
    ToLegacy,
}

#[derive(Debug, Arbitrary)]
struct Input {
    record: (u16, u16),
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut cell = Cell::from_legacy(LegacyCellRecord::new(input.record.0, input.record.1));

    for op in input.ops.into_iter().take(256) {
        match op {
            Op::SetChars(units) => {
                let before = cell.clone();
                match cell.set_chars(&units) {
                    Ok(()) => assert_eq!(cell.chars(), units.as_slice()),
                    Err(err) => {
                        assert_eq!(err, CellError::EmptyGlyph);
                        assert_eq!(cell, before);
                    }
                }
            }
            Op::SetLeading => cell.dbcs_attr_mut().set_leading(),
            Op::SetTrailing => cell.dbcs_attr_mut().set_trailing(),
            Op::ResetMarker => cell.dbcs_attr_mut().reset(),
            Op::SetLegacyAttribute(bits) => cell.set_attribute(TextAttribute::from_legacy(bits)),
            Op::MakeCurrent => {
                let dbcs = *cell.dbcs_attr();
                cell = Cell::with_behavior(cell.chars(), dbcs, AttributeBehavior::Current)
                    .expect("cell content is never empty");
                assert_eq!(cell.text_attr(), Err(CellError::NoStoredAttribute));
            }
            Op::ToLegacy => {
                if let Ok(record) = cell.to_legacy_record() {
                    let back = Cell::from_legacy(record);
                    assert_eq!(back.chars(), cell.chars());
                    assert_eq!(back.dbcs_attr(), cell.dbcs_attr());
                }
            }
        }
        assert!(!cell.chars().is_empty());
    }
});
