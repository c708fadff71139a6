//! Error type for cell construction and attribute access.
//!
//! Every failure here is a caller contract violation (an invalid argument).
//! The variants only distinguish which contract was broken.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CellError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("invalid argument: glyph content is empty")]
    EmptyGlyph,

    #[error("invalid argument: stored behavior requires an explicit attribute value")]
    StoredBehavior,

    #[error("invalid argument: cell has no stored attribute (behavior is `current`)")]
    NoStoredAttribute,

    #[error("invalid argument: cell is not representable as a legacy record: {reason}")]
    NotLegacyRepresentable { reason: &'static str },
}

impl CellError {
    /// Whether this error belongs to the invalid-argument class (all do).
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyGlyph
                | Self::StoredBehavior
                | Self::NoStoredAttribute
                | Self::NotLegacyRepresentable { .. }
        )
    }

    #[must_use]
    pub(crate) const fn unrepresentable(reason: &'static str) -> Self {
        Self::NotLegacyRepresentable { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::CellError;

    #[test]
    fn every_variant_is_invalid_argument() {
        let errors = [
            CellError::EmptyGlyph,
            CellError::StoredBehavior,
            CellError::NoStoredAttribute,
            CellError::unrepresentable("rgb"),
        ];
        for error in errors {
            assert!(error.is_invalid_argument(), "{error:?}");
            assert!(error.to_string().starts_with("invalid argument"));
        }
    }

    #[test]
    fn unrepresentable_message_carries_reason() {
        let error = CellError::unrepresentable("glyph spans multiple code units");
        assert_eq!(
            error.to_string(),
            "invalid argument: cell is not representable as a legacy record: glyph spans multiple code units"
        );
    }
}
