//! Glyph width classification.
//!
//! Cells only need one bit of width information: does a glyph take two
//! columns? The [`GlyphWidthClassifier`] trait is the seam where a buffer can
//! plug in its own answer (font measurement, a cached table, a test double).
//! [`UnicodeWidthClassifier`] is the default, based on East Asian Width.
//!
//! # Configuration
//!
//! Ambiguous-width characters (East Asian Width `A`) are narrow by default.
//! Set `CONSOLE_CELL_CJK_WIDTH=1` (or `CJK_WIDTH=1`) to treat them as wide,
//! which matches terminals running in a CJK locale.

use unicode_width::UnicodeWidthStr;

/// Environment variable enabling wide ambiguous-width characters.
const ENV_CJK_WIDTH: &str = "CONSOLE_CELL_CJK_WIDTH";
/// Fallback environment variable shared with other terminal tooling.
const ENV_CJK_WIDTH_FALLBACK: &str = "CJK_WIDTH";

/// Decides whether a glyph occupies two display columns.
pub trait GlyphWidthClassifier {
    /// `glyph` is the UTF-16 code units of one glyph.
    fn is_full_width(&self, glyph: &[u16]) -> bool;
}

impl<F> GlyphWidthClassifier for F
where
    F: Fn(&[u16]) -> bool,
{
    #[inline]
    fn is_full_width(&self, glyph: &[u16]) -> bool {
        self(glyph)
    }
}

/// Width measurement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidthPolicy {
    /// Treat ambiguous-width characters as double-width.
    pub cjk_ambiguous_wide: bool,
}

impl WidthPolicy {
    /// Read the policy from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read the policy using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cjk_ambiguous_wide = [ENV_CJK_WIDTH, ENV_CJK_WIDTH_FALLBACK]
            .into_iter()
            .find_map(|key| get_env(key).as_deref().and_then(parse_bool))
            .unwrap_or(false);
        Self { cjk_ambiguous_wide }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Default classifier: decodes UTF-16 and measures with `unicode-width`.
///
/// Glyphs containing unpaired surrogates are never full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnicodeWidthClassifier {
    policy: WidthPolicy,
}

impl UnicodeWidthClassifier {
    #[must_use]
    pub const fn new(policy: WidthPolicy) -> Self {
        Self { policy }
    }

    /// Classifier configured from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(WidthPolicy::from_env())
    }

    #[must_use]
    pub const fn policy(&self) -> WidthPolicy {
        self.policy
    }

    /// Display width of a glyph in columns, or `None` if it is not valid
    /// UTF-16.
    #[must_use]
    pub fn glyph_width(&self, glyph: &[u16]) -> Option<usize> {
        let text = String::from_utf16(glyph).ok()?;
        Some(if self.policy.cjk_ambiguous_wide {
            text.width_cjk()
        } else {
            text.width()
        })
    }
}

impl GlyphWidthClassifier for UnicodeWidthClassifier {
    fn is_full_width(&self, glyph: &[u16]) -> bool {
        self.glyph_width(glyph).is_some_and(|width| width >= 2)
    }
}
