// IPA character classification used by the tokenizer and formatter.

use crate::enums::Stress;

// ---------------------------------------------------------------------------
// Stress marks
// ---------------------------------------------------------------------------

/// IPA primary stress mark (U+02C8 MODIFIER LETTER VERTICAL LINE).
pub const PRIMARY_STRESS: char = '\u{02C8}';

/// IPA secondary stress mark (U+02CC MODIFIER LETTER LOW VERTICAL LINE).
pub const SECONDARY_STRESS: char = '\u{02CC}';

/// Stress marks recognized in transcriptions, strongest first.
pub const STRESS_MARKS: &[char] = &[PRIMARY_STRESS, SECONDARY_STRESS];

/// Map a stress mark to its stress level.
pub fn stress_of(c: char) -> Option<Stress> {
    match c {
        PRIMARY_STRESS => Some(Stress::Primary),
        SECONDARY_STRESS => Some(Stress::Secondary),
        _ => None,
    }
}

/// Map a symbol text to its stress level. Only single-mark texts qualify.
pub fn stress_of_text(text: &str) -> Option<Stress> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => stress_of(c),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Length helpers
// ---------------------------------------------------------------------------

/// Length of a symbol text in Unicode scalar values.
///
/// Inventory ordering and cluster bounds are measured in scalars, not bytes:
/// `ø` and `o` must compare as the same length even though their UTF-8
/// encodings differ.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Check whether a text is exactly one Unicode scalar value.
pub fn is_single_char(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some() && chars.next().is_none()
}
