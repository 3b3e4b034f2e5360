//! Text canonicalization applied before tokenization and dictionary lookup.
//!
//! Unicode canonical composition (NFC) followed by full Unicode lowercasing.
//! Dictionaries store words in this form, so every lookup key must pass
//! through [`normalize`] first.

use std::{borrow::Cow, sync::LazyLock};

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// NFC-compose then lowercase `text`.
///
/// Zero-copy when the input is already composed and lowercase.
pub fn normalize(text: &str) -> Cow<'_, str> {
    // ASCII is always NFC; only the case can change.
    if text.is_ascii() {
        if text.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Owned(text.to_ascii_lowercase());
        }
        return Cow::Borrowed(text);
    }

    let composed = ICU4X_NFC.normalize(text);
    if needs_lowercase(&composed) {
        Cow::Owned(composed.to_lowercase())
    } else {
        composed
    }
}

#[inline(always)]
fn needs_lowercase(text: &str) -> bool {
    text.chars().any(|c| c.to_lowercase().next() != Some(c))
}
