//! Text normalization for free-form NF-e fields.
//!
//! The transmission layout only admits a restricted character set, so
//! accented text is stored in its accent-stripped form.

use unicode_normalization::UnicodeNormalization;

/// Strip diacritics: NFD decomposition followed by dropping combining marks.
///
/// # Examples
///
/// ```
/// use notafiscal::core::text::remove_accents;
///
/// assert_eq!(remove_accents("São Paulo"), "Sao Paulo");
/// assert_eq!(remove_accents("informações adicionais"), "informacoes adicionais");
/// ```
pub fn remove_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

fn is_combining_mark(c: char) -> bool {
    // U+0300..U+036F covers every mark produced by decomposing Portuguese
    // orthography (acute, grave, circumflex, tilde, cedilla combining form).
    ('\u{0300}'..='\u{036F}').contains(&c)
}
