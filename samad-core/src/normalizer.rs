//! Arabic Character Normalizer
//!
//! Collapses glyph variants of alef, ya and waw into their bare forms so the
//! affix tables only need to list one spelling of each letter.
//! Diacritics and tatweel are left untouched.

/// Arabic letter normalizer.
///
/// The substitution table is fixed; normalizing is total and idempotent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArabicNormalizer;

impl ArabicNormalizer {
    /// Create a new Arabic normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize an Arabic word.
    pub fn normalize(&self, word: &str) -> String {
        word.chars().map(normalize_char).collect()
    }
}

/// Normalize a word with the default normalizer.
pub fn normalize(word: &str) -> String {
    ArabicNormalizer.normalize(word)
}

fn normalize_char(ch: char) -> char {
    match ch {
        '\u{0623}' | // Alef with hamza above
        '\u{0622}' | // Alef with madda
        '\u{0625}'   // Alef with hamza below
            => '\u{0627}',
        '\u{0649}' | // Alef maqsura
        '\u{0626}' | // Yaa with hamza
        '\u{0621}'   // Standalone hamza
            => '\u{064A}',
        '\u{0624}' => '\u{0648}', // Waw with hamza -> waw
        _ => ch,
    }
}
