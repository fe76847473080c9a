//! SAMAD: light stemming for Standard Arabic and Moroccan dialectal Arabic.
//!
//! The stemmer strips known prefixes and suffixes from a single word. It
//! does not consult a dictionary and does not extract roots.
//!
//! ```
//! assert_eq!(samad_core::stem("المدرسة"), "مدرس");
//! assert_eq!(samad_core::stem_dialect("كيكتبو"), "كتب");
//! ```

pub mod affixes;
mod error;
mod negation;
mod normalizer;
mod stemmer;
pub mod strip;
mod traits;

pub use affixes::{AffixTables, BucketedAffixSet, Tier};
pub use error::SamadError;
pub use negation::strip_negation;
pub use normalizer::{normalize, ArabicNormalizer};
pub use stemmer::{stem_dialect_with, stem_standard, SamadStemmer};
pub use strip::{
    strip_final_letter, strip_prefix, strip_prefix_tied_to_suffix, strip_suffix, MIN_STEM_LEN,
};
pub use traits::{Mode, Stemmer, StemmerConfig, CONFIG_ENV_VAR};

/// Stem a word in Standard Arabic mode.
pub fn stem(word: &str) -> String {
    stem_standard(word, AffixTables::global())
}

/// Stem a word in Moroccan dialectal Arabic mode.
pub fn stem_dialect(word: &str) -> String {
    stem_dialect_with(word, AffixTables::global())
}

/// Strip the negation circumfix using the shared tables.
pub fn negate(word: &str) -> String {
    strip_negation(&normalize(word), AffixTables::global()).to_string()
}
