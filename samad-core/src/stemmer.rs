//! SAMAD Stemming Cascades
//!
//! Each mode tries a fixed sequence of candidate strips on the normalized
//! word. The first candidate that makes the word shorter decides the stem;
//! later candidates are not attempted.

use tracing::trace;

use crate::affixes::{AffixTables, NEGATION_MARKER};
use crate::negation::strip_negation;
use crate::normalizer::normalize;
use crate::strip::{char_len, strip_prefix, strip_prefix_tied_to_suffix, strip_suffix};
use crate::traits::{Mode, Stemmer, StemmerConfig};

/// Light stemmer for Standard and Moroccan Arabic.
#[derive(Debug, Clone, Copy)]
pub struct SamadStemmer<'t> {
    mode: Mode,
    tables: &'t AffixTables,
}

impl Default for SamadStemmer<'static> {
    fn default() -> Self {
        Self::new(Mode::Standard)
    }
}

impl SamadStemmer<'static> {
    /// Create a stemmer over the shared tables.
    pub fn new(mode: Mode) -> Self {
        Self::with_tables(mode, AffixTables::global())
    }

    pub fn from_config(config: &StemmerConfig) -> Self {
        Self::new(config.mode)
    }
}

impl<'t> SamadStemmer<'t> {
    /// Create a stemmer over caller-owned tables.
    pub fn with_tables(mode: Mode, tables: &'t AffixTables) -> Self {
        Self { mode, tables }
    }

    pub fn tables(&self) -> &'t AffixTables {
        self.tables
    }
}

impl Stemmer for SamadStemmer<'_> {
    fn stem(&self, word: &str) -> String {
        match self.mode {
            Mode::Standard => stem_standard(word, self.tables),
            Mode::Dialect => stem_dialect_with(word, self.tables),
        }
    }

    fn mode(&self) -> Mode {
        self.mode
    }
}

fn shortened(candidate: &str, word: &str) -> bool {
    candidate.len() < word.len()
}

/// Standard Arabic cascade.
pub fn stem_standard(word: &str, tables: &AffixTables) -> String {
    let word = normalize(word);

    let noun = strip_prefix(&word, tables.noun_prefixes());
    if shortened(noun, &word) {
        trace!(word = %word, branch = "noun", "stemmed");
        return strip_suffix(noun, tables.noun_suffixes()).to_string();
    }

    let verb = strip_prefix_tied_to_suffix(&word, tables.verb_prefixes(), tables.verb_suffixes());
    if shortened(verb, &word) {
        trace!(word = %word, branch = "verb", "stemmed");
        return strip_suffix(verb, tables.verb_suffixes()).to_string();
    }

    let joined = strip_prefix_tied_to_suffix(
        &word,
        tables.joined_noun_prefixes(),
        tables.joined_noun_suffixes(),
    );
    if shortened(joined, &word) {
        trace!(word = %word, branch = "joined_noun", "stemmed");
        return strip_suffix(joined, tables.noun_suffixes()).to_string();
    }

    trace!(word = %word, branch = "fallback", "stemmed");
    let rest = strip_prefix(&word, tables.joined_noun_prefixes());
    strip_suffix(rest, tables.standard_suffixes()).to_string()
}

/// Moroccan Arabic cascade.
pub fn stem_dialect_with(word: &str, tables: &AffixTables) -> String {
    let word = normalize(word);

    let noun = strip_prefix(&word, tables.dialect_noun_prefixes());
    if shortened(noun, &word) {
        trace!(word = %word, branch = "dialect_noun", "stemmed");
        return strip_suffix(noun, tables.dialect_noun_suffixes()).to_string();
    }

    let verb = strip_prefix(&word, tables.dialect_verb_prefixes());
    if shortened(verb, &word) {
        trace!(word = %word, branch = "dialect_verb", "stemmed");
        return strip_suffix(verb, tables.dialect_verb_suffixes()).to_string();
    }

    let standard_verb =
        strip_prefix_tied_to_suffix(&word, tables.verb_prefixes(), tables.verb_suffixes());
    if shortened(standard_verb, &word) {
        trace!(word = %word, branch = "standard_verb", "stemmed");
        return strip_suffix(standard_verb, tables.dialect_verb_suffixes()).to_string();
    }

    let negated = strip_negation(&word, tables);
    if shortened(negated, &word) {
        if char_len(negated) < char_len(verb) {
            trace!(word = %word, branch = "negation", "stemmed");
            return format!("{NEGATION_MARKER}{negated}");
        }
        // `verb` is the unshortened word here, so this arm cannot be reached.
        // No stem is defined for it; the word is returned as is.
        trace!(word = %word, branch = "negation_not_shorter", "stemmed");
        return verb.to_string();
    }

    let joined =
        strip_prefix_tied_to_suffix(&word, tables.joined_noun_prefixes(), tables.noun_suffixes());
    if shortened(joined, &word) {
        trace!(word = %word, branch = "joined_noun", "stemmed");
        return strip_suffix(joined, tables.dialect_noun_suffixes()).to_string();
    }

    trace!(word = %word, branch = "fallback", "stemmed");
    let rest = strip_prefix(&word, tables.full_prefixes());
    strip_suffix(rest, tables.full_suffixes()).to_string()
}
