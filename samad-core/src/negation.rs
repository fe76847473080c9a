//! Moroccan negation circumfix.
//!
//! A negated dialect verb is wrapped in a proclitic (ما, م, possibly with a
//! conjunction and aspect/person markers) and an enclitic (ش or شي). Both
//! halves must be present before either is removed.

use crate::affixes::AffixTables;
use crate::strip::{char_len, strip_prefix, strip_suffix, MIN_STEM_LEN};

/// Strip the negation circumfix, then strip the remainder as a dialect verb.
///
/// Returns the word unchanged when no prefix/suffix pair matches with at
/// least [`MIN_STEM_LEN`] characters left between them.
pub fn strip_negation<'a>(word: &'a str, tables: &AffixTables) -> &'a str {
    let len = char_len(word);
    for tier in tables.negation_prefixes().tiers() {
        if len < tier.affix_len() + MIN_STEM_LEN {
            continue;
        }
        for prefix in tier.affixes() {
            let Some(rest) = word.strip_prefix(prefix) else {
                continue;
            };
            for &suffix in tables.negation_suffixes() {
                if len < tier.affix_len() + char_len(suffix) + MIN_STEM_LEN {
                    continue;
                }
                if let Some(core) = rest.strip_suffix(suffix) {
                    let core = strip_prefix(core, tables.dialect_verb_prefixes());
                    return strip_suffix(core, tables.full_suffixes());
                }
            }
        }
    }
    word
}
