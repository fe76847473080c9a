//! Longest-match affix stripping.
//!
//! All primitives are total: when nothing matches, or every match would
//! leave fewer than [`MIN_STEM_LEN`] characters, the word comes back
//! unchanged. Results borrow from the input.

use crate::affixes::catalog::POST_NORMALIZATION_SUFFIXES;
use crate::affixes::BucketedAffixSet;

/// Shortest stem any single strip may leave behind.
pub const MIN_STEM_LEN: usize = 3;

/// Length in characters.
pub(crate) fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Whether removing `removed` characters from a word of `len` characters
/// still leaves a stem.
fn leaves_stem(len: usize, removed: usize) -> bool {
    len >= removed + MIN_STEM_LEN
}

/// Remove the longest prefix of `word` found in `prefixes`.
pub fn strip_prefix<'a>(word: &'a str, prefixes: &BucketedAffixSet) -> &'a str {
    let len = char_len(word);
    for tier in prefixes.tiers() {
        if !leaves_stem(len, tier.affix_len()) {
            continue;
        }
        for prefix in tier.affixes() {
            if let Some(rest) = word.strip_prefix(prefix) {
                return rest;
            }
        }
    }
    word
}

/// Remove the longest suffix of `word` found in `suffixes`.
pub fn strip_suffix<'a>(word: &'a str, suffixes: &BucketedAffixSet) -> &'a str {
    let len = char_len(word);
    for tier in suffixes.tiers() {
        if !leaves_stem(len, tier.affix_len()) {
            continue;
        }
        for suffix in tier.affixes() {
            if let Some(rest) = word.strip_suffix(suffix) {
                return rest;
            }
        }
    }
    word
}

/// Remove a prefix only when the word also ends in one of `suffixes`.
///
/// Suffixes are scanned longest first, and for each suffix the prefixes
/// longest first; both affixes together must leave a stem. Only the prefix
/// is removed, the caller strips the suffix afterwards.
pub fn strip_prefix_tied_to_suffix<'a>(
    word: &'a str,
    prefixes: &BucketedAffixSet,
    suffixes: &BucketedAffixSet,
) -> &'a str {
    let len = char_len(word);
    for suffix_tier in suffixes.tiers() {
        if !leaves_stem(len, suffix_tier.affix_len()) {
            continue;
        }
        for suffix in suffix_tier.affixes() {
            if !word.ends_with(suffix) {
                continue;
            }
            for prefix_tier in prefixes.tiers() {
                if !leaves_stem(len, suffix_tier.affix_len() + prefix_tier.affix_len()) {
                    continue;
                }
                for prefix in prefix_tier.affixes() {
                    if let Some(rest) = word.strip_prefix(prefix) {
                        return rest;
                    }
                }
            }
        }
    }
    word
}

/// Remove one trailing letter from the post-normalization set.
///
/// Letters are tried in catalog order. Neither stemming cascade calls this;
/// it is available for callers that want a last single-letter trim.
pub fn strip_final_letter(word: &str) -> &str {
    let len = char_len(word);
    for &letter in POST_NORMALIZATION_SUFFIXES {
        if !leaves_stem(len, char_len(letter)) {
            continue;
        }
        if let Some(rest) = word.strip_suffix(letter) {
            return rest;
        }
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(affixes: &[&str]) -> BucketedAffixSet {
        BucketedAffixSet::new(affixes.iter().copied())
    }

    #[test]
    fn strips_longest_suffix_first() {
        // "هما" ends in "ا", which is also in the set on its own.
        let suffixes = set(&["ا", "هما"]);
        assert_eq!(strip_suffix("كتابهما", &suffixes), "كتاب");
    }

    #[test]
    fn strips_longest_prefix_first() {
        let prefixes = set(&["و", "وال"]);
        assert_eq!(strip_prefix("والكتاب", &prefixes), "كتاب");
    }

    #[test]
    fn falls_back_to_shorter_tier_when_guard_blocks_longer() {
        let prefixes = set(&["و", "وال"]);
        // Removing "وال" would leave two letters.
        assert_eq!(strip_prefix("والعب", &prefixes), "العب");
        let suffixes = set(&["ا", "هما"]);
        assert_eq!(strip_suffix("ابهما", &suffixes), "ابهم");
    }

    #[test]
    fn never_leaves_fewer_than_three_letters() {
        let prefixes = set(&["ال"]);
        assert_eq!(strip_prefix("الاب", &prefixes), "الاب");
        assert_eq!(strip_prefix("البيت", &prefixes), "بيت");
        let suffixes = set(&["ة"]);
        assert_eq!(strip_suffix("قطة", &suffixes), "قطة");
        assert_eq!(strip_suffix("مدرسة", &suffixes), "مدرس");
    }

    #[test]
    fn unmatched_and_short_words_are_unchanged() {
        let prefixes = set(&["ال", "و"]);
        assert_eq!(strip_prefix("كتاب", &prefixes), "كتاب");
        assert_eq!(strip_prefix("", &prefixes), "");
        assert_eq!(strip_suffix("ab", &prefixes), "ab");
        assert_eq!(strip_prefix("word", &BucketedAffixSet::default()), "word");
    }

    #[test]
    fn tied_prefix_needs_its_suffix() {
        let prefixes = set(&["ي", "سي"]);
        let suffixes = set(&["ون", "ن"]);
        assert_eq!(strip_prefix_tied_to_suffix("سيكتبون", &prefixes, &suffixes), "كتبون");
        // Prefix present but no suffix.
        assert_eq!(strip_prefix_tied_to_suffix("سيكتب", &prefixes, &suffixes), "سيكتب");
        // Suffix present but no prefix.
        assert_eq!(strip_prefix_tied_to_suffix("كتبون", &prefixes, &suffixes), "كتبون");
    }

    #[test]
    fn tied_guard_counts_both_affixes() {
        let prefixes = set(&["ي", "سي"]);
        let suffixes = set(&["ون"]);
        // "سي" + "ون" would leave two letters, "ي" + "ون" leaves three.
        assert_eq!(strip_prefix_tied_to_suffix("سيكتون", &prefixes, &suffixes), "سيكتون");
        assert_eq!(strip_prefix_tied_to_suffix("سيكتبون", &prefixes, &suffixes), "كتبون");
        assert_eq!(strip_prefix_tied_to_suffix("يكتبون", &prefixes, &suffixes), "كتبون");
    }

    #[test]
    fn final_letter_strip() {
        assert_eq!(strip_final_letter("كتبوا"), "كتبو");
        assert_eq!(strip_final_letter("قاضي"), "قاض");
        assert_eq!(strip_final_letter("دعا"), "دعا");
        assert_eq!(strip_final_letter("كتب"), "كتب");
    }
}
