//! Compound affix generation.
//!
//! Each affix family is described by a list of attachment patterns. A
//! pattern is a sequence of atomic classes in the order they attach to the
//! word, outermost first; expanding it yields every concatenation that picks
//! one fragment from each class. A family's compound list is the union of
//! its expanded patterns, so the grammar stays readable as data and only
//! the pairings listed here are ever produced.

use super::catalog::*;

/// Classes concatenated left to right.
pub type Pattern = &'static [AffixClass];

/// Standard noun prefixes: conjunction, preposition, article.
pub const NOUN_PREFIX_PATTERNS: &[Pattern] = &[
    &[NOUN_ARTICLE],
    &[NOUN_PREPOSITIONS, NOUN_ARTICLE],
    &[NOUN_CONJUNCTIONS, NOUN_ARTICLE],
    &[NOUN_CONJUNCTIONS, NOUN_PREPOSITIONS, NOUN_ARTICLE],
    &[NOUN_LAM_ARTICLE],
    &[NOUN_CONJUNCTIONS, NOUN_LAM_ARTICLE],
];

/// Standard noun suffixes: inflection, then possessive pronoun.
pub const NOUN_SUFFIX_PATTERNS: &[Pattern] = &[
    &[NOUN_INFLECTIONS, NOUN_PRONOUNS],
    &[NOUN_INFLECTIONS],
    &[NOUN_PRONOUNS],
    &[NOUN_ENDINGS],
];

/// Prefixes without the article, only stripped next to a noun suffix.
pub const JOINED_NOUN_PREFIX_PATTERNS: &[Pattern] = &[
    &[NOUN_CONJUNCTIONS, NOUN_LAM],
    &[NOUN_PREPOSITIONS],
    &[NOUN_CONJUNCTIONS],
    &[NOUN_LAM],
];

/// Suffixes paired with the joined prefixes.
pub const JOINED_NOUN_SUFFIX_PATTERNS: &[Pattern] = &[&[NOUN_PRONOUNS], &[NOUN_ENDINGS]];

/// Standard verb prefixes: conjunction, particle, subject marker.
pub const VERB_PREFIX_PATTERNS: &[Pattern] = &[
    &[VERB_SUBJECT_MARKERS],
    &[VERB_PARTICLES, VERB_SUBJECT_MARKERS],
    &[VERB_CONJUNCTIONS, VERB_PARTICLES, VERB_SUBJECT_MARKERS],
    &[VERB_CONJUNCTIONS, VERB_SUBJECT_MARKERS],
];

/// Standard verb suffixes: subject, then object pronoun.
pub const VERB_SUFFIX_PATTERNS: &[Pattern] = &[
    &[VERB_SUBJECTS, VERB_NA],
    &[VERB_SUBJECTS, VERB_NI],
    &[VERB_SUBJECTS, VERB_THIRD_PERSON],
    &[VERB_SUBJECTS, VERB_SECOND_PERSON],
    &[VERB_LONG_SUBJECTS, VERB_NA],
    &[VERB_LONG_SUBJECTS, VERB_NI],
    &[VERB_LONG_SUBJECTS, VERB_THIRD_PERSON],
    &[VERB_NA, VERB_THIRD_PERSON],
    &[VERB_NA, VERB_SECOND_PERSON],
    &[VERB_SUBJECTS],
    &[VERB_LONG_SUBJECTS],
    &[VERB_THIRD_PERSON],
    &[VERB_SECOND_PERSON],
    &[VERB_STANDALONE],
    &[VERB_NA],
    &[VERB_NI],
];

/// Dialect noun prefixes: conjunction, particle, article.
pub const DIALECT_NOUN_PREFIX_PATTERNS: &[Pattern] = &[
    &[DIALECT_NOUN_PARTICLES, DIALECT_NOUN_ARTICLE],
    &[DIALECT_CONJUNCTIONS, DIALECT_NOUN_PARTICLES, DIALECT_NOUN_ARTICLE],
];

/// Dialect noun suffixes.
pub const DIALECT_NOUN_SUFFIX_PATTERNS: &[Pattern] = &[
    &[DIALECT_NOUN_FEMININE, DIALECT_NOUN_PRONOUNS],
    &[DIALECT_NOUN_ALEF, DIALECT_NOUN_PRONOUNS],
    &[DIALECT_NOUN_DUAL, DIALECT_NOUN_PRONOUNS],
    &[DIALECT_NOUN_FEMININE, DIALECT_NOUN_VOWELS],
    &[DIALECT_NOUN_DUAL, DIALECT_NOUN_VOWELS],
    &[DIALECT_NOUN_ALEF, DIALECT_NOUN_AFTER_ALEF],
    &[DIALECT_NOUN_FEMININE],
    &[DIALECT_NOUN_ALEF],
    &[DIALECT_NOUN_DUAL],
    &[DIALECT_NOUN_PRONOUNS],
    &[DIALECT_NOUN_VOWELS],
    &[DIALECT_NOUN_AFTER_ALEF],
];

/// Dialect verb prefixes: conjunction, aspect, person.
pub const DIALECT_VERB_PREFIX_PATTERNS: &[Pattern] = &[
    &[DIALECT_ASPECT_MARKERS, DIALECT_PERSON_MARKERS],
    &[DIALECT_CONJUNCTIONS, DIALECT_ASPECT_MARKERS, DIALECT_PERSON_MARKERS],
];

/// Dialect verb suffixes: subject, optional dative, object.
///
/// The dative classes only ever appear inside a compound.
pub const DIALECT_VERB_SUFFIX_PATTERNS: &[Pattern] = &[
    &[DIALECT_VERB_PLURAL, DIALECT_VERB_NI],
    &[DIALECT_VERB_PLURAL, DIALECT_VERB_NA],
    &[DIALECT_VERB_DATIVE, DIALECT_VERB_NA],
    &[DIALECT_VERB_DATIVE, DIALECT_VERB_PLURAL],
    &[DIALECT_VERB_PLURAL, DIALECT_VERB_DATIVE, DIALECT_VERB_PLURAL],
    &[DIALECT_VERB_SECOND_PERSON, DIALECT_VERB_NI],
    &[DIALECT_VERB_SECOND_PERSON, DIALECT_VERB_NA],
    &[DIALECT_VERB_SECOND_PERSON, DIALECT_VERB_DATIVE, DIALECT_VERB_NA],
    &[DIALECT_VERB_SECOND_PERSON, DIALECT_VERB_THIRD_OBJECT],
    &[DIALECT_VERB_SECOND_PERSON, DIALECT_VERB_DATIVE, DIALECT_VERB_THIRD_OBJECT],
    &[DIALECT_VERB_SECOND_PERSON, DIALECT_VERB_DATIVE, DIALECT_VERB_DATIVE_OBJECT],
    &[DIALECT_VERB_PERFECT, DIALECT_VERB_SECOND_OBJECT],
    &[DIALECT_VERB_PERFECT, DIALECT_VERB_DATIVE, DIALECT_VERB_SECOND_OBJECT],
    &[DIALECT_VERB_PERFECT, DIALECT_VERB_THIRD_OBJECT],
    &[DIALECT_VERB_PERFECT, DIALECT_VERB_DATIVE, DIALECT_VERB_DATIVE_OBJECT],
    &[DIALECT_VERB_PLURAL, DIALECT_VERB_SECOND_OBJECT],
    &[DIALECT_VERB_NA, DIALECT_VERB_SECOND_OBJECT],
    &[DIALECT_VERB_DATIVE, DIALECT_VERB_SECOND_OBJECT],
    &[DIALECT_VERB_NA, DIALECT_VERB_DATIVE, DIALECT_VERB_SECOND_OBJECT],
    &[DIALECT_VERB_PLURAL, DIALECT_VERB_THIRD_OBJECT],
    &[DIALECT_VERB_NA, DIALECT_VERB_THIRD_OBJECT],
    &[DIALECT_VERB_DATIVE, DIALECT_VERB_THIRD_OBJECT],
    &[DIALECT_VERB_PLURAL, DIALECT_VERB_DATIVE, DIALECT_VERB_THIRD_OBJECT],
    &[DIALECT_VERB_THIRD_OBJECT, DIALECT_VERB_DATIVE, DIALECT_VERB_THIRD_OBJECT],
    &[DIALECT_VERB_PLURAL],
    &[DIALECT_VERB_SECOND_PERSON],
    &[DIALECT_VERB_PERFECT],
    &[DIALECT_VERB_NI],
    &[DIALECT_VERB_NA],
    &[DIALECT_VERB_SECOND_OBJECT],
    &[DIALECT_VERB_THIRD_OBJECT],
];

/// Negation proclitics: conjunction, negation, aspect, person.
pub const NEGATION_PREFIX_PATTERNS: &[Pattern] = &[
    &[NEGATION_PREFIXES, DIALECT_PERSON_MARKERS],
    &[NEGATION_PREFIXES, DIALECT_ASPECT_MARKERS, DIALECT_PERSON_MARKERS],
    &[DIALECT_CONJUNCTIONS, NEGATION_PREFIXES],
    &[DIALECT_CONJUNCTIONS, NEGATION_PREFIXES, DIALECT_PERSON_MARKERS],
    &[
        DIALECT_CONJUNCTIONS,
        NEGATION_PREFIXES,
        DIALECT_ASPECT_MARKERS,
        DIALECT_PERSON_MARKERS,
    ],
    &[NEGATION_PREFIXES],
];

/// Expand one pattern into every concatenation it allows.
pub fn expand(pattern: &[AffixClass]) -> Vec<String> {
    pattern.iter().fold(vec![String::new()], |heads, class| {
        heads
            .iter()
            .flat_map(|head| class.iter().map(move |fragment| format!("{head}{fragment}")))
            .collect()
    })
}

/// Expand every pattern of a family, in order. Duplicates are kept; the
/// bucketizer drops them.
pub fn expand_all(patterns: &[Pattern]) -> Vec<String> {
    patterns.iter().flat_map(|pattern| expand(pattern)).collect()
}

pub fn noun_prefixes() -> Vec<String> {
    expand_all(NOUN_PREFIX_PATTERNS)
}

pub fn noun_suffixes() -> Vec<String> {
    expand_all(NOUN_SUFFIX_PATTERNS)
}

pub fn joined_noun_prefixes() -> Vec<String> {
    expand_all(JOINED_NOUN_PREFIX_PATTERNS)
}

pub fn joined_noun_suffixes() -> Vec<String> {
    expand_all(JOINED_NOUN_SUFFIX_PATTERNS)
}

pub fn verb_prefixes() -> Vec<String> {
    expand_all(VERB_PREFIX_PATTERNS)
}

pub fn verb_suffixes() -> Vec<String> {
    expand_all(VERB_SUFFIX_PATTERNS)
}

pub fn dialect_noun_prefixes() -> Vec<String> {
    expand_all(DIALECT_NOUN_PREFIX_PATTERNS)
}

pub fn dialect_noun_suffixes() -> Vec<String> {
    expand_all(DIALECT_NOUN_SUFFIX_PATTERNS)
}

pub fn dialect_verb_prefixes() -> Vec<String> {
    expand_all(DIALECT_VERB_PREFIX_PATTERNS)
}

pub fn dialect_verb_suffixes() -> Vec<String> {
    expand_all(DIALECT_VERB_SUFFIX_PATTERNS)
}

pub fn negation_prefixes() -> Vec<String> {
    expand_all(NEGATION_PREFIX_PATTERNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn distinct(list: Vec<String>) -> HashSet<String> {
        list.into_iter().collect()
    }

    #[test]
    fn expand_takes_one_fragment_per_class() {
        let out = expand(&[NOUN_CONJUNCTIONS, NOUN_PREPOSITIONS, NOUN_ARTICLE]);
        assert_eq!(out, vec!["فبال", "فكال", "وبال", "وكال"]);
    }

    #[test]
    fn expand_of_empty_pattern_is_the_empty_affix() {
        assert_eq!(expand(&[]), vec![String::new()]);
    }

    #[test]
    fn noun_prefixes_follow_attachment_order() {
        let prefixes = distinct(noun_prefixes());
        assert_eq!(prefixes.len(), 12);
        for expected in ["ال", "بال", "وال", "فبال", "لل", "ولل"] {
            assert!(prefixes.contains(expected), "missing {expected}");
        }
        // Article never attaches before a preposition, prepositions never stack.
        assert!(!prefixes.contains("البال"));
        assert!(!prefixes.contains("ببال"));
    }

    #[test]
    fn family_sizes() {
        assert_eq!(distinct(noun_suffixes()).len(), 151);
        assert_eq!(distinct(joined_noun_prefixes()).len(), 7);
        assert_eq!(distinct(joined_noun_suffixes()).len(), 21);
        assert_eq!(distinct(verb_prefixes()).len(), 36);
        assert_eq!(distinct(verb_suffixes()).len(), 131);
        assert_eq!(distinct(dialect_noun_prefixes()).len(), 20);
        assert_eq!(distinct(dialect_noun_suffixes()).len(), 53);
        assert_eq!(distinct(dialect_verb_prefixes()).len(), 96);
        assert_eq!(distinct(dialect_verb_suffixes()).len(), 191);
        assert_eq!(distinct(negation_prefixes()).len(), 224);
    }

    #[test]
    fn dialect_datives_never_stand_alone() {
        let suffixes = distinct(dialect_verb_suffixes());
        assert!(!suffixes.contains("ل"));
        assert!(!suffixes.contains("لي"));
        assert!(suffixes.contains("تيلها"));
        assert!(suffixes.contains("ولو"));
    }
}
