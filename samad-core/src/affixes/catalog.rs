//! Atomic Affix Catalog
//!
//! Literal affix classes for Standard Arabic and Moroccan dialectal Arabic.
//! Every compound affix the stemmer knows about is built from these lists by
//! the generators in [`super::combinator`]. All strings are already in
//! normalized form.

/// An atomic affix class: fragments sharing one grammatical slot.
pub type AffixClass = &'static [&'static str];

// ---------------------------------------------------------------------------
// Standard Arabic: nouns
// ---------------------------------------------------------------------------

/// Definite article.
pub const NOUN_ARTICLE: AffixClass = &["ال"];

/// Lam fused with the definite article.
pub const NOUN_LAM_ARTICLE: AffixClass = &["لل"];

/// Attached prepositions.
pub const NOUN_PREPOSITIONS: AffixClass = &["ب", "ك"];

/// Attached conjunctions.
pub const NOUN_CONJUNCTIONS: AffixClass = &["ف", "و"];

/// Bare lam preposition, only used by the joined prefixes.
pub const NOUN_LAM: AffixClass = &["ل"];

/// Number, gender and relative endings that can carry a pronoun after them.
pub const NOUN_INFLECTIONS: AffixClass = &[
    "ويت", "ويات", "يا", "يت", "ي", "و", "ا", "هات", "يات", "ات", "ت",
];

/// Possessive pronouns.
pub const NOUN_PRONOUNS: AffixClass = &[
    "ه", "ها", "هما", "هم", "هن", "ك", "كي", "كما", "كم", "ي", "نا",
];

/// Plural, dual, feminine and relative-adjective endings.
pub const NOUN_ENDINGS: AffixClass = &[
    "ية", "ون", "ين", "يون", "يين", "تين", "ان", "ة", "يا", "وية",
];

// ---------------------------------------------------------------------------
// Standard Arabic: verbs
// ---------------------------------------------------------------------------

/// Imperfect subject markers.
pub const VERB_SUBJECT_MARKERS: AffixClass = &["ت", "ي", "ن", "ا"];

/// Future sin and lam of purpose.
pub const VERB_PARTICLES: AffixClass = &["س", "ل"];

/// Attached conjunctions.
pub const VERB_CONJUNCTIONS: AffixClass = &["و", "ف"];

/// Subject endings.
pub const VERB_SUBJECTS: AffixClass = &["ون", "ن", "ان", "ين", "ت", "ا", "و"];

/// Subject endings that take an object pronoun but not a second-person one.
pub const VERB_LONG_SUBJECTS: AffixClass = &["ي", "تمو", "تما"];

/// First person plural.
pub const VERB_NA: AffixClass = &["نا"];

/// First person singular object.
pub const VERB_NI: AffixClass = &["ني"];

/// Third person object pronouns.
pub const VERB_THIRD_PERSON: AffixClass = &["ه", "ها", "هما", "هم", "هن"];

/// Second person object pronouns.
pub const VERB_SECOND_PERSON: AffixClass = &["ك", "كي", "كما", "كم"];

/// Subject endings that never combine.
pub const VERB_STANDALONE: AffixClass = &["وا", "تم", "يا"];

// ---------------------------------------------------------------------------
// Moroccan Arabic: nouns
// ---------------------------------------------------------------------------

/// Definite article.
pub const DIALECT_NOUN_ARTICLE: AffixClass = &["ال"];

/// Proclitic particles attached before the article.
pub const DIALECT_NOUN_PARTICLES: AffixClass = &["ي", "ت", "د", "ع", "غ"];

/// Conjunctions, shared by dialect nouns, verbs and negated verbs.
pub const DIALECT_CONJUNCTIONS: AffixClass = &["او", "وا", "و"];

/// Feminine plural and singular.
pub const DIALECT_NOUN_FEMININE: AffixClass = &["ات", "ت"];

pub const DIALECT_NOUN_ALEF: AffixClass = &["ا"];

/// Dual.
pub const DIALECT_NOUN_DUAL: AffixClass = &["ين"];

/// Possessive pronouns.
pub const DIALECT_NOUN_PRONOUNS: AffixClass = &["هم", "هوم", "ها", "كم", "كوم", "كي", "ك"];

pub const DIALECT_NOUN_VOWELS: AffixClass = &["و", "ي"];

/// Pronouns that attach after a final alef.
pub const DIALECT_NOUN_AFTER_ALEF: AffixClass = &["ه", "ني", "نا"];

// ---------------------------------------------------------------------------
// Moroccan Arabic: verbs
// ---------------------------------------------------------------------------

/// Aspect markers, shared with negated verbs.
pub const DIALECT_ASPECT_MARKERS: AffixClass = &["كا", "عا", "غا", "تا", "ك", "ع", "غ", "ت"];

/// Person markers, shared with negated verbs.
pub const DIALECT_PERSON_MARKERS: AffixClass = &["ن", "ت", "ي"];

/// Plural subject.
pub const DIALECT_VERB_PLURAL: AffixClass = &["و"];

/// Second person subjects.
pub const DIALECT_VERB_SECOND_PERSON: AffixClass = &["ي", "تي", "تو"];

/// First and third person perfect subjects.
pub const DIALECT_VERB_PERFECT: AffixClass = &["ت", "ات"];

pub const DIALECT_VERB_NI: AffixClass = &["ني"];

pub const DIALECT_VERB_NA: AffixClass = &["نا"];

/// Dative lam. Never stripped on its own.
pub const DIALECT_VERB_DATIVE: AffixClass = &["ل", "لي"];

/// Second person object pronouns.
pub const DIALECT_VERB_SECOND_OBJECT: AffixClass = &["ك", "كم", "كوم"];

/// Third person object pronouns.
pub const DIALECT_VERB_THIRD_OBJECT: AffixClass = &["ه", "ها", "هم", "هوم"];

/// Pronouns after the dative lam. Never stripped on their own.
pub const DIALECT_VERB_DATIVE_OBJECT: AffixClass = &["ي", "يا"];

// ---------------------------------------------------------------------------
// Moroccan Arabic: negation circumfix
// ---------------------------------------------------------------------------

/// Negation proclitics.
pub const NEGATION_PREFIXES: AffixClass = &["م", "ما"];

/// Negation enclitics. The circumfix needs one of these at the end.
pub const NEGATION_SUFFIXES: AffixClass = &["ش", "شي"];

/// Character put back in front of a negated stem.
pub const NEGATION_MARKER: char = '\u{0645}';

// ---------------------------------------------------------------------------
// Post normalization
// ---------------------------------------------------------------------------

/// Single letters tried by [`crate::strip::strip_final_letter`], in order.
pub const POST_NORMALIZATION_SUFFIXES: AffixClass = &["ا", "و", "ي", "ي"];
