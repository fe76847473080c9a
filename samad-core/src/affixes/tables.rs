//! Immutable affix tables shared by both stemming modes.

use once_cell::sync::Lazy;
use tracing::debug;

use super::bucket::BucketedAffixSet;
use super::catalog::{AffixClass, NEGATION_SUFFIXES};
use super::combinator::*;

static GLOBAL_TABLES: Lazy<AffixTables> = Lazy::new(|| {
    let tables = AffixTables::build();
    debug!(
        noun_prefixes = tables.noun_prefixes.len(),
        noun_suffixes = tables.noun_suffixes.len(),
        verb_prefixes = tables.verb_prefixes.len(),
        verb_suffixes = tables.verb_suffixes.len(),
        negation_prefixes = tables.negation_prefixes.len(),
        full_prefixes = tables.full_prefixes.len(),
        full_suffixes = tables.full_suffixes.len(),
        "built affix tables"
    );
    tables
});

/// Every bucketed affix set the cascades consult.
///
/// Built once from the catalog and never mutated afterwards, so a shared
/// reference can be used from any number of threads.
#[derive(Debug, Clone)]
pub struct AffixTables {
    noun_prefixes: BucketedAffixSet,
    noun_suffixes: BucketedAffixSet,
    verb_prefixes: BucketedAffixSet,
    verb_suffixes: BucketedAffixSet,
    joined_noun_prefixes: BucketedAffixSet,
    joined_noun_suffixes: BucketedAffixSet,
    standard_suffixes: BucketedAffixSet,
    dialect_noun_prefixes: BucketedAffixSet,
    dialect_noun_suffixes: BucketedAffixSet,
    dialect_verb_prefixes: BucketedAffixSet,
    dialect_verb_suffixes: BucketedAffixSet,
    negation_prefixes: BucketedAffixSet,
    full_prefixes: BucketedAffixSet,
    full_suffixes: BucketedAffixSet,
}

impl AffixTables {
    /// Generate and bucket every compound affix set.
    pub fn build() -> Self {
        let noun_pre = noun_prefixes();
        let noun_suf = noun_suffixes();
        let verb_pre = verb_prefixes();
        let verb_suf = verb_suffixes();
        let di_noun_pre = dialect_noun_prefixes();
        let di_noun_suf = dialect_noun_suffixes();
        let di_verb_pre = dialect_verb_prefixes();
        let di_verb_suf = dialect_verb_suffixes();

        Self {
            noun_prefixes: BucketedAffixSet::new(noun_pre.iter().cloned()),
            noun_suffixes: BucketedAffixSet::new(noun_suf.iter().cloned()),
            verb_prefixes: BucketedAffixSet::new(verb_pre.iter().cloned()),
            verb_suffixes: BucketedAffixSet::new(verb_suf.iter().cloned()),
            joined_noun_prefixes: BucketedAffixSet::new(joined_noun_prefixes()),
            joined_noun_suffixes: BucketedAffixSet::new(joined_noun_suffixes()),
            standard_suffixes: union([&noun_suf, &verb_suf]),
            dialect_noun_prefixes: union([&di_noun_pre, &noun_pre]),
            dialect_noun_suffixes: union([&di_noun_suf, &noun_suf]),
            dialect_verb_prefixes: BucketedAffixSet::new(di_verb_pre.iter().cloned()),
            dialect_verb_suffixes: union([&di_verb_suf, &verb_suf]),
            negation_prefixes: BucketedAffixSet::new(negation_prefixes()),
            full_prefixes: union([&noun_pre, &di_noun_pre, &verb_pre, &di_verb_pre]),
            full_suffixes: union([&noun_suf, &di_noun_suf, &verb_suf, &di_verb_suf]),
        }
    }

    /// Process-wide tables, built on first use.
    pub fn global() -> &'static AffixTables {
        &GLOBAL_TABLES
    }

    /// Standard noun prefixes.
    pub fn noun_prefixes(&self) -> &BucketedAffixSet {
        &self.noun_prefixes
    }

    /// Standard noun suffixes.
    pub fn noun_suffixes(&self) -> &BucketedAffixSet {
        &self.noun_suffixes
    }

    /// Standard verb prefixes.
    pub fn verb_prefixes(&self) -> &BucketedAffixSet {
        &self.verb_prefixes
    }

    /// Standard verb suffixes.
    pub fn verb_suffixes(&self) -> &BucketedAffixSet {
        &self.verb_suffixes
    }

    /// Article-less noun prefixes, valid only next to a noun suffix.
    pub fn joined_noun_prefixes(&self) -> &BucketedAffixSet {
        &self.joined_noun_prefixes
    }

    /// Pronoun and ending suffixes paired with the joined prefixes.
    pub fn joined_noun_suffixes(&self) -> &BucketedAffixSet {
        &self.joined_noun_suffixes
    }

    /// Standard noun and verb suffixes.
    pub fn standard_suffixes(&self) -> &BucketedAffixSet {
        &self.standard_suffixes
    }

    /// Dialect noun prefixes together with the standard ones.
    pub fn dialect_noun_prefixes(&self) -> &BucketedAffixSet {
        &self.dialect_noun_prefixes
    }

    /// Dialect noun suffixes together with the standard ones.
    pub fn dialect_noun_suffixes(&self) -> &BucketedAffixSet {
        &self.dialect_noun_suffixes
    }

    /// Dialect verb prefixes.
    pub fn dialect_verb_prefixes(&self) -> &BucketedAffixSet {
        &self.dialect_verb_prefixes
    }

    /// Dialect verb suffixes together with the standard ones.
    pub fn dialect_verb_suffixes(&self) -> &BucketedAffixSet {
        &self.dialect_verb_suffixes
    }

    /// Prefix half of the negation circumfix.
    pub fn negation_prefixes(&self) -> &BucketedAffixSet {
        &self.negation_prefixes
    }

    /// Suffix half of the negation circumfix.
    pub fn negation_suffixes(&self) -> AffixClass {
        NEGATION_SUFFIXES
    }

    /// Noun and verb prefixes of both modes.
    pub fn full_prefixes(&self) -> &BucketedAffixSet {
        &self.full_prefixes
    }

    /// Noun and verb suffixes of both modes.
    pub fn full_suffixes(&self) -> &BucketedAffixSet {
        &self.full_suffixes
    }
}

impl Default for AffixTables {
    fn default() -> Self {
        Self::build()
    }
}

fn union<const N: usize>(lists: [&Vec<String>; N]) -> BucketedAffixSet {
    lists.into_iter().flatten().cloned().collect()
}
