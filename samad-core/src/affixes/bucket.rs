//! Length-tiered affix sets.
//!
//! Stripping must try long affixes before short ones, otherwise a word
//! ending in a compound suffix would lose only its last letter. A
//! [`BucketedAffixSet`] fixes that order at construction time: affixes are
//! grouped into tiers of equal character length, longest tier first.

use std::collections::{BTreeMap, HashSet};

/// Affixes that all share one character length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    affix_len: usize,
    affixes: Vec<String>,
}

impl Tier {
    /// Character length shared by every affix in the tier.
    pub fn affix_len(&self) -> usize {
        self.affix_len
    }

    pub fn affixes(&self) -> impl Iterator<Item = &str> {
        self.affixes.iter().map(String::as_str)
    }
}

/// An affix list grouped into tiers of strictly decreasing length.
///
/// Two affixes of the same length cannot both be a prefix (or a suffix) of
/// one word, so the order inside a tier never changes which affix matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketedAffixSet {
    tiers: Vec<Tier>,
}

impl BucketedAffixSet {
    /// Bucket an affix list. Duplicates are dropped, empty strings ignored.
    pub fn new<I, S>(affixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut by_len: BTreeMap<usize, Vec<String>> = BTreeMap::new();

        for affix in affixes {
            let affix = affix.into();
            if affix.is_empty() || !seen.insert(affix.clone()) {
                continue;
            }
            by_len.entry(affix.chars().count()).or_default().push(affix);
        }

        let tiers = by_len
            .into_iter()
            .rev()
            .map(|(affix_len, affixes)| Tier { affix_len, affixes })
            .collect();

        Self { tiers }
    }

    /// Tiers from longest to shortest.
    pub fn tiers(&self) -> impl Iterator<Item = &Tier> {
        self.tiers.iter()
    }

    /// Number of distinct affixes across all tiers.
    pub fn len(&self) -> usize {
        self.tiers.iter().map(|tier| tier.affixes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn contains(&self, affix: &str) -> bool {
        let affix_len = affix.chars().count();
        self.tiers
            .iter()
            .filter(|tier| tier.affix_len == affix_len)
            .any(|tier| tier.affixes.iter().any(|candidate| candidate == affix))
    }
}

impl<S: Into<String>> FromIterator<S> for BucketedAffixSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
