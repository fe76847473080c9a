//! Affix Tables Module
//!
//! Atomic affix classes, the attachment patterns that combine them, and the
//! length-tiered sets the stripping primitives consume.

mod bucket;
pub mod catalog;
pub mod combinator;
mod tables;

pub use bucket::{BucketedAffixSet, Tier};
pub use catalog::{AffixClass, NEGATION_MARKER};
pub use tables::AffixTables;
