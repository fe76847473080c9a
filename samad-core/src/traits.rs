//! Stemmer Traits
//!
//! Stemming modes, stemmer configuration and the common stemming interface.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SamadError;

/// Environment variable holding the path of a JSON stemmer config.
pub const CONFIG_ENV_VAR: &str = "SAMAD_CONFIG";

/// Which affix inventory and cascade to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Modern Standard Arabic
    #[default]
    Standard,
    /// Moroccan dialectal Arabic (Darija)
    Dialect,
}

impl Mode {
    /// Get the mode name.
    pub fn code(&self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Dialect => "dialect",
        }
    }
}

impl FromStr for Mode {
    type Err = SamadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "msa" | "ar" => Ok(Mode::Standard),
            "dialect" | "moroccan" | "darija" | "ary" => Ok(Mode::Dialect),
            other => Err(SamadError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Configuration for a stemmer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemmerConfig {
    #[serde(default)]
    pub mode: Mode,
}

impl StemmerConfig {
    /// Config for Standard Arabic.
    pub fn standard() -> Self {
        Self {
            mode: Mode::Standard,
        }
    }

    /// Config for Moroccan Arabic.
    pub fn dialect() -> Self {
        Self {
            mode: Mode::Dialect,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SamadError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(SamadError::from)
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), SamadError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load the file named by `SAMAD_CONFIG`, or fall back to the default.
    pub fn from_env_or_default() -> Result<Self, SamadError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_path(path),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Common trait for stemmers.
pub trait Stemmer: Send + Sync {
    /// Stem a single, already tokenized word.
    fn stem(&self, word: &str) -> String;

    /// Mode the stemmer runs in.
    fn mode(&self) -> Mode;

    /// Stem many words in parallel. Output order matches input order.
    fn stem_all(&self, words: &[String]) -> Vec<String> {
        words.par_iter().map(|word| self.stem(word)).collect()
    }
}
