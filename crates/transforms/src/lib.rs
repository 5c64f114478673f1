pub mod allocator;
pub mod mapping;
pub mod real_words;
pub mod sentence;
pub mod trie;

use mapping::{SymbolKind, SymbolManglingMap};
use objmangle_core::{ObfuscationSymbols, Seed};
use real_words::RealWordsMangler;
use sentence::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transform error type encompassing all transform module errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Core operation failed.
    #[error("core operation failed: {0}")]
    Core(#[from] objmangle_core::Error),

    /// The same original name reached final map construction twice.
    #[error("duplicate {kind} '{name}' in mangling input")]
    DuplicateSymbol {
        /// Selector or class.
        kind: SymbolKind,
        /// The repeated original name.
        name: String,
    },
}

/// Transform result type
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for symbol mangling strategies.
pub trait SymbolMangling {
    /// Key used to select the strategy on the command line.
    fn key(&self) -> &'static str;
    /// One-line description shown in strategy listings.
    fn help_description(&self) -> &'static str;
    /// Computes replacement names for every whitelisted symbol it can rename.
    fn mangle_symbols(&self, symbols: &ObfuscationSymbols) -> Result<SymbolManglingMap>;
}

/// Keys and descriptions of every available mangling strategy.
pub const MANGLERS: &[(&str, &str)] = &[(RealWordsMangler::KEY, RealWordsMangler::HELP)];

/// Instantiates the mangling strategy registered under `key`.
pub fn mangler_for_key(key: &str, config: ManglerConfig) -> Option<Box<dyn SymbolMangling>> {
    match key {
        RealWordsMangler::KEY => Some(Box::new(RealWordsMangler::new(config))),
        _ => None,
    }
}

/// Configuration for a mangling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManglerConfig {
    /// Seed for every random choice of the run
    pub seed: Seed,
    /// Compositions tried per request before a name length counts as exhausted
    pub max_attempts: usize,
}

impl ManglerConfig {
    /// Create config with a specific seed
    pub fn with_seed(seed: Seed) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Default for ManglerConfig {
    fn default() -> Self {
        Self {
            seed: Seed::generate(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
