//! Mapping artifact handed to the binary patcher.
//!
//! The patcher rewrites selector and class-name strings in place using
//! [`SymbolManglingMap::selectors`] and [`SymbolManglingMap::class_names`], and
//! rewrites export info using [`SymbolManglingMap::trie_transforms`]. A whitelisted
//! symbol without an entry was skipped and keeps its original name.

use crate::{Error, Result};
use objmangle_core::{CpuId, ExportTrie};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Category of a mangled symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Selector,
    Class,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Selector => f.write_str("selector"),
            SymbolKind::Class => f.write_str("class"),
        }
    }
}

/// Export trie of one architecture slice before and after mangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriePair {
    pub original: ExportTrie,
    pub mangled: ExportTrie,
}

/// Trie pairs of every architecture slice, keyed by binary path.
pub type TriePairsPerCpuIdPerPath = BTreeMap<PathBuf, BTreeMap<CpuId, TriePair>>;

/// Complete output of a mangling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolManglingMap {
    /// Original selector → replacement of identical length
    pub selectors: BTreeMap<String, String>,
    /// Original class name → replacement of identical length
    pub class_names: BTreeMap<String, String>,
    /// Binary → architecture → (original trie, mangled trie)
    pub trie_transforms: TriePairsPerCpuIdPerPath,
}

impl SymbolManglingMap {
    pub fn mangled_selector(&self, selector: &str) -> Option<&str> {
        self.selectors.get(selector).map(String::as_str)
    }

    pub fn mangled_class(&self, class_name: &str) -> Option<&str> {
        self.class_names.get(class_name).map(String::as_str)
    }

    /// Exports the mapping as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Exports the mapping as compact JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Insert-or-fail builder for original → replacement maps.
///
/// Two pairs sharing an original name mean the upstream classification handed the
/// same symbol in twice; the builder refuses to pick one and fails instead.
#[derive(Debug)]
pub struct PairMapBuilder {
    kind: SymbolKind,
    pairs: BTreeMap<String, String>,
}

impl PairMapBuilder {
    pub fn new(kind: SymbolKind) -> Self {
        Self {
            kind,
            pairs: BTreeMap::new(),
        }
    }

    /// Records `original → mangled`, failing if `original` is already present.
    pub fn insert(&mut self, original: String, mangled: String) -> Result<()> {
        match self.pairs.entry(original) {
            Entry::Vacant(slot) => {
                slot.insert(mangled);
                Ok(())
            }
            Entry::Occupied(slot) => Err(Error::DuplicateSymbol {
                kind: self.kind,
                name: slot.key().clone(),
            }),
        }
    }

    /// Collects `pairs` into a map, failing on the first duplicate original name.
    pub fn from_pairs<I>(kind: SymbolKind, pairs: I) -> Result<BTreeMap<String, String>>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut builder = Self::new(kind);
        for (original, mangled) in pairs {
            builder.insert(original, mangled)?;
        }
        Ok(builder.build())
    }

    pub fn build(self) -> BTreeMap<String, String> {
        self.pairs
    }
}
