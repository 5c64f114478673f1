//! Core data model for objmangle.
//!
//! Holds the symbol classification produced by the binary scanner, the Objective-C
//! accessor naming rules, decoded export tries and the seed that drives every random
//! choice of a mangling run.

pub mod accessor;
pub mod export_trie;
pub mod result;
pub mod seed;
pub mod symbols;

pub use export_trie::ExportTrie;
pub use result::{Error, Result};
pub use seed::Seed;
pub use symbols::{CpuId, ExportTriesPerCpuIdPerPath, ObfuscationSymbols, SymbolSet};
