//! Export-trie stage.
//!
//! Renaming symbols inside the export trie is not supported yet: the mangler only
//! refills the root node's label, which is empty in every well-formed trie. The stage
//! still records a trie pair for every architecture slice so the patcher handles export
//! info uniformly.

use crate::mapping::{TriePair, TriePairsPerCpuIdPerPath};
use objmangle_core::{ExportTrie, ExportTriesPerCpuIdPerPath};
use tracing::debug;

/// Transforms a decoded export trie.
pub trait ExportTrieMangling {
    /// Returns a copy of `trie` whose root label bytes are all `fill`.
    fn mangle(&self, trie: &ExportTrie, filling_root_label_with: u8) -> ExportTrie;
}

/// Root-label filling trie mangler.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExportTrieMangler;

impl ExportTrieMangling for ExportTrieMangler {
    fn mangle(&self, trie: &ExportTrie, filling_root_label_with: u8) -> ExportTrie {
        let mut mangled = trie.clone();
        mangled.label.fill(filling_root_label_with);
        mangled
    }
}

/// Runs `mangler` over every trie, keeping the input's binary/architecture keys.
pub fn mangle_export_tries(
    tries: &ExportTriesPerCpuIdPerPath,
    mangler: &dyn ExportTrieMangling,
    root_label_fill: u8,
) -> TriePairsPerCpuIdPerPath {
    tries
        .iter()
        .map(|(path, per_cpu)| {
            let pairs = per_cpu
                .iter()
                .map(|(cpu, trie)| {
                    debug!(
                        "Export trie {} [{}]: {} nodes",
                        path.display(),
                        cpu,
                        trie.node_count()
                    );
                    let pair = TriePair {
                        original: trie.clone(),
                        mangled: mangler.mangle(trie, root_label_fill),
                    };
                    (*cpu, pair)
                })
                .collect();
            (path.clone(), pairs)
        })
        .collect()
}
