//! Export trie values.
//!
//! The export trie (`LC_DYLD_INFO` export info / `LC_DYLD_EXPORTS_TRIE`) is a prefix
//! tree over every symbol a Mach-O image exports. Each node is encoded as:
//!
//! ```text
//! uleb128 terminal_size
//! u8[terminal_size] terminal payload (flags, address, ...)
//! u8 child_count
//! repeat child_count { cstring edge label, uleb128 child node offset }
//! ```
//!
//! This module decodes that layout into an immutable [`ExportTrie`] tree that remembers
//! where each label lives in the encoded bytes, so a patcher can rewrite labels in place.

use crate::result::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;

/// Nodes deeper than this are treated as malformed input.
const MAX_TRIE_DEPTH: usize = 4096;

/// One node of a decoded export trie together with its subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTrie {
    /// Whether the path from the root to this node spells an exported symbol.
    pub exports_symbol: bool,
    /// Edge label leading into this node. Empty for the root.
    pub label: Vec<u8>,
    /// Byte range of `label` inside the encoded trie.
    pub label_range: Range<u64>,
    /// Raw terminal payload (export flags, address, re-export or resolver info).
    pub terminal: Vec<u8>,
    pub children: Vec<ExportTrie>,
}

impl ExportTrie {
    /// Decodes an encoded export trie. Empty input yields an empty root.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Ok(Self::default());
        }
        let mut visited = HashSet::new();
        parse_node(data, 0, Vec::new(), 0..0, 0, &mut visited)
    }

    /// Every exported symbol name reachable from this node, in trie order.
    pub fn exported_symbols(&self) -> Vec<String> {
        let mut symbols = Vec::new();
        self.collect_symbols(&mut Vec::new(), &mut symbols);
        symbols
    }

    fn collect_symbols(&self, prefix: &mut Vec<u8>, out: &mut Vec<String>) {
        let mark = prefix.len();
        prefix.extend_from_slice(&self.label);
        if self.exports_symbol {
            out.push(String::from_utf8_lossy(prefix).into_owned());
        }
        for child in &self.children {
            child.collect_symbols(prefix, out);
        }
        prefix.truncate(mark);
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ExportTrie::node_count).sum::<usize>()
    }
}

/// Every node offset may be reached through exactly one edge; a second visit means a
/// cycle or a shared subtree, both of which are rejected.
fn parse_node(
    data: &[u8],
    offset: usize,
    label: Vec<u8>,
    label_range: Range<u64>,
    depth: usize,
    visited: &mut HashSet<usize>,
) -> Result<ExportTrie> {
    if offset >= data.len() || depth >= MAX_TRIE_DEPTH || !visited.insert(offset) {
        return Err(Error::InvalidExportTrie { offset });
    }

    let (terminal_size, read) = read_uleb128(data, offset)?;
    let mut cursor = offset + read;
    let terminal_end = usize::try_from(terminal_size)
        .ok()
        .and_then(|size| cursor.checked_add(size))
        .filter(|&end| end <= data.len())
        .ok_or(Error::InvalidExportTrie { offset })?;
    let terminal = data[cursor..terminal_end].to_vec();
    cursor = terminal_end;

    let mut children = Vec::new();
    // A trailing leaf may omit its child count.
    if let Some(&child_count) = data.get(cursor) {
        cursor += 1;
        for _ in 0..child_count {
            let label_start = cursor;
            let label_len = data[label_start..]
                .iter()
                .position(|&b| b == 0)
                .ok_or(Error::InvalidExportTrie { offset: label_start })?;
            let label_end = label_start + label_len;
            cursor = label_end + 1;

            let (child_offset, read) = read_uleb128(data, cursor)?;
            cursor += read;
            let child_offset = usize::try_from(child_offset)
                .map_err(|_| Error::InvalidExportTrie { offset: cursor })?;

            children.push(parse_node(
                data,
                child_offset,
                data[label_start..label_end].to_vec(),
                label_start as u64..label_end as u64,
                depth + 1,
                visited,
            )?);
        }
    }

    Ok(ExportTrie {
        exports_symbol: terminal_size > 0,
        label,
        label_range,
        terminal,
        children,
    })
}

/// Reads an unsigned LEB128 value starting at `offset`.
///
/// Returns the decoded value and the number of bytes consumed.
pub fn read_uleb128(data: &[u8], offset: usize) -> Result<(u64, usize)> {
    let mut value = 0u64;
    let mut shift = 0u32;
    for (i, &byte) in data.get(offset..).unwrap_or_default().iter().enumerate() {
        let bits = u64::from(byte & 0x7f);
        if shift >= 64 || (shift == 63 && bits > 1) {
            return Err(Error::InvalidUleb128 { offset });
        }
        value |= bits << shift;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
        shift += 7;
    }
    Err(Error::InvalidUleb128 { offset })
}
