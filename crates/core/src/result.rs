//! Core results and error types

use thiserror::Error;

/// Core error type encompassing all core module errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read file at the specified path.
    #[error("could not read file '{path}': {source}")]
    FileRead {
        /// The path to the file that could not be read.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Symbols document is not valid JSON or does not match the expected shape.
    #[error("invalid symbols document: {0}")]
    InvalidSymbols(#[from] serde_json::Error),

    /// The export trie walks outside its buffer or loops back on itself.
    #[error("invalid export trie at offset {offset}")]
    InvalidExportTrie {
        /// Byte offset of the offending node or edge.
        offset: usize,
    },

    /// Invalid hexadecimal in seed.
    #[error("invalid hexadecimal in seed")]
    InvalidSeedHex,

    /// Invalid seed length.
    #[error("invalid seed length: expected 64 hex chars, got {0}")]
    InvalidSeedLength(usize),

    /// A ULEB128 value is truncated or overflows 64 bits.
    #[error("invalid uleb128 at offset {offset}")]
    InvalidUleb128 {
        /// Byte offset where decoding started.
        offset: usize,
    },

    /// Export trie bytes were not valid hex.
    #[error("export trie hex decode failed: {0}")]
    TrieHexDecode(#[from] hex::FromHexError),

    /// CPU identifier is neither a known architecture name nor a `type:subtype` pair.
    #[error("unknown cpu identifier: {0}")]
    UnknownCpu(String),
}

/// Core result type
pub type Result<T> = std::result::Result<T, Error>;
