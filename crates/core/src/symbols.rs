//! Symbol sets fed into the mangling stages.
//!
//! An upstream scanner classifies every Objective-C selector and class name found in
//! the input binaries as either blacklisted (must keep its name) or whitelisted (safe to
//! rename). This module holds that classification together with the export tries of
//! every architecture slice.

use crate::export_trie::ExportTrie;
use crate::result::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

const CPU_ARCH_ABI64: i32 = 0x0100_0000;
const CPU_TYPE_X86: i32 = 7;
const CPU_TYPE_ARM: i32 = 12;

/// Selector and class names with membership-only semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    /// Objective-C method selectors, e.g. `initWithFrame:`.
    #[serde(default)]
    pub selectors: HashSet<String>,
    /// Objective-C class names.
    #[serde(default)]
    pub classes: HashSet<String>,
}

impl SymbolSet {
    pub fn new<S, C>(selectors: S, classes: C) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a set holding every selector and class of `self` and `other`.
    pub fn union(&self, other: &SymbolSet) -> SymbolSet {
        SymbolSet {
            selectors: self.selectors.union(&other.selectors).cloned().collect(),
            classes: self.classes.union(&other.classes).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty() && self.classes.is_empty()
    }
}

/// Identifies one architecture slice of a (possibly fat) Mach-O binary.
///
/// Serialized as the architecture name when one is known (`x86_64`, `arm64`, ...) and
/// as `type:subtype` otherwise, so it can be used as a JSON object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CpuId {
    pub cpu_type: i32,
    pub cpu_subtype: i32,
}

impl CpuId {
    pub const I386: CpuId = CpuId::new(CPU_TYPE_X86, 3);
    pub const X86_64: CpuId = CpuId::new(CPU_TYPE_X86 | CPU_ARCH_ABI64, 3);
    pub const ARMV7: CpuId = CpuId::new(CPU_TYPE_ARM, 9);
    pub const ARM64: CpuId = CpuId::new(CPU_TYPE_ARM | CPU_ARCH_ABI64, 0);
    pub const ARM64E: CpuId = CpuId::new(CPU_TYPE_ARM | CPU_ARCH_ABI64, 2);

    const NAMED: [(&'static str, CpuId); 5] = [
        ("i386", CpuId::I386),
        ("x86_64", CpuId::X86_64),
        ("armv7", CpuId::ARMV7),
        ("arm64", CpuId::ARM64),
        ("arm64e", CpuId::ARM64E),
    ];

    pub const fn new(cpu_type: i32, cpu_subtype: i32) -> Self {
        Self {
            cpu_type,
            cpu_subtype,
        }
    }

    /// Architecture name, if this is one of the well-known slices.
    pub fn name(&self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, cpu)| cpu == self)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for CpuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}:{}", self.cpu_type, self.cpu_subtype),
        }
    }
}

impl FromStr for CpuId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some((_, cpu)) = Self::NAMED.iter().find(|(name, _)| *name == s) {
            return Ok(*cpu);
        }
        let (cpu_type, cpu_subtype) = s
            .split_once(':')
            .ok_or_else(|| Error::UnknownCpu(s.to_string()))?;
        match (cpu_type.trim().parse(), cpu_subtype.trim().parse()) {
            (Ok(cpu_type), Ok(cpu_subtype)) => Ok(CpuId::new(cpu_type, cpu_subtype)),
            _ => Err(Error::UnknownCpu(s.to_string())),
        }
    }
}

impl TryFrom<String> for CpuId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CpuId> for String {
    fn from(cpu: CpuId) -> Self {
        cpu.to_string()
    }
}

/// Export tries of every architecture slice, keyed by binary path.
pub type ExportTriesPerCpuIdPerPath = BTreeMap<PathBuf, BTreeMap<CpuId, ExportTrie>>;

/// Immutable snapshot of everything the mangling stages need to know about the input.
///
/// Blacklist and whitelist may overlap; the mangling stages treat their union as the
/// set of names a replacement must never collide with.
#[derive(Debug, Clone, Default)]
pub struct ObfuscationSymbols {
    pub blacklist: SymbolSet,
    pub whitelist: SymbolSet,
    pub export_tries: ExportTriesPerCpuIdPerPath,
}

/// On-disk shape of [`ObfuscationSymbols`]: tries are hex-encoded export-info bytes.
#[derive(Debug, Deserialize)]
struct SymbolsDocument {
    #[serde(default)]
    blacklist: SymbolSet,
    #[serde(default)]
    whitelist: SymbolSet,
    #[serde(default)]
    export_tries: BTreeMap<PathBuf, BTreeMap<CpuId, String>>,
}

impl ObfuscationSymbols {
    pub fn new(blacklist: SymbolSet, whitelist: SymbolSet) -> Self {
        Self {
            blacklist,
            whitelist,
            export_tries: BTreeMap::new(),
        }
    }

    /// Union of blacklist and whitelist: names no replacement may take.
    pub fn forbidden(&self) -> SymbolSet {
        self.blacklist.union(&self.whitelist)
    }

    /// Parses a symbols JSON document and decodes every embedded export trie.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: SymbolsDocument = serde_json::from_str(json)?;

        let mut export_tries = ExportTriesPerCpuIdPerPath::new();
        for (path, per_cpu) in document.export_tries {
            let mut tries = BTreeMap::new();
            for (cpu, encoded) in per_cpu {
                let bytes = hex::decode(encoded.trim().trim_start_matches("0x"))?;
                let trie = ExportTrie::parse(&bytes)?;
                debug!(
                    "Decoded export trie for {} [{}]: {} exported symbols",
                    path.display(),
                    cpu,
                    trie.exported_symbols().len()
                );
                tries.insert(cpu, trie);
            }
            export_tries.insert(path, tries);
        }

        Ok(Self {
            blacklist: document.blacklist,
            whitelist: document.whitelist,
            export_tries,
        })
    }

    /// Reads and parses a symbols JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}
