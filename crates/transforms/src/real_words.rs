//! Real-words symbol mangler.
//!
//! Replaces whitelisted selectors and class names with camelCase English sentences of
//! the same length. Runs in three strictly ordered stages sharing one name supply:
//!
//! 1. selectors: plain selectors first, then setters derived from their getters
//! 2. class names, capitalized
//! 3. export tries, passed through [`ExportTrieMangling`]

use crate::allocator::{allocate, allocate_where};
use crate::mapping::{PairMapBuilder, SymbolKind, SymbolManglingMap};
use crate::sentence::{EnglishSentenceGenerator, SentenceGenerator};
use crate::trie::{ExportTrieMangler, ExportTrieMangling, mangle_export_tries};
use crate::{ManglerConfig, Result, SymbolMangling};
use objmangle_core::accessor::{
    capitalize_first, getter_from_setter, is_setter_name, setter_from_getter,
};
use objmangle_core::ObfuscationSymbols;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, info};

/// `set` plus the trailing `:` a setter adds around its property name.
const SETTER_EXTRA_CHARS: usize = 4;

/// Mangler replacing Objective-C symbols with random English words.
#[derive(Debug, Clone)]
pub struct RealWordsMangler {
    config: ManglerConfig,
    trie_mangler: ExportTrieMangler,
}

impl RealWordsMangler {
    pub const KEY: &'static str = "realWords";
    pub const HELP: &'static str =
        "replace objc symbols with random words (dyld info obfuscation not supported yet)";

    pub fn new(config: ManglerConfig) -> Self {
        Self {
            config,
            trie_mangler: ExportTrieMangler,
        }
    }

    pub fn config(&self) -> &ManglerConfig {
        &self.config
    }

    /// Mangles `symbols` drawing every replacement from `supply`.
    pub fn mangle_symbols_with(
        &self,
        symbols: &ObfuscationSymbols,
        supply: &mut dyn SentenceGenerator,
    ) -> Result<SymbolManglingMap> {
        let forbidden = symbols.forbidden();

        let selectors =
            mangle_selectors(&symbols.whitelist.selectors, &forbidden.selectors, supply)?;
        info!(
            "{:>10} {}/{} mangled",
            "selectors",
            selectors.len(),
            symbols.whitelist.selectors.len()
        );

        let class_names = mangle_classes(&symbols.whitelist.classes, &forbidden.classes, supply)?;
        info!(
            "{:>10} {}/{} mangled",
            "classes",
            class_names.len(),
            symbols.whitelist.classes.len()
        );

        let trie_transforms = mangle_export_tries(&symbols.export_tries, &self.trie_mangler, 0);
        info!("{:>10} {} binaries", "tries", trie_transforms.len());

        Ok(SymbolManglingMap {
            selectors,
            class_names,
            trie_transforms,
        })
    }
}

impl SymbolMangling for RealWordsMangler {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn help_description(&self) -> &'static str {
        Self::HELP
    }

    fn mangle_symbols(&self, symbols: &ObfuscationSymbols) -> Result<SymbolManglingMap> {
        let mut generator = EnglishSentenceGenerator::with_max_attempts(
            self.config.seed.create_deterministic_rng(),
            self.config.max_attempts,
        );
        self.mangle_symbols_with(symbols, &mut generator)
    }
}

/// Mangles whitelisted selectors, keeping getter/setter pairs symmetric.
///
/// Plain selectors get fresh names first. A setter is then renamed only through its
/// getter: `setFoo:` becomes `setBar:` exactly when `foo` became `bar`, and is left
/// alone otherwise. A getter whose setter is whitelisted only accepts names whose
/// derived setter is free and keeps the setter's length; that setter name is reserved
/// together with the getter.
pub fn mangle_selectors(
    whitelist: &HashSet<String>,
    forbidden: &HashSet<String>,
    supply: &mut dyn SentenceGenerator,
) -> Result<BTreeMap<String, String>> {
    let (mut setters, mut plain): (Vec<&String>, Vec<&String>) =
        whitelist.iter().partition(|s| is_setter_name(s));
    setters.sort();
    plain.sort();

    let paired_getters: HashSet<String> = setters
        .iter()
        .filter_map(|setter| getter_from_setter(setter))
        .collect();

    let mut taken = forbidden.clone();
    let mut mangled_plain: HashMap<&str, String> = HashMap::with_capacity(plain.len());
    for selector in plain {
        let has_setter = paired_getters.contains(selector.as_str());
        let length = selector.chars().count();
        let mangled = allocate_where(length, supply, str::to_string, |candidate| {
            if taken.contains(candidate) {
                return false;
            }
            if !has_setter {
                return true;
            }
            let setter = setter_from_getter(candidate);
            setter.chars().count() == length + SETTER_EXTRA_CHARS && !taken.contains(&setter)
        });
        match mangled {
            Some(mangled) => {
                if has_setter {
                    taken.insert(setter_from_getter(&mangled));
                }
                taken.insert(mangled.clone());
                mangled_plain.insert(selector, mangled);
            }
            None => debug!("Skipping selector '{}': name supply exhausted", selector),
        }
    }

    let mangled_setters: Vec<(String, String)> = setters
        .into_iter()
        .filter_map(|setter| {
            let getter = getter_from_setter(setter)?;
            match mangled_plain.get(getter.as_str()) {
                Some(mangled_getter) => {
                    Some((setter.clone(), setter_from_getter(mangled_getter)))
                }
                None => {
                    debug!("Skipping setter '{}': getter '{}' not mangled", setter, getter);
                    None
                }
            }
        })
        .collect();

    PairMapBuilder::from_pairs(
        SymbolKind::Selector,
        mangled_plain
            .into_iter()
            .map(|(original, mangled)| (original.to_string(), mangled))
            .chain(mangled_setters),
    )
}

/// Mangles whitelisted class names; replacements start with an uppercase letter.
pub fn mangle_classes(
    whitelist: &HashSet<String>,
    forbidden: &HashSet<String>,
    supply: &mut dyn SentenceGenerator,
) -> Result<BTreeMap<String, String>> {
    let mut classes: Vec<&String> = whitelist.iter().collect();
    classes.sort();

    let mut taken = forbidden.clone();
    let mut builder = PairMapBuilder::new(SymbolKind::Class);
    for class_name in classes {
        match allocate(class_name.chars().count(), &taken, supply, capitalize_first) {
            Some(mangled) => {
                taken.insert(mangled.clone());
                builder.insert(class_name.clone(), mangled)?;
            }
            None => debug!("Skipping class '{}': name supply exhausted", class_name),
        }
    }
    Ok(builder.build())
}
