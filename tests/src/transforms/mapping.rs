use objmangle_core::{CpuId, ExportTrie, ObfuscationSymbols, Seed, SymbolSet};
use objmangle_transform::mapping::{PairMapBuilder, SymbolKind, SymbolManglingMap};
use objmangle_transform::real_words::RealWordsMangler;
use objmangle_transform::{Error, ManglerConfig, SymbolMangling};
use std::path::PathBuf;

#[test]
fn test_duplicate_selector_is_fatal() {
    let pairs = vec![
        ("run".to_string(), "fly".to_string()),
        ("run".to_string(), "sun".to_string()),
    ];
    let err = PairMapBuilder::from_pairs(SymbolKind::Selector, pairs).unwrap_err();
    assert!(matches!(
        &err,
        Error::DuplicateSymbol { kind: SymbolKind::Selector, name } if name == "run"
    ));
    assert_eq!(err.to_string(), "duplicate selector 'run' in mangling input");
}

#[test]
fn test_builder_keeps_first_insert_on_error() {
    let mut builder = PairMapBuilder::new(SymbolKind::Class);
    builder.insert("View".into(), "Lake".into()).unwrap();
    assert!(builder.insert("View".into(), "Tree".into()).is_err());
    assert_eq!(builder.build()["View"], "Lake");
}

#[test]
fn test_json_shape() {
    let mut symbols = ObfuscationSymbols::new(
        SymbolSet::default(),
        SymbolSet::new(["run"], ["MyView"]),
    );
    symbols
        .export_tries
        .entry(PathBuf::from("/bin/demo"))
        .or_default()
        .insert(CpuId::ARM64, ExportTrie::default());

    let seed =
        Seed::from_hex("0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef")
            .unwrap();
    let map = RealWordsMangler::new(ManglerConfig::with_seed(seed))
        .mangle_symbols(&symbols)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&map.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["selectors"]["run"].as_str().map(str::len), Some(3));
    assert_eq!(json["class_names"]["MyView"].as_str().map(str::len), Some(6));
    assert!(json["trie_transforms"]["/bin/demo"]["arm64"]["original"].is_object());
    assert!(json["trie_transforms"]["/bin/demo"]["arm64"]["mangled"].is_object());

    let back: SymbolManglingMap = serde_json::from_str(&map.to_json().unwrap()).unwrap();
    assert_eq!(back, map);
}
