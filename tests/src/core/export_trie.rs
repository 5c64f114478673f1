use objmangle_core::{Error, ExportTrie};

/// Trie exporting `_foo` (address 0x10) and `_bar` (address 0x20).
pub const FOO_BAR_TRIE: &str = "00015f00050002666f6f001162617200150200100002002000";

fn foo_bar_bytes() -> Vec<u8> {
    hex::decode(FOO_BAR_TRIE).unwrap()
}

#[test]
fn test_parse_labels_and_ranges() {
    let trie = ExportTrie::parse(&foo_bar_bytes()).unwrap();

    assert!(trie.label.is_empty());
    assert_eq!(trie.label_range, 0..0);
    assert!(!trie.exports_symbol);
    assert_eq!(trie.children.len(), 1);

    let underscore = &trie.children[0];
    assert_eq!(underscore.label, b"_");
    assert_eq!(underscore.label_range, 2..3);
    assert!(!underscore.exports_symbol);

    let foo = &underscore.children[0];
    let bar = &underscore.children[1];
    assert_eq!(foo.label, b"foo");
    assert_eq!(foo.label_range, 7..10);
    assert!(foo.exports_symbol);
    assert_eq!(foo.terminal, vec![0x00, 0x10]);
    assert_eq!(bar.label, b"bar");
    assert_eq!(bar.label_range, 12..15);
    assert_eq!(bar.terminal, vec![0x00, 0x20]);
}

#[test]
fn test_label_ranges_point_into_buffer() {
    let bytes = foo_bar_bytes();
    let trie = ExportTrie::parse(&bytes).unwrap();
    let foo = &trie.children[0].children[0];
    let range = foo.label_range.start as usize..foo.label_range.end as usize;
    assert_eq!(&bytes[range], b"foo");
}

#[test]
fn test_exported_symbols() {
    let trie = ExportTrie::parse(&foo_bar_bytes()).unwrap();
    assert_eq!(trie.exported_symbols(), vec!["_foo", "_bar"]);
    assert_eq!(trie.node_count(), 4);
}

#[test]
fn test_truncated_trie_is_rejected() {
    let bytes = foo_bar_bytes();
    let err = ExportTrie::parse(&bytes[..22]).unwrap_err();
    assert!(matches!(err, Error::InvalidExportTrie { offset: 21 }));
}

#[test]
fn test_unterminated_label_is_rejected() {
    // root with one child whose label never ends
    let err = ExportTrie::parse(&[0x00, 0x01, b'_', b'a']).unwrap_err();
    assert!(matches!(err, Error::InvalidExportTrie { offset: 2 }));
}

/// Builds `levels` interior nodes, each with `fanout` edges all leading to the next
/// node, followed by an empty leaf. Child offsets use a fixed two-byte ULEB128.
fn fan_in_trie(levels: usize, fanout: u8) -> Vec<u8> {
    let node_size = 2 + usize::from(fanout) * 4;
    let mut bytes = Vec::new();
    for level in 0..levels {
        let next = (level + 1) * node_size;
        bytes.extend([0x00, fanout]);
        for edge in 0..fanout {
            bytes.extend([
                b'a' + edge % 26,
                0x00,
                0x80 | (next & 0x7f) as u8,
                (next >> 7) as u8,
            ]);
        }
    }
    bytes.extend([0x00, 0x00]);
    bytes
}

#[test]
fn test_shared_subtrees_are_rejected() {
    let bytes = fan_in_trie(3, 100);
    let err = ExportTrie::parse(&bytes).unwrap_err();
    let node_size = 2 + 100 * 4;
    assert!(matches!(err, Error::InvalidExportTrie { offset } if offset == 3 * node_size));
}

#[test]
fn test_single_edge_chain_still_parses() {
    let trie = ExportTrie::parse(&fan_in_trie(3, 1)).unwrap();
    assert_eq!(trie.node_count(), 4);
}
