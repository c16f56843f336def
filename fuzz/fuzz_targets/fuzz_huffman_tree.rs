#![no_main]

use libfuzzer_sys::fuzz_target;
use tricodec::huffman::{CodeTable, HuffmanTree};

fuzz_target!(|data: &[u8]| {
    if let Ok(tree) = HuffmanTree::deserialize(data) {
        // Anything that parses must serialize back to the same bytes
        assert_eq!(tree.serialize(), data);
        if let Ok(table) = CodeTable::from_tree(&tree) {
            assert!(table.is_prefix_free());
        }
    }
});
