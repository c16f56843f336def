use crate::bits::BitWriter;
use crate::error::Result;

use super::codes::CodeTable;
use super::frequency::FrequencyCounter;
use super::tree::HuffmanTree;

/// Compress `input` into the Huffman container format:
///
/// ```text
/// u64 LE original length | u32 LE tree length | tree | u8 padding | packed code bits
/// ```
pub fn encode(input: &[u8]) -> Result<Vec<u8>> {
    let freq = FrequencyCounter::from_bytes(input);
    let Some(tree) = HuffmanTree::from_frequencies(&freq) else {
        return Ok(Vec::new());
    };
    let codes = CodeTable::from_tree(&tree)?;
    let tree_bytes = tree.serialize();

    let bit_count = codes.encoded_bits(&freq);
    let mut writer = BitWriter::with_capacity((bit_count / 8) as usize + 1);
    for &byte in input {
        let code = codes[byte];
        writer.write_bits(code.bits, code.len);
    }
    let padding = writer.padding_bits();
    let packed = writer.finish();

    log::debug!(
        "huffman: {} bytes, {} symbols, {} tree bytes, {} code bits",
        input.len(),
        tree.leaf_count(),
        tree_bytes.len(),
        bit_count
    );

    let mut output = Vec::with_capacity(super::HEADER_LEN + tree_bytes.len() + 1 + packed.len());
    output.extend_from_slice(&(input.len() as u64).to_le_bytes());
    output.extend_from_slice(&(tree_bytes.len() as u32).to_le_bytes());
    output.extend_from_slice(&tree_bytes);
    output.push(padding);
    output.extend_from_slice(&packed);
    Ok(output)
}
