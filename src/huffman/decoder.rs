use crate::bits::BitReader;
use crate::error::{Error, Result};

use super::tree::{HuffmanTree, Node};

/// Decompress a Huffman container produced by [`super::encoder::encode`].
///
/// `max_len` bounds the declared original length.
pub fn decode(input: &[u8], max_len: usize) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if input.len() < super::MIN_STREAM_LEN {
        return Err(Error::HeaderTooShort {
            format: "Huffman",
            needed: super::MIN_STREAM_LEN,
            found: input.len(),
        });
    }

    let mut reader = BitReader::new(input);
    let original_len = reader.read_u64_le()?;
    let tree_len = reader.read_u32_le()? as usize;
    let tree_bytes = reader.read_bytes(tree_len)?;
    let padding = reader.read_u8()?;

    if original_len == 0 || original_len > max_len as u64 {
        return Err(Error::InvalidLength { length: original_len, max: max_len });
    }
    let original_len = original_len as usize;

    let tree = HuffmanTree::deserialize(tree_bytes)?;
    let root = tree.root();

    // One distinct byte: the bit stream carries nothing the length does not
    if let Node::Leaf { byte, .. } = root {
        return Ok(vec![*byte; original_len]);
    }

    reader.set_padding(padding)?;

    // Every code is at least one bit long
    let mut output = Vec::with_capacity(original_len.min(reader.bits_remaining()));
    let mut node = root;
    while output.len() < original_len {
        let Some(bit) = reader.read_bit() else {
            break;
        };
        if let Node::Internal { left, right, .. } = node {
            node = if bit { &**right } else { &**left };
        }
        if let Node::Leaf { byte, .. } = node {
            output.push(*byte);
            node = root;
        }
    }

    if output.len() != original_len {
        return Err(Error::SizeMismatch {
            expected: original_len as u64,
            found: output.len() as u64,
        });
    }

    log::trace!("huffman: decoded {} bytes with {} leaves", original_len, tree.leaf_count());
    Ok(output)
}
