use std::fmt;
use std::ops::Index;

use crate::error::{Error, Result};

use super::frequency::FrequencyCounter;
use super::tree::{HuffmanTree, Node};

/// Longest code a `Code` can hold
pub const MAX_CODE_BITS: u8 = 64;

/// A Huffman code: the low `len` bits of `bits`, most significant first
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

impl Code {
    /// Placeholder for bytes that do not occur in the input
    pub const UNASSIGNED: Code = Code { bits: 0, len: 0 };

    pub fn is_assigned(&self) -> bool {
        self.len > 0
    }

    /// Whether `self` is a prefix of (or equal to) `other`
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shift in (0..self.len).rev() {
            f.write_str(if (self.bits >> shift) & 1 == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Per-byte code table derived from a Huffman tree
#[derive(Clone, Debug)]
pub struct CodeTable {
    codes: [Code; 256],
}

impl CodeTable {
    /// Walk the tree, appending 0 for each left edge and 1 for each right edge.
    ///
    /// A tree that is a single leaf assigns that byte the one-bit code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        let mut codes = [Code::UNASSIGNED; 256];

        match tree.root() {
            Node::Leaf { byte, .. } => codes[*byte as usize] = Code { bits: 0, len: 1 },
            root => assign(root, Code::UNASSIGNED, &mut codes)?,
        }

        Ok(Self { codes })
    }

    /// Code for `byte`, if it occurred in the input
    pub fn get(&self, byte: u8) -> Option<Code> {
        let code = self.codes[byte as usize];
        code.is_assigned().then_some(code)
    }

    /// `(byte, code)` pairs for assigned bytes, in ascending byte order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes.iter().enumerate().filter(|(_, c)| c.is_assigned()).map(|(b, &c)| (b as u8, c))
    }

    /// Length in bits of the encoded stream for the counted input
    pub fn encoded_bits(&self, freq: &FrequencyCounter) -> u64 {
        freq.iter().map(|(byte, count)| count * self.codes[byte as usize].len as u64).sum()
    }

    /// Check that no assigned code is a prefix of another
    pub fn is_prefix_free(&self) -> bool {
        let assigned: Vec<Code> = self.iter().map(|(_, c)| c).collect();
        assigned.iter().enumerate().all(|(i, a)| {
            assigned.iter().enumerate().all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }
}

impl Index<u8> for CodeTable {
    type Output = Code;

    fn index(&self, byte: u8) -> &Code {
        &self.codes[byte as usize]
    }
}

fn assign(node: &Node, prefix: Code, codes: &mut [Code; 256]) -> Result<()> {
    match node {
        Node::Leaf { byte, .. } => {
            codes[*byte as usize] = prefix;
            Ok(())
        }
        Node::Internal { left, right, .. } => {
            if prefix.len == MAX_CODE_BITS {
                return Err(Error::CodeTooLong(MAX_CODE_BITS));
            }
            let len = prefix.len + 1;
            assign(left, Code { bits: prefix.bits << 1, len }, codes)?;
            assign(right, Code { bits: (prefix.bits << 1) | 1, len }, codes)
        }
    }
}
