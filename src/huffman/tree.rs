use crate::bits::BitReader;
use crate::error::{Error, Result};

use super::frequency::FrequencyCounter;
use super::queue::MinQueue;

/// Deepest level a deserialized tree may reach (256 leaves give height <= 255)
pub const MAX_TREE_DEPTH: usize = 256;

/// Serialized marker for an absent child
const MARKER_EMPTY: u8 = 0;
/// Serialized marker for a leaf, followed by its byte value
const MARKER_LEAF: u8 = 1;
/// Serialized marker for an internal node, followed by left then right subtree
const MARKER_INTERNAL: u8 = 2;

/// A node of a Huffman tree
///
/// Internal nodes always own exactly two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf { byte: u8, weight: u64 },
    Internal { weight: u64, left: Box<Node>, right: Box<Node> },
}

impl Node {
    pub fn leaf(byte: u8, weight: u64) -> Self {
        Node::Leaf { byte, weight }
    }

    /// Join two subtrees under a new parent weighing their sum
    pub fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Huffman prefix tree over byte values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    /// Build an optimal tree from byte frequencies.
    ///
    /// Returns `None` when no byte was counted. A single distinct byte yields a
    /// one-leaf tree. Otherwise the two lightest nodes are repeatedly merged,
    /// the first extracted becoming the left child.
    pub fn from_frequencies(freq: &FrequencyCounter) -> Option<Self> {
        let mut queue = MinQueue::with_capacity(freq.distinct());
        for (byte, count) in freq.iter() {
            queue.push(count, Node::leaf(byte, count));
        }

        while queue.len() > 1 {
            let (_, left) = queue.pop_min()?;
            let (_, right) = queue.pop_min()?;
            let parent = Node::merge(left, right);
            queue.push(parent.weight(), parent);
        }

        queue.pop_min().map(|(_, root)| Self { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Whether the whole tree is a single leaf (one distinct input byte)
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn leaf_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Internal { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }

    /// Leaf bytes in left-to-right order
    pub fn leaves(&self) -> Vec<u8> {
        fn collect(node: &Node, out: &mut Vec<u8>) {
            match node {
                Node::Leaf { byte, .. } => out.push(*byte),
                Node::Internal { left, right, .. } => {
                    collect(left, out);
                    collect(right, out);
                }
            }
        }
        let mut out = Vec::new();
        collect(&self.root, &mut out);
        out
    }

    /// Serialize in preorder: `1 byte` for a leaf, `2 left right` for an internal node
    pub fn serialize(&self) -> Vec<u8> {
        fn write(node: &Node, out: &mut Vec<u8>) {
            match node {
                Node::Leaf { byte, .. } => {
                    out.push(MARKER_LEAF);
                    out.push(*byte);
                }
                Node::Internal { left, right, .. } => {
                    out.push(MARKER_INTERNAL);
                    write(left, out);
                    write(right, out);
                }
            }
        }
        let mut out = Vec::with_capacity(self.leaf_count() * 3);
        write(&self.root, &mut out);
        out
    }

    /// Rebuild a tree from its preorder serialization.
    ///
    /// Every byte of `data` must belong to the tree. Weights are not stored,
    /// so deserialized nodes carry weight 0.
    pub fn deserialize(data: &[u8]) -> Result<Self> {
        let mut reader = BitReader::new(data);
        let root = read_node(&mut reader, 0)?;

        let trailing = reader.remaining_bytes().len();
        if trailing > 0 {
            return Err(Error::TrailingTreeBytes(trailing));
        }
        Ok(Self { root })
    }
}

fn read_node(reader: &mut BitReader<'_>, depth: usize) -> Result<Node> {
    if depth >= MAX_TREE_DEPTH {
        return Err(Error::TreeTooDeep(MAX_TREE_DEPTH));
    }

    match reader.read_u8()? {
        MARKER_LEAF => Ok(Node::leaf(reader.read_u8()?, 0)),
        MARKER_INTERNAL => {
            let left = read_node(reader, depth + 1)?;
            let right = read_node(reader, depth + 1)?;
            Ok(Node::Internal { weight: 0, left: Box::new(left), right: Box::new(right) })
        }
        MARKER_EMPTY => Err(Error::EmptyTreeSlot),
        other => Err(Error::InvalidTreeMarker(other)),
    }
}
