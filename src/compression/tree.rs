//! Deterministic Huffman tree construction.
//!
//! Identical frequency tables always produce identical trees. Leaves are
//! ordered by ascending symbol, then stably sorted by count; each merged
//! parent is inserted after every existing node with the same count. Any
//! conforming decoder rebuilding the tree from the container header therefore
//! gets exactly the tree the encoder used.

use crate::compression::frequency::FrequencyTable;
use log::trace;

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node contains a byte value and its frequency.
    Leaf { symbol: u8, freq: u64 },
    /// An internal node with left and right children and combined frequency.
    Internal {
        freq: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    /// Returns true if the node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Build the Huffman tree for a frequency table.
/// Returns `None` if the frequency table is empty.
pub fn build_huffman_tree(freq_table: &FrequencyTable) -> Option<Box<HuffmanNode>> {
    let leaves = freq_table
        .iter()
        .map(|(symbol, freq)| Box::new(HuffmanNode::Leaf { symbol, freq }))
        .collect();
    build_from_leaves(leaves)
}

/// Build a Huffman tree from leaves given in discovery order.
///
/// Leaves are stably sorted by frequency, so leaves with equal counts keep
/// their relative order. Returns `None` for an empty list; a single leaf is
/// returned as the root unchanged.
pub fn build_from_leaves(mut nodes: Vec<Box<HuffmanNode>>) -> Option<Box<HuffmanNode>> {
    // `sort_by_key` is stable
    nodes.sort_by_key(|node| node.freq());

    while nodes.len() > 1 {
        let left = nodes.remove(0);
        let right = nodes.remove(0);
        let combined_freq = left.freq() + right.freq();
        trace!(
            "merging nodes with freq {} and {} into {}",
            left.freq(),
            right.freq(),
            combined_freq
        );

        // Upper bound: after all nodes with an equal count.
        let idx = nodes.partition_point(|node| node.freq() <= combined_freq);
        nodes.insert(
            idx,
            Box::new(HuffmanNode::Internal {
                freq: combined_freq,
                left,
                right,
            }),
        );
    }

    nodes.pop()
}
