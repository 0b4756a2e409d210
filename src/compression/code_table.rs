//! Code table generation from a Huffman tree.

use crate::compression::frequency::FrequencyTable;
use crate::compression::tree::HuffmanNode;

/// A variable-length code: the low `len` bits of `bits`, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    /// Bit pattern, right-aligned
    pub bits: u64,
    /// Number of significant bits (1-64)
    pub len: u8,
}

impl Code {
    /// Check whether `self` is a bit-prefix of `other`
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }
}

/// Mapping from byte value to its Huffman code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; 256],
}

impl CodeTable {
    /// Get the code for a symbol
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Number of symbols with a code
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    /// Whether the table has no codes
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Symbols with their codes, in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|code| (symbol as u8, code)))
    }

    /// Total payload length in bits for input with the given frequencies.
    ///
    /// Symbols without a code contribute nothing.
    pub fn encoded_bits(&self, freq_table: &FrequencyTable) -> u64 {
        freq_table
            .iter()
            .filter_map(|(symbol, freq)| self.get(symbol).map(|code| freq * code.len as u64))
            .sum()
    }
}

/// Build the code table by walking the tree from the root.
///
/// Descending left appends a 0 bit, right appends a 1 bit. If the tree is a
/// single leaf (one unique symbol), that symbol is assigned the 1-bit code `0`
/// since a zero-length code cannot be packed or walked.
pub fn build_code_table(root: &HuffmanNode) -> CodeTable {
    let mut table = CodeTable { codes: [None; 256] };
    match root {
        HuffmanNode::Leaf { symbol, .. } => {
            table.codes[*symbol as usize] = Some(Code { bits: 0, len: 1 });
        }
        HuffmanNode::Internal { .. } => build_code_table_helper(root, 0, 0, &mut table),
    }
    table
}

// Depth stays far below 64: header counts are u32, so the input is bounded
// well under the Fibonacci total a 64-deep tree would need.
fn build_code_table_helper(node: &HuffmanNode, bits: u64, len: u8, table: &mut CodeTable) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            table.codes[*symbol as usize] = Some(Code { bits, len });
        }
        HuffmanNode::Internal { left, right, .. } => {
            build_code_table_helper(left, bits << 1, len + 1, table);
            build_code_table_helper(right, (bits << 1) | 1, len + 1, table);
        }
    }
}
