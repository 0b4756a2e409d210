//! Bit packing of code sequences and tree-walking decode of packed bits.
//!
//! Codes are written most-significant-bit first and may straddle byte
//! boundaries. The final byte is filled with zero bits; their count travels in
//! the container so the walker can discard them.

use crate::compression::code_table::Code;
use crate::compression::tree::HuffmanNode;
use crate::compression::Result;
use crate::error::Error;
use bitvec::prelude::*;

/// Pack a sequence of codes into bytes.
///
/// Returns the packed bytes and the number of zero padding bits (0-7)
/// appended to the last byte.
pub fn pack<I>(codes: I) -> (Vec<u8>, u8)
where
    I: IntoIterator<Item = Code>,
{
    let mut output = Vec::new();
    // Holds at most 7 pending bits between codes, so a 64-bit code always fits.
    let mut buffer: u128 = 0;
    let mut pending: u32 = 0;

    for code in codes {
        buffer = (buffer << code.len) | code.bits as u128;
        pending += code.len as u32;
        while pending >= 8 {
            pending -= 8;
            output.push((buffer >> pending) as u8);
        }
        buffer &= (1u128 << pending) - 1;
    }

    let mut padding = 0;
    if pending > 0 {
        padding = 8 - pending;
        output.push((buffer << padding) as u8);
    }
    (output, padding as u8)
}

/// Walk `root` with the bits of `payload`, emitting a symbol at every leaf.
///
/// The last `padding` bits are ignored. Exactly `expected` symbols must be
/// produced and the walk must finish on a code boundary.
///
/// A tree that is a single leaf uses 1-bit codes: every `0` bit is one
/// occurrence of its symbol.
pub fn unpack(payload: &[u8], padding: u8, root: &HuffmanNode, expected: u64) -> Result<Vec<u8>> {
    if padding > 7 {
        return Err(Error::InvalidPadding(padding));
    }
    let bits = payload.view_bits::<Msb0>();
    let len = bits.len().saturating_sub(padding as usize);
    let bits = &bits[..len];

    let mut output = Vec::with_capacity(expected.min(len as u64) as usize);

    match root {
        HuffmanNode::Leaf { symbol, .. } => {
            if let Some(position) = bits.first_one() {
                return Err(Error::CorruptTree { position });
            }
            output.resize(len, *symbol);
        }
        HuffmanNode::Internal { .. } => {
            let mut current = root;
            for (position, bit) in bits.iter().by_vals().enumerate() {
                let HuffmanNode::Internal { left, right, .. } = current else {
                    return Err(Error::CorruptTree { position });
                };
                current = if bit { right.as_ref() } else { left.as_ref() };
                if let HuffmanNode::Leaf { symbol, .. } = current {
                    output.push(*symbol);
                    current = root;
                }
            }
            if !std::ptr::eq(current, root) {
                return Err(Error::CorruptTree { position: len });
            }
        }
    }

    if output.len() as u64 != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: output.len() as u64,
        });
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::code_table::build_code_table;
    use crate::compression::frequency::build_frequency_table;
    use crate::compression::tree::build_huffman_tree;

    fn code(bits: u64, len: u8) -> Code {
        Code { bits, len }
    }

    #[test]
    fn test_pack_across_byte_boundaries() {
        // 10 10 0 0 0 11 11 -> 10100001 111_00000
        let codes = [
            code(0b10, 2),
            code(0b10, 2),
            code(0, 1),
            code(0, 1),
            code(0, 1),
            code(0b11, 2),
            code(0b11, 2),
        ];
        assert_eq!(pack(codes), (vec![0xA1, 0xE0], 5));
    }

    #[test]
    fn test_pack_exact_bytes_have_no_padding() {
        assert_eq!(pack([code(0xAB, 8), code(0xCD, 8)]), (vec![0xAB, 0xCD], 0));
    }

    #[test]
    fn test_pack_wide_codes() {
        let (bytes, padding) = pack([code(1, 1), code(u64::MAX, 64)]);
        assert_eq!(padding, 7);
        assert_eq!(bytes.len(), 9);
        assert!(bytes[..8].iter().all(|&b| b == 0xFF));
        assert_eq!(bytes[8], 0x80);
    }

    #[test]
    fn test_pack_nothing() {
        assert_eq!(pack(std::iter::empty()), (Vec::new(), 0));
    }

    #[test]
    fn test_unpack_walks_tree() {
        let freq = build_frequency_table(b"aabbbcc").unwrap();
        let tree = build_huffman_tree(&freq).unwrap();
        let decoded = unpack(&[0xA1, 0xE0], 5, &tree, 7).unwrap();
        assert_eq!(decoded, b"aabbbcc");
    }

    #[test]
    fn test_unpack_single_leaf() {
        let freq = build_frequency_table(b"AAA").unwrap();
        let tree = build_huffman_tree(&freq).unwrap();
        let table = build_code_table(&tree);
        let (bytes, padding) = pack(b"AAA".iter().map(|&b| table.get(b).unwrap()));
        assert_eq!(bytes, vec![0x00]);
        assert_eq!(padding, 5);
        assert_eq!(unpack(&bytes, padding, &tree, 3).unwrap(), b"AAA");
    }

    #[test]
    fn test_unpack_single_leaf_rejects_one_bits() {
        let tree = HuffmanNode::Leaf { symbol: b'A', freq: 3 };
        assert_eq!(
            unpack(&[0x20], 5, &tree, 3),
            Err(Error::CorruptTree { position: 2 })
        );
    }

    #[test]
    fn test_unpack_ending_mid_code() {
        let freq = build_frequency_table(b"aabbbcc").unwrap();
        let tree = build_huffman_tree(&freq).unwrap();
        // Drop the trailing half of the last `c` code.
        assert_eq!(
            unpack(&[0xA1, 0xE0], 6, &tree, 7),
            Err(Error::CorruptTree { position: 10 })
        );
    }

    #[test]
    fn test_unpack_count_mismatch() {
        let freq = build_frequency_table(b"aabbbcc").unwrap();
        let tree = build_huffman_tree(&freq).unwrap();
        assert_eq!(
            unpack(&[0xA1, 0xE0], 5, &tree, 8),
            Err(Error::LengthMismatch {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn test_unpack_invalid_padding() {
        let tree = HuffmanNode::Leaf { symbol: 0, freq: 1 };
        assert_eq!(unpack(&[0], 8, &tree, 1), Err(Error::InvalidPadding(8)));
    }
}
