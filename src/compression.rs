//! Huffman compression implementation.
//!
//! The codec is split into components, leaf to root:
//! - Frequency analysis of the input bytes
//! - Deterministic Huffman tree construction
//! - Code table generation from root-to-leaf paths
//! - Bit packing and tree-walking decode
//! - Frequency table header serialization
//! - Encoder/decoder orchestration into a self-describing container
//!
//! # Container layout
//!
//! ```text
//! byte 0:        padding bit count (0-7)
//! bytes 1..1+H:  uint16 N, then N x (uint8 symbol, uint32 count), big-endian
//! remaining:     packed bit payload, MSB-first, zero padded
//! ```
//!
//! # Examples
//!
//! ```rust
//! use huffpack::compression::{decode, encode};
//!
//! let container = encode(b"aabbbcc").unwrap();
//! assert_eq!(decode(&container).unwrap(), b"aabbbcc");
//! ```

pub use crate::error::Error;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for compression algorithms
pub trait Compression {
    /// Compress the input data
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decompress the compressed data
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod bits;
pub mod code_table;
pub mod frequency;
pub mod header;
pub mod huffman;
pub mod tree;

pub use bits::{pack, unpack};
pub use code_table::{build_code_table, Code, CodeTable};
pub use frequency::{build_frequency_table, FrequencyTable};
pub use header::{read_frequency_table, write_frequency_table};
pub use huffman::{decode, decode_batch, encode, encode_batch, Huffman};
pub use tree::{build_huffman_tree, HuffmanNode};
