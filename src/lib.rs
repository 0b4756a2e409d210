pub mod compression;
pub mod error;

pub use compression::{decode, encode, Compression, Huffman};
pub use error::{Error, Result};
