//! Huffman encoder and decoder.
//!
//! Every call builds its own frequency table, tree and code table, so the
//! functions here are pure and safe to run concurrently on any number of
//! independent payloads.

use crate::compression::bits::{pack, unpack};
use crate::compression::code_table::build_code_table;
use crate::compression::frequency::build_frequency_table;
use crate::compression::header::{read_frequency_table, write_frequency_table};
use crate::compression::tree::build_huffman_tree;
use crate::compression::{Compression, Result};
use crate::error::Error;
use log::debug;
use rayon::prelude::*;

/// Smallest container the decoder will look at: padding byte plus entry count
const MIN_CONTAINER_LEN: usize = 3;

/// Huffman codec over byte sequences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Huffman;

impl Huffman {
    /// Create a new Huffman codec
    pub fn new() -> Self {
        Huffman
    }
}

impl Compression for Huffman {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        encode(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        decode(data)
    }
}

/// Encode `data` into a self-describing container.
///
/// Fails with [`Error::EmptyInput`] if `data` is empty.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    let freq_table = build_frequency_table(data)?;

    let mut header = Vec::new();
    write_frequency_table(&freq_table, &mut header)?;

    let tree = build_huffman_tree(&freq_table).ok_or(Error::EmptyInput)?;
    let code_table = build_code_table(&tree);
    // Every byte of `data` was counted, so every lookup hits.
    let (payload, padding) = pack(data.iter().filter_map(|&byte| code_table.get(byte)));

    let mut container = Vec::with_capacity(1 + header.len() + payload.len());
    container.push(padding);
    container.extend_from_slice(&header);
    container.extend_from_slice(&payload);

    debug!(
        "encoded {} bytes with {} symbols into {} bytes ({} padding bits)",
        data.len(),
        freq_table.len(),
        container.len(),
        padding
    );
    Ok(container)
}

/// Decode a container produced by [`encode`].
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    if container.len() < MIN_CONTAINER_LEN {
        return Err(Error::TooShort {
            len: container.len(),
        });
    }

    let padding = container[0];
    if padding > 7 {
        return Err(Error::InvalidPadding(padding));
    }

    let (freq_table, header_len) = read_frequency_table(&container[1..])?;
    let payload = &container[1 + header_len..];
    if payload.is_empty() {
        return Err(Error::EmptyPayload);
    }

    let tree = build_huffman_tree(&freq_table).ok_or(Error::InvalidEntryCount(0))?;
    let decoded = unpack(payload, padding, &tree, freq_table.total())?;

    debug!(
        "decoded {} bytes with {} symbols into {} bytes",
        container.len(),
        freq_table.len(),
        decoded.len()
    );
    Ok(decoded)
}

/// Encode independent payloads in parallel.
///
/// Results are returned in input order, one per payload.
pub fn encode_batch(payloads: &[&[u8]]) -> Vec<Result<Vec<u8>>> {
    payloads.par_iter().map(|data| encode(data)).collect()
}

/// Decode independent containers in parallel.
///
/// Results are returned in input order, one per container.
pub fn decode_batch(containers: &[&[u8]]) -> Vec<Result<Vec<u8>>> {
    containers
        .par_iter()
        .map(|container| decode(container))
        .collect()
}
