//! Frequency table header serialization.
//!
//! Layout, big-endian:
//!
//! ```text
//! uint16  N
//! N x { uint8 symbol, uint32 count }
//! ```
//!
//! Entries are written in ascending symbol order, so equal tables always
//! serialize to identical bytes.

use crate::compression::frequency::FrequencyTable;
use crate::compression::Result;
use crate::error::Error;

/// Size of the entry count field
pub const COUNT_SIZE: usize = 2;

/// Size of one `(symbol, count)` entry
pub const ENTRY_SIZE: usize = 5;

/// Append the serialized frequency table to `out`.
///
/// Fails with [`Error::InputTooLarge`] if a count does not fit in 32 bits.
pub fn write_frequency_table(freq_table: &FrequencyTable, out: &mut Vec<u8>) -> Result<()> {
    let entries = freq_table.len();
    out.reserve(COUNT_SIZE + ENTRY_SIZE * entries);
    // At most 256 distinct byte values
    out.extend_from_slice(&(entries as u16).to_be_bytes());
    for (symbol, count) in freq_table.iter() {
        let count = u32::try_from(count).map_err(|_| Error::InputTooLarge { symbol, count })?;
        out.push(symbol);
        out.extend_from_slice(&count.to_be_bytes());
    }
    Ok(())
}

/// Read a frequency table from the front of `data`.
///
/// Returns the table and the number of bytes consumed.
pub fn read_frequency_table(data: &[u8]) -> Result<(FrequencyTable, usize)> {
    let Some(count_bytes) = data.get(..COUNT_SIZE) else {
        return Err(Error::TruncatedHeader {
            needed: COUNT_SIZE,
            available: data.len(),
        });
    };
    let entries = u16::from_be_bytes([count_bytes[0], count_bytes[1]]) as usize;
    if entries == 0 || entries > 256 {
        return Err(Error::InvalidEntryCount(entries));
    }

    let needed = COUNT_SIZE + ENTRY_SIZE * entries;
    if data.len() < needed {
        return Err(Error::TruncatedHeader {
            needed,
            available: data.len(),
        });
    }

    let mut freq_table = FrequencyTable::new();
    for entry in data[COUNT_SIZE..needed].chunks_exact(ENTRY_SIZE) {
        let symbol = entry[0];
        let count = u32::from_be_bytes([entry[1], entry[2], entry[3], entry[4]]);
        if count == 0 {
            return Err(Error::ZeroFrequency(symbol));
        }
        if freq_table.contains(symbol) {
            return Err(Error::DuplicateSymbol(symbol));
        }
        freq_table.add(symbol, count as u64);
    }
    Ok((freq_table, needed))
}
