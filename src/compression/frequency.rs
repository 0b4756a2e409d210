//! Byte frequency analysis.

use crate::compression::Result;
use crate::error::Error;

/// Occurrence counts for each byte value.
///
/// Symbols that never occur are absent: they are skipped by [`iter`](Self::iter)
/// and reported as `None` by [`get`](Self::get). Iteration is always in
/// ascending symbol order, independent of insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        FrequencyTable { counts: [0; 256] }
    }

    /// Add `count` occurrences of `symbol`
    pub fn add(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] += count;
    }

    /// Get the count of a symbol, `None` if it is absent
    pub fn get(&self, symbol: u8) -> Option<u64> {
        match self.counts[symbol as usize] {
            0 => None,
            count => Some(count),
        }
    }

    /// Check whether a symbol is present
    pub fn contains(&self, symbol: u8) -> bool {
        self.counts[symbol as usize] != 0
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&count| count != 0).count()
    }

    /// Whether no symbol is present
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Sum of all counts, equal to the length of the analyzed input
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Present symbols with their counts, in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count != 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

impl FromIterator<(u8, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for (symbol, count) in iter {
            table.add(symbol, count);
        }
        table
    }
}

/// Count the occurrences of each byte value in `data`.
///
/// Fails with [`Error::EmptyInput`] when `data` is empty.
pub fn build_frequency_table(data: &[u8]) -> Result<FrequencyTable> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut table = FrequencyTable::new();
    for &byte in data {
        table.counts[byte as usize] += 1;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table() {
        let freq = build_frequency_table(b"aabccc").unwrap();
        assert_eq!(freq.get(b'a'), Some(2));
        assert_eq!(freq.get(b'b'), Some(1));
        assert_eq!(freq.get(b'c'), Some(3));
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.total(), 6);
    }

    #[test]
    fn test_absent_symbols_are_not_entries() {
        let freq = build_frequency_table(b"zz").unwrap();
        assert_eq!(freq.get(b'a'), None);
        assert!(!freq.contains(0));
        assert_eq!(freq.iter().count(), 1);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let freq = build_frequency_table(&[0xff, 0x10, 0x80, 0x00, 0x10]).unwrap();
        let symbols: Vec<u8> = freq.iter().map(|(symbol, _)| symbol).collect();
        assert_eq!(symbols, vec![0x00, 0x10, 0x80, 0xff]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(build_frequency_table(&[]), Err(Error::EmptyInput));
    }

    #[test]
    fn test_from_iter() {
        let freq: FrequencyTable = [(b'x', 4), (b'a', 1)].into_iter().collect();
        assert_eq!(
            freq.iter().collect::<Vec<_>>(),
            vec![(b'a', 1), (b'x', 4)]
        );
        assert!(!freq.is_empty());
        assert!(FrequencyTable::default().is_empty());
    }
}
