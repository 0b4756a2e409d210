//! Error types for the Huffman codec.
//!
//! Encoding and decoding are deterministic transforms with no transient
//! failure modes, so every error is reported to the caller as-is and nothing
//! is retried.

use thiserror::Error;

/// Errors produced while encoding or decoding a container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Encode was called with zero-length data
    #[error("cannot encode empty input")]
    EmptyInput,

    /// A symbol occurs more often than the 4-byte header field can record
    #[error("symbol {symbol:#04x} occurs {count} times, exceeding the header limit")]
    InputTooLarge { symbol: u8, count: u64 },

    /// Container is smaller than the smallest structurally valid one
    #[error("container too short: {len} bytes")]
    TooShort { len: usize },

    /// Frequency table header ends before all declared entries
    #[error("truncated header: need {needed} bytes, {available} available")]
    TruncatedHeader { needed: usize, available: usize },

    /// Declared number of header entries is impossible
    #[error("invalid header entry count: {0}")]
    InvalidEntryCount(usize),

    /// A symbol appears twice in the header
    #[error("duplicate symbol {0:#04x} in header")]
    DuplicateSymbol(u8),

    /// A header entry records a zero count
    #[error("symbol {0:#04x} has a zero count in header")]
    ZeroFrequency(u8),

    /// The leading padding byte is outside 0-7
    #[error("invalid padding bit count: {0}")]
    InvalidPadding(u8),

    /// Header present but no bit payload follows
    #[error("container has no payload after the header")]
    EmptyPayload,

    /// The bit stream does not describe a path through the tree
    #[error("corrupt payload at bit {position}")]
    CorruptTree { position: usize },

    /// Payload decoded to a different number of symbols than the header declares
    #[error("decoded {actual} symbols, header declares {expected}")]
    LengthMismatch { expected: u64, actual: u64 },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;
