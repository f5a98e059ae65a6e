use bytes::Bytes;
use thiserror::Error;

/// Errors that can occur while decoding or encoding bencode.
///
/// Every decode error is terminal: the input is rejected as a whole and no
/// partial value is returned.
#[derive(Debug, Error)]
pub enum BencodeError {
    /// A byte outside the grammar appeared where a value was expected.
    #[error("unexpected byte: {:?}", as_char(.0))]
    UnexpectedByte(u8),

    /// The input ended before a terminator or delimiter was reached.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The body of an integer is malformed.
    #[error("invalid integer: {0}")]
    InvalidInteger(&'static str),

    /// The length prefix of a byte string is malformed.
    #[error("invalid string length")]
    InvalidStringLength,

    /// The input ended before the declared number of string bytes.
    #[error("truncated string: expected {expected} bytes, found {found}")]
    TruncatedString { expected: usize, found: usize },

    /// A dictionary key position held something other than a byte string.
    #[error("invalid dictionary key: expected byte string, found {:?}", as_char(.0))]
    InvalidKey(u8),

    /// Dictionary keys were not strictly ascending in encounter order.
    #[error("dictionary keys unsorted or duplicated at key {}", .key.escape_ascii())]
    UnsortedOrDuplicateKeys { key: Bytes },

    /// Lists and dictionaries were nested deeper than the configured limit.
    #[error("maximum nesting depth of {0} exceeded")]
    MaxDepthExceeded(usize),

    /// A byte string declared a length above the configured limit.
    #[error("string length {len} exceeds limit of {max}")]
    StringTooLong { len: usize, max: usize },

    /// Bytes remained after a complete value.
    #[error("trailing data after value")]
    TrailingData,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

pub type Result<T> = std::result::Result<T, BencodeError>;
