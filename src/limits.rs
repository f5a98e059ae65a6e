//! Resource limits applied while decoding.
//!
//! Bencode is routinely read from untrusted peers (tracker responses, DHT
//! packets, `ut_metadata` pieces). [`Limits`] bounds how much nesting and how
//! large a single byte string a [`Decoder`](crate::Decoder) will accept before
//! rejecting the input.

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_STRING_LEN};

/// Decode limits.
///
/// # Examples
///
/// ```
/// use rbencode::Limits;
///
/// let limits = Limits::new().with_max_depth(8).with_max_string_len(1024);
/// assert_eq!(limits.max_depth, 8);
/// assert_eq!(limits.max_string_len, 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of lists and dictionaries open at the same time.
    pub max_depth: usize,
    /// Maximum declared length of a single byte string.
    pub max_string_len: usize,
}

impl Limits {
    /// Default limits, suitable for metainfo files and tracker responses.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }

    /// Tight limits for small wire messages such as DHT queries.
    pub const fn strict() -> Self {
        Self {
            max_depth: 16,
            max_string_len: 64 * 1024,
        }
    }

    /// No practical limits.
    ///
    /// Decoding and dropping track depth on the heap, so deep input costs
    /// memory rather than call stack. Encoding, comparing, cloning and
    /// formatting a [`Value`](crate::Value) still recurse once per nesting
    /// level; only use this preset for trusted input.
    pub const fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
            max_string_len: usize::MAX,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_max_string_len(mut self, max_string_len: usize) -> Self {
        self.max_string_len = max_string_len;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}
