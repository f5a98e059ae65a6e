//! Grammar markers and default decode limits.

// ============================================================================
// Grammar markers
// ============================================================================

/// Opens an integer (`i42e`).
pub const INTEGER_START: u8 = b'i';

/// Opens a list (`l...e`).
pub const LIST_START: u8 = b'l';

/// Opens a dictionary (`d...e`).
pub const DICT_START: u8 = b'd';

/// Terminates integers, lists and dictionaries.
pub const END: u8 = b'e';

/// Separates a byte string's length prefix from its contents.
pub const STRING_DELIMITER: u8 = b':';

/// Sign marker allowed once, before the digits of an integer.
pub const MINUS: u8 = b'-';

// ============================================================================
// Default limits
// ============================================================================

/// Default maximum number of simultaneously open lists and dictionaries.
///
/// Real metainfo files and DHT messages rarely nest beyond a handful of
/// levels; 64 leaves ample room while keeping hostile input cheap to reject.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default maximum declared byte string length (64 MiB).
///
/// Large enough for the `pieces` field of multi-terabyte torrents.
pub const DEFAULT_MAX_STRING_LEN: usize = 64 * 1024 * 1024;

/// Upper bound on the capacity reserved up front for a byte string.
///
/// Buffers grow past this as bytes actually arrive, so a declared length
/// alone never drives allocation.
pub const STRING_PREALLOC_LIMIT: usize = 16 * 1024;
