use bytes::Bytes;
use std::iter::FusedIterator;
use tracing::{debug, trace};

use crate::constants::{
    DICT_START, END, INTEGER_START, LIST_START, MINUS, STRING_DELIMITER, STRING_PREALLOC_LIMIT,
};
use crate::error::{BencodeError, Result};
use crate::limits::Limits;
use crate::source::ByteSource;
use crate::value::Value;

/// Decodes exactly one bencode value spanning all of `data`.
///
/// # Errors
///
/// Fails with [`BencodeError::TrailingData`] if bytes remain after the value,
/// and with the matching grammar error if the value itself is malformed.
///
/// # Examples
///
/// ```
/// use rbencode::{decode, BencodeError, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
/// assert_eq!(decode(b"4:spam").unwrap(), Value::string("spam"));
/// assert!(matches!(decode(b"i03e"), Err(BencodeError::InvalidInteger(_))));
/// assert!(matches!(decode(b"i1ei2e"), Err(BencodeError::TrailingData)));
/// ```
pub fn decode(data: &[u8]) -> Result<Value> {
    let mut input = data;
    let value = decode_from(&mut input)?;

    if !input.is_empty() {
        return Err(BencodeError::TrailingData);
    }

    Ok(value)
}

/// Decodes one value from `source` with the default [`Limits`].
///
/// On success the source is positioned immediately after the value, so
/// further top-level values can be read from it.
///
/// ```
/// use rbencode::{decode_from, Value};
///
/// let mut input: &[u8] = b"i1e3:abc";
/// assert_eq!(decode_from(&mut input).unwrap(), Value::Integer(1));
/// assert_eq!(input, b"3:abc");
/// ```
pub fn decode_from<S: ByteSource + ?Sized>(source: &mut S) -> Result<Value> {
    Decoder::new(source).decode_value()
}

/// An open list or dictionary awaiting more elements.
enum Frame {
    List(Vec<Value>),
    Dict {
        // Encounter order is kept so key ordering can be verified on close.
        entries: Vec<(Bytes, Value)>,
        key: Option<Bytes>,
    },
}

/// What the grammar allows at the current position.
#[derive(Clone, Copy)]
enum Expect {
    Value,
    ValueOrEnd,
    KeyOrEnd,
}

/// A bencode decoder reading consecutive top-level values from a [`ByteSource`].
///
/// Nested lists and dictionaries are tracked on an explicit heap stack rather
/// than through recursion, so hostile nesting is bounded by
/// [`Limits::max_depth`] and never by the thread's call stack.
///
/// The decoder is also an [`Iterator`] over the values in its source. It
/// stops at a clean end of input and yields nothing after the first error.
///
/// # Examples
///
/// ```
/// use rbencode::{Decoder, Limits, Value};
///
/// let input: &[u8] = b"i1el1:ae";
/// let values: Vec<Value> = Decoder::new(input).collect::<Result<_, _>>().unwrap();
/// assert_eq!(values.len(), 2);
///
/// let nested: &[u8] = b"lllleeee";
/// let mut decoder = Decoder::with_limits(nested, Limits::new().with_max_depth(2));
/// assert!(decoder.decode_value().is_err());
/// ```
#[derive(Debug)]
pub struct Decoder<S> {
    source: S,
    limits: Limits,
    failed: bool,
}

impl<S: ByteSource> Decoder<S> {
    /// Creates a decoder over `source` with the default [`Limits`].
    pub fn new(source: S) -> Self {
        Self::with_limits(source, Limits::default())
    }

    /// Creates a decoder over `source` that enforces `limits`.
    pub fn with_limits(source: S, limits: Limits) -> Self {
        Self {
            source,
            limits,
            failed: false,
        }
    }

    /// Returns the limits this decoder enforces.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns a reference to the underlying source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the underlying source.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the source, positioned after the last decoded value.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Returns `true` if the source has no bytes left.
    pub fn is_exhausted(&mut self) -> Result<bool> {
        Ok(self.source.peek_byte()?.is_none())
    }

    /// Decodes the next complete value.
    ///
    /// On error the source position is unspecified and the input should be
    /// treated as rejected.
    pub fn decode_value(&mut self) -> Result<Value> {
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            let expect = match stack.last() {
                None => Expect::Value,
                Some(Frame::List(_)) => Expect::ValueOrEnd,
                Some(Frame::Dict { key: None, .. }) => Expect::KeyOrEnd,
                Some(Frame::Dict { key: Some(_), .. }) => Expect::Value,
            };

            let byte = self
                .source
                .next_byte()?
                .ok_or(BencodeError::UnexpectedEof)?;

            let value = match (expect, byte) {
                (Expect::ValueOrEnd | Expect::KeyOrEnd, END) => match stack.pop() {
                    Some(Frame::List(items)) => Value::List(items),
                    Some(Frame::Dict { entries, .. }) => finish_dict(entries)?,
                    None => return Err(BencodeError::UnexpectedByte(byte)),
                },
                (Expect::KeyOrEnd, b'0'..=b'9') => {
                    let key = self.decode_string(byte)?;
                    if let Some(Frame::Dict { key: slot, .. }) = stack.last_mut() {
                        *slot = Some(key);
                    }
                    continue;
                }
                (Expect::KeyOrEnd, _) => return Err(BencodeError::InvalidKey(byte)),
                (_, INTEGER_START) => Value::Integer(self.decode_integer()?),
                (_, b'0'..=b'9') => Value::Bytes(self.decode_string(byte)?),
                (_, LIST_START) => {
                    self.open(&mut stack, Frame::List(Vec::new()))?;
                    continue;
                }
                (_, DICT_START) => {
                    let frame = Frame::Dict {
                        entries: Vec::new(),
                        key: None,
                    };
                    self.open(&mut stack, frame)?;
                    continue;
                }
                (_, _) => return Err(BencodeError::UnexpectedByte(byte)),
            };

            match stack.last_mut() {
                None => {
                    trace!(kind = value.type_name(), "decoded bencode value");
                    return Ok(value);
                }
                Some(Frame::List(items)) => items.push(value),
                Some(Frame::Dict { entries, key }) => {
                    if let Some(key) = key.take() {
                        entries.push((key, value));
                    }
                }
            }
        }
    }

    fn open(&self, stack: &mut Vec<Frame>, frame: Frame) -> Result<()> {
        if stack.len() >= self.limits.max_depth {
            debug!(max_depth = self.limits.max_depth, "bencode nesting too deep");
            return Err(BencodeError::MaxDepthExceeded(self.limits.max_depth));
        }
        stack.push(frame);
        Ok(())
    }

    /// Parses an integer body; the leading `i` is already consumed.
    fn decode_integer(&mut self) -> Result<i64> {
        let mut negative = false;
        let mut leading_zero = false;
        let mut digits = 0usize;
        let mut value: i64 = 0;

        loop {
            let byte = self
                .source
                .next_byte()?
                .ok_or(BencodeError::UnexpectedEof)?;

            match byte {
                END => break,
                MINUS if digits == 0 && !negative => negative = true,
                b'0'..=b'9' => {
                    if leading_zero {
                        return Err(BencodeError::InvalidInteger("leading zeros"));
                    }
                    leading_zero = digits == 0 && byte == b'0';

                    // Accumulate toward the sign so i64::MIN is representable.
                    let digit = i64::from(byte - b'0');
                    value = value
                        .checked_mul(10)
                        .and_then(|v| {
                            if negative {
                                v.checked_sub(digit)
                            } else {
                                v.checked_add(digit)
                            }
                        })
                        .ok_or(BencodeError::InvalidInteger("out of range"))?;
                    digits += 1;
                }
                _ => return Err(BencodeError::InvalidInteger("unexpected byte")),
            }
        }

        if digits == 0 {
            return Err(BencodeError::InvalidInteger("empty"));
        }

        if negative && value == 0 {
            return Err(BencodeError::InvalidInteger("negative zero"));
        }

        Ok(value)
    }

    /// Parses a byte string whose first length digit is `first`.
    fn decode_string(&mut self, first: u8) -> Result<Bytes> {
        let mut len = usize::from(first - b'0');

        loop {
            let byte = self
                .source
                .next_byte()?
                .ok_or(BencodeError::UnexpectedEof)?;

            match byte {
                STRING_DELIMITER => break,
                b'0'..=b'9' => {
                    if first == b'0' {
                        return Err(BencodeError::InvalidStringLength);
                    }
                    len = len
                        .checked_mul(10)
                        .and_then(|l| l.checked_add(usize::from(byte - b'0')))
                        .ok_or(BencodeError::InvalidStringLength)?;
                }
                _ => return Err(BencodeError::InvalidStringLength),
            }
        }

        if len > self.limits.max_string_len {
            debug!(
                len,
                max = self.limits.max_string_len,
                "bencode string exceeds limit"
            );
            return Err(BencodeError::StringTooLong {
                len,
                max: self.limits.max_string_len,
            });
        }

        let mut buf = Vec::with_capacity(len.min(STRING_PREALLOC_LIMIT));
        let found = self.source.read_into(len, &mut buf)?;
        if found < len {
            return Err(BencodeError::TruncatedString {
                expected: len,
                found,
            });
        }

        Ok(Bytes::from(buf))
    }
}

/// Builds a dictionary once its terminator is reached, rejecting key sequences
/// that are not strictly ascending.
fn finish_dict(entries: Vec<(Bytes, Value)>) -> Result<Value> {
    if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 >= pair[1].0) {
        let key = pair[1].0.clone();
        debug!(key = %key.escape_ascii(), "bencode dictionary keys out of order");
        return Err(BencodeError::UnsortedOrDuplicateKeys { key });
    }

    Ok(Value::Dict(entries.into_iter().collect()))
}

impl<S: ByteSource> Iterator for Decoder<S> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = match self.source.peek_byte() {
            Ok(None) => return None,
            Ok(Some(_)) => self.decode_value(),
            Err(e) => Err(e),
        };

        self.failed = result.is_err();
        Some(result)
    }
}

impl<S: ByteSource> FusedIterator for Decoder<S> {}
