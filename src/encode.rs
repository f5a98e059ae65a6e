use bytes::Bytes;

use crate::constants::{DICT_START, END, INTEGER_START, LIST_START, MINUS, STRING_DELIMITER};
use crate::sink::ByteSink;
use crate::value::Value;

/// Encodes a bencode value to a byte vector.
///
/// The output follows the canonical bencode format:
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` (keys sorted lexicographically)
///
/// # Examples
///
/// ```
/// use rbencode::{encode, Value};
/// use std::collections::BTreeMap;
/// use bytes::Bytes;
///
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// // Keys come out sorted no matter the insertion order.
/// let mut dict = BTreeMap::new();
/// dict.insert(Bytes::from_static(b"z"), Value::Integer(1));
/// dict.insert(Bytes::from_static(b"a"), Value::Integer(2));
/// assert_eq!(encode(&Value::Dict(dict)), b"d1:ai2e1:zi1ee");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::with_capacity(value.encoded_len());
    match encode_to(value, &mut buf) {
        Ok(()) => buf,
        Err(never) => match never {},
    }
}

/// Writes the canonical encoding of `value` into `sink`.
///
/// # Errors
///
/// Returns the sink's error if a write fails. The sink keeps whatever was
/// written before the failure.
pub fn encode_to<K: ByteSink>(value: &Value, sink: &mut K) -> Result<(), K::Error> {
    match value {
        Value::Integer(i) => {
            sink.put(&[INTEGER_START])?;
            if *i < 0 {
                sink.put(&[MINUS])?;
            }
            put_decimal(sink, i.unsigned_abs())?;
            sink.put(&[END])?;
        }
        Value::Bytes(b) => put_string(sink, b)?,
        Value::List(l) => {
            sink.put(&[LIST_START])?;
            for item in l {
                encode_to(item, sink)?;
            }
            sink.put(&[END])?;
        }
        Value::Dict(d) => {
            sink.put(&[DICT_START])?;
            // BTreeMap<Bytes, _> iterates in byte-wise key order.
            for (key, val) in d {
                put_string(sink, key)?;
                encode_to(val, sink)?;
            }
            sink.put(&[END])?;
        }
    }
    Ok(())
}

impl Value {
    /// Encodes this value into a new [`Bytes`].
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(encode(self))
    }
}

fn put_string<K: ByteSink>(sink: &mut K, bytes: &[u8]) -> Result<(), K::Error> {
    put_decimal(sink, bytes.len() as u64)?;
    sink.put(&[STRING_DELIMITER])?;
    sink.put(bytes)
}

fn put_decimal<K: ByteSink>(sink: &mut K, mut n: u64) -> Result<(), K::Error> {
    // u64::MAX has 20 digits
    let mut digits = [0u8; 20];
    let mut start = digits.len();
    loop {
        start -= 1;
        digits[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    sink.put(&digits[start..])
}
