use bytes::Bytes;
use std::collections::BTreeMap;

/// A bencode value.
///
/// Bencode has four data types: integers, byte strings, lists, and dictionaries.
/// This enum is closed, so every consumer matches exhaustively and there is no
/// "unknown type" to handle at runtime.
///
/// Dictionaries are stored in a [`BTreeMap`] keyed by [`Bytes`], whose ordering
/// is plain byte-wise comparison. Iteration order is therefore always the
/// canonical bencode key order, whatever order entries were inserted in.
///
/// # Examples
///
/// ```
/// use rbencode::Value;
///
/// // Creating values directly
/// let int = Value::Integer(42);
/// let string = Value::string("hello");
/// let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
///
/// // Using From implementations
/// let int: Value = 42i64.into();
/// let string: Value = "hello".into();
///
/// // Accessing values
/// assert_eq!(int.as_integer(), Some(42));
/// assert_eq!(string.as_str(), Some("hello"));
/// assert_eq!(list.as_list().map(|l| l.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A byte string (may or may not be valid UTF-8).
    Bytes(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with byte string keys, iterated in ascending key order.
    Dict(BTreeMap<Bytes, Value>),
}

impl Value {
    /// Creates a byte string value from a UTF-8 string.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbencode::Value;
    ///
    /// let value = Value::string("hello");
    /// assert_eq!(value.as_str(), Some("hello"));
    /// ```
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// Returns the name of the active variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Bytes(_) => "byte string",
            Value::List(_) => "list",
            Value::Dict(_) => "dictionary",
        }
    }

    /// Returns the value as an integer, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbencode::Value;
    ///
    /// assert_eq!(Value::Integer(42).as_integer(), Some(42));
    /// assert_eq!(Value::string("hello").as_integer(), None);
    /// ```
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a valid UTF-8 byte string.
    ///
    /// Returns `None` if the value is not a byte string or if the bytes are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the list, if it is one.
    pub fn into_list(mut self) -> Option<Vec<Value>> {
        match &mut self {
            Value::List(l) => Some(std::mem::take(l)),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    ///
    /// This avoids cloning the dictionary when you need ownership.
    pub fn into_dict(mut self) -> Option<BTreeMap<Bytes, Value>> {
        match &mut self {
            Value::Dict(d) => Some(std::mem::take(d)),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// Returns `None` if the value is not a dictionary or if the key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbencode::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
    /// assert_eq!(value.get(b"missing"), None);
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }

    /// Returns the exact number of bytes [`encode`](crate::encode) produces for this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbencode::{encode, Value};
    ///
    /// let value = Value::List(vec![Value::Integer(-17), Value::string("spam")]);
    /// assert_eq!(value.encoded_len(), encode(&value).len());
    /// ```
    pub fn encoded_len(&self) -> usize {
        match self {
            Value::Integer(i) => 2 + integer_len(*i),
            Value::Bytes(b) => string_len(b.len()),
            Value::List(l) => 2 + l.iter().map(Value::encoded_len).sum::<usize>(),
            Value::Dict(d) => {
                2 + d
                    .iter()
                    .map(|(k, v)| string_len(k.len()) + v.encoded_len())
                    .sum::<usize>()
            }
        }
    }
}

impl Value {
    fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Dict(_))
    }
}

/// Tears nested lists and dictionaries down iteratively, so dropping a value
/// costs heap proportional to its width rather than call stack proportional
/// to its depth.
impl Drop for Value {
    fn drop(&mut self) {
        let mut pending: Vec<Value> = match self {
            Value::List(l) if l.iter().any(Value::is_container) => std::mem::take(l),
            Value::Dict(d) if d.values().any(Value::is_container) => {
                std::mem::take(d).into_values().collect()
            }
            _ => return,
        };

        while let Some(mut value) = pending.pop() {
            // Children move out first; `value` then drops with nothing nested.
            match &mut value {
                Value::List(l) => pending.append(l),
                Value::Dict(d) => pending.extend(std::mem::take(d).into_values()),
                _ => {}
            }
        }
    }
}

fn decimal_len(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

fn integer_len(i: i64) -> usize {
    decimal_len(i.unsigned_abs()) + usize::from(i < 0)
}

fn string_len(len: usize) -> usize {
    decimal_len(len as u64) + 1 + len
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(Bytes::copy_from_slice(b))
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(b))
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<BTreeMap<Bytes, Value>> for Value {
    fn from(d: BTreeMap<Bytes, Value>) -> Self {
        Value::Dict(d)
    }
}
