//! rbencode - Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files, tracker
//! responses, and DHT and extension messages.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Decoding is strict: integers and string lengths may not carry leading
//! zeros, `-0` is rejected, strings must be complete, and dictionary keys must
//! appear in strictly ascending byte order. Encoding always produces the
//! canonical form, so `encode(decode(b)) == b` for every valid input `b`.
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use rbencode::{decode, Value};
//!
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! let value = decode(b"l4:spami42ee").unwrap();
//! assert_eq!(value.as_list().map(|l| l.len()), Some(2));
//!
//! let value = decode(b"d3:foo3:bare").unwrap();
//! assert_eq!(value.get(b"foo").and_then(Value::as_str), Some("bar"));
//! ```
//!
//! ## Decoding a stream of values
//!
//! ```
//! use std::io::{BufReader, Cursor};
//! use rbencode::{Decoder, IoSource};
//!
//! let reader = BufReader::new(Cursor::new(b"i1e4:spamle".to_vec()));
//! let mut decoder = Decoder::new(IoSource::new(reader));
//! assert_eq!(decoder.decode_value().unwrap().as_integer(), Some(1));
//! assert_eq!(decoder.decode_value().unwrap().as_str(), Some("spam"));
//! assert!(decoder.decode_value().unwrap().as_list().unwrap().is_empty());
//! assert!(decoder.is_exhausted().unwrap());
//! ```
//!
//! ## Encoding bencode data
//!
//! ```
//! use rbencode::{encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! let mut info = BTreeMap::new();
//! info.insert(Bytes::from_static(b"name"), Value::string("example.txt"));
//! info.insert(Bytes::from_static(b"length"), Value::Integer(1024));
//!
//! assert_eq!(encode(&Value::Dict(info)), b"d6:lengthi1024e4:name11:example.txte");
//! ```
//!
//! # Error Handling
//!
//! Every decode failure is reported as a [`BencodeError`] and rejects the
//! input as a whole:
//!
//! - [`BencodeError::UnexpectedByte`] - A byte outside the grammar
//! - [`BencodeError::UnexpectedEof`] - Input ended unexpectedly
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., leading zeros)
//! - [`BencodeError::InvalidStringLength`] - Malformed string length prefix
//! - [`BencodeError::TruncatedString`] - Fewer bytes than the declared length
//! - [`BencodeError::InvalidKey`] - Non-string dictionary key
//! - [`BencodeError::UnsortedOrDuplicateKeys`] - Keys out of order
//! - [`BencodeError::MaxDepthExceeded`] - Nesting beyond [`Limits::max_depth`]
//! - [`BencodeError::StringTooLong`] - String beyond [`Limits::max_string_len`]
//! - [`BencodeError::TrailingData`] - Extra data after the value
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

pub mod constants;
mod decode;
mod encode;
mod error;
mod limits;
mod sink;
mod source;
mod value;

pub use decode::{decode, decode_from, Decoder};
pub use encode::{encode, encode_to};
pub use error::{BencodeError, Result};
pub use limits::Limits;
pub use sink::{ByteSink, IoSink};
pub use source::{BufSource, ByteSource, IoSource};
pub use value::Value;
