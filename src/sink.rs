//! Byte sinks the encoder writes to.

use bytes::{BufMut, BytesMut};
use std::convert::Infallible;
use std::io::Write;

/// Destination for encoded bytes.
///
/// A write either fully succeeds or aborts the whole encode; what the sink
/// holds after a failed write is up to the sink.
pub trait ByteSink {
    type Error;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<K: ByteSink + ?Sized> ByteSink for &mut K {
    type Error = K::Error;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).put(bytes)
    }
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl ByteSink for BytesMut {
    type Error = Infallible;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.put_slice(bytes);
        Ok(())
    }
}

/// Adapts any [`std::io::Write`] into a [`ByteSink`].
///
/// ```
/// use rbencode::{encode_to, IoSink, Value};
///
/// let mut sink = IoSink::new(Vec::new());
/// encode_to(&Value::Integer(7), &mut sink).unwrap();
/// assert_eq!(sink.into_inner(), b"i7e");
/// ```
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    type Error = std::io::Error;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(bytes)
    }
}
