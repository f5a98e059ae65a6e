//! Byte sources the decoder reads from.
//!
//! The decoder consumes input one byte at a time and needs a single byte of
//! lookahead to tell a container's terminator from its next element without
//! losing the byte. [`ByteSource`] captures exactly that.

use bytes::Buf;
use std::io::{BufRead, ErrorKind};

use crate::error::Result;

/// A forward-only byte stream with one byte of lookahead.
///
/// Implemented for `&[u8]` (the slice is advanced as bytes are consumed),
/// for any [`Buf`] through [`BufSource`], and for any [`BufRead`] through
/// [`IoSource`].
///
/// # Examples
///
/// ```
/// use rbencode::ByteSource;
///
/// let mut input: &[u8] = b"ab";
/// assert_eq!(input.peek_byte().unwrap(), Some(b'a'));
/// assert_eq!(input.next_byte().unwrap(), Some(b'a'));
/// assert_eq!(input.next_byte().unwrap(), Some(b'b'));
/// assert_eq!(input.next_byte().unwrap(), None);
/// ```
pub trait ByteSource {
    /// Consumes and returns the next byte, or `None` at end of input.
    fn next_byte(&mut self) -> Result<Option<u8>>;

    /// Returns the next byte without consuming it, or `None` at end of input.
    fn peek_byte(&mut self) -> Result<Option<u8>>;

    /// Appends up to `n` bytes to `buf`, returning how many were appended.
    ///
    /// Fewer than `n` bytes are appended only when the input ends first.
    fn read_into(&mut self, n: usize, buf: &mut Vec<u8>) -> Result<usize> {
        for read in 0..n {
            match self.next_byte()? {
                Some(b) => buf.push(b),
                None => return Ok(read),
            }
        }
        Ok(n)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        (**self).next_byte()
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        (**self).peek_byte()
    }

    fn read_into(&mut self, n: usize, buf: &mut Vec<u8>) -> Result<usize> {
        (**self).read_into(n, buf)
    }
}

impl ByteSource for &[u8] {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        match self.split_first() {
            Some((&b, rest)) => {
                *self = rest;
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.first().copied())
    }

    fn read_into(&mut self, n: usize, buf: &mut Vec<u8>) -> Result<usize> {
        let take = n.min(self.len());
        let (head, rest) = self.split_at(take);
        buf.extend_from_slice(head);
        *self = rest;
        Ok(take)
    }
}

/// Adapts any [`bytes::Buf`] into a [`ByteSource`].
///
/// ```
/// use bytes::Bytes;
/// use rbencode::{BufSource, Decoder};
///
/// let mut decoder = Decoder::new(BufSource::new(Bytes::from_static(b"i1ei2e")));
/// assert_eq!(decoder.decode_value().unwrap().as_integer(), Some(1));
/// assert_eq!(decoder.decode_value().unwrap().as_integer(), Some(2));
/// assert!(decoder.is_exhausted().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct BufSource<B> {
    inner: B,
}

impl<B: Buf> BufSource<B> {
    /// Wraps a buffer; bytes are consumed from its front.
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    /// Returns the unconsumed remainder of the buffer.
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: Buf> ByteSource for BufSource<B> {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        if self.inner.has_remaining() {
            Ok(Some(self.inner.get_u8()))
        } else {
            Ok(None)
        }
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.inner.chunk().first().copied())
    }

    fn read_into(&mut self, n: usize, buf: &mut Vec<u8>) -> Result<usize> {
        let take = n.min(self.inner.remaining());
        let mut left = take;
        while left > 0 {
            let chunk = self.inner.chunk();
            let step = left.min(chunk.len());
            buf.extend_from_slice(&chunk[..step]);
            self.inner.advance(step);
            left -= step;
        }
        Ok(take)
    }
}

/// Adapts any [`BufRead`] into a [`ByteSource`].
///
/// Lookahead uses the reader's own buffer, so no byte is ever lost between
/// consecutive decodes. Wrap plain readers in [`std::io::BufReader`] first.
/// Interrupted reads are retried; every other I/O error surfaces as
/// [`BencodeError::Io`](crate::BencodeError::Io).
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

impl<R: BufRead> IoSource<R> {
    /// Wraps a buffered reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a reference to the reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns the reader; bytes still in its buffer are not lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Runs `f` over the reader's buffer, refilling it once if it is empty.
    ///
    /// An empty slice means end of input.
    fn with_buf<T>(&mut self, f: impl FnOnce(&[u8]) -> T) -> Result<T> {
        loop {
            match self.inner.fill_buf() {
                Ok(available) => return Ok(f(available)),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<R: BufRead> ByteSource for IoSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let byte = self.with_buf(|available| available.first().copied())?;
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        self.with_buf(|available| available.first().copied())
    }

    fn read_into(&mut self, n: usize, buf: &mut Vec<u8>) -> Result<usize> {
        let mut read = 0;
        while read < n {
            let step = self.with_buf(|available| {
                let step = (n - read).min(available.len());
                buf.extend_from_slice(&available[..step]);
                step
            })?;
            if step == 0 {
                break;
            }
            self.inner.consume(step);
            read += step;
        }
        Ok(read)
    }
}
