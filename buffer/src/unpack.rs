//! Consume encoded values from a byte region.
//!
//! Every read is all-or-nothing: when the remaining input cannot satisfy a read, the read
//! returns an [Error] and the cursor stays where it was. Reads that return `Result<&mut Self>`
//! chain with `?`, so the first failure short-circuits the rest of the expression.

use crate::{ByteStore, Error, FixedSize, Limits, Padding, Unpack};
use bytes::Buf;
use tracing::{debug, trace};

/// A cursor over a borrowed byte region.
///
/// The invariant `remain() == len - offset()` always holds, and `offset()` only moves forward
/// after a read succeeds. Unpackers over the same bytes share no state.
#[derive(Clone, Debug)]
pub struct Unpacker<'a> {
    buf: &'a [u8],
    offset: usize,
    limits: Limits,
}

macro_rules! impl_get {
    ($($method:ident: $type:ty),*) => {
        $(
            #[doc = concat!("Reads a big-endian `", stringify!($type), "`.")]
            #[inline]
            pub fn $method(&mut self) -> Result<$type, Error> {
                self.get::<$type>()
            }
        )*
    };
}

impl<'a> Unpacker<'a> {
    /// Creates an unpacker positioned at the start of `buf`, with default [Limits].
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_limits(buf, Limits::default())
    }

    /// Creates an unpacker positioned at the start of `buf`.
    pub fn with_limits(buf: &'a [u8], limits: Limits) -> Self {
        Self {
            buf,
            offset: 0,
            limits,
        }
    }

    /// Returns the limits applied to length prefixes.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Returns the number of bytes not yet consumed.
    pub fn remain(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Returns the number of bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remain() == 0
    }

    /// Returns the bytes not yet consumed.
    pub fn remaining_slice(&self) -> &'a [u8] {
        let buf: &'a [u8] = self.buf;
        &buf[self.offset..]
    }

    /// Returns the next `n` bytes without consuming them.
    pub fn peek(&self, n: usize) -> Result<&'a [u8], Error> {
        let remaining = self.remain();
        if remaining < n {
            trace!(needed = n, remaining, offset = self.offset, "read out of range");
            return Err(Error::OutOfRange {
                needed: n,
                remaining,
            });
        }
        let buf: &'a [u8] = self.buf;
        Ok(&buf[self.offset..self.offset + n])
    }

    /// Consumes and returns the next `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        let bytes = self.peek(n)?;
        self.offset += n;
        Ok(bytes)
    }

    /// Skips `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<&mut Self, Error> {
        self.take(n)?;
        Ok(self)
    }

    /// Skips the bytes written by a [Padding].
    pub fn pad(&mut self, padding: Padding) -> Result<&mut Self, Error> {
        self.skip(padding.0)
    }

    /// Reads exactly `n` bytes into `dst`, replacing its contents.
    ///
    /// `dst` is left untouched if fewer than `n` bytes remain.
    pub fn sized(&mut self, n: usize, dst: &mut ByteStore) -> Result<&mut Self, Error> {
        let bytes = self.take(n)?;
        *dst = ByteStore::from_slice(bytes);
        Ok(self)
    }

    /// Reads a nested buffer (a 4-byte length followed by that many bytes) without copying it.
    ///
    /// If the declared length does not fit in the remaining input, or exceeds
    /// [Limits::max_buffer], nothing is consumed: the length prefix can still be read as a `u32`.
    pub fn buffer(&mut self) -> Result<&'a [u8], Error> {
        let mut header = self.peek(u32::SIZE)?;
        let len = header.get_u32() as usize;
        if !self.limits.contains_buffer(len) {
            debug!(len, max = self.limits.max_buffer, "nested buffer exceeds limit");
            return Err(Error::LengthExceeded(len, self.limits.max_buffer));
        }
        let needed = u32::SIZE.saturating_add(len);
        let remaining = self.remain();
        if remaining < needed {
            debug!(
                len,
                available = remaining - u32::SIZE,
                offset = self.offset,
                "nested buffer overruns input"
            );
            return Err(Error::OutOfRange { needed, remaining });
        }
        let body = self.take(needed)?;
        Ok(&body[u32::SIZE..])
    }

    /// Reads any [Unpack] value.
    #[inline]
    pub fn get<T: Unpack>(&mut self) -> Result<T, Error> {
        T::read(self)
    }

    /// Reads a value into `dst`.
    ///
    /// On failure `dst` keeps its previous value.
    #[inline]
    pub fn read<T: Unpack>(&mut self, dst: &mut T) -> Result<&mut Self, Error> {
        *dst = T::read(self)?;
        Ok(self)
    }

    impl_get!(u8: u8, u16: u16, u32: u32, u64: u64, i8: i8, i16: i16, i32: i32, i64: i64);

    /// Returns an error if any bytes remain.
    pub fn finish(&self) -> Result<(), Error> {
        let remaining = self.remain();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(())
    }
}
