//! Traits for values that can be packed into and unpacked from a buffer.
//!
//! # Implementations
//!
//! - Integers (`u8`..`u64`, `i8`..`i64`): big-endian, fixed width
//! - `[u8; N]`: `N` raw bytes, fixed width
//! - [ByteStore]: a nested buffer, prefixed by its length as a `u32`
//! - `[T]` and `Vec<T>` (for [FixedSize] `T`): a sequence, prefixed by its count as a `u16`
//! - [Padding]: zero bytes (pack only; use [Unpacker::pad] to skip them)
//!
//! Lengths that do not fit their prefix are a programming error and panic when packed.

use crate::{ByteStore, Error, Padding, Unpacker};
use bytes::{Buf, BufMut};
use tracing::debug;

/// Trait for types with a known, fixed encoded length.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

/// Trait for types that can be appended to a buffer.
pub trait Pack {
    /// Writes the encoded value to `buf`.
    fn write(&self, buf: &mut impl BufMut);

    /// Returns the encoded length of this value.
    ///
    /// This method MUST return the exact number of bytes written by `write()`.
    fn packed_size(&self) -> usize;

    /// Encodes a value into a new [ByteStore].
    ///
    /// Panics if the `write` implementation does not write the expected number of bytes.
    ///
    /// (Provided method).
    fn encode(&self) -> ByteStore {
        let len = self.packed_size();
        let mut store = ByteStore::with_capacity(len);
        store.pack().put(self);
        assert_eq!(store.size(), len, "pack() did not write expected bytes");
        store
    }
}

/// Trait for types that can be read from an [Unpacker].
///
/// Implementations built only from other `Unpack` values inherit their all-or-nothing
/// behavior per field, not for the value as a whole. Use [Unpack::decode] (or a cloned
/// [Unpacker]) when a partially read value must not move the caller's cursor.
pub trait Unpack: Sized {
    /// Reads a value, consuming the bytes it occupies.
    fn read(up: &mut Unpacker<'_>) -> Result<Self, Error>;

    /// Decodes a value from `bytes`, ensuring every byte is consumed.
    ///
    /// (Provided method).
    fn decode(bytes: &[u8]) -> Result<Self, Error> {
        let mut up = Unpacker::new(bytes);
        let value = Self::read(&mut up)?;
        up.finish()?;
        Ok(value)
    }
}

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }

        impl Pack for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                buf.$write_method(*self);
            }

            #[inline]
            fn packed_size(&self) -> usize {
                Self::SIZE
            }
        }

        impl Unpack for $type {
            #[inline]
            fn read(up: &mut Unpacker<'_>) -> Result<Self, Error> {
                let mut bytes = up.take(Self::SIZE)?;
                Ok(bytes.$read_method())
            }
        }
    };
}

impl_numeric!(u8, get_u8, put_u8);
impl_numeric!(u16, get_u16, put_u16);
impl_numeric!(u32, get_u32, put_u32);
impl_numeric!(u64, get_u64, put_u64);
impl_numeric!(i8, get_i8, put_i8);
impl_numeric!(i16, get_i16, put_i16);
impl_numeric!(i32, get_i32, put_i32);
impl_numeric!(i64, get_i64, put_i64);

// Constant-size array implementation
impl<const N: usize> FixedSize for [u8; N] {
    const SIZE: usize = N;
}

impl<const N: usize> Pack for [u8; N] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self[..]);
    }

    #[inline]
    fn packed_size(&self) -> usize {
        N
    }
}

impl<const N: usize> Unpack for [u8; N] {
    #[inline]
    fn read(up: &mut Unpacker<'_>) -> Result<Self, Error> {
        let mut dst = [0; N];
        dst.copy_from_slice(up.take(N)?);
        Ok(dst)
    }
}

// Padding implementation
impl Pack for Padding {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_bytes(0, self.0);
    }

    #[inline]
    fn packed_size(&self) -> usize {
        self.0
    }
}

// Nested buffer implementation
pub(crate) fn pack_buffer(bytes: &[u8], buf: &mut impl BufMut) {
    let len = u32::try_from(bytes.len()).expect("buffer length exceeds u32");
    buf.put_u32(len);
    buf.put_slice(bytes);
}

impl Pack for ByteStore {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        pack_buffer(self, buf);
    }

    #[inline]
    fn packed_size(&self) -> usize {
        u32::SIZE + self.len()
    }
}

impl Unpack for ByteStore {
    #[inline]
    fn read(up: &mut Unpacker<'_>) -> Result<Self, Error> {
        up.buffer().map(ByteStore::from_slice)
    }
}

// Sequence implementation
impl<T: FixedSize + Pack> Pack for [T] {
    fn write(&self, buf: &mut impl BufMut) {
        let count = u16::try_from(self.len()).expect("sequence length exceeds u16");
        buf.put_u16(count);
        for item in self {
            item.write(buf);
        }
    }

    fn packed_size(&self) -> usize {
        u16::SIZE + self.len() * T::SIZE
    }
}

impl<T: FixedSize + Pack> Pack for Vec<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.as_slice().write(buf);
    }

    #[inline]
    fn packed_size(&self) -> usize {
        self.as_slice().packed_size()
    }
}

impl<T: FixedSize + Unpack> Unpack for Vec<T> {
    fn read(up: &mut Unpacker<'_>) -> Result<Self, Error> {
        let mut header = up.peek(u16::SIZE)?;
        let count = header.get_u16() as usize;
        let limits = up.limits();
        if !limits.contains_sequence(count) {
            debug!(count, max = limits.max_sequence, "sequence exceeds limit");
            return Err(Error::LengthExceeded(count, limits.max_sequence));
        }

        // Check the whole sequence fits before consuming anything
        let needed = count.saturating_mul(T::SIZE).saturating_add(u16::SIZE);
        let body = &up.peek(needed)?[u16::SIZE..];
        let mut items = Unpacker::with_limits(body, limits);
        let mut vec = Vec::with_capacity(count);
        for _ in 0..count {
            vec.push(T::read(&mut items)?);
        }
        up.skip(needed)?;
        Ok(vec)
    }
}
