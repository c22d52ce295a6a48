//! Append encoded values to a [ByteStore].

use crate::{codec, ByteStore, FixedSize, Pack};
use bytes::BufMut;

/// A run of zero bytes.
///
/// Packing writes `n` zeros; unpacking (see [crate::Unpacker::pad]) skips `n` bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding(pub usize);

/// Appends encoded values to the end of a [ByteStore].
///
/// A `Packer` holds the store mutably for as long as it lives, so nothing else can read or
/// write the store while a pack expression is in progress. Packing cannot fail.
pub struct Packer<'a> {
    store: &'a mut ByteStore,
    start: usize,
}

macro_rules! impl_put {
    ($($method:ident: $type:ty),*) => {
        $(
            #[doc = concat!("Appends a big-endian `", stringify!($type), "`.")]
            #[inline]
            pub fn $method(&mut self, value: $type) -> &mut Self {
                self.put(&value)
            }
        )*
    };
}

impl<'a> Packer<'a> {
    /// Creates a packer that appends to `store`.
    pub fn new(store: &'a mut ByteStore) -> Self {
        let start = store.size();
        Self { store, start }
    }

    /// Appends any [Pack] value.
    #[inline]
    pub fn put<T: Pack + ?Sized>(&mut self, value: &T) -> &mut Self {
        let buf = self.store.inner_mut();
        buf.reserve(value.packed_size());
        value.write(buf);
        self
    }

    impl_put!(u8: u8, u16: u16, u32: u32, u64: u64, i8: i8, i16: i16, i32: i32, i64: i64);

    /// Appends `n` zero bytes.
    pub fn pad(&mut self, n: usize) -> &mut Self {
        self.put(&Padding(n))
    }

    /// Appends `bytes` as a nested buffer: a 4-byte length followed by the bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is longer than `u32::MAX`.
    pub fn buffer(&mut self, bytes: &[u8]) -> &mut Self {
        let buf = self.store.inner_mut();
        buf.reserve(u32::SIZE + bytes.len());
        codec::pack_buffer(bytes, buf);
        self
    }

    /// Appends `items` as a sequence: a 2-byte count followed by each element.
    ///
    /// # Panics
    ///
    /// Panics if there are more than `u16::MAX` items.
    pub fn sequence<T: FixedSize + Pack>(&mut self, items: &[T]) -> &mut Self {
        self.put(items)
    }

    /// Appends `bytes` with no length prefix.
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.store.inner_mut().put_slice(bytes);
        self
    }

    /// Returns the number of bytes appended by this packer.
    pub fn written(&self) -> usize {
        self.store.size() - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width() {
        let mut store = ByteStore::new();
        store
            .pack()
            .u64(0xdeadbeefcafebabe)
            .u32(0x8badf00d)
            .u16(0xface)
            .u8(b'!');
        assert_eq!(store.hex(), "deadbeefcafebabe8badf00dface21");
    }

    #[test]
    fn test_signed() {
        let mut store = ByteStore::new();
        store.pack().i8(-1).i16(-2).i32(0x12345678).i64(i64::MIN);
        assert_eq!(store.hex(), "fffffe123456788000000000000000");
    }

    #[test]
    fn test_padding() {
        let mut store = ByteStore::from("x");
        store.pack().pad(3).put(&Padding(0)).put(&Padding(1));
        assert_eq!(store, ByteStore::from(&[b'x', 0, 0, 0, 0]));
    }

    #[test]
    fn test_buffer() {
        let mut store = ByteStore::new();
        store.pack().buffer(b"the buffer").buffer(b"");
        assert_eq!(store.hex(), "0000000a7468652062756666657200000000");
    }

    #[test]
    fn test_sequence() {
        let mut store = ByteStore::new();
        store.pack().sequence(&[0xdeadu16, 0xbeef, 0xcafe, 0xbabe]);
        assert_eq!(store.hex(), "0004deadbeefcafebabe");

        let mut store = ByteStore::new();
        store.pack().sequence::<u32>(&[]);
        assert_eq!(store.hex(), "0000");
    }

    #[test]
    #[should_panic(expected = "sequence length exceeds u16")]
    fn test_sequence_too_long() {
        let items = vec![0u8; u16::MAX as usize + 1];
        ByteStore::new().pack().sequence(&items);
    }

    #[test]
    fn test_raw_and_written() {
        let mut store = ByteStore::from("ab");
        let mut packer = store.pack();
        packer.raw(b"cd").u8(b'e');
        assert_eq!(packer.written(), 3);
        assert_eq!(store, ByteStore::from("abcde"));
    }

    #[test]
    fn test_appends_to_existing() {
        let mut store = ByteStore::new();
        store.pack().u16(0x0102);
        store.pack().u16(0x0304);
        assert_eq!(store.hex(), "01020304");
    }
}
