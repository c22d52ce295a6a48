//! An owned, growable byte sequence.

use crate::{from_hex, hex, Packer, Unpacker};
use bytes::{Buf, Bytes, BytesMut};
use std::{
    fmt::{Debug, Display},
    ops::Deref,
};

/// An owned, growable sequence of bytes.
///
/// Equality is bytewise and length-sensitive: a store that has been trimmed to nothing is equal
/// to [ByteStore::new].
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteStore(BytesMut);

impl ByteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self(BytesMut::new())
    }

    /// Creates an empty store that can hold `capacity` bytes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(BytesMut::with_capacity(capacity))
    }

    /// Creates a store holding a copy of `bytes`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(BytesMut::from(bytes))
    }

    /// Creates a store from a hexadecimal string (see [crate::from_hex]).
    pub fn from_hex(hex: &str) -> Option<Self> {
        from_hex(hex).map(Self::from)
    }

    /// Returns the number of bytes held.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns the number of bytes held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the store holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of bytes the store can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Appends `bytes` to the end of the store.
    pub fn append(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    /// Removes the first `n` bytes, shifting the remainder to the front.
    ///
    /// If `n` is larger than [ByteStore::size], the store is emptied.
    pub fn trim_prefix(&mut self, n: usize) {
        let n = n.min(self.0.len());
        self.0.advance(n);
    }

    /// Returns the offset of the first occurrence of `byte`, or [ByteStore::size] if absent.
    pub fn index(&self, byte: u8) -> usize {
        self.0
            .iter()
            .position(|b| *b == byte)
            .unwrap_or(self.0.len())
    }

    /// Returns true if `byte` occurs anywhere in the store.
    pub fn contains(&self, byte: u8) -> bool {
        self.index(byte) < self.size()
    }

    /// Renders the store as lowercase hexadecimal, two characters per byte.
    pub fn hex(&self) -> String {
        hex(&self.0)
    }

    /// Removes all bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the bytes held.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns a [Packer] that appends to the end of this store.
    pub fn pack(&mut self) -> Packer<'_> {
        Packer::new(self)
    }

    /// Returns an [Unpacker] positioned at the start of this store.
    pub fn unpack(&self) -> Unpacker<'_> {
        Unpacker::new(&self.0)
    }

    /// Converts the store into an immutable [Bytes] without copying.
    pub fn freeze(self) -> Bytes {
        self.0.freeze()
    }

    pub(crate) fn inner_mut(&mut self) -> &mut BytesMut {
        &mut self.0
    }
}

impl From<&[u8]> for ByteStore {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteStore {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<&str> for ByteStore {
    fn from(s: &str) -> Self {
        Self::from_slice(s.as_bytes())
    }
}

impl From<Vec<u8>> for ByteStore {
    fn from(v: Vec<u8>) -> Self {
        Self(BytesMut::from(&v[..]))
    }
}

impl From<BytesMut> for ByteStore {
    fn from(b: BytesMut) -> Self {
        Self(b)
    }
}

impl From<Bytes> for ByteStore {
    fn from(b: Bytes) -> Self {
        Self(BytesMut::from(&b[..]))
    }
}

impl From<ByteStore> for Vec<u8> {
    fn from(store: ByteStore) -> Self {
        store.0.to_vec()
    }
}

impl AsRef<[u8]> for ByteStore {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for ByteStore {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8]> for ByteStore {
    fn eq(&self, other: &[u8]) -> bool {
        self.0[..] == *other
    }
}

impl PartialEq<&[u8]> for ByteStore {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0[..] == **other
    }
}

impl Display for ByteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl Debug for ByteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ByteStore({})", self.hex())
    }
}
