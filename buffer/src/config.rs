//! Limits applied while unpacking untrusted input.

/// Upper bounds on the lengths an [crate::Unpacker] accepts from a length prefix.
///
/// The wire format already caps nested buffers at `u32::MAX` bytes and sequences at `u16::MAX`
/// elements, which is also the default. Tighter limits reject a hostile prefix before anything
/// is copied.
///
/// # Examples
///
/// ```
/// use commonware_buffer::{ByteStore, Error, Limits, Unpacker};
///
/// let mut packed = ByteStore::new();
/// packed.pack().buffer(&[0u8; 64]);
///
/// let limits = Limits::default().with_max_buffer(16);
/// let mut up = Unpacker::with_limits(&packed, limits);
/// assert_eq!(up.get::<ByteStore>(), Err(Error::LengthExceeded(64, 16)));
/// assert_eq!(up.remain(), 4 + 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Limits {
    /// Maximum length of a nested buffer, in bytes.
    pub max_buffer: usize,

    /// Maximum number of elements in a sequence.
    pub max_sequence: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_buffer: u32::MAX as usize,
            max_sequence: u16::MAX as usize,
        }
    }
}

impl Limits {
    /// Returns a copy with `max_buffer` set.
    pub fn with_max_buffer(mut self, max_buffer: usize) -> Self {
        self.max_buffer = max_buffer;
        self
    }

    /// Returns a copy with `max_sequence` set.
    pub fn with_max_sequence(mut self, max_sequence: usize) -> Self {
        self.max_sequence = max_sequence;
        self
    }

    /// Returns true if a nested buffer of `len` bytes is allowed.
    pub fn contains_buffer(&self, len: usize) -> bool {
        len <= self.max_buffer
    }

    /// Returns true if a sequence of `count` elements is allowed.
    pub fn contains_sequence(&self, count: usize) -> bool {
        count <= self.max_sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_wire_format() {
        let limits = Limits::default();
        assert!(limits.contains_buffer(u32::MAX as usize));
        assert!(limits.contains_sequence(u16::MAX as usize));
        assert!(!limits.contains_sequence(u16::MAX as usize + 1));
    }

    #[test]
    fn test_builders() {
        let limits = Limits::default().with_max_buffer(8).with_max_sequence(2);
        assert!(limits.contains_buffer(0));
        assert!(limits.contains_buffer(8));
        assert!(!limits.contains_buffer(9));
        assert!(limits.contains_sequence(2));
        assert!(!limits.contains_sequence(3));
    }
}
