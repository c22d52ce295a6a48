//! Pack and unpack big-endian binary buffers.
//!
//! # Overview
//!
//! A small, bounds-checked binary buffer designed to:
//! - Append fixed-width integers, padding, nested buffers and sequences to a [ByteStore]
//! - Parse untrusted input back out of a byte region, failing cleanly on truncation
//!
//! # Format
//!
//! Everything is written in network (big-endian) byte order:
//! - Integers (`u8`..`u64`, `i8`..`i64`): 1, 2, 4 or 8 bytes, most significant byte first
//! - [Padding]: `n` zero bytes
//! - Nested buffers ([ByteStore]): a 4-byte length followed by the raw bytes
//! - Sequences (`Vec<T>` where `T` is [FixedSize]): a 2-byte count followed by each element
//!
//! # Failure
//!
//! Every read on an [Unpacker] is all-or-nothing: if the remaining input cannot satisfy the
//! read, it returns [Error::OutOfRange] and the cursor does not move. A failed read can
//! therefore be retried with a different type over the same bytes.
//!
//! # Example
//!
//! ```
//! use commonware_buffer::{ByteStore, Error};
//!
//! let mut packed = ByteStore::new();
//! packed
//!     .pack()
//!     .u64(0xdeadbeefcafebabe)
//!     .u16(0xface)
//!     .pad(2)
//!     .buffer(b"payload");
//! assert_eq!(packed.size(), 8 + 2 + 2 + 4 + 7);
//!
//! let (mut a, mut b, mut payload) = (0u64, 0u16, ByteStore::new());
//! let mut up = packed.unpack();
//! up.read(&mut a)?.read(&mut b)?.skip(2)?.read(&mut payload)?;
//! assert_eq!(a, 0xdeadbeefcafebabe);
//! assert_eq!(b, 0xface);
//! assert_eq!(payload, ByteStore::from("payload"));
//! assert_eq!(up.remain(), 0);
//!
//! // Nothing is left, so any further read fails without moving the cursor.
//! assert!(matches!(up.u8(), Err(Error::OutOfRange { needed: 1, remaining: 0 })));
//! # Ok::<(), Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod pack;
pub mod store;
pub mod unpack;

// Re-export main types and traits
pub use codec::{FixedSize, Pack, Unpack};
pub use config::Limits;
pub use error::Error;
pub use pack::{Packer, Padding};
pub use store::ByteStore;
pub use unpack::Unpacker;

/// Converts bytes to a lowercase hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push(DIGITS[(byte >> 4) as usize] as char);
        hex.push(DIGITS[(byte & 0x0f) as usize] as char);
    }
    hex
}

/// Converts a hexadecimal string (either case, no prefix) to bytes.
///
/// Returns `None` if the string has an odd length or contains a non-hex character.
pub fn from_hex(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.as_bytes();
    if hex.len() % 2 != 0 {
        return None;
    }
    hex.chunks_exact(2)
        .map(|pair| Some((nibble(pair[0])? << 4) | nibble(pair[1])?))
        .collect()
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        // Test case 0: empty bytes
        let b = &[];
        let h = hex(b);
        assert_eq!(h, "");
        assert_eq!(from_hex(&h).unwrap(), b.to_vec());

        // Test case 1: single byte
        let b = &[0x01];
        let h = hex(b);
        assert_eq!(h, "01");
        assert_eq!(from_hex(&h).unwrap(), b.to_vec());

        // Test case 2: every nibble position
        let b = &[0xde, 0xad, 0xbe, 0xef];
        let h = hex(b);
        assert_eq!(h, "deadbeef");
        assert_eq!(from_hex(&h).unwrap(), b.to_vec());

        // Test case 3: leading zeros are kept
        let h = hex(&[0x00, 0xff, 0x0f, 0xf0]);
        assert_eq!(h, "00ff0ff0");
    }

    #[test]
    fn test_from_hex_invalid() {
        // Odd number of characters
        assert!(from_hex("0102030").is_none());

        // Invalid hexadecimal character
        assert!(from_hex("01g3").is_none());

        // Sign characters are not digits
        assert!(from_hex("+1").is_none());

        // Multi-byte characters never split a pair
        assert!(from_hex("é0").is_none());

        // Uppercase is accepted
        assert_eq!(from_hex("DEADBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }
}
