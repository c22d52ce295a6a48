//! Error types for unpacking operations

use thiserror::Error;

/// Error type for unpacking operations.
///
/// Packing never fails, so every variant describes input that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("out of range: needed {needed} bytes, {remaining} remaining")]
    OutOfRange { needed: usize, remaining: usize },
    #[error("length exceeded: {0} > {1}")]
    LengthExceeded(usize, usize), // found, max
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
}
