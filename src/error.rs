/// Error is returned by the keyed constructions of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The KMAC key must be exactly as long as the digest of the underlying hash.
    #[error("invalid key length: want {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// expected is the required key length in bytes.
        expected: usize,
        /// actual is the length of the key that was supplied.
        actual: usize,
    },
}

/// Result is the crate's result type.
pub type Result<T> = std::result::Result<T, Error>;
