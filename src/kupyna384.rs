use crate::compress::KUPYNA_512;
use crate::error::Result;
use crate::kmac::Kmac;
use crate::truncated::{Truncated, Window};

/// The size in bytes of the Kupyna-384 checksum.
pub const DIGEST_SIZE: usize = 48;

/// Block size, in bytes, of the Kupyna-384 hash function.
pub const DIGEST_BLOCK_SIZE: usize = 128;

/// WINDOW keeps bytes 16..64 of the Kupyna-512 digest.
pub const WINDOW: Window = Window {
    start: 16,
    len: DIGEST_SIZE,
};

/// new returns a streaming Kupyna-384 hasher.
pub fn new() -> Truncated {
    Truncated::new(&KUPYNA_512, WINDOW)
}

/// hash returns the Kupyna-384 digest of `data`.
pub fn hash(data: &[u8]) -> Vec<u8> {
    new().update(data).digest()
}

/// kmac returns a KMAC-384 instance. The key must be 48 bytes long.
pub fn kmac(key: &[u8]) -> Result<Kmac<Truncated>> {
    Kmac::new(new(), key)
}
