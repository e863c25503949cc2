use crate::compress::KUPYNA_256;
use crate::truncated::{Truncated, Window};

/// The size in bytes of the Kupyna-48 checksum.
pub const DIGEST_SIZE: usize = 6;

/// Block size, in bytes, of the Kupyna-48 hash function.
pub const DIGEST_BLOCK_SIZE: usize = 64;

/// WINDOW keeps the last 6 bytes of the Kupyna-256 digest.
pub const WINDOW: Window = Window {
    start: 32 - DIGEST_SIZE,
    len: DIGEST_SIZE,
};

/// new returns a streaming Kupyna-48 hasher.
pub fn new() -> Truncated {
    Truncated::new(&KUPYNA_256, WINDOW)
}

/// hash returns the Kupyna-48 digest of `data`.
pub fn hash(data: &[u8]) -> Vec<u8> {
    new().update(data).digest()
}
