use crate::compress::KUPYNA_512;
use crate::truncated::{Truncated, Window};

/// The size in bytes of the Kupyna-304 checksum.
pub const DIGEST_SIZE: usize = 38;

/// Block size, in bytes, of the Kupyna-304 hash function.
pub const DIGEST_BLOCK_SIZE: usize = 128;

/// WINDOW keeps the last 38 bytes of the Kupyna-512 digest.
pub const WINDOW: Window = Window {
    start: 64 - DIGEST_SIZE,
    len: DIGEST_SIZE,
};

/// new returns a streaming Kupyna-304 hasher.
pub fn new() -> Truncated {
    Truncated::new(&KUPYNA_512, WINDOW)
}

/// hash returns the Kupyna-304 digest of `data`.
pub fn hash(data: &[u8]) -> Vec<u8> {
    new().update(data).digest()
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::kupyna512;
    use proptest::prelude::*;

    #[test]
    fn test_vector() {
        let input: Vec<u8> = (0..128u8).collect();
        assert_eq!(
            hex::encode_upper(hash(&input)),
            "0A8CADA32B979635657F256B15D5FCA4A174DE029F0B1B4387C878FCC1C00E8705D783FD7FFE"
        );
    }

    #[test]
    fn sizes() {
        let h = new();
        assert_eq!(h.size(), DIGEST_SIZE);
        assert_eq!(h.block_size(), DIGEST_BLOCK_SIZE);
    }

    proptest! {
        #[test]
        fn tail_of_kupyna512(msg in prop::collection::vec(any::<u8>(), 0..400)) {
            prop_assert_eq!(hash(&msg), kupyna512::hash(&msg)[26..].to_vec());
        }
    }
}
