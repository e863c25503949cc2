use crate::compress::MAX_BLOCK_SIZE;
use crate::error::{Error, Result};
use crate::kupyna::{Kupyna, LENGTH_FIELD_SIZE};
use crate::truncated::Truncated;
use byteorder::{ByteOrder, LittleEndian};
use std::{fmt, io};

/// StreamingHash is what KMAC needs from the hash it is layered on.
pub trait StreamingHash: Clone {
    /// size returns the digest length in bytes.
    fn size(&self) -> usize;
    /// block_size returns the input block length in bytes.
    fn block_size(&self) -> usize;
    /// absorb feeds `p` into the hash.
    fn absorb(&mut self, p: &[u8]);
    /// finish returns the digest without consuming the hash state.
    fn finish(&self) -> Vec<u8>;
}

impl StreamingHash for Kupyna {
    fn size(&self) -> usize {
        Kupyna::size(self)
    }

    fn block_size(&self) -> usize {
        Kupyna::block_size(self)
    }

    fn absorb(&mut self, p: &[u8]) {
        self.update(p);
    }

    fn finish(&self) -> Vec<u8> {
        self.digest()
    }
}

impl StreamingHash for Truncated {
    fn size(&self) -> usize {
        Truncated::size(self)
    }

    fn block_size(&self) -> usize {
        Truncated::block_size(self)
    }

    fn absorb(&mut self, p: &[u8]) {
        self.update(p);
    }

    fn finish(&self) -> Vec<u8> {
        self.digest()
    }
}

// Delimiter byte followed by zeros; the message padding is cut from the front of it,
// and bytes 16..20 fill the top of the length field.
const PADDING: [u8; MAX_BLOCK_SIZE] = {
    let mut p = [0u8; MAX_BLOCK_SIZE];
    p[0] = 0x80;
    p
};

// key_padding returns the block that completes the key to a full block: the usual
// 0x80 delimiter, zeros, then the key length in bits in the last 12 bytes.
// Needs key_len + 12 <= block_size.
pub(crate) fn key_padding(block_size: usize, key_len: usize) -> Vec<u8> {
    let mut pad = vec![0u8; block_size - key_len];
    pad[0] = 0x80;
    let mut tmp = [0u8; 16];
    LittleEndian::write_u128(&mut tmp, (key_len as u128) << 3);
    let at = pad.len() - LENGTH_FIELD_SIZE;
    pad[at..].copy_from_slice(&tmp[..LENGTH_FIELD_SIZE]);
    pad
}

/// Kmac is the Kupyna keyed message authentication code.
///
/// The tag is `H(K || kpad || M || mpad || ~K)`, where `kpad` completes the key to a
/// block and `mpad` completes the message to a block boundary measured from the end
/// of the key block.
#[derive(Clone)]
pub struct Kmac<H: StreamingHash> {
    h: H,
    ik: Vec<u8>, // bitwise complement of the key, absorbed last
    len: u128,   // message bytes written, key material excluded
}

impl<H: StreamingHash> Kmac<H> {
    /// new keys a fresh hash `h`. The key must be exactly as long as the digest of `h`.
    pub fn new(mut h: H, key: &[u8]) -> Result<Self> {
        let expected = h.size();
        if key.len() != expected {
            tracing::debug!(expected, actual = key.len(), "rejecting kmac key");
            return Err(Error::InvalidKeyLength {
                expected,
                actual: key.len(),
            });
        }

        h.absorb(key);
        h.absorb(&key_padding(h.block_size(), key.len()));

        Ok(Kmac {
            h,
            ik: key.iter().map(|b| !b).collect(),
            len: 0,
        })
    }

    /// size returns the tag length in bytes.
    pub fn size(&self) -> usize {
        self.h.size()
    }

    /// update absorbs message bytes.
    pub fn update(&mut self, p: &[u8]) -> &mut Self {
        self.len += p.len() as u128;
        self.h.absorb(p);
        self
    }

    /// digest returns the tag over everything written so far. The MAC state itself is
    /// left untouched.
    pub fn digest(&self) -> Vec<u8> {
        let mut d0 = self.clone();
        d0.finalize()
    }

    fn finalize(&mut self) -> Vec<u8> {
        let b = self.h.block_size() as u128;
        let threshold = b - LENGTH_FIELD_SIZE as u128;
        let n = self.len;

        let pad_size = if n < threshold {
            threshold - 1 - n
        } else {
            (b - 1) - ((n - threshold) % b)
        };
        let pad_size = pad_size as usize;

        let mut bitlen = [0u8; 8];
        LittleEndian::write_u64(&mut bitlen, (n << 3) as u64);

        self.h.absorb(&PADDING[..pad_size + 1]);
        self.h.absorb(&bitlen);
        self.h.absorb(&PADDING[16..20]);
        self.h.absorb(&self.ik);
        self.h.finish()
    }
}

// Keyed state is never printed.
impl<H: StreamingHash> fmt::Debug for Kmac<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Kmac { ... }")
    }
}

impl<H: StreamingHash> io::Write for Kmac<H> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
