use crate::compress::{Compressor, Register, VariantConfig, MAX_BLOCK_SIZE};
use byteorder::{ByteOrder, LittleEndian};
use std::{fmt, io};

/// Size in bytes of the message bit-length field written at finalization.
pub const LENGTH_FIELD_SIZE: usize = 12;

/// Kupyna is the streaming hasher shared by every variant, parameterized by its state size.
///
/// A partial block is kept in `x` until it fills; full blocks of the input are
/// compressed straight from the caller's slice. Cloning copies the whole state.
///
/// The length counter is 128 bits but only 96 bits of bit length are encoded, so
/// messages are limited to `2^93 - 1` bytes.
#[derive(Clone)]
pub struct Kupyna {
    config: &'static VariantConfig,

    h: Register,              // chaining value (from last compression, or IV)
    x: [u8; MAX_BLOCK_SIZE],  // data written since last compression
    nx: usize,                // number of input bytes written since last compression
    len: u128,                // total number of input bytes written overall
}

impl Kupyna {
    /// new returns a hasher for the given state size with an empty message.
    pub fn new(config: &'static VariantConfig) -> Self {
        Kupyna {
            config,
            h: config.initial_state(),
            x: [0; MAX_BLOCK_SIZE],
            nx: 0,
            len: 0,
        }
    }

    /// reset discards everything written so far.
    pub fn reset(&mut self) {
        self.h = self.config.initial_state();
        self.x = [0; MAX_BLOCK_SIZE];
        self.nx = 0;
        self.len = 0;
    }

    /// size returns the digest length in bytes.
    pub fn size(&self) -> usize {
        self.config.digest_size()
    }

    /// block_size returns the input block length in bytes.
    pub fn block_size(&self) -> usize {
        self.config.block_size()
    }

    /// config returns the state parameters this hasher runs with.
    pub fn config(&self) -> &'static VariantConfig {
        self.config
    }

    /// update absorbs `p`. Returns `self` so calls can be chained.
    pub fn update(&mut self, mut p: &[u8]) -> &mut Self {
        let b = self.block_size();
        self.len += p.len() as u128;

        if self.nx > 0 {
            // continue with existing buffer, if nonempty
            let n = p.len().min(b - self.nx);
            self.x[self.nx..self.nx + n].copy_from_slice(&p[..n]);
            self.nx += n;
            if self.nx == b {
                self.config.compress(&mut self.h, &self.x[..b]);
                self.nx = 0;
            }
            p = &p[n..];
        }

        // handle any remaining full input blocks
        let mut blocks = p.chunks_exact(b);
        for block in &mut blocks {
            self.config.compress(&mut self.h, block);
        }
        p = blocks.remainder();

        if !p.is_empty() {
            self.x[..p.len()].copy_from_slice(p);
            self.nx = p.len();
        }

        self
    }

    /// digest returns the hash of everything written so far. The hasher itself is left
    /// untouched and can keep absorbing.
    pub fn digest(&self) -> Vec<u8> {
        // Make a copy so that caller can keep writing and summing.
        let mut d0 = self.clone();
        d0.check_sum()
    }

    fn check_sum(&mut self) -> Vec<u8> {
        let b = self.block_size();
        let threshold = b - LENGTH_FIELD_SIZE;
        let bitlen = self.len << 3; // number of input bits written

        // Padding. A single 1 bit (0x80, since bytes are read little-endian) then zeros.
        self.x[self.nx] = 0x80;
        self.nx += 1;
        self.x[self.nx..b].iter_mut().for_each(|v| *v = 0);

        if self.nx > threshold {
            tracing::trace!(pending = self.nx, block_size = b, "length field spills into a new block");
            self.config.compress(&mut self.h, &self.x[..b]);
            self.x[..b].iter_mut().for_each(|v| *v = 0);
        }
        self.nx = 0;

        // Length in bits, 96 bits little-endian.
        let mut tmp = [0u8; 16];
        LittleEndian::write_u128(&mut tmp, bitlen);
        self.x[threshold..b].copy_from_slice(&tmp[..LENGTH_FIELD_SIZE]);
        self.config.compress(&mut self.h, &self.x[..b]);

        self.config.output_transform(&mut self.h);

        let mut out = vec![0u8; b];
        LittleEndian::write_u64_into(&self.h[..self.config.columns], &mut out);
        out.split_off(b - self.size())
    }
}

// The buffer may hold key material when the hasher runs inside a MAC.
impl fmt::Debug for Kupyna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kupyna")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

impl io::Write for Kupyna {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
