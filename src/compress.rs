use byteorder::{ByteOrder, LittleEndian};

use crate::tables::{LookupTable, TABLES};

/// Widest state, in 64-bit columns, of any Kupyna variant.
pub const MAX_COLUMNS: usize = 16;

/// Largest block, in bytes, of any Kupyna variant.
pub const MAX_BLOCK_SIZE: usize = MAX_COLUMNS * 8;

/// Register is the chaining value. Only the first `columns` words are used.
pub type Register = [u64; MAX_COLUMNS];

// Additive round-constant base for Q.
const Q_MASK: u64 = 0x00F0_F0F0_F0F0_F0F3;

/// VariantConfig holds the fixed parameters of a Kupyna state size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantConfig {
    /// columns is the number of 64-bit words in the state.
    pub columns: usize,
    /// rounds is the number of rounds of P and Q. Always even.
    pub rounds: usize,
    /// offsets selects, per byte lane, how far back the source column is shifted.
    pub offsets: [usize; 8],
    /// digest_size is the output length in bytes, half the state.
    pub digest_size: usize,
}

/// KUPYNA_256 is the 512-bit state used for outputs up to 256 bits.
pub const KUPYNA_256: VariantConfig = VariantConfig {
    columns: 8,
    rounds: 10,
    offsets: [0, 1, 2, 3, 4, 5, 6, 7],
    digest_size: 32,
};

/// KUPYNA_512 is the 1024-bit state used for outputs up to 512 bits.
pub const KUPYNA_512: VariantConfig = VariantConfig {
    columns: 16,
    rounds: 14,
    offsets: [0, 1, 2, 3, 4, 5, 6, 11],
    digest_size: 64,
};

impl VariantConfig {
    /// initial_state returns the IV: all zero except the block length in the low byte of word 0.
    pub fn initial_state(&self) -> Register {
        let mut h = [0u64; MAX_COLUMNS];
        h[0] = self.block_size() as u64;
        h
    }
}

/// Compressor represents the compression function which is performed on a message.
pub trait Compressor {
    /// block_size returns the length in bytes of one input block (the state width).
    fn block_size(&self) -> usize;
    /// digest_size returns the length in bytes of the full-width digest.
    fn digest_size(&self) -> usize;
    /// compress absorbs one block of `block_size` bytes into the chaining value `h`.
    fn compress(&self, h: &mut [u64], block: &[u8]);
    /// output_transform applies the final P whitening to `h`.
    fn output_transform(&self, h: &mut [u64]);
}

impl Compressor for VariantConfig {
    fn block_size(&self) -> usize {
        self.columns * 8
    }

    fn digest_size(&self) -> usize {
        self.digest_size
    }

    fn compress(&self, h: &mut [u64], block: &[u8]) {
        let n = self.columns;
        debug_assert_eq!(block.len(), self.block_size());
        debug_assert!(h.len() >= n);

        let t = &*TABLES;
        let mut m = [0u64; MAX_COLUMNS];
        LittleEndian::read_u64_into(block, &mut m[..n]);

        let mut ap = [0u64; MAX_COLUMNS];
        (0..n).for_each(|i| ap[i] = h[i] ^ m[i]);
        let mut aq = m;

        self.permute_p(t, &mut ap[..n]);
        self.permute_q(t, &mut aq[..n]);

        (0..n).for_each(|i| h[i] ^= ap[i] ^ aq[i]);
    }

    fn output_transform(&self, h: &mut [u64]) {
        let n = self.columns;
        let mut tmp = [0u64; MAX_COLUMNS];
        tmp[..n].copy_from_slice(&h[..n]);

        self.permute_p(&TABLES, &mut tmp[..n]);

        (0..n).for_each(|i| h[i] ^= tmp[i]);
    }
}

impl VariantConfig {
    /// permute_p runs the XOR-keyed permutation over `x` in place.
    pub fn permute_p(&self, t: &LookupTable, x: &mut [u64]) {
        let mut y = [0u64; MAX_COLUMNS];
        let y = &mut y[..self.columns];
        for round in (0..self.rounds as u64).step_by(2) {
            x.iter_mut()
                .enumerate()
                .for_each(|(i, w)| *w ^= ((i as u64) << 4) ^ round);
            self.g1(t, x, y, round + 1);
            self.g(t, y, x);
        }
    }

    /// permute_q runs the additively keyed permutation over `x` in place.
    pub fn permute_q(&self, t: &LookupTable, x: &mut [u64]) {
        let mut y = [0u64; MAX_COLUMNS];
        let y = &mut y[..self.columns];
        for round in (0..self.rounds as u64).step_by(2) {
            x.iter_mut()
                .enumerate()
                .for_each(|(i, w)| *w = w.wrapping_add(self.q_constant(i, round)));
            self.g2(t, x, y, round + 1);
            self.g(t, y, x);
        }
    }

    fn q_constant(&self, i: usize, round: u64) -> u64 {
        let top = (((self.columns - 1 - i) as u64) * 16) ^ round;
        Q_MASK ^ (top << 56)
    }

    // Substitution and diffusion for output column i: eight lanes, each read from a
    // cyclically offset input column and looked up in its own table.
    #[inline(always)]
    fn column(&self, t: &LookupTable, x: &[u64], i: usize) -> u64 {
        let n = self.columns;
        (0..8).fold(0u64, |acc, j| {
            let src = x[(i + n - self.offsets[j] % n) % n];
            acc ^ t[j][((src >> (8 * j)) & 0xff) as usize]
        })
    }

    fn g(&self, t: &LookupTable, x: &[u64], y: &mut [u64]) {
        y.iter_mut()
            .enumerate()
            .for_each(|(i, out)| *out = self.column(t, x, i));
    }

    fn g1(&self, t: &LookupTable, x: &[u64], y: &mut [u64], round: u64) {
        y.iter_mut()
            .enumerate()
            .for_each(|(i, out)| *out = self.column(t, x, i) ^ ((i as u64) << 4) ^ round);
    }

    fn g2(&self, t: &LookupTable, x: &[u64], y: &mut [u64], round: u64) {
        y.iter_mut().enumerate().for_each(|(i, out)| {
            *out = self.column(t, x, i).wrapping_add(self.q_constant(i, round))
        });
    }
}
