use core::fmt;

use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore, UpdateCore,
    },
    crypto_common::{Block, BlockSizeUser},
    typenum::{U128, U32, U64},
    HashMarker, Output, OutputSizeUser, Reset,
};

use byteorder::{ByteOrder, LittleEndian};

use crate::compress::{Compressor, Register, KUPYNA_256, KUPYNA_512, MAX_BLOCK_SIZE};
use crate::kupyna::LENGTH_FIELD_SIZE;

macro_rules! kupyna_core {
    ($name:ident, $config:ident, $block:ty, $output:ty, $alg:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name {
            h: Register, // chaining value (from last compression, or IV)
            len: u128,   // bytes compressed so far, buffered bytes excluded
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    h: $config.initial_state(),
                    len: 0,
                }
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                *self = Self::default();
            }
        }

        impl HashMarker for $name {}

        impl BlockSizeUser for $name {
            type BlockSize = $block;
        }

        impl BufferKindUser for $name {
            type BufferKind = Eager;
        }

        impl OutputSizeUser for $name {
            type OutputSize = $output;
        }

        impl UpdateCore for $name {
            fn update_blocks(&mut self, blocks: &[Block<Self>]) {
                for b in blocks {
                    self.len += b.len() as u128;
                    $config.compress(&mut self.h, b);
                }
            }
        }

        impl FixedOutputCore for $name {
            fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
                let bitlen = (self.len + buffer.get_pos() as u128) << 3; // number of input bits written
                let mut tmp = [0u8; 16];
                LittleEndian::write_u128(&mut tmp, bitlen);
                buffer.digest_pad(0x80, &tmp[..LENGTH_FIELD_SIZE], |b| {
                    $config.compress(&mut self.h, b)
                });

                $config.output_transform(&mut self.h);

                let b = $config.block_size();
                let mut full = [0u8; MAX_BLOCK_SIZE];
                LittleEndian::write_u64_into(&self.h[..$config.columns], &mut full[..b]);
                out.copy_from_slice(&full[b - $config.digest_size()..b]);
            }
        }

        impl AlgorithmName for $name {
            fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($alg)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!($alg, "Core { ... }"))
            }
        }
    };
}

kupyna_core!(
    Kupyna256Core,
    KUPYNA_256,
    U64,
    U32,
    "Kupyna256",
    "Kupyna256Core is the block-level Kupyna-256 implementation for the `digest` traits."
);

kupyna_core!(
    Kupyna512Core,
    KUPYNA_512,
    U128,
    U64,
    "Kupyna512",
    "Kupyna512Core is the block-level Kupyna-512 implementation for the `digest` traits."
);

/// Kupyna256Hasher is Kupyna-256 behind the `digest::Digest` API.
pub type Kupyna256Hasher = CoreWrapper<Kupyna256Core>;

/// Kupyna512Hasher is Kupyna-512 behind the `digest::Digest` API.
pub type Kupyna512Hasher = CoreWrapper<Kupyna512Core>;
