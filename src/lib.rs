#![warn(missing_docs)]
//! A Rust implementation of the Kupyna hash function family, as standardized in
//! [`DSTU 7564:2014`], and its keyed message authentication code.
//!
//! Two state sizes are defined: a 512-bit state with 10 rounds for digests up to
//! 256 bits and a 1024-bit state with 14 rounds for digests up to 512 bits. The
//! 48, 304 and 384 bit variants are fixed windows of the full-width digests.
//!
//! Every hasher is a plain value: `digest` never consumes it and `clone` gives an
//! independent copy, so a common prefix can be hashed once and finished many ways.
//!
//! # Example
//! ```
//! use kupyna::{kupyna256, kupyna512};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let mut h = kupyna256::new();
//!   h.update("hello ".as_bytes());
//!   h.update("world".as_bytes());
//!   println!("Result: {}", hex::encode(h.digest()));
//!   assert_eq!(h.digest(), kupyna256::hash("hello world".as_bytes()));
//!
//!   let key = [0x42; 64];
//!   let tag = kupyna512::kmac(&key)?.update("hello world".as_bytes()).digest();
//!   assert_eq!(tag.len(), 64);
//!
//!   Ok(())
//! }
//! ```
//!
//! [`DSTU 7564:2014`]: https://eprint.iacr.org/2015/885.pdf
/// `compress` holds the P and Q permutations and the compression function.
pub mod compress;
/// `core_api` exposes the 256 and 512 bit variants through the RustCrypto `digest` traits.
pub mod core_api;
/// `error` is the error type of the keyed constructions.
pub mod error;
/// `kmac` is the Kupyna keyed message authentication code.
pub mod kmac;
/// `kupyna` is the streaming hasher shared by every variant.
pub mod kupyna;
/// `kupyna48` is the 48-bit truncation of Kupyna-256.
pub mod kupyna48;
/// `kupyna256` is Kupyna with a 32 byte (256 bit) output.
pub mod kupyna256;
/// `kupyna304` is the 304-bit truncation of Kupyna-512.
pub mod kupyna304;
/// `kupyna384` is the 384-bit truncation of Kupyna-512.
pub mod kupyna384;
/// `kupyna512` is Kupyna with a 64 byte (512 bit) output.
pub mod kupyna512;
/// `tables` holds the S-boxes and the fused substitution/diffusion lookup tables.
pub mod tables;
/// `truncated` derives non-standard output widths from a full-width digest.
pub mod truncated;

pub use core_api::{Kupyna256Core, Kupyna256Hasher, Kupyna512Core, Kupyna512Hasher};
pub use error::{Error, Result};
pub use kmac::Kmac;
pub use kupyna::Kupyna;
pub use truncated::Truncated;
