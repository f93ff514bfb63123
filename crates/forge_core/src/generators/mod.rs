//! Concrete generator algorithms.
//!
//! Each generator is a deterministic state machine implementing
//! [`Generator`](crate::traits::Generator):
//!
//! | Generator | Word | State |
//! |---|---|---|
//! | [`XorShift`] | `u32` / `u64` | one word |
//! | [`Lfsr`] | `u32` / `u64` | two 64-bit registers |
//! | [`MersenneTwister`] | `u32` / `u64` | `n`-word vector |
//! | [`BlumBlumShub`] | `u32` / `u64` | 128-bit residue |
//! | [`NaorReingold`] | `u32` | one word |
//!
//! None of these is suitable for cryptographic use.

pub mod blum_blum_shub;
pub mod lfsr;
pub mod mersenne;
pub mod naor_reingold;
pub mod xorshift;

pub use blum_blum_shub::{BbsParams, BlumBlumShub, BlumBlumShub32, BlumBlumShub64, Extraction};
pub use lfsr::{Lfsr, Lfsr32, Lfsr64};
pub use mersenne::{MersenneTwister, MersenneTwister32, MersenneTwister64, MtParams, MtWord};
pub use naor_reingold::{NaorReingold, NaorReingoldParams};
pub use xorshift::{XorShift, XorShift32, XorShift64, XorShiftParams};

/// Multiplier applied to XORShift and LFSR outputs for avalanche.
pub const OUTPUT_MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;
