//! This module captures everything that depends on the choice of parameter set.  A
//! `ParameterSet` fixes the prime `p = 2^eA * 3^eB - 1`, the sizes of every fixed-width
//! object (as `typenum` sizes, so that buffers live on the stack), the Montgomery constants,
//! and the addition-chain tables used for field inversion.
//!
//! Parameter sets are types rather than values: every arithmetic object is generic over one,
//! so mixing elements of two parameter sets is rejected by the compiler.

use core::fmt::Debug;
use hybrid_array::{Array, ArraySize};

/// A `ParameterSet` describes one instance of SIKE.  There are four standard instances,
/// corresponding to four different security levels.
pub trait ParameterSet: Default + Clone + Debug + PartialEq + 'static {
    /// Number of 64-bit words in a base field element, `ceil(bitlen(p) / 64)`
    type Words: ArraySize;

    /// Twice `Words`: the size of an unreduced product
    type DoubleWords: ArraySize;

    /// Size of an encoded base field element, `ceil(bitlen(p) / 8)`
    type FpBytes: ArraySize;

    /// Twice `FpBytes`: the size of an encoded quadratic extension element
    type Fp2Bytes: ArraySize;

    /// Size of an encoded private scalar (large enough for either party)
    type ScalarBytes: ArraySize;

    /// Size of a plaintext message and of the rejection seed
    type MessageBytes: ArraySize;

    /// Size of the shared key produced by encapsulation
    type SharedKeyBytes: ArraySize;

    /// Exponent of 2 in `p + 1`
    const EA: u32;

    /// Exponent of 3 in `p + 1`
    const EB: u32;

    /// Bit length of Alice's private scalars (`eA`)
    const ALICE_SCALAR_BITS: u32;

    /// Bit length of Bob's private scalars (`floor(log2(3^eB))`)
    const BOB_SCALAR_BITS: u32;

    /// The prime `p`, little-endian words
    const PRIME: Array<u64, Self::Words>;

    /// `2 * p`, little-endian words
    const PRIME_X2: Array<u64, Self::Words>;

    /// `R mod p` with `R = 2^(64 * Words)`, i.e. one in Montgomery representation
    const MONT_ONE: Array<u64, Self::Words>;

    /// `R^2 mod p`, used to enter the Montgomery domain
    const MONT_R2: Array<u64, Self::Words>;

    /// `-p^-1 mod 2^64`
    const MONT_PINV: u64;

    /// Index into the odd-power table of the starting value of the inversion chain
    const INITIAL_MUL: usize;

    /// Number of squarings before each multiplication of the inversion chain
    const POW_STRATEGY: &'static [u8];

    /// Odd-power table index multiplied in after each run of squarings
    const MUL_STRATEGY: &'static [u8];
}

/// Number of odd powers `a^1, a^3, ..., a^31` precomputed for the inversion chain.
pub(crate) const POWER_TABLE_SIZE: usize = 16;

/// An encoded base field element
pub type FpEncoding<P> = Array<u8, <P as ParameterSet>::FpBytes>;

/// An encoded quadratic extension field element
pub type Fp2Encoding<P> = Array<u8, <P as ParameterSet>::Fp2Bytes>;

/// An encoded private scalar
pub type ScalarEncoding<P> = Array<u8, <P as ParameterSet>::ScalarBytes>;

/// A plaintext message, or a rejection seed
pub type Message<P> = Array<u8, <P as ParameterSet>::MessageBytes>;

/// A shared key resulting from a SIKE transaction
pub type SharedKey<P> = Array<u8, <P as ParameterSet>::SharedKeyBytes>;
