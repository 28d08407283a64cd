//! SIKEp503: `p = 2^250 * 3^159 - 1`, the parameter set for NIST security category 2.

use crate::param::ParameterSet;
use hybrid_array::{
    Array,
    typenum::{U8, U16, U24, U32, U63, U126},
};

/// `SikeP503Params` is the parameter set for security category 2.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct SikeP503Params;

impl ParameterSet for SikeP503Params {
    type Words = U8;
    type DoubleWords = U16;
    type FpBytes = U63;
    type Fp2Bytes = U126;
    type ScalarBytes = U32;
    type MessageBytes = U24;
    type SharedKeyBytes = U24;

    const EA: u32 = 250;
    const EB: u32 = 159;
    const ALICE_SCALAR_BITS: u32 = 250;
    const BOB_SCALAR_BITS: u32 = 252;

    const PRIME: Array<u64, U8> = Array([
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xABFFFFFFFFFFFFFF,
        0x13085BDA2211E7A0,
        0x1B9BF6C87B7E7DAF,
        0x6045C6BDDA77A4D0,
        0x004066F541811E1E,
    ]);

    const PRIME_X2: Array<u64, U8> = Array([
        0xFFFFFFFFFFFFFFFE,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0x57FFFFFFFFFFFFFF,
        0x2610B7B44423CF41,
        0x3737ED90F6FCFB5E,
        0xC08B8D7BB4EF49A0,
        0x0080CDEA83023C3C,
    ]);

    const MONT_ONE: Array<u64, U8> = Array([
        0x00000000000003F9,
        0x0000000000000000,
        0x0000000000000000,
        0xB400000000000000,
        0x63CB1A6EA6DED2B4,
        0x51689D8D667EB37D,
        0x8ACD77C71AB24142,
        0x0026FBAEC60F5953,
    ]);

    const MONT_R2: Array<u64, U8> = Array([
        0x5289A0CF641D011F,
        0x9B88257189FED2B9,
        0xA3B365D58DC8F17A,
        0x5BC57AB6EFF168EC,
        0x9E51998BD84D4423,
        0xBF8999CBAC3B5695,
        0x46E9127BCE14CDB6,
        0x003F6CFCE8B81771,
    ]);

    const MONT_PINV: u64 = 0x0000000000000001;

    const INITIAL_MUL: usize = 0;

    #[rustfmt::skip]
    const POW_STRATEGY: &'static [u8] = &[
        12, 5, 5, 2, 7, 11, 3, 8, 4, 11, 4, 7, 5, 6, 3, 7, 5, 7, 2, 12,
        5, 6, 4, 6, 8, 6, 4, 7, 5, 5, 8, 5, 8, 5, 5, 8, 9, 3, 6, 2,
        10, 6, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
        5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
        5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3,
    ];

    #[rustfmt::skip]
    const MUL_STRATEGY: &'static [u8] = &[
        12, 11, 10, 0, 1, 8, 3, 7, 1, 8, 3, 6, 7, 14, 2, 14, 14, 9, 0, 13,
        9, 15, 5, 12, 7, 13, 7, 15, 6, 7, 9, 0, 5, 7, 6, 8, 8, 3, 7, 0,
        10, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
        15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
        15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 3,
    ];
}

/// An element of the base field of SIKEp503.
pub type Fp = crate::Fp<SikeP503Params>;

/// An element of the quadratic extension field of SIKEp503.
pub type Fp2 = crate::Fp2<SikeP503Params>;

/// A Montgomery curve over the quadratic extension field of SIKEp503.
pub type MontgomeryCurve = crate::MontgomeryCurve<SikeP503Params>;

/// A projective x-only point over the quadratic extension field of SIKEp503.
pub type ProjectivePoint = crate::ProjectivePoint<SikeP503Params>;
