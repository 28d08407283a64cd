//! SIKEp751: `p = 2^372 * 3^239 - 1`, the parameter set for NIST security category 5.

use crate::param::ParameterSet;
use hybrid_array::{
    Array,
    typenum::{U12, U24, U32, U48, U94, U188},
};

/// `SikeP751Params` is the parameter set for security category 5.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct SikeP751Params;

impl ParameterSet for SikeP751Params {
    type Words = U12;
    type DoubleWords = U24;
    type FpBytes = U94;
    type Fp2Bytes = U188;
    type ScalarBytes = U48;
    type MessageBytes = U32;
    type SharedKeyBytes = U32;

    const EA: u32 = 372;
    const EB: u32 = 239;
    const ALICE_SCALAR_BITS: u32 = 372;
    const BOB_SCALAR_BITS: u32 = 378;

    const PRIME: Array<u64, U12> = Array([
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xEEAFFFFFFFFFFFFF,
        0xE3EC968549F878A8,
        0xDA959B1A13F7CC76,
        0x084E9867D6EBE876,
        0x8562B5045CB25748,
        0x0E12909F97BADC66,
        0x00006FE5D541F71C,
    ]);

    const PRIME_X2: Array<u64, U12> = Array([
        0xFFFFFFFFFFFFFFFE,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xDD5FFFFFFFFFFFFF,
        0xC7D92D0A93F0F151,
        0xB52B363427EF98ED,
        0x109D30CFADD7D0ED,
        0x0AC56A08B964AE90,
        0x1C25213F2F75B8CD,
        0x0000DFCBAA83EE38,
    ]);

    const MONT_ONE: Array<u64, U12> = Array([
        0x00000000000249AD,
        0x0000000000000000,
        0x0000000000000000,
        0x0000000000000000,
        0x0000000000000000,
        0x8310000000000000,
        0x5527B1E4375C6C66,
        0x697797BF3F4F24D0,
        0xC89DB7B2AC5C4E2E,
        0x4CA4B439D2076956,
        0x10F7926C7512C7E9,
        0x00002D5B24BCE5E2,
    ]);

    const MONT_R2: Array<u64, U12> = Array([
        0x233046449DAD4058,
        0xDB010161A696452A,
        0x5E36941472E3FD8E,
        0xF40BFE2082A2E706,
        0x4932CCA8904F8751,
        0x1F735F1F1EE7FC81,
        0xA24F4D80C1048E18,
        0xB56C383CCDB607C5,
        0x441DD47B735F9C90,
        0x5673ED2C6A6AC82A,
        0x06C905261132294B,
        0x000041AD830F1F35,
    ]);

    const MONT_PINV: u64 = 0x0000000000000001;

    const INITIAL_MUL: usize = 13;

    #[rustfmt::skip]
    const POW_STRATEGY: &'static [u8] = &[
        5, 7, 6, 2, 10, 4, 6, 9, 8, 5, 9, 4, 7, 5, 5, 4, 8, 3, 9, 5,
        5, 4, 10, 4, 6, 6, 6, 5, 8, 9, 3, 4, 9, 4, 5, 6, 6, 2, 9, 4,
        5, 5, 5, 7, 7, 9, 4, 6, 4, 8, 5, 8, 6, 6, 2, 9, 7, 4, 8, 8,
        8, 4, 6, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
        5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
        5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
        5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 2,
    ];

    #[rustfmt::skip]
    const MUL_STRATEGY: &'static [u8] = &[
        15, 11, 10, 0, 15, 3, 3, 3, 4, 4, 9, 7, 11, 11, 5, 3, 12, 2, 10, 8,
        5, 2, 8, 3, 5, 4, 11, 4, 0, 9, 2, 1, 12, 7, 5, 14, 15, 0, 14, 5,
        6, 4, 5, 13, 6, 9, 7, 15, 1, 14, 11, 15, 12, 5, 0, 10, 9, 7, 7, 10,
        14, 6, 11, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
        15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
        15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
        15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 1,
    ];
}

/// An element of the base field of SIKEp751.
pub type Fp = crate::Fp<SikeP751Params>;

/// An element of the quadratic extension field of SIKEp751.
pub type Fp2 = crate::Fp2<SikeP751Params>;

/// A Montgomery curve over the quadratic extension field of SIKEp751.
pub type MontgomeryCurve = crate::MontgomeryCurve<SikeP751Params>;

/// A projective x-only point over the quadratic extension field of SIKEp751.
pub type ProjectivePoint = crate::ProjectivePoint<SikeP751Params>;
