//! SIKEp434: `p = 2^216 * 3^137 - 1`, the parameter set for NIST security category 1.

use crate::param::ParameterSet;
use hybrid_array::{
    Array,
    typenum::{U7, U14, U16, U28, U55, U110},
};

/// `SikeP434Params` is the parameter set for security category 1.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct SikeP434Params;

impl ParameterSet for SikeP434Params {
    type Words = U7;
    type DoubleWords = U14;
    type FpBytes = U55;
    type Fp2Bytes = U110;
    type ScalarBytes = U28;
    type MessageBytes = U16;
    type SharedKeyBytes = U16;

    const EA: u32 = 216;
    const EB: u32 = 137;
    const ALICE_SCALAR_BITS: u32 = 216;
    const BOB_SCALAR_BITS: u32 = 217;

    const PRIME: Array<u64, U7> = Array([
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFDC1767AE2FFFFFF,
        0x7BC65C783158AEA3,
        0x6CFC5FD681C52056,
        0x0002341F27177344,
    ]);

    const PRIME_X2: Array<u64, U7> = Array([
        0xFFFFFFFFFFFFFFFE,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFB82ECF5C5FFFFFF,
        0xF78CB8F062B15D47,
        0xD9F8BFAD038A40AC,
        0x0004683E4E2EE688,
    ]);

    const MONT_ONE: Array<u64, U7> = Array([
        0x000000000000742C,
        0x0000000000000000,
        0x0000000000000000,
        0xB90FF404FC000000,
        0xD801A4FB559FACD4,
        0xE93254545F77410C,
        0x0000ECEEA7BD2EDA,
    ]);

    const MONT_R2: Array<u64, U7> = Array([
        0x28E55B65DCD69B30,
        0xACEC7367768798C2,
        0xAB27973F8311688D,
        0x175CC6AF8D6C7C0B,
        0xABCD92BF2DDE347E,
        0x69E16A61C7686D9A,
        0x000025A89BCDD12A,
    ]);

    const MONT_PINV: u64 = 0x0000000000000001;

    const INITIAL_MUL: usize = 8;

    #[rustfmt::skip]
    const POW_STRATEGY: &'static [u8] = &[
        3, 10, 7, 5, 6, 5, 3, 8, 4, 7, 5, 6, 4, 5, 9, 6, 3, 11, 5, 5,
        2, 8, 4, 7, 7, 8, 5, 6, 4, 8, 5, 2, 10, 6, 5, 4, 8, 5, 5, 5,
        5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
        5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 1,
    ];

    #[rustfmt::skip]
    const MUL_STRATEGY: &'static [u8] = &[
        2, 15, 9, 8, 14, 12, 2, 8, 5, 15, 8, 15, 6, 6, 3, 2, 0, 10, 9, 13,
        1, 12, 3, 7, 1, 10, 8, 11, 2, 15, 14, 1, 11, 12, 14, 3, 11, 15, 15, 15,
        15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
        15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0,
    ];
}

/// An element of the base field of SIKEp434.
pub type Fp = crate::Fp<SikeP434Params>;

/// An element of the quadratic extension field of SIKEp434.
pub type Fp2 = crate::Fp2<SikeP434Params>;

/// A Montgomery curve over the quadratic extension field of SIKEp434.
pub type MontgomeryCurve = crate::MontgomeryCurve<SikeP434Params>;

/// A projective x-only point over the quadratic extension field of SIKEp434.
pub type ProjectivePoint = crate::ProjectivePoint<SikeP434Params>;
