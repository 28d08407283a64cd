//! SIKEp610: `p = 2^305 * 3^192 - 1`, the parameter set for NIST security category 3.

use crate::param::ParameterSet;
use hybrid_array::{
    Array,
    typenum::{U10, U20, U24, U39, U77, U154},
};

/// `SikeP610Params` is the parameter set for security category 3.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct SikeP610Params;

impl ParameterSet for SikeP610Params {
    type Words = U10;
    type DoubleWords = U20;
    type FpBytes = U77;
    type Fp2Bytes = U154;
    type ScalarBytes = U39;
    type MessageBytes = U24;
    type SharedKeyBytes = U24;

    const EA: u32 = 305;
    const EB: u32 = 192;
    const ALICE_SCALAR_BITS: u32 = 305;
    const BOB_SCALAR_BITS: u32 = 304;

    const PRIME: Array<u64, U10> = Array([
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0x6E01FFFFFFFFFFFF,
        0xB1784DE8AA5AB02E,
        0x9AE7BF45048FF9AB,
        0xB255B2FA10C4252A,
        0x819010C251E7D88C,
        0x000000027BF6A768,
    ]);

    const PRIME_X2: Array<u64, U10> = Array([
        0xFFFFFFFFFFFFFFFE,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xDC03FFFFFFFFFFFF,
        0x62F09BD154B5605C,
        0x35CF7E8A091FF357,
        0x64AB65F421884A55,
        0x03202184A3CFB119,
        0x00000004F7ED4ED1,
    ]);

    const MONT_ONE: Array<u64, U10> = Array([
        0x00000000670CC8E6,
        0x0000000000000000,
        0x0000000000000000,
        0x0000000000000000,
        0x9A34000000000000,
        0x4D99C2BD28717A3F,
        0x0A4A1839A323D41C,
        0xD2B62215D06AD1E2,
        0x1369026E862CAF3D,
        0x000000010894E964,
    ]);

    const MONT_R2: Array<u64, U10> = Array([
        0xE75F5D201A197727,
        0xE0B85963B627392E,
        0x6BC1707818DE493D,
        0xDC7F419940D1A0C5,
        0x7358030979EDE54A,
        0x84F4BEBDEED75A5C,
        0x7ECCA66E13427B47,
        0xC5BB4E65280080B3,
        0x7019950F516DA19A,
        0x000000008E290FF3,
    ]);

    const MONT_PINV: u64 = 0x0000000000000001;

    const INITIAL_MUL: usize = 9;

    #[rustfmt::skip]
    const POW_STRATEGY: &'static [u8] = &[
        5, 4, 5, 6, 4, 6, 11, 8, 6, 8, 6, 3, 7, 3, 8, 4, 6, 7, 6, 7,
        4, 5, 6, 4, 8, 5, 6, 6, 4, 6, 6, 3, 6, 9, 8, 4, 6, 6, 3, 8,
        1, 9, 5, 6, 6, 6, 6, 1, 11, 7, 1, 13, 5, 5, 5, 5, 5, 5, 5, 5,
        5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
        5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
        5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3,
    ];

    #[rustfmt::skip]
    const MUL_STRATEGY: &'static [u8] = &[
        13, 7, 6, 9, 5, 8, 12, 0, 1, 4, 8, 3, 15, 1, 8, 4, 12, 10, 13, 11,
        6, 0, 1, 0, 4, 4, 10, 6, 3, 7, 15, 2, 2, 4, 15, 7, 6, 11, 1, 11,
        0, 9, 7, 8, 10, 5, 10, 0, 11, 13, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15,
        15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
        15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
        15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 3,
    ];
}

/// An element of the base field of SIKEp610.
pub type Fp = crate::Fp<SikeP610Params>;

/// An element of the quadratic extension field of SIKEp610.
pub type Fp2 = crate::Fp2<SikeP610Params>;

/// A Montgomery curve over the quadratic extension field of SIKEp610.
pub type MontgomeryCurve = crate::MontgomeryCurve<SikeP610Params>;

/// A projective x-only point over the quadratic extension field of SIKEp610.
pub type ProjectivePoint = crate::ProjectivePoint<SikeP610Params>;
