use hybrid_array::{Array, ArraySize};
use rand_core::CryptoRngCore;
use sha3::{
    Shake256,
    digest::{ExtendableOutput, Update, XofReader},
};

pub(crate) fn rand<L: ArraySize>(rng: &mut impl CryptoRngCore) -> Array<u8, L> {
    let mut val = Array::default();
    rng.fill_bytes(&mut val);
    val
}

/// SHAKE256 over the concatenation of `inputs`, squeezed to `L` bytes.
pub(crate) fn shake256<L: ArraySize>(inputs: &[&[u8]]) -> Array<u8, L> {
    let mut h = Shake256::default();
    for x in inputs {
        h.update(x);
    }
    let mut r = h.finalize_xof();

    let mut out = Array::default();
    r.read(&mut out);
    out
}
