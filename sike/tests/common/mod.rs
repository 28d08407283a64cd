//! A stand-in for the isogeny walk: Diffie-Hellman in the multiplicative group of GF(p^2).
//!
//! The public key for a scalar `k` is `g^k` with `g = 3 + 5i`, and the shared value between `k`
//! and a peer key `h` is `h^k`.  That is enough structure for the encryption and encapsulation
//! layers to round-trip, and it runs every GF(p^2) operation on the way.

#![allow(dead_code)]

use core::marker::PhantomData;
use sike::{EncodedSizeUser, Encoded, Error, Fp, Fp2, IsogenyEngine, ParameterSet, Scalar};
use subtle::ConstantTimeEq;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupEngine<P: ParameterSet>(PhantomData<P>);

#[derive(Clone, Debug, PartialEq)]
pub struct GroupPublicKey<P: ParameterSet>(pub Fp2<P>);

impl<P: ParameterSet> EncodedSizeUser for GroupPublicKey<P> {
    type EncodedSize = P::Fp2Bytes;

    fn from_bytes(enc: &Encoded<Self>) -> Result<Self, Error> {
        Option::<Fp2<P>>::from(Fp2::from_bytes(enc))
            .map(Self)
            .ok_or(Error::InvalidParameter)
    }

    fn as_bytes(&self) -> Encoded<Self> {
        self.0.to_bytes()
    }
}

/// Left-to-right square-and-multiply over the little-endian scalar bytes.
pub fn exp<P: ParameterSet>(base: &Fp2<P>, scalar: &Scalar<P>) -> Fp2<P> {
    let mut acc = Fp2::one();
    for byte in scalar.as_bytes().iter().rev() {
        for bit in (0..8).rev() {
            acc = acc.square();
            let mut t = &acc * base;
            acc.conditional_swap(&mut t, ((byte >> bit) & 1).ct_eq(&1));
        }
    }
    acc
}

pub fn generator<P: ParameterSet>() -> Fp2<P> {
    Fp2::new(Fp::from_u64(3), Fp::from_u64(5))
}

impl<P: ParameterSet> IsogenyEngine for GroupEngine<P> {
    type Params = P;
    type PublicKey = GroupPublicKey<P>;

    fn public_key(scalar: &Scalar<P>) -> GroupPublicKey<P> {
        GroupPublicKey(exp(&generator(), scalar))
    }

    fn shared_secret(scalar: &Scalar<P>, peer: &GroupPublicKey<P>) -> Fp2<P> {
        exp(&peer.0, scalar)
    }
}
