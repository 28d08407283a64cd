//! Private scalars for the two SIDH roles.  Alice's scalars walk the 2-power torsion and Bob's
//! the 3-power torsion, so each is masked to its own bit length.

use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};

use crate::crypto::rand;
use crate::param::{ParameterSet, ScalarEncoding};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The two roles in a SIDH exchange.  Alice walks 2-isogenies and Bob walks 3-isogenies, so
/// their private scalars have different sizes.  In the KEM, Bob holds the static key and every
/// ephemeral key belongs to Alice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Party {
    /// The 2-isogeny side
    Alice,
    /// The 3-isogeny side
    Bob,
}

impl Party {
    /// Number of bits in this party's private scalars.
    pub fn scalar_bits<P: ParameterSet>(self) -> u32 {
        match self {
            Party::Alice => P::ALICE_SCALAR_BITS,
            Party::Bob => P::BOB_SCALAR_BITS,
        }
    }
}

/// A private scalar, little-endian, with every bit above the party's scalar length cleared.
#[derive(Clone, Debug)]
pub struct Scalar<P: ParameterSet> {
    party: Party,
    bytes: ScalarEncoding<P>,
}

impl<P: ParameterSet> Scalar<P> {
    /// Sample a uniformly random scalar for `party`.
    pub fn random(party: Party, rng: &mut impl CryptoRngCore) -> Self {
        Self::from_bytes_masked(party, &rand(rng))
    }

    /// Interpret `bytes` as a scalar for `party`, reducing it modulo `2^bits`.
    pub fn from_bytes_masked(party: Party, bytes: &ScalarEncoding<P>) -> Self {
        let bits = party.scalar_bits::<P>() as usize;
        let full = bits / 8;

        let mut bytes = bytes.clone();
        for (i, b) in bytes.iter_mut().enumerate().skip(full) {
            let keep = if i == full { (1u8 << (bits % 8)) - 1 } else { 0 };
            *b &= keep;
        }
        Self { party, bytes }
    }

    /// The role this scalar belongs to.
    pub fn party(&self) -> Party {
        self.party
    }

    /// The masked little-endian encoding.
    pub fn as_bytes(&self) -> &ScalarEncoding<P> {
        &self.bytes
    }
}

impl<P: ParameterSet> ConstantTimeEq for Scalar<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_party = Choice::from(u8::from(self.party == other.party));
        same_party & self.bytes.as_slice().ct_eq(other.bytes.as_slice())
    }
}

impl<P: ParameterSet> PartialEq for Scalar<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

#[cfg(feature = "zeroize")]
impl<P: ParameterSet> Drop for Scalar<P> {
    fn drop(&mut self) {
        self.bytes.as_mut_slice().zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl<P: ParameterSet> ZeroizeOnDrop for Scalar<P> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{SikeP434Params, SikeP503Params, SikeP610Params, SikeP751Params};
    use hybrid_array::typenum::Unsigned;
    use rand::{SeedableRng, rngs::StdRng};

    fn bit_length(bytes: &[u8]) -> usize {
        bytes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, b)| **b != 0)
            .map_or(0, |(i, b)| 8 * i + 8 - b.leading_zeros() as usize)
    }

    fn masking_test<P: ParameterSet>() {
        let ones = ScalarEncoding::<P>::from_fn(|_| 0xff);
        for party in [Party::Alice, Party::Bob] {
            let s = Scalar::<P>::from_bytes_masked(party, &ones);
            assert_eq!(s.party(), party);
            assert_eq!(bit_length(s.as_bytes()), party.scalar_bits::<P>() as usize);
        }

        // Values already in range are untouched
        let mut small = ScalarEncoding::<P>::default();
        small[0] = 0x5a;
        small[P::ALICE_SCALAR_BITS as usize / 8 - 1] = 0x80;
        let s = Scalar::<P>::from_bytes_masked(Party::Alice, &small);
        assert_eq!(s.as_bytes(), &small);
    }

    fn random_test<P: ParameterSet>() {
        let mut rng = StdRng::seed_from_u64(30);
        for party in [Party::Alice, Party::Bob] {
            let a = Scalar::<P>::random(party, &mut rng);
            let b = Scalar::<P>::random(party, &mut rng);
            assert_ne!(a, b);
            assert!(bit_length(a.as_bytes()) <= party.scalar_bits::<P>() as usize);
            assert_eq!(a.as_bytes().len(), P::ScalarBytes::USIZE);
        }
    }

    #[test]
    fn masking() {
        masking_test::<SikeP434Params>();
        masking_test::<SikeP503Params>();
        masking_test::<SikeP610Params>();
        masking_test::<SikeP751Params>();
    }

    #[test]
    fn random() {
        random_test::<SikeP434Params>();
        random_test::<SikeP503Params>();
        random_test::<SikeP610Params>();
        random_test::<SikeP751Params>();
    }

    #[test]
    fn parties_differ() {
        let bytes = ScalarEncoding::<SikeP434Params>::default();
        let alice = Scalar::<SikeP434Params>::from_bytes_masked(Party::Alice, &bytes);
        let bob = Scalar::<SikeP434Params>::from_bytes_masked(Party::Bob, &bytes);
        assert_ne!(alice, bob);
    }
}
