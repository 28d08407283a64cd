//! The public-key encryption scheme underlying the KEM: a hashed-ElGamal construction over the
//! SIDH key exchange, where the shared j-invariant is expanded into a one-time pad.

use hybrid_array::{Array, typenum::Unsigned};
use rand_core::CryptoRngCore;

use crate::crypto::{rand, shake256};
use crate::fp2::Fp2;
use crate::param::{Message, ParameterSet, ScalarEncoding};
use crate::scalar::{Party, Scalar};
use crate::traits::{EncodedSizeUser, IsogenyEngine};
use crate::{Encoded, Error};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A private key: a masked scalar, and for long-term keys, the secret seed used for implicit
/// rejection during decapsulation.
#[derive(Clone, Debug, PartialEq)]
pub struct PrivateKey<P>
where
    P: ParameterSet,
{
    scalar: Scalar<P>,
    seed: Option<Message<P>>,
}

#[cfg(feature = "zeroize")]
impl<P> Drop for PrivateKey<P>
where
    P: ParameterSet,
{
    fn drop(&mut self) {
        if let Some(seed) = self.seed.as_mut() {
            seed.as_mut_slice().zeroize();
        }
    }
}

#[cfg(feature = "zeroize")]
impl<P> ZeroizeOnDrop for PrivateKey<P> where P: ParameterSet {}

impl<P> PrivateKey<P>
where
    P: ParameterSet,
{
    /// Generate a fresh private key for `party`, without a rejection seed.
    pub fn generate(party: Party, rng: &mut impl CryptoRngCore) -> Self {
        Self::from_scalar(Scalar::random(party, rng))
    }

    /// Build a private key from `randomness`, masked to `party`'s scalar length.
    pub fn from_randomness(party: Party, randomness: &ScalarEncoding<P>) -> Self {
        Self::from_scalar(Scalar::from_bytes_masked(party, randomness))
    }

    /// Wrap an existing scalar.
    pub fn from_scalar(scalar: Scalar<P>) -> Self {
        Self { scalar, seed: None }
    }

    /// Attach the secret seed returned by decapsulation when a ciphertext is rejected.
    #[must_use]
    pub fn with_rejection_seed(mut self, seed: Message<P>) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The role this key plays.
    pub fn party(&self) -> Party {
        self.scalar.party()
    }

    /// The private scalar.
    pub fn scalar(&self) -> &Scalar<P> {
        &self.scalar
    }

    /// The implicit-rejection seed, if this is a long-term key.
    pub fn rejection_seed(&self) -> Option<&Message<P>> {
        self.seed.as_ref()
    }

    /// Compute the matching public key.
    pub fn public_key<E>(&self) -> E::PublicKey
    where
        E: IsogenyEngine<Params = P>,
    {
        E::public_key(&self.scalar)
    }
}

/// An encrypted message: the sender's ephemeral public key `c0`, and `c1`, the message masked
/// with a pad derived from the shared j-invariant.
#[derive(Clone, Debug, PartialEq)]
pub struct Ciphertext<E>
where
    E: IsogenyEngine,
{
    c0: E::PublicKey,
    c1: Message<E::Params>,
}

impl<E> Ciphertext<E>
where
    E: IsogenyEngine,
{
    /// Assemble a ciphertext from its two parts.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `c1` does not have the message length.
    pub fn new(c0: E::PublicKey, c1: &[u8]) -> Result<Self, Error> {
        let c1 = Message::<E::Params>::try_from(c1).map_err(|_| Error::InvalidParameter)?;
        Ok(Self { c0, c1 })
    }

    /// The ephemeral public key.
    pub fn c0(&self) -> &E::PublicKey {
        &self.c0
    }

    /// The masked message.
    pub fn c1(&self) -> &Message<E::Params> {
        &self.c1
    }

    /// Length of the encoding `c0 || c1`.
    pub fn encoded_len() -> usize {
        <E::PublicKey as EncodedSizeUser>::EncodedSize::USIZE
            + <E::Params as ParameterSet>::MessageBytes::USIZE
    }

    /// Write the encoding `c0 || c1` into `out`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `out` is not exactly
    /// [`Ciphertext::encoded_len`] bytes long.
    pub fn write_bytes(&self, out: &mut [u8]) -> Result<(), Error> {
        if out.len() != Self::encoded_len() {
            return Err(Error::InvalidParameter);
        }

        let (c0, c1) = out.split_at_mut(out.len() - self.c1.len());
        c0.copy_from_slice(&self.c0.as_bytes());
        c1.copy_from_slice(&self.c1);
        Ok(())
    }

    /// Parse the encoding `c0 || c1`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `bytes` has the wrong length, or whatever error
    /// the public key decoder reports for `c0`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != Self::encoded_len() {
            return Err(Error::InvalidParameter);
        }

        let (c0, c1) = bytes.split_at(<E::PublicKey as EncodedSizeUser>::EncodedSize::USIZE);
        let c0 = Encoded::<E::PublicKey>::try_from(c0).map_err(|_| Error::InvalidParameter)?;
        Self::new(E::PublicKey::from_bytes(&c0)?, c1)
    }
}

/// `SHAKE256(j) XOR m`, truncated to the message length.
fn one_time_pad<P: ParameterSet>(j: &Fp2<P>, m: &Message<P>) -> Message<P> {
    let pad: Message<P> = shake256(&[j.to_bytes().as_slice()]);
    Array::from_fn(|i| pad[i] ^ m[i])
}

/// Encrypt `m` to `pk` under a freshly sampled ephemeral key.
pub fn encrypt<E>(
    pk: &E::PublicKey,
    m: &Message<E::Params>,
    rng: &mut impl CryptoRngCore,
) -> Ciphertext<E>
where
    E: IsogenyEngine,
{
    let r: ScalarEncoding<E::Params> = rand(rng);
    encrypt_deterministic(pk, m, &r)
}

/// Encrypt `m` to `pk`, with the ephemeral scalar derived from `r` by reduction modulo `2^eA`.
/// The ciphertext is a function of `(pk, m, r)` alone.
pub fn encrypt_deterministic<E>(
    pk: &E::PublicKey,
    m: &Message<E::Params>,
    r: &ScalarEncoding<E::Params>,
) -> Ciphertext<E>
where
    E: IsogenyEngine,
{
    let ephemeral = Scalar::from_bytes_masked(Party::Alice, r);
    let c0 = E::public_key(&ephemeral);
    let j = E::shared_secret(&ephemeral, pk);
    let c1 = one_time_pad(&j, m);
    Ciphertext { c0, c1 }
}

/// Recover the message from `ct` using the recipient's private key.
pub fn decrypt<E>(sk: &PrivateKey<E::Params>, ct: &Ciphertext<E>) -> Message<E::Params>
where
    E: IsogenyEngine,
{
    let j = E::shared_secret(&sk.scalar, &ct.c0);
    one_time_pad(&j, &ct.c1)
}
