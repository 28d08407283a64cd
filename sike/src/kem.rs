//! The key encapsulation mechanism, built on [`crate::pke`] with the Fujisaki-Okamoto
//! transform: decapsulation re-encrypts the recovered message and, if the ciphertext does not
//! match, derives the shared key from a secret seed instead.

use core::convert::Infallible;
use core::marker::PhantomData;
use hybrid_array::Array;
use rand_core::CryptoRngCore;
use subtle::{ConditionallySelectable, ConstantTimeEq};

use crate::crypto::{rand, shake256};
use crate::param::{Message, ScalarEncoding, SharedKey};
use crate::pke::{Ciphertext, PrivateKey, decrypt, encrypt_deterministic};
use crate::scalar::{Party, Scalar};
use crate::{Encoded, EncodedSizeUser, Error, IsogenyEngine};

// Re-export traits from the `kem` crate
pub use ::kem::{Decapsulate, Encapsulate};

type Params<E> = <E as IsogenyEngine>::Params;

/// A `DecapsulationKey` provides the ability to generate a new key pair, and decapsulate an
/// encapsulated shared key.
#[derive(Clone, Debug, PartialEq)]
pub struct DecapsulationKey<E>
where
    E: IsogenyEngine,
{
    sk: PrivateKey<Params<E>>,
    ek: EncapsulationKey<E>,
}

impl<E> DecapsulationKey<E>
where
    E: IsogenyEngine,
{
    /// Generate a fresh long-term key pair, including the secret seed for implicit rejection.
    pub fn generate(rng: &mut impl CryptoRngCore) -> Self {
        let sk = PrivateKey::generate(Party::Bob, rng).with_rejection_seed(rand(rng));
        let ek = EncapsulationKey::new(sk.public_key::<E>());
        Self { sk, ek }
    }

    /// Assemble a decapsulation key from a private key and its public key.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `sk` is not a key for the static (Bob) role.
    pub fn from_parts(sk: PrivateKey<Params<E>>, pk: E::PublicKey) -> Result<Self, Error> {
        if sk.party() != Party::Bob {
            return Err(Error::InvalidParameter);
        }

        let ek = EncapsulationKey::new(pk);
        Ok(Self { sk, ek })
    }

    /// Get the [`EncapsulationKey`] which corresponds to this [`DecapsulationKey`].
    pub fn encapsulation_key(&self) -> &EncapsulationKey<E> {
        &self.ek
    }

    /// The underlying private key.
    ///
    /// # ⚠️Warning!
    ///
    /// This value is key material. Please treat it with care.
    pub fn private_key(&self) -> &PrivateKey<Params<E>> {
        &self.sk
    }

    /// Parse an encoded ciphertext `c0 || c1` and decapsulate it.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if the ciphertext is malformed, and
    /// [`Error::KeyUnusable`] if this key has no rejection seed.
    pub fn decapsulate_slice(&self, ciphertext: &[u8]) -> Result<SharedKey<Params<E>>, Error> {
        let ct = Ciphertext::from_slice(ciphertext)?;
        self.decapsulate(&ct)
    }
}

impl<E> Decapsulate<Ciphertext<E>, SharedKey<Params<E>>> for DecapsulationKey<E>
where
    E: IsogenyEngine,
{
    type Error = Error;

    fn decapsulate(
        &self,
        encapsulated_key: &Ciphertext<E>,
    ) -> Result<SharedKey<Params<E>>, Self::Error> {
        let seed = self.sk.rejection_seed().ok_or(Error::KeyUnusable)?;

        let mp = decrypt(&self.sk, encapsulated_key);
        let rp: ScalarEncoding<Params<E>> =
            shake256(&[mp.as_slice(), self.ek.pk.as_bytes().as_slice()]);
        let c0p = E::public_key(&Scalar::from_bytes_masked(Party::Alice, &rp)).as_bytes();

        let valid = c0p
            .as_slice()
            .ct_eq(encapsulated_key.c0().as_bytes().as_slice());
        let chosen: Message<Params<E>> =
            Array::from_fn(|i| u8::conditional_select(&seed[i], &mp[i], valid));

        Ok(shake256(&[
            chosen.as_slice(),
            c0p.as_slice(),
            encapsulated_key.c1().as_slice(),
        ]))
    }
}

/// An `EncapsulationKey` provides the ability to encapsulate a shared key so that it can only be
/// decapsulated by the holder of the corresponding decapsulation key.
#[derive(Clone, Debug, PartialEq)]
pub struct EncapsulationKey<E>
where
    E: IsogenyEngine,
{
    pk: E::PublicKey,
}

impl<E> EncapsulationKey<E>
where
    E: IsogenyEngine,
{
    /// Wrap a public key produced by the key-generation engine.
    pub fn new(pk: E::PublicKey) -> Self {
        Self { pk }
    }

    /// The public key being encapsulated to.
    pub fn public_key(&self) -> &E::PublicKey {
        &self.pk
    }

    fn encapsulate_deterministic_inner(
        &self,
        m: &Message<Params<E>>,
    ) -> (Ciphertext<E>, SharedKey<Params<E>>) {
        let r: ScalarEncoding<Params<E>> = shake256(&[m.as_slice(), self.pk.as_bytes().as_slice()]);
        let ct = encrypt_deterministic::<E>(&self.pk, m, &r);
        let K = shake256(&[
            m.as_slice(),
            ct.c0().as_bytes().as_slice(),
            ct.c1().as_slice(),
        ]);
        (ct, K)
    }
}

impl<E> EncodedSizeUser for EncapsulationKey<E>
where
    E: IsogenyEngine,
{
    type EncodedSize = <E::PublicKey as EncodedSizeUser>::EncodedSize;

    fn from_bytes(enc: &Encoded<Self>) -> Result<Self, Error> {
        E::PublicKey::from_bytes(enc).map(Self::new)
    }

    fn as_bytes(&self) -> Encoded<Self> {
        self.pk.as_bytes()
    }
}

impl<E> Encapsulate<Ciphertext<E>, SharedKey<Params<E>>> for EncapsulationKey<E>
where
    E: IsogenyEngine,
{
    type Error = Infallible;

    fn encapsulate(
        &self,
        rng: &mut impl CryptoRngCore,
    ) -> Result<(Ciphertext<E>, SharedKey<Params<E>>), Self::Error> {
        let m: Message<Params<E>> = rand(rng);
        Ok(self.encapsulate_deterministic_inner(&m))
    }
}

#[cfg(feature = "deterministic")]
impl<E> crate::EncapsulateDeterministic<Ciphertext<E>, SharedKey<Params<E>>, Message<Params<E>>>
    for EncapsulationKey<E>
where
    E: IsogenyEngine,
{
    type Error = Infallible;

    fn encapsulate_deterministic(
        &self,
        m: &Message<Params<E>>,
    ) -> Result<(Ciphertext<E>, SharedKey<Params<E>>), Self::Error> {
        Ok(self.encapsulate_deterministic_inner(m))
    }
}

/// An implementation of overall SIKE functionality.  Generic over the isogeny engine, and
/// through it the parameter set, but then ties together all of the other related types and
/// sizes.
#[derive(Clone, Debug, Default)]
pub struct Kem<E>
where
    E: IsogenyEngine,
{
    _phantom: PhantomData<E>,
}

impl<E> Kem<E>
where
    E: IsogenyEngine,
{
    /// Generate a new (decapsulation, encapsulation) key pair
    pub fn generate(rng: &mut impl CryptoRngCore) -> (DecapsulationKey<E>, EncapsulationKey<E>) {
        let dk = DecapsulationKey::generate(rng);
        let ek = dk.encapsulation_key().clone();
        (dk, ek)
    }
}
