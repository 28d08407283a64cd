//! Trait definitions

use core::fmt::Debug;
use hybrid_array::{Array, ArraySize};

use crate::Error;
use crate::fp2::Fp2;
use crate::param::ParameterSet;
use crate::scalar::Scalar;

/// An object that knows what size it is
pub trait EncodedSizeUser: Sized {
    /// The size of an encoded object
    type EncodedSize: ArraySize;

    /// Parse an object from its encoded form
    ///
    /// # Errors
    /// - If the encoded bytes do not describe a valid object
    fn from_bytes(enc: &Encoded<Self>) -> Result<Self, Error>;

    /// Serialize an object to its encoded form
    fn as_bytes(&self) -> Encoded<Self>;
}

/// A byte array encoding a value the indicated size
pub type Encoded<T> = Array<u8, <T as EncodedSizeUser>::EncodedSize>;

/// The key-generation and isogeny-walk half of SIDH.
///
/// An engine maps a private scalar to the public key of the curve it generates, and a private
/// scalar plus a peer's public key to the shared j-invariant.  The protocol layer in this crate
/// is written against this interface only, so any engine whose two operations commute in the
/// Diffie-Hellman sense yields a working KEM.
pub trait IsogenyEngine: Default + Clone + Debug + PartialEq + 'static {
    /// The parameter set the engine computes over
    type Params: ParameterSet;

    /// A public key, with a fixed-size byte encoding
    type PublicKey: EncodedSizeUser + Clone + Debug + PartialEq;

    /// Compute the public key belonging to `scalar` (in `scalar`'s role).
    fn public_key(scalar: &Scalar<Self::Params>) -> Self::PublicKey;

    /// Compute the shared value from our `scalar` and the other party's public key.
    fn shared_secret(
        scalar: &Scalar<Self::Params>,
        peer: &Self::PublicKey,
    ) -> Fp2<Self::Params>;
}

/// A value that can be encapsulated to.  Note that this interface is not safe: In order for the
/// KEM to be secure, the `m` input must be randomly generated.
#[cfg(feature = "deterministic")]
pub trait EncapsulateDeterministic<EK, SS, M> {
    /// Encapsulation error
    type Error: Debug;

    /// Encapsulates a fresh shared secret derived from the message `m`.
    ///
    /// # Errors
    /// Will vary depending on the underlying implementation.
    fn encapsulate_deterministic(&self, m: &M) -> Result<(EK, SS), Self::Error>;
}
