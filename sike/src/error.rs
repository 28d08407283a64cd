use core::fmt::{self, Display};

/// Error type.
///
/// Variants describe malformed inputs at the protocol boundary only; they never carry secret
/// data, and the arithmetic layer itself is total for well-formed operands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A ciphertext or encoded value has the wrong shape (e.g. wrong length).
    InvalidParameter,

    /// The private key has no rejection seed, so implicit rejection cannot be performed.
    KeyUnusable,

    /// The operation is intentionally unsupported on this representation.
    NotImplemented,

    /// The input was produced for a different parameter set.
    ParameterMismatch,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidParameter => "SIKE error: invalid parameter",
            Error::KeyUnusable => "SIKE error: private key lacks a rejection seed",
            Error::NotImplemented => "SIKE error: operation not implemented",
            Error::ParameterMismatch => "SIKE error: parameter set mismatch",
        })
    }
}

impl core::error::Error for Error {}
