#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![allow(non_snake_case)] // Allow notation matching the literature
#![deny(missing_docs)] // Require all public interfaces to be documented
#![warn(clippy::pedantic)] // Be pedantic by default

//! # Usage
//!
//! This crate implements the arithmetic core of the Supersingular Isogeny Key Encapsulation
//! (SIKE) mechanism: constant-time arithmetic in GF(p) and GF(p^2) in Montgomery form, the
//! Montgomery-curve and projective x-only point containers that isogeny formulas work on, and
//! the SIKE encryption and key encapsulation layer.  The isogeny walk itself is supplied by the
//! caller through the [`IsogenyEngine`] trait.
//!
//! ```
//! use sike::sikep434::Fp2;
//!
//! let x = Fp2::from_u64(3);
//! let y = x.invert().unwrap();
//! assert_eq!(&x * &y, Fp2::one());
//! ```
//!
//! ⚠️ SIKE is broken: the key exchange it rests on was shown in 2022 to be vulnerable to a
//! key-recovery attack running in hours on a single core.  Do not use it to protect anything.

/// 64-bit word arithmetic
mod word;

/// Base field arithmetic
mod fp;

/// Quadratic extension field arithmetic
mod fp2;

/// Curve and point containers
mod curve;

/// Private scalars
mod scalar;

/// Hash and randomness helpers
mod crypto;

/// The encryption scheme underlying the KEM
pub mod pke;

/// The SIKE key encapsulation mechanism
pub mod kem;

/// Parameter sets
mod param;

/// Trait definitions
mod traits;

/// Error type
mod error;

#[allow(clippy::unreadable_literal)]
pub mod sikep434;
#[allow(clippy::unreadable_literal)]
pub mod sikep503;
#[allow(clippy::unreadable_literal)]
pub mod sikep610;
#[allow(clippy::unreadable_literal)]
pub mod sikep751;

// The unit tests share the integration tests' key-generation engine, which names this crate
// `sike`
#[cfg(test)]
extern crate self as sike;

#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod group_engine;

pub use hybrid_array as array;

pub use curve::{MontgomeryCurve, ProjectivePoint};
pub use error::Error;
pub use fp::{DoubleFp, Fp};
pub use fp2::Fp2;
pub use crate::kem::{Decapsulate, Encapsulate};
pub use param::{Fp2Encoding, FpEncoding, Message, ParameterSet, ScalarEncoding, SharedKey};
pub use scalar::{Party, Scalar};
pub use traits::*;

pub use sikep434::SikeP434Params;
pub use sikep503::SikeP503Params;
pub use sikep610::SikeP610Params;
pub use sikep751::SikeP751Params;
