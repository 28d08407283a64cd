use core::ops::{Add, Mul, Neg, Sub};
use hybrid_array::typenum::Unsigned;
use subtle::{Choice, ConstantTimeEq, CtOption};

use crate::Error;
use crate::fp::Fp;
use crate::param::{Fp2Encoding, FpEncoding, ParameterSet};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// An element `re + im * i` of GF(p^2) = GF(p)[i] / (i^2 + 1).
#[derive(Clone, Debug, Default)]
pub struct Fp2<P: ParameterSet> {
    re: Fp<P>,
    im: Fp<P>,
}

impl<P: ParameterSet> Fp2<P> {
    /// Assemble an element from its real and imaginary parts.
    pub fn new(re: Fp<P>, im: Fp<P>) -> Self {
        Self { re, im }
    }

    /// The additive identity.
    pub fn zero() -> Self {
        Self::new(Fp::zero(), Fp::zero())
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self::new(Fp::one(), Fp::zero())
    }

    /// Map a small integer into the base field part.
    pub fn from_u64(x: u64) -> Self {
        Self::new(Fp::from_u64(x), Fp::zero())
    }

    /// The real part.
    pub fn real(&self) -> &Fp<P> {
        &self.re
    }

    /// The imaginary part.
    pub fn imag(&self) -> &Fp<P> {
        &self.im
    }

    /// Decode an element from the real part's encoding followed by the imaginary part's.  The
    /// result is none unless both halves are canonical.
    pub fn from_bytes(bytes: &Fp2Encoding<P>) -> CtOption<Self> {
        let n = P::FpBytes::USIZE;
        let mut re = FpEncoding::<P>::default();
        let mut im = FpEncoding::<P>::default();
        re.copy_from_slice(&bytes[..n]);
        im.copy_from_slice(&bytes[n..]);

        let (re, re_ok) = Fp::decode(&re);
        let (im, im_ok) = Fp::decode(&im);
        CtOption::new(Self::new(re, im), re_ok & im_ok)
    }

    /// Decode an element from a byte slice of unknown provenance.
    ///
    /// # Errors
    /// Returns [`Error::ParameterMismatch`] if the slice does not have this parameter set's
    /// encoded length, and [`Error::InvalidParameter`] if either half is not canonical.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = Fp2Encoding::<P>::try_from(bytes).map_err(|_| Error::ParameterMismatch)?;
        Option::<Self>::from(Self::from_bytes(&bytes)).ok_or(Error::InvalidParameter)
    }

    /// Encode as the canonical real part followed by the canonical imaginary part.
    pub fn to_bytes(&self) -> Fp2Encoding<P> {
        let n = P::FpBytes::USIZE;
        let mut out = Fp2Encoding::<P>::default();
        out[..n].copy_from_slice(&self.re.to_bytes());
        out[n..].copy_from_slice(&self.im.to_bytes());
        out
    }

    /// `self^2`, via `(a + b)(a - b) + 2ab * i`.
    pub fn square(&self) -> Self {
        let sum = &self.re + &self.im;
        let diff = &self.re - &self.im;
        let double = &self.re + &self.re;
        Self::new(&sum * &diff, &double * &self.im)
    }

    /// `self * i`
    pub fn mul_by_i(&self) -> Self {
        Self::new(-&self.im, self.re.clone())
    }

    /// The multiplicative inverse `conj(self) / norm(self)`.  The result is none for zero.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.invert_or_zero(), !self.is_zero())
    }

    /// As [`Fp2::invert`], but mapping zero to zero.
    pub(crate) fn invert_or_zero(&self) -> Self {
        let norm = &self.re.square() + &self.im.square();
        let inv = norm.invert_chain();
        let re = &self.re * &inv;
        let im = -&(&self.im * &inv);
        Self::new(re, im)
    }

    /// Whether this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.re.is_zero() & self.im.is_zero()
    }

    /// Exchange `self` and `other` if `choice` is set, without branching on it.
    pub fn conditional_swap(&mut self, other: &mut Self, choice: Choice) {
        self.re.conditional_swap(&mut other.re, choice);
        self.im.conditional_swap(&mut other.im, choice);
    }

    /// Square roots are not provided for extension field elements.
    ///
    /// # Errors
    /// Always returns [`Error::NotImplemented`].
    #[allow(clippy::unused_self)]
    pub fn sqrt(&self) -> Result<Self, Error> {
        Err(Error::NotImplemented)
    }

    /// Exponentiation by an arbitrary exponent is not provided for extension field elements.
    ///
    /// # Errors
    /// Always returns [`Error::NotImplemented`].
    #[allow(clippy::unused_self)]
    pub fn pow(&self, _exp: &[u64]) -> Result<Self, Error> {
        Err(Error::NotImplemented)
    }
}

impl<P: ParameterSet> ConstantTimeEq for Fp2<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.re.ct_eq(&other.re) & self.im.ct_eq(&other.im)
    }
}

impl<P: ParameterSet> PartialEq for Fp2<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<P: ParameterSet> Eq for Fp2<P> {}

impl<P: ParameterSet> Add<&Fp2<P>> for &Fp2<P> {
    type Output = Fp2<P>;

    fn add(self, rhs: &Fp2<P>) -> Fp2<P> {
        Fp2::new(&self.re + &rhs.re, &self.im + &rhs.im)
    }
}

impl<P: ParameterSet> Sub<&Fp2<P>> for &Fp2<P> {
    type Output = Fp2<P>;

    fn sub(self, rhs: &Fp2<P>) -> Fp2<P> {
        Fp2::new(&self.re - &rhs.re, &self.im - &rhs.im)
    }
}

impl<P: ParameterSet> Mul<&Fp2<P>> for &Fp2<P> {
    type Output = Fp2<P>;

    /// Karatsuba-style product with three base field multiplications and two reductions:
    ///
    /// ```text
    /// (a + bi)(c + di) = (ac - bd) + ((b - a)(c - d) + ac + bd) i
    /// ```
    fn mul(self, rhs: &Fp2<P>) -> Fp2<P> {
        let ac = self.re.mul_wide(&rhs.re);
        let bd = self.im.mul_wide(&rhs.im);

        let t0 = &self.im - &self.re;
        let t1 = &rhs.re - &rhs.im;
        let cross = t0.mul_wide(&t1);

        let im = cross.add_no_reduction(&ac).add_no_reduction(&bd);
        let re = ac.sub_no_reduction(&bd);
        Fp2::new(re.montgomery_reduce(), im.montgomery_reduce())
    }
}

impl<P: ParameterSet> Neg for &Fp2<P> {
    type Output = Fp2<P>;

    fn neg(self) -> Fp2<P> {
        Fp2::new(-&self.re, -&self.im)
    }
}

#[cfg(feature = "zeroize")]
impl<P: ParameterSet> Zeroize for Fp2<P> {
    fn zeroize(&mut self) {
        self.re.zeroize();
        self.im.zeroize();
    }
}
