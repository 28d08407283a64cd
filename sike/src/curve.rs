//! Montgomery curves `B y^2 = x^3 + (A/C) x^2 + x` over GF(p^2), and the projective x-only
//! coordinates that isogeny formulas operate on.
//!
//! Neither type implements a group law: they are data holders plus the handful of derived
//! constants that the isogeny walk consumes.

use core::ops::{Add, Mul, Sub};
use subtle::{Choice, ConstantTimeEq, CtOption};

use crate::Error;
use crate::fp2::Fp2;
use crate::param::ParameterSet;

/// A Montgomery curve with projective coefficient `(A : C)`.
#[derive(Clone, Debug)]
pub struct MontgomeryCurve<P: ParameterSet> {
    a: Fp2<P>,
    c: Fp2<P>,
    a24_plus: Fp2<P>,
    a24_minus: Fp2<P>,
    c24: Fp2<P>,
    isogeny_coefficients: Option<[Fp2<P>; 3]>,
}

impl<P: ParameterSet> MontgomeryCurve<P> {
    /// The curve with affine coefficient `a`, i.e. `(a : 1)`.
    pub fn new(a: Fp2<P>) -> Self {
        Self::projective(a, Fp2::one())
    }

    /// The curve with projective coefficient `(a : c)`.
    ///
    /// The constants `A + 2C`, `A - 2C` and `4C` are computed here once, so a curve can be
    /// shared between threads by reference.
    pub fn projective(a: Fp2<P>, c: Fp2<P>) -> Self {
        let c2 = &c + &c;
        Self {
            a24_plus: &a + &c2,
            a24_minus: &a - &c2,
            c24: &c2 + &c2,
            a,
            c,
            isogeny_coefficients: None,
        }
    }

    /// Recover a curve from the `(A + 2C : 4C)` form produced by 2- and 4-isogeny evaluation.
    /// The result has coefficient `(4 * a24_plus - 2 * c24 : c24)`.
    pub fn from_a24(a24_plus: &Fp2<P>, c24: &Fp2<P>) -> Self {
        let two = a24_plus + a24_plus;
        let four = &two + &two;
        let a = &(&four - c24) - c24;
        Self::projective(a, c24.clone())
    }

    /// Attach the three constants that the 4-isogeny with this curve as domain uses when it is
    /// evaluated at further points.
    #[must_use]
    pub fn with_isogeny_coefficients(mut self, coefficients: [Fp2<P>; 3]) -> Self {
        self.isogeny_coefficients = Some(coefficients);
        self
    }

    /// The `A` coefficient.
    pub fn a(&self) -> &Fp2<P> {
        &self.a
    }

    /// The `C` coefficient.
    pub fn c(&self) -> &Fp2<P> {
        &self.c
    }

    /// `A + 2C`
    pub fn a24_plus(&self) -> &Fp2<P> {
        &self.a24_plus
    }

    /// `A - 2C`
    pub fn a24_minus(&self) -> &Fp2<P> {
        &self.a24_minus
    }

    /// `4C`
    pub fn c24(&self) -> &Fp2<P> {
        &self.c24
    }

    /// The 4-isogeny coefficients, if they were attached at construction.
    pub fn isogeny_coefficients(&self) -> Option<&[Fp2<P>; 3]> {
        self.isogeny_coefficients.as_ref()
    }

    /// The j-invariant `256 (A^2 - 3C^2)^3 / (C^4 (A^2 - 4C^2))`.  The result is none if the
    /// coefficients describe a singular curve.
    pub fn j_invariant(&self) -> CtOption<Fp2<P>> {
        let a2 = self.a.square();
        let c2 = self.c.square();
        let c4 = c2.square();
        let three_c2 = &(&c2 + &c2) + &c2;
        let four_c2 = &(&c2 + &c2) + &(&c2 + &c2);

        let t = &a2 - &three_c2;
        let mut num = &t.square() * &t;
        for _ in 0..8 {
            num = &num + &num;
        }
        let den = &c4 * &(&a2 - &four_c2);

        CtOption::new(&num * &den.invert_or_zero(), !den.is_zero())
    }
}

// The derived constants are a pure function of `(A : C)`
impl<P: ParameterSet> PartialEq for MontgomeryCurve<P> {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a
            && self.c == other.c
            && self.isogeny_coefficients == other.isogeny_coefficients
    }
}

/// A projective x-coordinate `(X : Z)`, representing `x = X / Z`.
///
/// The arithmetic here is coordinate-wise: adding two `ProjectivePoint`s adds their `X`s and
/// their `Z`s, which is what isogeny and ladder formulas are written in terms of.  It is not
/// point addition on the curve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectivePoint<P: ParameterSet> {
    x: Fp2<P>,
    z: Fp2<P>,
}

impl<P: ParameterSet> ProjectivePoint<P> {
    /// The point `(x : z)`.
    pub fn new(x: Fp2<P>, z: Fp2<P>) -> Self {
        Self { x, z }
    }

    /// The point `(x : 1)`.
    pub fn from_affine(x: Fp2<P>) -> Self {
        Self::new(x, Fp2::one())
    }

    /// The `X` coordinate.
    pub fn x(&self) -> &Fp2<P> {
        &self.x
    }

    /// The `Z` coordinate.
    pub fn z(&self) -> &Fp2<P> {
        &self.z
    }

    /// `(X^2 : Z^2)`
    pub fn square(&self) -> Self {
        Self::new(self.x.square(), self.z.square())
    }

    /// `(X^-1 : Z^-1)`; none if either coordinate is zero.
    pub fn invert(&self) -> CtOption<Self> {
        let point = Self::new(self.x.invert_or_zero(), self.z.invert_or_zero());
        CtOption::new(point, !(self.x.is_zero() | self.z.is_zero()))
    }

    /// The affine coordinate `X / Z`; none if `Z` is zero.
    pub fn to_affine(&self) -> CtOption<Fp2<P>> {
        let x = &self.x * &self.z.invert_or_zero();
        CtOption::new(x, !self.z.is_zero())
    }

    /// Exchange `self` and `other` if `choice` is set, without branching on it.
    pub fn conditional_swap(&mut self, other: &mut Self, choice: Choice) {
        self.x.conditional_swap(&mut other.x, choice);
        self.z.conditional_swap(&mut other.z, choice);
    }

    /// x-only coordinates carry no sign, so there is no negation.
    ///
    /// # Errors
    /// Always returns [`Error::NotImplemented`].
    #[allow(clippy::unused_self)]
    pub fn negate(&self) -> Result<Self, Error> {
        Err(Error::NotImplemented)
    }

    /// Deciding whether an x-only point is the identity needs curve data it does not hold.
    ///
    /// # Errors
    /// Always returns [`Error::NotImplemented`].
    #[allow(clippy::unused_self)]
    pub fn is_infinite(&self) -> Result<bool, Error> {
        Err(Error::NotImplemented)
    }
}

impl<P: ParameterSet> ConstantTimeEq for ProjectivePoint<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.z.ct_eq(&other.z)
    }
}

impl<P: ParameterSet> Add<&ProjectivePoint<P>> for &ProjectivePoint<P> {
    type Output = ProjectivePoint<P>;

    fn add(self, rhs: &ProjectivePoint<P>) -> ProjectivePoint<P> {
        ProjectivePoint::new(&self.x + &rhs.x, &self.z + &rhs.z)
    }
}

impl<P: ParameterSet> Sub<&ProjectivePoint<P>> for &ProjectivePoint<P> {
    type Output = ProjectivePoint<P>;

    fn sub(self, rhs: &ProjectivePoint<P>) -> ProjectivePoint<P> {
        ProjectivePoint::new(&self.x - &rhs.x, &self.z - &rhs.z)
    }
}

impl<P: ParameterSet> Mul<&ProjectivePoint<P>> for &ProjectivePoint<P> {
    type Output = ProjectivePoint<P>;

    fn mul(self, rhs: &ProjectivePoint<P>) -> ProjectivePoint<P> {
        ProjectivePoint::new(&self.x * &rhs.x, &self.z * &rhs.z)
    }
}
