use core::ops::{Add, Mul, Neg, Sub};
use hybrid_array::{Array, typenum::Unsigned};
use subtle::{Choice, ConstantTimeEq, CtOption};

use crate::Error;
use crate::param::{FpEncoding, POWER_TABLE_SIZE, ParameterSet};
use crate::word::{
    Accumulator, add_into, add_masked, cswap, mask, sbb, sub_assign, sub_into,
};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

type Words<P> = Array<u64, <P as ParameterSet>::Words>;
type DoubleWords<P> = Array<u64, <P as ParameterSet>::DoubleWords>;

/// An element of GF(p), held in Montgomery representation `x * R mod p`.
///
/// The internal value is only kept in the range `[0, 2p)`; it is brought into `[0, p)` by
/// [`Fp::reduce`] and whenever the element is encoded or compared.
#[derive(Clone, Debug)]
pub struct Fp<P: ParameterSet> {
    words: Words<P>,
}

/// An unreduced double-width product of two [`Fp`] elements.
///
/// Keeping products in this form lets the GF(p^2) multiplication combine cross terms before
/// paying for a Montgomery reduction.
#[derive(Clone, Debug)]
pub struct DoubleFp<P: ParameterSet> {
    words: DoubleWords<P>,
}

impl<P: ParameterSet> Fp<P> {
    /// The additive identity.
    pub fn zero() -> Self {
        Self {
            words: Array::default(),
        }
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self {
            words: P::MONT_ONE,
        }
    }

    /// Map a small integer into the field.
    pub fn from_u64(x: u64) -> Self {
        let mut words = Words::<P>::default();
        words[0] = x;
        Self::to_montgomery(words)
    }

    /// Decode a field element from its fixed-width little-endian encoding.
    ///
    /// The result is none if the encoded integer is not lower than `p`; the check runs in
    /// constant time.
    pub fn from_bytes(bytes: &FpEncoding<P>) -> CtOption<Self> {
        let (x, canonical) = Self::decode(bytes);
        CtOption::new(x, canonical)
    }

    /// Decode without discarding the result, alongside whether the input was canonical.
    pub(crate) fn decode(bytes: &FpEncoding<P>) -> (Self, Choice) {
        let mut words = Words::<P>::default();
        for (word, chunk) in words.iter_mut().zip(bytes.chunks(8)) {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }

        let prime = P::PRIME;
        let mut borrow = 0;
        for (&x, &p) in words.iter().zip(prime.iter()) {
            (_, borrow) = sbb(x, p, borrow);
        }

        #[allow(clippy::cast_possible_truncation)]
        let canonical = Choice::from(borrow as u8);
        (Self::to_montgomery(words), canonical)
    }

    /// Encode this element as `ceil(bitlen(p) / 8)` little-endian bytes of its canonical value
    /// in `[0, p)`.
    pub fn to_bytes(&self) -> FpEncoding<P> {
        let words = self.canonical_words();
        let mut out = FpEncoding::<P>::default();
        for (chunk, word) in out.chunks_mut(8).zip(words.iter()) {
            let len = chunk.len();
            chunk.copy_from_slice(&word.to_le_bytes()[..len]);
        }
        out
    }

    /// Bring the internal value from `[0, 2p)` into `[0, p)` in place.
    pub fn reduce(&mut self) {
        let borrow = sub_assign(&mut self.words, &P::PRIME);
        add_masked(&mut self.words, &P::PRIME, mask(borrow));
    }

    /// Schoolbook product of the two Montgomery representations, without reduction.
    pub fn mul_wide(&self, rhs: &Self) -> DoubleFp<P> {
        let n = P::Words::USIZE;
        let (a, b) = (&self.words, &rhs.words);
        let mut words = DoubleWords::<P>::default();
        let mut acc = Accumulator::default();

        for k in 0..(2 * n - 1) {
            for i in k.saturating_sub(n - 1)..=k.min(n - 1) {
                acc.mac(a[i], b[k - i]);
            }
            words[k] = acc.shift();
        }
        words[2 * n - 1] = acc.shift();

        DoubleFp { words }
    }

    /// `self^2`
    pub fn square(&self) -> Self {
        self * self
    }

    /// Whether this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::zero())
    }

    /// Exchange `self` and `other` if `choice` is set, without branching on it.
    pub fn conditional_swap(&mut self, other: &mut Self, choice: Choice) {
        cswap(&mut self.words, &mut other.words, mask(u64::from(choice.unwrap_u8())));
    }

    /// General modular inversion is not provided for base field elements.
    ///
    /// # Errors
    /// Always returns [`Error::NotImplemented`].
    #[allow(clippy::unused_self)]
    pub fn invert(&self) -> Result<Self, Error> {
        Err(Error::NotImplemented)
    }

    /// Square roots are not provided for base field elements.
    ///
    /// # Errors
    /// Always returns [`Error::NotImplemented`].
    #[allow(clippy::unused_self)]
    pub fn sqrt(&self) -> Result<Self, Error> {
        Err(Error::NotImplemented)
    }

    /// Exponentiation by an arbitrary exponent is not provided for base field elements.
    ///
    /// # Errors
    /// Always returns [`Error::NotImplemented`].
    #[allow(clippy::unused_self)]
    pub fn pow(&self, _exp: &[u64]) -> Result<Self, Error> {
        Err(Error::NotImplemented)
    }

    /// `self^((p - 3) / 4)`, using the parameter set's fixed addition chain over the odd
    /// powers `self^1, self^3, ..., self^31`.
    pub(crate) fn pow_chain(&self) -> Self {
        let square = self.square();
        let mut table: [Self; POWER_TABLE_SIZE] = core::array::from_fn(|_| self.clone());
        for k in 1..POWER_TABLE_SIZE {
            table[k] = &table[k - 1] * &square;
        }

        let mut t = table[P::INITIAL_MUL].clone();
        for (&pow, &mul) in P::POW_STRATEGY.iter().zip(P::MUL_STRATEGY) {
            for _ in 0..pow {
                t = t.square();
            }
            t = &t * &table[usize::from(mul)];
        }
        t
    }

    /// `self^(p - 2)`, which is the inverse of any non-zero element and zero otherwise.
    pub(crate) fn invert_chain(&self) -> Self {
        let t = self.pow_chain().square().square();
        &t * self
    }

    fn to_montgomery(words: Words<P>) -> Self {
        &Self { words } * &Self { words: P::MONT_R2 }
    }

    fn canonical_words(&self) -> Words<P> {
        let n = P::Words::USIZE;
        let mut wide = DoubleWords::<P>::default();
        wide[..n].copy_from_slice(&self.words);

        let mut out = DoubleFp::<P> { words: wide }.montgomery_reduce();
        out.reduce();
        out.words
    }
}

impl<P: ParameterSet> DoubleFp<P> {
    /// Double-width addition.  The sum of any two products of elements in `[0, 2p)` fits, so no
    /// carry is produced.
    #[must_use]
    pub fn add_no_reduction(&self, rhs: &Self) -> Self {
        let mut words = DoubleWords::<P>::default();
        add_into(&mut words, &self.words, &rhs.words);
        Self { words }
    }

    /// Double-width subtraction.  A negative difference is corrected by adding `p * R`, which
    /// keeps the result a valid input to [`DoubleFp::montgomery_reduce`].
    #[must_use]
    pub fn sub_no_reduction(&self, rhs: &Self) -> Self {
        let n = P::Words::USIZE;
        let mut words = DoubleWords::<P>::default();
        let borrow = sub_into(&mut words, &self.words, &rhs.words);
        add_masked(&mut words[n..], &P::PRIME, mask(borrow));
        Self { words }
    }

    /// Word-by-word Montgomery reduction: returns `self * R^-1 mod p` in `[0, 2p)`, for any
    /// input below `p * R`.
    pub fn montgomery_reduce(&self) -> Fp<P> {
        let n = P::Words::USIZE;
        let prime = P::PRIME;
        let t = &self.words;
        let mut q = Words::<P>::default();
        let mut words = Words::<P>::default();
        let mut acc = Accumulator::default();

        for i in 0..n {
            for j in 0..i {
                acc.mac(q[j], prime[i - j]);
            }
            acc.add(t[i]);
            q[i] = acc.low().wrapping_mul(P::MONT_PINV);
            acc.mac(q[i], prime[0]);

            // The low word is now zero by construction of q[i]
            acc.shift();
        }

        for i in n..(2 * n) {
            for j in (i - n + 1)..n {
                acc.mac(q[j], prime[i - j]);
            }
            acc.add(t[i]);
            words[i - n] = acc.shift();
        }

        Fp { words }
    }
}

impl<P: ParameterSet> Default for Fp<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: ParameterSet> ConstantTimeEq for Fp<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes().as_slice().ct_eq(other.to_bytes().as_slice())
    }
}

impl<P: ParameterSet> PartialEq for Fp<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<P: ParameterSet> Eq for Fp<P> {}

impl<P: ParameterSet> Add<&Fp<P>> for &Fp<P> {
    type Output = Fp<P>;

    fn add(self, rhs: &Fp<P>) -> Fp<P> {
        // Both operands are below 2p, so the sum cannot overflow the top word
        let mut words = Words::<P>::default();
        add_into(&mut words, &self.words, &rhs.words);
        let borrow = sub_assign(&mut words, &P::PRIME_X2);
        add_masked(&mut words, &P::PRIME_X2, mask(borrow));
        Fp { words }
    }
}

impl<P: ParameterSet> Sub<&Fp<P>> for &Fp<P> {
    type Output = Fp<P>;

    fn sub(self, rhs: &Fp<P>) -> Fp<P> {
        let mut words = Words::<P>::default();
        let borrow = sub_into(&mut words, &self.words, &rhs.words);
        add_masked(&mut words, &P::PRIME_X2, mask(borrow));
        Fp { words }
    }
}

impl<P: ParameterSet> Mul<&Fp<P>> for &Fp<P> {
    type Output = Fp<P>;

    fn mul(self, rhs: &Fp<P>) -> Fp<P> {
        self.mul_wide(rhs).montgomery_reduce()
    }
}

impl<P: ParameterSet> Neg for &Fp<P> {
    type Output = Fp<P>;

    fn neg(self) -> Fp<P> {
        &Fp::zero() - self
    }
}

#[cfg(feature = "zeroize")]
impl<P: ParameterSet> Zeroize for Fp<P> {
    fn zeroize(&mut self) {
        let words: &mut [u64] = &mut self.words;
        words.zeroize();
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::{SikeP434Params, SikeP503Params, SikeP610Params, SikeP751Params};
    use num_bigint::BigUint;
    use rand::{RngCore, SeedableRng, rngs::StdRng};

    fn words_to_int(words: &[u64]) -> BigUint {
        let mut buf = [0u8; 8 * 12];
        for (chunk, word) in buf.chunks_mut(8).zip(words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        BigUint::from_bytes_le(&buf)
    }

    pub(crate) fn prime<P: ParameterSet>() -> BigUint {
        words_to_int(&P::PRIME)
    }

    /// An element whose internal Montgomery words are exactly `x`, which may be as large as
    /// `2p - 1`.
    fn from_raw<P: ParameterSet>(x: &BigUint) -> Fp<P> {
        let mut words = Words::<P>::default();
        let digits = x.to_u64_digits();
        words[..digits.len()].copy_from_slice(&digits);
        Fp { words }
    }

    /// Elements at the edges of the internal range `[0, 2p)`.
    pub(crate) fn extremes<P: ParameterSet>() -> [Fp<P>; 5] {
        let p = prime::<P>();
        let two_p = &p * 2u8;
        [
            BigUint::from(0u8),
            BigUint::from(1u8),
            &p - 1u8,
            p,
            two_p - 1u8,
        ]
        .map(|x| from_raw::<P>(&x))
    }

    pub(crate) fn is_partially_reduced<P: ParameterSet>(x: &Fp<P>) -> bool {
        words_to_int(&x.words) < words_to_int(&P::PRIME_X2)
    }

    pub(crate) fn encode<P: ParameterSet>(x: &BigUint) -> FpEncoding<P> {
        let mut out = FpEncoding::<P>::default();
        let bytes = x.to_bytes_le();
        out[..bytes.len()].copy_from_slice(&bytes);
        out
    }

    pub(crate) fn from_int<P: ParameterSet>(x: &BigUint) -> Fp<P> {
        Fp::from_bytes(&encode::<P>(x)).unwrap()
    }

    pub(crate) fn to_int<P: ParameterSet>(x: &Fp<P>) -> BigUint {
        BigUint::from_bytes_le(&x.to_bytes())
    }

    pub(crate) fn random_int<P: ParameterSet>(rng: &mut impl RngCore) -> BigUint {
        let mut bytes = FpEncoding::<P>::default();
        rng.fill_bytes(&mut bytes);
        BigUint::from_bytes_le(&bytes) % prime::<P>()
    }

    fn codec_test<P: ParameterSet>() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = prime::<P>();

        let zero = Fp::<P>::zero().to_bytes();
        assert_eq!(zero.len(), P::FpBytes::USIZE);
        assert!(zero.iter().all(|&b| b == 0));

        assert_eq!(to_int(&Fp::<P>::one()), BigUint::from(1u8));
        assert_eq!(to_int(&Fp::<P>::from_u64(u64::MAX)), BigUint::from(u64::MAX));

        for _ in 0..100 {
            let x = random_int::<P>(&mut rng);
            let bytes = encode::<P>(&x);
            let fx = Fp::<P>::from_bytes(&bytes).unwrap();
            assert_eq!(fx.to_bytes(), bytes);
        }

        // p - 1 is the largest canonical value; p itself is rejected
        let max = &p - 1u8;
        assert!(bool::from(Fp::<P>::from_bytes(&encode::<P>(&max)).is_some()));
        assert!(bool::from(Fp::<P>::from_bytes(&encode::<P>(&p)).is_none()));
    }

    fn arithmetic_test<P: ParameterSet>() {
        let mut rng = StdRng::seed_from_u64(2);
        let p = prime::<P>();

        for _ in 0..100 {
            let a = random_int::<P>(&mut rng);
            let b = random_int::<P>(&mut rng);
            let (fa, fb) = (from_int::<P>(&a), from_int::<P>(&b));

            assert_eq!(to_int(&(&fa + &fb)), (&a + &b) % &p);
            assert_eq!(to_int(&(&fa - &fb)), (&a + &p - &b) % &p);
            assert_eq!(to_int(&(&fa * &fb)), (&a * &b) % &p);
            assert_eq!(to_int(&fa.square()), (&a * &a) % &p);
            assert_eq!(to_int(&-&fa), (&p - &a) % &p);
            assert_eq!(fa.mul_wide(&fb).montgomery_reduce(), &fa * &fb);
        }
    }

    fn chained_additions_test<P: ParameterSet>() {
        // Repeated additions and subtractions must stay in [0, 2p)
        let mut rng = StdRng::seed_from_u64(3);
        let p = prime::<P>();
        let a = random_int::<P>(&mut rng);
        let fa = from_int::<P>(&a);

        let mut acc = Fp::<P>::zero();
        for _ in 0..50 {
            acc = &acc + &fa;
            acc = &(&acc + &fa) - &fa;
        }
        assert_eq!(to_int(&acc), (&a * 50u8) % &p);

        let mut reduced = acc.clone();
        reduced.reduce();
        assert_eq!(reduced, acc);
    }

    fn internal_range_test<P: ParameterSet>() {
        let p = prime::<P>();
        let r = BigUint::from(1u8) << (64 * P::Words::USIZE);
        let r_inv = r.modpow(&(&p - 2u8), &p);
        let value = |x: &Fp<P>| words_to_int(&x.words) * &r_inv % &p;

        for a in extremes::<P>() {
            let (va, neg) = (value(&a), -&a);
            assert!(is_partially_reduced(&neg));
            assert_eq!(to_int(&neg), (&p - &va) % &p);

            let sq = a.square();
            assert!(is_partially_reduced(&sq));
            assert_eq!(to_int(&sq), &va * &va % &p);

            for b in extremes::<P>() {
                let vb = value(&b);
                let results = [
                    (&a + &b, (&va + &vb) % &p),
                    (&a - &b, (&va + &p - &vb) % &p),
                    (&a * &b, &va * &vb % &p),
                    (a.mul_wide(&b).montgomery_reduce(), &va * &vb % &p),
                ];
                for (c, expected) in results {
                    assert!(is_partially_reduced(&c));
                    assert_eq!(to_int(&c), expected);
                }
            }
        }
    }

    fn double_width_test<P: ParameterSet>() {
        let mut rng = StdRng::seed_from_u64(4);
        let p = prime::<P>();

        for _ in 0..50 {
            let [a, b, c, d] = core::array::from_fn(|_| random_int::<P>(&mut rng));
            let [fa, fb, fc, fd] = [&a, &b, &c, &d].map(from_int::<P>);
            let ab = fa.mul_wide(&fb);
            let cd = fc.mul_wide(&fd);

            let sum = ab.add_no_reduction(&cd).montgomery_reduce();
            assert_eq!(to_int(&sum), (&a * &b + &c * &d) % &p);

            let diff = ab.sub_no_reduction(&cd).montgomery_reduce();
            assert_eq!(to_int(&diff), (&a * &b + &p * &p - &c * &d) % &p);
        }
    }

    fn inversion_chain_test<P: ParameterSet>() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            let a = from_int::<P>(&random_int::<P>(&mut rng));
            assert_eq!(&a * &a.invert_chain(), Fp::one());
        }
        assert_eq!(Fp::<P>::zero().invert_chain(), Fp::zero());
    }

    #[test]
    fn codec() {
        codec_test::<SikeP434Params>();
        codec_test::<SikeP503Params>();
        codec_test::<SikeP610Params>();
        codec_test::<SikeP751Params>();
    }

    #[test]
    fn arithmetic() {
        arithmetic_test::<SikeP434Params>();
        arithmetic_test::<SikeP503Params>();
        arithmetic_test::<SikeP610Params>();
        arithmetic_test::<SikeP751Params>();
    }

    #[test]
    fn chained_additions() {
        chained_additions_test::<SikeP434Params>();
        chained_additions_test::<SikeP751Params>();
    }

    #[test]
    fn internal_range() {
        internal_range_test::<SikeP434Params>();
        internal_range_test::<SikeP503Params>();
        internal_range_test::<SikeP610Params>();
        internal_range_test::<SikeP751Params>();
    }

    #[test]
    fn double_width() {
        double_width_test::<SikeP434Params>();
        double_width_test::<SikeP503Params>();
        double_width_test::<SikeP610Params>();
        double_width_test::<SikeP751Params>();
    }

    #[test]
    fn inversion_chain() {
        inversion_chain_test::<SikeP434Params>();
        inversion_chain_test::<SikeP503Params>();
        inversion_chain_test::<SikeP610Params>();
        inversion_chain_test::<SikeP751Params>();
    }

    #[test]
    fn conditional_swap() {
        type Fp434 = Fp<SikeP434Params>;
        let (x0, y0) = (Fp434::from_u64(7), Fp434::from_u64(11));
        let (mut x, mut y) = (x0.clone(), y0.clone());

        x.conditional_swap(&mut y, Choice::from(0));
        assert_eq!((&x, &y), (&x0, &y0));

        x.conditional_swap(&mut y, Choice::from(1));
        assert_eq!((&x, &y), (&y0, &x0));
    }

    #[test]
    fn unsupported_operations() {
        let x = Fp::<SikeP434Params>::from_u64(9);
        assert_eq!(x.invert(), Err(Error::NotImplemented));
        assert_eq!(x.sqrt(), Err(Error::NotImplemented));
        assert_eq!(x.pow(&[2]), Err(Error::NotImplemented));
    }
}
