//! 64-bit word kernel shared by the multi-precision field arithmetic.
//!
//! All helpers are branch-free; carries and borrows are always 0 or 1.

/// Add with carry: returns `(x + y + carry) mod 2^64` and the outgoing carry.
#[inline(always)]
pub(crate) const fn adc(x: u64, y: u64, carry: u64) -> (u64, u64) {
    let z = (x as u128) + (y as u128) + (carry as u128);
    (z as u64, (z >> 64) as u64)
}

/// Subtract with borrow: returns `(x - y - borrow) mod 2^64` and the outgoing borrow.
#[inline(always)]
pub(crate) const fn sbb(x: u64, y: u64, borrow: u64) -> (u64, u64) {
    let z = (x as u128).wrapping_sub(y as u128).wrapping_sub(borrow as u128);
    (z as u64, ((z >> 64) as u64) & 1)
}

/// Full 128-bit product, returned as `(hi, lo)`.
#[inline(always)]
pub(crate) const fn mul(x: u64, y: u64) -> (u64, u64) {
    let z = (x as u128) * (y as u128);
    ((z >> 64) as u64, z as u64)
}

/// Expand a 0/1 bit into an all-zero/all-one mask.
#[inline(always)]
pub(crate) const fn mask(bit: u64) -> u64 {
    0u64.wrapping_sub(bit)
}

/// `out = a + b` over equal-length word slices; returns the final carry.
#[inline]
pub(crate) fn add_into(out: &mut [u64], a: &[u64], b: &[u64]) -> u64 {
    let mut carry = 0;
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        (*o, carry) = adc(x, y, carry);
    }
    carry
}

/// `out = a - b` over equal-length word slices; returns the final borrow.
#[inline]
pub(crate) fn sub_into(out: &mut [u64], a: &[u64], b: &[u64]) -> u64 {
    let mut borrow = 0;
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        (*o, borrow) = sbb(x, y, borrow);
    }
    borrow
}

/// `x -= y` in place; returns the final borrow.
#[inline]
pub(crate) fn sub_assign(x: &mut [u64], y: &[u64]) -> u64 {
    let mut borrow = 0;
    for (o, &w) in x.iter_mut().zip(y) {
        (*o, borrow) = sbb(*o, w, borrow);
    }
    borrow
}

/// `x += y & mask` in place; returns the final carry.
#[inline]
pub(crate) fn add_masked(x: &mut [u64], y: &[u64], mask: u64) -> u64 {
    let mut carry = 0;
    for (o, &w) in x.iter_mut().zip(y) {
        (*o, carry) = adc(*o, w & mask, carry);
    }
    carry
}

/// Exchange `x` and `y` when `mask` is all ones, leave them untouched when it is zero.  Both
/// buffers are read and written in full either way.
#[inline]
pub(crate) fn cswap(x: &mut [u64], y: &mut [u64], mask: u64) {
    for (a, b) in x.iter_mut().zip(y.iter_mut()) {
        let t = mask & (*a ^ *b);
        *a ^= t;
        *b ^= t;
    }
}

/// Three-word running accumulator for product-scanning (column-wise) multiplication and
/// reduction. The low word is emitted at the end of each column, and the two upper words
/// become the carry into the next column.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Accumulator {
    lo: u64,
    mid: u64,
    hi: u64,
}

impl Accumulator {
    /// Accumulate the product `x * y`.
    #[inline(always)]
    pub(crate) fn mac(&mut self, x: u64, y: u64) {
        let (hi, lo) = mul(x, y);
        let (lo, carry) = adc(self.lo, lo, 0);
        let (mid, carry) = adc(self.mid, hi, carry);
        self.lo = lo;
        self.mid = mid;
        self.hi = self.hi.wrapping_add(carry);
    }

    /// Accumulate a single word.
    #[inline(always)]
    pub(crate) fn add(&mut self, x: u64) {
        let (lo, carry) = adc(self.lo, x, 0);
        let (mid, carry) = adc(self.mid, 0, carry);
        self.lo = lo;
        self.mid = mid;
        self.hi = self.hi.wrapping_add(carry);
    }

    /// The current low word.
    #[inline(always)]
    pub(crate) fn low(&self) -> u64 {
        self.lo
    }

    /// Emit the low word and shift the accumulator down by one word.
    #[inline(always)]
    pub(crate) fn shift(&mut self) -> u64 {
        let out = self.lo;
        self.lo = self.mid;
        self.mid = self.hi;
        self.hi = 0;
        out
    }
}
