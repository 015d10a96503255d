//! Schoolbook arithmetic on the digit vectors.
//!
//! The compound (in-place) forms live here; the `std::ops` operators in
//! `ops.rs` copy the left operand and delegate to them.

use std::cmp::Ordering;

use log::trace;

use crate::big_integer::BigInteger;
use crate::constants::{ONE, TWO};
use crate::error::BigIntError;

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (digit, carry) = a + b + carry_in
#[inline(always)]
const fn adc(a: u8, b: u8, carry: u8) -> (u8, u8) {
    let sum = a + b + carry;
    (sum % 10, sum / 10)
}

/// Subtract with borrow: (digit, borrow) = a - b - borrow_in
#[inline(always)]
const fn sbb(a: u8, b: u8, borrow: u8) -> (u8, u8) {
    let sub = b + borrow;
    if a >= sub {
        (a - sub, 0)
    } else {
        (a + 10 - sub, 1)
    }
}

/// Multiply-accumulate: (digit, carry) = a * b + c + carry_in
#[inline(always)]
const fn mac(a: u8, b: u8, c: u8, carry: u8) -> (u8, u8) {
    let tmp = a * b + c + carry;
    (tmp % 10, tmp / 10)
}

// ============================================================================
// Magnitude arithmetic
// ============================================================================

impl BigInteger {
    /// |self| += |other|, keeping the sign of `self`.
    fn add_magnitude(&mut self, other: &Self) {
        let n = self.digits.len().max(other.digits.len());
        let mut result = Vec::with_capacity(n + 1);
        let mut carry = 0u8;
        for i in 0..n {
            let a = self.digits.get(i).copied().unwrap_or(0);
            let b = other.digits.get(i).copied().unwrap_or(0);
            let (digit, c) = adc(a, b, carry);
            result.push(digit);
            carry = c;
        }
        if carry > 0 {
            result.push(carry);
        }
        self.digits = result;
    }

    /// |self| -= |other|, keeping the sign of `self`. Requires |self| >= |other|.
    fn sub_magnitude(&mut self, other: &Self) {
        debug_assert_ne!(Self::compare_absolute(self, other), Ordering::Less);
        let mut borrow = 0u8;
        for (i, digit) in self.digits.iter_mut().enumerate() {
            if i >= other.digits.len() && borrow == 0 {
                break;
            }
            let b = other.digits.get(i).copied().unwrap_or(0);
            let (d, br) = sbb(*digit, b, borrow);
            *digit = d;
            borrow = br;
        }
        self.normalize();
    }
}

// ============================================================================
// Signed arithmetic
// ============================================================================

impl BigInteger {
    /// self += other
    pub fn add_in_place(&mut self, other: &Self) {
        if self.negative == other.negative {
            self.add_magnitude(other);
        } else if Self::compare_absolute(self, other) != Ordering::Less {
            self.sub_magnitude(other);
        } else {
            // The larger magnitude decides the sign.
            let mut result = other.clone();
            result.sub_magnitude(self);
            *self = result;
        }
    }

    /// self -= other
    pub fn sub_in_place(&mut self, other: &Self) {
        if self.negative != other.negative {
            self.add_magnitude(other);
        } else if Self::compare_absolute(self, other) == Ordering::Less {
            let mut result = other.clone();
            result.sub_magnitude(self);
            result.negative = !result.negative;
            *self = result;
        } else {
            self.sub_magnitude(other);
        }
    }

    /// self *= other (grid multiplication).
    pub fn mul_in_place(&mut self, other: &Self) {
        let n = self.digits.len();
        let m = other.digits.len();
        let mut wide = vec![0u8; n + m];
        for (i, &a) in self.digits.iter().enumerate() {
            let mut carry = 0u8;
            for (j, &b) in other.digits.iter().enumerate() {
                let (lo, hi) = mac(a, b, wide[i + j], carry);
                wide[i + j] = lo;
                carry = hi;
            }
            wide[i + m] = carry;
        }
        self.negative ^= other.negative;
        self.digits = wide;
        self.normalize();
    }

    /// Truncating division returning `(quotient, remainder)`.
    ///
    /// The quotient's sign is the XOR of the operand signs and the
    /// remainder takes the dividend's sign, so
    /// `self == quotient * divisor + remainder` always holds.
    ///
    /// ```
    /// use bigint::{BigInteger, BigIntError};
    ///
    /// let (q, r) = BigInteger::from(-7).div_rem(&BigInteger::from(2)).unwrap();
    /// assert_eq!(q, BigInteger::from(-3));
    /// assert_eq!(r, BigInteger::from(-1));
    ///
    /// let err = BigInteger::from(1).div_rem(&BigInteger::zero()).unwrap_err();
    /// assert_eq!(err, BigIntError::DivisionByZero);
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), BigIntError> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    /// Quotient of truncating division.
    pub fn try_div(&self, divisor: &Self) -> Result<Self, BigIntError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of truncating division (sign of the dividend).
    pub fn try_rem(&self, divisor: &Self) -> Result<Self, BigIntError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Division by repeated subtraction of power-of-two multiples of the
    /// divisor. `divisor` must be non-zero.
    pub(crate) fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero());
        if self.is_zero() {
            return (Self::zero(), Self::zero());
        }

        let divisor_abs = divisor.abs();
        let mut quotient = Self::zero();
        let mut remainder = self.abs();
        let mut rounds = 0usize;

        while remainder >= divisor_abs {
            let mut current_divisor = divisor_abs.clone();
            let mut current_quotient = Self::one();
            loop {
                let mut doubled = current_divisor.clone();
                doubled.add_magnitude(&current_divisor);
                if doubled > remainder {
                    break;
                }
                current_divisor = doubled;
                let step = current_quotient.clone();
                current_quotient.add_magnitude(&step);
            }
            remainder.sub_magnitude(&current_divisor);
            quotient.add_magnitude(&current_quotient);
            rounds += 1;
        }
        trace!(
            "div_rem: {}-digit dividend by {}-digit divisor in {} rounds",
            self.digits.len(),
            divisor.digits.len(),
            rounds
        );

        quotient.negative = self.negative != divisor.negative;
        quotient.normalize();
        remainder.negative = self.negative;
        remainder.normalize();
        (quotient, remainder)
    }

    /// Raise to a non-negative power by square-and-multiply.
    ///
    /// ```
    /// use bigint::BigInteger;
    ///
    /// assert_eq!(BigInteger::from(2).pow(100).to_string(), "1267650600228229401496703205376");
    /// assert_eq!(BigInteger::from(-3).pow(3), BigInteger::from(-27));
    /// assert_eq!(BigInteger::from(0).pow(0), BigInteger::one());
    /// ```
    pub fn pow(&self, mut exponent: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result.mul_in_place(&base);
            }
            exponent >>= 1;
            if exponent > 0 {
                let square = base.clone();
                base.mul_in_place(&square);
            }
        }
        result
    }
}

// ============================================================================
// Increment / decrement
// ============================================================================

impl BigInteger {
    /// Prefix increment: add one and return the updated value.
    pub fn increment(&mut self) -> &mut Self {
        self.add_in_place(&ONE);
        self
    }

    /// Prefix decrement: subtract one and return the updated value.
    pub fn decrement(&mut self) -> &mut Self {
        self.sub_in_place(&ONE);
        self
    }

    /// Postfix increment: add one and return the value from before.
    pub fn post_increment(&mut self) -> Self {
        let old = self.clone();
        self.increment();
        old
    }

    /// Postfix decrement: subtract one and return the value from before.
    pub fn post_decrement(&mut self) -> Self {
        let old = self.clone();
        self.decrement();
        old
    }
}

// ============================================================================
// Shifts
// ============================================================================

impl BigInteger {
    /// Multiply by two `count` times. A count of zero or less does nothing.
    ///
    /// Cost is linear in `count`; [`BigInteger::shl_pow2`] gives the same
    /// value with one multiplication.
    pub fn shl_in_place(&mut self, count: &Self) {
        let mut i = Self::zero();
        while &i < count {
            self.mul_in_place(&TWO);
            i.increment();
        }
        trace!("shl: doubled {i} times");
    }

    /// Truncating division by two, `count` times. A count of zero or less
    /// does nothing.
    pub fn shr_in_place(&mut self, count: &Self) {
        let mut i = Self::zero();
        while &i < count {
            *self = self.div_rem_nonzero(&TWO).0;
            i.increment();
        }
        trace!("shr: halved {i} times");
    }

    /// `self * 2^count`, equal to shifting left by `count` one step at a time.
    pub fn shl_pow2(&self, count: u64) -> Self {
        let mut result = self.clone();
        result.mul_in_place(&TWO.pow(count));
        result
    }

    /// `self / 2^count` truncated toward zero, equal to shifting right by
    /// `count` one step at a time.
    pub fn shr_pow2(&self, count: u64) -> Self {
        self.div_rem_nonzero(&TWO.pow(count)).0
    }
}

// ============================================================================
// Tests
// ============================================================================
