//! Arithmetic with overflow promotion.
//!
//! Fixed-width operands use overflow-reporting machine arithmetic; when it
//! reports overflow the operands are widened and the operation is redone
//! at arbitrary precision. Any big-integer operand forces the big path.

use bigint::{BigIntError, BigInteger};
use log::debug;

use crate::constants::FIXED_MAX;
use crate::error::IntegerError;
use crate::integer::Integer;

// ============================================================================
// Overflow-reporting fixed-width helpers
// ============================================================================

/// `a + b`, or `None` on overflow.
#[inline]
pub fn addition_overflow(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}

/// `a - b`, or `None` on overflow.
#[inline]
pub fn subtraction_overflow(a: i64, b: i64) -> Option<i64> {
    a.checked_sub(b)
}

/// `a * b`, or `None` on overflow.
#[inline]
pub fn multiplication_overflow(a: i64, b: i64) -> Option<i64> {
    a.checked_mul(b)
}

// ============================================================================
// Compound operations
// ============================================================================

impl Integer {
    /// Shared shape of `+=`, `-=` and `*=`.
    fn apply(
        &mut self,
        rhs: &Integer,
        name: &str,
        fixed: fn(i64, i64) -> Option<i64>,
        big: fn(&mut BigInteger, &BigInteger),
    ) {
        let widened = match (&mut *self, rhs) {
            (Integer::Fixed(a), Integer::Fixed(b)) => match fixed(*a, *b) {
                Some(value) => {
                    *a = value;
                    return;
                }
                None => {
                    debug!("{name} overflowed i64 ({a}, {b}), promoting");
                    let mut wide = BigInteger::from(*a);
                    big(&mut wide, &BigInteger::from(*b));
                    wide
                }
            },
            (Integer::Fixed(a), Integer::Big(b)) => {
                let mut wide = BigInteger::from(*a);
                big(&mut wide, b);
                wide
            }
            (Integer::Big(a), Integer::Fixed(b)) => {
                big(a, &BigInteger::from(*b));
                return;
            }
            (Integer::Big(a), Integer::Big(b)) => {
                big(a, b);
                return;
            }
        };
        *self = Integer::Big(widened);
    }

    /// self += rhs
    pub fn add_in_place(&mut self, rhs: &Integer) {
        self.apply(rhs, "add", addition_overflow, BigInteger::add_in_place);
    }

    /// self -= rhs
    pub fn sub_in_place(&mut self, rhs: &Integer) {
        self.apply(rhs, "sub", subtraction_overflow, BigInteger::sub_in_place);
    }

    /// self *= rhs
    pub fn mul_in_place(&mut self, rhs: &Integer) {
        self.apply(rhs, "mul", multiplication_overflow, BigInteger::mul_in_place);
    }

    /// Truncating quotient.
    ///
    /// `i64::MIN / -1` is the one fixed-width overflow; it yields
    /// `i64::MAX + 1` in big-integer mode.
    ///
    /// ```
    /// use integer::{BigIntError, Integer, IntegerError};
    ///
    /// assert_eq!(Integer::from(7).try_div(&Integer::from(-2)).unwrap(), -3);
    ///
    /// let q = Integer::from(i64::MIN).try_div(&Integer::from(-1)).unwrap();
    /// assert!(q.is_big());
    /// assert_eq!(q.to_string(), "9223372036854775808");
    ///
    /// assert_eq!(
    ///     Integer::from(1).try_div(&Integer::from(0)),
    ///     Err(IntegerError::Arithmetic(BigIntError::DivisionByZero))
    /// );
    /// ```
    pub fn try_div(&self, rhs: &Integer) -> Result<Integer, IntegerError> {
        match (self, rhs) {
            (Integer::Fixed(_), Integer::Fixed(0)) => Err(BigIntError::DivisionByZero.into()),
            (Integer::Fixed(a), Integer::Fixed(b)) => match a.checked_div(*b) {
                Some(quotient) => Ok(Integer::Fixed(quotient)),
                None => {
                    debug!("div overflowed i64 ({a}, {b}), promoting");
                    Ok(Integer::Big(&*FIXED_MAX + 1))
                }
            },
            (Integer::Fixed(a), Integer::Big(b)) => {
                Ok(Integer::Big(BigInteger::from(*a).try_div(b)?))
            }
            (Integer::Big(a), Integer::Fixed(b)) => {
                Ok(Integer::Big(a.try_div(&BigInteger::from(*b))?))
            }
            (Integer::Big(a), Integer::Big(b)) => Ok(Integer::Big(a.try_div(b)?)),
        }
    }

    /// Truncating remainder, carrying the dividend's sign.
    pub fn try_rem(&self, rhs: &Integer) -> Result<Integer, IntegerError> {
        match (self, rhs) {
            (Integer::Fixed(_), Integer::Fixed(0)) => Err(BigIntError::DivisionByZero.into()),
            // `i64::MIN % -1` is mathematically 0; wrapping_rem returns that without trapping.
            (Integer::Fixed(a), Integer::Fixed(b)) => Ok(Integer::Fixed(a.wrapping_rem(*b))),
            (Integer::Fixed(a), Integer::Big(b)) => {
                Ok(Integer::Big(BigInteger::from(*a).try_rem(b)?))
            }
            (Integer::Big(a), Integer::Fixed(b)) => {
                Ok(Integer::Big(a.try_rem(&BigInteger::from(*b))?))
            }
            (Integer::Big(a), Integer::Big(b)) => Ok(Integer::Big(a.try_rem(b)?)),
        }
    }

    /// Truncating division by two in the current mode.
    fn halve(&mut self) {
        match self {
            Integer::Fixed(value) => *value /= 2,
            Integer::Big(value) => *value = value.shr_pow2(1),
        }
    }

    /// Multiply by two `count` times. A count of zero or less does nothing.
    pub fn shl_in_place(&mut self, count: &Integer) {
        let two = Integer::Fixed(2);
        let mut i = Integer::Fixed(0);
        while &i < count {
            self.mul_in_place(&two);
            i.increment();
        }
    }

    /// Truncating division by two, `count` times. A count of zero or less
    /// does nothing.
    pub fn shr_in_place(&mut self, count: &Integer) {
        let mut i = Integer::Fixed(0);
        while &i < count {
            self.halve();
            i.increment();
        }
    }
}

// ============================================================================
// Increment / decrement
// ============================================================================

impl Integer {
    /// Prefix increment. Promotes first when the value is `i64::MAX`.
    pub fn increment(&mut self) -> &mut Self {
        let next = match self {
            Integer::Fixed(value) => value.checked_add(1),
            Integer::Big(_) => None,
        };
        match next {
            Some(next) => *self = Integer::Fixed(next),
            None => {
                self.promote();
                if let Integer::Big(value) = self {
                    value.increment();
                }
            }
        }
        self
    }

    /// Prefix decrement. Promotes first when the value is `i64::MIN`.
    pub fn decrement(&mut self) -> &mut Self {
        let next = match self {
            Integer::Fixed(value) => value.checked_sub(1),
            Integer::Big(_) => None,
        };
        match next {
            Some(next) => *self = Integer::Fixed(next),
            None => {
                self.promote();
                if let Integer::Big(value) = self {
                    value.decrement();
                }
            }
        }
        self
    }

    /// Postfix increment: returns the value from before.
    pub fn post_increment(&mut self) -> Self {
        let old = self.clone();
        self.increment();
        old
    }

    /// Postfix decrement: returns the value from before.
    pub fn post_decrement(&mut self) -> Self {
        let old = self.clone();
        self.decrement();
        old
    }
}

// ============================================================================
// Tests
// ============================================================================
